//! Communication mode registry.
//!
//! Compiled-in constant table keyed by mode number. The registry renders the
//! selectable mode set in a UI-agnostic form and resolves a chosen mode to
//! the baud rate the decode request needs.

use serde::Serialize;

/// One selectable communication mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModeDescriptor {
    pub number: u32,
    pub modulation: &'static str,
    pub baud_rate: u32,
    pub protocol: &'static str,
}

const MODES: &[ModeDescriptor] = &[
    ModeDescriptor {
        number: 0,
        modulation: "AFSK",
        baud_rate: 1200,
        protocol: "AX.25",
    },
    ModeDescriptor {
        number: 1,
        modulation: "GMSK",
        baud_rate: 9600,
        protocol: "AX.25",
    },
    ModeDescriptor {
        number: 3,
        modulation: "GMSK",
        baud_rate: 13653,
        protocol: "AX.25",
    },
];

/// All modes, in presentation order.
pub fn all() -> &'static [ModeDescriptor] {
    MODES
}

/// Resolve a mode number.
pub fn by_number(number: u32) -> Option<&'static ModeDescriptor> {
    MODES.iter().find(|mode| mode.number == number)
}

#[cfg(test)]
mod tests {
    use super::{all, by_number};

    #[test]
    fn registry_lists_modes_in_order() {
        let numbers: Vec<u32> = all().iter().map(|mode| mode.number).collect();
        assert_eq!(numbers, vec![0, 1, 3]);
    }

    #[test]
    fn lookup_resolves_baud_rate() {
        assert_eq!(by_number(0).unwrap().baud_rate, 1200);
        assert_eq!(by_number(1).unwrap().baud_rate, 9600);
        assert_eq!(by_number(3).unwrap().baud_rate, 13653);
        assert!(by_number(2).is_none());
    }

    #[test]
    fn every_mode_is_ax25() {
        assert!(all().iter().all(|mode| mode.protocol == "AX.25"));
    }
}
