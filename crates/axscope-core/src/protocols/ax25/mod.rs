//! AX.25 address-field decoding.
//!
//! An AX.25 frame opens with a 14-byte address field: 7 bytes destination,
//! 7 bytes source. The first six bytes of each hold the callsign with the
//! printable character shifted left one bit (the low bit is reserved for
//! control flags); the seventh is the SSID byte and is skipped here.

pub mod layout;
pub mod parser;
pub mod reader;

pub use parser::{AddressField, extract_callsign};
