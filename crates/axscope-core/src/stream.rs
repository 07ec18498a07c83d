//! Packet-stream splitting and validation.
//!
//! The decode service delivers one packet per line. Hex and character
//! streams split identically; their line-for-line alignment is guaranteed by
//! the originating decode operation and is not re-checked here (the CSV
//! export does check, as the one place both streams meet again).

use thiserror::Error;

/// Errors from hex-stream validation at pipeline entry.
#[derive(Debug, Error)]
pub enum StreamError {
    #[error("packet {packet}: odd hex length {length}")]
    OddLength { packet: usize, length: usize },
    #[error("packet {packet}: invalid hex digit at offset {offset}")]
    InvalidHexDigit { packet: usize, offset: usize },
}

/// Split a raw multi-packet blob into per-packet lines.
///
/// Blank lines are dropped, order is preserved, nothing is deduplicated.
///
/// # Examples
/// ```
/// use axscope_core::stream::split_packet_lines;
///
/// assert_eq!(split_packet_lines("AABB\n\nCCDD\n"), vec!["AABB", "CCDD"]);
/// ```
pub fn split_packet_lines(raw: &str) -> Vec<&str> {
    raw.lines().filter(|line| !line.is_empty()).collect()
}

/// Check that one packet line is well-formed even-length hex.
pub fn validate_hex_line(packet: usize, line: &str) -> Result<(), StreamError> {
    if line.len() % 2 != 0 {
        return Err(StreamError::OddLength {
            packet,
            length: line.len(),
        });
    }
    if let Some(offset) = line.bytes().position(|b| !b.is_ascii_hexdigit()) {
        return Err(StreamError::InvalidHexDigit { packet, offset });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{StreamError, split_packet_lines, validate_hex_line};

    #[test]
    fn split_drops_blank_lines_and_keeps_order() {
        assert_eq!(split_packet_lines("AABB\n\nCCDD\n"), vec!["AABB", "CCDD"]);
        assert_eq!(split_packet_lines(""), Vec::<&str>::new());
        assert_eq!(split_packet_lines("\n\n"), Vec::<&str>::new());
    }

    #[test]
    fn split_handles_crlf() {
        assert_eq!(split_packet_lines("AABB\r\nCCDD\r\n"), vec!["AABB", "CCDD"]);
    }

    #[test]
    fn split_preserves_duplicates() {
        assert_eq!(split_packet_lines("AABB\nAABB"), vec!["AABB", "AABB"]);
    }

    #[test]
    fn validate_accepts_well_formed_hex() {
        assert!(validate_hex_line(0, "82A0a4").is_ok());
        assert!(validate_hex_line(0, "").is_ok());
    }

    #[test]
    fn validate_rejects_odd_length() {
        let err = validate_hex_line(3, "AAB").unwrap_err();
        assert!(matches!(
            err,
            StreamError::OddLength { packet: 3, length: 3 }
        ));
    }

    #[test]
    fn validate_rejects_non_hex() {
        let err = validate_hex_line(1, "AAGB").unwrap_err();
        assert!(matches!(
            err,
            StreamError::InvalidHexDigit { packet: 1, offset: 2 }
        ));
    }
}
