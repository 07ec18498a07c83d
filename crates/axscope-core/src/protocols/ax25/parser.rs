use crate::charset;

use super::layout;
use super::reader::HexReader;

/// Which of the two AX.25 address fields to extract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressField {
    Dest,
    Source,
}

/// Extract a callsign from a packet's hex string.
///
/// Always returns exactly six decoded characters: each address byte is
/// shifted right one bit and decoded through HRGJIS. Absent or invalid
/// pairs decode to the placeholder, and trailing spaces are preserved (an
/// absent callsign character still decodes to a space).
///
/// # Examples
/// ```
/// use axscope_core::protocols::ax25::{AddressField, extract_callsign};
///
/// let hex = "82A0A4A64040609C6086829898E103F0";
/// assert_eq!(extract_callsign(hex, AddressField::Dest), "APRS  ");
/// assert_eq!(extract_callsign(hex, AddressField::Source), "N0CALL");
/// ```
pub fn extract_callsign(packet_hex: &str, field: AddressField) -> String {
    let reader = HexReader::new(packet_hex);
    let base = match field {
        AddressField::Dest => layout::DEST_HEX_OFFSET,
        AddressField::Source => layout::SOURCE_HEX_OFFSET,
    };

    let mut callsign = String::with_capacity(layout::CALLSIGN_BYTES);
    for index in 0..layout::CALLSIGN_BYTES {
        let offset = base + index * layout::HEX_CHARS_PER_BYTE;
        callsign.push(match reader.read_byte(offset) {
            Some(byte) => charset::decode(byte >> layout::ADDRESS_CHAR_SHIFT),
            None => charset::PLACEHOLDER,
        });
    }
    callsign
}

#[cfg(test)]
mod tests {
    use super::{AddressField, extract_callsign};

    // "APRS  " / "N0CALL", control + PID, payload "Hello"
    const FRAME: &str = "82A0A4A64040609C6086829898E103F048656C6C6F";

    #[test]
    fn extract_dest_and_source() {
        assert_eq!(extract_callsign(FRAME, AddressField::Dest), "APRS  ");
        assert_eq!(extract_callsign(FRAME, AddressField::Source), "N0CALL");
    }

    #[test]
    fn callsign_length_is_independent_of_payload() {
        let header_only = &FRAME[..28];
        assert_eq!(
            extract_callsign(header_only, AddressField::Dest),
            extract_callsign(FRAME, AddressField::Dest)
        );
        assert_eq!(
            extract_callsign(header_only, AddressField::Source).chars().count(),
            6
        );
    }

    #[test]
    fn short_packet_pads_with_placeholders() {
        // only the first two destination bytes present
        let callsign = extract_callsign("82A0", AddressField::Dest);
        assert_eq!(callsign, "AP....");
        assert_eq!(extract_callsign("", AddressField::Source), "......");
    }
}
