//! HRGJIS character decoding.
//!
//! The downlink alphabet is a single-byte variant of Shift-JIS: printable
//! ASCII passes through, a small half-width range maps directly, and the
//! rest of the upper range is re-expanded to double-byte Shift-JIS so the
//! reduced 8-bit alphabet renders as full Japanese text.

use encoding_rs::SHIFT_JIS;

/// Returned for every byte outside the mapped ranges.
pub const PLACEHOLDER: char = '.';

/// Offset re-expanding bytes 166..=248 into the double-byte hiragana block
/// (0x829F..=0x82F1 in Shift-JIS).
const KANA_EXPANSION_OFFSET: u16 = 33273;

/// Decode one HRGJIS byte. Total: every input maps to exactly one char.
///
/// # Examples
/// ```
/// use axscope_core::charset::decode;
///
/// assert_eq!(decode(32), ' ');
/// assert_eq!(decode(b'A'), 'A');
/// assert_eq!(decode(166), 'ぁ');
/// assert_eq!(decode(0), '.');
/// ```
pub fn decode(byte: u8) -> char {
    match byte {
        32 => ' ',
        33..=126 | 161..=165 => decode_sjis(&[byte]),
        166..=248 => {
            let code = byte as u16 + KANA_EXPANSION_OFFSET;
            decode_sjis(&code.to_be_bytes())
        }
        _ => PLACEHOLDER,
    }
}

/// Decode an even-length hex line into its HRGJIS character string.
///
/// Invalid pairs and a dangling nibble decode to the placeholder, so the
/// output length always equals the number of (whole or partial) byte
/// positions in the line.
pub fn decode_hex_line(hex: &str) -> String {
    let mut out = String::with_capacity(hex.len() / 2);
    for pair in hex.as_bytes().chunks(2) {
        let value = std::str::from_utf8(pair)
            .ok()
            .filter(|pair| pair.len() == 2)
            .and_then(|pair| u8::from_str_radix(pair, 16).ok());
        out.push(match value {
            Some(byte) => decode(byte),
            None => PLACEHOLDER,
        });
    }
    out
}

fn decode_sjis(bytes: &[u8]) -> char {
    let (text, _) = SHIFT_JIS.decode_without_bom_handling(bytes);
    text.chars().next().unwrap_or(PLACEHOLDER)
}

#[cfg(test)]
mod tests {
    use super::{PLACEHOLDER, decode, decode_hex_line};

    #[test]
    fn decode_is_total_and_deterministic() {
        for byte in 0..=u8::MAX {
            let first = decode(byte);
            let second = decode(byte);
            assert_eq!(first, second, "byte {byte}");
        }
    }

    #[test]
    fn space_maps_to_space() {
        assert_eq!(decode(32), ' ');
    }

    #[test]
    fn ascii_range_passes_through() {
        assert_eq!(decode(33), '!');
        assert_eq!(decode(b'A'), 'A');
        assert_eq!(decode(b'z'), 'z');
        assert_eq!(decode(126), '~');
    }

    #[test]
    fn halfwidth_range_maps_directly() {
        assert_eq!(decode(161), '｡');
        assert_eq!(decode(162), '｢');
        assert_eq!(decode(163), '｣');
        assert_eq!(decode(164), '､');
        assert_eq!(decode(165), '･');
    }

    #[test]
    fn expanded_range_maps_to_hiragana() {
        assert_eq!(decode(166), 'ぁ');
        assert_eq!(decode(177), 'が');
        assert_eq!(decode(248), 'ん');
    }

    #[test]
    fn unmapped_bytes_yield_placeholder() {
        for byte in (0..32).chain(127..161).chain(249..=255) {
            assert_eq!(decode(byte as u8), PLACEHOLDER, "byte {byte}");
        }
    }

    #[test]
    fn hex_line_decodes_per_byte() {
        // 0x48 'H', 0x20 ' ', 0xB8 'こ'
        assert_eq!(decode_hex_line("4820B8"), "H こ");
        assert_eq!(decode_hex_line(""), "");
    }

    #[test]
    fn hex_line_tolerates_malformed_input() {
        assert_eq!(decode_hex_line("GG41"), ".A");
        // dangling nibble
        assert_eq!(decode_hex_line("414"), "A.");
    }
}
