use super::layout;

/// Bounded hex-pair access over one packet's hex string.
///
/// Well-formedness of the stream is validated upstream; the reader simply
/// reports absent or non-hex pairs as `None` so callers stay total.
pub struct HexReader<'a> {
    hex: &'a str,
}

impl<'a> HexReader<'a> {
    pub fn new(hex: &'a str) -> Self {
        Self { hex }
    }

    /// Read the byte whose hex pair starts at `offset` (in hex characters).
    pub fn read_byte(&self, offset: usize) -> Option<u8> {
        let pair = self
            .hex
            .as_bytes()
            .get(offset..offset + layout::HEX_CHARS_PER_BYTE)?;
        let pair = std::str::from_utf8(pair).ok()?;
        u8::from_str_radix(pair, 16).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::HexReader;

    #[test]
    fn read_byte_ok() {
        let reader = HexReader::new("82A0");
        assert_eq!(reader.read_byte(0), Some(0x82));
        assert_eq!(reader.read_byte(2), Some(0xA0));
    }

    #[test]
    fn read_byte_out_of_range() {
        let reader = HexReader::new("82");
        assert_eq!(reader.read_byte(2), None);
        // pair straddling the end
        assert_eq!(HexReader::new("82A").read_byte(2), None);
    }

    #[test]
    fn read_byte_invalid_digit() {
        let reader = HexReader::new("8G");
        assert_eq!(reader.read_byte(0), None);
    }
}
