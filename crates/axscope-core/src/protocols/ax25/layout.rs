pub const HEX_CHARS_PER_BYTE: usize = 2;
pub const CALLSIGN_BYTES: usize = 6;

/// Destination address begins at frame byte 0.
pub const DEST_HEX_OFFSET: usize = 0;
/// Source address begins at frame byte 7, past the destination callsign and
/// its SSID byte.
pub const SOURCE_HEX_OFFSET: usize = 14;

/// Address bytes store the character shifted left one bit.
pub const ADDRESS_CHAR_SHIFT: u32 = 1;
