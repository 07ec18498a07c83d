//! Coordinate-aligned hex/char cell model.
//!
//! Both presentation views address cells by `(packet_index, byte_index)`,
//! never by scanning rendered structure, so they stay correct under
//! reordering, filtering, or partial rendering. Highlight state is mirrored
//! between the two views and is never asymmetric.

use serde::Serialize;

use crate::Packet;
use crate::charset;

/// Which of the two paired views a cell lookup addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    Hex,
    Char,
}

/// One byte of one packet as shown in a view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ByteCell {
    pub packet_index: usize,
    pub byte_index: usize,
    /// High hex digit of the byte.
    pub hex_high: char,
    /// Low hex digit of the byte.
    pub hex_low: char,
    /// HRGJIS rendering of the byte.
    pub decoded: char,
    pub highlighted: bool,
}

/// Paired, index-addressable cell sequences for the hex and char views.
#[derive(Debug, Default)]
pub struct AlignmentModel {
    hex_cells: Vec<Vec<ByteCell>>,
    char_cells: Vec<Vec<ByteCell>>,
}

impl AlignmentModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the model for a full decode cycle's packets.
    pub fn from_packets(packets: &[Packet]) -> Self {
        let mut model = Self::new();
        for packet in packets {
            model.push_packet(&packet.hex, &packet.chars);
        }
        model
    }

    /// Append one packet's paired rows.
    ///
    /// `hex` and `chars` must come from the same packet; every decoded
    /// character pairs with the hex digit pair at twice its index.
    pub fn push_packet(&mut self, hex: &str, chars: &str) {
        let packet_index = self.hex_cells.len();
        let digits: Vec<char> = hex.chars().collect();
        let row: Vec<ByteCell> = chars
            .chars()
            .enumerate()
            .map(|(byte_index, decoded)| ByteCell {
                packet_index,
                byte_index,
                hex_high: digits
                    .get(2 * byte_index)
                    .copied()
                    .unwrap_or(charset::PLACEHOLDER),
                hex_low: digits
                    .get(2 * byte_index + 1)
                    .copied()
                    .unwrap_or(charset::PLACEHOLDER),
                decoded,
                highlighted: false,
            })
            .collect();

        self.hex_cells.push(row.clone());
        self.char_cells.push(row);
    }

    /// Set or clear the mirrored highlight flag at a coordinate.
    ///
    /// Out-of-range coordinates are a no-op; the flag is never toggled on
    /// one view without the other.
    pub fn set_highlight(&mut self, packet_index: usize, byte_index: usize, on: bool) {
        let in_range = self
            .hex_cells
            .get(packet_index)
            .is_some_and(|row| byte_index < row.len());
        if !in_range {
            return;
        }
        self.hex_cells[packet_index][byte_index].highlighted = on;
        self.char_cells[packet_index][byte_index].highlighted = on;
    }

    /// Look up one cell by view and coordinate.
    pub fn cell_at(&self, view: View, packet_index: usize, byte_index: usize) -> Option<&ByteCell> {
        let cells = match view {
            View::Hex => &self.hex_cells,
            View::Char => &self.char_cells,
        };
        cells.get(packet_index)?.get(byte_index)
    }

    pub fn packet_count(&self) -> usize {
        self.hex_cells.len()
    }

    pub fn byte_count(&self, packet_index: usize) -> Option<usize> {
        self.hex_cells.get(packet_index).map(Vec::len)
    }
}
