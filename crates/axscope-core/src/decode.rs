//! Decode pipeline: raw hex stream to packets.

use crate::Packet;
use crate::charset;
use crate::protocols::ax25::{AddressField, extract_callsign};
use crate::stream::{StreamError, split_packet_lines, validate_hex_line};

/// Decode a newline-delimited hex stream into packets.
///
/// Each non-blank line becomes one packet, in order. Lines are validated as
/// even-length hex once here; everything downstream is total. A fresh call
/// produces an independently owned result set.
///
/// # Examples
/// ```
/// use axscope_core::decode::decode_hex_stream;
///
/// let packets = decode_hex_stream("4849\n\n4A4B\n")?;
/// assert_eq!(packets.len(), 2);
/// assert_eq!(packets[0].chars, "HI");
/// # Ok::<(), axscope_core::stream::StreamError>(())
/// ```
pub fn decode_hex_stream(raw: &str) -> Result<Vec<Packet>, StreamError> {
    let mut packets = Vec::new();
    for (index, line) in split_packet_lines(raw).into_iter().enumerate() {
        validate_hex_line(index, line)?;
        packets.push(Packet {
            hex: line.to_string(),
            chars: charset::decode_hex_line(line),
            dest_callsign: extract_callsign(line, AddressField::Dest),
            source_callsign: extract_callsign(line, AddressField::Source),
        });
    }
    Ok(packets)
}

/// Generation counter for decode cycles.
///
/// A new request's results supersede the previous cycle's, never merge with
/// them. Callers tag an in-flight request with `begin()` and check the tag
/// with `accept()` when the result settles; a late-arriving stale result is
/// discarded.
#[derive(Debug, Default)]
pub struct DecodeCycle {
    generation: u64,
}

impl DecodeCycle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new cycle, superseding any in-flight one.
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// Whether a settled result with this tag is still current.
    pub fn accept(&self, generation: u64) -> bool {
        generation == self.generation
    }
}
