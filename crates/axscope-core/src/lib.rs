//! axscope core library for inspecting demodulated AX.25 packet streams.
//!
//! This crate implements the decoding pipeline used by the CLI: a decode
//! service delivers a newline-delimited hex dump (one line per packet), the
//! pipeline derives the HRGJIS character rendering and the AX.25 address
//! callsigns for every packet, and the results feed the alignment model
//! (paired hex/char cell views), the CSV export, and the alert classifier.
//! All decoding is pure and side-effect free; file access is isolated in the
//! `service` module.
//!
//! Invariants:
//! - A packet's hex string always has exactly twice as many characters as
//!   its decoded character string.
//! - Callsigns are always six decoded characters, trailing spaces included.
//! - Highlight state in the alignment model is mirrored between the hex and
//!   char views, addressed by `(packet_index, byte_index)`.
//!
//! # Examples
//! ```
//! use axscope_core::decode::decode_hex_stream;
//!
//! let packets = decode_hex_stream("82A0A4A64040609C6086829898E103F0\n")?;
//! assert_eq!(packets.len(), 1);
//! assert_eq!(packets[0].dest_callsign, "APRS  ");
//! assert_eq!(packets[0].source_callsign, "N0CALL");
//! # Ok::<(), axscope_core::stream::StreamError>(())
//! ```

use serde::{Deserialize, Serialize};

pub mod align;
pub mod alert;
pub mod charset;
pub mod decode;
pub mod export;
pub mod modes;
pub mod protocols;
pub mod service;
pub mod stream;

pub use align::{AlignmentModel, ByteCell, View};
pub use alert::{Alert, AlertDomain, AlertManager, LocalizedText, Severity};
pub use decode::{DecodeCycle, decode_hex_stream};
pub use modes::ModeDescriptor;
pub use service::{DecodeRequest, DecodeService, HexFileService, ServiceError};

/// Current report schema version.
pub const REPORT_VERSION: u32 = 1;

/// One decoded AX.25 packet.
///
/// `hex` and `chars` are paired byte-for-byte: `hex` holds two characters
/// per byte, `chars` one decoded character per byte. Both are derived once
/// from the raw packet line and immutable afterwards.
///
/// # Examples
/// ```
/// use axscope_core::Packet;
///
/// let packet = Packet {
///     hex: "AABB".to_string(),
///     chars: "..".to_string(),
///     dest_callsign: "APRS  ".to_string(),
///     source_callsign: "N0CALL".to_string(),
/// };
/// assert_eq!(packet.hex.len(), 2 * packet.chars.chars().count());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Packet {
    /// Even-length hex rendering of the packet bytes.
    pub hex: String,
    /// HRGJIS character rendering, one character per byte.
    pub chars: String,
    /// Destination callsign from address bytes 0-5.
    pub dest_callsign: String,
    /// Source callsign from address bytes 7-12.
    pub source_callsign: String,
}

impl Packet {
    /// Number of bytes in the packet.
    pub fn byte_count(&self) -> usize {
        self.hex.len() / 2
    }
}

/// Tool metadata embedded in reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInfo {
    /// Tool name (e.g., "axscope").
    pub name: String,
    /// Tool version (semver).
    pub version: String,
}

/// Input metadata embedded in reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputInfo {
    /// Input path as provided to the decoder.
    pub path: String,
    /// Selected communication mode number.
    pub mode: u32,
    /// Baud rate resolved from the mode registry.
    pub baudrate: u32,
}

/// Decode report: the full per-packet result set for one decode cycle.
///
/// # Examples
/// ```
/// use axscope_core::make_report;
///
/// let report = make_report("beacon.hex", 0, 1200, Vec::new());
/// assert_eq!(report.report_version, axscope_core::REPORT_VERSION);
/// assert_eq!(report.packets_total, 0);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecodeReport {
    /// Report schema version (not the binary version).
    pub report_version: u32,
    /// Tool identification metadata.
    pub tool: ToolInfo,
    /// Input metadata.
    pub input: InputInfo,
    /// Total packet count.
    pub packets_total: usize,
    /// Decoded packets in capture order.
    pub packets: Vec<Packet>,
}

/// Build a report for one decode cycle's results.
pub fn make_report(input_path: &str, mode: u32, baudrate: u32, packets: Vec<Packet>) -> DecodeReport {
    DecodeReport {
        report_version: REPORT_VERSION,
        tool: ToolInfo {
            name: "axscope".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        input: InputInfo {
            path: input_path.to_string(),
            mode,
            baudrate,
        },
        packets_total: packets.len(),
        packets,
    }
}
