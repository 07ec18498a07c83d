//! Protocol decoding modules.
//!
//! Each protocol follows a layered structure:
//! - `layout`: byte offsets and ranges (source of truth)
//! - `reader`: safe byte access over the packet hex string
//! - `parser`: domain-level decoding (no direct indexing)
//!
//! Parsers are pure and contain no I/O; the service and pipeline layers
//! handle file access and aggregation.

pub mod ax25;
