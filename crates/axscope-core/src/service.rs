//! Decode-service seam.
//!
//! The actual demodulation lives in an external collaborator; the core only
//! consumes its settled result. The seam is a trait so the CLI and tests can
//! substitute sources: `HexFileService` reads an already-captured hex dump
//! from disk. Retry and timeout policy belong to the collaborator, not here.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Protocol identifier the decode request is fixed to.
pub const PROTOCOL_AX25: &str = "ax25";

/// Raw signal carried by a transport-level failure.
pub const CONNECTION_ERROR_SIGNAL: &str = "Connection error";

/// Parameters of one decode request.
#[derive(Debug, Clone)]
pub struct DecodeRequest {
    pub path: PathBuf,
    pub protocol: &'static str,
    pub baudrate: u32,
}

impl DecodeRequest {
    pub fn ax25(path: impl Into<PathBuf>, baudrate: u32) -> Self {
        Self {
            path: path.into(),
            protocol: PROTOCOL_AX25,
            baudrate,
        }
    }
}

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Structured rejection; `message` is the collaborator's alert signal.
    #[error("decode request rejected: {message}")]
    Rejected { message: String },
    /// No response at all.
    #[error("transport failure: {0}")]
    Transport(#[from] io::Error),
}

impl ServiceError {
    /// The raw signal string to feed the alert classifier.
    pub fn alert_signal(&self) -> &str {
        match self {
            ServiceError::Rejected { message } => message,
            ServiceError::Transport(_) => CONNECTION_ERROR_SIGNAL,
        }
    }
}

/// Source of decoded packet streams.
///
/// Implementations return the newline-delimited hex body; an empty body is
/// valid and signals "no packets decoded".
pub trait DecodeService {
    fn fetch(&mut self, request: &DecodeRequest) -> Result<String, ServiceError>;
}

/// Reads an already-demodulated hex dump from disk.
pub struct HexFileService;

impl DecodeService for HexFileService {
    fn fetch(&mut self, request: &DecodeRequest) -> Result<String, ServiceError> {
        if request.protocol != PROTOCOL_AX25 {
            return Err(ServiceError::Rejected {
                message: "Invalid URL parameter: 'protocol'".to_string(),
            });
        }
        if !request.path.is_file() {
            return Err(ServiceError::Rejected {
                message: "File not found".to_string(),
            });
        }
        fs::read_to_string(&request.path).map_err(ServiceError::Transport)
    }
}

/// File-selection gate: the demodulating collaborator accepts WAVE input
/// only.
pub fn is_wave_file(path: &Path) -> bool {
    path.extension().and_then(|ext| ext.to_str()) == Some("wav")
}
