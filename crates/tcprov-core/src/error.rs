use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Failure while fetching the archive or saving it to disk.
#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP {status}: {url}")]
    HttpStatus { status: u16, url: String },

    #[error("failed to save download: {0}")]
    Io(#[from] std::io::Error),
}

/// Failure while checking an archive against its known-good digest.
#[derive(Debug, Error)]
pub enum IntegrityError {
    #[error("checksum mismatch for {}: expected {expected}, got {actual}", .path.display())]
    ChecksumMismatch {
        path: PathBuf,
        expected: String,
        actual: String,
    },

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failure while unpacking an archive.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("failed to run {tool}: {source}")]
    Spawn {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{tool} exited with {status} while unpacking {}", .archive.display())]
    ExitStatus {
        tool: String,
        status: ExitStatus,
        archive: PathBuf,
    },
}

#[derive(Debug, Error)]
pub enum ProvisionError {
    #[error("download failed: {0}")]
    Download(#[from] DownloadError),

    #[error("integrity check failed: {0}")]
    Integrity(#[from] IntegrityError),

    #[error("extraction failed: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ProvisionError>;
