//! Error types for storage, asset and snapshot operations.
//!
//! None of these are fatal to an editing session. Callers in [`crate::app`]
//! log them and degrade to "skip this item" or "keep prior state".

use thiserror::Error;

/// Errors from a persistent storage backend.
#[derive(Error, Debug)]
pub enum StorageError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Atomic write could not replace the previous value
    #[error("Could not persist {key}: {source}")]
    Persist {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// Backend is not available at all (quota, disabled, ...)
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Result type alias for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors from loading or decoding assets.
#[derive(Error, Debug)]
pub enum AssetError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Asset manifest could not be parsed
    #[error("Manifest parse error: {0}")]
    Manifest(#[from] serde_json::Error),

    /// Image bytes could not be decoded
    #[error("Image decode error: {0}")]
    Decode(#[from] image::ImageError),

    /// Inline image data is not valid base64
    #[error("Invalid inline image data: {0}")]
    InlineData(#[from] base64::DecodeError),

    /// Inline image data is not a base64 data URL
    #[error("Unsupported inline image data: {0}")]
    UnsupportedInline(String),

    /// Decoded image has a zero dimension
    #[error("Image {name} has no pixels ({width}×{height})")]
    EmptyImage { name: String, width: u32, height: u32 },

    /// The source does not know this identifier
    #[error("Unknown asset: {0}")]
    NotFound(String),
}

/// Result type alias for asset operations
pub type AssetResult<T> = Result<T, AssetError>;

/// Errors from (de)serializing snapshots.
#[derive(Error, Debug)]
pub enum SnapshotError {
    /// JSON parsing error from serde_json
    #[error("Snapshot JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for snapshot operations
pub type SnapshotResult<T> = Result<T, SnapshotError>;
