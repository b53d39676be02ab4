use std::{io, path::PathBuf};

use foodtracker_core::{DecodeError, EncodeError};

/// Errors that can occur while saving a snapshot.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum SaveError {
    /// The meal list could not be encoded.
    #[display("failed to encode snapshot: {_0}")]
    #[from]
    Encode(EncodeError),
    /// The directory holding the snapshot could not be created.
    #[display("failed to create directory {}: {source}", path.display())]
    CreateDir {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// The temporary snapshot file could not be written.
    #[display("failed to write {}: {source}", path.display())]
    Write {
        /// Temporary file path.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// An unreadable snapshot could not be moved aside.
    #[display("failed to back up {} to {}: {source}", path.display(), backup.display())]
    Backup {
        /// Snapshot path.
        path: PathBuf,
        /// Intended backup path.
        backup: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// The temporary file could not replace the snapshot.
    #[display("failed to replace {}: {source}", path.display())]
    Persist {
        /// Snapshot path.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
}

/// Errors that can occur while loading a snapshot.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum LoadError {
    /// The snapshot exists but could not be read.
    #[display("failed to read {}: {source}", path.display())]
    Read {
        /// Snapshot path.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// The snapshot was read but is not a valid meal list.
    #[display("failed to decode {}: {source}", path.display())]
    Decode {
        /// Snapshot path.
        path: PathBuf,
        /// Decoder error.
        source: DecodeError,
    },
}
