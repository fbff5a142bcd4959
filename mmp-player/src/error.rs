//! Error types for mmp-player
//!
//! The first three variants are the anticipated, locally recovered errors of
//! the control loop. The rest end a play request or the whole session.

use thiserror::Error;

/// Main error type for mmp-player
#[derive(Error, Debug)]
pub enum Error {
    /// Source kind outside local/hls/api
    #[error("Invalid source type: {0:?}")]
    InvalidSourceKind(String),

    /// Empty or malformed origin string
    #[error("Invalid source: {0}")]
    InvalidSource(String),

    /// Play requested with nothing in the playlist
    #[error("Playlist is empty")]
    EmptyPlaylist,

    /// Main menu answer was not a number
    #[error("Invalid menu choice: {0:?} is not a number")]
    InvalidMenuChoice(String),

    /// Input ended before the user chose to exit
    #[error("Input closed before exit was requested")]
    InputClosed,

    /// Console I/O errors
    #[error("Console I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Errors from the shared library (event emission, configuration)
    #[error(transparent)]
    Common(#[from] mmp_common::Error),
}

impl Error {
    /// Whether the control loop reports this error and keeps running
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::InvalidSourceKind(_) | Error::InvalidSource(_) | Error::EmptyPlaylist
        )
    }
}

/// Convenience Result type using mmp-player Error
pub type Result<T> = std::result::Result<T, Error>;
