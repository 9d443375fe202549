//! Error types for the rules kernel.
//!
//! Illegal moves are deliberately *not* errors: legality and game-flow
//! outcomes are plain booleans so callers can retry a different move without
//! special handling. Only structurally impossible inputs (bad board size,
//! malformed fixture text, unusable persistence streams) surface here.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for kernel operations.
pub type Result<T> = std::result::Result<T, GoError>;

#[derive(Debug, Error)]
pub enum GoError {
    /// Board size label not in the supported set.
    #[error("unsupported board size: {0:?}")]
    UnsupportedSize(String),

    /// Board side length outside the accepted range.
    #[error("invalid board side: {0} (expected 1..=25)")]
    InvalidSide(usize),

    /// Malformed textual board fixture.
    #[error("invalid board fixture: {0}")]
    InvalidFixture(String),

    /// The save destination could not be written.
    #[error("failed to save game to {}", .path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The source could not be read, or its contents are not a valid
    /// saved game.
    #[error("failed to load game from {}: {reason}", .path.display())]
    Load { path: PathBuf, reason: String },
}
