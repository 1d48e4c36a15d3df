//! Error types.
//!
//! Illegal moves and unavailable undos are not errors: the engine rejects
//! them silently and reports it through return values. Only a bad game
//! configuration or starting position is an error.

/// Errors that can occur when validating a game configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("stones per pit must be at least 1")]
    ZeroStones,

    #[error("stones per pit must be at most {max}, got {requested}")]
    TooManyStones { requested: u32, max: u32 },

    #[error("board holds more than {} stones", u32::MAX)]
    BoardOverflow,
}
