//! Error types for questforge-core
//!
//! The transition function itself is total and never returns an error; these
//! variants cover the validated input surface that filters malformed payloads
//! before they reach the reducer.

use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("a character already exists")]
    CharacterExists,

    #[error("no character has been created yet")]
    NoCharacter,

    #[error("name must not be empty")]
    EmptyName,

    #[error("quest title must not be empty")]
    EmptyTitle,

    #[error("difficulty must be between 1 and 5, got {0}")]
    DifficultyOutOfRange(u8),

    #[error("not enough gold: need {needed}, have {held}")]
    InsufficientGold { needed: u32, held: u32 },

    #[error("unknown reward: {0}")]
    UnknownReward(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
