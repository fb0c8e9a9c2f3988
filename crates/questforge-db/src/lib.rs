//! Questforge DB - snapshot persistence over native_db
//!
//! The entire game state is stored as one encoded blob in a single-row
//! model under a fixed key. Loading tolerates a missing or undecodable
//! snapshot (the engine falls back to a fresh state); saving replaces the
//! previous blob, last write wins.

mod error;
mod models;
mod store;

pub use error::{Error, Result};
pub use store::{SaveStore, SAVE_KEY};
