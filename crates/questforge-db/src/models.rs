//! Database models for snapshot storage.

use native_db::*;
use native_model::{native_model, Model};
use questforge_core::GameState;
use serde::{Deserialize, Serialize};

/// The saved snapshot: a single row keyed by [`crate::SAVE_KEY`] holding the
/// whole state as an encoded blob.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[native_model(id = 1, version = 1)]
#[native_db]
pub struct StoredSave {
    /// Fixed storage key - single row.
    #[primary_key]
    pub id: String,
    /// Encoded `GameState`.
    pub data: Vec<u8>,
}

impl StoredSave {
    /// Encode a state into a storable row under the given key.
    pub fn from_state(key: &str, state: &GameState) -> crate::Result<Self> {
        let data = bincode::serialize(state)
            .map_err(|e| crate::Error::Serialization(e.to_string()))?;
        Ok(Self {
            id: key.to_string(),
            data,
        })
    }

    /// Decode the stored blob back into a state.
    pub fn to_state(&self) -> crate::Result<GameState> {
        bincode::deserialize(&self.data).map_err(|e| crate::Error::Serialization(e.to_string()))
    }
}
