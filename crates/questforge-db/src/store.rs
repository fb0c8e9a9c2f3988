//! Save store wrapper.

use crate::error::{Error, Result};
use crate::models::StoredSave;
use native_db::*;
use questforge_core::GameState;
use questforge_store::{SinkError, SnapshotSink};
use std::path::Path;
use std::sync::LazyLock;

/// The fixed key the snapshot lives under.
pub const SAVE_KEY: &str = "save";

// Static models for the database
static MODELS: LazyLock<Models> = LazyLock::new(|| {
    let mut models = Models::new();
    models.define::<StoredSave>().unwrap();
    models
});

/// Persistent store for the game snapshot.
pub struct SaveStore {
    db: Database<'static>,
}

impl SaveStore {
    /// Open or create a database at the given path.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let db = Builder::new()
            .create(&MODELS, path.as_ref())
            .map_err(|e| Error::Database(e.to_string()))?;
        Ok(Self { db })
    }

    /// Create an in-memory database.
    pub fn in_memory() -> Result<Self> {
        let db = Builder::new()
            .create_in_memory(&MODELS)
            .map_err(|e| Error::Database(e.to_string()))?;
        Ok(Self { db })
    }

    /// Write the snapshot, replacing any previous one.
    pub fn save_snapshot(&self, state: &GameState) -> Result<()> {
        let stored = StoredSave::from_state(SAVE_KEY, state)?;
        let rw = self.db.rw_transaction()?;
        rw.upsert(stored)?;
        rw.commit()?;
        Ok(())
    }

    /// Read the snapshot, if one exists.
    ///
    /// An undecodable blob (schema drift, corruption) degrades to `None`
    /// with a diagnostic so the engine starts fresh instead of failing.
    pub fn load_snapshot(&self) -> Result<Option<GameState>> {
        let r = self.db.r_transaction()?;
        let stored: Option<StoredSave> = r.get().primary(SAVE_KEY.to_string())?;
        let Some(stored) = stored else {
            return Ok(None);
        };
        match stored.to_state() {
            Ok(state) => Ok(Some(state)),
            Err(err) => {
                tracing::warn!(error = %err, "saved snapshot could not be decoded, ignoring it");
                Ok(None)
            }
        }
    }

    /// Delete the snapshot.
    pub fn clear(&self) -> Result<()> {
        let rw = self.db.rw_transaction()?;
        if let Some(stored) = rw.get().primary::<StoredSave>(SAVE_KEY.to_string())? {
            rw.remove(stored)?;
        }
        rw.commit()?;
        Ok(())
    }
}

impl SnapshotSink for SaveStore {
    fn save(&self, state: &GameState) -> std::result::Result<(), SinkError> {
        self.save_snapshot(state).map_err(Into::into)
    }

    fn load(&self) -> std::result::Result<Option<GameState>, SinkError> {
        self.load_snapshot().map_err(Into::into)
    }
}

impl From<native_db::db_type::Error> for Error {
    fn from(err: native_db::db_type::Error) -> Self {
        Error::Database(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use questforge_core::{reduce, Action, Class};

    #[test]
    fn test_round_trip() {
        let store = SaveStore::in_memory().unwrap();

        let mut state = GameState::with_seed(42);
        reduce(&mut state, Action::create_character("Aria", Class::Warrior));
        reduce(&mut state, Action::FinishFocus);

        store.save_snapshot(&state).unwrap();
        let loaded = store.load_snapshot().unwrap().unwrap();

        assert_eq!(loaded, state);
    }

    #[test]
    fn test_load_empty() {
        let store = SaveStore::in_memory().unwrap();
        assert!(store.load_snapshot().unwrap().is_none());
    }

    #[test]
    fn test_last_write_wins() {
        let store = SaveStore::in_memory().unwrap();

        let first = GameState::with_seed(1);
        let mut second = GameState::with_seed(2);
        reduce(&mut second, Action::create_character("Aria", Class::Mage));

        store.save_snapshot(&first).unwrap();
        store.save_snapshot(&second).unwrap();

        let loaded = store.load_snapshot().unwrap().unwrap();
        assert_eq!(loaded, second);
    }

    #[test]
    fn test_corrupted_blob_degrades_to_none() {
        let store = SaveStore::in_memory().unwrap();

        let rw = store.db.rw_transaction().unwrap();
        rw.upsert(StoredSave {
            id: SAVE_KEY.to_string(),
            data: vec![0xde, 0xad, 0xbe, 0xef],
        })
        .unwrap();
        rw.commit().unwrap();

        assert!(store.load_snapshot().unwrap().is_none());
    }

    #[test]
    fn test_clear() {
        let store = SaveStore::in_memory().unwrap();
        store.save_snapshot(&GameState::new()).unwrap();

        store.clear().unwrap();
        assert!(store.load_snapshot().unwrap().is_none());

        // clearing an empty store is fine
        store.clear().unwrap();
    }

    #[test]
    fn test_dice_sequence_survives_reload() {
        let store = SaveStore::in_memory().unwrap();

        let mut state = GameState::with_seed(42);
        state.rng.roll_d20();
        store.save_snapshot(&state).unwrap();

        let mut loaded = store.load_snapshot().unwrap().unwrap();
        assert_eq!(loaded.rng.roll_d20(), state.rng.roll_d20());
    }
}
