//! Snapshot sink seam
//!
//! The store only knows that snapshots can be written somewhere and read
//! back; the concrete key-value backend lives behind this trait so tests can
//! substitute an in-memory one.

use questforge_core::GameState;

/// Boxed error from a sink implementation; the store logs and swallows it
pub type SinkError = Box<dyn std::error::Error + Send + Sync>;

/// Somewhere a full state snapshot can be written and read back.
///
/// Implementations persist the whole state as one value under one fixed
/// key: last write wins, no partial writes observable.
pub trait SnapshotSink {
    /// Write the current snapshot, replacing any previous one
    fn save(&self, state: &GameState) -> Result<(), SinkError>;

    /// Read the stored snapshot, if any. Implementations should treat an
    /// undecodable snapshot as absent rather than an error.
    fn load(&self) -> Result<Option<GameState>, SinkError>;
}
