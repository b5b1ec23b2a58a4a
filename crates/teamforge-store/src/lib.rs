//! Snapshot persistence for TeamForge.
//!
//! The registry hands a [`Snapshot`] of its full state to a [`StateStore`]
//! after each successful mutation, and asks for one back on startup. The
//! store knows nothing about matching; it only moves snapshots.
//!
//! - [`JsonFileStore`] - one JSON document on disk, replaced atomically
//! - [`MemoryStore`] - same encoding, kept in memory (tests, demos)

mod file;
mod memory;
mod snapshot;

pub use file::JsonFileStore;
pub use memory::MemoryStore;
pub use snapshot::{Snapshot, SNAPSHOT_VERSION};

use std::fmt::Debug;

use thiserror::Error;

/// Persistence error
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported snapshot version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },
}

/// Save/load boundary for roster state.
pub trait StateStore: Send + Sync + Debug {
    /// Returns the last saved snapshot, or `None` if nothing was saved yet.
    fn load(&self) -> Result<Option<Snapshot>, StoreError>;

    /// Replaces the stored snapshot.
    fn save(&self, snapshot: &Snapshot) -> Result<(), StoreError>;

    /// Forgets the stored snapshot. A following `load` returns `None`.
    fn clear(&self) -> Result<(), StoreError>;
}
