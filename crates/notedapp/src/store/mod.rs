//! # Storage Layer
//!
//! The [`SnapshotStore`] trait is the persistence port of the note store.
//! The whole [`Snapshot`] is the unit of persistence: `load` returns the
//! last saved aggregate (or the default snapshot when nothing was ever
//! saved), `save` replaces it atomically from the caller's perspective.
//!
//! ## Implementations
//!
//! - [`fs::JsonFileStore`]: one pretty-printed JSON blob on disk.
//! - [`memory::InMemoryStore`]: for testing logic without filesystem I/O.

use crate::error::Result;
use crate::model::Snapshot;

pub mod fs;
pub mod memory;

/// Abstract interface for snapshot persistence.
///
/// The store treats every mutation as durable once `save` returns; there
/// are no partial writes because the full snapshot is always written.
pub trait SnapshotStore {
    /// Load the persisted snapshot, or the default snapshot if none exists.
    fn load(&self) -> Result<Snapshot>;

    /// Persist the full snapshot.
    fn save(&mut self, snapshot: &Snapshot) -> Result<()>;
}
