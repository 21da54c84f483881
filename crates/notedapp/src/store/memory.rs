use super::SnapshotStore;
use crate::error::Result;
use crate::model::Snapshot;

/// In-memory snapshot store for tests.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    snapshot: Snapshot,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-load a snapshot, as if it had been saved by a previous session.
    pub fn with_snapshot(snapshot: Snapshot) -> Self {
        Self { snapshot }
    }

    /// The last saved snapshot.
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }
}

impl SnapshotStore for InMemoryStore {
    fn load(&self) -> Result<Snapshot> {
        Ok(self.snapshot.clone())
    }

    fn save(&mut self, snapshot: &Snapshot) -> Result<()> {
        self.snapshot = snapshot.clone();
        Ok(())
    }
}
