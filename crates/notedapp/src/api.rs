//! # API Facade
//!
//! [`NotedApi`] is the single entry point for all note store operations,
//! regardless of the UI driving it. It owns the [`Snapshot`] aggregate and
//! an injected [`SnapshotStore`] port: the snapshot is loaded once at
//! construction (seeding sample data on first run), and every mutation
//! writes the whole snapshot back through the port before returning.
//!
//! The facade holds no business logic — that lives in `commands/*` — and
//! performs no terminal I/O. It is generic over the storage backend:
//! production uses [`JsonFileStore`](crate::store::fs::JsonFileStore),
//! tests use [`InMemoryStore`](crate::store::memory::InMemoryStore).
//!
//! Domain operations return `Result<CmdResult>`: the `Err` side only ever
//! carries persistence failures; domain refusals (default-folder delete,
//! empty names) travel inside the `CmdResult` messages.

use crate::commands::{self, CmdResult, NoteUpdate};
use crate::error::Result;
use crate::model::{Folder, Note, Snapshot, Tag, TagColor};
use crate::store::SnapshotStore;

pub struct NotedApi<S: SnapshotStore> {
    store: S,
    snapshot: Snapshot,
}

impl<S: SnapshotStore> NotedApi<S> {
    /// Load the snapshot through the port, seeding sample data if this is
    /// the first run.
    pub fn new(mut store: S) -> Result<Self> {
        let mut snapshot = store.load()?;
        let seeded = commands::seed::ensure_sample_data(&mut snapshot);
        if !seeded.affected_notes.is_empty() {
            store.save(&snapshot)?;
        }
        Ok(Self { store, snapshot })
    }

    fn persist(&mut self) -> Result<()> {
        self.store.save(&self.snapshot)
    }

    // --- Reads ---

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn notes(&self) -> &[Note] {
        &self.snapshot.notes
    }

    pub fn folders(&self) -> &[Folder] {
        &self.snapshot.folders
    }

    pub fn tags(&self) -> &[Tag] {
        &self.snapshot.tags
    }

    pub fn search_query(&self) -> &str {
        &self.snapshot.search_query
    }

    /// The selected note, resolving a dangling cursor to `None`.
    pub fn selected_note(&self) -> Option<&Note> {
        self.snapshot
            .selected_note_id
            .as_deref()
            .and_then(|id| self.snapshot.note(id))
    }

    pub fn selected_folder(&self) -> Option<&Folder> {
        self.snapshot
            .selected_folder_id
            .as_deref()
            .and_then(|id| self.snapshot.folder(id))
    }

    pub fn selected_tag(&self) -> Option<&Tag> {
        self.snapshot
            .selected_tag_id
            .as_deref()
            .and_then(|id| self.snapshot.tag(id))
    }

    /// The filtered, pin-first note listing.
    pub fn filtered_notes(&self) -> Vec<Note> {
        commands::query::filtered_notes(&self.snapshot)
    }

    // --- Note mutations ---

    pub fn create_note(&mut self, folder_id: Option<String>) -> Result<CmdResult> {
        let result = commands::notes::create(&mut self.snapshot, folder_id);
        self.persist()?;
        Ok(result)
    }

    pub fn update_note(&mut self, id: &str, updates: &[NoteUpdate]) -> Result<CmdResult> {
        let result = commands::notes::update(&mut self.snapshot, id, updates);
        self.persist()?;
        Ok(result)
    }

    pub fn delete_note(&mut self, id: &str) -> Result<CmdResult> {
        let result = commands::notes::delete(&mut self.snapshot, id);
        self.persist()?;
        Ok(result)
    }

    pub fn toggle_pin(&mut self, id: &str) -> Result<CmdResult> {
        let result = commands::notes::toggle_pin(&mut self.snapshot, id);
        self.persist()?;
        Ok(result)
    }

    pub fn select_note(&mut self, id: Option<String>) -> Result<CmdResult> {
        let result = commands::select::note(&mut self.snapshot, id);
        self.persist()?;
        Ok(result)
    }

    // --- Folder mutations ---

    pub fn create_folder(&mut self, name: &str, parent_id: Option<String>) -> Result<CmdResult> {
        let result = commands::folders::create(&mut self.snapshot, name, parent_id);
        self.persist()?;
        Ok(result)
    }

    pub fn rename_folder(&mut self, id: &str, name: &str) -> Result<CmdResult> {
        let result = commands::folders::rename(&mut self.snapshot, id, name);
        self.persist()?;
        Ok(result)
    }

    pub fn delete_folder(&mut self, id: &str) -> Result<CmdResult> {
        let result = commands::folders::delete(&mut self.snapshot, id);
        self.persist()?;
        Ok(result)
    }

    pub fn reorder_folders(&mut self, ordered_ids: &[String]) -> Result<CmdResult> {
        let result = commands::folders::reorder(&mut self.snapshot, ordered_ids);
        self.persist()?;
        Ok(result)
    }

    pub fn select_folder(&mut self, id: Option<String>) -> Result<CmdResult> {
        let result = commands::select::folder(&mut self.snapshot, id);
        self.persist()?;
        Ok(result)
    }

    // --- Tag mutations ---

    pub fn create_tag(&mut self, name: &str, color: Option<TagColor>) -> Result<CmdResult> {
        let result = commands::tags::create(&mut self.snapshot, name, color);
        self.persist()?;
        Ok(result)
    }

    pub fn update_tag(&mut self, id: &str, name: &str, color: TagColor) -> Result<CmdResult> {
        let result = commands::tags::update(&mut self.snapshot, id, name, color);
        self.persist()?;
        Ok(result)
    }

    pub fn delete_tag(&mut self, id: &str) -> Result<CmdResult> {
        let result = commands::tags::delete(&mut self.snapshot, id);
        self.persist()?;
        Ok(result)
    }

    pub fn reorder_tags(&mut self, ordered_ids: &[String]) -> Result<CmdResult> {
        let result = commands::tags::reorder(&mut self.snapshot, ordered_ids);
        self.persist()?;
        Ok(result)
    }

    pub fn select_tag(&mut self, id: Option<String>) -> Result<CmdResult> {
        let result = commands::select::tag(&mut self.snapshot, id);
        self.persist()?;
        Ok(result)
    }

    pub fn add_tag_to_note(&mut self, note_id: &str, tag_id: &str) -> Result<CmdResult> {
        let result = commands::tagging::add_tag(&mut self.snapshot, note_id, tag_id);
        self.persist()?;
        Ok(result)
    }

    pub fn remove_tag_from_note(&mut self, note_id: &str, tag_id: &str) -> Result<CmdResult> {
        let result = commands::tagging::remove_tag(&mut self.snapshot, note_id, tag_id);
        self.persist()?;
        Ok(result)
    }

    // --- Search ---

    pub fn set_search_query(&mut self, query: String) -> Result<CmdResult> {
        let result = commands::select::search(&mut self.snapshot, query);
        self.persist()?;
        Ok(result)
    }
}
