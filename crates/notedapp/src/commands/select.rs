//! Selection cursors and the search query.
//!
//! Folder and tag selection are mutually exclusive, with one deliberate
//! asymmetry carried over from the source behavior: selecting a folder
//! always clears the tag cursor, but clearing the tag cursor (selecting
//! "no tag") leaves the folder cursor alone. Selecting either always
//! clears the note cursor.

use crate::commands::CmdResult;
use crate::model::{Snapshot, DEFAULT_FOLDER_ID};

/// Set the note cursor. No existence validation: a dangling id simply
/// resolves to "no note" on lookup.
pub fn note(snap: &mut Snapshot, id: Option<String>) -> CmdResult {
    snap.selected_note_id = id;
    CmdResult::default()
}

/// Set the folder cursor, normalizing `None` to the default folder.
pub fn folder(snap: &mut Snapshot, id: Option<String>) -> CmdResult {
    snap.selected_folder_id = Some(id.unwrap_or_else(|| DEFAULT_FOLDER_ID.to_string()));
    snap.selected_tag_id = None;
    snap.selected_note_id = None;
    CmdResult::default()
}

/// Set the tag cursor. A non-null tag clears the folder cursor; selecting
/// "no tag" does not disturb it.
pub fn tag(snap: &mut Snapshot, id: Option<String>) -> CmdResult {
    if id.is_some() {
        snap.selected_folder_id = None;
    }
    snap.selected_tag_id = id;
    snap.selected_note_id = None;
    CmdResult::default()
}

/// Set the persisted search query.
pub fn search(snap: &mut Snapshot, query: String) -> CmdResult {
    snap.search_query = query;
    CmdResult::default()
}
