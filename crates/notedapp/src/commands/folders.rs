//! Folder commands: create, rename, delete, reorder.
//!
//! Two rules keep notes referentially intact: the default folder can never
//! be deleted, and deleting any other folder reassigns its notes to the
//! default folder.

use crate::commands::{CmdMessage, CmdResult};
use crate::model::{Folder, Snapshot, DEFAULT_FOLDER_ID};

/// Create a folder. Names are trimmed; an empty name is a refusal.
pub fn create(snap: &mut Snapshot, name: &str, parent_id: Option<String>) -> CmdResult {
    let name = name.trim();
    let mut result = CmdResult::default();
    if name.is_empty() {
        result.add_message(CmdMessage::error("Folder name cannot be empty"));
        return result;
    }

    snap.folders.push(Folder::new(name.to_string(), parent_id));
    result.add_message(CmdMessage::success(format!("Folder \"{}\" created", name)));
    result
}

/// Rename a folder in place. Unknown ids are a silent no-op.
pub fn rename(snap: &mut Snapshot, id: &str, name: &str) -> CmdResult {
    let name = name.trim();
    let mut result = CmdResult::default();
    if name.is_empty() {
        result.add_message(CmdMessage::error("Folder name cannot be empty"));
        return result;
    }

    if let Some(folder) = snap.folder_mut(id) {
        folder.name = name.to_string();
        result.add_message(CmdMessage::success(format!("Folder renamed to \"{}\"", name)));
    }
    result
}

/// Delete a folder, moving its notes to the default folder.
///
/// Refuses for the default folder itself: the refusal travels as an
/// error-level message and nothing is mutated.
pub fn delete(snap: &mut Snapshot, id: &str) -> CmdResult {
    let mut result = CmdResult::default();
    if id == DEFAULT_FOLDER_ID {
        result.add_message(CmdMessage::error("The default folder cannot be deleted"));
        return result;
    }

    let before = snap.folders.len();
    snap.folders.retain(|f| f.id != id);
    if snap.folders.len() == before {
        return CmdResult::default();
    }

    for note in snap.notes.iter_mut().filter(|n| n.folder_id == id) {
        note.folder_id = DEFAULT_FOLDER_ID.to_string();
    }

    if snap.selected_folder_id.as_deref() == Some(id) {
        snap.selected_folder_id = Some(DEFAULT_FOLDER_ID.to_string());
    }

    result.add_message(CmdMessage::success(
        "Folder deleted; its notes were moved to All Notes",
    ));
    result
}

/// Replace the folder order according to `ordered_ids`.
///
/// The default folder is always pinned to position 0 regardless of the
/// input. Ids present in the store but omitted from the list keep their
/// original relative order after the explicitly ordered ones; unknown
/// input ids are ignored.
pub fn reorder(snap: &mut Snapshot, ordered_ids: &[String]) -> CmdResult {
    let mut remaining: Vec<Folder> = std::mem::take(&mut snap.folders);
    let default = remaining
        .iter()
        .position(|f| f.is_default())
        .map(|pos| remaining.remove(pos));

    let mut ordered: Vec<Folder> = Vec::with_capacity(remaining.len());
    for id in ordered_ids {
        if let Some(pos) = remaining.iter().position(|f| &f.id == id) {
            ordered.push(remaining.remove(pos));
        }
    }
    // Omitted folders follow in their original order.
    ordered.append(&mut remaining);

    snap.folders = Vec::with_capacity(ordered.len() + 1);
    snap.folders.extend(default);
    snap.folders.extend(ordered);
    CmdResult::default()
}
