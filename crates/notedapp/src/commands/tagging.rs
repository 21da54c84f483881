//! Tag membership on notes.
//!
//! Both operations are idempotent set-membership mutations: adding a tag
//! the note already has and removing one it does not have leave the note
//! (and its `updated_at`) untouched, reporting an info message instead.

use crate::commands::{CmdMessage, CmdResult};
use crate::model::Snapshot;

/// Add a tag id to a note's tag list.
pub fn add_tag(snap: &mut Snapshot, note_id: &str, tag_id: &str) -> CmdResult {
    let label = tag_label(snap, tag_id);
    let Some(note) = snap.note_mut(note_id) else {
        return CmdResult::default();
    };

    let mut result = CmdResult::default();
    if note.has_tag(tag_id) {
        result.add_message(CmdMessage::info(format!("Note already has tag {}", label)));
        return result;
    }

    note.tags.push(tag_id.to_string());
    note.touch();
    result.affected_notes.push(note.clone());
    result.add_message(CmdMessage::success(format!("Added tag {}", label)));
    result
}

/// Remove a tag id from a note's tag list.
pub fn remove_tag(snap: &mut Snapshot, note_id: &str, tag_id: &str) -> CmdResult {
    let label = tag_label(snap, tag_id);
    let Some(note) = snap.note_mut(note_id) else {
        return CmdResult::default();
    };

    let mut result = CmdResult::default();
    if !note.has_tag(tag_id) {
        result.add_message(CmdMessage::info(format!(
            "Note does not have tag {}",
            label
        )));
        return result;
    }

    note.tags.retain(|t| t != tag_id);
    note.touch();
    result.affected_notes.push(note.clone());
    result.add_message(CmdMessage::success(format!("Removed tag {}", label)));
    result
}

/// Display label for a tag id; membership tolerates ids missing from the
/// registry, so fall back to the raw id.
fn tag_label(snap: &Snapshot, tag_id: &str) -> String {
    match snap.tag(tag_id) {
        Some(tag) => format!("\"{}\"", tag.name),
        None => tag_id.to_string(),
    }
}
