//! Tag registry commands: create, rename/recolor, delete, reorder.
//!
//! Deleting a tag strips it from every note's tag list so no note can hold
//! a dangling tag id. Tag names are not unique: re-creating a deleted name
//! produces a new, distinct id.

use crate::commands::{CmdMessage, CmdResult};
use crate::model::{Snapshot, Tag, TagColor};

/// Create a tag. Names are trimmed; an empty name is a refusal. The color
/// defaults to a pseudo-random palette pick.
pub fn create(snap: &mut Snapshot, name: &str, color: Option<TagColor>) -> CmdResult {
    let name = name.trim();
    let mut result = CmdResult::default();
    if name.is_empty() {
        result.add_message(CmdMessage::error("Tag name cannot be empty"));
        return result;
    }

    let color = color.unwrap_or_else(TagColor::random);
    snap.tags.push(Tag::new(name.to_string(), color));
    result.add_message(CmdMessage::success(format!("Tag \"{}\" created", name)));
    result
}

/// Rename and recolor a tag in place. Unknown ids are a silent no-op.
pub fn update(snap: &mut Snapshot, id: &str, name: &str, color: TagColor) -> CmdResult {
    let name = name.trim();
    let mut result = CmdResult::default();
    if name.is_empty() {
        result.add_message(CmdMessage::error("Tag name cannot be empty"));
        return result;
    }

    if let Some(tag) = snap.tag_mut(id) {
        tag.name = name.to_string();
        tag.color = color;
        result.add_message(CmdMessage::success(format!("Tag renamed to \"{}\"", name)));
    }
    result
}

/// Delete a tag from the registry and from every note that carries it.
pub fn delete(snap: &mut Snapshot, id: &str) -> CmdResult {
    let before = snap.tags.len();
    snap.tags.retain(|t| t.id != id);
    if snap.tags.len() == before {
        return CmdResult::default();
    }

    // Referential cleanup, not an edit: updated_at stays put.
    for note in snap.notes.iter_mut() {
        note.tags.retain(|t| t != id);
    }

    if snap.selected_tag_id.as_deref() == Some(id) {
        snap.selected_tag_id = None;
    }

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Tag deleted from all notes"));
    result
}

/// Replace the tag order according to `ordered_ids`. Ids omitted from the
/// list keep their original relative order after the explicitly ordered
/// ones; unknown input ids are ignored.
pub fn reorder(snap: &mut Snapshot, ordered_ids: &[String]) -> CmdResult {
    let mut remaining: Vec<Tag> = std::mem::take(&mut snap.tags);

    let mut ordered: Vec<Tag> = Vec::with_capacity(remaining.len());
    for id in ordered_ids {
        if let Some(pos) = remaining.iter().position(|t| &t.id == id) {
            ordered.push(remaining.remove(pos));
        }
    }
    ordered.append(&mut remaining);

    snap.tags = ordered;
    CmdResult::default()
}
