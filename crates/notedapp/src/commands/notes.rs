//! Note lifecycle commands: create, update, delete, pin toggle.

use crate::commands::{CmdMessage, CmdResult, NoteUpdate};
use crate::model::{Note, Snapshot, DEFAULT_FOLDER_ID};

/// Create a note and make it the selected note.
///
/// The folder resolves as: explicit argument, else the currently selected
/// folder, else the default folder. An unknown folder id also falls back
/// to the default folder, with a warning. The new note goes to the front
/// of the sequence.
pub fn create(snap: &mut Snapshot, folder_id: Option<String>) -> CmdResult {
    let mut result = CmdResult::default();

    let folder_id = match folder_id.or_else(|| snap.selected_folder_id.clone()) {
        Some(id) if snap.folder(&id).is_some() => id,
        Some(_) => {
            result.add_message(CmdMessage::warning("Unknown folder; filing under All Notes"));
            DEFAULT_FOLDER_ID.to_string()
        }
        None => DEFAULT_FOLDER_ID.to_string(),
    };

    let note = Note::new(folder_id);
    snap.selected_note_id = Some(note.id.clone());
    snap.notes.insert(0, note.clone());

    result.affected_notes.push(note);
    result.add_message(CmdMessage::success("Note created"));
    result
}

/// Apply a batch of field updates to a note.
///
/// `updated_at` is refreshed whenever the note exists, regardless of
/// whether the new values differ from the old ones. Unknown ids are a
/// silent no-op.
pub fn update(snap: &mut Snapshot, id: &str, updates: &[NoteUpdate]) -> CmdResult {
    let Some(note) = snap.note_mut(id) else {
        return CmdResult::default();
    };

    for change in updates {
        match change {
            NoteUpdate::Title(title) => note.title = title.clone(),
            NoteUpdate::Content(content) => note.content = content.clone(),
            NoteUpdate::Folder(folder_id) => note.folder_id = folder_id.clone(),
            NoteUpdate::Tags(tags) => {
                let mut deduped: Vec<String> = Vec::with_capacity(tags.len());
                for tag in tags {
                    if !deduped.contains(tag) {
                        deduped.push(tag.clone());
                    }
                }
                note.tags = deduped;
            }
            NoteUpdate::Pinned(pinned) => note.is_pinned = *pinned,
        }
    }
    note.touch();

    CmdResult::default().with_affected_notes(vec![note.clone()])
}

/// Delete a note, clearing the note selection if it pointed at it.
pub fn delete(snap: &mut Snapshot, id: &str) -> CmdResult {
    let before = snap.notes.len();
    snap.notes.retain(|n| n.id != id);
    if snap.notes.len() == before {
        return CmdResult::default();
    }

    if snap.selected_note_id.as_deref() == Some(id) {
        snap.selected_note_id = None;
    }

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Note deleted"));
    result
}

/// Flip a note's pin state.
pub fn toggle_pin(snap: &mut Snapshot, id: &str) -> CmdResult {
    let Some(note) = snap.note_mut(id) else {
        return CmdResult::default();
    };

    note.is_pinned = !note.is_pinned;
    note.touch();
    let pinned = note.is_pinned;
    let note = note.clone();

    let mut result = CmdResult::default().with_affected_notes(vec![note]);
    result.add_message(CmdMessage::success(if pinned {
        "Note pinned"
    } else {
        "Note unpinned"
    }));
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Folder;

    #[test]
    fn test_create_in_empty_store() {
        let mut snap = Snapshot::default();
        let result = create(&mut snap, None);

        assert_eq!(snap.notes.len(), 1);
        let note = &snap.notes[0];
        assert_eq!(note.title, "Untitled Note");
        assert_eq!(note.folder_id, DEFAULT_FOLDER_ID);
        assert_eq!(snap.selected_note_id.as_deref(), Some(note.id.as_str()));
        assert_eq!(result.affected_notes.len(), 1);
    }

    #[test]
    fn test_create_inserts_at_front() {
        let mut snap = Snapshot::default();
        create(&mut snap, None);
        let first_id = snap.notes[0].id.clone();
        create(&mut snap, None);

        assert_eq!(snap.notes.len(), 2);
        assert_ne!(snap.notes[0].id, first_id);
        assert_eq!(snap.notes[1].id, first_id);
    }

    #[test]
    fn test_create_uses_selected_folder() {
        let mut snap = Snapshot::default();
        let folder = Folder::new("Work".to_string(), None);
        let folder_id = folder.id.clone();
        snap.folders.push(folder);
        snap.selected_folder_id = Some(folder_id.clone());

        create(&mut snap, None);
        assert_eq!(snap.notes[0].folder_id, folder_id);
    }

    #[test]
    fn test_create_with_unknown_folder_falls_back_to_default_with_warning() {
        let mut snap = Snapshot::default();
        let result = create(&mut snap, Some("no-such-folder".to_string()));

        assert_eq!(snap.notes[0].folder_id, DEFAULT_FOLDER_ID);
        assert!(result
            .messages
            .iter()
            .any(|m| m.level == crate::commands::MessageLevel::Warning));
    }

    #[test]
    fn test_create_with_no_folder_selection_falls_back_to_default() {
        let mut snap = Snapshot::default();
        // Tag selection clears the folder cursor.
        snap.selected_folder_id = None;
        create(&mut snap, None);
        assert_eq!(snap.notes[0].folder_id, DEFAULT_FOLDER_ID);
    }

    #[test]
    fn test_update_refreshes_updated_at() {
        let mut snap = Snapshot::default();
        create(&mut snap, None);
        let id = snap.notes[0].id.clone();
        let created_at = snap.notes[0].created_at;
        let before = snap.notes[0].updated_at;

        std::thread::sleep(std::time::Duration::from_millis(10));
        update(&mut snap, &id, &[NoteUpdate::Title("Renamed".to_string())]);

        let note = snap.note(&id).unwrap();
        assert_eq!(note.title, "Renamed");
        assert!(note.updated_at > before);
        assert!(note.updated_at >= created_at);
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let mut snap = Snapshot::default();
        create(&mut snap, None);
        let before = snap.clone();

        let result = update(
            &mut snap,
            "missing",
            &[NoteUpdate::Title("X".to_string())],
        );

        assert_eq!(snap, before);
        assert!(result.affected_notes.is_empty());
        assert!(result.messages.is_empty());
    }

    #[test]
    fn test_update_tags_dedupes() {
        let mut snap = Snapshot::default();
        create(&mut snap, None);
        let id = snap.notes[0].id.clone();

        update(
            &mut snap,
            &id,
            &[NoteUpdate::Tags(vec![
                "t1".to_string(),
                "t2".to_string(),
                "t1".to_string(),
            ])],
        );

        assert_eq!(snap.note(&id).unwrap().tags, vec!["t1", "t2"]);
    }

    #[test]
    fn test_update_applies_batched_fields() {
        let mut snap = Snapshot::default();
        create(&mut snap, None);
        let id = snap.notes[0].id.clone();

        update(
            &mut snap,
            &id,
            &[
                NoteUpdate::Title("Batch".to_string()),
                NoteUpdate::Content("body".to_string()),
                NoteUpdate::Pinned(true),
            ],
        );

        let note = snap.note(&id).unwrap();
        assert_eq!(note.title, "Batch");
        assert_eq!(note.content, "body");
        assert!(note.is_pinned);
    }

    #[test]
    fn test_delete_clears_selection() {
        let mut snap = Snapshot::default();
        create(&mut snap, None);
        let id = snap.notes[0].id.clone();
        assert_eq!(snap.selected_note_id.as_deref(), Some(id.as_str()));

        delete(&mut snap, &id);

        assert!(snap.notes.is_empty());
        assert_eq!(snap.selected_note_id, None);
    }

    #[test]
    fn test_delete_keeps_unrelated_selection() {
        let mut snap = Snapshot::default();
        create(&mut snap, None);
        let first = snap.notes[0].id.clone();
        create(&mut snap, None);
        let second = snap.notes[0].id.clone();
        snap.selected_note_id = Some(second.clone());

        delete(&mut snap, &first);

        assert_eq!(snap.selected_note_id.as_deref(), Some(second.as_str()));
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let mut snap = Snapshot::default();
        create(&mut snap, None);
        let before = snap.clone();

        let result = delete(&mut snap, "missing");

        assert_eq!(snap, before);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn test_toggle_pin_flips_and_touches() {
        let mut snap = Snapshot::default();
        create(&mut snap, None);
        let id = snap.notes[0].id.clone();
        let before = snap.notes[0].updated_at;

        std::thread::sleep(std::time::Duration::from_millis(10));
        toggle_pin(&mut snap, &id);
        assert!(snap.note(&id).unwrap().is_pinned);
        assert!(snap.note(&id).unwrap().updated_at > before);

        toggle_pin(&mut snap, &id);
        assert!(!snap.note(&id).unwrap().is_pinned);
    }
}
