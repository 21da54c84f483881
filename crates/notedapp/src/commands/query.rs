//! The filtered, sorted note listing.
//!
//! Filters compose with AND semantics: folder (exact match) if a folder is
//! selected, tag (membership) if a tag is selected, then case-insensitive
//! substring search against title or content if the query is non-empty.
//! The result is sorted pinned-first, then by `updated_at` descending.

use crate::model::{Note, Snapshot};
use std::cmp::Ordering;

/// Sort notes pinned-first (stable among themselves), then by
/// `updated_at` descending.
pub fn pin_sorted(mut notes: Vec<Note>) -> Vec<Note> {
    notes.sort_by(|a, b| match (a.is_pinned, b.is_pinned) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => b.updated_at.cmp(&a.updated_at),
    });
    notes
}

/// Pure derived query over the snapshot; never mutates.
pub fn filtered_notes(snap: &Snapshot) -> Vec<Note> {
    let query = snap.search_query.to_lowercase();

    let notes: Vec<Note> = snap
        .notes
        .iter()
        .filter(|note| match &snap.selected_folder_id {
            Some(folder_id) => &note.folder_id == folder_id,
            None => true,
        })
        .filter(|note| match &snap.selected_tag_id {
            Some(tag_id) => note.has_tag(tag_id),
            None => true,
        })
        .filter(|note| {
            query.is_empty()
                || note.title.to_lowercase().contains(&query)
                || note.content.to_lowercase().contains(&query)
        })
        .cloned()
        .collect();

    pin_sorted(notes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{notes, select, tagging};
    use crate::model::{Folder, DEFAULT_FOLDER_ID};
    use chrono::{Duration, Utc};

    fn add_note(snap: &mut Snapshot, title: &str, content: &str) -> String {
        notes::create(snap, None);
        let id = snap.notes[0].id.clone();
        let note = snap.note_mut(&id).unwrap();
        note.title = title.to_string();
        note.content = content.to_string();
        id
    }

    fn titles(notes: &[Note]) -> Vec<&str> {
        notes.iter().map(|n| n.title.as_str()).collect()
    }

    #[test]
    fn test_newer_notes_come_first() {
        let mut snap = Snapshot::default();
        let older = add_note(&mut snap, "older", "");
        let newer = add_note(&mut snap, "newer", "");
        let now = Utc::now();
        snap.note_mut(&older).unwrap().updated_at = now - Duration::hours(1);
        snap.note_mut(&newer).unwrap().updated_at = now;

        assert_eq!(titles(&filtered_notes(&snap)), vec!["newer", "older"]);
    }

    #[test]
    fn test_pinned_notes_come_first_despite_age() {
        let mut snap = Snapshot::default();
        let pinned = add_note(&mut snap, "pinned", "");
        let fresh = add_note(&mut snap, "fresh", "");
        let now = Utc::now();
        {
            let note = snap.note_mut(&pinned).unwrap();
            note.is_pinned = true;
            note.updated_at = now - Duration::days(3);
        }
        snap.note_mut(&fresh).unwrap().updated_at = now;

        assert_eq!(titles(&filtered_notes(&snap)), vec!["pinned", "fresh"]);
    }

    #[test]
    fn test_pinned_notes_sort_by_updated_among_themselves() {
        let mut snap = Snapshot::default();
        let a = add_note(&mut snap, "a", "");
        let b = add_note(&mut snap, "b", "");
        let now = Utc::now();
        {
            let note = snap.note_mut(&a).unwrap();
            note.is_pinned = true;
            note.updated_at = now;
        }
        {
            let note = snap.note_mut(&b).unwrap();
            note.is_pinned = true;
            note.updated_at = now - Duration::hours(1);
        }

        assert_eq!(titles(&filtered_notes(&snap)), vec!["a", "b"]);
    }

    #[test]
    fn test_folder_filter_is_exact() {
        let mut snap = Snapshot::default();
        let work = Folder::new("Work".to_string(), None);
        let work_id = work.id.clone();
        snap.folders.push(work);

        add_note(&mut snap, "in default", "");
        let in_work = add_note(&mut snap, "in work", "");
        snap.note_mut(&in_work).unwrap().folder_id = work_id.clone();

        select::folder(&mut snap, Some(work_id));
        assert_eq!(titles(&filtered_notes(&snap)), vec!["in work"]);

        select::folder(&mut snap, None);
        assert_eq!(titles(&filtered_notes(&snap)), vec!["in default"]);
    }

    #[test]
    fn test_tag_filter_is_membership() {
        let mut snap = Snapshot::default();
        let tagged = add_note(&mut snap, "tagged", "");
        add_note(&mut snap, "untagged", "");
        tagging::add_tag(&mut snap, &tagged, "t1");

        select::tag(&mut snap, Some("t1".to_string()));

        assert_eq!(titles(&filtered_notes(&snap)), vec!["tagged"]);
    }

    #[test]
    fn test_search_matches_title_or_content_case_insensitively() {
        let mut snap = Snapshot::default();
        add_note(&mut snap, "TODO list", "groceries");
        add_note(&mut snap, "journal", "remember the todo item");
        add_note(&mut snap, "unrelated", "nothing here");

        select::search(&mut snap, "todo".to_string());
        let found = filtered_notes(&snap);

        assert_eq!(found.len(), 2);
        assert!(titles(&found).contains(&"TODO list"));
        assert!(titles(&found).contains(&"journal"));
    }

    #[test]
    fn test_filters_compose_with_and_semantics() {
        let mut snap = Snapshot::default();
        let work = Folder::new("Work".to_string(), None);
        let work_id = work.id.clone();
        snap.folders.push(work);

        let match_all = add_note(&mut snap, "todo for work", "");
        let wrong_folder = add_note(&mut snap, "todo elsewhere", "");
        let wrong_tag = add_note(&mut snap, "todo for work too", "");
        let wrong_query = add_note(&mut snap, "work meeting", "");

        for id in [&match_all, &wrong_tag, &wrong_query] {
            snap.note_mut(id).unwrap().folder_id = work_id.clone();
        }
        tagging::add_tag(&mut snap, &match_all, "t1");
        tagging::add_tag(&mut snap, &wrong_folder, "t1");
        tagging::add_tag(&mut snap, &wrong_query, "t1");

        // A tag selection clears the folder cursor, so set the folder last
        // via the raw cursor to express folder AND tag.
        snap.selected_tag_id = Some("t1".to_string());
        snap.selected_folder_id = Some(work_id);
        snap.search_query = "todo".to_string();

        assert_eq!(titles(&filtered_notes(&snap)), vec!["todo for work"]);
    }

    #[test]
    fn test_query_never_mutates() {
        let mut snap = Snapshot::default();
        add_note(&mut snap, "a", "");
        let before = snap.clone();

        filtered_notes(&snap);

        assert_eq!(snap, before);
    }

    #[test]
    fn test_empty_query_on_default_folder_lists_default_notes() {
        let snap = Snapshot::default();
        assert!(filtered_notes(&snap).is_empty());
    }

    #[test]
    fn test_notes_outside_selected_folder_hidden_by_default_cursor() {
        let mut snap = Snapshot::default();
        let work = Folder::new("Work".to_string(), None);
        let work_id = work.id.clone();
        snap.folders.push(work);
        let id = add_note(&mut snap, "work note", "");
        snap.note_mut(&id).unwrap().folder_id = work_id;

        // Default cursor selects the default folder.
        assert_eq!(snap.selected_folder_id.as_deref(), Some(DEFAULT_FOLDER_ID));
        assert!(filtered_notes(&snap).is_empty());
    }
}
