//! First-run sample data.
//!
//! A snapshot that has never held user data (no notes, only the default
//! folder) is seeded with three tags, two folders, and three sample notes
//! so the first launch shows something to explore rather than an empty
//! list. The welcome note is pinned and selected.

use crate::commands::CmdResult;
use crate::model::{Folder, Note, Snapshot, Tag, TagColor, DEFAULT_FOLDER_ID};
use chrono::{Duration, Utc};

const WELCOME_CONTENT: &str = "# Welcome to Noted\n\n\
Noted is a markdown note-taking app. A quick tour:\n\n\
## Features\n\n\
- **Folders**: group notes by area\n\
- **Tags**: colored labels for cross-cutting filters\n\
- **Pinning**: keep important notes at the top of every list\n\
- **Search**: find notes by title or content\n\n\
## Markdown\n\n\
Write in **bold**, *italic*, or ~~strikethrough~~.\n\n\
- Bullet lists\n\
  - with nesting\n\n\
1. Ordered lists\n\
2. work too\n\n\
Inline `code` and fenced blocks:\n\n\
```rust\n\
fn hello() {\n\
    println!(\"Hello!\");\n\
}\n\
```\n\n\
[Links](https://example.com) render as well. Enjoy!\n";

const WORK_CONTENT: &str = "# Project Ideas\n\n\
## Web Application\n\
- New dashboard layout\n\
- Dark mode support\n\
- Mobile-friendly views\n\n\
## Integrations\n\
- Payment provider hookup\n\
- OAuth2 sign-in\n\
- Webhook delivery\n\n\
## Later\n\
- Real-time collaboration\n\
- Export formats\n\
- Version history\n";

const TODO_CONTENT: &str = "# Todo List\n\n\
- [x] Buy groceries\n\
- [ ] Call the dentist\n\
- [x] Pay bills\n\
- [ ] Plan weekend trip\n\
- [ ] Fix the leaky faucet\n";

/// Seed sample data into a fresh snapshot. Returns a no-op result when the
/// snapshot already holds user data.
pub fn ensure_sample_data(snap: &mut Snapshot) -> CmdResult {
    if !snap.is_fresh() {
        return CmdResult::default();
    }
    log::debug!("seeding sample data into fresh snapshot");

    let important = Tag::new("Important".to_string(), TagColor::Red);
    let work = Tag::new("Work".to_string(), TagColor::Blue);
    let personal = Tag::new("Personal".to_string(), TagColor::Green);

    let work_folder = Folder::new("Work".to_string(), None);
    let personal_folder = Folder::new("Personal".to_string(), None);

    let now = Utc::now();

    let mut welcome = Note::new(DEFAULT_FOLDER_ID.to_string());
    welcome.title = "Welcome to Noted".to_string();
    welcome.content = WELCOME_CONTENT.to_string();
    welcome.tags = vec![important.id.clone(), personal.id.clone()];
    welcome.is_pinned = true;

    let mut work_note = Note::new(work_folder.id.clone());
    work_note.title = "Work Project Ideas".to_string();
    work_note.content = WORK_CONTENT.to_string();
    work_note.tags = vec![work.id.clone()];
    work_note.created_at = now - Duration::days(1);
    work_note.updated_at = work_note.created_at;

    let mut todo_note = Note::new(personal_folder.id.clone());
    todo_note.title = "Personal Todo".to_string();
    todo_note.content = TODO_CONTENT.to_string();
    todo_note.tags = vec![personal.id.clone()];
    todo_note.created_at = now - Duration::days(2);
    todo_note.updated_at = todo_note.created_at;

    snap.selected_note_id = Some(welcome.id.clone());
    snap.folders.extend([work_folder, personal_folder]);
    snap.tags.extend([important, work, personal]);
    let seeded = vec![welcome, work_note, todo_note];
    snap.notes.extend(seeded.iter().cloned());

    CmdResult::default().with_affected_notes(seeded)
}
