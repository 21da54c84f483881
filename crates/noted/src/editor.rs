//! External editor integration.
//!
//! A note is presented to `$EDITOR` as a single markdown document: the
//! title as a level-one heading, then the body. Parsing the buffer back
//! yields the [`NoteUpdate`] batch for the store, so the whole editing
//! session collapses into one note update.
//!
//! If the user deletes the heading line, only the body is updated and the
//! stored title is left alone; any other leading `#` depth counts as body
//! structure, not the title.

use notedapp::commands::NoteUpdate;
use notedapp::{NotedError, Result};
use std::env;
use std::fs;
use std::process::Command;

/// Round-trip a note's title and body through the user's editor and
/// return the field updates to apply.
pub fn edit(title: &str, content: &str, extension: &str) -> Result<Vec<NoteUpdate>> {
    let editor = resolve_editor()?;
    let path = env::temp_dir().join(format!("noted-{}{}", std::process::id(), extension));

    fs::write(&path, buffer_for(title, content))?;

    let status = Command::new(&editor)
        .arg(&path)
        .status()
        .map_err(|e| NotedError::Api(format!("failed to launch editor '{}': {}", editor, e)))?;
    if !status.success() {
        let _ = fs::remove_file(&path);
        return Err(NotedError::Api(format!(
            "editor '{}' exited with non-zero status, discarding the buffer",
            editor
        )));
    }

    let edited = fs::read_to_string(&path)?;
    let _ = fs::remove_file(&path);

    Ok(updates_from(&edited))
}

/// $VISUAL wins over $EDITOR; there is no further guessing.
fn resolve_editor() -> Result<String> {
    ["VISUAL", "EDITOR"]
        .iter()
        .find_map(|var| env::var(var).ok().filter(|v| !v.is_empty()))
        .ok_or_else(|| {
            NotedError::Api("no editor configured; set $EDITOR or $VISUAL".to_string())
        })
}

/// The editable form of a note: `# title`, blank line, body.
fn buffer_for(title: &str, content: &str) -> String {
    if content.is_empty() {
        format!("# {}\n", title)
    } else {
        format!("# {}\n\n{}\n", title, content.trim_end())
    }
}

/// Parse an edited buffer into note updates.
///
/// The first non-blank line becomes the title when it is a level-one
/// heading; everything after it (minus leading blank lines) is the body.
fn updates_from(buffer: &str) -> Vec<NoteUpdate> {
    let mut title: Option<String> = None;
    let mut body: Vec<&str> = Vec::new();
    let mut seen_first = false;

    for line in buffer.lines() {
        if !seen_first {
            if line.trim().is_empty() {
                continue;
            }
            seen_first = true;
            if let Some(heading) = line.trim_start().strip_prefix('#') {
                if !heading.starts_with('#') {
                    title = Some(heading.trim().to_string());
                    continue;
                }
            }
        }
        body.push(line);
    }

    while body.first().map_or(false, |l| l.trim().is_empty()) {
        body.remove(0);
    }
    let content = body.join("\n").trim_end().to_string();

    let mut updates = Vec::new();
    if let Some(title) = title {
        updates.push(NoteUpdate::Title(title));
    }
    updates.push(NoteUpdate::Content(content));
    updates
}
