//! # Command Layer
//!
//! The core business logic of the note store. Each entity family lives in
//! its own submodule and implements plain functions that mutate the
//! [`Snapshot`](crate::model::Snapshot) aggregate.
//!
//! ## Structured Returns
//!
//! Commands return [`CmdResult`], not strings: the affected notes plus
//! leveled messages. Messages are the notification side-channel for
//! validation refusals (deleting the default folder, empty names) —
//! domain operations never return `Err`. Errors are reserved for the
//! persistence boundary in the API layer.
//!
//! ## Tolerant Updates
//!
//! Mutations addressed at an unknown id are silent no-ops. This keeps the
//! UI safe against stale references at the cost of callers not being able
//! to tell "id invalid" from "nothing changed".
//!
//! ## Command Modules
//!
//! - [`notes`]: create / update / delete / pin toggle
//! - [`folders`]: create / rename / delete (with note reassignment) / reorder
//! - [`tags`]: registry create / rename / delete (with note strip) / reorder
//! - [`tagging`]: tag membership on notes
//! - [`select`]: selection cursors and the search query
//! - [`query`]: the filtered, pin-first note listing
//! - [`seed`]: first-run sample data

use crate::model::Note;
use serde::Serialize;

pub mod folders;
pub mod notes;
pub mod query;
pub mod seed;
pub mod select;
pub mod tagging;
pub mod tags;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_notes: Vec<Note>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_notes(mut self, notes: Vec<Note>) -> Self {
        self.affected_notes = notes;
        self
    }

    /// Whether any message was a refusal.
    pub fn has_errors(&self) -> bool {
        self.messages.iter().any(|m| m.level == MessageLevel::Error)
    }
}

/// A single field-group update applied to a note.
///
/// Mutation intent is a closed set of tagged variants rather than an
/// open-ended partial merge, so the compiler knows exactly which fields a
/// caller can touch (`id` and the timestamps are not among them).
#[derive(Debug, Clone, PartialEq)]
pub enum NoteUpdate {
    Title(String),
    Content(String),
    Folder(String),
    Tags(Vec<String>),
    Pinned(bool),
}
