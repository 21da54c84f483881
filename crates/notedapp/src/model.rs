//! # Domain Model
//!
//! This module defines the core data structures: [`Note`], [`Folder`],
//! [`Tag`], and the [`Snapshot`] aggregate that ties them together with the
//! selection cursors.
//!
//! ## Identity
//!
//! Entity ids are uuid-v4 strings. Folders additionally reserve the sentinel
//! id [`DEFAULT_FOLDER_ID`]: exactly one folder with that id exists in every
//! snapshot, it can never be deleted, and it is the fallback target for
//! notes whose folder goes away.
//!
//! ## Timestamps
//!
//! `created_at`/`updated_at` are `DateTime<Utc>` and serialize as ISO-8601.
//! `updated_at` is refreshed on every content or metadata mutation of a
//! note (including tag membership changes and pin toggles) and is never
//! earlier than `created_at`.
//!
//! ## The Snapshot
//!
//! The [`Snapshot`] is the whole unit of persistence: entity sequences plus
//! the cursor state (selected note/folder/tag, search query). Every store
//! mutation rewrites the full snapshot through the persistence port.

use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Id of the folder that always exists and absorbs orphaned notes.
pub const DEFAULT_FOLDER_ID: &str = "default";

/// Display name of the default folder.
pub const DEFAULT_FOLDER_NAME: &str = "All Notes";

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Symbolic tag color from the fixed 8-color palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagColor {
    Blue,
    Red,
    Green,
    Yellow,
    Purple,
    Pink,
    Indigo,
    Teal,
}

impl TagColor {
    pub const PALETTE: [TagColor; 8] = [
        TagColor::Blue,
        TagColor::Red,
        TagColor::Green,
        TagColor::Yellow,
        TagColor::Purple,
        TagColor::Pink,
        TagColor::Indigo,
        TagColor::Teal,
    ];

    /// Pseudo-random palette pick, used when a tag is created without an
    /// explicit color.
    pub fn random() -> Self {
        *Self::PALETTE
            .choose(&mut rand::thread_rng())
            .unwrap_or(&TagColor::Blue)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TagColor::Blue => "blue",
            TagColor::Red => "red",
            TagColor::Green => "green",
            TagColor::Yellow => "yellow",
            TagColor::Purple => "purple",
            TagColor::Pink => "pink",
            TagColor::Indigo => "indigo",
            TagColor::Teal => "teal",
        }
    }
}

impl std::fmt::Display for TagColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TagColor {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "blue" => Ok(TagColor::Blue),
            "red" => Ok(TagColor::Red),
            "green" => Ok(TagColor::Green),
            "yellow" => Ok(TagColor::Yellow),
            "purple" => Ok(TagColor::Purple),
            "pink" => Ok(TagColor::Pink),
            "indigo" => Ok(TagColor::Indigo),
            "teal" => Ok(TagColor::Teal),
            other => Err(format!(
                "unknown color '{}' (expected one of: blue, red, green, yellow, purple, pink, indigo, teal)",
                other
            )),
        }
    }
}

/// A single markdown note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: String,
    pub title: String,
    pub content: String,
    pub folder_id: String,
    /// Tag ids, insertion order preserved for display, no duplicates.
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_pinned: bool,
}

impl Note {
    /// Creates a fresh note in the given folder with the default title and
    /// both timestamps set to now.
    pub fn new(folder_id: String) -> Self {
        let now = Utc::now();
        Self {
            id: new_id(),
            title: "Untitled Note".to_string(),
            content: String::new(),
            folder_id,
            tags: Vec::new(),
            created_at: now,
            updated_at: now,
            is_pinned: false,
        }
    }

    /// Refreshes `updated_at` to now.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn has_tag(&self, tag_id: &str) -> bool {
        self.tags.iter().any(|t| t == tag_id)
    }
}

/// A named container for notes. Hierarchy is modeled via `parent_id` but
/// all folders are flat in practice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Folder {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub parent_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Folder {
    pub fn new(name: String, parent_id: Option<String>) -> Self {
        Self {
            id: new_id(),
            name,
            parent_id,
            created_at: Utc::now(),
        }
    }

    /// The one folder that always exists.
    pub fn default_folder() -> Self {
        Self {
            id: DEFAULT_FOLDER_ID.to_string(),
            name: DEFAULT_FOLDER_NAME.to_string(),
            parent_id: None,
            created_at: Utc::now(),
        }
    }

    pub fn is_default(&self) -> bool {
        self.id == DEFAULT_FOLDER_ID
    }
}

/// A named, colored label attachable to multiple notes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub id: String,
    pub name: String,
    pub color: TagColor,
}

impl Tag {
    pub fn new(name: String, color: TagColor) -> Self {
        Self {
            id: new_id(),
            name,
            color,
        }
    }
}

/// The aggregate root: entity sequences plus selection/filter cursors.
///
/// Selecting a folder clears the tag selection; selecting a tag clears the
/// folder selection; selecting either clears the note selection. These
/// rules are enforced by the selection commands, not by this struct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Snapshot {
    pub notes: Vec<Note>,
    pub folders: Vec<Folder>,
    pub tags: Vec<Tag>,
    pub selected_note_id: Option<String>,
    pub selected_folder_id: Option<String>,
    pub selected_tag_id: Option<String>,
    pub search_query: String,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            notes: Vec::new(),
            folders: vec![Folder::default_folder()],
            tags: Vec::new(),
            selected_note_id: None,
            selected_folder_id: Some(DEFAULT_FOLDER_ID.to_string()),
            selected_tag_id: None,
            search_query: String::new(),
        }
    }
}

impl Snapshot {
    pub fn note(&self, id: &str) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    pub fn note_mut(&mut self, id: &str) -> Option<&mut Note> {
        self.notes.iter_mut().find(|n| n.id == id)
    }

    pub fn folder(&self, id: &str) -> Option<&Folder> {
        self.folders.iter().find(|f| f.id == id)
    }

    pub fn folder_mut(&mut self, id: &str) -> Option<&mut Folder> {
        self.folders.iter_mut().find(|f| f.id == id)
    }

    pub fn tag(&self, id: &str) -> Option<&Tag> {
        self.tags.iter().find(|t| t.id == id)
    }

    pub fn tag_mut(&mut self, id: &str) -> Option<&mut Tag> {
        self.tags.iter_mut().find(|t| t.id == id)
    }

    pub fn folder_by_name(&self, name: &str) -> Option<&Folder> {
        self.folders.iter().find(|f| f.name == name)
    }

    pub fn tag_by_name(&self, name: &str) -> Option<&Tag> {
        self.tags.iter().find(|t| t.name == name)
    }

    /// Whether this snapshot has never held user data: no notes and only
    /// the default folder. This is the first-run seeding condition.
    pub fn is_fresh(&self) -> bool {
        self.notes.is_empty()
            && self.folders.len() == 1
            && self.folders[0].id == DEFAULT_FOLDER_ID
    }
}
