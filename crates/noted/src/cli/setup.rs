//! Argument definitions for the `noted` binary.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use notedapp::model::TagColor;

#[derive(Parser, Debug)]
#[command(
    name = "noted",
    version,
    about = "Markdown notes with folders, tags, pinning, and AI assistance"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new note
    New {
        /// Initial title
        title: Option<String>,
        /// Folder to file the note under (defaults to the active folder)
        #[arg(long)]
        folder: Option<String>,
        /// Initial content
        #[arg(long)]
        content: Option<String>,
        /// Do not open the editor
        #[arg(long)]
        no_editor: bool,
    },

    /// List notes in the current view (the default command)
    List {
        /// Ignore the folder/tag/search cursors and list everything
        #[arg(long)]
        all: bool,
    },

    /// Show a note
    View {
        /// Position in the current listing (1-based)
        index: usize,
        /// Print raw markdown without styling
        #[arg(long)]
        raw: bool,
    },

    /// Edit a note in $EDITOR
    Edit {
        /// Position in the current listing (1-based)
        index: usize,
    },

    /// Delete a note
    Delete {
        /// Position in the current listing (1-based)
        index: usize,
    },

    /// Toggle a note's pin
    Pin {
        /// Position in the current listing (1-based)
        index: usize,
    },

    /// Move a note to another folder
    Move {
        /// Position in the current listing (1-based)
        index: usize,
        /// Target folder name
        folder: String,
    },

    /// Set the search query (omit the query to clear it)
    Search { query: Option<String> },

    /// Switch the active folder or tag filter
    Use {
        #[command(subcommand)]
        target: UseTarget,
    },

    /// Manage folders
    Folders {
        #[command(subcommand)]
        action: FolderAction,
    },

    /// Manage the tag registry
    Tags {
        #[command(subcommand)]
        action: TagAction,
    },

    /// Tag or untag a note
    Tag {
        #[command(subcommand)]
        action: TaggingAction,
    },

    /// AI writing assistance for a note
    Assist {
        #[command(subcommand)]
        kind: AssistKind,
    },

    /// Generate shell completions
    Completions { shell: Shell },
}

#[derive(Subcommand, Debug)]
pub enum UseTarget {
    /// Browse a folder (clears any tag filter)
    Folder { name: String },
    /// Filter by a tag (clears the folder filter)
    Tag { name: String },
    /// Clear the tag filter
    None,
}

#[derive(Subcommand, Debug)]
pub enum FolderAction {
    /// List folders with note counts
    List,
    /// Create a folder
    Create { name: String },
    /// Rename a folder
    Rename { name: String, new_name: String },
    /// Delete a folder; its notes move to All Notes
    Delete { name: String },
    /// Put the named folders first, in the given order
    Reorder { names: Vec<String> },
}

#[derive(Subcommand, Debug)]
pub enum TagAction {
    /// List tags
    List,
    /// Create a tag
    Create {
        name: String,
        /// Palette color (pseudo-random when omitted)
        #[arg(long)]
        color: Option<TagColor>,
    },
    /// Rename (and optionally recolor) a tag
    Rename {
        name: String,
        new_name: String,
        #[arg(long)]
        color: Option<TagColor>,
    },
    /// Delete a tag from the registry and from every note
    Delete { name: String },
    /// Put the named tags first, in the given order
    Reorder { names: Vec<String> },
}

#[derive(Subcommand, Debug)]
pub enum TaggingAction {
    /// Add a tag to a note
    Add { index: usize, tag: String },
    /// Remove a tag from a note
    Rm { index: usize, tag: String },
}

#[derive(Subcommand, Debug)]
pub enum AssistKind {
    /// Suggest what might come next in the note
    Suggest {
        index: usize,
        /// Append the suggestion to the note
        #[arg(long)]
        append: bool,
    },
    /// Grammar feedback on the note's last paragraph
    Grammar { index: usize },
    /// A brief insight into the note's content
    Insight { index: usize },
}
