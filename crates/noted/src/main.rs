//! # Noted CLI
//!
//! The binary is intentionally thin: the CLI lives in `src/cli/`, while
//! this file only invokes `cli::run()` and handles process termination.
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/noted/src/cli/)                          │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Command selection + context wiring (commands.rs)         │
//! │  - Terminal rendering via console styles (render.rs)        │
//! │  - Shell completion scripts                                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  notedapp library (crates/notedapp)                         │
//! │  - API facade over the snapshot store                       │
//! │  - Command modules, persistence port, AI assistant          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything from the library's `api.rs` inward is UI agnostic; this
//! crate is responsible for **all** user-facing concerns: argument
//! parsing, dispatch, `$EDITOR` round-trips, error handling, and
//! rendering. Notes are addressed by their 1-based position in the
//! current filtered listing; folders and tags by name.

mod cli;
mod editor;

fn main() {
    env_logger::init();
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
