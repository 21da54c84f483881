//! Command handlers: resolve user-facing references (positions, names)
//! into entity ids, call the API facade, and hand results to the renderer.

use crate::cli::render;
use crate::cli::setup::{
    AssistKind, Cli, Command, FolderAction, TagAction, TaggingAction, UseTarget,
};
use crate::editor;
use clap::CommandFactory;
use notedapp::ai::Assistant;
use notedapp::commands::NoteUpdate;
use notedapp::config::NotedConfig;
use notedapp::init::{self, NotedContext};
use notedapp::model::Note;
use notedapp::store::fs::JsonFileStore;
use notedapp::{NotedApi, NotedError, Result};

type Api = NotedApi<JsonFileStore>;

pub fn dispatch(cli: Cli) -> Result<()> {
    // Completions never need the data directory.
    if let Some(Command::Completions { shell }) = &cli.command {
        let mut cmd = Cli::command();
        clap_complete::generate(*shell, &mut cmd, "noted", &mut std::io::stdout());
        return Ok(());
    }

    let NotedContext { mut api, config } = init::initialize()?;

    match cli.command.unwrap_or(Command::List { all: false }) {
        Command::New {
            title,
            folder,
            content,
            no_editor,
        } => new_note(&mut api, &config, title, folder, content, no_editor),
        Command::List { all } => {
            list_notes(&api, all);
            Ok(())
        }
        Command::View { index, raw } => view_note(&mut api, index, raw),
        Command::Edit { index } => edit_note(&mut api, &config, index),
        Command::Delete { index } => {
            let note = note_at(&api, index)?;
            let result = api.delete_note(&note.id)?;
            render::messages(&result);
            Ok(())
        }
        Command::Pin { index } => {
            let note = note_at(&api, index)?;
            let result = api.toggle_pin(&note.id)?;
            render::messages(&result);
            Ok(())
        }
        Command::Move { index, folder } => {
            let note = note_at(&api, index)?;
            let folder_id = folder_id_by_name(&api, &folder)?;
            api.update_note(&note.id, &[NoteUpdate::Folder(folder_id)])?;
            render::success(&format!("Moved \"{}\" to {}", note.title, folder));
            Ok(())
        }
        Command::Search { query } => {
            api.set_search_query(query.unwrap_or_default())?;
            list_notes(&api, false);
            Ok(())
        }
        Command::Use { target } => use_target(&mut api, target),
        Command::Folders { action } => folders(&mut api, action),
        Command::Tags { action } => tags(&mut api, action),
        Command::Tag { action } => tagging(&mut api, action),
        Command::Assist { kind } => assist(&mut api, &config, kind),
        Command::Completions { .. } => unreachable!("handled above"),
    }
}

/// Resolve a 1-based position in the current filtered listing.
fn note_at(api: &Api, index: usize) -> Result<Note> {
    let listed = api.filtered_notes();
    index
        .checked_sub(1)
        .and_then(|i| listed.get(i).cloned())
        .ok_or_else(|| {
            NotedError::Api(format!(
                "no note at position {} (run 'noted list' to see the current view)",
                index
            ))
        })
}

fn folder_id_by_name(api: &Api, name: &str) -> Result<String> {
    api.snapshot()
        .folder_by_name(name)
        .map(|f| f.id.clone())
        .ok_or_else(|| NotedError::Api(format!("no folder named \"{}\"", name)))
}

fn tag_id_by_name(api: &Api, name: &str) -> Result<String> {
    api.snapshot()
        .tag_by_name(name)
        .map(|t| t.id.clone())
        .ok_or_else(|| NotedError::Api(format!("no tag named \"{}\"", name)))
}

fn list_notes(api: &Api, all: bool) {
    let notes = if all {
        notedapp::commands::query::pin_sorted(api.notes().to_vec())
    } else {
        api.filtered_notes()
    };
    render::note_list(&notes, api.snapshot(), all);
}

fn new_note(
    api: &mut Api,
    config: &NotedConfig,
    title: Option<String>,
    folder: Option<String>,
    content: Option<String>,
    no_editor: bool,
) -> Result<()> {
    let folder_id = match folder {
        Some(name) => Some(folder_id_by_name(api, &name)?),
        None => None,
    };

    let result = api.create_note(folder_id)?;
    let id = result.affected_notes[0].id.clone();

    let has_inline_input = title.is_some() || content.is_some();
    let title = title.unwrap_or_else(|| "Untitled Note".to_string());
    let content = content.unwrap_or_default();

    if no_editor {
        if has_inline_input {
            api.update_note(
                &id,
                &[NoteUpdate::Title(title), NoteUpdate::Content(content)],
            )?;
        }
    } else {
        let updates = editor::edit(&title, &content, &config.editor_ext())?;
        api.update_note(&id, &updates)?;
    }

    render::messages(&result);
    Ok(())
}

fn view_note(api: &mut Api, index: usize, raw: bool) -> Result<()> {
    let note = note_at(api, index)?;
    api.select_note(Some(note.id.clone()))?;
    render::note_view(&note, api.snapshot(), raw);
    Ok(())
}

fn edit_note(api: &mut Api, config: &NotedConfig, index: usize) -> Result<()> {
    let note = note_at(api, index)?;

    // The whole editing session collapses into a single update.
    let updates = editor::edit(&note.title, &note.content, &config.editor_ext())?;
    api.update_note(&note.id, &updates)?;
    render::success(&format!("Updated \"{}\"", note.title));
    Ok(())
}

fn use_target(api: &mut Api, target: UseTarget) -> Result<()> {
    match target {
        UseTarget::Folder { name } => {
            let id = folder_id_by_name(api, &name)?;
            api.select_folder(Some(id))?;
            render::success(&format!("Browsing folder {}", name));
        }
        UseTarget::Tag { name } => {
            let id = tag_id_by_name(api, &name)?;
            api.select_tag(Some(id))?;
            render::success(&format!("Filtering by tag {}", name));
        }
        UseTarget::None => {
            api.select_tag(None)?;
            render::success("Tag filter cleared");
        }
    }
    list_notes(api, false);
    Ok(())
}

fn folders(api: &mut Api, action: FolderAction) -> Result<()> {
    match action {
        FolderAction::List => render::folder_list(api.snapshot()),
        FolderAction::Create { name } => {
            let result = api.create_folder(&name, None)?;
            render::messages(&result);
        }
        FolderAction::Rename { name, new_name } => {
            let id = folder_id_by_name(api, &name)?;
            let result = api.rename_folder(&id, &new_name)?;
            render::messages(&result);
        }
        FolderAction::Delete { name } => {
            let id = folder_id_by_name(api, &name)?;
            let result = api.delete_folder(&id)?;
            render::messages(&result);
        }
        FolderAction::Reorder { names } => {
            let ids = names
                .iter()
                .map(|n| folder_id_by_name(api, n))
                .collect::<Result<Vec<_>>>()?;
            api.reorder_folders(&ids)?;
            render::folder_list(api.snapshot());
        }
    }
    Ok(())
}

fn tags(api: &mut Api, action: TagAction) -> Result<()> {
    match action {
        TagAction::List => render::tag_list(api.snapshot()),
        TagAction::Create { name, color } => {
            let result = api.create_tag(&name, color)?;
            render::messages(&result);
        }
        TagAction::Rename {
            name,
            new_name,
            color,
        } => {
            let id = tag_id_by_name(api, &name)?;
            // Keep the current color unless one was given.
            let color = color.unwrap_or_else(|| {
                api.snapshot()
                    .tag(&id)
                    .map(|t| t.color)
                    .unwrap_or(notedapp::model::TagColor::Blue)
            });
            let result = api.update_tag(&id, &new_name, color)?;
            render::messages(&result);
        }
        TagAction::Delete { name } => {
            let id = tag_id_by_name(api, &name)?;
            let result = api.delete_tag(&id)?;
            render::messages(&result);
        }
        TagAction::Reorder { names } => {
            let ids = names
                .iter()
                .map(|n| tag_id_by_name(api, n))
                .collect::<Result<Vec<_>>>()?;
            api.reorder_tags(&ids)?;
            render::tag_list(api.snapshot());
        }
    }
    Ok(())
}

fn tagging(api: &mut Api, action: TaggingAction) -> Result<()> {
    match action {
        TaggingAction::Add { index, tag } => {
            let note = note_at(api, index)?;
            let tag_id = tag_id_by_name(api, &tag)?;
            let result = api.add_tag_to_note(&note.id, &tag_id)?;
            render::messages(&result);
        }
        TaggingAction::Rm { index, tag } => {
            let note = note_at(api, index)?;
            let tag_id = tag_id_by_name(api, &tag)?;
            let result = api.remove_tag_from_note(&note.id, &tag_id)?;
            render::messages(&result);
        }
    }
    Ok(())
}

fn assist(api: &mut Api, config: &NotedConfig, kind: AssistKind) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    let assistant = Assistant::new(config.ai.clone());

    match kind {
        AssistKind::Suggest { index, append } => {
            let note = note_at(api, index)?;
            let text = runtime.block_on(assistant.suggest(&note.content));
            if text.is_empty() {
                println!("No suggestion available.");
                return Ok(());
            }
            println!("{}", text);
            if append {
                let content = if note.content.is_empty() {
                    text
                } else {
                    format!("{}\n\n{}", note.content, text)
                };
                api.update_note(&note.id, &[NoteUpdate::Content(content)])?;
                render::success(&format!("Suggestion appended to \"{}\"", note.title));
            }
        }
        AssistKind::Grammar { index } => {
            let note = note_at(api, index)?;
            // Feedback targets the paragraph being written, not the whole note.
            let last_paragraph = note
                .content
                .split("\n\n")
                .filter(|p| !p.trim().is_empty())
                .last()
                .unwrap_or("");
            let text = runtime.block_on(assistant.grammar(last_paragraph));
            if text.is_empty() {
                println!("No grammar feedback available.");
            } else {
                println!("{}", text);
            }
        }
        AssistKind::Insight { index } => {
            let note = note_at(api, index)?;
            let text = runtime.block_on(assistant.insight(&note.content));
            if text.is_empty() {
                println!("No insight available.");
            } else {
                println!("{}", text);
            }
        }
    }
    Ok(())
}
