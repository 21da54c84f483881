//! Terminal rendering: leveled messages, note/folder/tag listings, and
//! markdown note bodies as styled text.

use chrono::{DateTime, Utc};
use console::{style, Color, Style};
use notedapp::commands::{CmdResult, MessageLevel};
use notedapp::model::{Note, Snapshot, Tag, TagColor};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const TITLE_WIDTH: usize = 40;

pub fn messages(result: &CmdResult) {
    for message in &result.messages {
        match message.level {
            MessageLevel::Info => info(&message.content),
            MessageLevel::Success => success(&message.content),
            MessageLevel::Warning => println!("{} {}", style("!").yellow(), message.content),
            MessageLevel::Error => eprintln!("{} {}", style("x").red(), message.content),
        }
    }
}

pub fn success(msg: &str) {
    println!("{} {}", style("+").green(), msg);
}

pub fn info(msg: &str) {
    println!("{}", style(msg).dim());
}

pub fn note_list(notes: &[Note], snap: &Snapshot, all: bool) {
    println!("{}", style(context_line(snap, all)).dim());

    if notes.is_empty() {
        println!("No notes here. Create one with 'noted new'.");
        return;
    }

    for (i, note) in notes.iter().enumerate() {
        let pin = if note.is_pinned {
            style("*").yellow().to_string()
        } else {
            " ".to_string()
        };
        let badges = note
            .tags
            .iter()
            .filter_map(|id| snap.tag(id))
            .map(badge)
            .collect::<Vec<_>>()
            .join(" ");
        println!(
            "{:>3} {} {} {} {}",
            i + 1,
            pin,
            fit(&note.title, TITLE_WIDTH),
            badges,
            style(time_ago(note.updated_at)).dim()
        );
    }
}

pub fn folder_list(snap: &Snapshot) {
    for folder in &snap.folders {
        let count = snap.notes.iter().filter(|n| n.folder_id == folder.id).count();
        let marker = if snap.selected_folder_id.as_deref() == Some(folder.id.as_str()) {
            ">"
        } else {
            " "
        };
        println!(
            "{} {} {}",
            marker,
            fit(&folder.name, 24),
            style(format!("{} note{}", count, if count == 1 { "" } else { "s" })).dim()
        );
    }
}

pub fn tag_list(snap: &Snapshot) {
    if snap.tags.is_empty() {
        println!("No tags yet. Create one with 'noted tags create <name>'.");
        return;
    }
    for tag in &snap.tags {
        let count = snap.notes.iter().filter(|n| n.has_tag(&tag.id)).count();
        let marker = if snap.selected_tag_id.as_deref() == Some(tag.id.as_str()) {
            ">"
        } else {
            " "
        };
        println!(
            "{} {} {} {}",
            marker,
            tag_style(tag.color).apply_to("o"),
            fit(&tag.name, 20),
            style(format!(
                "{}, {} note{}",
                tag.color,
                count,
                if count == 1 { "" } else { "s" }
            ))
            .dim()
        );
    }
}

pub fn note_view(note: &Note, snap: &Snapshot, raw: bool) {
    println!("{}", style(&note.title).bold());

    let folder = snap
        .folder(&note.folder_id)
        .map(|f| f.name.as_str())
        .unwrap_or("(no folder)");
    let tags = note
        .tags
        .iter()
        .filter_map(|id| snap.tag(id))
        .map(|t| t.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    let tags = if tags.is_empty() { "no tags".to_string() } else { tags };
    println!(
        "{}",
        style(format!(
            "{} | {} | updated {}",
            folder,
            tags,
            time_ago(note.updated_at)
        ))
        .dim()
    );
    println!();

    if raw {
        println!("{}", note.content);
    } else {
        println!("{}", render_markdown(&note.content));
    }
}

fn badge(tag: &Tag) -> String {
    tag_style(tag.color)
        .apply_to(format!("[{}]", tag.name))
        .to_string()
}

fn tag_style(color: TagColor) -> Style {
    let color = match color {
        TagColor::Blue => Color::Blue,
        TagColor::Red => Color::Red,
        TagColor::Green => Color::Green,
        TagColor::Yellow => Color::Yellow,
        TagColor::Purple => Color::Magenta,
        TagColor::Pink => Color::Color256(205),
        TagColor::Indigo => Color::Color256(63),
        TagColor::Teal => Color::Cyan,
    };
    Style::new().fg(color)
}

fn context_line(snap: &Snapshot, all: bool) -> String {
    if all {
        return "All notes (filters ignored)".to_string();
    }

    let mut parts = Vec::new();
    if let Some(id) = &snap.selected_tag_id {
        let name = snap.tag(id).map(|t| t.name.as_str()).unwrap_or("?");
        parts.push(format!("Tag: {}", name));
    } else if let Some(id) = &snap.selected_folder_id {
        let name = snap.folder(id).map(|f| f.name.as_str()).unwrap_or("?");
        parts.push(format!("Folder: {}", name));
    }
    if !snap.search_query.is_empty() {
        parts.push(format!("search: \"{}\"", snap.search_query));
    }

    if parts.is_empty() {
        "All notes".to_string()
    } else {
        parts.join(", ")
    }
}

fn time_ago(at: DateTime<Utc>) -> String {
    let duration = (Utc::now() - at).to_std().unwrap_or_default();
    timeago::Formatter::new().convert(duration)
}

/// Pad or truncate to a fixed display width, ellipsizing long input.
fn fit(s: &str, width: usize) -> String {
    if s.width() <= width {
        return format!("{}{}", s, " ".repeat(width - s.width()));
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width.saturating_sub(1) {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    format!("{}{}", out, " ".repeat(width.saturating_sub(used + 1)))
}

/// Render markdown into styled terminal text.
pub fn render_markdown(input: &str) -> String {
    use pulldown_cmark::{Event, Options, Parser, Tag as MdTag, TagEnd};

    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let mut out = String::new();
    let mut heading = false;
    let mut strong = false;
    let mut emphasis = false;
    let mut strike = false;
    let mut in_code_block = false;
    let mut lists: Vec<Option<u64>> = Vec::new();
    let mut link_dest: Option<String> = None;

    for event in Parser::new_ext(input, options) {
        match event {
            Event::Start(MdTag::Heading { .. }) => {
                if !out.is_empty() && !out.ends_with("\n\n") {
                    out.push('\n');
                }
                heading = true;
            }
            Event::End(TagEnd::Heading(_)) => {
                heading = false;
                out.push_str("\n\n");
            }
            Event::End(TagEnd::Paragraph) => out.push_str("\n\n"),
            Event::Start(MdTag::List(start)) => lists.push(start),
            Event::End(TagEnd::List(_)) => {
                lists.pop();
                if lists.is_empty() {
                    out.push('\n');
                }
            }
            Event::Start(MdTag::Item) => {
                if !out.is_empty() && !out.ends_with('\n') {
                    out.push('\n');
                }
                let indent = "  ".repeat(lists.len().saturating_sub(1));
                match lists.last_mut() {
                    Some(Some(n)) => {
                        out.push_str(&format!("{}{}. ", indent, n));
                        *n += 1;
                    }
                    _ => out.push_str(&format!("{}- ", indent)),
                }
            }
            Event::End(TagEnd::Item) => {
                if !out.ends_with('\n') {
                    out.push('\n');
                }
            }
            Event::Start(MdTag::CodeBlock(_)) => {
                in_code_block = true;
            }
            Event::End(TagEnd::CodeBlock) => {
                in_code_block = false;
                out.push('\n');
            }
            Event::Start(MdTag::Strong) => strong = true,
            Event::End(TagEnd::Strong) => strong = false,
            Event::Start(MdTag::Emphasis) => emphasis = true,
            Event::End(TagEnd::Emphasis) => emphasis = false,
            Event::Start(MdTag::Strikethrough) => strike = true,
            Event::End(TagEnd::Strikethrough) => strike = false,
            Event::Start(MdTag::Link { dest_url, .. }) => {
                link_dest = Some(dest_url.to_string());
            }
            Event::End(TagEnd::Link) => {
                if let Some(dest) = link_dest.take() {
                    out.push_str(&style(format!(" ({})", dest)).dim().to_string());
                }
            }
            Event::Text(text) => {
                if in_code_block {
                    for line in text.lines() {
                        out.push_str("    ");
                        out.push_str(&style(line).dim().to_string());
                        out.push('\n');
                    }
                } else if heading {
                    out.push_str(&style(text.as_ref()).bold().cyan().to_string());
                } else {
                    let mut styled = Style::new();
                    if strong {
                        styled = styled.bold();
                    }
                    if emphasis {
                        styled = styled.italic();
                    }
                    if strong || emphasis {
                        out.push_str(&styled.apply_to(text.as_ref()).to_string());
                    } else if strike {
                        out.push_str(&format!("~~{}~~", text));
                    } else {
                        out.push_str(&text);
                    }
                }
            }
            Event::Code(code) => {
                out.push_str(&style(code.as_ref()).dim().to_string());
            }
            Event::TaskListMarker(done) => {
                out.push_str(if done { "[x] " } else { "[ ] " });
            }
            Event::SoftBreak | Event::HardBreak => out.push('\n'),
            Event::Rule => out.push_str("--------\n\n"),
            _ => {}
        }
    }

    let trimmed = out.trim_end();
    format!("{}\n", trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use notedapp::model::{Folder, DEFAULT_FOLDER_ID};

    // console styles are disabled off-tty, so rendered output is plain
    // text in tests.

    #[test]
    fn test_markdown_bullets() {
        let out = render_markdown("- one\n- two\n");
        assert!(out.contains("- one\n"));
        assert!(out.contains("- two\n"));
    }

    #[test]
    fn test_markdown_ordered_list() {
        let out = render_markdown("1. first\n2. second\n");
        assert!(out.contains("1. first"));
        assert!(out.contains("2. second"));
    }

    #[test]
    fn test_markdown_nested_list_indents() {
        let out = render_markdown("- outer\n  - inner\n");
        assert!(out.contains("- outer"));
        assert!(out.contains("  - inner"));
    }

    #[test]
    fn test_markdown_task_list() {
        let out = render_markdown("- [x] done\n- [ ] open\n");
        assert!(out.contains("[x] done"));
        assert!(out.contains("[ ] open"));
    }

    #[test]
    fn test_markdown_heading_text_survives() {
        let out = render_markdown("# Title\n\nbody");
        assert!(out.contains("Title"));
        assert!(out.contains("body"));
    }

    #[test]
    fn test_markdown_code_block_is_indented() {
        let out = render_markdown("```\nlet x = 1;\n```\n");
        assert!(out.contains("    let x = 1;"));
    }

    #[test]
    fn test_markdown_link_shows_destination() {
        let out = render_markdown("[docs](https://example.com)");
        assert!(out.contains("docs"));
        assert!(out.contains("(https://example.com)"));
    }

    #[test]
    fn test_fit_pads_short_strings() {
        assert_eq!(fit("ab", 5), "ab   ");
    }

    #[test]
    fn test_fit_truncates_with_ellipsis() {
        let out = fit("a long title here", 8);
        assert_eq!(out.width(), 8);
        assert!(out.contains('…'));
    }

    #[test]
    fn test_context_line_folder_and_search() {
        let mut snap = Snapshot::default();
        snap.search_query = "todo".to_string();
        let line = context_line(&snap, false);
        assert!(line.contains("Folder: All Notes"));
        assert!(line.contains("search: \"todo\""));
    }

    #[test]
    fn test_context_line_tag_wins_over_folder() {
        let mut snap = Snapshot::default();
        snap.tags.push(notedapp::model::Tag::new(
            "work".to_string(),
            TagColor::Blue,
        ));
        let tag_id = snap.tags[0].id.clone();
        snap.selected_folder_id = None;
        snap.selected_tag_id = Some(tag_id);

        let line = context_line(&snap, false);
        assert!(line.contains("Tag: work"));
    }

    #[test]
    fn test_context_line_all_ignores_cursors() {
        let mut snap = Snapshot::default();
        snap.folders.push(Folder::new("Work".to_string(), None));
        snap.search_query = "x".to_string();
        assert_eq!(context_line(&snap, true), "All notes (filters ignored)");
    }

    #[test]
    fn test_note_view_header_resolves_default_folder() {
        let snap = Snapshot::default();
        let note = Note::new(DEFAULT_FOLDER_ID.to_string());
        // Smoke: must not panic with an empty tag list.
        note_view(&note, &snap, true);
    }
}
