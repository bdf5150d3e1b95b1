//! Output formatting.
//!
//! Every function here takes data and returns a `String`; printing happens in
//! `commands.rs`. Styling goes through [`super::styles`].

use super::styles;
use chrono::{DateTime, Utc};
use snipzapp::model::Snippet;
use snipzapp::view::SnippetListView;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const PREVIEW_CHARS: usize = 100;
const TITLE_WIDTH: usize = 48;
const ELLIPSIS: &str = "...";

pub const EMPTY_TITLE: &str = "No snippets found";
pub const EMPTY_FILTERED_HINT: &str = "Try adjusting your search or filters";
pub const EMPTY_HINT: &str = "Create your first snippet to get started!";

/// The list page: stats, active filters, then one block per visible snippet.
pub fn render_list(view: &SnippetListView, now: DateTime<Utc>) -> String {
    let mut out = String::new();
    let total = view.snippets().len();
    let visible = view.visible_snippets();

    out.push_str(&format!(
        "{}\n",
        styles::MUTED.apply_to(format!(
            "{} · {}",
            plural(total, "snippet"),
            plural(view.all_tags().len(), "tag")
        ))
    ));

    if view.filter().is_active() {
        out.push_str(&format!(
            "{}\n",
            styles::MUTED.apply_to(format!(
                "Showing {} of {}{}",
                visible.len(),
                total,
                describe_filter(view)
            ))
        ));
    }
    out.push('\n');

    if visible.is_empty() {
        out.push_str(&render_empty(view.filter().is_active()));
        return out;
    }

    for snippet in visible {
        out.push_str(&render_row(snippet, view.tag_filter(), now));
        out.push('\n');
    }
    out
}

pub fn render_empty(filtered: bool) -> String {
    let hint = if filtered {
        EMPTY_FILTERED_HINT
    } else {
        EMPTY_HINT
    };
    format!(
        "{}\n{}\n",
        styles::TITLE.apply_to(EMPTY_TITLE),
        styles::MUTED.apply_to(hint)
    )
}

fn describe_filter(view: &SnippetListView) -> String {
    let mut parts = Vec::new();
    if !view.search_text().is_empty() {
        parts.push(format!("search \"{}\"", view.search_text()));
    }
    if let Some(tag) = view.tag_filter() {
        parts.push(format!("tag {}", tag));
    }
    format!(" ({})", parts.join(", "))
}

fn render_row(snippet: &Snippet, active_tag: Option<&str>, now: DateTime<Utc>) -> String {
    let title = truncate_to_width(&snippet.title, TITLE_WIDTH);
    let pad = TITLE_WIDTH.saturating_sub(title.width());

    let mut out = format!(
        "{} {}{}  {}\n",
        styles::ID.apply_to(format!("{:>4}.", snippet.id)),
        styles::TITLE.apply_to(&title),
        " ".repeat(pad),
        styles::TIME.apply_to(format_time_ago(snippet.updated_at, now)),
    );

    let tags = snippet.tags();
    if !tags.is_empty() {
        out.push_str(&format!("      {}\n", render_tag_line(&tags, active_tag)));
    }

    for line in preview(&snippet.code).lines() {
        out.push_str(&format!("      {} {}\n", styles::MUTED.apply_to("│"), line));
    }
    out
}

fn render_tag_line(tags: &[String], active_tag: Option<&str>) -> String {
    tags.iter()
        .map(|tag| {
            if Some(tag.as_str()) == active_tag {
                styles::ACTIVE_TAG.apply_to(format!("#{}", tag)).to_string()
            } else {
                styles::TAG.apply_to(format!("#{}", tag)).to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// The detail page: title, tags, timestamps, then the code verbatim.
pub fn render_snippet(snippet: &Snippet, now: DateTime<Utc>) -> String {
    let mut out = format!(
        "{} {}\n",
        styles::ID.apply_to(format!("{}.", snippet.id)),
        styles::TITLE.apply_to(&snippet.title)
    );

    let tags = snippet.tags();
    if !tags.is_empty() {
        out.push_str(&format!("{}\n", render_tag_line(&tags, None)));
    }

    out.push_str(&format!(
        "{}\n\n",
        styles::TIME.apply_to(format!(
            "created {}, updated {}",
            format_time_ago(snippet.created_at, now),
            format_time_ago(snippet.updated_at, now)
        ))
    ));
    out.push_str(&snippet.code);
    if !snippet.code.ends_with('\n') {
        out.push('\n');
    }
    out
}

/// Every tag with the number of snippets carrying it, most used first.
pub fn render_tags(view: &SnippetListView) -> String {
    let mut counts: Vec<(String, usize)> = view
        .all_tags()
        .into_iter()
        .map(|tag| {
            let count = view.snippets().iter().filter(|s| s.has_tag(&tag)).count();
            (tag, count)
        })
        .collect();

    if counts.is_empty() {
        return format!("{}\n", styles::MUTED.apply_to("No tags yet"));
    }

    // Stable sort keeps first-seen order among equal counts
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    let width = counts.iter().map(|(t, _)| t.width()).max().unwrap_or(0) + 1;

    counts
        .iter()
        .map(|(tag, count)| {
            let label = format!("#{}", tag);
            format!(
                "{}{}  {}\n",
                styles::TAG.apply_to(&label),
                " ".repeat(width.saturating_sub(label.width())),
                styles::MUTED.apply_to(count)
            )
        })
        .collect()
}

pub fn success(message: &str) -> String {
    styles::SUCCESS.apply_to(message).to_string()
}

pub fn warning(message: &str) -> String {
    styles::WARNING.apply_to(message).to_string()
}

pub fn error(message: &str) -> String {
    format!("{} {}", styles::ERROR.apply_to("Error:"), message)
}

/// The first [`PREVIEW_CHARS`] characters of `code`, with `...` when cut.
pub fn preview(code: &str) -> String {
    match code.char_indices().nth(PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}{}", &code[..cut], ELLIPSIS),
        None => code.to_string(),
    }
}

/// Cuts `s` to at most `max` terminal columns, ending in `...` when cut.
pub fn truncate_to_width(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }
    let budget = max.saturating_sub(ELLIPSIS.len());
    let mut used = 0;
    let mut out = String::new();
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str(ELLIPSIS);
    out
}

fn format_time_ago(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now
        .signed_duration_since(timestamp)
        .to_std()
        .unwrap_or_default();
    timeago::Formatter::new().convert(elapsed)
}

fn plural(n: usize, noun: &str) -> String {
    if n == 1 {
        format!("{} {}", n, noun)
    } else {
        format!("{} {}s", n, noun)
    }
}
