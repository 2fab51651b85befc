use ratatui::style::{Color, Style};
use ratatui::text::Span;

use crate::browse::PageLink;
use crate::model::EntryKind;
use crate::util::{time_since_now, Subpaths};

/// Shorten `s` to at most `width` characters, marking the cut with `…`
pub fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        return s.to_string();
    }
    let kept: String = s.chars().take(width.saturating_sub(1)).collect();
    kept + "…"
}

/// "3 days ago", or "now" for timestamps not in the past
pub fn age(timestamp: i64) -> String {
    let since = time_since_now(timestamp);
    if since.is_empty() {
        "now".to_string()
    } else {
        format!("{} ago", since)
    }
}

/// `repo / dir / file`
pub fn breadcrumbs(repo: &str, subpaths: Subpaths<'_>) -> String {
    subpaths
        .into_iter()
        .filter(|(name, _)| !name.is_empty())
        .fold(repo.to_string(), |acc, (name, _)| format!("{} / {}", acc, name))
}

pub fn entry_prefix(kind: EntryKind) -> &'static str {
    match kind {
        EntryKind::Directory => "▸ ",
        EntryKind::File => "  ",
    }
}

/// Page navigation: earlier pages, gaps as `…`, the current page in
/// brackets and `»` when a later page may exist.
pub fn page_strip(previous: Option<&[PageLink]>, current: u32, has_next: bool) -> String {
    let mut parts: Vec<String> = previous
        .unwrap_or_default()
        .iter()
        .map(|link| match link {
            PageLink::Page(n) => n.to_string(),
            PageLink::Gap => "…".to_string(),
        })
        .collect();
    parts.push(format!("[{}]", current));
    if has_next {
        parts.push("»".to_string());
    }
    parts.join(" ")
}

/// One `key description` pair for footers
pub fn key_hint<'a>(key: &'a str, description: &'a str) -> [Span<'a>; 2] {
    [
        Span::styled(key, Style::default().fg(Color::Yellow)),
        Span::raw(description),
    ]
}
