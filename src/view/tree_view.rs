use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::browse::RequestContext;
use crate::model::EntryKind;
use crate::util::{extract_author_name, shorten_id, shorten_message};
use crate::viewmodel::TreeViewModel;

use super::ui_fmt;

pub fn render(frame: &mut Frame, vm: &TreeViewModel, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),  // Header
            Constraint::Min(0),     // List
            Constraint::Length(3),  // Footer
        ])
        .split(area);

    render_header(frame, vm.context(), chunks[0]);
    render_list(frame, vm, chunks[1]);
    render_footer(frame, chunks[2]);
}

/// Breadcrumbs, the ref being browsed and its commit. Shared with the
/// file view.
pub(super) fn render_header(frame: &mut Frame, ctx: &RequestContext, area: Rect) {
    let commit = ctx.commit();
    let id = commit.id_hex();
    let reference = if ctx.is_branch() {
        Span::styled(format!("branch {}", ctx.branch()), Style::default().fg(Color::Green))
    } else {
        Span::styled(
            format!("commit {} (branch {})", shorten_id(&id), ctx.branch()),
            Style::default().fg(Color::Magenta),
        )
    };

    let header = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(
                ui_fmt::breadcrumbs(ctx.repo().name(), ctx.subpaths()),
                Style::default().fg(Color::Yellow),
            ),
            Span::raw(" | "),
            reference,
        ]),
        Line::from(vec![
            Span::styled(shorten_id(&id).to_string(), Style::default().fg(Color::DarkGray)),
            Span::raw(" "),
            Span::raw(ui_fmt::truncate(shorten_message(&commit.message), 60)),
            Span::raw(" | "),
            Span::styled(extract_author_name(&commit.author).to_string(), Style::default().fg(Color::Cyan)),
            Span::raw(", "),
            Span::raw(ui_fmt::age(commit.time)),
        ]),
    ])
    .block(Block::default().borders(Borders::ALL).title("repobrowse"));
    frame.render_widget(header, area);
}

fn render_list(frame: &mut Frame, vm: &TreeViewModel, area: Rect) {
    let listing = vm.listing();

    let items: Vec<ListItem> = listing
        .entries()
        .map(|(kind, entry)| {
            let style = match kind {
                EntryKind::Directory => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
                EntryKind::File => Style::default(),
            };
            ListItem::new(Line::from(vec![
                Span::raw(ui_fmt::entry_prefix(kind)),
                Span::styled(entry.name.as_str(), style),
            ]))
        })
        .collect();

    let mut list_state = ListState::default();
    list_state.select(Some(vm.selected_index()));

    let title = format!("{} directories, {} files", listing.dirs.len(), listing.files.len());
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
        .highlight_symbol(">> ");

    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let spans: Vec<Span> = [
        ui_fmt::key_hint("↑/↓", " nav  "),
        ui_fmt::key_hint("Enter/→", " open  "),
        ui_fmt::key_hint("←", " up  "),
        ui_fmt::key_hint("b", " next branch  "),
        ui_fmt::key_hint("H", " history  "),
        ui_fmt::key_hint("q", " quit"),
    ]
    .into_iter()
    .flatten()
    .collect();
    let footer = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}
