use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::util::{extract_author_name, shorten_id, shorten_message};
use crate::viewmodel::HistoryViewModel;

use super::ui_fmt;

pub fn render(frame: &mut Frame, vm: &HistoryViewModel, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(0),     // List
            Constraint::Length(3),  // Footer
        ])
        .split(area);

    render_header(frame, vm, chunks[0]);
    render_list(frame, vm, chunks[1]);
    render_footer(frame, chunks[2]);
}

fn render_header(frame: &mut Frame, vm: &HistoryViewModel, area: Rect) {
    let ctx = vm.context();
    let window = vm.window();
    let pages = ui_fmt::page_strip(window.previous_pages.as_deref(), window.page, vm.has_next_page());

    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            ui_fmt::breadcrumbs(ctx.repo().name(), ctx.subpaths()),
            Style::default().fg(Color::Yellow),
        ),
        Span::raw(format!(" @ {} | page ", ctx.ref_id())),
        Span::styled(pages, Style::default().fg(Color::Cyan)),
    ]))
    .block(Block::default().borders(Borders::ALL).title("History"));
    frame.render_widget(header, area);
}

fn render_list(frame: &mut Frame, vm: &HistoryViewModel, area: Rect) {
    let items: Vec<ListItem> = vm
        .commits()
        .iter()
        .map(|commit| {
            let id = commit.id_hex();
            ListItem::new(Line::from(vec![
                Span::styled(shorten_id(&id).to_string(), Style::default().fg(Color::DarkGray)),
                Span::raw(" "),
                Span::styled(format!("{:>22}", ui_fmt::age(commit.time)), Style::default().fg(Color::White)),
                Span::raw(" "),
                Span::styled(
                    format!("{:>15}", ui_fmt::truncate(extract_author_name(&commit.author), 15)),
                    Style::default().fg(Color::Yellow),
                ),
                Span::raw("  "),
                Span::raw(shorten_message(&commit.message).to_string()),
            ]))
        })
        .collect();

    let mut list_state = ListState::default();
    list_state.select(Some(vm.selected_index()));

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(format!("Commits ({} shown)", vm.commits().len())))
        .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
        .highlight_symbol(">> ");

    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let spans: Vec<Span> = [
        ui_fmt::key_hint("↑/↓", " nav  "),
        ui_fmt::key_hint("Enter", " commit details  "),
        ui_fmt::key_hint("n/p", " page  "),
        ui_fmt::key_hint("Esc", " back  "),
        ui_fmt::key_hint("q", " quit"),
    ]
    .into_iter()
    .flatten()
    .collect();
    let footer = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}
