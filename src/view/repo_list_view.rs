use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::browse::RepoOrder;
use crate::viewmodel::RepoListViewModel;

use super::ui_fmt;

pub fn render(frame: &mut Frame, vm: &RepoListViewModel, area: Rect) {
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

fn render_header(frame: &mut Frame, vm: &RepoListViewModel, area: Rect) {
    let order = match vm.order() {
        RepoOrder::Name => "name",
        RepoOrder::LastUpdate => "last update",
    };
    let header = Paragraph::new(Line::from(vec![
        Span::raw(format!("{} repositories", vm.summaries().len())),
        Span::raw(" | sorted by "),
        Span::styled(order, Style::default().fg(Color::Yellow)),
    ]))
    .block(Block::default().borders(Borders::ALL).title("repobrowse"));
    frame.render_widget(header, area);
}

fn render_list(frame: &mut Frame, vm: &RepoListViewModel, area: Rect) {
    let width = vm
        .summaries()
        .iter()
        .map(|s| s.name.chars().count())
        .max()
        .unwrap_or(0);

    let items: Vec<ListItem> = vm
        .summaries()
        .iter()
        .map(|summary| {
            ListItem::new(Line::from(vec![
                Span::raw(format!("{:<width$}", summary.name, width = width)),
                Span::raw("  "),
                Span::styled(ui_fmt::age(summary.last_update), Style::default().fg(Color::DarkGray)),
            ]))
        })
        .collect();

    let mut list_state = ListState::default();
    list_state.select(Some(vm.selected_index()));

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Repositories"))
        .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
        .highlight_symbol(">> ");

    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let spans: Vec<Span> = [
        ui_fmt::key_hint("↑/↓", " nav  "),
        ui_fmt::key_hint("Enter", " open  "),
        ui_fmt::key_hint("u", " order  "),
        ui_fmt::key_hint("q", " quit"),
    ]
    .into_iter()
    .flatten()
    .collect();
    let footer = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}
