use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::util::{format_timestamp, shorten_id};
use crate::viewmodel::CommitViewModel;

use super::ui_fmt;

pub fn render(frame: &mut Frame, vm: &CommitViewModel, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),  // Header
            Constraint::Min(0),     // Message
            Constraint::Length(3),  // Footer
        ])
        .split(area);

    render_header(frame, vm, chunks[0]);
    render_message(frame, vm, chunks[1]);
    render_footer(frame, chunks[2]);
}

fn render_header(frame: &mut Frame, vm: &CommitViewModel, area: Rect) {
    let commit = vm.commit();
    let label = Style::default().fg(Color::DarkGray);

    let parents = if commit.parents.is_empty() {
        "none (root commit)".to_string()
    } else {
        commit
            .parents
            .iter()
            .map(|p| shorten_id(&p.to_string()).to_string())
            .collect::<Vec<_>>()
            .join(" ")
    };

    let lines = vec![
        Line::from(vec![
            Span::styled("commit  ", label),
            Span::styled(commit.id_hex(), Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
        ]),
        Line::from(vec![Span::styled("author  ", label), Span::raw(commit.author.clone())]),
        Line::from(vec![
            Span::styled("date    ", label),
            Span::raw(format!("{} ({})", format_timestamp(commit.time), ui_fmt::age(commit.time))),
        ]),
        Line::from(vec![Span::styled("parents ", label), Span::raw(parents)]),
    ];

    let title = ui_fmt::breadcrumbs(vm.context().repo().name(), vm.context().subpaths());
    let header = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(header, area);
}

fn render_message(frame: &mut Frame, vm: &CommitViewModel, area: Rect) {
    let lines: Vec<Line> = vm
        .commit()
        .message
        .lines()
        .skip(vm.scroll())
        .take(area.height as usize)
        .map(|line| Line::from(line.replace('\t', "    ")))
        .collect();
    let message = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Message"));
    frame.render_widget(message, area);
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let spans: Vec<Span> = [
        ui_fmt::key_hint("Enter", " browse files  "),
        ui_fmt::key_hint("↑/↓", " scroll  "),
        ui_fmt::key_hint("Esc", " back  "),
        ui_fmt::key_hint("q", " quit"),
    ]
    .into_iter()
    .flatten()
    .collect();
    let footer = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}
