use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::util::format_size;
use crate::viewmodel::BlobViewModel;

use super::{tree_view, ui_fmt};

pub fn render(frame: &mut Frame, vm: &BlobViewModel, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),  // Header
            Constraint::Min(0),     // Content
            Constraint::Length(3),  // Footer
        ])
        .split(area);

    tree_view::render_header(frame, vm.context(), chunks[0]);
    render_content(frame, vm, chunks[1]);
    render_footer(frame, chunks[2]);
}

fn render_content(frame: &mut Frame, vm: &BlobViewModel, area: Rect) {
    let view = vm.view();
    let title = format!(
        "{} | {} | {}",
        view.filename,
        view.content_type.mime,
        format_size(view.blob.size() as u64)
    );
    let block = Block::default().borders(Borders::ALL).title(title);

    let notice = if view.is_image {
        Some("Image file, not shown")
    } else if view.is_binary() {
        Some("Binary file, not shown")
    } else if view.too_large {
        Some("File too large to display")
    } else if view.text.is_none() {
        Some("File could not be decoded")
    } else {
        None
    };

    let paragraph = match (notice, view.text.as_deref()) {
        (None, Some(text)) => {
            let width = vm.line_count().to_string().len();
            let lines: Vec<Line> = text
                .lines()
                .enumerate()
                .skip(vm.scroll())
                .take(area.height as usize)
                .map(|(i, line)| {
                    Line::from(vec![
                        Span::styled(format!("{:>width$} ", i + 1, width = width), Style::default().fg(Color::DarkGray)),
                        Span::raw(line.replace('\t', "    ")),
                    ])
                })
                .collect();
            Paragraph::new(lines)
        }
        (notice, _) => Paragraph::new(Line::from(Span::styled(
            notice.unwrap_or_default(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::ITALIC),
        ))),
    };

    frame.render_widget(paragraph.block(block), area);
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let spans: Vec<Span> = [
        ui_fmt::key_hint("↑/↓", " scroll  "),
        ui_fmt::key_hint("PgUp/PgDn", " page  "),
        ui_fmt::key_hint("H", " history  "),
        ui_fmt::key_hint("Esc", " back  "),
        ui_fmt::key_hint("q", " quit"),
    ]
    .into_iter()
    .flatten()
    .collect();
    let footer = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}
