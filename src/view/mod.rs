mod blob_view;
mod commit_view;
mod history_view;
mod repo_list_view;
mod tree_view;
mod ui_fmt;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

use crate::viewmodel::{AppViewModel, Screen};

pub use blob_view::render as render_blob;
pub use commit_view::render as render_commit;
pub use history_view::render as render_history;
pub use repo_list_view::render as render_repo_list;
pub use tree_view::render as render_tree;

/// Draw the current screen, with the last error underneath when there is one
pub fn render(frame: &mut Frame, app: &AppViewModel) {
    let mut area = frame.area();
    if let Some(status) = app.status() {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(area);
        area = chunks[0];
        let line = Paragraph::new(status.to_string()).style(Style::default().fg(Color::Red));
        frame.render_widget(line, chunks[1]);
    }

    match app.screen() {
        Screen::RepoList(vm) => render_repo_list(frame, vm, area),
        Screen::Tree(vm) => render_tree(frame, vm, area),
        Screen::History(vm) => render_history(frame, vm, area),
        Screen::Commit(vm) => render_commit(frame, vm, area),
        Screen::Blob(vm) => render_blob(frame, vm, area),
    }
}
