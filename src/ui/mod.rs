pub mod charts;
pub mod header;
pub mod help;
pub mod process_table;
pub mod statusbar;
pub mod theme;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};

use crate::app::App;

pub fn draw(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Percentage(35),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(frame.area());

    header::render(
        frame,
        chunks[0],
        app.snapshot.as_ref(),
        &app.throughput,
        app.processes.len(),
        &app.theme,
    );
    charts::render(
        frame,
        chunks[1],
        &app.history,
        app.snapshot.as_ref(),
        &app.theme,
    );

    let table_area = chunks[2];
    app.page_size = process_table::visible_rows(table_area);
    process_table::render(
        frame,
        table_area,
        &app.processes,
        app.sort,
        app.selected_index,
        &app.theme,
    );

    statusbar::render(
        frame,
        chunks[3],
        app.input_mode,
        &app.search_text,
        app.status_message.as_ref(),
        &app.keybinds,
        &app.theme,
    );

    // Help overlay last so it draws on top
    if app.show_help() {
        help::render(frame, frame.area(), &app.help_entries(), &app.theme);
    }
}
