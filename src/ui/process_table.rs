use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, BorderType, Borders, Cell, Row, Table, TableState};

use crate::format::truncate_unicode;
use crate::system::process::{ProcessRecord, SortColumn, SortState};
use crate::ui::theme::Theme;

const WIDTHS: [Constraint; 4] = [
    Constraint::Length(8),
    Constraint::Min(16),
    Constraint::Length(10),
    Constraint::Length(10),
];

// PID, CPU % and Memory % columns plus the gaps between all four.
const FIXED_WIDTH: u16 = 8 + 10 + 10 + 3;
const MIN_NAME_WIDTH: u16 = 16;

/// Rows that fit below the border and the header line.
pub fn visible_rows(area: Rect) -> usize {
    area.height.saturating_sub(3) as usize
}

/// Cells available to the name column inside the borders.
pub fn name_width(area: Rect) -> usize {
    area.width
        .saturating_sub(2 + FIXED_WIDTH)
        .max(MIN_NAME_WIDTH) as usize
}

pub fn header_labels(sort: SortState) -> Vec<String> {
    SortColumn::ALL
        .iter()
        .map(|&column| {
            if column == sort.column {
                format!("{} {}", column.label(), sort.indicator())
            } else {
                column.label().to_string()
            }
        })
        .collect()
}

pub fn row_cells(record: &ProcessRecord, name_width: usize) -> [String; 4] {
    [
        record.pid.to_string(),
        truncate_unicode(&record.name, name_width),
        format!("{:.1}%", record.cpu_percent),
        format!("{:.2}%", record.memory_percent),
    ]
}

pub fn render(
    frame: &mut Frame,
    area: Rect,
    processes: &[ProcessRecord],
    sort: SortState,
    selected_index: usize,
    theme: &Theme,
) {
    let header = Row::new(header_labels(sort).into_iter().map(Cell::from)).style(
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD),
    );

    let width = name_width(area);
    let rows = processes
        .iter()
        .map(|p| Row::new(row_cells(p, width).into_iter().map(Cell::from)));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.overlay_border))
        .title(Span::styled(
            " Processes ",
            Style::default()
                .fg(theme.text_secondary)
                .add_modifier(Modifier::BOLD),
        ));

    let table = Table::new(rows, WIDTHS)
        .header(header)
        .block(block)
        .style(Style::default().fg(theme.text_primary))
        .row_highlight_style(
            Style::default()
                .fg(theme.selection_fg)
                .bg(theme.selection_bg)
                .add_modifier(Modifier::BOLD),
        );

    let selected = (!processes.is_empty()).then_some(selected_index);
    let mut state = TableState::default().with_selected(selected);
    frame.render_stateful_widget(table, area, &mut state);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_column_carries_indicator() {
        let labels = header_labels(SortState::new(SortColumn::Cpu, true));
        assert_eq!(labels, vec!["PID", "Process Name", "CPU % \u{25bc}", "Memory %"]);
    }

    #[test]
    fn cells_match_export_formatting() {
        let record = ProcessRecord {
            pid: 42,
            name: "sshd".to_string(),
            cpu_percent: 5.0,
            memory_percent: 1.0,
        };
        assert_eq!(row_cells(&record, 16), ["42", "sshd", "5.0%", "1.00%"]);
    }

    #[test]
    fn long_names_are_cut_to_column_width() {
        let record = ProcessRecord {
            pid: 7,
            name: "chromium-browser-renderer-process".to_string(),
            cpu_percent: 0.0,
            memory_percent: 0.0,
        };
        assert_eq!(row_cells(&record, 10)[1], "chromium-\u{2026}");
    }

    #[test]
    fn name_width_grows_with_area() {
        assert_eq!(name_width(Rect::new(0, 0, 60, 10)), 27);
        assert_eq!(name_width(Rect::new(0, 0, 20, 10)), 16);
    }

    #[test]
    fn visible_rows_subtracts_chrome() {
        assert_eq!(visible_rows(Rect::new(0, 0, 80, 13)), 10);
        assert_eq!(visible_rows(Rect::new(0, 0, 80, 2)), 0);
    }
}
