use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::Span;
use ratatui::widgets::{Axis, Block, BorderType, Borders, Chart, Dataset, GraphType};

use crate::format::format_percent;
use crate::system::history::{HistoryBuffer, RollingSeries};
use crate::system::snapshot::SystemSnapshot;
use crate::ui::theme::Theme;

/// Three side-by-side line charts (CPU, RAM, GPU) over the history window.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    history: &HistoryBuffer,
    snapshot: Option<&SystemSnapshot>,
    theme: &Theme,
) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let x_max = history.capacity().saturating_sub(1).max(1) as f64;

    let cpu_title = format_percent(snapshot.map(|s| s.cpu_percent));
    let mem_title = format_percent(snapshot.map(|s| s.memory_percent));
    let gpu_title = format_percent(snapshot.and_then(|s| s.gpu_percent()));

    render_series(
        frame,
        chunks[0],
        &format!(" CPU {cpu_title} "),
        history.cpu(),
        x_max,
        theme.cpu_line,
        theme,
    );
    render_series(
        frame,
        chunks[1],
        &format!(" RAM {mem_title} "),
        history.memory(),
        x_max,
        theme.memory_line,
        theme,
    );
    render_series(
        frame,
        chunks[2],
        &format!(" GPU {gpu_title} "),
        history.gpu(),
        x_max,
        theme.gpu_line,
        theme,
    );
}

fn render_series(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    series: &RollingSeries,
    x_max: f64,
    color: Color,
    theme: &Theme,
) {
    let points = series.points();
    let dataset = Dataset::default()
        .marker(Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(color))
        .data(&points);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.overlay_border))
        .title(Span::styled(
            title.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));

    let chart = Chart::new(vec![dataset])
        .block(block)
        .x_axis(
            Axis::default()
                .bounds([0.0, x_max])
                .style(Style::default().fg(theme.text_secondary)),
        )
        .y_axis(
            Axis::default()
                .bounds([0.0, 100.0])
                .labels(["0", "50", "100"])
                .style(Style::default().fg(theme.text_secondary)),
        );

    frame.render_widget(chart, area);
}
