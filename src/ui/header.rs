use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::format::format_percent;
use crate::system::network::Throughput;
use crate::system::snapshot::SystemSnapshot;
use crate::ui::theme::Theme;

/// `CPU: 12.5% | RAM: 40.1% | GPU: 37.00% (mem 12.00%, 61°C) | Up: 1 KB/s | Down: 2 KB/s`
pub fn status_line(snapshot: Option<&SystemSnapshot>, throughput: &Throughput) -> String {
    let Some(snapshot) = snapshot else {
        return "Waiting for first sample\u{2026}".to_string();
    };
    let mut gpu = format_percent(snapshot.gpu_percent());
    if let Some(mem) = snapshot.gpu_memory_percent() {
        match snapshot.gpu_temperature_celsius() {
            Some(temp) => gpu.push_str(&format!(" (mem {mem:.2}%, {temp:.0}\u{b0}C)")),
            None => gpu.push_str(&format!(" (mem {mem:.2}%)")),
        }
    }
    format!(
        "CPU: {:.1}% | RAM: {:.1}% | GPU: {} | Up: {} | Down: {}",
        snapshot.cpu_percent,
        snapshot.memory_percent,
        gpu,
        throughput.up_label(),
        throughput.down_label(),
    )
}

pub fn render(
    frame: &mut Frame,
    area: Rect,
    snapshot: Option<&SystemSnapshot>,
    throughput: &Throughput,
    process_count: usize,
    theme: &Theme,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.overlay_border));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let spans = vec![
        Span::styled(
            " tasktop ",
            Style::default()
                .fg(theme.header_accent_fg)
                .bg(theme.header_accent_bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            status_line(snapshot, throughput),
            Style::default()
                .fg(theme.text_primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            format!("Procs: {process_count}"),
            Style::default().fg(theme.text_secondary),
        ),
    ];

    frame.render_widget(Paragraph::new(Line::from(spans)), inner);
}
