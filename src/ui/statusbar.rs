use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::{InputMode, ResolvedKeybinds, StatusKind, StatusMessage, key_label};
use crate::ui::theme::Theme;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    input_mode: InputMode,
    search_text: &str,
    status_message: Option<&StatusMessage>,
    keybinds: &ResolvedKeybinds,
    theme: &Theme,
) {
    let bg_style = Style::default().bg(theme.statusbar_bg);

    // Search input wins over a pending status message while typing.
    let line = match (input_mode, status_message) {
        (InputMode::Search, _) => {
            let mut spans = vec![
                Span::styled(
                    format!(" {} ", key_label(keybinds.search)),
                    Style::default()
                        .fg(theme.pill_key_fg)
                        .bg(theme.pill_key_bg)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!(" {search_text}"),
                    Style::default().fg(theme.pill_desc_fg),
                ),
                Span::styled("\u{2588}", Style::default().fg(theme.pill_key_bg)),
            ];
            spans.extend(pill_spans("Esc", "Cancel", theme));
            spans.extend(pill_spans("Enter", "Find", theme));
            Line::from(spans)
        }
        (_, Some(status)) => {
            let color = match status.kind {
                StatusKind::Info => theme.status_ok,
                StatusKind::Error => theme.status_err,
            };
            Line::from(Span::styled(
                format!(" {}", status.text),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ))
        }
        _ => {
            let mut pills = vec![(keybinds.quit, "Quit"), (keybinds.search, "Search")];
            if !search_text.is_empty() {
                pills.push((keybinds.find_next, "Next"));
            }
            pills.extend([
                (keybinds.terminate, "Term"),
                (keybinds.kill, "Kill"),
                (keybinds.cycle_sort, "Sort"),
                (keybinds.reverse_sort, "Reverse"),
                (keybinds.export, "Export"),
                (keybinds.help, "Help"),
            ]);
            let spans: Vec<Span> = pills
                .into_iter()
                .flat_map(|(code, desc)| pill_spans(&key_label(code), desc, theme))
                .collect();
            Line::from(spans)
        }
    };

    frame.render_widget(Paragraph::new(line).style(bg_style), area);
}

fn pill_spans(key: &str, desc: &str, theme: &Theme) -> Vec<Span<'static>> {
    vec![
        Span::raw(" "),
        Span::styled(
            format!(" {key} "),
            Style::default()
                .fg(theme.pill_key_fg)
                .bg(theme.pill_key_bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {desc}"),
            Style::default().fg(theme.pill_desc_fg).bg(theme.surface_bg),
        ),
    ]
}
