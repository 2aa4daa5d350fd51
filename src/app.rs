use std::path::PathBuf;
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::action::{Action, Direction};
use crate::config::{Config, KeybindsConfig, parse_key};
use crate::export::export_processes;
use crate::system::collector::{Collector, MetricsProvider};
use crate::system::history::{HistoryBuffer, TickSample};
use crate::system::kill::{KillResult, kill_process, terminate_process};
use crate::system::network::{NetworkRate, Throughput};
use crate::system::process::{ProcessRecord, SortColumn, SortState, carry_order, find, find_next};
use crate::system::snapshot::SystemSnapshot;
use crate::ui::theme::Theme;

const STATUS_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Search,
    Help,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
    pub created: Instant,
}

#[derive(Debug, Clone)]
pub struct ResolvedKeybinds {
    pub quit: KeyCode,
    pub terminate: KeyCode,
    pub kill: KeyCode,
    pub search: KeyCode,
    pub find_next: KeyCode,
    pub cycle_sort: KeyCode,
    pub reverse_sort: KeyCode,
    pub export: KeyCode,
    pub help: KeyCode,
    pub refresh: KeyCode,
}

impl ResolvedKeybinds {
    pub fn from_config(kb: &KeybindsConfig) -> Self {
        Self {
            quit: parse_key(&kb.quit).unwrap_or(KeyCode::Char('q')),
            terminate: parse_key(&kb.terminate).unwrap_or(KeyCode::Char('k')),
            kill: parse_key(&kb.kill).unwrap_or(KeyCode::Char('K')),
            search: parse_key(&kb.search).unwrap_or(KeyCode::Char('/')),
            find_next: parse_key(&kb.find_next).unwrap_or(KeyCode::Char('n')),
            cycle_sort: parse_key(&kb.cycle_sort).unwrap_or(KeyCode::Char('s')),
            reverse_sort: parse_key(&kb.reverse_sort).unwrap_or(KeyCode::Char('r')),
            export: parse_key(&kb.export).unwrap_or(KeyCode::Char('e')),
            help: parse_key(&kb.help).unwrap_or(KeyCode::Char('?')),
            refresh: parse_key(&kb.refresh).unwrap_or(KeyCode::F(5)),
        }
    }

    /// Returns (key_label, description) pairs for all configurable keybinds.
    pub fn help_entries(&self) -> Vec<(String, &'static str)> {
        let mut entries = vec![
            (key_label(self.quit), "Quit"),
            (key_label(self.terminate), "Terminate process (SIGTERM)"),
            (key_label(self.kill), "Force kill (SIGKILL)"),
            (key_label(self.search), "Search name / PID"),
            (key_label(self.find_next), "Next match"),
            (key_label(self.cycle_sort), "Next sort column"),
            (key_label(self.reverse_sort), "Reverse sort"),
            (key_label(self.export), "Export to CSV"),
            (key_label(self.refresh), "Refresh now"),
            (key_label(self.help), "Toggle help"),
        ];
        entries.push(("1-4".to_string(), "Sort by column"));
        entries.push(("↑↓ PgUp PgDn".to_string(), "Navigate"));
        entries.push(("Ctrl+C".to_string(), "Quit (always)"));
        entries
    }
}

pub fn key_label(code: KeyCode) -> String {
    match code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Backspace => "Bksp".to_string(),
        KeyCode::Delete => "Del".to_string(),
        KeyCode::F(n) => format!("F{n}"),
        _ => "?".to_string(),
    }
}

pub struct App {
    pub running: bool,
    provider: Box<dyn MetricsProvider>,
    pub snapshot: Option<SystemSnapshot>,
    pub throughput: Throughput,
    network_rate: NetworkRate,
    pub processes: Vec<ProcessRecord>,
    pub history: HistoryBuffer,
    pub sort: SortState,
    pub selected_index: usize,
    pub input_mode: InputMode,
    pub search_text: String,
    pub status_message: Option<StatusMessage>,
    pub export_path: PathBuf,
    pub theme: Theme,
    pub keybinds: ResolvedKeybinds,
    /// Visible table rows, updated on every draw; drives PageUp/PageDown.
    pub page_size: usize,
}

impl App {
    pub fn new(config: Config) -> Self {
        let collector = Collector::new();
        tracing::info!(gpu = collector.gpu_available(), "metrics collector ready");
        Self::with_provider(config, Box::new(collector))
    }

    pub fn with_provider(config: Config, provider: Box<dyn MetricsProvider>) -> Self {
        let column = SortColumn::from_label(&config.general.default_sort).unwrap_or_default();
        let mut app = App {
            running: true,
            provider,
            snapshot: None,
            throughput: Throughput::default(),
            network_rate: NetworkRate::new(),
            processes: Vec::new(),
            history: HistoryBuffer::new(config.general.history_length),
            sort: SortState::new(column, config.general.sort_descending),
            selected_index: 0,
            input_mode: InputMode::Normal,
            search_text: String::new(),
            status_message: None,
            export_path: config.general.export_path,
            theme: Theme::from_config(&config.colors.theme),
            keybinds: ResolvedKeybinds::from_config(&config.keybinds),
            page_size: 10,
        };
        app.refresh_data();
        app
    }

    /// One tick: sample, record history, replace the process table. A failed
    /// sample skips the whole tick so the history series never diverge.
    pub fn refresh_data(&mut self) {
        let _span = tracing::debug_span!("app.refresh_data").entered();

        if let Some(status) = &self.status_message
            && status.created.elapsed() >= STATUS_TTL
        {
            self.status_message = None;
        }

        let snapshot = match self.provider.sample() {
            Ok(snapshot) => snapshot,
            Err(err) => {
                tracing::warn!(error = %err, "sampling failed, skipping tick");
                self.set_status(StatusKind::Error, format!("Refresh skipped: {err}"));
                return;
            }
        };

        self.throughput = self.network_rate.update(snapshot.network, Instant::now());
        self.history.push_tick(TickSample {
            cpu: snapshot.cpu_percent,
            memory: snapshot.memory_percent,
            gpu: snapshot.gpu_percent(),
        });
        self.snapshot = Some(snapshot);

        let selected = self.selected_pid();
        let mut processes = self.provider.list_processes();
        carry_order(&mut processes, &self.processes);
        self.sort.apply(&mut processes);
        self.processes = processes;
        self.restore_selection(selected);
    }

    pub fn map_key(&self, key: KeyEvent) -> Action {
        // Ctrl+C always quits (hardwired safety)
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }

        match self.input_mode {
            InputMode::Normal => self.map_key_normal(key),
            InputMode::Search => self.map_key_search(key),
            InputMode::Help => self.map_key_help(key),
        }
    }

    fn map_key_normal(&self, key: KeyEvent) -> Action {
        let code = key.code;
        let kb = &self.keybinds;

        // Navigation and column hotkeys are hardwired (not configurable)
        match code {
            KeyCode::Up => return Action::Navigate(Direction::Up),
            KeyCode::Down => return Action::Navigate(Direction::Down),
            KeyCode::PageUp => return Action::Navigate(Direction::PageUp),
            KeyCode::PageDown => return Action::Navigate(Direction::PageDown),
            KeyCode::Home => return Action::Navigate(Direction::Top),
            KeyCode::End => return Action::Navigate(Direction::Bottom),
            KeyCode::Char(c @ '1'..='4') => {
                let index = c as usize - '1' as usize;
                return Action::SortBy(SortColumn::ALL[index]);
            }
            _ => {}
        }

        if code == kb.quit {
            return Action::Quit;
        }
        if code == kb.search {
            return Action::EnterSearchMode;
        }
        if code == kb.terminate {
            return self.selected_pid().map_or(Action::None, Action::Terminate);
        }
        if code == kb.kill {
            return self.selected_pid().map_or(Action::None, Action::Kill);
        }
        if code == kb.find_next {
            return Action::FindNext;
        }
        if code == kb.cycle_sort {
            return Action::CycleSortColumn;
        }
        if code == kb.reverse_sort {
            return Action::ReverseSort;
        }
        if code == kb.export {
            return Action::Export;
        }
        if code == kb.help {
            return Action::ToggleHelp;
        }
        if code == kb.refresh {
            return Action::Refresh;
        }

        Action::None
    }

    fn map_key_help(&self, key: KeyEvent) -> Action {
        let code = key.code;
        // In help mode, only the help key and Esc dismiss, everything else is ignored
        if code == self.keybinds.help || code == KeyCode::Esc {
            return Action::ToggleHelp;
        }
        Action::None
    }

    fn map_key_search(&self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => Action::ClearSearch,
            KeyCode::Enter => Action::ExitSearchMode,
            KeyCode::Backspace => {
                let mut text = self.search_text.clone();
                text.pop();
                Action::UpdateSearch(text)
            }
            KeyCode::Char(c) => {
                let mut text = self.search_text.clone();
                text.push(c);
                Action::UpdateSearch(text)
            }
            _ => Action::None,
        }
    }

    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::Quit => self.running = false,
            Action::Navigate(dir) => self.navigate(dir),
            Action::Terminate(pid) => {
                let result = terminate_process(pid);
                self.set_kill_status(result);
            }
            Action::Kill(pid) => {
                let result = kill_process(pid);
                self.set_kill_status(result);
            }
            Action::EnterSearchMode => {
                self.search_text.clear();
                self.input_mode = InputMode::Search;
            }
            Action::UpdateSearch(text) => {
                self.search_text = text;
                if let Some(index) = find(&self.processes, &self.search_text) {
                    self.selected_index = index;
                }
            }
            Action::ExitSearchMode => {
                self.input_mode = InputMode::Normal;
                match find(&self.processes, &self.search_text) {
                    Some(index) => self.selected_index = index,
                    None => self.report_no_match(),
                }
            }
            Action::ClearSearch => {
                self.search_text.clear();
                self.input_mode = InputMode::Normal;
            }
            Action::FindNext => {
                if self.search_text.is_empty() {
                    return;
                }
                match find_next(&self.processes, &self.search_text, self.selected_index) {
                    Some(index) => self.selected_index = index,
                    None => self.report_no_match(),
                }
            }
            Action::SortBy(column) => self.sort_by(column),
            Action::CycleSortColumn => self.sort_by(self.sort.column.next()),
            Action::ReverseSort => self.sort_by(self.sort.column),
            Action::Export => self.export(),
            Action::ToggleHelp => {
                self.input_mode = if self.input_mode == InputMode::Help {
                    InputMode::Normal
                } else {
                    InputMode::Help
                };
            }
            Action::Refresh => self.refresh_data(),
            Action::None => {}
        }
    }

    fn navigate(&mut self, direction: Direction) {
        if self.processes.is_empty() {
            return;
        }
        let last = self.processes.len() - 1;
        let page = self.page_size.max(1);
        self.selected_index = match direction {
            Direction::Up => self.selected_index.saturating_sub(1),
            Direction::Down => (self.selected_index + 1).min(last),
            Direction::PageUp => self.selected_index.saturating_sub(page),
            Direction::PageDown => (self.selected_index + page).min(last),
            Direction::Top => 0,
            Direction::Bottom => last,
        };
    }

    fn sort_by(&mut self, column: SortColumn) {
        let selected = self.selected_pid();
        self.sort.toggle(column, &mut self.processes);
        self.restore_selection(selected);
    }

    fn export(&mut self) {
        match export_processes(&self.processes, &self.export_path) {
            Ok(()) => {
                let msg = format!(
                    "Exported {} processes to {}",
                    self.processes.len(),
                    self.export_path.display()
                );
                self.set_status(StatusKind::Info, msg);
            }
            Err(err) => {
                tracing::warn!(error = %err, "export failed");
                self.set_status(StatusKind::Error, format!("Export failed: {err}"));
            }
        }
    }

    fn restore_selection(&mut self, pid: Option<u32>) {
        if let Some(index) = pid.and_then(|pid| self.processes.iter().position(|p| p.pid == pid)) {
            self.selected_index = index;
        } else if self.selected_index >= self.processes.len() {
            self.selected_index = self.processes.len().saturating_sub(1);
        }
    }

    fn report_no_match(&mut self) {
        let msg = format!("No process matches '{}'", self.search_text);
        self.set_status(StatusKind::Error, msg);
    }

    fn set_kill_status(&mut self, result: KillResult) {
        let kind = if result.is_success() {
            StatusKind::Info
        } else {
            StatusKind::Error
        };
        self.set_status(kind, result.message());
    }

    fn set_status(&mut self, kind: StatusKind, text: String) {
        self.status_message = Some(StatusMessage {
            text,
            kind,
            created: Instant::now(),
        });
    }

    pub fn selected_pid(&self) -> Option<u32> {
        self.selected_process().map(|p| p.pid)
    }

    pub fn selected_process(&self) -> Option<&ProcessRecord> {
        self.processes.get(self.selected_index)
    }

    pub fn show_help(&self) -> bool {
        self.input_mode == InputMode::Help
    }

    pub fn help_entries(&self) -> Vec<(String, &'static str)> {
        self.keybinds.help_entries()
    }
}
