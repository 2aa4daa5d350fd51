use std::cmp::Ordering;
use std::collections::HashMap;

#[derive(Clone, Debug, PartialEq)]
pub struct ProcessRecord {
    pub pid: u32,
    pub name: String,
    pub cpu_percent: f32,
    pub memory_percent: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortColumn {
    Pid,
    Name,
    #[default]
    Cpu,
    Memory,
}

impl SortColumn {
    pub const ALL: [SortColumn; 4] = [
        SortColumn::Pid,
        SortColumn::Name,
        SortColumn::Cpu,
        SortColumn::Memory,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SortColumn::Pid => "PID",
            SortColumn::Name => "Process Name",
            SortColumn::Cpu => "CPU %",
            SortColumn::Memory => "Memory %",
        }
    }

    pub fn next(self) -> Self {
        match self {
            SortColumn::Pid => SortColumn::Name,
            SortColumn::Name => SortColumn::Cpu,
            SortColumn::Cpu => SortColumn::Memory,
            SortColumn::Memory => SortColumn::Pid,
        }
    }

    /// Accepts the column header as well as the short config words.
    pub fn from_label(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "pid" => Some(SortColumn::Pid),
            "name" | "process name" => Some(SortColumn::Name),
            "cpu" | "cpu %" => Some(SortColumn::Cpu),
            "memory" | "mem" | "memory %" => Some(SortColumn::Memory),
            _ => None,
        }
    }

    /// Direction used the first time a column is selected.
    pub fn default_descending(self) -> bool {
        matches!(self, SortColumn::Cpu | SortColumn::Memory)
    }
}

fn compare(a: &ProcessRecord, b: &ProcessRecord, column: SortColumn) -> Ordering {
    match column {
        SortColumn::Pid => a.pid.cmp(&b.pid),
        SortColumn::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortColumn::Cpu => a.cpu_percent.total_cmp(&b.cpu_percent),
        SortColumn::Memory => a.memory_percent.total_cmp(&b.memory_percent),
    }
}

/// Stable sort in either direction: equal keys keep their relative order.
pub fn sort_records(records: &mut [ProcessRecord], column: SortColumn, descending: bool) {
    records.sort_by(|a, b| {
        let ord = compare(a, b, column);
        if descending { ord.reverse() } else { ord }
    });
}

/// Reorders a fresh listing to follow `displayed`, with pids not on screen
/// after them in their incoming order. A stable sort afterwards then leaves
/// equal rows where they already were.
pub fn carry_order(records: &mut [ProcessRecord], displayed: &[ProcessRecord]) {
    if displayed.is_empty() {
        return;
    }
    let position: HashMap<u32, usize> = displayed
        .iter()
        .enumerate()
        .map(|(i, r)| (r.pid, i))
        .collect();
    records.sort_by_key(|r| position.get(&r.pid).copied().unwrap_or(usize::MAX));
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub column: SortColumn,
    pub descending: bool,
}

impl Default for SortState {
    fn default() -> Self {
        SortState::new(SortColumn::Cpu, true)
    }
}

impl SortState {
    pub fn new(column: SortColumn, descending: bool) -> Self {
        Self { column, descending }
    }

    pub fn apply(&self, records: &mut [ProcessRecord]) {
        sort_records(records, self.column, self.descending);
    }

    /// Selecting the active column again inverts the current order in place;
    /// another column is sorted fresh in its default direction.
    pub fn toggle(&mut self, column: SortColumn, records: &mut [ProcessRecord]) {
        if column == self.column {
            self.descending = !self.descending;
            records.reverse();
        } else {
            self.column = column;
            self.descending = column.default_descending();
            self.apply(records);
        }
    }

    pub fn indicator(&self) -> &'static str {
        if self.descending { "\u{25bc}" } else { "\u{25b2}" }
    }
}

fn matches_query(record: &ProcessRecord, query_lower: &str) -> bool {
    record.name.to_lowercase().contains(query_lower) || record.pid.to_string().contains(query_lower)
}

/// Index of the first record whose name contains `query` (case-insensitive)
/// or whose pid contains it. An empty query matches the first record.
pub fn find(records: &[ProcessRecord], query: &str) -> Option<usize> {
    let query_lower = query.to_lowercase();
    records.iter().position(|r| matches_query(r, &query_lower))
}

/// Like [`find`], but starts after `after` and wraps around.
pub fn find_next(records: &[ProcessRecord], query: &str, after: usize) -> Option<usize> {
    if records.is_empty() {
        return None;
    }
    let query_lower = query.to_lowercase();
    let len = records.len();
    let start = after.saturating_add(1) % len;
    (0..len)
        .map(|offset| (start + offset) % len)
        .find(|&i| matches_query(&records[i], &query_lower))
}
