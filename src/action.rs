use crate::system::process::SortColumn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    PageUp,
    PageDown,
    Top,
    Bottom,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    Navigate(Direction),
    Terminate(u32),
    Kill(u32),
    EnterSearchMode,
    ExitSearchMode,
    ClearSearch,
    UpdateSearch(String),
    FindNext,
    SortBy(SortColumn),
    CycleSortColumn,
    ReverseSort,
    Export,
    ToggleHelp,
    Refresh,
    None,
}
