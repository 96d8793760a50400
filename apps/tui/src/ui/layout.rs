use ratatui::layout::{Constraint, Layout, Margin, Rect};

/// Header, body and shortcut line shared by every screen.
pub fn screen_chunks(area: Rect) -> [Rect; 3] {
    Layout::vertical([
        Constraint::Length(3), // Title area
        Constraint::Min(5),    // Body
        Constraint::Length(1), // Shortcuts hint
    ])
    .areas(area)
}

/// Bordered map block on the browse and picker screens.
pub fn map_block_area(area: Rect) -> Rect {
    screen_chunks(area)[1]
}

/// Canvas inside the map block; mouse hits are tested against this.
pub fn map_area(area: Rect) -> Rect {
    map_block_area(area).inner(Margin::new(1, 1))
}

/// Form on the left, location preview on the right.
pub fn report_columns(body: Rect) -> [Rect; 2] {
    Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)]).areas(body)
}
