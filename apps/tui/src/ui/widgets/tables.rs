use std::ops::Range;

/// Rows to draw so that `selected` stays on screen.
pub fn visible_window(total_rows: usize, max_visible_rows: usize, selected: usize) -> Range<usize> {
    if total_rows <= max_visible_rows {
        return 0..total_rows;
    }

    let start = (selected + 1).saturating_sub(max_visible_rows);
    start..start + max_visible_rows
}
