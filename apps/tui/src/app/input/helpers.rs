pub const fn wrap_decrement(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }

    if index == 0 {
        len - 1
    } else {
        index - 1
    }
}

pub const fn wrap_increment(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }

    (index + 1) % len
}

/// Arrow key to a pan step in map cells.
pub const fn pan_step(key: crossterm::event::KeyCode) -> Option<(i32, i32)> {
    use crossterm::event::KeyCode;

    match key {
        KeyCode::Left => Some((-4, 0)),
        KeyCode::Right => Some((4, 0)),
        KeyCode::Up => Some((0, -2)),
        KeyCode::Down => Some((0, 2)),
        _ => None,
    }
}
