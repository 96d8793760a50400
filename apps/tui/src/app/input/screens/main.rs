use crate::app::input::helpers::{wrap_decrement, wrap_increment};
use crate::app::state::{App, MainMenuItem};
use crossterm::event::KeyCode;

pub fn handle_main_input(app: &mut App, key: KeyCode) {
    let len = MainMenuItem::ALL.len();
    match key {
        KeyCode::Up => app.main_index = wrap_decrement(app.main_index, len),
        KeyCode::Down | KeyCode::Tab => app.main_index = wrap_increment(app.main_index, len),
        KeyCode::Enter => {
            if let Some(item) = MainMenuItem::from_index(app.main_index) {
                select(app, item);
            }
        }
        KeyCode::Char('p') => select(app, MainMenuItem::Browse),
        KeyCode::Char('l') => select(app, MainMenuItem::Report),
        KeyCode::Char('q') | KeyCode::Esc => select(app, MainMenuItem::Quit),
        _ => {}
    }
}

fn select(app: &mut App, item: MainMenuItem) {
    match item {
        MainMenuItem::Browse => app.open_browse(),
        MainMenuItem::Report => app.open_report(),
        MainMenuItem::Quit => app.running = false,
    }
}
