use crate::app::input::helpers::{wrap_decrement, wrap_increment};
use crate::app::state::App;
use crossterm::event::KeyCode;

pub fn handle_search_input(app: &mut App, key: KeyCode) {
    let Some(search) = app.search.as_mut() else {
        return;
    };

    match key {
        KeyCode::Esc => app.search = None,
        KeyCode::Enter => {
            if search.is_fresh() {
                app.choose_search_result();
            } else {
                app.run_search();
            }
        }
        KeyCode::Up => search.selected = wrap_decrement(search.selected, search.results.len()),
        KeyCode::Down | KeyCode::Tab => {
            search.selected = wrap_increment(search.selected, search.results.len());
        }
        KeyCode::Backspace => {
            search.query.pop();
        }
        KeyCode::Char(ch) => search.query.push(ch),
        _ => {}
    }
}
