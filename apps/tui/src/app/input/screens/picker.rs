use crate::app::events::SearchTarget;
use crate::app::input::helpers::pan_step;
use crate::app::state::App;
use crossterm::event::KeyCode;

pub fn handle_picker_input(app: &mut App, key: KeyCode) {
    if let Some((cols, rows)) = pan_step(key) {
        app.report.camera_mut().pan(cols, rows);
        return;
    }

    match key {
        KeyCode::Esc | KeyCode::Char('d') => app.close_picker(),
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.pick_map_center();
        }
        KeyCode::Char('+' | '=') => app.report.camera_mut().zoom_in(),
        KeyCode::Char('-') => app.report.camera_mut().zoom_out(),
        KeyCode::Char('/') => app.open_search(SearchTarget::Picker),
        _ => {}
    }
}
