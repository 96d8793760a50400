use crate::app::state::App;
use crossterm::event::KeyCode;

pub fn handle_captcha_input(app: &mut App, key: KeyCode) {
    let Some(input) = app.captcha_input.as_mut() else {
        return;
    };

    match key {
        KeyCode::Esc => app.captcha_input = None,
        KeyCode::Enter => app.answer_captcha(),
        KeyCode::Backspace => {
            input.pop();
        }
        KeyCode::Char(ch) if ch.is_ascii_digit() && input.len() < 3 => input.push(ch),
        _ => {}
    }
}
