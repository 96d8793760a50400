use crate::app::input::helpers::{wrap_decrement, wrap_increment};
use crate::app::state::{App, ReportItem, REPORT_ITEMS};
use crossterm::event::KeyCode;

pub fn handle_report_input(app: &mut App, key: KeyCode) {
    let len = REPORT_ITEMS.len();
    match key {
        KeyCode::Esc => app.back_to_main(),
        KeyCode::Up | KeyCode::BackTab => app.report_focus = wrap_decrement(app.report_focus, len),
        KeyCode::Down | KeyCode::Tab => app.report_focus = wrap_increment(app.report_focus, len),
        KeyCode::F(2) => app.start_submit(),
        KeyCode::Enter => match app.current_report_item() {
            ReportItem::Field(_) => app.report_focus = wrap_increment(app.report_focus, len),
            ReportItem::PickLocation => app.open_picker(),
            ReportItem::Captcha => {
                if !app.report.captcha().is_solved() {
                    app.captcha_input = Some(String::new());
                }
            }
            ReportItem::Submit => app.start_submit(),
        },
        KeyCode::Backspace => {
            if let ReportItem::Field(field) = app.current_report_item() {
                app.report.pop_char(field);
            }
        }
        KeyCode::Char(ch) => {
            if let ReportItem::Field(field) = app.current_report_item() {
                app.report.push_char(field, ch);
            }
        }
        _ => {}
    }
}
