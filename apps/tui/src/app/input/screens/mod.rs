use crate::app::state::{App, AppScreen};
use crossterm::event::KeyCode;

mod browse;
mod captcha;
mod help;
mod main;
mod picker;
mod report;
mod search;

pub fn dispatch_input(app: &mut App, key: KeyCode) {
    if help::handle_help_toggle(app, key) {
        return;
    }

    if app.captcha_input.is_some() {
        captcha::handle_captcha_input(app, key);
        return;
    }

    if app.search.is_some() {
        search::handle_search_input(app, key);
        return;
    }

    match app.screen {
        AppScreen::Main => main::handle_main_input(app, key),
        AppScreen::Browse => browse::handle_browse_input(app, key),
        AppScreen::Report => report::handle_report_input(app, key),
        AppScreen::LocationPicker => picker::handle_picker_input(app, key),
    }
}
