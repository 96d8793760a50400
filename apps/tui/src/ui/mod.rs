// Rendering: one function per screen plus shared overlays

pub mod layout;
pub mod screens;
pub mod widgets;

use crate::app::state::AppScreen;
use crate::app::App;
use ratatui::Frame;

pub fn ui(app: &App, f: &mut Frame<'_>) {
    match app.screen {
        AppScreen::Main => screens::main::render_main(app, f),
        AppScreen::Browse => screens::browse::render_browse(app, f),
        AppScreen::Report => screens::report::render_report(app, f),
        AppScreen::LocationPicker => screens::picker::render_picker(app, f),
    }

    if let Some(search) = &app.search {
        widgets::search::render_search(search, app.actions.places_name(), f);
    }

    if let Some(input) = &app.captcha_input {
        widgets::captcha::render_captcha(app.report.captcha(), input, f);
    }

    widgets::toast::render_toasts(&app.toasts, f);

    if app.show_help {
        screens::help::render_help(app, f);
    }
}
