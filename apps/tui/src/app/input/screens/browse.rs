use crate::app::events::SearchTarget;
use crate::app::input::helpers::{pan_step, wrap_decrement, wrap_increment};
use crate::app::state::{panel_items, App, PanelItem};
use blankspot_tui::report::Notice;
use crossterm::event::KeyCode;

pub fn handle_browse_input(app: &mut App, key: KeyCode) {
    if let Some((cols, rows)) = pan_step(key) {
        app.browse.camera_mut().pan(cols, rows);
        return;
    }

    let items = panel_items();
    match key {
        KeyCode::Esc if app.browse.selected_tower().is_some() => app.browse.clear_selection(),
        KeyCode::Esc => app.back_to_main(),
        KeyCode::Char('i') => {
            let area = app.map_area();
            if !app.browse.select_tower_near_center(area) {
                app.notify(Notice::warning("Tidak ada menara di peta"));
            }
        }
        KeyCode::Char('c') => app.browse.toggle_panel(),
        KeyCode::Tab if app.browse.panel_open() => {
            app.panel_index = wrap_increment(app.panel_index, items.len());
        }
        KeyCode::BackTab if app.browse.panel_open() => {
            app.panel_index = wrap_decrement(app.panel_index, items.len());
        }
        KeyCode::Enter | KeyCode::Char(' ') if app.browse.panel_open() => {
            if let Some(item) = items.get(app.panel_index) {
                toggle_item(app, *item);
            }
        }
        KeyCode::Char('+' | '=') => app.browse.camera_mut().zoom_in(),
        KeyCode::Char('-') => app.browse.camera_mut().zoom_out(),
        KeyCode::Char('/') => app.open_search(SearchTarget::Browse),
        KeyCode::Char('x') => app.browse.clear_search(),
        KeyCode::Char('r') => app.retry_fetch(),
        _ => {}
    }
}

fn toggle_item(app: &mut App, item: PanelItem) {
    match item {
        PanelItem::Layer(layer) => app.browse.toggle_layer(layer),
        PanelItem::Operator(operator) => app.browse.toggle_operator(operator),
        PanelItem::Status(status) => app.browse.toggle_status(status),
    }
}
