use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use blankspot_tui::location::MapProjection;

use crate::app::state::{App, AppScreen};

pub fn handle_mouse(app: &mut App, event: MouseEvent) {
    if app.show_help || app.search.is_some() || app.captcha_input.is_some() {
        return;
    }

    let area = app.map_area();
    let inside = area.contains(Position::new(event.column, event.row));

    match app.screen {
        AppScreen::LocationPicker => handle_picker_mouse(app, event, inside),
        AppScreen::Browse => handle_browse_mouse(app, event, inside),
        AppScreen::Main | AppScreen::Report => {}
    }
}

fn handle_picker_mouse(app: &mut App, event: MouseEvent, inside: bool) {
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) if inside => {
            if !app.begin_drag(event.column, event.row) {
                app.click_picker_map(event.column, event.row);
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => app.drag_to(event.column, event.row),
        MouseEventKind::Up(MouseButton::Left) => {
            app.end_drag();
        }
        MouseEventKind::ScrollUp if inside => app.report.camera_mut().zoom_in(),
        MouseEventKind::ScrollDown if inside => app.report.camera_mut().zoom_out(),
        _ => {}
    }
}

fn handle_browse_mouse(app: &mut App, event: MouseEvent, inside: bool) {
    if !inside {
        return;
    }

    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let area = app.map_area();
            if app.browse.select_tower_at(area, event.column, event.row) {
                return;
            }
            let projection = MapProjection::new(app.browse.camera(), area);
            if let Some(point) = projection.point_at(event.column, event.row) {
                let zoom = app.browse.camera().zoom();
                app.browse.camera_mut().center_on(point, zoom);
            }
        }
        MouseEventKind::ScrollUp => app.browse.camera_mut().zoom_in(),
        MouseEventKind::ScrollDown => app.browse.camera_mut().zoom_out(),
        _ => {}
    }
}
