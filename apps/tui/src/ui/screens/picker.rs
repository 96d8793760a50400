use ratatui::style::{Color, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::Frame;

use crate::app::App;
use crate::ui::layout::{map_block_area, screen_chunks};
use crate::ui::widgets::chrome::{render_header, render_shortcuts};
use crate::ui::widgets::map::{format_point, render_map, MapView};

pub fn render_picker(app: &App, f: &mut Frame<'_>) {
    let [header, _, footer] = screen_chunks(f.area());
    let form = app.report.form();

    let detail = if form.latitude().is_empty() {
        TextLine::from(Span::styled(
            "Klik peta, seret penanda, atau cari lokasi",
            Style::default().fg(Color::Gray),
        ))
    } else {
        TextLine::from(vec![
            Span::styled("Latitude: ", Style::default().fg(Color::Gray)),
            Span::raw(form.latitude().to_string()),
            Span::styled("  Longitude: ", Style::default().fg(Color::Gray)),
            Span::raw(form.longitude().to_string()),
        ])
    };
    render_header(f, header, "Pilih Lokasi", detail, Color::Green);

    let (pin, pin_color) = match app.drag_preview {
        Some(point) => (point, Color::Yellow),
        None => (app.report.current_point(), Color::Red),
    };
    let title = format!(" {} | zoom {} ", format_point(pin), app.report.camera().zoom());
    let view = MapView {
        pin: Some(pin),
        pin_color,
        border_color: Color::Green,
        ..MapView::new(&title, app.report.camera())
    };
    render_map(f, map_block_area(f.area()), &view);

    render_shortcuts(
        f,
        footer,
        &[
            ("Klik/Seret", "Tandai"),
            ("Enter", "Tandai tengah"),
            ("Arrows", "Geser"),
            ("+/-", "Zoom"),
            ("/", "Cari"),
            ("Esc", "Selesai"),
        ],
    );
}
