use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::Span;
use ratatui::widgets::canvas::{Canvas, Map, MapResolution, Points};
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;

use blankspot_tui::domain::{GeoPoint, TowerStatus};
use blankspot_tui::location::{MapCamera, MapExtent};
use blankspot_tui::towers::{BlankspotRecord, TowerRecord};

pub const fn status_color(status: TowerStatus) -> Color {
    match status {
        TowerStatus::Active => Color::Green,
        TowerStatus::Inactive => Color::Red,
    }
}

/// What to draw on one map canvas.
pub struct MapView<'a> {
    pub title: &'a str,
    pub camera: &'a MapCamera,
    pub towers: &'a [&'a TowerRecord],
    pub blankspots: &'a [BlankspotRecord],
    pub pin: Option<GeoPoint>,
    pub pin_color: Color,
    /// Tower whose details are open.
    pub highlight: Option<GeoPoint>,
    pub border_color: Color,
}

impl<'a> MapView<'a> {
    pub fn new(title: &'a str, camera: &'a MapCamera) -> Self {
        Self {
            title,
            camera,
            towers: &[],
            blankspots: &[],
            pin: None,
            pin_color: Color::Yellow,
            highlight: None,
            border_color: Color::Cyan,
        }
    }
}

/// Coastline, blank spots, towers, the highlighted tower and the pin, in
/// that order. The canvas
/// bounds come from the camera so cells line up with `MapProjection`.
pub fn render_map(f: &mut Frame<'_>, area: Rect, view: &MapView<'_>) {
    let block = Block::default()
        .title(view.title)
        .title_style(Style::default().fg(view.border_color))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(view.border_color));
    let inner = block.inner(area);
    let bounds = view.camera.bounds(MapExtent::from(inner));

    let coords_for = |status: TowerStatus| {
        view.towers
            .iter()
            .filter(|tower| tower.status == status)
            .map(|tower| (tower.position.longitude(), tower.position.latitude()))
            .collect::<Vec<_>>()
    };
    let active = coords_for(TowerStatus::Active);
    let inactive = coords_for(TowerStatus::Inactive);

    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .x_bounds([bounds.west, bounds.east])
        .y_bounds([bounds.south, bounds.north])
        .paint(|ctx| {
            ctx.draw(&Map {
                resolution: MapResolution::High,
                color: Color::DarkGray,
            });
            ctx.layer();

            for spot in view.blankspots {
                ctx.print(
                    spot.position.longitude(),
                    spot.position.latitude(),
                    Span::styled("x", Style::default().fg(Color::Magenta)),
                );
            }

            ctx.draw(&Points {
                coords: &active,
                color: status_color(TowerStatus::Active),
            });
            ctx.draw(&Points {
                coords: &inactive,
                color: status_color(TowerStatus::Inactive),
            });

            if let Some(tower) = view.highlight {
                ctx.layer();
                ctx.print(
                    tower.longitude(),
                    tower.latitude(),
                    Span::styled(
                        "◉",
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD),
                    ),
                );
            }

            if let Some(pin) = view.pin {
                ctx.layer();
                ctx.print(
                    pin.longitude(),
                    pin.latitude(),
                    Span::styled(
                        "●",
                        Style::default()
                            .fg(view.pin_color)
                            .add_modifier(Modifier::BOLD),
                    ),
                );
            }
        });

    f.render_widget(canvas, area);
}

/// `-8.58333, 116.11667` style label.
pub fn format_point(point: GeoPoint) -> String {
    format!("{:.5}, {:.5}", point.latitude(), point.longitude())
}
