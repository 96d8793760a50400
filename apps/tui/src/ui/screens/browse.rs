use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use blankspot_tui::towers::FetchState;

use crate::app::state::{panel_items, PanelItem};
use crate::app::App;
use crate::ui::layout::{map_block_area, screen_chunks};
use crate::ui::widgets::chrome::{render_header, render_shortcuts};
use crate::ui::widgets::map::{format_point, render_map, MapView};
use crate::ui::widgets::tower::render_tower_detail;

const PANEL_WIDTH: u16 = 30;

pub fn render_browse(app: &App, f: &mut Frame<'_>) {
    let [header, _, footer] = screen_chunks(f.area());
    let instruction = app.browse.render();
    let selected = app.browse.selected_tower();

    let status = match app.browse.fetch_state() {
        FetchState::Idle | FetchState::Loading => {
            Span::styled("Memuat data menara...", Style::default().fg(Color::Yellow))
        }
        FetchState::Loaded => Span::styled(
            format!(
                "{} dari {} menara ditampilkan | zoom {}",
                instruction.towers.len(),
                app.browse.towers().len(),
                app.browse.camera().zoom()
            ),
            Style::default().fg(Color::White),
        ),
        FetchState::Failed(reason) => Span::styled(
            format!("Gagal memuat menara: {reason} (r: coba lagi)"),
            Style::default().fg(Color::Red),
        ),
    };
    render_header(f, header, "Peta Menara", TextLine::from(status), Color::Cyan);

    let title = app.browse.searched().map_or_else(
        || " Peta ".to_string(),
        |place| format!(" Peta | {} ", place.label),
    );
    let blankspots: &[_] = if instruction.blankspots {
        app.browse.blankspots()
    } else {
        &[]
    };
    let view = MapView {
        towers: &instruction.towers,
        blankspots,
        pin: app.browse.searched().and_then(|place| place.point),
        highlight: selected.map(|tower| tower.position),
        ..MapView::new(&title, app.browse.camera())
    };
    let map_area = map_block_area(f.area());
    render_map(f, map_area, &view);

    if app.browse.panel_open() {
        render_layer_panel(app, f, map_area);
    }
    if let Some(tower) = selected {
        render_tower_detail(tower, map_area, f);
    }

    render_shortcuts(
        f,
        footer,
        &[
            ("Arrows", "Geser"),
            ("+/-", "Zoom"),
            ("c", "Layer"),
            ("Klik/i", "Detail menara"),
            ("Tab/Space", "Pilih/Centang"),
            ("/", "Cari"),
            ("Esc", "Kembali"),
        ],
    );
}

fn render_layer_panel(app: &App, f: &mut Frame<'_>, map_area: Rect) {
    let items = panel_items();
    let height = (items.len() as u16 + 8).min(map_area.height.saturating_sub(2));
    let area = Rect {
        x: map_area.x + 2,
        y: map_area.y + 1,
        width: PANEL_WIDTH.min(map_area.width.saturating_sub(4)),
        height,
    };

    let mut lines = Vec::new();
    let mut section = "";
    for (index, item) in items.iter().enumerate() {
        let heading = match item {
            PanelItem::Layer(_) => "Jenis Penanda",
            PanelItem::Operator(_) => "Operator Menara",
            PanelItem::Status(_) => "Status Menara",
        };
        if heading != section {
            if !section.is_empty() {
                lines.push(TextLine::from(""));
            }
            section = heading;
            lines.push(TextLine::from(Span::styled(
                heading,
                Style::default().add_modifier(Modifier::BOLD),
            )));
        }

        let (checked, label, color) = match item {
            PanelItem::Layer(layer) => (
                app.browse.layers().is_visible(*layer),
                layer.label(),
                Color::White,
            ),
            PanelItem::Operator(operator) => {
                (app.browse.filter().has_operator(operator), *operator, Color::White)
            }
            PanelItem::Status(status) => (
                app.browse.filter().has_status(*status),
                status.label(),
                crate::ui::widgets::map::status_color(*status),
            ),
        };
        let checkbox = if checked { "[x]" } else { "[ ]" };
        let style = if index == app.panel_index {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(color)
        };
        lines.push(TextLine::from(Span::styled(format!("{checkbox} {label}"), style)));
    }

    if let Some(place) = app.browse.searched().and_then(|place| place.point) {
        lines.push(TextLine::from(""));
        lines.push(TextLine::from(Span::styled(
            format!("Cari: {}", format_point(place)),
            Style::default().fg(Color::Yellow),
        )));
    }

    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(Text::from(lines)).block(
            Block::default()
                .title(" Layer Control ")
                .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        ),
        area,
    );
}
