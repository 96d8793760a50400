use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;
use serde_json::Value;

use blankspot_tui::towers::TowerRecord;

use crate::ui::widgets::map::{format_point, status_color};
use crate::ui::widgets::popup::popup_block;

const DETAIL_WIDTH: u16 = 40;

/// Details of the selected tower, pinned to the top right of the map.
pub fn render_tower_detail(tower: &TowerRecord, map_area: Rect, f: &mut Frame<'_>) {
    let lines = detail_lines(tower);
    let height = (lines.len() as u16 + 3).min(map_area.height.saturating_sub(2));
    let width = DETAIL_WIDTH.min(map_area.width.saturating_sub(4));
    let area = Rect {
        x: map_area.right().saturating_sub(width + 2),
        y: map_area.y + 1,
        width,
        height,
    };

    let block = popup_block(f, area, " Detail Menara ", Color::Cyan);
    let mut text = Text::from(lines);
    text.push_line(TextLine::from(Span::styled(
        "Esc: tutup",
        Style::default().fg(Color::Gray),
    )));
    f.render_widget(
        Paragraph::new(text).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

fn field(label: &str, value: String, style: Style) -> TextLine<'static> {
    TextLine::from(vec![
        Span::styled(
            format!("{label}: "),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(value, style),
    ])
}

fn detail_lines(tower: &TowerRecord) -> Vec<TextLine<'static>> {
    let mut lines = vec![
        field("ID", tower.id.to_string(), Style::default()),
        field("Operator", tower.operator.clone(), Style::default()),
        field(
            "Status",
            tower.status.label().to_string(),
            Style::default().fg(status_color(tower.status)),
        ),
        field("Lokasi", format_point(tower.position), Style::default()),
    ];

    for (key, value) in &tower.metadata {
        lines.push(field(key, metadata_text(value), Style::default().fg(Color::Gray)));
    }
    lines
}

fn metadata_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => "-".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blankspot_tui::domain::{GeoPoint, TowerStatus};
    use blankspot_tui::towers::TowerId;
    use std::collections::BTreeMap;

    #[test]
    fn detail_lists_core_fields_then_metadata() {
        let tower = TowerRecord {
            id: TowerId::Text("LTB-07".to_string()),
            operator: "Indosat".to_string(),
            status: TowerStatus::Inactive,
            position: GeoPoint::default(),
            metadata: BTreeMap::from([
                ("alamat".to_string(), Value::from("Desa Sembalun")),
                ("tinggi".to_string(), Value::from(42)),
                ("catatan".to_string(), Value::Null),
            ]),
        };

        let rendered: Vec<String> = detail_lines(&tower)
            .iter()
            .map(|line| line.spans.iter().map(|span| span.content.as_ref()).collect())
            .collect();

        assert_eq!(rendered[0], "ID: LTB-07");
        assert_eq!(rendered[2], "Status: Tidak Aktif");
        assert_eq!(
            &rendered[4..],
            ["alamat: Desa Sembalun", "catatan: -", "tinggi: 42"]
        );
    }
}
