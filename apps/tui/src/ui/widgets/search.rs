use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::state::SearchBox;
use crate::ui::widgets::popup::{centered_rect, popup_block};
use crate::ui::widgets::tables::visible_window;

pub fn render_search(search: &SearchBox, provider: &str, f: &mut Frame<'_>) {
    let area = centered_rect(70, 50, f.area());
    let title = format!(" Cari Lokasi ({provider}) ");
    let block = popup_block(f, area, &title, Color::Cyan);
    let inner_rows = usize::from(area.height.saturating_sub(6));

    let mut lines = vec![
        TextLine::from(vec![
            Span::styled("> ", Style::default().fg(Color::Cyan)),
            Span::raw(format!("{}_", search.query)),
        ]),
        TextLine::from(""),
    ];

    if search.is_pending() {
        lines.push(TextLine::from(Span::styled(
            "Mencari...",
            Style::default().fg(Color::Yellow),
        )));
    } else if search.results.is_empty() {
        lines.push(TextLine::from(Span::styled(
            "Ketik nama tempat lalu tekan Enter",
            Style::default().fg(Color::Gray),
        )));
    }

    let window = visible_window(search.results.len(), inner_rows.max(1), search.selected);
    for (index, place) in search.results.iter().enumerate().take(window.end).skip(window.start) {
        let selected = index == search.selected;
        let style = if selected {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        let marker = if selected { "> " } else { "  " };
        lines.push(TextLine::from(Span::styled(
            format!("{marker}{}", place.display_label()),
            style,
        )));
    }

    lines.push(TextLine::from(""));
    lines.push(TextLine::from(Span::styled(
        if search.is_fresh() {
            "Enter: pilih | Up/Down: pindah | Esc: tutup"
        } else {
            "Enter: cari | Esc: tutup"
        },
        Style::default().fg(Color::Gray),
    )));

    f.render_widget(Paragraph::new(Text::from(lines)).block(block), area);
}
