use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub fn render_header(f: &mut Frame<'_>, area: Rect, title: &str, detail: TextLine<'_>, color: Color) {
    let block = Block::default()
        .title(format!("== {title} =="))
        .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    f.render_widget(Paragraph::new(detail).block(block), area);
}

/// One line of `key: action` hints.
pub fn render_shortcuts(f: &mut Frame<'_>, area: Rect, shortcuts: &[(&str, &str)]) {
    let mut spans = Vec::with_capacity(shortcuts.len() * 2);
    for (index, (key, action)) in shortcuts.iter().enumerate() {
        let separator = if index + 1 == shortcuts.len() { "" } else { " | " };
        spans.push(Span::styled(
            (*key).to_string(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(": {action}{separator}"),
            Style::default().fg(Color::Gray),
        ));
    }
    f.render_widget(
        Paragraph::new(TextLine::from(spans)).alignment(Alignment::Center),
        area,
    );
}
