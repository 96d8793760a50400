use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use blankspot_tui::report::NoticeKind;

use crate::app::state::Toast;

const TOAST_WIDTH: u16 = 44;
const TOAST_HEIGHT: u16 = 3;

pub const fn notice_color(kind: NoticeKind) -> Color {
    match kind {
        NoticeKind::Success => Color::Green,
        NoticeKind::Warning => Color::Yellow,
        NoticeKind::Error => Color::Red,
    }
}

/// Newest toast at the bottom right, older ones stacked above it.
pub fn render_toasts(toasts: &[Toast], f: &mut Frame<'_>) {
    let screen = f.area();
    if screen.width < TOAST_WIDTH || screen.height < TOAST_HEIGHT + 2 {
        return;
    }

    let max_stack = usize::from((screen.height - 2) / TOAST_HEIGHT);
    for (slot, toast) in toasts.iter().rev().take(max_stack).enumerate() {
        let offset = TOAST_HEIGHT * (slot as u16 + 1) + 1;
        let area = Rect {
            x: screen.x + screen.width - TOAST_WIDTH - 1,
            y: screen.y + screen.height.saturating_sub(offset),
            width: TOAST_WIDTH,
            height: TOAST_HEIGHT,
        };
        let color = notice_color(toast.notice.kind);

        f.render_widget(Clear, area);
        f.render_widget(
            Paragraph::new(toast.notice.message.as_str())
                .style(Style::default().fg(color))
                .wrap(Wrap { trim: true })
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(color)),
                ),
            area,
        );
    }
}
