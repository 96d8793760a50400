use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use blankspot_tui::report::CaptchaState;

use crate::ui::widgets::popup::{centered_fixed, popup_block};

pub fn render_captcha(captcha: &CaptchaState, input: &str, f: &mut Frame<'_>) {
    let area = centered_fixed(40, 8, f.area());
    let block = popup_block(f, area, " Verifikasi CAPTCHA ", Color::Magenta);

    let lines = vec![
        TextLine::from("Jawab pertanyaan berikut:"),
        TextLine::from(""),
        TextLine::from(Span::styled(
            captcha.challenge().question(),
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )),
        TextLine::from(vec![
            Span::raw("> "),
            Span::styled(format!("{input}_"), Style::default().fg(Color::White)),
        ]),
        TextLine::from(Span::styled(
            "Enter: kirim | Esc: batal",
            Style::default().fg(Color::Gray),
        )),
    ];

    f.render_widget(Paragraph::new(Text::from(lines)).block(block), area);
}
