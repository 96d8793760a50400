use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use crate::app::state::AppScreen;
use crate::app::App;
use crate::ui::widgets::popup::{centered_rect, popup_block};

pub fn render_help(app: &App, f: &mut Frame<'_>) {
    let popup_area = centered_rect(80, 80, f.area());
    let block = popup_block(f, popup_area, "== Bantuan ==", Color::Yellow);

    let help_paragraph = Paragraph::new(Text::from(build_help_lines(app.screen)))
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(help_paragraph, popup_area);

    let hint = Paragraph::new(TextLine::from(Span::styled(
        "Tekan F1 atau Esc untuk menutup",
        Style::default().fg(Color::Gray),
    )))
    .alignment(Alignment::Center);
    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(2),
        width: popup_area.width,
        height: 1,
    };
    f.render_widget(hint, hint_area);
}

fn key_line(key: &'static str, action: &'static str) -> TextLine<'static> {
    TextLine::from(vec![
        Span::styled(
            format!("  {key}"),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(" - {action}")),
    ])
}

fn build_help_lines(screen: AppScreen) -> Vec<TextLine<'static>> {
    let mut lines = vec![
        TextLine::from(Span::styled(
            "Blankspot NTB",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        TextLine::from(""),
        TextLine::from(Span::styled(
            "Tombol:",
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];

    let keys: &[(&'static str, &'static str)] = match screen {
        AppScreen::Main => &[
            ("Up/Down", "Pilih menu"),
            ("p", "Peta menara"),
            ("l", "Form laporan"),
            ("q", "Keluar"),
        ],
        AppScreen::Browse => &[
            ("Arrows / klik", "Geser peta"),
            ("+/- / scroll", "Zoom"),
            ("c", "Buka/tutup Layer Control"),
            ("klik menara / i", "Detail menara (Esc: tutup)"),
            ("Tab, Space", "Pilih dan centang layer, operator, status"),
            ("/", "Cari lokasi"),
            ("x", "Hapus penanda pencarian"),
            ("r", "Muat ulang data menara"),
        ],
        AppScreen::Report => &[
            ("Up/Down/Tab", "Pindah isian"),
            ("Enter", "Pilih lokasi / CAPTCHA / Kirim"),
            ("F2", "Kirim laporan"),
            ("Esc", "Kembali (isian tetap tersimpan)"),
        ],
        AppScreen::LocationPicker => &[
            ("Klik", "Tandai titik"),
            ("Seret penanda", "Pindahkan titik"),
            ("Enter", "Tandai titik tengah peta"),
            ("/", "Cari lokasi"),
            ("Esc / d", "Kembali ke form"),
        ],
    };
    lines.extend(keys.iter().map(|(key, action)| key_line(key, action)));

    lines.push(TextLine::from(""));
    lines.push(TextLine::from(Span::styled(
        "Opsi CLI:",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    let help_text = crate::cli::CliArgs::help_text();
    for line in help_text.lines() {
        if line.starts_with("Usage") || line.starts_with("Options") || line.trim().is_empty() {
            continue;
        }
        lines.push(TextLine::from(line.to_string()));
    }

    lines
}
