use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use tachyonfx::EffectRenderer;
use throbber_widgets_tui::{Throbber, BRAILLE_SIX};

use crate::app::state::{ReportItem, REPORT_ITEMS};
use crate::app::App;
use crate::ui::layout::{report_columns, screen_chunks};
use crate::ui::widgets::chrome::{render_header, render_shortcuts};
use crate::ui::widgets::map::{format_point, render_map, MapView};
use crate::ui::widgets::tables::visible_window;

pub fn render_report(app: &App, f: &mut Frame<'_>) {
    let [header, body, footer] = screen_chunks(f.area());

    render_header(
        f,
        header,
        "Laporkan Blankspot",
        TextLine::from(Span::styled(
            "Isi data di bawah ini untuk melaporkan lokasi tanpa sinyal",
            Style::default().fg(Color::White),
        )),
        Color::Green,
    );

    let [form_area, preview_area] = report_columns(body);
    render_form(app, f, form_area);

    let point = app.report.current_point();
    let title = format!(" Lokasi: {} ", format_point(point));
    let view = MapView {
        pin: Some(point),
        pin_color: Color::Red,
        border_color: Color::Green,
        ..MapView::new(&title, app.report.camera())
    };
    render_map(f, preview_area, &view);

    if let Ok(mut effect) = app.completion_fx.lock() {
        if let Some(effect) = effect.as_mut() {
            f.buffer_mut().render_effect(effect, body, app.last_tick);
        }
    }

    render_shortcuts(
        f,
        footer,
        &[
            ("Up/Down", "Pindah"),
            ("Enter", "Pilih"),
            ("F2", "Kirim"),
            ("F1", "Bantuan"),
            ("Esc", "Kembali"),
        ],
    );
}

fn render_form(app: &App, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title(" Form Laporan ")
        .title_style(Style::default().fg(Color::Green))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let [rows_area, submit_area] =
        Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(inner);

    // Every item takes two lines: label and value.
    let focus = app.report_focus % REPORT_ITEMS.len();
    let visible_items = usize::from(rows_area.height / 2).max(1);
    let window = visible_window(REPORT_ITEMS.len() - 1, visible_items, focus.min(REPORT_ITEMS.len() - 2));

    let mut lines = Vec::new();
    for (index, item) in REPORT_ITEMS.iter().enumerate().take(window.end).skip(window.start) {
        let focused = index == focus;
        let label_style = if focused {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if focused { "> " } else { "  " };

        match item {
            ReportItem::Field(field) => {
                let value = app.report.form().field(*field);
                lines.push(TextLine::from(Span::styled(
                    format!("{marker}{}", field.label()),
                    label_style,
                )));
                lines.push(if value.is_empty() {
                    TextLine::from(Span::styled(
                        format!("    {}", field.placeholder()),
                        Style::default().fg(Color::DarkGray),
                    ))
                } else {
                    let cursor = if focused { "_" } else { "" };
                    TextLine::from(format!("    {value}{cursor}"))
                });
            }
            ReportItem::PickLocation => {
                let form = app.report.form();
                lines.push(TextLine::from(Span::styled(
                    format!("{marker}Latitude / Longitude [Enter: Pilih Lokasi]"),
                    label_style,
                )));
                lines.push(if form.latitude().is_empty() {
                    TextLine::from(Span::styled(
                        "    Belum dipilih",
                        Style::default().fg(Color::DarkGray),
                    ))
                } else {
                    TextLine::from(format!("    {}, {}", form.latitude(), form.longitude()))
                });
            }
            ReportItem::Captcha => {
                lines.push(TextLine::from(Span::styled(
                    format!("{marker}CAPTCHA"),
                    label_style,
                )));
                lines.push(if app.report.captcha().is_solved() {
                    TextLine::from(Span::styled(
                        "    [x] Terverifikasi",
                        Style::default().fg(Color::Green),
                    ))
                } else {
                    TextLine::from(Span::styled(
                        "    [ ] Tekan Enter untuk verifikasi",
                        Style::default().fg(Color::Magenta),
                    ))
                });
            }
            ReportItem::Submit => {}
        }
    }
    f.render_widget(Paragraph::new(Text::from(lines)), rows_area);

    render_submit_button(app, f, submit_area, focus);
}

fn render_submit_button(app: &App, f: &mut Frame<'_>, area: Rect, focus: usize) {
    if app.report.is_busy() {
        let throbber = Throbber::default()
            .label("Mengirim laporan...")
            .style(Style::default().fg(Color::Yellow))
            .throbber_set(BRAILLE_SIX);
        let mut state = app.throbber_state.clone();
        f.render_stateful_widget(throbber, area, &mut state);
        return;
    }

    let focused = REPORT_ITEMS.get(focus) == Some(&ReportItem::Submit);
    let style = if focused {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Green)
    };
    f.render_widget(Paragraph::new(Span::styled("[ Kirim Laporan ]", style)), area);
}
