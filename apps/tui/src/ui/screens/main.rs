use ratatui::layout::{Constraint, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use blankspot_tui::towers::FetchState;

use crate::app::state::MainMenuItem;
use crate::app::App;
use crate::ui::layout::screen_chunks;
use crate::ui::widgets::chrome::{render_header, render_shortcuts};

pub fn render_main(app: &App, f: &mut Frame<'_>) {
    let [header, body, footer] = screen_chunks(f.area().inner(Margin::new(2, 1)));

    render_header(
        f,
        header,
        "Blankspot NTB",
        TextLine::from(Span::styled(
            "Pelaporan area tanpa sinyal & peta menara telekomunikasi",
            Style::default().fg(Color::White),
        )),
        Color::Cyan,
    );

    let [menu_area, info_area] =
        Layout::horizontal([Constraint::Length(32), Constraint::Min(20)]).areas(body);
    render_menu(app, f, menu_area);
    render_info(app, f, info_area);

    render_shortcuts(
        f,
        footer,
        &[
            ("Up/Down", "Pilih"),
            ("Enter", "Buka"),
            ("p", "Peta"),
            ("l", "Laporan"),
            ("F1", "Bantuan"),
            ("q", "Keluar"),
        ],
    );
}

fn render_menu(app: &App, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title(" Menu ")
        .title_style(Style::default().fg(Color::Green))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    let lines = MainMenuItem::ALL
        .iter()
        .enumerate()
        .map(|(index, item)| {
            if index == app.main_index {
                TextLine::from(Span::styled(
                    format!("> {}", item.label()),
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                TextLine::from(format!("  {}", item.label()))
            }
        })
        .collect::<Vec<_>>();

    f.render_widget(Paragraph::new(Text::from(lines)).block(block), area);
}

fn render_info(app: &App, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title(" Info ")
        .title_style(Style::default().fg(Color::Yellow))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let towers = match app.browse.fetch_state() {
        FetchState::Idle => "belum dimuat".to_string(),
        FetchState::Loading => "memuat...".to_string(),
        FetchState::Loaded => format!("{} menara", app.browse.towers().len()),
        FetchState::Failed(_) => "gagal dimuat".to_string(),
    };
    let captcha = if app.report.captcha().is_solved() {
        "terverifikasi"
    } else {
        "belum"
    };

    let lines = vec![
        TextLine::from(vec![
            Span::styled("Data menara: ", Style::default().fg(Color::Gray)),
            Span::raw(towers),
        ]),
        TextLine::from(vec![
            Span::styled("Lokasi blankspot: ", Style::default().fg(Color::Gray)),
            Span::raw(app.browse.blankspots().len().to_string()),
        ]),
        TextLine::from(vec![
            Span::styled("CAPTCHA laporan: ", Style::default().fg(Color::Gray)),
            Span::raw(captcha),
        ]),
        TextLine::from(""),
        TextLine::from(
            "Peta Menara menampilkan menara per operator dan status. \
             Laporkan Blankspot mengirim lokasi tanpa sinyal ke server.",
        ),
    ];

    f.render_widget(
        Paragraph::new(Text::from(lines))
            .block(block)
            .wrap(Wrap { trim: true }),
        area,
    );
}
