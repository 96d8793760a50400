use std::collections::BTreeMap;
use std::io::Stdout;
use std::time::Duration;

use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tokio::sync::mpsc::UnboundedReceiver;

use blankspot_tui::api::BlankspotBackend;
use blankspot_tui::towers::{visible_towers, FilterSelection, TowerRecord};

use crate::app::{handle_input, handle_mouse, App, AppEvent};
use crate::ui;

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(50);

/// Run the main application event loop
pub async fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    events: &mut UnboundedReceiver<AppEvent>,
) -> Result<()> {
    loop {
        app.update();

        // Results from background tasks land before the frame that shows them.
        while let Ok(event) = events.try_recv() {
            app.handle_event(event);
        }

        match terminal.draw(|f| ui::ui(app, f)) {
            Ok(frame) => app.viewport = frame.area,
            Err(e) => return Err(color_eyre::eyre::eyre!("Terminal draw error: {e}")),
        }

        if !matches!(event::poll(EVENT_POLL_TIMEOUT), Ok(true)) {
            tokio::task::yield_now().await;
            continue;
        }

        match event::read() {
            Ok(Event::Key(key)) if key.kind != KeyEventKind::Release => {
                handle_input(app, key.code);
                if !app.running {
                    break;
                }
            }
            Ok(Event::Mouse(mouse)) => handle_mouse(app, mouse),
            Ok(Event::Resize(width, height)) => {
                app.viewport = ratatui::layout::Rect::new(0, 0, width, height);
            }
            Ok(_) => {}
            Err(e) => tracing::warn!(error = %e, "failed to read terminal event"),
        }
    }

    Ok(())
}

/// Fetch towers once, filter them and print a summary (no UI)
pub async fn run_headless(
    backend: &dyn BlankspotBackend,
    selection: &FilterSelection,
    json: bool,
) -> Result<()> {
    let towers = backend.list_towers().await?;
    let summary = build_summary(&towers, selection);

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        render_summary_text(&summary);
    }

    Ok(())
}

fn render_summary_text(summary: &HeadlessSummary<'_>) {
    println!("\nBlankspot Tower Summary");
    println!("=======================");
    println!("Total towers: {}", summary.total_towers);
    println!("Visible towers: {}", summary.visible_towers);

    if !summary.filter_operators.is_empty() || !summary.filter_statuses.is_empty() {
        println!(
            "Filter: operators [{}] statuses [{}]",
            summary.filter_operators.join(", "),
            summary.filter_statuses.join(", ")
        );
    }

    println!("\nTowers by Operator:");
    for (operator, count) in &summary.by_operator {
        println!("- {operator}: {count}");
    }

    println!("\nTowers by Status:");
    for (status, count) in &summary.by_status {
        println!("- {status}: {count}");
    }

    println!("\nVisible Towers:");
    for tower in &summary.towers {
        println!(
            "- {} | {} | {} | {:.5}, {:.5}",
            tower.id,
            tower.operator,
            tower.status.label(),
            tower.position.latitude(),
            tower.position.longitude()
        );
    }
}

fn build_summary<'a>(towers: &'a [TowerRecord], selection: &FilterSelection) -> HeadlessSummary<'a> {
    let mut by_operator = BTreeMap::new();
    let mut by_status = BTreeMap::new();
    for tower in towers {
        *by_operator.entry(tower.operator.clone()).or_insert(0) += 1;
        *by_status
            .entry(tower.status.as_str().to_string())
            .or_insert(0) += 1;
    }

    let visible = visible_towers(towers, selection);

    HeadlessSummary {
        total_towers: towers.len(),
        visible_towers: visible.len(),
        filter_operators: selection.operators().map(str::to_string).collect(),
        filter_statuses: selection
            .statuses()
            .map(|status| status.as_str().to_string())
            .collect(),
        by_operator,
        by_status,
        towers: visible,
    }
}

#[derive(serde::Serialize)]
struct HeadlessSummary<'a> {
    total_towers: usize,
    visible_towers: usize,
    filter_operators: Vec<String>,
    filter_statuses: Vec<String>,
    by_operator: BTreeMap<String, usize>,
    by_status: BTreeMap<String, usize>,
    towers: Vec<&'a TowerRecord>,
}
