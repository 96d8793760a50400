use std::sync::Mutex;
use std::time::{Duration, Instant};

use blankspot_tui::domain::{GeoPoint, TowerStatus, KNOWN_OPERATORS};
use blankspot_tui::location::{LocationEvent, MapExtent, MapProjection, Reconciliation};
use blankspot_tui::report::{Notice, NoticeKind, ReportField, ReportSession};
use blankspot_tui::towers::{BrowseState, Layer};
use ratatui::layout::Rect;
use ratatui::style::Color;
use tachyonfx::{fx, Effect, Interpolation};
use throbber_widgets_tui::ThrobberState;

use crate::app::actions::AppActions;
use crate::app::events::{AppEvent, SearchTarget};
use crate::ui::layout;

const TOAST_TTL: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppScreen {
    Main,
    Browse,
    Report,
    LocationPicker,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainMenuItem {
    Browse,
    Report,
    Quit,
}

impl MainMenuItem {
    pub const ALL: [Self; 3] = [Self::Browse, Self::Report, Self::Quit];

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Browse),
            1 => Some(Self::Report),
            2 => Some(Self::Quit),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Browse => "Peta Menara",
            Self::Report => "Laporkan Blankspot",
            Self::Quit => "Keluar",
        }
    }
}

/// Rows of the report screen, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportItem {
    Field(ReportField),
    PickLocation,
    Captcha,
    Submit,
}

pub const REPORT_ITEMS: [ReportItem; 10] = [
    ReportItem::Field(ReportField::Nama),
    ReportItem::Field(ReportField::Email),
    ReportItem::Field(ReportField::Telepon),
    ReportItem::Field(ReportField::Lokasi),
    ReportItem::PickLocation,
    ReportItem::Field(ReportField::Operator),
    ReportItem::Field(ReportField::ImgUrl),
    ReportItem::Field(ReportField::Keterangan),
    ReportItem::Captcha,
    ReportItem::Submit,
];

/// Checkboxes of the browse map's layer panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelItem {
    Layer(Layer),
    Operator(&'static str),
    Status(TowerStatus),
}

pub fn panel_items() -> Vec<PanelItem> {
    Layer::ALL
        .into_iter()
        .map(PanelItem::Layer)
        .chain(KNOWN_OPERATORS.into_iter().map(PanelItem::Operator))
        .chain(TowerStatus::ALL.into_iter().map(PanelItem::Status))
        .collect()
}

#[derive(Debug, Clone)]
pub struct SearchBox {
    pub target: SearchTarget,
    pub query: String,
    pub results: Vec<blankspot_tui::location::PlaceResult>,
    pub selected: usize,
    /// Request id of the search in flight, if any.
    pub pending: Option<u64>,
    /// Query the current results belong to.
    pub searched: Option<String>,
}

impl SearchBox {
    pub fn new(target: SearchTarget) -> Self {
        Self {
            target,
            query: String::new(),
            results: Vec::new(),
            selected: 0,
            pending: None,
            searched: None,
        }
    }

    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// True when the results on screen match what is typed.
    pub fn is_fresh(&self) -> bool {
        !self.results.is_empty() && self.searched.as_deref() == Some(self.query.trim())
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub notice: Notice,
    pub shown_at: Instant,
}

pub struct App {
    pub running: bool,
    pub screen: AppScreen,
    pub show_help: bool,
    pub main_index: usize,
    pub report_focus: usize,
    pub panel_index: usize,
    pub browse: BrowseState,
    pub report: ReportSession,
    pub search: Option<SearchBox>,
    pub captcha_input: Option<String>,
    pub dragging: bool,
    pub drag_preview: Option<GeoPoint>,
    pub toasts: Vec<Toast>,
    pub throbber_state: ThrobberState,
    pub completion_fx: Mutex<Option<Effect>>,
    pub last_tick: Duration,
    pub last_frame: Instant,
    pub viewport: Rect,
    pub actions: AppActions,
    blankspots_requested: bool,
    search_requests: u64,
}

impl App {
    pub fn new(actions: AppActions) -> Self {
        Self {
            running: true,
            screen: AppScreen::Main,
            show_help: false,
            main_index: 0,
            report_focus: 0,
            panel_index: 0,
            browse: BrowseState::new(),
            report: ReportSession::new(),
            search: None,
            captcha_input: None,
            dragging: false,
            drag_preview: None,
            toasts: Vec::new(),
            throbber_state: ThrobberState::default(),
            completion_fx: Mutex::new(None),
            last_tick: Duration::ZERO,
            last_frame: Instant::now(),
            viewport: Rect::new(0, 0, 80, 24),
            actions,
            blankspots_requested: false,
            search_requests: 0,
        }
    }

    pub fn update(&mut self) {
        let now = Instant::now();
        self.last_tick = now.duration_since(self.last_frame);
        self.last_frame = now;

        self.toasts
            .retain(|toast| now.duration_since(toast.shown_at) < TOAST_TTL);

        if self.report.is_busy() {
            self.throbber_state.calc_next();
        }

        if let Ok(mut effect) = self.completion_fx.lock() {
            if effect.as_ref().is_some_and(Effect::done) {
                *effect = None;
            }
        }
    }

    pub fn notify(&mut self, notice: Notice) {
        match notice.kind {
            NoticeKind::Error => tracing::warn!(message = %notice.message, "error notice"),
            NoticeKind::Warning | NoticeKind::Success => {
                tracing::info!(message = %notice.message, "notice");
            }
        }
        self.toasts.push(Toast {
            notice,
            shown_at: Instant::now(),
        });
    }

    pub fn current_report_item(&self) -> ReportItem {
        REPORT_ITEMS[self.report_focus % REPORT_ITEMS.len()]
    }

    /// Area of the map canvas for the current screen, as drawn last frame.
    pub fn map_area(&self) -> Rect {
        layout::map_area(self.viewport)
    }

    pub fn map_extent(&self) -> MapExtent {
        MapExtent::from(self.map_area())
    }

    pub fn open_browse(&mut self) {
        self.screen = AppScreen::Browse;
        if self.browse.begin_fetch() {
            self.actions.spawn_fetch_towers();
        }
        if !self.blankspots_requested {
            self.blankspots_requested = true;
            self.actions.spawn_load_blankspots();
        }
    }

    pub fn retry_fetch(&mut self) {
        if self.browse.begin_fetch() {
            self.actions.spawn_fetch_towers();
        }
    }

    pub fn open_report(&mut self) {
        self.screen = AppScreen::Report;
    }

    pub fn open_picker(&mut self) {
        self.screen = AppScreen::LocationPicker;
    }

    pub fn close_picker(&mut self) {
        self.dragging = false;
        self.drag_preview = None;
        self.search = None;
        self.screen = AppScreen::Report;
    }

    pub fn back_to_main(&mut self) {
        self.search = None;
        self.captcha_input = None;
        self.screen = AppScreen::Main;
    }

    pub fn open_search(&mut self, target: SearchTarget) {
        self.search = Some(SearchBox::new(target));
    }

    /// Sends the typed query to the place provider. A newer query replaces
    /// one still in flight; results are only applied to the request that is
    /// pending when they arrive.
    pub fn run_search(&mut self) {
        let Some(search) = self.search.as_mut() else {
            return;
        };
        let query = search.query.trim().to_string();
        if query.is_empty() {
            return;
        }
        self.search_requests += 1;
        search.pending = Some(self.search_requests);
        self.actions.spawn_place_search(self.search_requests, query);
    }

    /// Applies the highlighted result to the map the search came from.
    pub fn choose_search_result(&mut self) {
        let Some(search) = self.search.take() else {
            return;
        };
        let Some(place) = search.results.get(search.selected).cloned() else {
            self.search = Some(search);
            return;
        };

        let extent = self.map_extent();
        match search.target {
            SearchTarget::Browse => {
                self.browse.focus_place(place, extent);
            }
            SearchTarget::Picker => {
                self.report
                    .apply_location(LocationEvent::PlaceSelected(place), extent);
            }
        }
    }

    pub fn start_submit(&mut self) {
        match self.report.begin_submit() {
            Ok(ticket) => {
                tracing::info!("submitting blank spot report");
                self.actions.spawn_submit(ticket);
            }
            Err(blocked) => self.notify(blocked.notice()),
        }
    }

    pub fn answer_captcha(&mut self) {
        let Some(input) = self.captcha_input.take() else {
            return;
        };
        if self.report.captcha_mut().answer(&input) {
            self.notify(Notice::success("CAPTCHA terverifikasi"));
        } else {
            self.notify(Notice::warning("Jawaban CAPTCHA salah, silakan coba lagi"));
            self.captcha_input = Some(String::new());
        }
    }

    fn picker_projection(&self) -> MapProjection {
        MapProjection::new(self.report.camera(), self.map_area())
    }

    /// Screen cell of the report marker on the picker map.
    pub fn marker_cell(&self) -> Option<ratatui::layout::Position> {
        self.picker_projection()
            .cell_of(self.drag_preview.unwrap_or_else(|| self.report.current_point()))
    }

    pub fn click_picker_map(&mut self, column: u16, row: u16) -> Reconciliation {
        let Some(point) = self.picker_projection().point_at(column, row) else {
            return Reconciliation::Ignored;
        };
        let extent = self.map_extent();
        self.report
            .apply_location(LocationEvent::MapClicked(point), extent)
    }

    /// Drops the point at the map center, the keyboard stand-in for a click.
    pub fn pick_map_center(&mut self) -> Reconciliation {
        let point = self.report.camera().center();
        let extent = self.map_extent();
        self.report
            .apply_location(LocationEvent::MapClicked(point), extent)
    }

    pub fn begin_drag(&mut self, column: u16, row: u16) -> bool {
        let Some(marker) = self.marker_cell() else {
            return false;
        };
        let near = marker.x.abs_diff(column) <= 1 && marker.y.abs_diff(row) <= 1;
        if near {
            self.dragging = true;
            self.drag_preview = Some(self.report.current_point());
        }
        near
    }

    pub fn drag_to(&mut self, column: u16, row: u16) {
        if !self.dragging {
            return;
        }
        if let Some(point) = self.picker_projection().point_at(column, row) {
            self.drag_preview = Some(point);
        }
    }

    pub fn end_drag(&mut self) -> Reconciliation {
        if !self.dragging {
            return Reconciliation::Ignored;
        }
        self.dragging = false;
        let Some(point) = self.drag_preview.take() else {
            return Reconciliation::Ignored;
        };
        let extent = self.map_extent();
        self.report
            .apply_location(LocationEvent::MarkerDragged(point), extent)
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::TowersLoaded(result) => {
                if let Some(notice) = self.browse.finish_fetch(result) {
                    self.notify(notice);
                }
            }
            AppEvent::BlankspotsLoaded(records) => self.browse.set_blankspots(records),
            AppEvent::SubmitFinished { ticket, result } => {
                let notice = self.report.complete_submit(ticket, result);
                if notice.kind == NoticeKind::Success {
                    self.report_focus = 0;
                    if let Ok(mut effect) = self.completion_fx.lock() {
                        *effect = Some(fx::fade_from_fg(
                            Color::Black,
                            (800, Interpolation::QuadOut),
                        ));
                    }
                }
                self.notify(notice);
            }
            AppEvent::PlacesFound {
                request,
                query,
                result,
            } => self.apply_places(request, query, result),
        }
    }

    fn apply_places(
        &mut self,
        request: u64,
        query: String,
        result: Result<Vec<blankspot_tui::location::PlaceResult>, blankspot_tui::api::GeocodeError>,
    ) {
        let Some(search) = self
            .search
            .as_mut()
            .filter(|search| search.pending == Some(request))
        else {
            tracing::debug!(request, %query, "dropping place results for a closed or replaced search");
            return;
        };
        search.pending = None;

        match result {
            Ok(results) => {
                let empty = results.is_empty();
                search.results = results;
                search.selected = 0;
                search.searched = Some(query);
                if empty {
                    self.notify(Notice::warning("Lokasi tidak ditemukan"));
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "place search failed");
                self.notify(Notice::error("Pencarian lokasi gagal"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::testing::{test_app, MockBackend};
    use blankspot_tui::domain::DEFAULT_CENTER;
    use blankspot_tui::towers::FetchState;

    #[tokio::test]
    async fn submit_without_captcha_warns_and_sends_nothing() -> Result<(), Box<dyn std::error::Error>> {
        let (mut app, mut rx, backend) = test_app(MockBackend::accepting());
        app.report.set_field(ReportField::Nama, "Baiq");

        app.start_submit();

        assert!(rx.try_recv().is_err());
        assert_eq!(backend.submit_calls(), 0);
        let toast = app.toasts.last().ok_or("toast expected")?;
        assert_eq!(toast.notice.message, "Mohon untuk melengkapi CAPTCHA");
        assert_eq!(app.report.form().field(ReportField::Nama), "Baiq");
        Ok(())
    }

    #[tokio::test]
    async fn submit_round_trip_through_event_channel() -> Result<(), Box<dyn std::error::Error>> {
        let (mut app, mut rx, backend) = test_app(MockBackend::accepting());
        let challenge = app.report.captcha().challenge().question();
        let answer = solve(&challenge).ok_or("unreadable challenge")?;
        app.captcha_input = Some(answer.to_string());
        app.answer_captcha();
        app.report.set_field(ReportField::Operator, "XL");

        app.start_submit();
        assert!(app.report.is_busy());

        let event = rx.recv().await.ok_or("submit result expected")?;
        app.handle_event(event);

        assert_eq!(backend.submit_calls(), 1);
        assert!(!app.report.is_busy());
        assert_eq!(app.report.form().field(ReportField::Operator), "");
        let toast = app.toasts.last().ok_or("toast expected")?;
        assert_eq!(toast.notice.kind, NoticeKind::Success);
        Ok(())
    }

    #[tokio::test]
    async fn failed_submit_keeps_form() -> Result<(), Box<dyn std::error::Error>> {
        let (mut app, mut rx, _backend) = test_app(MockBackend::failing());
        let answer = solve(&app.report.captcha().challenge().question()).ok_or("challenge")?;
        app.captcha_input = Some(answer.to_string());
        app.answer_captcha();
        app.report.set_field(ReportField::Lokasi, "Dusun Batu Layar");

        app.start_submit();
        let event = rx.recv().await.ok_or("submit result expected")?;
        app.handle_event(event);

        assert_eq!(app.report.form().field(ReportField::Lokasi), "Dusun Batu Layar");
        assert!(app.report.captcha().is_solved());
        let toast = app.toasts.last().ok_or("toast expected")?;
        assert_eq!(toast.notice.message, "Terjadi kesalahan saat mengirimkan laporan");
        Ok(())
    }

    #[tokio::test]
    async fn map_click_moves_point_and_form_together() {
        let (mut app, _rx, _backend) = test_app(MockBackend::accepting());
        app.viewport = Rect::new(0, 0, 100, 40);
        app.open_picker();
        let area = app.map_area();

        let outcome = app.click_picker_map(area.x + 2, area.y + 2);

        let Reconciliation::Moved(point) = outcome else {
            panic!("click inside the map should move the point");
        };
        assert_ne!(point, DEFAULT_CENTER);
        assert_eq!(app.report.current_point(), point);
        assert_eq!(app.report.form().latitude(), point.latitude().to_string());
        assert_eq!(app.report.form().longitude(), point.longitude().to_string());
    }

    #[tokio::test]
    async fn dragging_marker_sets_point_on_release() {
        let (mut app, _rx, _backend) = test_app(MockBackend::accepting());
        app.viewport = Rect::new(0, 0, 100, 40);
        app.open_picker();
        let Some(marker) = app.marker_cell() else {
            panic!("marker should be on screen");
        };

        assert!(app.begin_drag(marker.x, marker.y));
        app.drag_to(marker.x + 5, marker.y + 2);
        assert_eq!(app.report.form().latitude(), "");

        let outcome = app.end_drag();
        assert!(matches!(outcome, Reconciliation::Moved(_)));
        assert!(!app.dragging);
        assert_ne!(app.report.current_point(), DEFAULT_CENTER);
        assert!(!app.report.form().latitude().is_empty());
    }

    #[tokio::test]
    async fn opening_browse_fetches_once() -> Result<(), Box<dyn std::error::Error>> {
        let (mut app, mut rx, backend) = test_app(MockBackend::accepting());

        app.open_browse();
        app.back_to_main();
        app.open_browse();

        let mut towers_seen = 0;
        for _ in 0..2 {
            let event = rx.recv().await.ok_or("event expected")?;
            if matches!(event, AppEvent::TowersLoaded(_)) {
                towers_seen += 1;
            }
            app.handle_event(event);
        }

        assert_eq!(towers_seen, 1);
        assert_eq!(backend.list_calls(), 1);
        assert_eq!(app.browse.fetch_state(), &FetchState::Loaded);
        assert_eq!(app.browse.render().towers.len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn picker_search_result_updates_form() -> Result<(), Box<dyn std::error::Error>> {
        let (mut app, mut rx, _backend) = test_app(MockBackend::accepting());
        app.open_picker();
        app.open_search(SearchTarget::Picker);
        if let Some(search) = app.search.as_mut() {
            search.query = "praya".to_string();
        }

        app.run_search();
        let event = rx.recv().await.ok_or("search result expected")?;
        app.handle_event(event);
        assert!(app.search.as_ref().is_some_and(SearchBox::is_fresh));

        app.choose_search_result();
        assert!(app.search.is_none());
        assert_eq!(app.report.form().latitude(), "-8.706");
        assert_eq!(app.report.form().longitude(), "116.27");
        Ok(())
    }

    fn place(name: &str) -> blankspot_tui::location::PlaceResult {
        blankspot_tui::location::PlaceResult {
            name: name.to_string(),
            formatted_address: String::new(),
            geometry: None,
        }
    }

    fn type_and_search(app: &mut App, query: &str) -> Option<u64> {
        app.open_search(SearchTarget::Picker);
        if let Some(search) = app.search.as_mut() {
            search.query = query.to_string();
        }
        app.run_search();
        app.search.as_ref().and_then(|search| search.pending)
    }

    #[tokio::test]
    async fn late_results_leave_a_newer_search_alone() -> Result<(), Box<dyn std::error::Error>> {
        let (mut app, _rx, _backend) = test_app(MockBackend::accepting());
        app.open_picker();

        let first = type_and_search(&mut app, "praya").ok_or("first request expected")?;
        app.search = None;
        let second = type_and_search(&mut app, "sembalun").ok_or("second request expected")?;
        assert_ne!(first, second);

        app.handle_event(AppEvent::PlacesFound {
            request: first,
            query: "praya".to_string(),
            result: Ok(vec![place("Praya")]),
        });
        let search = app.search.as_ref().ok_or("search box expected")?;
        assert_eq!(search.pending, Some(second));
        assert!(search.results.is_empty());
        assert_eq!(search.query, "sembalun");

        app.handle_event(AppEvent::PlacesFound {
            request: second,
            query: "sembalun".to_string(),
            result: Ok(vec![place("Sembalun")]),
        });
        let search = app.search.as_ref().ok_or("search box expected")?;
        assert!(!search.is_pending());
        assert_eq!(search.results.len(), 1);
        assert!(search.is_fresh());
        Ok(())
    }

    #[tokio::test]
    async fn editing_while_pending_starts_a_new_request() -> Result<(), Box<dyn std::error::Error>> {
        let (mut app, _rx, _backend) = test_app(MockBackend::accepting());
        let first = type_and_search(&mut app, "gili").ok_or("request expected")?;
        if let Some(search) = app.search.as_mut() {
            search.query = "gili air".to_string();
        }
        app.run_search();
        let second = app.search.as_ref().and_then(|search| search.pending);
        assert!(second.is_some_and(|second| second != first));

        app.handle_event(AppEvent::PlacesFound {
            request: first,
            query: "gili".to_string(),
            result: Ok(vec![place("Gili Trawangan")]),
        });
        assert!(app.search.as_ref().is_some_and(SearchBox::is_pending));
        Ok(())
    }

    fn solve(question: &str) -> Option<u16> {
        let (left, rest) = question.split_once(" + ")?;
        let right = rest.split_whitespace().next()?;
        Some(left.trim().parse::<u16>().ok()? + right.parse::<u16>().ok()?)
    }
}
