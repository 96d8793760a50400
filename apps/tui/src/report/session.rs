use crate::api::{ApiError, BlankspotBackend};
use crate::domain::{GeoPoint, DEFAULT_CENTER, REPORT_MAP_ZOOM};
use crate::location::{reconcile, CoordinateStore, LocationEvent, MapCamera, MapExtent, Reconciliation};
use crate::report::captcha::CaptchaState;
use crate::report::form::{ReportField, ReportForm, ReportPayload};
use crate::report::notice::Notice;

pub const MISSING_CAPTCHA_MESSAGE: &str = "Mohon untuk melengkapi CAPTCHA";
pub const SUBMIT_SUCCESS_MESSAGE: &str = "Laporan blankspot berhasil dikirimkan";
pub const SUBMIT_FAILURE_MESSAGE: &str = "Terjadi kesalahan saat mengirimkan laporan";
pub const SUBMIT_BUSY_MESSAGE: &str = "Laporan sedang dikirim, mohon tunggu";

/// Why a submission did not start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitBlocked {
    MissingCaptcha,
    Busy,
}

impl SubmitBlocked {
    pub fn notice(self) -> Notice {
        match self {
            Self::MissingCaptcha => Notice::warning(MISSING_CAPTCHA_MESSAGE),
            Self::Busy => Notice::warning(SUBMIT_BUSY_MESSAGE),
        }
    }
}

/// Proof that a submission is in flight. Hand it back to
/// [`ReportSession::complete_submit`] to release the busy flag.
#[derive(Debug)]
#[must_use = "a submit ticket must be passed to complete_submit"]
pub struct SubmitTicket {
    payload: ReportPayload,
}

impl SubmitTicket {
    pub fn payload(&self) -> &ReportPayload {
        &self.payload
    }
}

/// Everything the report screen owns: the form, the picked point, the picker
/// camera and the CAPTCHA gate.
#[derive(Debug, Clone)]
pub struct ReportSession {
    form: ReportForm,
    store: CoordinateStore,
    camera: MapCamera,
    captcha: CaptchaState,
    busy: bool,
}

impl Default for ReportSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportSession {
    pub fn new() -> Self {
        Self::with_captcha(CaptchaState::new())
    }

    pub fn with_captcha(captcha: CaptchaState) -> Self {
        Self {
            form: ReportForm::new(),
            store: CoordinateStore::new(),
            camera: MapCamera::new(DEFAULT_CENTER, REPORT_MAP_ZOOM),
            captcha,
            busy: false,
        }
    }

    pub fn form(&self) -> &ReportForm {
        &self.form
    }

    pub fn current_point(&self) -> GeoPoint {
        self.store.current_point()
    }

    pub fn camera(&self) -> &MapCamera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut MapCamera {
        &mut self.camera
    }

    pub fn captcha(&self) -> &CaptchaState {
        &self.captcha
    }

    pub fn captcha_mut(&mut self) -> &mut CaptchaState {
        &mut self.captcha
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn set_field(&mut self, field: ReportField, value: impl Into<String>) {
        self.form.set_field(field, value);
    }

    pub fn push_char(&mut self, field: ReportField, ch: char) {
        self.form.push_char(field, ch);
    }

    pub fn pop_char(&mut self, field: ReportField) {
        self.form.pop_char(field);
    }

    /// Routes a location event through the reconciler so the store and the
    /// form's latitude/longitude move together.
    pub fn apply_location(&mut self, event: LocationEvent, extent: MapExtent) -> Reconciliation {
        reconcile(&mut self.store, &mut self.camera, &mut self.form, event, extent)
    }

    /// Empties every field and puts the point back on the default center.
    pub fn reset(&mut self) {
        self.form.clear();
        self.store.reset();
        self.camera = MapCamera::new(DEFAULT_CENTER, REPORT_MAP_ZOOM);
    }

    pub fn begin_submit(&mut self) -> Result<SubmitTicket, SubmitBlocked> {
        if self.busy {
            return Err(SubmitBlocked::Busy);
        }
        if self.captcha.token().is_none() {
            tracing::debug!("submit blocked: captcha not solved");
            return Err(SubmitBlocked::MissingCaptcha);
        }

        self.busy = true;
        Ok(SubmitTicket {
            payload: self.form.payload(),
        })
    }

    /// Releases the busy flag and applies the outcome. Success clears the
    /// form and the token; failure keeps both.
    pub fn complete_submit(&mut self, ticket: SubmitTicket, result: Result<(), ApiError>) -> Notice {
        drop(ticket);
        self.busy = false;

        match result {
            Ok(()) => {
                self.reset();
                self.captcha.clear();
                Notice::success(SUBMIT_SUCCESS_MESSAGE)
            }
            Err(err) => {
                tracing::error!(error = %err, "report submission failed");
                Notice::error(SUBMIT_FAILURE_MESSAGE)
            }
        }
    }

    /// Runs a whole submission against `backend` and returns what to show.
    pub async fn submit(&mut self, backend: &dyn BlankspotBackend) -> Notice {
        let ticket = match self.begin_submit() {
            Ok(ticket) => ticket,
            Err(blocked) => return blocked.notice(),
        };
        let result = backend.submit_report(ticket.payload()).await;
        self.complete_submit(ticket, result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::{PlaceGeometry, PlaceResult};
    use crate::report::captcha::CaptchaChallenge;
    use crate::report::notice::NoticeKind;
    use crate::towers::TowerRecord;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    struct MockBackend {
        status: Option<u16>,
        calls: AtomicUsize,
        last: Mutex<Option<ReportPayload>>,
    }

    impl MockBackend {
        fn accepting() -> Self {
            Self {
                status: None,
                calls: AtomicUsize::new(0),
                last: Mutex::new(None),
            }
        }

        fn failing(status: u16) -> Self {
            Self {
                status: Some(status),
                ..Self::accepting()
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl BlankspotBackend for MockBackend {
        async fn list_towers(&self) -> Result<Vec<TowerRecord>, ApiError> {
            Ok(Vec::new())
        }

        async fn submit_report(&self, payload: &ReportPayload) -> Result<(), ApiError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Ok(mut last) = self.last.lock() {
                *last = Some(payload.clone());
            }
            match self.status {
                Some(status) => Err(ApiError::Status(status)),
                None => Ok(()),
            }
        }
    }

    fn solved_session() -> ReportSession {
        let mut session =
            ReportSession::with_captcha(CaptchaState::with_challenge(CaptchaChallenge::with_operands(1, 1)));
        session.captcha_mut().answer("2");
        session
    }

    fn fill(session: &mut ReportSession) -> Result<(), Box<dyn std::error::Error>> {
        session.set_field(ReportField::Nama, "Baiq");
        session.set_field(ReportField::Operator, "XL");
        session.set_field(ReportField::Lokasi, "Desa Sekaroh");
        session.apply_location(
            LocationEvent::MapClicked(GeoPoint::new(-8.9, 116.4)?),
            MapExtent::default(),
        );
        Ok(())
    }

    #[tokio::test]
    async fn missing_captcha_blocks_without_network() -> Result<(), Box<dyn std::error::Error>> {
        let backend = MockBackend::accepting();
        let mut session = ReportSession::with_captcha(CaptchaState::with_challenge(
            CaptchaChallenge::with_operands(2, 3),
        ));
        fill(&mut session)?;
        let before = session.form().clone();

        let notice = session.submit(&backend).await;

        assert_eq!(notice, Notice::warning(MISSING_CAPTCHA_MESSAGE));
        assert_eq!(backend.calls(), 0);
        assert_eq!(session.form(), &before);
        assert!(!session.is_busy());
        Ok(())
    }

    #[tokio::test]
    async fn success_resets_form_and_captcha() -> Result<(), Box<dyn std::error::Error>> {
        let backend = MockBackend::accepting();
        let mut session = solved_session();
        fill(&mut session)?;

        let notice = session.submit(&backend).await;

        assert_eq!(notice.kind, NoticeKind::Success);
        assert_eq!(notice.message, SUBMIT_SUCCESS_MESSAGE);
        assert_eq!(backend.calls(), 1);
        assert_eq!(session.form(), &ReportForm::new());
        assert_eq!(session.current_point(), DEFAULT_CENTER);
        assert!(session.captcha().token().is_none());
        assert!(!session.is_busy());

        let sent = backend.last.lock().map_err(|_| "poisoned")?.clone().ok_or("no payload")?;
        assert_eq!(sent.nama, "Baiq");
        assert_eq!(sent.latitude, "-8.9");
        assert_eq!(sent.longitude, "116.4");
        Ok(())
    }

    #[tokio::test]
    async fn failure_keeps_fields_and_token() -> Result<(), Box<dyn std::error::Error>> {
        let backend = MockBackend::failing(500);
        let mut session = solved_session();
        fill(&mut session)?;
        let before = session.form().clone();

        let notice = session.submit(&backend).await;

        assert_eq!(notice, Notice::error(SUBMIT_FAILURE_MESSAGE));
        assert_eq!(backend.calls(), 1);
        assert_eq!(session.form(), &before);
        assert!(session.captcha().is_solved());
        assert!(!session.is_busy());
        Ok(())
    }

    #[test]
    fn second_submit_while_busy_is_refused() {
        let mut session = solved_session();

        let ticket = session.begin_submit();
        assert!(ticket.is_ok());
        assert_eq!(session.begin_submit().err(), Some(SubmitBlocked::Busy));

        if let Ok(ticket) = ticket {
            session.complete_submit(ticket, Err(ApiError::Task("cancelled".to_string())));
        }
        assert!(!session.is_busy());
        assert!(session.begin_submit().is_ok());
    }

    #[test]
    fn place_selection_updates_form_and_store_together() -> Result<(), Box<dyn std::error::Error>> {
        let mut session = ReportSession::new();
        let point = GeoPoint::new(-8.5, 116.1)?;

        session.apply_location(
            LocationEvent::PlaceSelected(PlaceResult {
                name: "Narmada".to_string(),
                formatted_address: String::new(),
                geometry: Some(PlaceGeometry {
                    location: Some(point),
                    viewport: Some(crate::domain::GeoBounds::from_corners(
                        GeoPoint::new(-8.55, 116.05)?,
                        GeoPoint::new(-8.45, 116.15)?,
                    )),
                }),
            }),
            MapExtent::default(),
        );

        assert_eq!(session.current_point(), point);
        assert_eq!(session.form().latitude(), "-8.5");
        assert_eq!(session.form().longitude(), "116.1");
        Ok(())
    }

    #[test]
    fn reset_restores_empty_form_and_default_center() -> Result<(), Box<dyn std::error::Error>> {
        let mut session = ReportSession::new();
        fill(&mut session)?;
        session.camera_mut().zoom_in();

        session.reset();

        assert_eq!(session.form(), &ReportForm::new());
        assert_eq!(session.current_point(), DEFAULT_CENTER);
        assert_eq!(session.camera(), &MapCamera::new(DEFAULT_CENTER, REPORT_MAP_ZOOM));
        Ok(())
    }
}
