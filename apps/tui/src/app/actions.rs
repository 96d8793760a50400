use std::path::PathBuf;
use std::sync::Arc;

use blankspot_tui::api::{ApiError, BlankspotBackend, PlaceAutocomplete};
use blankspot_tui::report::SubmitTicket;
use blankspot_tui::towers::load_blankspots;
use tokio::sync::mpsc::UnboundedSender;

use crate::app::events::AppEvent;

const PLACE_RESULT_LIMIT: usize = 5;

/// Starts network and file work off the UI thread. Every task reports back
/// through the app's event channel.
#[derive(Clone)]
pub struct AppActions {
    backend: Arc<dyn BlankspotBackend>,
    places: Arc<dyn PlaceAutocomplete>,
    blankspot_file: Option<PathBuf>,
    tx: UnboundedSender<AppEvent>,
}

impl std::fmt::Debug for AppActions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppActions")
            .field("places", &self.places.name())
            .field("blankspot_file", &self.blankspot_file)
            .finish_non_exhaustive()
    }
}

impl AppActions {
    pub fn new(
        backend: Arc<dyn BlankspotBackend>,
        places: Arc<dyn PlaceAutocomplete>,
        blankspot_file: Option<PathBuf>,
        tx: UnboundedSender<AppEvent>,
    ) -> Self {
        Self {
            backend,
            places,
            blankspot_file,
            tx,
        }
    }

    pub fn places_name(&self) -> &'static str {
        self.places.name()
    }

    fn send(tx: &UnboundedSender<AppEvent>, event: AppEvent) {
        if tx.send(event).is_err() {
            tracing::debug!("event loop gone, dropping task result");
        }
    }

    pub fn spawn_fetch_towers(&self) {
        let backend = Arc::clone(&self.backend);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = backend.list_towers().await;
            Self::send(&tx, AppEvent::TowersLoaded(result));
        });
    }

    pub fn spawn_load_blankspots(&self) {
        let path = self.blankspot_file.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let records = load_blankspots(path.as_deref()).await;
            Self::send(&tx, AppEvent::BlankspotsLoaded(records));
        });
    }

    /// Sends the report. The ticket always comes back, even if the request
    /// task panics, so the busy flag is released.
    pub fn spawn_submit(&self, ticket: SubmitTicket) {
        let backend = Arc::clone(&self.backend);
        let tx = self.tx.clone();
        let payload = ticket.payload().clone();
        tokio::spawn(async move {
            let request = tokio::spawn(async move { backend.submit_report(&payload).await });
            let result = match request.await {
                Ok(result) => result,
                Err(err) => Err(ApiError::Task(err.to_string())),
            };
            Self::send(&tx, AppEvent::SubmitFinished { ticket, result });
        });
    }

    pub fn spawn_place_search(&self, request: u64, query: String) {
        let places = Arc::clone(&self.places);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = places.search(&query, PLACE_RESULT_LIMIT).await;
            Self::send(&tx, AppEvent::PlacesFound {
                request,
                query,
                result,
            });
        });
    }
}
