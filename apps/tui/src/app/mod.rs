// Terminal app state, background actions and input handling

pub mod actions;
pub mod events;
pub mod input;
pub mod state;

pub use events::{AppEvent, SearchTarget};
pub use input::{handle_input, handle_mouse};
pub use state::{App, AppScreen};

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::BTreeMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use async_trait::async_trait;
    use blankspot_tui::api::{ApiError, BlankspotBackend, GazetteerAutocomplete};
    use blankspot_tui::domain::{GeoPoint, TowerStatus};
    use blankspot_tui::report::ReportPayload;
    use blankspot_tui::towers::{TowerId, TowerRecord};
    use tokio::sync::mpsc::{self, UnboundedReceiver};

    use super::actions::AppActions;
    use super::events::AppEvent;
    use super::state::App;

    pub struct MockBackend {
        fail: bool,
        list_calls: AtomicUsize,
        submit_calls: AtomicUsize,
    }

    impl MockBackend {
        pub fn accepting() -> Self {
            Self {
                fail: false,
                list_calls: AtomicUsize::new(0),
                submit_calls: AtomicUsize::new(0),
            }
        }

        pub fn failing() -> Self {
            Self {
                fail: true,
                ..Self::accepting()
            }
        }

        pub fn list_calls(&self) -> usize {
            self.list_calls.load(Ordering::SeqCst)
        }

        pub fn submit_calls(&self) -> usize {
            self.submit_calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl BlankspotBackend for MockBackend {
        async fn list_towers(&self) -> Result<Vec<TowerRecord>, ApiError> {
            self.list_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(ApiError::Status(503));
            }
            Ok([("XL", TowerStatus::Active), ("Telkomsel", TowerStatus::Inactive)]
                .into_iter()
                .enumerate()
                .map(|(index, (operator, status))| TowerRecord {
                    id: TowerId::Number(index as i64 + 1),
                    operator: operator.to_string(),
                    status,
                    position: GeoPoint::default(),
                    metadata: BTreeMap::new(),
                })
                .collect())
        }

        async fn submit_report(&self, _payload: &ReportPayload) -> Result<(), ApiError> {
            self.submit_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(ApiError::Status(500))
            } else {
                Ok(())
            }
        }
    }

    pub fn test_app(backend: MockBackend) -> (App, UnboundedReceiver<AppEvent>, Arc<MockBackend>) {
        let backend = Arc::new(backend);
        let (tx, rx) = mpsc::unbounded_channel();
        let actions = AppActions::new(
            backend.clone(),
            Arc::new(GazetteerAutocomplete::new()),
            None,
            tx,
        );
        (App::new(actions), rx, backend)
    }
}
