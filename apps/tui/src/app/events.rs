use blankspot_tui::api::{ApiError, GeocodeError};
use blankspot_tui::location::PlaceResult;
use blankspot_tui::report::SubmitTicket;
use blankspot_tui::towers::{BlankspotRecord, TowerRecord};

/// Which map a place search was started from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchTarget {
    Browse,
    Picker,
}

/// Results of background tasks, drained by the event loop between frames.
#[derive(Debug)]
pub enum AppEvent {
    TowersLoaded(Result<Vec<TowerRecord>, ApiError>),
    BlankspotsLoaded(Vec<BlankspotRecord>),
    SubmitFinished {
        ticket: SubmitTicket,
        result: Result<(), ApiError>,
    },
    PlacesFound {
        /// Matches `SearchBox::pending` of the search that asked.
        request: u64,
        query: String,
        result: Result<Vec<PlaceResult>, GeocodeError>,
    },
}
