//! HTTP boundary: the blank spot backend and place search providers.

pub mod client;
pub mod error;
pub mod gazetteer;
pub mod nominatim;
pub mod places;

use async_trait::async_trait;

use crate::report::ReportPayload;
use crate::towers::TowerRecord;

pub use client::BlankspotClient;
pub use error::ApiError;
pub use gazetteer::GazetteerAutocomplete;
pub use nominatim::NominatimAutocomplete;
pub use places::{GeocodeError, PlaceAutocomplete};

/// The two backend endpoints the client talks to.
#[async_trait]
pub trait BlankspotBackend: Send + Sync {
    async fn list_towers(&self) -> Result<Vec<TowerRecord>, ApiError>;

    async fn submit_report(&self, payload: &ReportPayload) -> Result<(), ApiError>;
}
