use async_trait::async_trait;
use thiserror::Error;

use crate::location::PlaceResult;

#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("geocoder request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("geocoder responded with status {0}")]
    Status(u16),
    #[error("unreadable geocoder response: {0}")]
    Decode(String),
}

/// Turns free text into candidate places for the search box.
#[async_trait]
pub trait PlaceAutocomplete: Send + Sync {
    fn name(&self) -> &'static str;

    async fn search(&self, query: &str, limit: usize) -> Result<Vec<PlaceResult>, GeocodeError>;
}
