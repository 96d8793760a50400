use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::api::places::{GeocodeError, PlaceAutocomplete};
use crate::domain::{GeoBounds, GeoPoint};
use crate::location::{PlaceGeometry, PlaceResult};

const USER_AGENT: &str = concat!("blankspot-tui/", env!("CARGO_PKG_VERSION"));

/// Nominatim search item.
#[derive(Debug, Deserialize)]
struct NominatimPlace {
    display_name: String,
    #[serde(default)]
    name: Option<String>,
    lat: String,
    lon: String,
    /// `[south, north, west, east]` as strings.
    #[serde(default)]
    boundingbox: Option<Vec<String>>,
}

impl NominatimPlace {
    fn location(&self) -> Option<GeoPoint> {
        let latitude = self.lat.trim().parse().ok()?;
        let longitude = self.lon.trim().parse().ok()?;
        GeoPoint::new(latitude, longitude).ok()
    }

    fn viewport(&self) -> Option<GeoBounds> {
        let corners = self
            .boundingbox
            .as_ref()?
            .iter()
            .map(|value| value.trim().parse::<f64>().ok())
            .collect::<Option<Vec<_>>>()?;
        let [south, north, west, east] = corners.as_slice() else {
            return None;
        };
        let south_west = GeoPoint::new(*south, *west).ok()?;
        let north_east = GeoPoint::new(*north, *east).ok()?;
        Some(GeoBounds::from_corners(south_west, north_east))
    }

    fn into_place(self) -> PlaceResult {
        let location = self.location();
        let viewport = self.viewport();
        let geometry = (location.is_some() || viewport.is_some())
            .then_some(PlaceGeometry { location, viewport });

        let name = self
            .name
            .filter(|name| !name.trim().is_empty())
            .or_else(|| {
                self.display_name
                    .split(',')
                    .next()
                    .map(|part| part.trim().to_string())
            })
            .unwrap_or_default();

        PlaceResult {
            name,
            formatted_address: self.display_name,
            geometry,
        }
    }
}

/// OpenStreetMap Nominatim search, restricted to Indonesia.
#[derive(Debug, Clone)]
pub struct NominatimAutocomplete {
    http: reqwest::Client,
    base_url: String,
}

impl NominatimAutocomplete {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, GeocodeError> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl PlaceAutocomplete for NominatimAutocomplete {
    fn name(&self) -> &'static str {
        "nominatim"
    }

    async fn search(&self, query: &str, limit: usize) -> Result<Vec<PlaceResult>, GeocodeError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let url = format!(
            "{}/search?q={}&format=json&limit={}&countrycodes=id",
            self.base_url,
            urlencoding::encode(query),
            limit
        );
        tracing::debug!(%url, "place search");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "place search failed");
            return Err(GeocodeError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        let places: Vec<NominatimPlace> =
            serde_json::from_slice(&body).map_err(|err| GeocodeError::Decode(err.to_string()))?;

        Ok(places
            .into_iter()
            .take(limit)
            .map(NominatimPlace::into_place)
            .collect())
    }
}
