use async_trait::async_trait;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

use crate::api::places::{GeocodeError, PlaceAutocomplete};
use crate::domain::{GeoBounds, GeoPoint};
use crate::location::{PlaceGeometry, PlaceResult};

struct Entry {
    name: &'static str,
    region: &'static str,
    latitude: f64,
    longitude: f64,
    /// Half extent in degrees when the place is an area, not a point.
    radius: Option<f64>,
}

const fn entry(
    name: &'static str,
    region: &'static str,
    latitude: f64,
    longitude: f64,
    radius: Option<f64>,
) -> Entry {
    Entry {
        name,
        region,
        latitude,
        longitude,
        radius,
    }
}

const PLACES: &[Entry] = &[
    entry("Pulau Lombok", "Nusa Tenggara Barat", -8.65, 116.32, Some(0.45)),
    entry("Pulau Sumbawa", "Nusa Tenggara Barat", -8.65, 117.55, Some(1.0)),
    entry("Mataram", "Kota Mataram", -8.583_333, 116.116_667, Some(0.05)),
    entry("Ampenan", "Kota Mataram", -8.570, 116.075, None),
    entry("Cakranegara", "Kota Mataram", -8.593, 116.137, None),
    entry("Gerung", "Lombok Barat", -8.681, 116.119, None),
    entry("Senggigi", "Lombok Barat", -8.488, 116.042, None),
    entry("Sekotong", "Lombok Barat", -8.770, 115.980, Some(0.12)),
    entry("Tanjung", "Lombok Utara", -8.351, 116.155, None),
    entry("Gili Trawangan", "Lombok Utara", -8.350, 116.038, Some(0.015)),
    entry("Bayan", "Lombok Utara", -8.265, 116.420, None),
    entry("Praya", "Lombok Tengah", -8.706, 116.270, None),
    entry("Kuta Mandalika", "Lombok Tengah", -8.893, 116.283, Some(0.03)),
    entry("Bandara Internasional Lombok", "Lombok Tengah", -8.757, 116.276, None),
    entry("Selong", "Lombok Timur", -8.649, 116.536, None),
    entry("Labuhan Lombok", "Lombok Timur", -8.501, 116.677, None),
    entry("Sembalun", "Lombok Timur", -8.372, 116.525, Some(0.06)),
    entry("Jerowaru", "Lombok Timur", -8.840, 116.493, Some(0.08)),
    entry("Sumbawa Besar", "Sumbawa", -8.493, 117.420, None),
    entry("Taliwang", "Sumbawa Barat", -8.741, 116.855, None),
    entry("Dompu", "Dompu", -8.537, 118.463, None),
    entry("Kota Bima", "Kota Bima", -8.460, 118.727, Some(0.06)),
];

impl Entry {
    fn to_place(&self) -> Option<PlaceResult> {
        let location = GeoPoint::new(self.latitude, self.longitude).ok()?;
        let viewport = match self.radius {
            Some(radius) => Some(GeoBounds::from_corners(
                GeoPoint::new(self.latitude - radius, self.longitude - radius).ok()?,
                GeoPoint::new(self.latitude + radius, self.longitude + radius).ok()?,
            )),
            None => None,
        };
        Some(PlaceResult {
            name: self.name.to_string(),
            formatted_address: format!("{}, {}", self.name, self.region),
            geometry: Some(PlaceGeometry {
                location: Some(location),
                viewport,
            }),
        })
    }
}

/// Offline place search over a built-in list of West Nusa Tenggara places.
#[derive(Default)]
pub struct GazetteerAutocomplete {
    matcher: SkimMatcherV2,
}

impl GazetteerAutocomplete {
    pub fn new() -> Self {
        Self::default()
    }

    fn rank(&self, query: &str) -> Vec<&'static Entry> {
        let mut scored = PLACES
            .iter()
            .filter_map(|entry| {
                let haystack = format!("{} {}", entry.name, entry.region);
                self.matcher
                    .fuzzy_match(&haystack, query)
                    .map(|score| (score, entry))
            })
            .collect::<Vec<_>>();
        scored.sort_by(|a, b| b.0.cmp(&a.0));
        scored.into_iter().map(|(_, entry)| entry).collect()
    }
}

#[async_trait]
impl PlaceAutocomplete for GazetteerAutocomplete {
    fn name(&self) -> &'static str {
        "gazetteer"
    }

    async fn search(&self, query: &str, limit: usize) -> Result<Vec<PlaceResult>, GeocodeError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        Ok(self
            .rank(query)
            .into_iter()
            .filter_map(Entry::to_place)
            .take(limit)
            .collect())
    }
}
