use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Map center used on first load and after a form reset (Mataram, Lombok).
pub const DEFAULT_CENTER: GeoPoint = GeoPoint {
    latitude: -8.583_333,
    longitude: 116.116_667,
};

/// Initial zoom of the location picker on the report form.
pub const REPORT_MAP_ZOOM: u8 = 13;

/// Initial zoom of the tower browse map.
pub const BROWSE_MAP_ZOOM: u8 = 11;

/// Zoom used when a place result has a location but no viewport.
pub const PLACE_FOCUS_ZOOM: u8 = 15;

/// Operators offered as filter checkboxes on the browse map.
pub const KNOWN_OPERATORS: [&str; 3] = ["Telkomsel", "XL", "Indosat"];

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeoError {
    #[error("latitude {0} is outside [-90, 90]")]
    Latitude(f64),
    #[error("longitude {0} is outside [-180, 180]")]
    Longitude(f64),
}

/// A WGS84 coordinate. Construction always checks the range, so every
/// `GeoPoint` that exists is a valid one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoPoint {
    latitude: f64,
    longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, GeoError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(GeoError::Latitude(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(GeoError::Longitude(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub const fn latitude(self) -> f64 {
        self.latitude
    }

    pub const fn longitude(self) -> f64 {
        self.longitude
    }
}

impl Default for GeoPoint {
    fn default() -> Self {
        DEFAULT_CENTER
    }
}

impl<'de> Deserialize<'de> for GeoPoint {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            #[serde(alias = "lat")]
            latitude: f64,
            #[serde(alias = "lng", alias = "lon")]
            longitude: f64,
        }

        let raw = Raw::deserialize(deserializer)?;
        Self::new(raw.latitude, raw.longitude).map_err(serde::de::Error::custom)
    }
}

/// Geographic rectangle, used for place viewports and the visible map area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoBounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl GeoBounds {
    /// Builds bounds from two corners in any order.
    pub fn from_corners(a: GeoPoint, b: GeoPoint) -> Self {
        Self {
            south: a.latitude.min(b.latitude),
            west: a.longitude.min(b.longitude),
            north: a.latitude.max(b.latitude),
            east: a.longitude.max(b.longitude),
        }
    }

    pub fn lat_span(&self) -> f64 {
        self.north - self.south
    }

    pub fn lon_span(&self) -> f64 {
        self.east - self.west
    }

    pub fn center(&self) -> Result<GeoPoint, GeoError> {
        GeoPoint::new(
            (self.south + self.north) / 2.0,
            (self.west + self.east) / 2.0,
        )
    }

    pub fn contains(&self, point: GeoPoint) -> bool {
        (self.south..=self.north).contains(&point.latitude)
            && (self.west..=self.east).contains(&point.longitude)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TowerStatus {
    #[serde(rename = "Aktif")]
    Active,
    #[serde(rename = "Tidak Aktif")]
    Inactive,
}

impl TowerStatus {
    pub const ALL: [Self; 2] = [Self::Active, Self::Inactive];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "Aktif",
            Self::Inactive => "Tidak Aktif",
        }
    }

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Active),
            1 => Some(Self::Inactive),
            _ => None,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().replace(['-', '_'], " ").as_str() {
            "aktif" | "active" => Some(Self::Active),
            "tidak aktif" | "inactive" => Some(Self::Inactive),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        self.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geo_point_rejects_out_of_range() {
        assert_eq!(GeoPoint::new(91.0, 0.0), Err(GeoError::Latitude(91.0)));
        assert_eq!(
            GeoPoint::new(0.0, -180.5),
            Err(GeoError::Longitude(-180.5))
        );
        assert!(GeoPoint::new(-90.0, 180.0).is_ok());
    }

    #[test]
    fn geo_point_deserializes_short_keys() -> Result<(), Box<dyn std::error::Error>> {
        let point: GeoPoint = serde_json::from_str(r#"{"lat": -8.5, "lng": 116.1}"#)?;
        assert_eq!(point, GeoPoint::new(-8.5, 116.1)?);

        let bad = serde_json::from_str::<GeoPoint>(r#"{"lat": 120.0, "lng": 116.1}"#);
        assert!(bad.is_err());
        Ok(())
    }

    #[test]
    fn bounds_center_and_contains() -> Result<(), Box<dyn std::error::Error>> {
        let bounds = GeoBounds::from_corners(GeoPoint::new(-8.0, 117.0)?, GeoPoint::new(-9.0, 116.0)?);
        assert_eq!(bounds.south, -9.0);
        assert_eq!(bounds.east, 117.0);
        assert_eq!(bounds.center()?, GeoPoint::new(-8.5, 116.5)?);
        assert!(bounds.contains(DEFAULT_CENTER));
        assert!(!bounds.contains(GeoPoint::new(-7.0, 116.5)?));
        Ok(())
    }

    #[test]
    fn tower_status_parses_loose_spellings() {
        assert_eq!(TowerStatus::parse("Aktif"), Some(TowerStatus::Active));
        assert_eq!(TowerStatus::parse(" tidak-aktif "), Some(TowerStatus::Inactive));
        assert_eq!(TowerStatus::parse("rusak"), None);
        assert_eq!(TowerStatus::from_index(1), Some(TowerStatus::Inactive));
    }

    #[test]
    fn tower_status_uses_wire_labels() -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!(serde_json::to_string(&TowerStatus::Inactive)?, r#""Tidak Aktif""#);
        let status: TowerStatus = serde_json::from_str(r#""Aktif""#)?;
        assert_eq!(status, TowerStatus::Active);
        Ok(())
    }
}
