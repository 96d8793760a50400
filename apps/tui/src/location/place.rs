use crate::domain::{GeoBounds, GeoPoint};

/// Geometry attached to an autocomplete result. Providers may return a
/// location, a viewport, both, or neither.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaceGeometry {
    pub location: Option<GeoPoint>,
    pub viewport: Option<GeoBounds>,
}

/// A place picked from the address autocomplete.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceResult {
    pub name: String,
    pub formatted_address: String,
    pub geometry: Option<PlaceGeometry>,
}

impl PlaceResult {
    /// Label shown in suggestion lists.
    pub fn display_label(&self) -> &str {
        if self.formatted_address.is_empty() {
            &self.name
        } else {
            &self.formatted_address
        }
    }
}
