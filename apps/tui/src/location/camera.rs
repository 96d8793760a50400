use crate::domain::{GeoBounds, GeoPoint, DEFAULT_CENTER};
use ratatui::layout::Rect;

pub const MIN_ZOOM: u8 = 1;
pub const MAX_ZOOM: u8 = 20;

// A braille cell covers 8x16 of the 256px tiles the zoom levels are defined
// against, so one column spans 360 * 8 / 256 degrees at zoom 0.
const LON_DEGREES_PER_COLUMN_AT_ZOOM_0: f64 = 11.25;
const LAT_DEGREES_PER_ROW_AT_ZOOM_0: f64 = 22.5;

/// Size of the map drawing area in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapExtent {
    pub cols: u16,
    pub rows: u16,
}

impl Default for MapExtent {
    fn default() -> Self {
        Self { cols: 80, rows: 20 }
    }
}

impl From<Rect> for MapExtent {
    fn from(area: Rect) -> Self {
        Self {
            cols: area.width,
            rows: area.height,
        }
    }
}

/// Where the map is looking. Moving the camera never touches the selected
/// point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapCamera {
    center: GeoPoint,
    zoom: u8,
}

impl MapCamera {
    pub fn new(center: GeoPoint, zoom: u8) -> Self {
        Self {
            center,
            zoom: zoom.clamp(MIN_ZOOM, MAX_ZOOM),
        }
    }

    pub const fn center(&self) -> GeoPoint {
        self.center
    }

    pub const fn zoom(&self) -> u8 {
        self.zoom
    }

    /// Longitude covered by one column. Zoom levels past `MAX_ZOOM` are
    /// treated as `MAX_ZOOM`.
    pub fn degrees_per_column(zoom: u8) -> f64 {
        LON_DEGREES_PER_COLUMN_AT_ZOOM_0 / Self::scale(zoom)
    }

    pub fn degrees_per_row(zoom: u8) -> f64 {
        LAT_DEGREES_PER_ROW_AT_ZOOM_0 / Self::scale(zoom)
    }

    fn scale(zoom: u8) -> f64 {
        f64::from(1_u32 << zoom.min(MAX_ZOOM))
    }

    /// Visible rectangle for a drawing area of the given size. The result is
    /// not clipped to valid coordinates.
    pub fn bounds(&self, extent: MapExtent) -> GeoBounds {
        let half_lon = f64::from(extent.cols) * Self::degrees_per_column(self.zoom) / 2.0;
        let half_lat = f64::from(extent.rows) * Self::degrees_per_row(self.zoom) / 2.0;
        GeoBounds {
            south: self.center.latitude() - half_lat,
            west: self.center.longitude() - half_lon,
            north: self.center.latitude() + half_lat,
            east: self.center.longitude() + half_lon,
        }
    }

    pub fn center_on(&mut self, center: GeoPoint, zoom: u8) {
        self.center = center;
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Centers on `viewport` at the deepest zoom that still shows all of it.
    pub fn fit_bounds(&mut self, viewport: GeoBounds, extent: MapExtent) {
        let cols = f64::from(extent.cols.max(1));
        let rows = f64::from(extent.rows.max(1));

        let zoom = (MIN_ZOOM..=MAX_ZOOM)
            .rev()
            .find(|&zoom| {
                cols * Self::degrees_per_column(zoom) >= viewport.lon_span()
                    && rows * Self::degrees_per_row(zoom) >= viewport.lat_span()
            })
            .unwrap_or(MIN_ZOOM);

        if let Ok(center) = viewport.center() {
            self.center = center;
        }
        self.zoom = zoom;
    }

    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom + 1).min(MAX_ZOOM);
    }

    pub fn zoom_out(&mut self) {
        self.zoom = self.zoom.saturating_sub(1).max(MIN_ZOOM);
    }

    /// Shifts the camera by whole cells; positive `rows` moves south.
    pub fn pan(&mut self, cols: i32, rows: i32) {
        let lat = (-f64::from(rows))
            .mul_add(Self::degrees_per_row(self.zoom), self.center.latitude())
            .clamp(-90.0, 90.0);
        let lon = f64::from(cols)
            .mul_add(Self::degrees_per_column(self.zoom), self.center.longitude())
            .clamp(-180.0, 180.0);

        if let Ok(center) = GeoPoint::new(lat, lon) {
            self.center = center;
        }
    }
}

impl Default for MapCamera {
    fn default() -> Self {
        Self::new(DEFAULT_CENTER, crate::domain::REPORT_MAP_ZOOM)
    }
}
