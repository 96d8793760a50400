use crate::domain::{GeoBounds, GeoPoint};
use crate::location::camera::{MapCamera, MapExtent};
use ratatui::layout::{Position, Rect};

/// Converts between terminal cells of the map drawing area and coordinates.
///
/// Uses the same linear mapping as the ratatui canvas the map is drawn on,
/// so a point drawn at a coordinate sits in the cell `cell_of` reports.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapProjection {
    area: Rect,
    bounds: GeoBounds,
}

impl MapProjection {
    pub fn new(camera: &MapCamera, area: Rect) -> Self {
        Self {
            area,
            bounds: camera.bounds(MapExtent::from(area)),
        }
    }

    pub const fn area(&self) -> Rect {
        self.area
    }

    pub const fn bounds(&self) -> GeoBounds {
        self.bounds
    }

    /// Coordinate under the center of a cell, or `None` outside the area or
    /// off the globe.
    pub fn point_at(&self, column: u16, row: u16) -> Option<GeoPoint> {
        if self.area.is_empty() || !self.area.contains(Position::new(column, row)) {
            return None;
        }

        let x = f64::from(column - self.area.x) + 0.5;
        let y = f64::from(row - self.area.y) + 0.5;
        let lon = (x / f64::from(self.area.width)).mul_add(self.bounds.lon_span(), self.bounds.west);
        let lat = (-y / f64::from(self.area.height)).mul_add(self.bounds.lat_span(), self.bounds.north);

        GeoPoint::new(lat, lon).ok()
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn cell_of(&self, point: GeoPoint) -> Option<Position> {
        if self.area.is_empty() || !self.bounds.contains(point) {
            return None;
        }

        let x = (point.longitude() - self.bounds.west) / self.bounds.lon_span()
            * f64::from(self.area.width);
        let y = (self.bounds.north - point.latitude()) / self.bounds.lat_span()
            * f64::from(self.area.height);

        let column = (x.floor() as u16).min(self.area.width - 1);
        let row = (y.floor() as u16).min(self.area.height - 1);
        Some(Position::new(self.area.x + column, self.area.y + row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DEFAULT_CENTER;

    fn projection() -> MapProjection {
        MapProjection::new(
            &MapCamera::new(DEFAULT_CENTER, 13),
            Rect::new(1, 1, 40, 20),
        )
    }

    #[test]
    fn camera_center_lands_in_middle_cell() {
        assert_eq!(projection().cell_of(DEFAULT_CENTER), Some(Position::new(21, 11)));
    }

    #[test]
    fn point_at_and_cell_of_agree() {
        let projection = projection();
        for (column, row) in [(1, 1), (21, 11), (40, 20), (7, 15)] {
            let point = projection.point_at(column, row);
            assert!(point.is_some(), "cell ({column}, {row}) should map to a point");
            let cell = point.and_then(|point| projection.cell_of(point));
            assert_eq!(cell, Some(Position::new(column, row)));
        }
    }

    #[test]
    fn cells_outside_area_have_no_point() {
        let projection = projection();
        assert_eq!(projection.point_at(0, 5), None);
        assert_eq!(projection.point_at(41, 5), None);
        assert_eq!(projection.point_at(5, 21), None);
    }

    #[test]
    fn points_off_the_globe_are_dropped() {
        let world = MapProjection::new(
            &MapCamera::new(DEFAULT_CENTER, 1),
            Rect::new(0, 0, 200, 60),
        );
        assert_eq!(world.point_at(0, 0), None);
        assert!(world.point_at(100, 30).is_some());
    }
}
