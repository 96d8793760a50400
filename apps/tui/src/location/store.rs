use crate::domain::{GeoPoint, DEFAULT_CENTER};

/// Single source of truth for the currently selected point.
///
/// Writes go through [`crate::location::reconcile`] so the report form is
/// updated in the same step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateStore {
    point: GeoPoint,
}

impl CoordinateStore {
    pub const fn new() -> Self {
        Self {
            point: DEFAULT_CENTER,
        }
    }

    pub const fn current_point(&self) -> GeoPoint {
        self.point
    }

    pub(crate) fn set_point(&mut self, point: GeoPoint) {
        self.point = point;
    }

    pub(crate) fn reset(&mut self) {
        self.point = DEFAULT_CENTER;
    }
}

impl Default for CoordinateStore {
    fn default() -> Self {
        Self::new()
    }
}
