use crate::domain::{GeoPoint, PLACE_FOCUS_ZOOM};
use crate::location::camera::{MapCamera, MapExtent};
use crate::location::place::PlaceResult;
use crate::location::store::CoordinateStore;

/// Every way the selected point can change.
#[derive(Debug, Clone, PartialEq)]
pub enum LocationEvent {
    PlaceSelected(PlaceResult),
    MapClicked(GeoPoint),
    MarkerDragged(GeoPoint),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reconciliation {
    /// The store now holds this point.
    Moved(GeoPoint),
    /// A place with only a viewport: the camera moved, the point did not.
    CameraOnly,
    /// A place without geometry.
    Ignored,
}

/// Receives the selected point whenever the store changes.
pub trait PositionSink {
    fn sync_position(&mut self, point: GeoPoint);
}

impl PositionSink for () {
    fn sync_position(&mut self, _point: GeoPoint) {}
}

/// Applies one location event. The store and the sink are written together,
/// so no caller can observe one without the other.
pub fn reconcile<S: PositionSink + ?Sized>(
    store: &mut CoordinateStore,
    camera: &mut MapCamera,
    sink: &mut S,
    event: LocationEvent,
    extent: MapExtent,
) -> Reconciliation {
    let point = match event {
        LocationEvent::MapClicked(point) | LocationEvent::MarkerDragged(point) => point,
        LocationEvent::PlaceSelected(place) => {
            let Some(geometry) = place.geometry else {
                tracing::debug!(place = %place.name, "ignoring place without geometry");
                return Reconciliation::Ignored;
            };

            if let Some(viewport) = geometry.viewport {
                camera.fit_bounds(viewport, extent);
            } else if let Some(location) = geometry.location {
                camera.center_on(location, PLACE_FOCUS_ZOOM);
            }

            match (geometry.location, geometry.viewport) {
                (Some(location), _) => location,
                (None, Some(_)) => return Reconciliation::CameraOnly,
                (None, None) => {
                    tracing::debug!(place = %place.name, "ignoring place with empty geometry");
                    return Reconciliation::Ignored;
                }
            }
        }
    };

    store.set_point(point);
    sink.sync_position(point);
    tracing::debug!(
        latitude = point.latitude(),
        longitude = point.longitude(),
        "selected point updated"
    );
    Reconciliation::Moved(point)
}
