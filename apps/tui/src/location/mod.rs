//! Selected-location state: the coordinate store, the map camera, and the
//! reconciler that folds map clicks, marker drags and place selections into
//! them.

pub mod camera;
pub mod place;
pub mod projection;
pub mod reconciler;
pub mod store;

pub use camera::{MapCamera, MapExtent};
pub use place::{PlaceGeometry, PlaceResult};
pub use projection::MapProjection;
pub use reconciler::{reconcile, LocationEvent, PositionSink, Reconciliation};
pub use store::CoordinateStore;
