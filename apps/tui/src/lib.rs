// Library half of the blank spot client; the binary adds the terminal UI.
pub mod api;
pub mod config;
pub mod domain;
pub mod location;
pub mod report;
pub mod towers;

pub use domain::{GeoBounds, GeoError, GeoPoint, TowerStatus};
