use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::GeoPoint;

/// A reported area with no signal, shown on the blank-spot layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlankspotRecord {
    #[serde(flatten)]
    pub position: GeoPoint,
    #[serde(default)]
    pub lokasi: Option<String>,
    #[serde(default)]
    pub operator: Option<String>,
}

/// Reads the blank-spot layer. A missing or malformed file yields an empty
/// layer; the map stays usable either way.
pub async fn load_blankspots(path: Option<&Path>) -> Vec<BlankspotRecord> {
    let Some(path) = path else {
        return Vec::new();
    };

    let contents = match tokio::fs::read_to_string(path).await {
        Ok(contents) => contents,
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "blank spot file unreadable");
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<BlankspotRecord>>(&contents) {
        Ok(records) => {
            tracing::info!(path = %path.display(), count = records.len(), "loaded blank spots");
            records
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "blank spot file malformed");
            Vec::new()
        }
    }
}
