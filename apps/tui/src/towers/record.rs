use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::domain::{GeoError, GeoPoint, TowerStatus};

/// Tower ids arrive as numbers from some deployments and strings from others.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(untagged)]
pub enum TowerId {
    Number(i64),
    Text(String),
}

impl fmt::Display for TowerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(id) => write!(f, "{id}"),
            Self::Text(id) => f.write_str(id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TowerRecord {
    pub id: TowerId,
    pub operator: String,
    pub status: TowerStatus,
    pub position: GeoPoint,
    /// Every key not consumed above, listed in the tower detail popup.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TowerDecodeError {
    #[error("record is not a JSON object")]
    NotAnObject,
    #[error("missing or invalid field `{0}`")]
    Field(&'static str),
    #[error("unknown status `{0}`")]
    Status(String),
    #[error(transparent)]
    Position(#[from] GeoError),
}

const ID_KEYS: [&str; 1] = ["id"];
const LAT_KEYS: [&str; 2] = ["latitude", "lat"];
const LNG_KEYS: [&str; 3] = ["longitude", "lng", "lon"];

impl TowerRecord {
    pub fn from_json(value: &Value) -> Result<Self, TowerDecodeError> {
        let object = value.as_object().ok_or(TowerDecodeError::NotAnObject)?;

        let id = match first_of(object, &ID_KEYS) {
            Some(Value::Number(number)) => number
                .as_i64()
                .map(TowerId::Number)
                .ok_or(TowerDecodeError::Field("id"))?,
            Some(Value::String(text)) if !text.trim().is_empty() => TowerId::Text(text.clone()),
            _ => return Err(TowerDecodeError::Field("id")),
        };

        let operator = match object.get("operator") {
            Some(Value::String(operator)) => operator.trim().to_string(),
            _ => return Err(TowerDecodeError::Field("operator")),
        };

        let status = match object.get("status") {
            Some(Value::String(raw)) => {
                TowerStatus::parse(raw).ok_or_else(|| TowerDecodeError::Status(raw.clone()))?
            }
            _ => return Err(TowerDecodeError::Field("status")),
        };

        let latitude = first_of(object, &LAT_KEYS)
            .and_then(coordinate)
            .ok_or(TowerDecodeError::Field("latitude"))?;
        let longitude = first_of(object, &LNG_KEYS)
            .and_then(coordinate)
            .ok_or(TowerDecodeError::Field("longitude"))?;
        let position = GeoPoint::new(latitude, longitude)?;

        let consumed = |key: &str| {
            key == "operator"
                || key == "status"
                || ID_KEYS.contains(&key)
                || LAT_KEYS.contains(&key)
                || LNG_KEYS.contains(&key)
        };
        let metadata = object
            .iter()
            .filter(|(key, _)| !consumed(key.as_str()))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        Ok(Self {
            id,
            operator,
            status,
            position,
            metadata,
        })
    }
}

fn first_of<'a>(object: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().find_map(|key| object.get(*key))
}

fn coordinate(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

/// Decodes a tower listing. Records that cannot be placed on the map are
/// logged and skipped; only a non-array body is an error.
pub fn decode_towers(body: &Value) -> Option<Vec<TowerRecord>> {
    let items = body.as_array()?;
    let towers = items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| match TowerRecord::from_json(item) {
            Ok(tower) => Some(tower),
            Err(err) => {
                tracing::warn!(index, error = %err, "skipping tower record");
                None
            }
        })
        .collect();
    Some(towers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_both_coordinate_spellings() -> Result<(), Box<dyn std::error::Error>> {
        let body = json!([
            {"id": 1, "operator": "XL", "status": "Aktif", "latitude": -8.58, "longitude": 116.1},
            {"id": "T-2", "operator": "Telkomsel", "status": "Tidak Aktif", "lat": "-8.7", "lng": "116.3"}
        ]);

        let towers = decode_towers(&body).ok_or("expected an array")?;
        assert_eq!(towers.len(), 2);
        assert_eq!(towers[0].id, TowerId::Number(1));
        assert_eq!(towers[1].id.to_string(), "T-2");
        assert_eq!(towers[1].status, TowerStatus::Inactive);
        assert_eq!(towers[1].position, GeoPoint::new(-8.7, 116.3)?);
        Ok(())
    }

    #[test]
    fn keeps_unknown_keys_as_metadata() -> Result<(), TowerDecodeError> {
        let tower = TowerRecord::from_json(&json!({
            "id": 7,
            "operator": "Indosat",
            "status": "Aktif",
            "lat": -8.5,
            "lng": 116.0,
            "nama": "BTS Praya",
            "tinggi": 42
        }))?;

        assert_eq!(tower.metadata.len(), 2);
        assert_eq!(tower.metadata["nama"], "BTS Praya");
        assert!(!tower.metadata.contains_key("lat"));
        Ok(())
    }

    #[test]
    fn skips_invalid_records() -> Result<(), Box<dyn std::error::Error>> {
        let body = json!([
            {"id": 1, "operator": "XL", "status": "Aktif", "lat": 95.0, "lng": 116.1},
            {"id": 2, "operator": "XL", "status": "Rusak", "lat": -8.0, "lng": 116.1},
            {"id": 3, "operator": "XL", "status": "Aktif"},
            "not a tower",
            {"id": 4, "operator": "XL", "status": "Aktif", "lat": -8.0, "lng": 116.1}
        ]);

        let towers = decode_towers(&body).ok_or("expected an array")?;
        assert_eq!(towers.len(), 1);
        assert_eq!(towers[0].id, TowerId::Number(4));
        Ok(())
    }

    #[test]
    fn empty_array_is_valid_but_object_is_not() {
        assert_eq!(decode_towers(&json!([])), Some(Vec::new()));
        assert_eq!(decode_towers(&json!({"towers": []})), None);
    }
}
