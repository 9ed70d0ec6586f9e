use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const COMPLETED: &str = "COMPLETED";

/// Upstream ids arrive as JSON numbers or strings; a path parameter must
/// match either form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TripId {
    Number(i64),
    Text(String),
}

impl TripId {
    pub fn matches(&self, raw: &str) -> bool {
        match self {
            TripId::Number(n) => raw.parse::<i64>() == Ok(*n),
            TripId::Text(s) => s == raw,
        }
    }
}

/// A trip record as served by the upstream provider. Records are read-only:
/// the service only ever selects subsets of them. Fields beyond the ones we
/// filter on are kept in `extra` so responses echo upstream objects intact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trip {
    pub id: TripId,
    pub pickup_location: String,
    pub dropoff_location: String,
    #[serde(rename = "type")]
    pub trip_type: String,
    pub driver_name: String,
    pub car_make: String,
    pub car_model: String,
    pub car_number: String,
    pub status: String,
    pub distance: f64,
    pub pickup_date: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Trip {
    pub fn is_completed(&self) -> bool {
        self.status == COMPLETED
    }

    /// The fields a keyword search runs over.
    pub fn searchable_fields(&self) -> [&str; 7] {
        [
            &self.pickup_location,
            &self.dropoff_location,
            &self.trip_type,
            &self.driver_name,
            &self.car_make,
            &self.car_model,
            &self.car_number,
        ]
    }

    pub fn pickup_datetime(&self) -> Option<NaiveDateTime> {
        parse_pickup_datetime(&self.pickup_date)
    }
}

/// Lenient date parsing shared by trip records and the `pickupDate` query
/// parameter. Accepts RFC 3339, `YYYY-MM-DD HH:MM:SS` (the upstream's
/// format) and a bare `YYYY-MM-DD`.
pub fn parse_pickup_datetime(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(dt);
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }
    None
}
