//! Document shapes written to the riders collection.
//!
//! Field names are fixed by the consumers of the collection, so every struct
//! renames to the stored camelCase form.

use mongodb::bson::{DateTime, oid::ObjectId};
use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    /// Valid latitude range in degrees
    pub const LAT_RANGE: std::ops::RangeInclusive<f64> = -90.0..=90.0;
    /// Valid longitude range in degrees
    pub const LNG_RANGE: std::ops::RangeInclusive<f64> = -180.0..=180.0;

    /// Returns true when both components fall inside their valid ranges.
    pub fn is_valid(&self) -> bool {
        Self::LAT_RANGE.contains(&self.lat) && Self::LNG_RANGE.contains(&self.lng)
    }
}

/// Where a rider currently is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub current: Coordinates,
}

/// A single past ride embedded in a rider document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ride {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub date: DateTime,
    #[serde(rename = "driverID", default, skip_serializing_if = "Option::is_none")]
    pub driver_id: Option<ObjectId>,
    pub from: Coordinates,
    pub to: Coordinates,
}

/// A rider document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rider {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    pub email: String,
    #[serde(rename = "avatarURL")]
    pub avatar_url: String,
    pub password: String,
    pub rides: Vec<Ride>,
    pub location: Location,
    pub ride_notes: String,
}
