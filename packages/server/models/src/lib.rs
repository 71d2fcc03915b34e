#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! API response types for the crash map server.
//!
//! These types are serialized to JSON for the REST API. Their snake_case
//! field names are the wire contract the map frontend reads directly, so
//! they stay separate from the dataset crate's internal representation.

use crash_map_crash_models::CrashType;
use crash_map_dataset_models::CrashRecord;
use serde::{Deserialize, Serialize};

/// A normalized crash record as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiCrashRecord {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
    /// Crash year exactly as recorded, empty when the report had none.
    pub year: String,
    /// Full month name, or `"Unknown"`.
    pub month: String,
    /// `"pedestrian"` or `"vehicle"`.
    pub crash_type: CrashType,
    /// Severity numeric value (1-5).
    pub severity: u8,
    /// Number of reported injuries.
    pub injuries: u32,
    /// Number of reported fatalities.
    pub fatalities: u32,
    /// Intersection layout, or `"Unknown"`.
    pub intersection_type: String,
    /// Pedestrian action, or `"Unknown"`.
    pub pedestrian_action: String,
    /// Traffic control at the scene, or `"Unknown"`.
    pub traffic_control: String,
    /// Lighting period, or `"Unknown"`.
    pub day_night: String,
    /// Whether a motorcycle was involved.
    pub motorcycle_involved: bool,
    /// Whether a bicycle was involved.
    pub bicycle_involved: bool,
}

impl From<CrashRecord> for ApiCrashRecord {
    fn from(record: CrashRecord) -> Self {
        Self {
            latitude: record.latitude,
            longitude: record.longitude,
            year: record.year,
            month: record.month,
            crash_type: record.crash_type,
            severity: record.severity.value(),
            injuries: record.injuries,
            fatalities: record.fatalities,
            intersection_type: record.intersection_type,
            pedestrian_action: record.pedestrian_action,
            traffic_control: record.traffic_control,
            day_night: record.day_night,
            motorcycle_involved: record.motorcycle_involved,
            bicycle_involved: record.bicycle_involved,
        }
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct ApiHealth {
    /// Whether the service is healthy.
    pub healthy: bool,
    /// Service version.
    pub version: String,
}
