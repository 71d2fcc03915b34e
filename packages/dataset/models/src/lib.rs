#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! The canonical normalized crash record format.
//!
//! The CSV normalizer produces [`CrashRecord`] values that conform to the
//! shared vocabulary in [`crash_map_crash_models`]. Every record carries a
//! usable coordinate pair; rows without one are dropped during loading and
//! never reach this type.

use crash_map_crash_models::{CrashSeverity, CrashType};
use serde::{Deserialize, Serialize};

/// A crash report normalized to the canonical schema.
///
/// Descriptive fields that the report left blank hold the literal string
/// `"Unknown"` rather than an `Option`, so every record presents the full
/// set of filterable values to the frontend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrashRecord {
    /// Latitude (WGS84) in decimal degrees.
    pub latitude: f64,
    /// Longitude (WGS84) in decimal degrees.
    pub longitude: f64,
    /// Crash year exactly as recorded, empty when the report had none.
    pub year: String,
    /// Full month name (e.g., "January"), or `"Unknown"`.
    pub month: String,
    /// Whether a pedestrian was involved.
    pub crash_type: CrashType,
    /// Injury severity derived from the pedestrian injury outcome.
    pub severity: CrashSeverity,
    /// Number of reported injuries.
    pub injuries: u32,
    /// Number of reported fatalities.
    pub fatalities: u32,
    /// Intersection layout (e.g., "Four-Way"), or `"Unknown"`.
    pub intersection_type: String,
    /// What the pedestrian was doing (e.g., "Crossing Roadway"), or
    /// `"Unknown"`.
    pub pedestrian_action: String,
    /// Traffic control at the scene (e.g., "Signal"), or `"Unknown"`.
    pub traffic_control: String,
    /// Lighting period ("Daytime" / "Nighttime"), or `"Unknown"`.
    pub day_night: String,
    /// Whether a motorcycle was involved.
    pub motorcycle_involved: bool,
    /// Whether a bicycle was involved.
    pub bicycle_involved: bool,
}
