#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Crash classification types and severity definitions.
//!
//! This crate defines the canonical crash vocabulary used across the
//! crash-map system: the 1-5 injury severity scale and the
//! pedestrian/vehicle crash type. The CSV normalizer maps raw report
//! fields into these types and the server flattens them for the frontend.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Severity level for a crash, from 1 (no apparent injury) to 5 (fatal).
///
/// Derived from the report's pedestrian injury outcome label via an exact
/// lookup ([`Self::from_injury_type`]). Reports with a missing or
/// unrecognized label land on [`Self::Unknown`] in the middle of the scale.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum CrashSeverity {
    /// Level 1: reported as "No Apparent Injury"
    NoApparentInjury = 1,
    /// Level 2: reported as "Minor/Possible Injury"
    MinorInjury = 2,
    /// Level 3: injury outcome missing or not recognized
    Unknown = 3,
    /// Level 4: reported as "Serious Injury"
    SeriousInjury = 4,
    /// Level 5: reported as "Dead"
    Fatal = 5,
}

impl CrashSeverity {
    /// Returns the numeric value of this severity level.
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Creates a severity level from a numeric value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not in the range 1-5.
    pub const fn from_value(value: u8) -> Result<Self, InvalidSeverityError> {
        match value {
            1 => Ok(Self::NoApparentInjury),
            2 => Ok(Self::MinorInjury),
            3 => Ok(Self::Unknown),
            4 => Ok(Self::SeriousInjury),
            5 => Ok(Self::Fatal),
            _ => Err(InvalidSeverityError { value }),
        }
    }

    /// Maps a report's injury outcome label to a severity level.
    ///
    /// The lookup is exact and case-sensitive; any label it does not
    /// recognize maps to [`Self::Unknown`].
    #[must_use]
    pub fn from_injury_type(label: &str) -> Self {
        match label {
            "No Apparent Injury" => Self::NoApparentInjury,
            "Minor/Possible Injury" => Self::MinorInjury,
            "Serious Injury" => Self::SeriousInjury,
            "Dead" => Self::Fatal,
            _ => Self::Unknown,
        }
    }
}

/// Error returned when attempting to create a [`CrashSeverity`] from an
/// invalid numeric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidSeverityError {
    /// The invalid severity value that was provided.
    pub value: u8,
}

impl std::fmt::Display for InvalidSeverityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid severity value {}: expected 1-5", self.value)
    }
}

impl std::error::Error for InvalidSeverityError {}

/// Whether a crash involved a pedestrian or only vehicles.
///
/// Serialized in lowercase (`"pedestrian"` / `"vehicle"`), which is the
/// form the frontend filters on.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum CrashType {
    /// A pedestrian was involved in the crash
    Pedestrian,
    /// Vehicle-only crash with no recorded pedestrian involvement
    Vehicle,
}

impl CrashType {
    /// Classifies a crash from the report's pedestrian involvement flag.
    ///
    /// Only the exact string `"Yes"` marks a pedestrian crash; anything
    /// else, including a missing flag, is a vehicle crash.
    #[must_use]
    pub fn from_pedestrian_flag(flag: Option<&str>) -> Self {
        if flag == Some("Yes") {
            Self::Pedestrian
        } else {
            Self::Vehicle
        }
    }
}
