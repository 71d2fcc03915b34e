//! Raw CSV row normalization.
//!
//! Maps one raw report row into the canonical [`CrashRecord`] schema:
//! numeric coercion for coordinates and casualty counts, severity and
//! crash-type classification, and explicit defaults for the descriptive
//! fields the report left blank.

use crash_map_crash_models::{CrashSeverity, CrashType};
use crash_map_dataset_models::CrashRecord;
use serde::Deserialize;

/// One raw row of the crash CSV, exactly as parsed.
///
/// Every column is optional: the reader yields `None` for empty cells and
/// rows may be shorter than the header when the export truncated them.
/// Cell text arrives already trimmed by the reader.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCrashRow {
    /// Crash latitude in decimal degrees.
    #[serde(default, rename = "Sum of Latitude")]
    pub latitude: Option<String>,
    /// Crash longitude in decimal degrees.
    #[serde(default, rename = "Sum of Longitude")]
    pub longitude: Option<String>,
    /// Calendar year of the crash.
    #[serde(default, rename = "Year")]
    pub year: Option<String>,
    /// Full month name of the crash.
    #[serde(default, rename = "MonthName")]
    pub month: Option<String>,
    /// `"Yes"` when a pedestrian was involved.
    #[serde(default, rename = "PedestrianInvolved")]
    pub pedestrian_involved: Option<String>,
    /// Injury outcome label for the pedestrian.
    #[serde(default, rename = "PedestrianInjuryType")]
    pub injury_type: Option<String>,
    /// Count of injured people.
    #[serde(default, rename = "Number_Of_Injuries")]
    pub injuries: Option<String>,
    /// Count of fatalities.
    #[serde(default, rename = "Number_Of_Fatalities")]
    pub fatalities: Option<String>,
    /// Intersection layout at the crash site.
    #[serde(default, rename = "IntersectionType")]
    pub intersection_type: Option<String>,
    /// What the pedestrian was doing.
    #[serde(default, rename = "PedestrianAction")]
    pub pedestrian_action: Option<String>,
    /// Traffic control present at the scene.
    #[serde(default, rename = "TrafficControlType")]
    pub traffic_control: Option<String>,
    /// Lighting period of the crash.
    #[serde(default, rename = "DayNight")]
    pub day_night: Option<String>,
    /// `"Yes"` when a motorcycle was involved.
    #[serde(default, rename = "MotorcycleInvolved")]
    pub motorcycle_involved: Option<String>,
    /// `"Yes"` when a bicycle was involved.
    #[serde(default, rename = "BicycleInvolved")]
    pub bicycle_involved: Option<String>,
}

/// A single cell that failed numeric coercion during normalization.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("column `{column}`: cannot parse {value:?} as {expected}")]
pub struct MalformedField {
    /// CSV column holding the bad value.
    pub column: &'static str,
    /// The offending cell text (empty when the cell was absent).
    pub value: String,
    /// What the cell was expected to parse as.
    pub expected: &'static str,
}

/// Returns the cell text when it is present and not a missing-value marker
/// (the empty string or the literal `Unknown`).
fn present(cell: Option<&str>) -> Option<&str> {
    match cell {
        Some(text) if !text.is_empty() && text != "Unknown" => Some(text),
        _ => None,
    }
}

/// Descriptive field defaulting: the cell text, or `"Unknown"` when the
/// cell holds a missing-value marker.
fn descriptive(cell: Option<&str>) -> String {
    present(cell).unwrap_or("Unknown").to_owned()
}

fn parse_f64(column: &'static str, cell: Option<&str>) -> Result<f64, MalformedField> {
    let text = cell.unwrap_or_default();
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(MalformedField {
            column,
            value: text.to_owned(),
            expected: "a finite decimal number",
        }),
    }
}

/// Casualty counts treat missing markers as zero; anything else must be a
/// whole number.
fn parse_count(column: &'static str, cell: Option<&str>) -> Result<u32, MalformedField> {
    match present(cell) {
        None => Ok(0),
        Some(text) => text.parse().map_err(|_| MalformedField {
            column,
            value: text.to_owned(),
            expected: "a non-negative integer",
        }),
    }
}

/// Parses the coordinate pair of a raw row. Returns `None` when either
/// cell is missing or does not parse to a finite value (`"NaN"` and
/// `"inf"` parse but cannot be plotted); the loader drops such rows
/// before normalization.
#[must_use]
pub fn parse_coordinates(row: &RawCrashRow) -> Option<(f64, f64)> {
    let latitude = present(row.latitude.as_deref())?.parse::<f64>().ok()?;
    let longitude = present(row.longitude.as_deref())?.parse::<f64>().ok()?;
    (latitude.is_finite() && longitude.is_finite()).then_some((latitude, longitude))
}

/// Normalizes one raw row into a [`CrashRecord`].
///
/// Pure row-to-record mapping: descriptive fields fall back to
/// `"Unknown"`, casualty counts to `0`, involvement flags to `false`, and
/// the year passes through verbatim. Classification is exact: only the
/// string `"Yes"` sets an involvement flag and only the four known injury
/// labels move severity off [`CrashSeverity::Unknown`].
///
/// # Errors
///
/// Returns [`MalformedField`] naming the offending column when a
/// coordinate or casualty count cell holds unparseable text.
pub fn normalize_record(row: &RawCrashRow) -> Result<CrashRecord, MalformedField> {
    let latitude = parse_f64("Sum of Latitude", row.latitude.as_deref())?;
    let longitude = parse_f64("Sum of Longitude", row.longitude.as_deref())?;

    let severity = present(row.injury_type.as_deref())
        .map_or(CrashSeverity::Unknown, CrashSeverity::from_injury_type);

    Ok(CrashRecord {
        latitude,
        longitude,
        year: row.year.clone().unwrap_or_default(),
        month: descriptive(row.month.as_deref()),
        crash_type: CrashType::from_pedestrian_flag(row.pedestrian_involved.as_deref()),
        severity,
        injuries: parse_count("Number_Of_Injuries", row.injuries.as_deref())?,
        fatalities: parse_count("Number_Of_Fatalities", row.fatalities.as_deref())?,
        intersection_type: descriptive(row.intersection_type.as_deref()),
        pedestrian_action: descriptive(row.pedestrian_action.as_deref()),
        traffic_control: descriptive(row.traffic_control.as_deref()),
        day_night: descriptive(row.day_night.as_deref()),
        motorcycle_involved: row.motorcycle_involved.as_deref() == Some("Yes"),
        bicycle_involved: row.bicycle_involved.as_deref() == Some("Yes"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn located_row(latitude: &str, longitude: &str) -> RawCrashRow {
        RawCrashRow {
            latitude: Some(latitude.to_owned()),
            longitude: Some(longitude.to_owned()),
            ..RawCrashRow::default()
        }
    }

    #[test]
    fn normalizes_fully_populated_row() {
        let row = RawCrashRow {
            latitude: Some("40.2338".to_owned()),
            longitude: Some("-111.6585".to_owned()),
            year: Some("2022".to_owned()),
            month: Some("March".to_owned()),
            pedestrian_involved: Some("Yes".to_owned()),
            injury_type: Some("Serious Injury".to_owned()),
            injuries: Some("2".to_owned()),
            fatalities: Some("0".to_owned()),
            intersection_type: Some("Four-Way".to_owned()),
            pedestrian_action: Some("Crossing Roadway".to_owned()),
            traffic_control: Some("Signal".to_owned()),
            day_night: Some("Nighttime".to_owned()),
            motorcycle_involved: Some("No".to_owned()),
            bicycle_involved: Some("Yes".to_owned()),
        };

        let record = normalize_record(&row).unwrap();
        assert!((record.latitude - 40.2338).abs() < f64::EPSILON);
        assert!((record.longitude - -111.6585).abs() < f64::EPSILON);
        assert_eq!(record.year, "2022");
        assert_eq!(record.month, "March");
        assert_eq!(record.crash_type, CrashType::Pedestrian);
        assert_eq!(record.severity, CrashSeverity::SeriousInjury);
        assert_eq!(record.injuries, 2);
        assert_eq!(record.fatalities, 0);
        assert_eq!(record.intersection_type, "Four-Way");
        assert_eq!(record.pedestrian_action, "Crossing Roadway");
        assert_eq!(record.traffic_control, "Signal");
        assert_eq!(record.day_night, "Nighttime");
        assert!(!record.motorcycle_involved);
        assert!(record.bicycle_involved);
    }

    #[test]
    fn empty_row_gets_explicit_defaults() {
        let record = normalize_record(&located_row("40.0", "-111.0")).unwrap();
        assert_eq!(record.year, "");
        assert_eq!(record.month, "Unknown");
        assert_eq!(record.crash_type, CrashType::Vehicle);
        assert_eq!(record.severity, CrashSeverity::Unknown);
        assert_eq!(record.injuries, 0);
        assert_eq!(record.fatalities, 0);
        assert_eq!(record.intersection_type, "Unknown");
        assert_eq!(record.pedestrian_action, "Unknown");
        assert_eq!(record.traffic_control, "Unknown");
        assert_eq!(record.day_night, "Unknown");
        assert!(!record.motorcycle_involved);
        assert!(!record.bicycle_involved);
    }

    #[test]
    fn unknown_marker_counts_as_missing() {
        let mut row = located_row("40.0", "-111.0");
        row.month = Some("Unknown".to_owned());
        row.injury_type = Some("Unknown".to_owned());
        row.injuries = Some("Unknown".to_owned());

        let record = normalize_record(&row).unwrap();
        assert_eq!(record.month, "Unknown");
        assert_eq!(record.severity, CrashSeverity::Unknown);
        assert_eq!(record.injuries, 0);
    }

    #[test]
    fn fatal_pedestrian_row_with_unknown_injury_count() {
        let mut row = located_row("40.2338", "-111.6585");
        row.pedestrian_involved = Some("Yes".to_owned());
        row.injury_type = Some("Dead".to_owned());
        row.injuries = Some("Unknown".to_owned());
        row.fatalities = Some("1".to_owned());

        let record = normalize_record(&row).unwrap();
        assert_eq!(record.crash_type, CrashType::Pedestrian);
        assert_eq!(record.severity, CrashSeverity::Fatal);
        assert_eq!(record.severity.value(), 5);
        assert_eq!(record.injuries, 0);
        assert_eq!(record.fatalities, 1);
    }

    #[test]
    fn involvement_flags_require_exact_yes() {
        let mut row = located_row("40.0", "-111.0");
        row.pedestrian_involved = Some("yes".to_owned());
        row.motorcycle_involved = Some("YES".to_owned());
        row.bicycle_involved = Some("true".to_owned());

        let record = normalize_record(&row).unwrap();
        assert_eq!(record.crash_type, CrashType::Vehicle);
        assert!(!record.motorcycle_involved);
        assert!(!record.bicycle_involved);
    }

    #[test]
    fn unparseable_count_names_the_column() {
        let mut row = located_row("40.0", "-111.0");
        row.fatalities = Some("two".to_owned());

        let err = normalize_record(&row).unwrap_err();
        assert_eq!(err.column, "Number_Of_Fatalities");
        assert_eq!(err.value, "two");
    }

    #[test]
    fn negative_count_is_malformed() {
        let mut row = located_row("40.0", "-111.0");
        row.injuries = Some("-1".to_owned());

        let err = normalize_record(&row).unwrap_err();
        assert_eq!(err.column, "Number_Of_Injuries");
    }

    #[test]
    fn unparseable_latitude_is_malformed() {
        let err = normalize_record(&located_row("north", "-111.0")).unwrap_err();
        assert_eq!(err.column, "Sum of Latitude");
        assert_eq!(err.value, "north");
    }

    #[test]
    fn parses_coordinates_from_row() {
        let (latitude, longitude) = parse_coordinates(&located_row("40.2338", "-111.6585")).unwrap();
        assert!((latitude - 40.2338).abs() < f64::EPSILON);
        assert!((longitude - -111.6585).abs() < f64::EPSILON);
    }

    #[test]
    fn rejects_missing_coordinates() {
        let mut row = located_row("40.2338", "-111.6585");
        row.longitude = None;
        assert!(parse_coordinates(&row).is_none());

        row.longitude = Some(String::new());
        assert!(parse_coordinates(&row).is_none());

        row.longitude = Some("Unknown".to_owned());
        assert!(parse_coordinates(&row).is_none());
    }

    #[test]
    fn rejects_unparseable_coordinates() {
        assert!(parse_coordinates(&located_row("40.2338", "west")).is_none());
    }

    #[test]
    fn rejects_non_finite_coordinates() {
        assert!(parse_coordinates(&located_row("NaN", "-111.6585")).is_none());
        assert!(parse_coordinates(&located_row("40.2338", "inf")).is_none());
        assert!(parse_coordinates(&located_row("-infinity", "-111.6585")).is_none());
    }

    #[test]
    fn non_finite_latitude_is_malformed() {
        let err = normalize_record(&located_row("NaN", "-111.0")).unwrap_err();
        assert_eq!(err.column, "Sum of Latitude");
        assert_eq!(err.value, "NaN");
    }
}
