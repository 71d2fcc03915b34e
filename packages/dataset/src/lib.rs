#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! File-backed access to the crash and trail datasets.
//!
//! [`DatasetStore`] owns the data directory path and re-reads the backing
//! files on every call. The datasets are small, change only on deploy,
//! and are treated as immutable for the lifetime of the process.

pub mod normalize;
mod trails;

use std::path::PathBuf;

use crash_map_dataset_models::CrashRecord;
use normalize::{MalformedField, RawCrashRow};

/// File name of the crash CSV inside the data directory.
pub const CRASH_DATA_FILE: &str = "Pedestrian and Crash data.csv";

/// File name of the trails `GeoJSON` inside the data directory.
pub const TRAILS_FILE: &str = "Trails.geojson";

/// Errors from loading or normalizing a dataset.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// The backing file does not exist.
    #[error("dataset file not found: {path}")]
    NotFound {
        /// Path that was checked.
        path: String,
    },

    /// The file exists but could not be parsed as tabular data.
    #[error("unreadable dataset {path}: {source}")]
    Unreadable {
        /// Path of the unreadable file.
        path: String,
        /// Underlying CSV parser error.
        source: csv::Error,
    },

    /// The trails file holds something other than a feature collection.
    #[error("invalid feature collection {path}: {reason}")]
    InvalidFeatureFormat {
        /// Path of the rejected file.
        path: String,
        /// What the `GeoJSON` parser objected to.
        reason: String,
    },

    /// A row failed numeric coercion during normalization.
    #[error("malformed record at data row {row}: {source}")]
    MalformedRecord {
        /// 1-based data row number (the header row is not counted).
        row: usize,
        /// The cell that failed.
        source: MalformedField,
    },

    /// I/O failure other than non-existence.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path being read.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

/// File-backed reader for the crash and trail datasets.
///
/// Holds only the data directory it was constructed with; callers decide
/// where the data lives and how the store is shared.
#[derive(Debug, Clone)]
pub struct DatasetStore {
    data_dir: PathBuf,
}

impl DatasetStore {
    /// Creates a store that reads datasets from `data_dir`.
    #[must_use]
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Path of the crash CSV.
    #[must_use]
    pub fn crash_data_path(&self) -> PathBuf {
        self.data_dir.join(CRASH_DATA_FILE)
    }

    /// Path of the trails `GeoJSON`.
    #[must_use]
    pub fn trails_path(&self) -> PathBuf {
        self.data_dir.join(TRAILS_FILE)
    }

    /// Loads and normalizes the crash dataset.
    ///
    /// Rows whose coordinate cells do not yield finite coordinates cannot
    /// be placed on the map and are dropped. Every surviving row is
    /// normalized in file order; the first row that fails normalization
    /// aborts the whole load, so a response never mixes normalized
    /// records with silently discarded ones.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::NotFound`] when the CSV is absent,
    /// [`DatasetError::Unreadable`] when it cannot be parsed as CSV,
    /// [`DatasetError::MalformedRecord`] when a row fails numeric
    /// coercion, and [`DatasetError::Io`] for other read failures.
    pub fn load_crash_data(&self) -> Result<Vec<CrashRecord>, DatasetError> {
        let path = self.crash_data_path();
        if !path.exists() {
            return Err(DatasetError::NotFound {
                path: path.display().to_string(),
            });
        }

        let file = std::fs::File::open(&path).map_err(|e| DatasetError::Io {
            path: path.display().to_string(),
            source: e,
        })?;

        if let Ok(meta) = file.metadata() {
            log::debug!("Reading {} ({} bytes)", path.display(), meta.len());
        }

        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(std::io::BufReader::new(file));

        let mut records = Vec::new();
        let mut dropped = 0_usize;

        for (i, result) in reader.deserialize::<RawCrashRow>().enumerate() {
            let raw = result.map_err(|e| DatasetError::Unreadable {
                path: path.display().to_string(),
                source: e,
            })?;

            if normalize::parse_coordinates(&raw).is_none() {
                dropped += 1;
                continue;
            }

            let record = normalize::normalize_record(&raw)
                .map_err(|e| DatasetError::MalformedRecord { row: i + 1, source: e })?;
            records.push(record);
        }

        log::info!(
            "Normalized {} crash records from {} ({dropped} rows without usable coordinates dropped)",
            records.len(),
            path.display()
        );

        Ok(records)
    }

    /// Loads the trails feature collection, unmodified.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::NotFound`] when the file is absent,
    /// [`DatasetError::InvalidFeatureFormat`] when it holds anything
    /// other than a well-formed feature collection, and
    /// [`DatasetError::Io`] for other read failures.
    pub fn load_trails(&self) -> Result<geojson::FeatureCollection, DatasetError> {
        trails::read_feature_collection(&self.trails_path())
    }
}
