//! Treatment log CSV ingestion
//!
//! Reads the same layout [`TreatmentTracker::export_csv`] emits, so an
//! exported log can be re-ingested into a fresh tracker. The `Day` and
//! `A:G Ratio` columns are derived values and are ignored on read; day
//! offsets are recomputed against the tracker's start date when the
//! points are appended.

use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;

use super::error::TrackerError;
use super::structs::TreatmentTracker;
use super::types::{Bloodwork, DataPoint};

#[derive(Debug, Deserialize)]
struct LogRow {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Weight (kg)")]
    weight: f64,
    #[serde(rename = "Temperature (°C)")]
    temperature: Option<f64>,
    #[serde(rename = "Albumin")]
    albumin: Option<f64>,
    #[serde(rename = "Globulin")]
    globulin: Option<f64>,
    #[serde(rename = "Clinical Signs")]
    clinical_signs: Option<String>,
}

impl LogRow {
    fn into_data_point(self) -> Result<DataPoint, TrackerError> {
        let date = self
            .date
            .parse::<NaiveDate>()
            .map_err(|_| TrackerError::InvalidDate { value: self.date })?;

        let mut point = DataPoint::new(date, self.weight);
        if let Some(temp) = self.temperature {
            point = point.with_temperature(temp);
        }
        if self.albumin.is_some() || self.globulin.is_some() {
            point = point.with_bloodwork(Bloodwork::new(self.albumin, self.globulin));
        }
        if let Some(signs) = self.clinical_signs {
            if !signs.is_empty() {
                point = point.with_clinical_signs(signs);
            }
        }
        Ok(point)
    }
}

/// Read a treatment-log CSV file into data points
///
/// The file must carry the export header; unknown columns are ignored.
/// Rows come back in file order, ready to feed to
/// [`TreatmentTracker::add_data_point`].
pub fn read_treatment_log(path: impl AsRef<Path>) -> Result<Vec<DataPoint>, TrackerError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path.as_ref())
        .map_err(|e| TrackerError::Csv(e.to_string()))?;

    let mut points = Vec::new();
    for row_result in reader.deserialize() {
        let row: LogRow = row_result.map_err(|e| TrackerError::Csv(e.to_string()))?;
        points.push(row.into_data_point()?);
    }

    Ok(points)
}

impl TreatmentTracker {
    /// Append every row of a treatment-log CSV to this tracker
    ///
    /// Returns the number of observations added.
    pub fn import_csv(&mut self, path: impl AsRef<Path>) -> Result<usize, TrackerError> {
        let points = read_treatment_log(path)?;
        let count = points.len();
        for point in points {
            self.add_data_point(point);
        }
        Ok(count)
    }
}
