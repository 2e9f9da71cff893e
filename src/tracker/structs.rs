//! The treatment tracker itself

use serde::Serialize;

use super::types::{Baseline, DataPoint, Observation, PatientInfo};

/// Append-only observation log for one patient under treatment
///
/// The tracker exclusively owns its observation series: entries can only
/// be added through [`add_data_point`](Self::add_data_point), are never
/// re-sorted, and are immutable once stored. One tracker instance is
/// long-lived for the life of a treatment course; create one per patient.
#[derive(Debug, Clone, Serialize)]
pub struct TreatmentTracker {
    patient: PatientInfo,
    baseline: Option<Baseline>,
    observations: Vec<Observation>,
}

impl TreatmentTracker {
    /// Create a tracker for a patient
    pub fn new(patient: PatientInfo) -> Self {
        Self {
            patient,
            baseline: None,
            observations: Vec::new(),
        }
    }

    /// Patient identity and start context
    pub fn patient(&self) -> &PatientInfo {
        &self.patient
    }

    /// Replace the patient info
    ///
    /// The observation series is untouched; day offsets of already-stored
    /// observations are not recomputed.
    pub fn set_patient_info(&mut self, patient: PatientInfo) {
        self.patient = patient;
    }

    /// Baseline snapshot, if one was recorded
    pub fn baseline(&self) -> Option<&Baseline> {
        self.baseline.as_ref()
    }

    /// Record a baseline snapshot outside the observation series
    pub fn set_baseline(&mut self, data: DataPoint) {
        self.baseline = Some(Baseline {
            date: data.date,
            weight: data.weight,
            temperature: data.temperature,
            bloodwork: data.bloodwork,
        });
    }

    /// Append an observation to the series
    ///
    /// Derives the treatment day from the patient's start date and
    /// returns a reference to the stored record. This is the only way
    /// the series is mutated.
    pub fn add_data_point(&mut self, data: DataPoint) -> &Observation {
        let day = (data.date - self.patient.start_date).num_days();
        self.observations.push(Observation::new(data, day));
        self.observations.last().expect("observation just pushed")
    }

    /// The recorded observations, in insertion order
    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_day_offset_from_start_date() {
        let patient = PatientInfo::new("Miso").with_start_date(day(2024, 1, 1));
        let mut tracker = TreatmentTracker::new(patient);

        let obs = tracker.add_data_point(DataPoint::new(day(2024, 1, 15), 3.2));
        assert_eq!(obs.day(), 14);
        assert_eq!(obs.weight(), 3.2);
    }

    #[test]
    fn test_same_day_observation_is_day_zero() {
        let patient = PatientInfo::new("Miso").with_start_date(day(2024, 1, 1));
        let mut tracker = TreatmentTracker::new(patient);

        let obs = tracker.add_data_point(DataPoint::new(day(2024, 1, 1), 3.0));
        assert_eq!(obs.day(), 0);
    }

    #[test]
    fn test_observations_keep_insertion_order() {
        let patient = PatientInfo::new("Miso").with_start_date(day(2024, 1, 1));
        let mut tracker = TreatmentTracker::new(patient);

        tracker.add_data_point(DataPoint::new(day(2024, 1, 15), 3.2));
        tracker.add_data_point(DataPoint::new(day(2024, 1, 8), 3.1));

        let days: Vec<i64> = tracker.observations().iter().map(|o| o.day()).collect();
        assert_eq!(days, [14, 7]);
    }

    #[test]
    fn test_baseline_is_separate_from_series() {
        let patient = PatientInfo::new("Miso").with_start_date(day(2024, 1, 1));
        let mut tracker = TreatmentTracker::new(patient);

        tracker.set_baseline(DataPoint::new(day(2024, 1, 1), 2.9).with_temperature(39.8));
        assert!(tracker.observations().is_empty());

        let baseline = tracker.baseline().unwrap();
        assert_eq!(baseline.weight, 2.9);
        assert_eq!(baseline.temperature, Some(39.8));
    }

    #[test]
    fn test_set_patient_info_keeps_series() {
        let mut tracker =
            TreatmentTracker::new(PatientInfo::new("Miso").with_start_date(day(2024, 1, 1)));
        tracker.add_data_point(DataPoint::new(day(2024, 1, 2), 3.0));

        tracker.set_patient_info(PatientInfo::new("Misoshiru").with_start_date(day(2024, 1, 1)));
        assert_eq!(tracker.patient().name, "Misoshiru");
        assert_eq!(tracker.observations().len(), 1);
    }
}
