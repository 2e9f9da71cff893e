//! Treatment progress tracking
//!
//! A [`TreatmentTracker`] owns an append-only series of dated clinical
//! observations for one patient and derives trend summaries from it:
//! weight trend, albumin:globulin ratio trend, and fever detection.
//!
//! # Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use fipsol::tracker::{Bloodwork, DataPoint, PatientInfo, TreatmentTracker};
//! use fipsol::protocol::DiseaseForm;
//!
//! let patient = PatientInfo::new("Miso")
//!     .with_disease_form(DiseaseForm::Wet)
//!     .with_start_date(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
//!
//! let mut tracker = TreatmentTracker::new(patient);
//! tracker.add_data_point(
//!     DataPoint::new(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(), 2.8)
//!         .with_temperature(39.6)
//!         .with_bloodwork(Bloodwork::new(Some(2.0), Some(8.0))),
//! );
//! tracker.add_data_point(
//!     DataPoint::new(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(), 3.1)
//!         .with_bloodwork(Bloodwork::new(Some(2.9), Some(6.2))),
//! );
//!
//! let summary = tracker.summary().unwrap();
//! assert_eq!(summary.treatment_duration.days, 14);
//! println!("{}", summary);
//! ```
//!
//! Observations are immutable once stored and are never re-sorted: trend
//! queries compare first vs. last **by insertion order**. Feeding points
//! out of chronological order is the caller's responsibility.
//!
//! Trackers are independent of each other and carry no internal
//! synchronization; concurrent use of one instance must be serialized by
//! the caller.

mod error;
mod parser;
mod report;
mod structs;
mod trends;
mod types;

pub use error::TrackerError;
pub use parser::read_treatment_log;
pub use structs::TreatmentTracker;
pub use types::{
    AGRatioTrend, Baseline, Bloodwork, CurrentStatus, DataPoint, FeverStatus, Observation,
    PatientInfo, RatioTrendDirection, TreatmentDuration, TreatmentSummary, Trends, WeightTrend,
    WeightTrendDirection,
};
