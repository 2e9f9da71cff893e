//! Tracker data and trend types

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::protocol::DiseaseForm;

/// Patient identity and treatment start context
///
/// Set once at tracker creation and read-only afterwards, except by
/// explicit replacement via
/// [`TreatmentTracker::set_patient_info`](crate::tracker::TreatmentTracker::set_patient_info).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientInfo {
    /// Patient name
    pub name: String,
    /// Age in months, if known
    pub age_months: Option<u32>,
    /// Sex, free text ("Unknown" if not recorded)
    pub sex: String,
    /// Diagnosed disease form, if known
    pub disease_form: Option<DiseaseForm>,
    /// First day of treatment; day offsets are computed against this
    pub start_date: NaiveDate,
}

impl PatientInfo {
    /// Create patient info with the given name and defaults elsewhere
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the age in months
    pub fn with_age_months(mut self, months: u32) -> Self {
        self.age_months = Some(months);
        self
    }

    /// Set the sex
    pub fn with_sex(mut self, sex: impl Into<String>) -> Self {
        self.sex = sex.into();
        self
    }

    /// Set the diagnosed disease form
    pub fn with_disease_form(mut self, form: DiseaseForm) -> Self {
        self.disease_form = Some(form);
        self
    }

    /// Set the treatment start date
    pub fn with_start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = date;
        self
    }
}

impl Default for PatientInfo {
    fn default() -> Self {
        Self {
            name: "Unknown".to_string(),
            age_months: None,
            sex: "Unknown".to_string(),
            disease_form: None,
            start_date: Local::now().date_naive(),
        }
    }
}

/// Albumin and globulin readings from one blood draw
///
/// Either marker may be absent; the A:G ratio is only derivable when
/// both are present and positive.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bloodwork {
    /// Serum albumin (g/dl)
    pub albumin: Option<f64>,
    /// Serum globulin (g/dl)
    pub globulin: Option<f64>,
}

impl Bloodwork {
    /// Create a bloodwork record
    pub fn new(albumin: Option<f64>, globulin: Option<f64>) -> Self {
        Self { albumin, globulin }
    }

    /// Albumin:globulin ratio, when both markers are present and positive
    pub fn ag_ratio(&self) -> Option<f64> {
        match (self.albumin, self.globulin) {
            (Some(a), Some(g)) if a > 0.0 && g > 0.0 => Some(a / g),
            _ => None,
        }
    }
}

/// Input for one clinical observation
///
/// Build with [`DataPoint::new`] plus the `with_*` methods; optional
/// fields default to absent. The tracker derives the treatment day when
/// the point is appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    /// Observation date
    pub date: NaiveDate,
    /// Weight (kg)
    pub weight: f64,
    /// Body temperature (°C), if measured
    pub temperature: Option<f64>,
    /// Blood test results, if drawn
    pub bloodwork: Option<Bloodwork>,
    /// Free-text clinical observations
    pub clinical_signs: String,
    /// Administered dose (mg), if recorded
    pub dose_mg: Option<f64>,
}

impl DataPoint {
    /// Create a data point with the required date and weight
    pub fn new(date: NaiveDate, weight: f64) -> Self {
        Self {
            date,
            weight,
            temperature: None,
            bloodwork: None,
            clinical_signs: String::new(),
            dose_mg: None,
        }
    }

    /// Attach a temperature reading (°C)
    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Attach blood test results
    pub fn with_bloodwork(mut self, bloodwork: Bloodwork) -> Self {
        self.bloodwork = Some(bloodwork);
        self
    }

    /// Attach free-text clinical signs
    pub fn with_clinical_signs(mut self, signs: impl Into<String>) -> Self {
        self.clinical_signs = signs.into();
        self
    }

    /// Record the administered dose (mg)
    pub fn with_dose_mg(mut self, dose_mg: f64) -> Self {
        self.dose_mg = Some(dose_mg);
        self
    }
}

/// One stored observation in the treatment series
///
/// Created by [`TreatmentTracker::add_data_point`](crate::tracker::TreatmentTracker::add_data_point);
/// immutable once stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    date: NaiveDate,
    day: i64,
    weight: f64,
    temperature: Option<f64>,
    bloodwork: Option<Bloodwork>,
    clinical_signs: String,
    dose_mg: Option<f64>,
}

impl Observation {
    pub(crate) fn new(data: DataPoint, day: i64) -> Self {
        Self {
            date: data.date,
            day,
            weight: data.weight,
            temperature: data.temperature,
            bloodwork: data.bloodwork,
            clinical_signs: data.clinical_signs,
            dose_mg: data.dose_mg,
        }
    }

    /// Observation date
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Whole-day offset from the treatment start date
    pub fn day(&self) -> i64 {
        self.day
    }

    /// Weight (kg)
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Temperature (°C), if measured
    pub fn temperature(&self) -> Option<f64> {
        self.temperature
    }

    /// Blood test results, if drawn
    pub fn bloodwork(&self) -> Option<&Bloodwork> {
        self.bloodwork.as_ref()
    }

    /// Free-text clinical signs
    pub fn clinical_signs(&self) -> &str {
        &self.clinical_signs
    }

    /// Administered dose (mg), if recorded
    pub fn dose_mg(&self) -> Option<f64> {
        self.dose_mg
    }
}

/// Baseline snapshot recorded separately from the observation series
///
/// Stored for reference and report templates; trend computations read
/// from the series, not the baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Baseline {
    /// Baseline date
    pub date: NaiveDate,
    /// Weight (kg)
    pub weight: f64,
    /// Temperature (°C), if measured
    pub temperature: Option<f64>,
    /// Blood test results, if drawn
    pub bloodwork: Option<Bloodwork>,
}

/// Direction of the weight trend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightTrendDirection {
    /// Last weight above the first
    Increasing,
    /// Last weight below the first
    Decreasing,
    /// Exact equality only
    Stable,
}

impl fmt::Display for WeightTrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeightTrendDirection::Increasing => write!(f, "increasing"),
            WeightTrendDirection::Decreasing => write!(f, "decreasing"),
            WeightTrendDirection::Stable => write!(f, "stable"),
        }
    }
}

/// Direction of the A:G ratio trend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RatioTrendDirection {
    /// Ratio rising toward normalization
    Improving,
    /// Ratio falling
    Worsening,
    /// Exact equality only
    Stable,
}

impl fmt::Display for RatioTrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RatioTrendDirection::Improving => write!(f, "improving"),
            RatioTrendDirection::Worsening => write!(f, "worsening"),
            RatioTrendDirection::Stable => write!(f, "stable"),
        }
    }
}

/// Weight change between the first and last recorded observation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightTrend {
    /// First recorded weight (kg)
    pub start_weight: f64,
    /// Last recorded weight (kg)
    pub current_weight: f64,
    /// Change (kg), 3 decimal places
    pub change_kg: f64,
    /// Change (%), 1 decimal place
    pub change_percent: f64,
    /// Trend classification
    pub trend: WeightTrendDirection,
}

/// A:G ratio change between the first and last qualifying bloodwork
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AGRatioTrend {
    /// First recorded ratio, 2 decimal places
    pub start_ratio: f64,
    /// Latest recorded ratio, 2 decimal places
    pub current_ratio: f64,
    /// Change, 2 decimal places
    pub change: f64,
    /// Trend classification
    pub trend: RatioTrendDirection,
    /// Whether the latest ratio reached the 0.4 normalization target
    pub target_met: bool,
}

/// Fever check over the most recent temperature readings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeverStatus {
    /// Mean of the recent readings (°C), 1 decimal place
    pub average_temp: f64,
    /// Maximum recent reading (°C), 1 decimal place
    pub max_temp: f64,
    /// Whether the mean exceeds the 39.2°C fever threshold
    pub has_fever: bool,
    /// Number of readings considered (at most 7)
    pub measurements: usize,
}

/// Elapsed treatment time against the 84-day standard course
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreatmentDuration {
    /// Days elapsed (day number of the latest observation)
    pub days: i64,
    /// Whole weeks elapsed
    pub weeks: i64,
    /// Standard course length (days)
    pub target_days: u32,
}

/// Snapshot of the latest observation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentStatus {
    /// Date of the latest observation
    pub date: NaiveDate,
    /// Latest weight (kg)
    pub weight: f64,
    /// Latest temperature (°C), if measured
    pub temperature: Option<f64>,
    /// Latest clinical signs
    pub clinical_signs: String,
}

/// The three derived trend computations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trends {
    /// Weight trend, when ≥2 observations exist
    pub weight: Option<WeightTrend>,
    /// A:G ratio trend, when ≥2 qualifying bloodwork points exist
    pub ag_ratio: Option<AGRatioTrend>,
    /// Fever status, when any temperature was recorded
    pub fever: Option<FeverStatus>,
}

/// Aggregated treatment summary
///
/// Produced by [`TreatmentTracker::summary`](crate::tracker::TreatmentTracker::summary);
/// its `Display` impl renders the progress report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreatmentSummary {
    /// Patient identity
    pub patient: PatientInfo,
    /// Elapsed time against the standard course
    pub treatment_duration: TreatmentDuration,
    /// Latest observation snapshot
    pub current_status: CurrentStatus,
    /// Derived trends
    pub trends: Trends,
    /// Number of observations recorded
    pub data_points_recorded: usize,
}
