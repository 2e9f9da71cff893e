//! fipsol: GS-441524 treatment calculations for FIP
//!
//! A small library for veterinary FIP (feline infectious peritonitis)
//! treatment support, following the UC Davis protocol:
//!
//! - [`dose`]: weight-based dose calculation, weight-adjustment
//!   recalculation, and oral↔injectable conversion
//! - [`cost`]: multi-week treatment cost simulation with growth
//!   compounding, scenario and supplier comparison
//! - [`tracker`]: per-patient append-only observation log with derived
//!   trend summaries, progress reports, and CSV/JSON export
//! - [`protocol`]: the dosing-rate table and protocol constants
//!
//! All calculations are synchronous pure functions over in-memory values;
//! the only mutable state is the tracker's own observation series.

pub mod cost;
pub mod dose;
pub mod error;
pub mod protocol;
pub mod tracker;

pub use error::FipsolError;

pub mod prelude {
    //! Convenience re-exports of the most-used items

    pub use crate::cost::{
        compare_costs, compare_suppliers, estimate_treatment_cost, CostError, CostEstimate,
        CostParams, Scenario, Supplier,
    };
    pub use crate::dose::{
        calculate_dose, calculate_weight_adjustment, convert_oral_to_injectable, DoseError,
        DoseResult, OralConversion, WeightAdjustment,
    };
    pub use crate::error::FipsolError;
    pub use crate::protocol::{DiseaseForm, DEFAULT_CONCENTRATION, ORAL_TO_INJECTABLE_RATIO};
    pub use crate::tracker::{
        read_treatment_log, Bloodwork, DataPoint, PatientInfo, TrackerError, TreatmentTracker,
    };
}
