//! Treatment cost estimation
//!
//! Simulates a multi-week GS-441524 course and accumulates drug,
//! monitoring, and bloodwork costs. Juvenile growth is modeled as a
//! discrete 5% weight step on each exact 4-week boundary (not a
//! continuous curve), after which the daily dose is re-derived from the
//! protocol rate table.
//!
//! # Usage
//!
//! ```rust
//! use fipsol::cost::{estimate_treatment_cost, CostParams};
//! use fipsol::protocol::DiseaseForm;
//!
//! let params = CostParams::new(3.0, DiseaseForm::Wet, 0.5)
//!     .with_weekly_monitoring_cost(50.0)
//!     .with_monthly_bloodwork_cost(150.0);
//!
//! let estimate = estimate_treatment_cost(&params).unwrap();
//! println!("{}", estimate);
//! ```
//!
//! [`compare_costs`] runs the same model across named scenario overrides;
//! [`compare_suppliers`] varies only the per-mg drug price and returns the
//! suppliers sorted by total cost.

mod error;
mod estimate;
mod types;

pub use error::CostError;
pub use estimate::{compare_costs, compare_suppliers, estimate_treatment_cost};
pub use types::{
    BloodworkCosts, CostEstimate, CostParams, DrugCosts, MonitoringCosts, Scenario, ScenarioCost,
    Supplier, SupplierCost, TreatmentParameters,
};
