//! GS-441524 dose calculation for FIP treatment
//!
//! Pure functions computing daily doses, injection volumes, and full-course
//! totals from body weight and disease form, following the UC Davis
//! protocol rates in [`crate::protocol::DOSING_MAP`].
//!
//! # Key outputs
//!
//! | Field | Description |
//! |-------|-------------|
//! | total_dose_mg | Daily dose (weight × mg/kg rate) |
//! | volume_ml | Injection volume at the given concentration |
//! | weekly_amount_mg | Daily dose × 7 |
//! | full_treatment_mg | Daily dose × 84 (12-week course) |
//!
//! # Usage
//!
//! ```rust
//! use fipsol::dose::calculate_dose;
//! use fipsol::protocol::{DiseaseForm, DEFAULT_CONCENTRATION};
//!
//! let result = calculate_dose(3.0, DiseaseForm::Wet, DEFAULT_CONCENTRATION).unwrap();
//! assert_eq!(result.total_dose_mg, 15.0);
//! assert_eq!(result.volume_ml, 1.0);
//! ```
//!
//! All calculations are deterministic and side-effect free; every call
//! returns a fresh value object.

mod calc;
mod error;
mod types;

pub use calc::{calculate_dose, calculate_weight_adjustment, convert_oral_to_injectable};
pub use error::DoseError;
pub use types::{DoseResult, OralConversion, WeightAdjustment};
