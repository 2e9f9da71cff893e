//! Dose calculation error types

use thiserror::Error;

/// Errors raised by dose calculations
///
/// All variants represent invalid arguments detected at the point of
/// validation, before any computation happens.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DoseError {
    /// Weight is zero, negative, or not finite
    #[error("Weight must be a positive number, got {weight}")]
    InvalidWeight { weight: f64 },

    /// Disease form string did not match a recognized form
    #[error("Disease form must be one of: wet, dry, ocular, neurological (got '{form}')")]
    UnknownDiseaseForm { form: String },

    /// Drug concentration is zero, negative, or not finite
    #[error("Concentration must be a positive number of mg/ml, got {concentration}")]
    InvalidConcentration { concentration: f64 },

    /// Oral-to-injectable conversion ratio is zero, negative, or not finite
    #[error("Conversion ratio must be a positive number, got {ratio}")]
    InvalidConversionRatio { ratio: f64 },
}
