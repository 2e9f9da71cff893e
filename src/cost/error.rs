//! Cost estimation error types

use thiserror::Error;

use crate::dose::DoseError;

/// Errors raised by cost estimation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CostError {
    /// Invalid weight or other dosing input
    #[error(transparent)]
    Dose(#[from] DoseError),

    /// Treatment duration must cover at least one week
    #[error("Treatment duration must be at least one week, got {weeks}")]
    InvalidDuration { weeks: usize },

    /// Drug cost per mg is negative or not finite
    #[error("Drug cost per mg must be a non-negative number, got {cost}")]
    InvalidDrugCost { cost: f64 },
}
