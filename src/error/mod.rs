use thiserror::Error;

use crate::cost::CostError;
use crate::dose::DoseError;
use crate::tracker::TrackerError;

/// Crate-level error wrapping the module error types
#[derive(Error, Debug)]
pub enum FipsolError {
    #[error(transparent)]
    Dose(#[from] DoseError),
    #[error(transparent)]
    Cost(#[from] CostError),
    #[error(transparent)]
    Tracker(#[from] TrackerError),
}
