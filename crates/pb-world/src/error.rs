//! World-subsystem error type.

use thiserror::Error;

use pb_core::PbError;

/// Errors produced while building an [`Environment`][crate::Environment].
#[derive(Debug, Error)]
pub enum WorldError {
    #[error("a patrol route needs at least 2 waypoints, got {0}")]
    TooFewWaypoints(usize),

    #[error("obstacle {index} has a non-positive extent")]
    DegenerateObstacle { index: usize },

    #[error(transparent)]
    Core(#[from] PbError),
}

pub type WorldResult<T> = Result<T, WorldError>;
