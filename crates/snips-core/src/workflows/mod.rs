//! # Workflows Module
//!
//! User-facing procedures that tie the [`core`](crate::core) data models and the
//! [`engine`](crate::engine) solvers together.
//!
//! - **Learning curves** ([`learning_curve`]) - fit ridge or kernel ridge models on growing
//!   prefixes of a training split and record train/test RMSE as a percentage of the
//!   training-target variance.

use crate::core::error::ValidationError;
use crate::engine::error::SolverError;
use thiserror::Error;

pub mod learning_curve;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum WorkflowError {
    #[error("Invalid input: {source}")]
    Validation {
        #[from]
        source: ValidationError,
    },

    #[error("Regression failed: {source}")]
    Solver {
        #[from]
        source: SolverError,
    },
}
