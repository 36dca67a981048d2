use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SolverError {
    #[error("Regularization strength must be positive and finite, got {0}")]
    InvalidRegularization(f64),

    #[error("Dimension mismatch in {context}: expected {expected}, found {found}")]
    Dimension {
        context: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("Cannot fit a model without training samples")]
    NoSamples,

    #[error("Regularized system of size {size} could not be solved")]
    Singular { size: usize },
}
