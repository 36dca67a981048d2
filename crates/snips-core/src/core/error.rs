use thiserror::Error;

/// Rejection of malformed input shapes, labels, or indices.
///
/// Every check in the crate that depends only on its arguments reports through this
/// type. Errors are raised before any work is done, so a failed call has no partial
/// result.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error(
        "Number of species slots in the feature array ({found}) does not match the species list ({expected})"
    )]
    SpeciesSlotMismatch { expected: usize, found: usize },

    #[error(
        "Number of structures in the feature array ({expected}) does not match the number of structures provided ({found})"
    )]
    StructureCountMismatch { expected: usize, found: usize },

    #[error(
        "Number of atom labels ({found}) does not match the number of atoms in the feature array ({expected})"
    )]
    AtomLabelCountMismatch { expected: usize, found: usize },

    #[error("Number of positions ({positions}) does not match the number of chemical symbols ({symbols})")]
    AtomCountMismatch { positions: usize, symbols: usize },

    #[error("Species '{label}' is not part of the species list")]
    UnknownSpecies { label: String },

    #[error("Species '{label}' appears more than once in the species list")]
    DuplicateSpecies { label: String },

    #[error("Species list must contain at least one species")]
    EmptySpeciesList,

    #[error("Per-sample shapes differ: {left:?} vs {right:?}")]
    SampleShapeMismatch { left: Vec<usize>, right: Vec<usize> },

    #[error("Number of targets ({found}) does not match the number of samples ({expected})")]
    TargetCountMismatch { expected: usize, found: usize },

    #[error("Index {index} is out of bounds for {len} samples")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Sample {index} appears in both the training and the test split")]
    OverlappingSplit { index: usize },

    #[error("Test split is empty")]
    EmptyTestSplit,

    #[error("Training subset size must be at least 1")]
    EmptyTrainingSubset,

    #[error("Requested {requested} training samples, but only {available} are available")]
    TrainingSizeExceeded { requested: usize, available: usize },

    #[error("Inputs have different lengths ({left} vs {right})")]
    LengthMismatch { left: usize, right: usize },

    #[error("Input is empty")]
    EmptyInput,
}
