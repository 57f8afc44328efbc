use thiserror::Error;

// Unified error type for smath

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    #[error("expected a 3-vector, got length {0}")]
    NotThreeDimensional(usize),
    #[error("vector length mismatch: {0} vs {1}")]
    LengthMismatch(usize, usize),
    #[error("sample set is empty")]
    EmptySampleSet,
    #[error("duplicate abscissa at sample index {0}")]
    DuplicateAbscissa(usize),
}
