use thiserror::Error;

/// Errors raised by the benchmark post-processing filters.
#[derive(Error, Debug)]
pub enum BenchError {
    #[error("Unexpected number of median entries in input: expected {expected}, found {found}")]
    ShapeMismatch { expected: usize, found: usize },

    #[error("Need at least two cycle counts, got {found}")]
    TooFewSamples { found: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BenchError>;
