//! Error types for wannier-nnkp

use thiserror::Error;

/// Errors raised while reading structures, building neighbour lists or writing .nnkp files
#[derive(Debug, Error)]
pub enum NnkpError {
    /// Closing translation of a k-path outside {0, 1, 2, 3}
    #[error("Invalid closure selector {0}, expected one of [0, 1, 2, 3]")]
    InvalidClosureSelector(i64),

    /// Grid dimension smaller than one
    #[error("Grid dimension along axis {axis} must be positive, got {value}")]
    NonPositiveGridDimension { axis: usize, value: i64 },

    /// Grid with a number of axes other than three
    #[error("Grid must have exactly 3 dimensions, got {0}")]
    GridRank(usize),

    /// Empty k-path
    #[error("Path length must be positive, got {0}")]
    NonPositivePathLength(i64),

    /// Axis order that is not a permutation of the three lattice axes
    #[error("Axis order {0:?} is not a permutation of [0, 1, 2]")]
    InvalidAxisOrder([usize; 3]),

    /// Lattice vectors that do not span three dimensions
    #[error("Unit cell is singular (|det| = {determinant:e})")]
    SingularUnitCell { determinant: f64 },

    /// Builder used without a calculation mode
    #[error("Calculation mode not set")]
    MissingMode,

    /// Required block or keyword absent from the input
    #[error("'{0}' not found in input")]
    MissingBlock(&'static str),

    /// Malformed input line (1-based line number)
    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
