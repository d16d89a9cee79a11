use std::error::Error;
use std::fmt;

/// Errors raised by the feature scoring and selection routines.
///
/// All of these indicate a caller mistake (bad shapes, missing inputs). Numeric
/// degeneracies such as a zero-variance denominator are not errors; they show
/// up as NaN entries in the score vector instead.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionError {
    /// No data matrix was supplied.
    MissingInput,
    /// No scoring method was supplied.
    MissingMethod,
    /// Scoring requires exactly two class sizes; holds the number supplied.
    Arity { found: usize },
    /// Class sizes do not add up to the number of rows in the matrix.
    SizeMismatch { expected_rows: usize, class_total: usize },
    /// Degenerate or empty block.
    Shape(String),
    /// Negative k requested.
    Range(isize),
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SelectionError::MissingInput => write!(f, "Provide data to make selection"),
            SelectionError::MissingMethod => write!(f, "Provide selection method"),
            SelectionError::Arity { found } => write!(
                f,
                "Two-class scoring requires exactly 2 class sizes, got {}",
                found
            ),
            SelectionError::SizeMismatch {
                expected_rows,
                class_total,
            } => write!(
                f,
                "Class sizes sum to {} but the data has {} rows",
                class_total, expected_rows
            ),
            SelectionError::Shape(msg) => write!(f, "Invalid shape: {}", msg),
            SelectionError::Range(k) => write!(f, "Number of features must be non-negative, got {}", k),
        }
    }
}

impl Error for SelectionError {}

pub type Result<T> = std::result::Result<T, SelectionError>;
