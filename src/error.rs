use std::error::Error;
use std::fmt;

/// Errors raised by dataset column access and shape checks.
#[derive(Debug)]
pub enum DatasetError {
    /// A required column is absent.
    ColumnNotFound(String),
    /// A column exists but holds a different physical type.
    ColumnTypeMismatch {
        column: String,
        expected: &'static str,
        found: &'static str,
    },
    /// A column being inserted does not match the dataset row count.
    LengthMismatch {
        column: String,
        expected: usize,
        found: usize,
    },
    /// A value required to be numeric is missing or non-finite.
    MissingValue { column: String, row: usize },
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DatasetError::ColumnNotFound(name) => write!(f, "Column '{}' not found", name),
            DatasetError::ColumnTypeMismatch {
                column,
                expected,
                found,
            } => write!(
                f,
                "Column '{}' has type {} but {} was expected",
                column, found, expected
            ),
            DatasetError::LengthMismatch {
                column,
                expected,
                found,
            } => write!(
                f,
                "Column '{}' has {} rows but the dataset has {}",
                column, found, expected
            ),
            DatasetError::MissingValue { column, row } => write!(
                f,
                "Column '{}' has a missing or non-finite value at row {}",
                column, row
            ),
        }
    }
}

impl Error for DatasetError {}

/// Custom error type for classification metric failures
#[derive(Debug)]
pub enum MetricsError {
    NaNFound(usize), // Number of NaN values found
    LengthMismatch,
    /// The truth vector holds a single class, so ROC-AUC is undefined.
    SingleClass,
}

impl fmt::Display for MetricsError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MetricsError::NaNFound(count) => {
                write!(f, "Found {} NaN values in scores array", count)
            }
            MetricsError::LengthMismatch => {
                write!(f, "Scores and label arrays must have equal length")
            }
            MetricsError::SingleClass => {
                write!(f, "ROC-AUC is undefined when labels contain a single class")
            }
        }
    }
}

impl Error for MetricsError {}
