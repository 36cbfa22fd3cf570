//! Error types.
//!
//! A run ends in one of two infeasibility outcomes or rejects its input
//! before searching. Loading tabular records has its own error type.

use thiserror::Error;

use crate::validation::ValidationError;

/// Terminal, non-retryable outcomes of a timetabling run.
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// Fewer bookable slots than unit requirements; detected before search.
    #[error("not enough availabilities: {available} slot(s) for {required} requirement(s)")]
    ResourceShortage { available: u64, required: u64 },

    /// Every branch of the search was exhausted without a full assignment.
    #[error("no feasible assignment after exploring {nodes_explored} node(s)")]
    NoFeasibleAssignment { nodes_explored: u64 },

    /// The input failed load-boundary checks.
    #[error("invalid input: {}", summarize(.0))]
    InvalidInput(Vec<ValidationError>),
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Errors reading or writing tabular records.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid number in {field} (row {row}): {value:?}")]
    InvalidNumber {
        row: usize,
        field: String,
        value: String,
    },
}

/// Result alias for tabular loading.
pub type LoadResult<T> = Result<T, LoadError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_shortage_message() {
        let err = ScheduleError::ResourceShortage {
            available: 1,
            required: 2,
        };
        assert_eq!(
            err.to_string(),
            "not enough availabilities: 1 slot(s) for 2 requirement(s)"
        );
    }

    #[test]
    fn test_invalid_input_lists_messages() {
        let err = ScheduleError::InvalidInput(vec![
            ValidationError {
                kind: ValidationErrorKind::DuplicateId,
                message: "Duplicate class number: 101".into(),
            },
            ValidationError {
                kind: ValidationErrorKind::InvalidDay,
                message: "bad day".into(),
            },
        ]);
        assert_eq!(
            err.to_string(),
            "invalid input: Duplicate class number: 101; bad day"
        );
    }
}
