//! Error types for schwefel-ga
//!
//! This module defines all error types used throughout the library.

use thiserror::Error;

/// Error type for genome operations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GenomeError {
    /// A gene value cannot be represented by the encoding
    #[error("Gene value {value} outside encodable range [{min}, {max}]")]
    ValueOutOfRange { value: i32, min: i32, max: i32 },

    /// Dimension mismatch
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}

/// Error type for operator failures
///
/// These are sampling-precondition failures: the operator was asked to
/// draw more distinct items than its input provides.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum OperatorError {
    /// Crossover operation failed
    #[error("Crossover failed: {0}")]
    CrossoverFailed(String),

    /// Selection operation failed
    #[error("Selection failed: {0}")]
    SelectionFailed(String),
}

/// Top-level error type for evolution runs
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EvolutionError {
    /// Genome error
    #[error("Genome error: {0}")]
    Genome(#[from] GenomeError),

    /// Operator error
    #[error("Operator error: {0}")]
    Operator(#[from] OperatorError),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// Empty population
    #[error("Empty population")]
    EmptyPopulation,
}

/// Result type alias for evolution operations
pub type EvoResult<T> = Result<T, EvolutionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genome_error_display() {
        let err = GenomeError::ValueOutOfRange {
            value: 2000,
            min: -512,
            max: 511,
        };
        assert_eq!(
            err.to_string(),
            "Gene value 2000 outside encodable range [-512, 511]"
        );

        let err = GenomeError::DimensionMismatch {
            expected: 10,
            actual: 5,
        };
        assert_eq!(err.to_string(), "Dimension mismatch: expected 10, got 5");
    }

    #[test]
    fn test_operator_error_display() {
        let err = OperatorError::CrossoverFailed("genome too short".to_string());
        assert_eq!(err.to_string(), "Crossover failed: genome too short");

        let err = OperatorError::SelectionFailed("tournament too large".to_string());
        assert_eq!(err.to_string(), "Selection failed: tournament too large");
    }

    #[test]
    fn test_evolution_error_from_operator_error() {
        let op_err = OperatorError::SelectionFailed("test".to_string());
        let evo_err: EvolutionError = op_err.into();
        assert!(matches!(evo_err, EvolutionError::Operator(_)));
    }

    #[test]
    fn test_evolution_error_from_genome_error() {
        let genome_err = GenomeError::DimensionMismatch {
            expected: 3,
            actual: 4,
        };
        let evo_err: EvolutionError = genome_err.into();
        assert!(matches!(evo_err, EvolutionError::Genome(_)));
    }
}
