//! Error types for POLFID
//!
//! Gantree: L0_Foundation → Errors
//!
//! Every fallible operation in the workspace returns [`PolfidResult`].

// Error variant fields are self-documenting via error messages
#![allow(missing_docs)]

use thiserror::Error;

/// Main error type for POLFID
/// Gantree: PolfidError // enum
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PolfidError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    /// Input rejected before any arithmetic was attempted
    /// Gantree: InvalidInput{{field,value,reason}} // 입력 검증
    #[error("Invalid input '{field}' = {value}: {reason}")]
    InvalidInput {
        field: String,
        value: f64,
        reason: String,
    },

    /// Configuration rejected by `validate()`
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ========================================================================
    // Numerical Errors
    // ========================================================================
    /// A quantity that must be real carries an imaginary remainder
    /// Gantree: NumericalInconsistency{{quantity,imag,tol}} // 허수부 초과
    #[error(
        "Numerical inconsistency in {quantity}: imaginary part {imaginary:.3e} exceeds tolerance {tolerance:.3e}"
    )]
    NumericalInconsistency {
        quantity: String,
        imaginary: f64,
        tolerance: f64,
    },

    /// No principal square root exists for the matrix
    #[error("Matrix square root undefined: {0}")]
    MatrixSqrtUndefined(String),

    // ========================================================================
    // I/O Errors
    // ========================================================================
    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(String),
}

/// Result type alias for POLFID operations
/// Gantree: PolfidResult<T> // type alias
pub type PolfidResult<T> = Result<T, PolfidError>;

// ============================================================================
// Error Conversion Helpers
// ============================================================================

impl From<serde_json::Error> for PolfidError {
    fn from(err: serde_json::Error) -> Self {
        PolfidError::JsonError(err.to_string())
    }
}

// ============================================================================
// Error Helpers
// ============================================================================

impl PolfidError {
    /// Build an [`PolfidError::InvalidInput`]
    pub fn invalid_input(field: impl Into<String>, value: f64, reason: impl Into<String>) -> Self {
        PolfidError::InvalidInput {
            field: field.into(),
            value,
            reason: reason.into(),
        }
    }

    /// Build a [`PolfidError::NumericalInconsistency`]
    pub fn inconsistent(quantity: impl Into<String>, imaginary: f64, tolerance: f64) -> Self {
        PolfidError::NumericalInconsistency {
            quantity: quantity.into(),
            imaginary,
            tolerance,
        }
    }

    /// Check if error was caused by caller-supplied values
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            PolfidError::InvalidInput { .. } | PolfidError::InvalidConfig(_)
        )
    }

    /// Check if error is a numerical failure inside the pipeline
    pub fn is_numerical(&self) -> bool {
        matches!(
            self,
            PolfidError::NumericalInconsistency { .. } | PolfidError::MatrixSqrtUndefined(_)
        )
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PolfidError::invalid_input("total_power", 0.0, "must be > 0");
        let msg = err.to_string();
        assert!(msg.contains("total_power"));
        assert!(msg.contains("must be > 0"));
    }

    #[test]
    fn test_inconsistency_display() {
        let err = PolfidError::inconsistent("fidelity", 0.25, 1e-9);
        assert!(err.to_string().contains("fidelity"));
        assert!(err.to_string().contains("2.500e-1"));
    }

    #[test]
    fn test_categories() {
        assert!(PolfidError::invalid_input("theta", f64::NAN, "must be finite").is_invalid_input());
        assert!(PolfidError::InvalidConfig("decimals".into()).is_invalid_input());
        assert!(!PolfidError::JsonError("eof".into()).is_invalid_input());

        assert!(PolfidError::inconsistent("trace distance", 1.0, 1e-9).is_numerical());
        assert!(PolfidError::MatrixSqrtUndefined("nilpotent".into()).is_numerical());
        assert!(!PolfidError::InvalidConfig("x".into()).is_numerical());
    }

    #[test]
    fn test_from_serde_json() {
        let err: PolfidError = serde_json::from_str::<f64>("not json").unwrap_err().into();
        assert!(matches!(err, PolfidError::JsonError(_)));
    }
}
