// ============================================================================
// Numeric Errors
// Error types for precise decimal operations
// ============================================================================

use std::fmt;

/// Errors that can occur during precise decimal operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Attempted division by zero
    DivisionByZero,
    /// Operand is not a finite number (NaN or infinity)
    InvalidOperand,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::DivisionByZero => write!(f, "division by zero"),
            NumericError::InvalidOperand => {
                write!(f, "invalid operand: value is not a finite number")
            },
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(NumericError::DivisionByZero.to_string(), "division by zero");
        assert_eq!(
            NumericError::InvalidOperand.to_string(),
            "invalid operand: value is not a finite number"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(NumericError::DivisionByZero, NumericError::DivisionByZero);
        assert_ne!(NumericError::DivisionByZero, NumericError::InvalidOperand);
    }
}
