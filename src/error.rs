//! Error types for rational construction, parsing and canonicalization.

use thiserror::Error;

/// Convenience alias used by every fallible operation in this crate.
pub type Result<T> = core::result::Result<T, RationalError>;

/// Errors surfaced by [`Rational`](crate::Rational) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RationalError {
    /// A constructor argument was rejected before any arithmetic happened.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The input text is not a fraction literal.
    #[error("cannot parse {input:?} as a rational: {reason}")]
    Parse {
        input: String,
        reason: ParseErrorKind,
    },

    /// A zero denominator reached an operation that divides by it.
    #[error("division by zero")]
    DivisionByZero,
}

/// Why a fraction literal was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("empty input")]
    Empty,

    #[error("expected at most 2 '/'-separated segments, found {0}")]
    TooManySegments(usize),

    #[error("{0:?} is not a signed decimal integer")]
    InvalidInteger(String),
}

impl RationalError {
    pub(crate) fn parse(input: &str, reason: ParseErrorKind) -> Self {
        RationalError::Parse {
            input: input.to_owned(),
            reason,
        }
    }

    /// Returns `true` for any parse failure.
    pub fn is_parse(&self) -> bool {
        matches!(self, RationalError::Parse { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = RationalError::parse("1/2/3", ParseErrorKind::TooManySegments(3));
        assert_eq!(
            err.to_string(),
            "cannot parse \"1/2/3\" as a rational: expected at most 2 '/'-separated segments, found 3"
        );
        assert!(err.is_parse());

        assert_eq!(RationalError::DivisionByZero.to_string(), "division by zero");
        assert!(!RationalError::DivisionByZero.is_parse());
    }
}
