//! Error type shared by every fallible operation in the crate.

use thiserror::Error;

use crate::complex::Complex;

/// How a caller is expected to treat a [`FourierError`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Severity {
    /// A normal, if unusual, outcome the caller inspects and handles locally.
    Recoverable,
    /// The operation cannot produce a result; the calling operation should stop.
    Fatal,
}

/// Unified error type for the transform engine and its value types.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum FourierError {
    #[error("data count ({len}) is not a power of 2")]
    NotPowerOfTwo { len: usize },
    #[error("cannot reconstruct a series from an empty sequence")]
    EmptyInput,
    #[error("magnitude at index {index} is not a number")]
    NotANumber { index: usize },
    #[error("planner was built for {expected} points but the input has {actual}")]
    SizeMismatch { expected: usize, actual: usize },
    #[error("divisor ({divisor}) has a zero component")]
    DegenerateDivision { divisor: Complex },
}

impl FourierError {
    pub fn severity(&self) -> Severity {
        match self {
            FourierError::DegenerateDivision { .. } => Severity::Recoverable,
            FourierError::NotPowerOfTwo { .. }
            | FourierError::EmptyInput
            | FourierError::NotANumber { .. }
            | FourierError::SizeMismatch { .. } => Severity::Fatal,
        }
    }

    /// `true` only for degenerate division, the one outcome callers are expected to check.
    pub fn is_recoverable(&self) -> bool {
        self.severity() == Severity::Recoverable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_division_is_recoverable() {
        let soft = FourierError::DegenerateDivision {
            divisor: Complex::new(0.0, 1.0),
        };
        assert!(soft.is_recoverable());

        for hard in [
            FourierError::NotPowerOfTwo { len: 12 },
            FourierError::EmptyInput,
            FourierError::NotANumber { index: 3 },
            FourierError::SizeMismatch {
                expected: 8,
                actual: 16,
            },
        ] {
            assert_eq!(hard.severity(), Severity::Fatal);
        }
    }

    #[test]
    fn messages() {
        assert_eq!(
            FourierError::NotPowerOfTwo { len: 12 }.to_string(),
            "data count (12) is not a power of 2"
        );
        assert_eq!(
            FourierError::DegenerateDivision {
                divisor: Complex::new(2.0, 0.0)
            }
            .to_string(),
            "divisor (2.00, i0.00) has a zero component"
        );
    }
}
