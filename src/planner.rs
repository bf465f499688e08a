//! The planner module provides a reusable plan for the fast transform of one length.
//! A plan holds the direction of the transform and the bit-reversal permutation
//! that reorders the input before the butterfly stages, so transforming many
//! signals of the same length builds the permutation only once.
use tracing::debug;

use crate::bit_reversal::bit_reversal_permutation;
use crate::error::FourierError;

/// Reverse is for running the inverse transform
/// Forward is for running the regular transform
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Direction {
    /// Rotate by `e^(-iθ)` and divide the result by `N`
    #[default]
    Forward,
    /// Rotate by `e^(iθ)` and leave the result unscaled
    Reverse,
}

impl Direction {
    /// `Direction::Reverse` when `inverse` is set
    pub fn from_inverse(inverse: bool) -> Self {
        if inverse {
            Direction::Reverse
        } else {
            Direction::Forward
        }
    }

    pub fn is_inverse(self) -> bool {
        self == Direction::Reverse
    }

    /// The sign flag handed to [`crate::twiddles::rotation_factor`]: the negation of "is inverse".
    #[inline]
    pub fn rotation_sign(self) -> bool {
        !self.is_inverse()
    }
}

/// Pre-computed state for fast transforms of `len` points in one [`Direction`].
#[derive(Debug, Clone)]
pub struct Planner {
    /// `bit_reversal[i]` is the input index that feeds slot `i` of the first stage
    pub bit_reversal: Vec<usize>,
    /// The direction of the transform associated with this `Planner`
    pub direction: Direction,
    /// Number of butterfly stages, `log2(len)`
    pub log_n: usize,
}

impl Planner {
    /// Create a `Planner` for a fast transform of size `num_points`.
    ///
    /// # Errors
    ///
    /// Returns [`FourierError::NotPowerOfTwo`] if `num_points` is not a power of two.
    pub fn new(num_points: usize, direction: Direction) -> Result<Self, FourierError> {
        let bit_reversal = bit_reversal_permutation(num_points)?;
        let log_n = if num_points == 0 {
            0
        } else {
            num_points.ilog2() as usize
        };
        debug!(num_points, log_n, ?direction, "built fft plan");

        Ok(Self {
            bit_reversal,
            direction,
            log_n,
        })
    }

    /// The number of points this plan transforms
    pub fn len(&self) -> usize {
        self.bit_reversal.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bit_reversal.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_flags() {
        assert_eq!(Direction::default(), Direction::Forward);
        assert_eq!(Direction::from_inverse(true), Direction::Reverse);
        assert_eq!(Direction::from_inverse(false), Direction::Forward);
        assert!(Direction::Forward.rotation_sign());
        assert!(!Direction::Reverse.rotation_sign());
    }

    #[test]
    fn stage_counts() {
        for (num_points, log_n) in [(0, 0), (1, 0), (2, 1), (256, 8), (4096, 12)] {
            let planner = Planner::new(num_points, Direction::Forward).unwrap();
            assert_eq!(planner.log_n, log_n);
            assert_eq!(planner.len(), num_points);
        }
    }

    #[test]
    fn rejects_non_powers_of_two() {
        let err = Planner::new(24, Direction::Reverse).unwrap_err();
        assert_eq!(err, FourierError::NotPowerOfTwo { len: 24 });
        assert!(!err.is_recoverable());
    }
}
