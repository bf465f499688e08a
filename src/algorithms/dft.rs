//! Direct Discrete Fourier Transform
//!
//! Every output coefficient is the sum of every input sample rotated by `θ = 2π·i·j/N`.
//! This costs `O(N²)` rotations but places no restriction on `N`.
//!
use core::f64::consts::PI;

use num_traits::Zero;

use crate::complex::Complex;
use crate::error::FourierError;
use crate::planner::Direction;
use crate::twiddles::rotation_factor;
use crate::vector::ComplexVector;

/// Direct transform of `input` in the given `direction`. `input` is left untouched.
///
/// A forward transform divides every coefficient by `N`; an inverse one does not.
///
/// # Errors
///
/// Never fails for inputs produced by this crate; the error path exists because the final
/// scaling is an elementwise division.
pub fn dft(input: &ComplexVector, direction: Direction) -> Result<ComplexVector, FourierError> {
    let data = input.clone();
    let n = data.len();
    let positive = direction.rotation_sign();
    let coefficient = match direction {
        Direction::Forward => n as f64,
        Direction::Reverse => 1.0,
    };

    let mut work = ComplexVector::zeroed(n);
    for i in 0..n {
        let mut acc = Complex::zero();
        for (j, &z) in data.iter().enumerate() {
            let theta = 2.0 * PI * i as f64 * j as f64 / n as f64;
            acc += rotation_factor(z, theta, positive);
        }
        work[i] = acc.checked_div_scalar(coefficient)?;
    }

    Ok(work)
}
