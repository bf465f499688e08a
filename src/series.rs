//! Evaluating the Fourier series implied by a spectrum.
//!
//! Only the real part of each term is summed: this is the cosine series of a conjugate-symmetric
//! spectrum, such as the forward transform of a real signal. It is not a general complex
//! evaluation.
use core::f64::consts::PI;

use crate::error::FourierError;
use crate::twiddles::rotation_factor;
use crate::vector::ComplexVector;

/// Evaluates the series of `spectrum` at the real point `x`.
///
/// The result is `spectrum[0].re` plus, for every `i` in `1..N`, the real part of
/// `spectrum[i]` rotated by `2π·i·x/N` in the inverse sense.
///
/// # Errors
///
/// Returns [`FourierError::EmptyInput`] if `spectrum` is empty.
pub fn reconstruct_sample(spectrum: &ComplexVector, x: f64) -> Result<f64, FourierError> {
    if spectrum.is_empty() {
        return Err(FourierError::EmptyInput);
    }

    let n = spectrum.len() as f64;
    let tail: f64 = spectrum
        .iter()
        .enumerate()
        .skip(1)
        .map(|(i, &z)| {
            let theta = 2.0 * PI * i as f64 * x / n;
            rotation_factor(z, theta, false).re
        })
        .sum();

    Ok(spectrum[0].re + tail)
}

/// Evaluates [`reconstruct_sample`] at every integer `x` in `0..N`.
///
/// An empty spectrum yields an empty series.
pub fn reconstruct_series(spectrum: &ComplexVector) -> Result<Vec<f64>, FourierError> {
    (0..spectrum.len())
        .map(|x| reconstruct_sample(spectrum, x as f64))
        .collect()
}

#[cfg(test)]
mod tests {
    use utilities::{assert_float_closeness, gen_real_signal};

    use super::*;
    use crate::algorithms::{dft::dft, dit::fft};
    use crate::complex::Complex;
    use crate::planner::Direction;

    #[test]
    fn constant_spectrum() {
        let spectrum = ComplexVector::from(vec![
            Complex::from_re(2.0),
            Complex::default(),
            Complex::default(),
            Complex::default(),
        ]);
        for x in [0.0, 0.5, 1.5, 3.25] {
            assert_float_closeness(reconstruct_sample(&spectrum, x).unwrap(), 2.0, 1e-15);
        }
    }

    #[test]
    fn reproduces_real_signal() {
        for log_n in 0..=9 {
            let n = 1 << log_n;
            let samples = gen_real_signal(n);
            let spectrum = fft(&ComplexVector::from_real(&samples), Direction::Forward).unwrap();

            let series = reconstruct_series(&spectrum).unwrap();
            assert_eq!(series.len(), n);
            for (&actual, &expected) in series.iter().zip(samples.iter()) {
                assert_float_closeness(actual, expected, 1e-11);
            }
        }
    }

    #[test]
    fn reproduces_real_signal_from_direct_transform() {
        let samples = gen_real_signal(30);
        let spectrum = dft(&ComplexVector::from_real(&samples), Direction::Forward).unwrap();

        let series = reconstruct_series(&spectrum).unwrap();
        for (&actual, &expected) in series.iter().zip(samples.iter()) {
            assert_float_closeness(actual, expected, 1e-11);
        }
    }

    #[test]
    fn empty_spectrum() {
        assert_eq!(
            reconstruct_sample(&ComplexVector::new(), 0.0),
            Err(FourierError::EmptyInput)
        );
        assert_eq!(reconstruct_series(&ComplexVector::new()), Ok(vec![]));
    }
}
