//! Discrete Fourier transforms of complex sequences.
//!
//! Two algorithms are provided: a direct `O(N²)` summation ([`dft`]) that accepts any length,
//! and an iterative radix-2 decimation-in-time transform ([`fft`]) for power-of-two lengths.
//! [`transform`] picks between them and is the recommended entry point.
//!
//! Transforms never modify their input and always return a new [`ComplexVector`]. The forward
//! direction divides by `N` and the inverse direction does not, so
//! `transform(&transform(&x, Forward)?, Reverse)?` reproduces `x`.
//!
//! ```
//! use fourierkit::{power_spectrum, reconstruct_series, transform};
//! use fourierkit::{ComplexVector, Direction, SpectrumScale};
//!
//! let signal = ComplexVector::from_real(&[1.0, 0.0, -1.0, 0.0]);
//! let spectrum = transform(&signal, Direction::Forward).unwrap();
//! let restored = transform(&spectrum, Direction::Reverse).unwrap();
//! assert!((restored[2].re + 1.0).abs() < 1e-12);
//!
//! let series = reconstruct_series(&spectrum).unwrap();
//! assert!((series[0] - 1.0).abs() < 1e-12);
//!
//! let magnitudes = power_spectrum(&spectrum, SpectrumScale::Linear).unwrap();
//! assert!((magnitudes[1] - 0.5).abs() < 1e-12);
//! ```
use tracing::debug;

pub use crate::algorithms::dft::dft;
pub use crate::algorithms::dit::{fft, fft_with_opts, fft_with_opts_and_plan};
pub use crate::bit_reversal::{bit_reversal_permutation, is_power_of_two};
pub use crate::complex::Complex;
pub use crate::error::{FourierError, Severity};
pub use crate::options::{Options, StageExecution};
pub use crate::planner::{Direction, Planner};
pub use crate::series::{reconstruct_sample, reconstruct_series};
pub use crate::spectrum::{power_spectrum, SpectrumScale};
pub use crate::twiddles::rotation_factor;
pub use crate::vector::ComplexVector;

pub mod algorithms;
pub mod bit_reversal;
pub mod complex;
pub mod error;
mod kernels;
pub mod options;
mod parallel;
pub mod planner;
pub mod series;
pub mod spectrum;
pub mod twiddles;
pub mod utils;
pub mod vector;

/// Transforms `input` with [`fft`] when its length is a power of two and with [`dft`] otherwise.
///
/// # Errors
///
/// Propagates the error of the chosen algorithm; neither fails on a length it is chosen for.
pub fn transform(input: &ComplexVector, direction: Direction) -> Result<ComplexVector, FourierError> {
    transform_with_opts(input, direction, &Options::guess_options(input.len()))
}

/// Same as [`transform`], with explicit [`Options`] for the fast path.
pub fn transform_with_opts(
    input: &ComplexVector,
    direction: Direction,
    opts: &Options,
) -> Result<ComplexVector, FourierError> {
    let len = input.len();
    if is_power_of_two(len) {
        debug!(len, ?direction, "dispatching to fft");
        fft_with_opts(input, direction, opts)
    } else {
        debug!(len, ?direction, "dispatching to dft");
        dft(input, direction)
    }
}

#[cfg(test)]
mod tests {
    use utilities::{assert_float_closeness, gen_real_signal, square_wave};

    use super::*;

    const ACCURACY: f64 = 1e-11;

    fn check(expected: &ComplexVector, actual: &ComplexVector, accuracy: f64) {
        assert_eq!(expected.len(), actual.len());
        for (a, b) in expected.iter().zip(actual.iter()) {
            assert_float_closeness(b.re, a.re, accuracy);
            assert_float_closeness(b.im, a.im, accuracy);
        }
    }

    fn square_wave_scenario(
        algorithm: impl Fn(&ComplexVector, Direction) -> Result<ComplexVector, FourierError>,
    ) {
        let original = ComplexVector::from_real(&square_wave(256, 64, 4.0));

        let spectrum = algorithm(&original, Direction::Forward).unwrap();
        let restored = algorithm(&spectrum, Direction::Reverse).unwrap();
        check(&original, &restored, ACCURACY);

        let series = reconstruct_series(&spectrum).unwrap();
        for (z, &sample) in original.iter().zip(series.iter()) {
            assert_float_closeness(sample, z.re, ACCURACY);
        }

        let log_power = power_spectrum(&spectrum, SpectrumScale::NaturalLog).unwrap();
        assert_eq!(log_power.len(), 256);
        assert!(log_power.iter().all(|p| !p.is_nan()));
    }

    #[test]
    fn square_wave_fft() {
        square_wave_scenario(fft);
    }

    #[test]
    fn square_wave_dft() {
        square_wave_scenario(dft);
    }

    #[test]
    fn dispatches_by_length() {
        for n in [16, 64, 256] {
            let input = ComplexVector::from_real(&gen_real_signal(n));
            check(
                &fft(&input, Direction::Forward).unwrap(),
                &transform(&input, Direction::Forward).unwrap(),
                1e-15,
            );
        }

        for n in [3, 12, 100] {
            let input = ComplexVector::from_real(&gen_real_signal(n));
            assert!(fft(&input, Direction::Forward).is_err());
            check(
                &dft(&input, Direction::Reverse).unwrap(),
                &transform(&input, Direction::Reverse).unwrap(),
                1e-15,
            );
        }
    }

    #[test]
    fn round_trip_through_dispatcher() {
        for n in [1, 2, 7, 32, 48, 128] {
            let samples = gen_real_signal(n);
            let input = ComplexVector::from_real(&samples);
            let restored =
                transform(&transform(&input, Direction::Forward).unwrap(), Direction::Reverse)
                    .unwrap();
            check(&input, &restored, ACCURACY);
        }
    }

    #[test]
    fn empty_sequence() {
        let empty = ComplexVector::new();
        assert!(transform(&empty, Direction::Forward).unwrap().is_empty());
        assert_eq!(reconstruct_sample(&empty, 0.0), Err(FourierError::EmptyInput));
    }
}
