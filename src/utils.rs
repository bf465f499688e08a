//! Utility functions such as splitting and combining real/imaginary parts, and conversions to
//! and from [`num_complex`] types behind the `complex-nums` feature.

#[cfg(feature = "complex-nums")]
use bytemuck::cast_slice;

#[cfg(feature = "complex-nums")]
use num_complex::Complex64;

use crate::complex::Complex;
use crate::vector::ComplexVector;

/// Separates a [`ComplexVector`] into its real and imaginary components
pub fn deinterleave(signal: &ComplexVector) -> (Vec<f64>, Vec<f64>) {
    signal.iter().map(|z| (z.re, z.im)).unzip()
}

/// Utility function to combine separate vectors of real and imaginary components
/// into a single [`ComplexVector`].
///
/// # Panics
///
/// Panics if `reals.len() != imags.len()`.
pub fn combine_re_im(reals: &[f64], imags: &[f64]) -> ComplexVector {
    assert_eq!(reals.len(), imags.len());

    reals
        .iter()
        .zip(imags.iter())
        .map(|(&z_re, &z_im)| Complex::new(z_re, z_im))
        .collect()
}

#[cfg(feature = "complex-nums")]
impl From<Complex64> for Complex {
    fn from(z: Complex64) -> Self {
        Complex::new(z.re, z.im)
    }
}

#[cfg(feature = "complex-nums")]
impl From<Complex> for Complex64 {
    fn from(z: Complex) -> Self {
        Complex64::new(z.re, z.im)
    }
}

#[cfg(feature = "complex-nums")]
impl ComplexVector {
    /// Copies a slice of [`Complex64`] into a new sequence.
    pub fn from_num_complex(signal: &[Complex64]) -> Self {
        let values: &[Complex] = cast_slice(signal);
        values.iter().copied().collect()
    }

    pub fn to_num_complex(&self) -> Vec<Complex64> {
        cast_slice::<Complex, Complex64>(self.as_slice()).to_vec()
    }

    /// Views the sequence as interleaved `[re0, im0, re1, im1, ...]` without copying.
    pub fn as_interleaved(&self) -> &[f64] {
        cast_slice(self.as_slice())
    }
}
