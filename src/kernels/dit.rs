//! DIT-specific FFT Kernels
//!
//! One butterfly ("wing") of a decimation-in-time stage. A wing of size `w` reads `w` values of
//! the previous stage and writes `w` values of the next; wings never read outside themselves,
//! which is what lets a stage run its wings independently.
//!
use core::f64::consts::PI;

use crate::complex::Complex;
use crate::twiddles::rotation_factor;

/// Computes one DIT butterfly of `src.len()` points out of an `num_points`-point transform.
///
/// For position `k` of the wing, the two taps are `k` and `k + w/2` in the first half and
/// `k - w/2` and `k` in the second half; the second tap is rotated by
/// `θ = 2π·k·(num_points / w) / num_points` before being added to the first.
///
/// # Panics
///
/// Panics if `src.len() != dst.len()`
#[multiversion::multiversion(targets(
    "x86_64+avx512f+avx512bw+avx512cd+avx512dq+avx512vl",
    "x86_64+avx2+fma",
    "x86_64+sse4.2",
    "x86+avx2+fma",
    "x86+sse4.2",
    "x86+sse2",
    "aarch64+neon",
))]
#[inline]
pub fn fft_dit_wing(src: &[Complex], dst: &mut [Complex], num_points: usize, positive: bool) {
    assert_eq!(src.len(), dst.len());

    let wing_size = src.len();
    let half = wing_size / 2;
    let butterfly_count = num_points / wing_size;

    dst.iter_mut().enumerate().for_each(|(k, out)| {
        let (from1, from2) = if k < half { (k, k + half) } else { (k - half, k) };
        let theta = 2.0 * PI * k as f64 * butterfly_count as f64 / num_points as f64;
        *out = src[from1] + rotation_factor(src[from2], theta, positive);
    });
}
