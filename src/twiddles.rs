//! Rotation (twiddle) factor shared by the direct and fast transforms.
use crate::complex::Complex;

/// Rotates `z` by `theta` in trigonometric form.
///
/// With `s = 1` when `positive` is set and `s = -1` otherwise:
///
/// ```text
/// re' = re·cos θ + im·sin θ·s
/// im' = im·cos θ - re·sin θ·s
/// ```
///
/// i.e. `z·e^(-iθ)` for `positive == true` and `z·e^(iθ)` otherwise.
#[inline]
pub fn rotation_factor(z: Complex, theta: f64, positive: bool) -> Complex {
    let sign = if positive { 1.0 } else { -1.0 };
    let (sin, cos) = theta.sin_cos();
    Complex::new(
        z.re * cos + z.im * sin * sign,
        z.im * cos - z.re * sin * sign,
    )
}
