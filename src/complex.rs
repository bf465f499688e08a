//! The complex value all transforms operate on.
//!
//! Arithmetic operators on [`Complex`] are *elementwise*: `a * b` is
//! `(a.re * b.re, a.im * b.im)`, and scalar operands are broadcast to `(s, s)`
//! before combining. The true complex product is the separately named
//! [`Complex::multiply_complex`].
use core::fmt;
use core::ops::{Add, AddAssign, Mul, Sub, SubAssign};

use num_traits::Zero;

use crate::error::FourierError;

#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "complex-nums", derive(bytemuck::Pod, bytemuck::Zeroable))]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    #[inline]
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// A purely real value, `(re, 0)`
    #[inline]
    pub const fn from_re(re: f64) -> Self {
        Self::new(re, 0.0)
    }

    /// Elementwise quotient `(self.re / rhs.re, self.im / rhs.im)`.
    ///
    /// # Errors
    ///
    /// Returns [`FourierError::DegenerateDivision`] when either component of `rhs` is exactly zero,
    /// including the imaginary one.
    pub fn checked_div(self, rhs: Self) -> Result<Self, FourierError> {
        if rhs.re == 0.0 || rhs.im == 0.0 {
            return Err(FourierError::DegenerateDivision { divisor: rhs });
        }
        Ok(Self::new(self.re / rhs.re, self.im / rhs.im))
    }

    /// Elementwise quotient by `(rhs, rhs)`. See [`Complex::checked_div`].
    pub fn checked_div_scalar(self, rhs: f64) -> Result<Self, FourierError> {
        self.checked_div(Self::new(rhs, rhs))
    }

    /// True complex product. A missing operand yields `(0, 0)`.
    pub fn multiply_complex(self, rhs: impl Into<Option<Self>>) -> Self {
        match rhs.into() {
            Some(rhs) => Self::new(
                self.re * rhs.re - self.im * rhs.im,
                self.re * rhs.im + self.im * rhs.re,
            ),
            None => Self::default(),
        }
    }

    #[inline]
    pub fn conjugate(self) -> Self {
        Self::new(self.re, -self.im)
    }

    #[inline]
    pub fn conjugate_in_place(&mut self) {
        self.im = -self.im;
    }

    /// Distance from the origin, `sqrt(re² + im²)`
    #[inline]
    pub fn magnitude(self) -> f64 {
        (self.re.powi(2) + self.im.powi(2)).sqrt()
    }
}

impl From<f64> for Complex {
    fn from(re: f64) -> Self {
        Self::from_re(re)
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.im >= 0.0 {
            write!(f, "{:.2}, i{:.2}", self.re, self.im)
        } else {
            write!(f, "{:.2}, -i{:.2}", self.re, -self.im)
        }
    }
}

macro_rules! impl_elementwise_op {
    ($trait:ident, $method:ident, $op:tt) => {
        impl $trait for Complex {
            type Output = Complex;

            #[inline]
            fn $method(self, rhs: Complex) -> Complex {
                Complex::new(self.re $op rhs.re, self.im $op rhs.im)
            }
        }

        impl $trait<f64> for Complex {
            type Output = Complex;

            #[inline]
            fn $method(self, rhs: f64) -> Complex {
                self $op Complex::new(rhs, rhs)
            }
        }
    };
}

impl_elementwise_op!(Add, add, +);
impl_elementwise_op!(Sub, sub, -);
impl_elementwise_op!(Mul, mul, *);

impl AddAssign for Complex {
    #[inline]
    fn add_assign(&mut self, rhs: Complex) {
        *self = *self + rhs;
    }
}

impl SubAssign for Complex {
    #[inline]
    fn sub_assign(&mut self, rhs: Complex) {
        *self = *self - rhs;
    }
}

impl Zero for Complex {
    fn zero() -> Self {
        Self::default()
    }

    fn is_zero(&self) -> bool {
        self.re == 0.0 && self.im == 0.0
    }
}
