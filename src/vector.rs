//! Fixed-length, index-addressable sequence of [`Complex`] values.
use core::ops::{Index, IndexMut};
use core::slice;

use num_traits::Zero;

use crate::complex::Complex;

/// An owned, contiguous sequence of complex samples.
///
/// Cloning is a deep copy: every element of the clone is independent of the original.
/// Indexing out of range panics.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComplexVector {
    values: Vec<Complex>,
}

impl ComplexVector {
    /// An empty sequence of length 0
    pub fn new() -> Self {
        Self::default()
    }

    /// A sequence of `count` zeros
    pub fn zeroed(count: usize) -> Self {
        Self {
            values: vec![Complex::zero(); count],
        }
    }

    /// Builds a sequence from real samples, with every imaginary part set to zero.
    pub fn from_real(data: &[f64]) -> Self {
        let mut vector = Self::new();
        vector.set_real_data(data);
        vector
    }

    /// Discards every element and reallocates storage for exactly `count` elements.
    ///
    /// Nothing from the previous contents survives; all slots read as zero until they are set.
    pub fn reallocate(&mut self, count: usize) {
        self.values = vec![Complex::zero(); count];
    }

    /// Replaces the contents with `(sample, 0)` for every sample in `data`.
    pub fn set_real_data(&mut self, data: &[f64]) {
        self.reallocate(data.len());
        self.values
            .iter_mut()
            .zip(data.iter())
            .for_each(|(z, &sample)| *z = Complex::from_re(sample));
    }

    /// Assigns `value` to every slot.
    pub fn fill(&mut self, value: Complex) {
        self.values.fill(value);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Complex> {
        self.values.iter()
    }

    pub fn iter_mut(&mut self) -> slice::IterMut<'_, Complex> {
        self.values.iter_mut()
    }

    pub fn as_slice(&self) -> &[Complex] {
        &self.values
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [Complex] {
        &mut self.values
    }
}

impl Index<usize> for ComplexVector {
    type Output = Complex;

    #[inline]
    fn index(&self, index: usize) -> &Complex {
        &self.values[index]
    }
}

impl IndexMut<usize> for ComplexVector {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Complex {
        &mut self.values[index]
    }
}

impl From<Vec<Complex>> for ComplexVector {
    fn from(values: Vec<Complex>) -> Self {
        Self { values }
    }
}

impl FromIterator<Complex> for ComplexVector {
    fn from_iter<I: IntoIterator<Item = Complex>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ComplexVector {
    type Item = &'a Complex;
    type IntoIter = slice::Iter<'a, Complex>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
