//! Power spectrum of a transformed sequence.
use crate::error::FourierError;
use crate::vector::ComplexVector;

/// Scale applied to each magnitude of a power spectrum.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum SpectrumScale {
    #[default]
    Linear,
    /// Natural logarithm of the magnitude. A zero magnitude maps to `-inf`.
    NaturalLog,
}

/// One magnitude per element of `spectrum`, optionally log-scaled.
///
/// # Errors
///
/// Returns [`FourierError::NotANumber`] for the first element whose magnitude is NaN.
pub fn power_spectrum(
    spectrum: &ComplexVector,
    scale: SpectrumScale,
) -> Result<Vec<f64>, FourierError> {
    spectrum
        .iter()
        .enumerate()
        .map(|(index, z)| {
            let magnitude = z.magnitude();
            if magnitude.is_nan() {
                return Err(FourierError::NotANumber { index });
            }
            Ok(match scale {
                SpectrumScale::Linear => magnitude,
                SpectrumScale::NaturalLog => magnitude.ln(),
            })
        })
        .collect()
}
