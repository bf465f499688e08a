//! Decimation-in-Time (DIT) FFT Implementation
//!
//! The DIT algorithm decomposes the DFT from small to large sub-problems. Input is processed in
//! bit-reversed order, and output is produced in natural order.
//!
//! ## Algorithm Overview
//!
//! 1. Reorder a copy of the input by the bit-reversal permutation
//! 2. Start with small butterflies (size 2)
//! 3. Double the butterfly size every stage, up to stage `log(N)`, where `N` is the size of
//!    the input
//! 4. For a forward transform, divide every output by `N`
//!
//! ## Memory Access Pattern
//!
//! Each stage reads one buffer and writes another, and the two are swapped between stages, so
//! a stage only ever sees the fully materialized output of the previous one.
//!
use core::mem;

use tracing::{debug, trace};

use crate::error::FourierError;
use crate::options::{Options, StageExecution};
use crate::parallel::run_stage;
use crate::planner::{Direction, Planner};
use crate::vector::ComplexVector;

/// Radix-2 fast transform of `input` in the given `direction`. `input` is left untouched.
///
/// # Errors
///
/// Returns [`FourierError::NotPowerOfTwo`] if `input.len()` is not a power of two.
pub fn fft(input: &ComplexVector, direction: Direction) -> Result<ComplexVector, FourierError> {
    fft_with_opts(input, direction, &Options::guess_options(input.len()))
}

/// Same as [`fft`], with explicit [`Options`].
///
/// # Errors
///
/// Returns [`FourierError::NotPowerOfTwo`] if `input.len()` is not a power of two.
pub fn fft_with_opts(
    input: &ComplexVector,
    direction: Direction,
    opts: &Options,
) -> Result<ComplexVector, FourierError> {
    let planner = Planner::new(input.len(), direction)?;
    fft_with_opts_and_plan(input, opts, &planner)
}

/// DIT FFT with a pre-computed planner and options
///
/// # Arguments
///
/// * `input` - The signal to transform (not modified)
/// * `opts` - Options controlling execution strategy
/// * `planner` - Pre-computed plan holding the direction and the bit-reversal permutation
///
/// # Errors
///
/// Returns [`FourierError::SizeMismatch`] if the planner was built for another length.
pub fn fft_with_opts_and_plan(
    input: &ComplexVector,
    opts: &Options,
    planner: &Planner,
) -> Result<ComplexVector, FourierError> {
    let n = input.len();
    if n != planner.len() {
        return Err(FourierError::SizeMismatch {
            expected: planner.len(),
            actual: n,
        });
    }
    if n == 0 {
        return Ok(ComplexVector::new());
    }

    if cfg!(not(feature = "parallel")) && opts.stage_execution == StageExecution::Parallel {
        debug!(n, "parallel stage execution requested without the `parallel` feature");
    }

    // Decimation-in-time reordering
    let mut data: ComplexVector = planner.bit_reversal.iter().map(|&i| input[i]).collect();
    let mut work = ComplexVector::zeroed(n);

    let positive = planner.direction.rotation_sign();
    let mut wing_size = 2;
    for stage in 0..planner.log_n {
        trace!(stage, wing_size, "dit stage");
        run_stage(
            data.as_slice(),
            work.as_mut_slice(),
            wing_size,
            positive,
            opts.stage_execution,
        );
        mem::swap(&mut data, &mut work);
        wing_size <<= 1;
    }

    if let Direction::Forward = planner.direction {
        let scale = n as f64;
        for z in data.iter_mut() {
            *z = z.checked_div_scalar(scale)?;
        }
    }

    Ok(data)
}
