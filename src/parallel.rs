//! Utilities for parallelism

use crate::complex::Complex;
use crate::kernels::dit::fft_dit_wing;
use crate::options::StageExecution;

/// Runs every butterfly of one stage, reading `data` and writing `work`.
///
/// The butterflies run on the rayon pool if and only if `execution` is
/// [`StageExecution::Parallel`] and the `parallel` feature is enabled.
#[allow(unused_variables)] // when `parallel` feature is disabled, `execution` is ignored
pub(crate) fn run_stage(
    data: &[Complex],
    work: &mut [Complex],
    wing_size: usize,
    positive: bool,
    execution: StageExecution,
) {
    let num_points = data.len();

    #[cfg(feature = "parallel")]
    {
        if execution == StageExecution::Parallel {
            use rayon::prelude::*;

            work.par_chunks_exact_mut(wing_size)
                .zip(data.par_chunks_exact(wing_size))
                .for_each(|(dst, src)| fft_dit_wing(src, dst, num_points, positive));
            return;
        }
    }

    work.chunks_exact_mut(wing_size)
        .zip(data.chunks_exact(wing_size))
        .for_each(|(dst, src)| fft_dit_wing(src, dst, num_points, positive));
}
