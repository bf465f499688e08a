pub extern crate rustfft;

// export rustfft as a reference implementation for tests and benches
use rand::{distributions::Uniform, prelude::*};
use rustfft::num_traits::Float;

/// Asserts that two fp numbers are approximately equal.
///
/// # Panics
///
/// Panics if `actual` and `expected` are too far from each other
#[allow(dead_code)]
#[track_caller]
pub fn assert_float_closeness<T: Float + std::fmt::Display>(actual: T, expected: T, epsilon: T) {
    if (actual - expected).abs() >= epsilon {
        panic!(
            "Assertion failed: {actual} too far from expected value {expected} (with epsilon {epsilon})",
        );
    }
}

/// Generate a random, complex, signal in the provided buffers
///
/// # Panics
///
/// Panics if `reals.len() != imags.len()`
pub fn gen_random_signal<T>(reals: &mut [T], imags: &mut [T])
where
    T: Float + rand::distributions::uniform::SampleUniform,
{
    assert_eq!(
        reals.len(),
        imags.len(),
        "Real and imaginary slices must be of equal length"
    );

    let mut rng = thread_rng();

    let uniform_dist = Uniform::new(T::from(-1.0).unwrap(), T::from(1.0).unwrap());
    for (real, imag) in reals.iter_mut().zip(imags.iter_mut()) {
        *real = uniform_dist.sample(&mut rng);
        *imag = uniform_dist.sample(&mut rng);
    }
}

/// Generate `len` random real samples in `[-1, 1)`
pub fn gen_real_signal(len: usize) -> Vec<f64> {
    let uniform_dist = Uniform::new(-1.0, 1.0);
    thread_rng().sample_iter(uniform_dist).take(len).collect()
}

/// A square wave of `len` samples alternating between `amplitude` and `-amplitude`,
/// starting high for the first half of every `period`.
///
/// # Panics
///
/// Panics if `period` is zero
pub fn square_wave(len: usize, period: usize, amplitude: f64) -> Vec<f64> {
    assert!(period > 0);
    (0..len)
        .map(|i| {
            if i % period < period / 2 {
                amplitude
            } else {
                -amplitude
            }
        })
        .collect()
}
