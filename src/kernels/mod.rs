//! FFT Butterfly Kernels
//!
//! The per-butterfly work of the decimation-in-time transform. Kernels are compiled for
//! several CPU targets and the best one is selected at runtime.

pub mod dit;
