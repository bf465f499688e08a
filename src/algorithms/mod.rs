//! Transform Algorithm Implementations
//!
//! ## Available Algorithms
//!
//! - **DFT (direct)**: `O(N²)` summation, valid for every length.
//!
//! - **DIT (Decimation-in-Time)**: radix-2 fast transform for power-of-two lengths. Input is
//!   reordered by bit reversal, then combined from small butterflies to large. Output is in
//!   natural order.
//!
//! ## Normalization
//!
//! Both algorithms divide by `N` on the *forward* pass and leave the inverse unscaled, so a
//! forward/inverse round trip is scaled exactly once.
//!
//! ## Algorithm Selection
//!
//! [`crate::transform`] picks DIT for power-of-two lengths and DFT otherwise.

pub mod dft;
pub mod dit;
