//! Power-of-two test and the bit-reversal permutation that precedes the DIT butterflies.
use crate::error::FourierError;

/// Returns `true` if `n` has at most one set bit, so `0` counts as a power of two.
#[inline]
pub const fn is_power_of_two(n: usize) -> bool {
    n & n.wrapping_sub(1) == 0
}

/// Builds the permutation `perm` where `perm[i]` is `i` with its `log2(n)` bits reversed.
///
/// The table is grown by doubling: the entries `[b, 2b)` are the entries `[0, b)` plus the
/// current half-size, which halves every round.
///
/// # Errors
///
/// Returns [`FourierError::NotPowerOfTwo`] if `n` is not a power of two.
/// An `n` of `0` yields an empty permutation.
pub fn bit_reversal_permutation(n: usize) -> Result<Vec<usize>, FourierError> {
    if !is_power_of_two(n) {
        return Err(FourierError::NotPowerOfTwo { len: n });
    }
    if n == 0 {
        return Ok(Vec::new());
    }

    let mut perm = vec![0; n];
    let mut half = n >> 1;
    let mut block = 1;

    while block < n {
        let (filled, rest) = perm.split_at_mut(block);
        rest[..block]
            .iter_mut()
            .zip(filled.iter())
            .for_each(|(dst, &src)| *dst = src + half);
        half >>= 1;
        block <<= 1;
    }

    Ok(perm)
}
