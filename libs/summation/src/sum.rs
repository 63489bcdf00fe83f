//! The three summation variants.

use tracing::debug;

use crate::error::SumError;
use crate::input::upper_bound;

/// Deepest recursion [`sum_recursive`] will attempt.
///
/// Each level costs one stack frame; past this bound the call fails with
/// [`SumError::DepthExceeded`] instead of risking stack exhaustion.
pub const DEFAULT_MAX_DEPTH: u64 = 10_000;

/// Sum `1..=n` with a single linear pass.
///
/// O(n) time, O(1) space.
///
/// # Errors
/// [`SumError::InvalidInput`] if `n <= 0`, [`SumError::Overflow`] if the sum
/// exceeds `u64::MAX`.
pub fn sum_iterative(n: i64) -> Result<u64, SumError> {
    let upper = upper_bound(n)?;

    let mut total: u64 = 0;
    for i in 1..=upper {
        total = total.checked_add(i).ok_or(SumError::Overflow { n })?;
    }

    debug!(n, total, "iterative sum");
    Ok(total)
}

/// Sum `1..=n` with the closed form `n * (n + 1) / 2`.
///
/// O(1). The product is taken in `u128`, which cannot overflow for any
/// `n <= i64::MAX`, and narrowed afterwards.
///
/// # Errors
/// [`SumError::InvalidInput`] if `n <= 0`, [`SumError::Overflow`] if the sum
/// exceeds `u64::MAX`.
pub fn sum_formula(n: i64) -> Result<u64, SumError> {
    let upper = u128::from(upper_bound(n)?);

    // n * (n + 1) is always even
    #[allow(clippy::integer_division)]
    let total = upper * (upper + 1) / 2;

    let total = u64::try_from(total).map_err(|_| SumError::Overflow { n })?;
    debug!(n, total, "closed-form sum");
    Ok(total)
}

/// Sum `1..=n` as `n + sum(n - 1)` with `sum(1) = 1`.
///
/// O(n) time and O(n) stack. Depth is capped at [`DEFAULT_MAX_DEPTH`].
///
/// # Errors
/// [`SumError::InvalidInput`] if `n <= 0`, [`SumError::DepthExceeded`] if
/// `n > DEFAULT_MAX_DEPTH`.
pub fn sum_recursive(n: i64) -> Result<u64, SumError> {
    sum_recursive_with_limit(n, DEFAULT_MAX_DEPTH)
}

/// [`sum_recursive`] with an explicit depth bound.
///
/// Raising `limit` is the caller's promise that the running thread has
/// enough stack for `n` frames.
///
/// # Errors
/// [`SumError::InvalidInput`] if `n <= 0`, [`SumError::DepthExceeded`] if
/// `n > limit`, [`SumError::Overflow`] if the sum exceeds `u64::MAX`.
pub fn sum_recursive_with_limit(n: i64, limit: u64) -> Result<u64, SumError> {
    let upper = upper_bound(n)?;
    if upper > limit {
        return Err(SumError::DepthExceeded { n, limit });
    }

    let total = descend(upper).ok_or(SumError::Overflow { n })?;
    debug!(n, total, limit, "recursive sum");
    Ok(total)
}

fn descend(n: u64) -> Option<u64> {
    if n == 1 {
        return Some(1);
    }
    descend(n - 1)?.checked_add(n)
}
