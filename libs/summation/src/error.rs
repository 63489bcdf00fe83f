use thiserror::Error;

/// Errors returned by the summation functions.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SumError {
    /// `n` is zero, negative, fractional or not a number at all.
    #[error("n must be a positive integer")]
    InvalidInput,

    /// The recursive variant refused to descend past its depth bound.
    #[error("recursion depth for n = {n} exceeds the limit of {limit}")]
    DepthExceeded { n: i64, limit: u64 },

    /// The sum of `1..=n` does not fit in `u64`.
    #[error("sum of 1 to {n} does not fit in 64 bits")]
    Overflow { n: i64 },
}
