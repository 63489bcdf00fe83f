//! Summation
//!
//! Sum of the integers `1..=n` computed three independent ways that must
//! agree on every valid input:
//!
//! - [`sum_iterative`] - single linear pass, the reference implementation
//! - [`sum_formula`] - closed form `n * (n + 1) / 2`
//! - [`sum_recursive`] - `n + sum(n - 1)` with a bounded recursion depth
//!
//! All three reject any `n` that is not a positive integer with
//! [`SumError::InvalidInput`] before computing anything. Results are `u64`
//! and every variant uses checked arithmetic, so an unrepresentable sum is
//! reported as [`SumError::Overflow`] rather than returned wrapped.
//!
//! ```
//! use summation::{Strategy, sum_formula};
//!
//! assert_eq!(sum_formula(100), Ok(5050));
//! for strategy in Strategy::ALL {
//!     assert_eq!(strategy.apply(10), Ok(55));
//! }
//! ```
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod error;
pub mod input;
pub mod strategy;
pub mod sum;

pub use error::SumError;
pub use input::{input_from_f64, is_valid_input, is_valid_number, parse_input};
pub use strategy::Strategy;
pub use sum::{
    DEFAULT_MAX_DEPTH, sum_formula, sum_iterative, sum_recursive, sum_recursive_with_limit,
};
