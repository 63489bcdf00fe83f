//! Validation of `n`.
//!
//! A valid `n` is a whole number strictly greater than zero. Callers holding
//! an `i64` use [`is_valid_input`]; callers holding text or a float (JSON
//! numbers, command-line arguments) go through [`parse_input`] or
//! [`input_from_f64`], which reject fractions and non-numeric values.

use crate::error::SumError;

/// 2^63, the first float that no longer fits in `i64`.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// True iff `n` is a positive integer.
#[must_use]
pub fn is_valid_input(n: i64) -> bool {
    n > 0
}

/// True iff `x` is finite, has no fractional part and is greater than zero.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn is_valid_number(x: f64) -> bool {
    x.is_finite() && x.fract() == 0.0 && x > 0.0
}

/// Convert a float into `n`.
///
/// # Errors
/// Returns [`SumError::InvalidInput`] if `x` is not a positive whole number
/// representable as `i64`.
#[allow(clippy::cast_possible_truncation)]
pub fn input_from_f64(x: f64) -> Result<i64, SumError> {
    if !is_valid_number(x) || x >= I64_BOUND {
        return Err(SumError::InvalidInput);
    }
    Ok(x as i64)
}

/// Parse `n` from text.
///
/// Accepts integer literals and whole-valued decimals such as `"5.0"`.
///
/// # Errors
/// Returns [`SumError::InvalidInput`] for non-numeric text, fractions, zero
/// and negative numbers.
pub fn parse_input(raw: &str) -> Result<i64, SumError> {
    let raw = raw.trim();
    let n = match raw.parse::<i64>() {
        Ok(n) => n,
        Err(_) => {
            let x = raw.parse::<f64>().map_err(|_| SumError::InvalidInput)?;
            input_from_f64(x)?
        }
    };

    if !is_valid_input(n) {
        return Err(SumError::InvalidInput);
    }
    Ok(n)
}

/// Validate `n` and return it as the unsigned upper bound of the range.
pub(crate) fn upper_bound(n: i64) -> Result<u64, SumError> {
    if !is_valid_input(n) {
        return Err(SumError::InvalidInput);
    }
    u64::try_from(n).map_err(|_| SumError::InvalidInput)
}
