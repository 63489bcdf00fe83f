use std::fmt;

use crate::error::SumError;
use crate::sum::{sum_formula, sum_iterative, sum_recursive};

/// Names one of the summation variants so callers can run them uniformly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    Iterative,
    Formula,
    Recursive,
}

impl Strategy {
    pub const ALL: [Self; 3] = [Self::Iterative, Self::Formula, Self::Recursive];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Iterative => "Iterative",
            Self::Formula => "Formula",
            Self::Recursive => "Recursive",
        }
    }

    /// Run this variant on `n`.
    ///
    /// # Errors
    /// Whatever the underlying function returns.
    pub fn apply(self, n: i64) -> Result<u64, SumError> {
        match self {
            Self::Iterative => sum_iterative(n),
            Self::Formula => sum_formula(n),
            Self::Recursive => sum_recursive(n),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
