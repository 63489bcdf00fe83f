use rest_problem::FieldViolation;
use thiserror::Error;
use uuid::Uuid;

/// Domain-specific errors using thiserror
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Product not found: {id}")]
    ProductNotFound { id: Uuid },

    #[error("Validation failed: {}", summarize(.violations))]
    Validation { violations: Vec<FieldViolation> },

    #[error("Storage error: {message}")]
    Storage { message: String },
}

fn summarize(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| format!("{}: {}", v.field, v.message))
        .collect::<Vec<_>>()
        .join("; ")
}

impl DomainError {
    #[must_use]
    pub fn product_not_found(id: Uuid) -> Self {
        Self::ProductNotFound { id }
    }

    #[must_use]
    pub fn validation(violations: Vec<FieldViolation>) -> Self {
        Self::Validation { violations }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn validation_message_lists_each_field() {
        let err = DomainError::validation(vec![
            FieldViolation::new("name", "Name is required"),
            FieldViolation::new("price", "Price must be a valid number"),
        ]);
        assert_eq!(
            err.to_string(),
            "Validation failed: name: Name is required; price: Price must be a valid number"
        );
    }
}
