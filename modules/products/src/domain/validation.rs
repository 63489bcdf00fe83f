//! Product field rules shared by the service and the REST layer.

use rest_problem::FieldViolation;

use crate::config::ProductsConfig;
use crate::domain::error::DomainError;
use crate::domain::model::{NewProduct, ProductPatch};

pub const NAME_REQUIRED: &str = "Name is required";
pub const NAME_EMPTY: &str = "Name cannot be empty";
pub const DESCRIPTION_REQUIRED: &str = "Description is required";
pub const DESCRIPTION_EMPTY: &str = "Description cannot be empty";
pub const PRICE_INVALID: &str = "Price must be a valid number";
pub const STOCK_INVALID: &str = "Stock must be a non-negative integer";
pub const CATEGORY_INVALID: &str = "Category must be a string";
pub const IMAGE_URL_INVALID: &str = "Image URL must be a string";

/// Whitespace-only text counts as empty.
#[must_use]
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

#[must_use]
pub fn is_valid_price(price: f64) -> bool {
    price.is_finite() && price >= 0.0
}

fn name_too_long(max: usize) -> String {
    format!("Name cannot be longer than {max} characters")
}

/// Check a new product against the field rules.
///
/// # Errors
/// [`DomainError::Validation`] listing every failing field.
pub fn validate_new(new: &NewProduct, config: &ProductsConfig) -> Result<(), DomainError> {
    let mut violations = Vec::new();

    if is_blank(&new.name) {
        violations.push(FieldViolation::new("name", NAME_REQUIRED));
    } else if new.name.chars().count() > config.max_name_length {
        violations.push(FieldViolation::new("name", name_too_long(config.max_name_length)));
    }
    if !is_valid_price(new.price) {
        violations.push(FieldViolation::new("price", PRICE_INVALID));
    }
    if is_blank(&new.description) {
        violations.push(FieldViolation::new("description", DESCRIPTION_REQUIRED));
    }

    finish(violations)
}

/// Check the present fields of a patch.
///
/// # Errors
/// [`DomainError::Validation`] listing every failing field.
pub fn validate_patch(patch: &ProductPatch, config: &ProductsConfig) -> Result<(), DomainError> {
    let mut violations = Vec::new();

    if let Some(name) = &patch.name {
        if is_blank(name) {
            violations.push(FieldViolation::new("name", NAME_EMPTY));
        } else if name.chars().count() > config.max_name_length {
            violations.push(FieldViolation::new("name", name_too_long(config.max_name_length)));
        }
    }
    if patch.price.is_some_and(|p| !is_valid_price(p)) {
        violations.push(FieldViolation::new("price", PRICE_INVALID));
    }
    if patch.description.as_deref().is_some_and(is_blank) {
        violations.push(FieldViolation::new("description", DESCRIPTION_EMPTY));
    }

    finish(violations)
}

fn finish(violations: Vec<FieldViolation>) -> Result<(), DomainError> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(DomainError::validation(violations))
    }
}
