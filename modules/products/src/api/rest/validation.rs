//! Request validation for the products REST API.
//!
//! Bodies are taken as raw JSON so every failing field can be reported in one
//! 400 response instead of stopping at the first deserialization error.

use regex::{Regex, RegexBuilder};
use rest_problem::FieldViolation;
use serde_json::{Map, Value};

use crate::domain::model::ProductFilter;
use crate::domain::validation::{
    CATEGORY_INVALID, DESCRIPTION_EMPTY, DESCRIPTION_REQUIRED, IMAGE_URL_INVALID, NAME_EMPTY,
    NAME_REQUIRED, PRICE_INVALID, STOCK_INVALID, is_blank, is_valid_price,
};

use super::dto::{CreateProductReq, ListProductsQuery, UpdateProductReq};

type Violations = Vec<FieldViolation>;

/// Keeps patterns from user input to a bounded compiled size.
const NAME_PATTERN_SIZE_LIMIT: usize = 1 << 16;

fn as_object(body: &Value) -> Result<&Map<String, Value>, Violations> {
    body.as_object().ok_or_else(|| {
        vec![FieldViolation::new(
            "body",
            "Request body must be a JSON object",
        )]
    })
}

fn parse_text(value: &Value) -> Option<String> {
    value
        .as_str()
        .filter(|s| !is_blank(s))
        .map(str::to_owned)
}

fn parse_price(value: &Value) -> Option<f64> {
    let price = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    is_valid_price(price).then_some(price)
}

fn parse_stock(value: &Value) -> Option<u32> {
    value.as_u64().and_then(|n| u32::try_from(n).ok())
}

/// Absent and `null` mean "not given"; anything else must be valid.
fn optional<T>(
    obj: &Map<String, Value>,
    key: &str,
    parse: impl Fn(&Value) -> Option<T>,
    message: &str,
    violations: &mut Violations,
) -> Option<T> {
    match obj.get(key) {
        None | Some(Value::Null) => None,
        Some(value) => {
            let parsed = parse(value);
            if parsed.is_none() {
                violations.push(FieldViolation::new(key, message));
            }
            parsed
        }
    }
}

/// Present keys must be valid, `null` included.
fn present<T>(
    obj: &Map<String, Value>,
    key: &str,
    parse: impl Fn(&Value) -> Option<T>,
    message: &str,
    violations: &mut Violations,
) -> Option<T> {
    let value = obj.get(key)?;
    let parsed = parse(value);
    if parsed.is_none() {
        violations.push(FieldViolation::new(key, message));
    }
    parsed
}

fn required<T>(
    obj: &Map<String, Value>,
    key: &str,
    parse: impl Fn(&Value) -> Option<T>,
    message: &str,
    violations: &mut Violations,
) -> Option<T> {
    let parsed = obj.get(key).and_then(parse);
    if parsed.is_none() {
        violations.push(FieldViolation::new(key, message));
    }
    parsed
}

fn parse_string(value: &Value) -> Option<String> {
    value.as_str().map(str::to_owned)
}

/// Validate a `POST /products` body.
///
/// # Errors
/// Every failing field, in request-field order.
pub fn parse_create(body: &Value) -> Result<CreateProductReq, Violations> {
    let obj = as_object(body)?;
    let mut violations = Vec::new();

    let name = required(obj, "name", parse_text, NAME_REQUIRED, &mut violations);
    let price = required(obj, "price", parse_price, PRICE_INVALID, &mut violations);
    let description = required(
        obj,
        "description",
        parse_text,
        DESCRIPTION_REQUIRED,
        &mut violations,
    );
    let category = optional(obj, "category", parse_string, CATEGORY_INVALID, &mut violations);
    let stock = optional(obj, "stock", parse_stock, STOCK_INVALID, &mut violations);
    let image_url = optional(
        obj,
        "imageUrl",
        parse_string,
        IMAGE_URL_INVALID,
        &mut violations,
    );

    match (name, price, description) {
        (Some(name), Some(price), Some(description)) if violations.is_empty() => {
            Ok(CreateProductReq {
                name,
                description,
                price,
                category,
                stock,
                image_url,
            })
        }
        _ => Err(violations),
    }
}

/// Validate a `PUT /products/{id}` body. Unknown keys are ignored.
///
/// # Errors
/// Every failing field, in request-field order.
pub fn parse_update(body: &Value) -> Result<UpdateProductReq, Violations> {
    let obj = as_object(body)?;
    let mut violations = Vec::new();

    let req = UpdateProductReq {
        name: present(obj, "name", parse_text, NAME_EMPTY, &mut violations),
        price: present(obj, "price", parse_price, PRICE_INVALID, &mut violations),
        description: present(
            obj,
            "description",
            parse_text,
            DESCRIPTION_EMPTY,
            &mut violations,
        ),
        category: optional(
            obj,
            "category",
            parse_string,
            CATEGORY_INVALID,
            &mut violations,
        ),
        stock: optional(obj, "stock", parse_stock, STOCK_INVALID, &mut violations),
        image_url: optional(
            obj,
            "imageUrl",
            parse_string,
            IMAGE_URL_INVALID,
            &mut violations,
        ),
    };

    if violations.is_empty() {
        Ok(req)
    } else {
        Err(violations)
    }
}

fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|s| !s.is_empty())
}

fn bound(raw: Option<&String>, field: &str, violations: &mut Violations) -> Option<f64> {
    let raw = non_empty(raw)?;
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Some(v),
        _ => {
            violations.push(FieldViolation::new(
                field,
                format!("{field} must be a valid number"),
            ));
            None
        }
    }
}

fn name_pattern(raw: Option<&String>, violations: &mut Violations) -> Option<Regex> {
    let raw = non_empty(raw)?;
    match RegexBuilder::new(raw)
        .case_insensitive(true)
        .size_limit(NAME_PATTERN_SIZE_LIMIT)
        .build()
    {
        Ok(re) => Some(re),
        Err(_) => {
            violations.push(FieldViolation::new(
                "name",
                "name must be a valid regular expression",
            ));
            None
        }
    }
}

/// Turn `GET /products` query parameters into a filter.
///
/// # Errors
/// Unparseable price bounds or name pattern.
pub fn parse_filter(query: &ListProductsQuery) -> Result<ProductFilter, Violations> {
    let mut violations = Vec::new();

    let filter = ProductFilter {
        min_price: bound(query.min_price.as_ref(), "minPrice", &mut violations),
        max_price: bound(query.max_price.as_ref(), "maxPrice", &mut violations),
        name: name_pattern(query.name.as_ref(), &mut violations),
    };

    if violations.is_empty() {
        Ok(filter)
    } else {
        Err(violations)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use serde_json::json;

    fn messages(v: &Violations) -> Vec<(&str, &str)> {
        v.iter()
            .map(|v| (v.field.as_str(), v.message.as_str()))
            .collect()
    }

    #[test]
    fn create_collects_all_missing_fields() {
        let err = parse_create(&json!({})).unwrap_err();
        assert_eq!(
            messages(&err),
            [
                ("name", "Name is required"),
                ("price", "Price must be a valid number"),
                ("description", "Description is required"),
            ]
        );
    }

    #[test]
    fn create_accepts_numeric_string_price() {
        let req = parse_create(&json!({
            "name": "Lamp",
            "description": "A desk lamp",
            "price": "12.50",
            "stock": 3,
            "imageUrl": "https://img.example/lamp.png"
        }))
        .unwrap();

        assert!((req.price - 12.5).abs() < f64::EPSILON);
        assert_eq!(req.stock, Some(3));
        assert_eq!(req.image_url.as_deref(), Some("https://img.example/lamp.png"));
        assert_eq!(req.category, None);
    }

    #[test]
    fn create_rejects_bad_values() {
        let err = parse_create(&json!({
            "name": "",
            "description": "ok",
            "price": -1,
            "stock": -2,
            "category": 7
        }))
        .unwrap_err();

        assert_eq!(
            messages(&err),
            [
                ("name", "Name is required"),
                ("price", "Price must be a valid number"),
                ("category", "Category must be a string"),
                ("stock", "Stock must be a non-negative integer"),
            ]
        );
    }

    #[test]
    fn non_object_body_is_rejected() {
        let err = parse_create(&json!([1, 2])).unwrap_err();
        assert_eq!(err[0].field, "body");
        assert!(parse_update(&json!("x")).is_err());
    }

    #[test]
    fn update_fields_are_optional_but_checked_when_present() {
        let req = parse_update(&json!({ "price": 3, "unknown": true })).unwrap();
        assert_eq!(req.price, Some(3.0));
        assert_eq!(req.name, None);

        let err = parse_update(&json!({
            "name": "  ",
            "description": null,
            "price": "abc"
        }))
        .unwrap_err();
        assert_eq!(
            messages(&err),
            [
                ("name", "Name cannot be empty"),
                ("price", "Price must be a valid number"),
                ("description", "Description cannot be empty"),
            ]
        );
    }

    #[test]
    fn filter_ignores_empty_params() {
        let filter = parse_filter(&ListProductsQuery {
            min_price: Some(String::new()),
            max_price: None,
            name: Some(String::new()),
        })
        .unwrap();
        assert!(filter.min_price.is_none());
        assert!(filter.name.is_none());
    }

    #[test]
    fn filter_reports_bad_params() {
        let err = parse_filter(&ListProductsQuery {
            min_price: Some("cheap".to_owned()),
            max_price: Some("10".to_owned()),
            name: Some("(".to_owned()),
        })
        .unwrap_err();
        assert_eq!(
            messages(&err),
            [
                ("minPrice", "minPrice must be a valid number"),
                ("name", "name must be a valid regular expression"),
            ]
        );
    }
}
