use regex::Regex;
use time::OffsetDateTime;
use uuid::Uuid;

/// A stored product.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub stock: u32,
    pub image_url: String,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

/// Data for a product that does not exist yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub stock: u32,
    pub image_url: String,
}

/// Partial update; `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub stock: Option<u32>,
    pub image_url: Option<String>,
}

impl ProductPatch {
    /// Apply every present field to `product`, leaving timestamps alone.
    pub fn apply_to(self, product: &mut Product) {
        if let Some(name) = self.name {
            product.name = name;
        }
        if let Some(description) = self.description {
            product.description = description;
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(category) = self.category {
            product.category = category;
        }
        if let Some(stock) = self.stock {
            product.stock = stock;
        }
        if let Some(image_url) = self.image_url {
            product.image_url = image_url;
        }
    }
}

/// Listing filter; every present criterion must hold.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    /// Matched against `name`; built case-insensitive by the caller.
    pub name: Option<Regex>,
}

impl ProductFilter {
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        if self.min_price.is_some_and(|min| product.price < min) {
            return false;
        }
        if self.max_price.is_some_and(|max| product.price > max) {
            return false;
        }
        self.name
            .as_ref()
            .is_none_or(|re| re.is_match(&product.name))
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use regex::RegexBuilder;

    fn product(name: &str, price: f64) -> Product {
        let now = OffsetDateTime::UNIX_EPOCH;
        Product {
            id: Uuid::nil(),
            name: name.to_owned(),
            description: "d".to_owned(),
            price,
            category: String::new(),
            stock: 0,
            image_url: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn empty_filter_matches_everything() {
        assert!(ProductFilter::default().matches(&product("x", 0.0)));
    }

    #[test]
    fn price_bounds_are_inclusive() {
        let filter = ProductFilter {
            min_price: Some(10.0),
            max_price: Some(20.0),
            name: None,
        };
        assert!(filter.matches(&product("a", 10.0)));
        assert!(filter.matches(&product("a", 20.0)));
        assert!(!filter.matches(&product("a", 9.99)));
        assert!(!filter.matches(&product("a", 20.01)));
    }

    #[test]
    fn name_filter_uses_the_given_pattern() {
        let filter = ProductFilter {
            name: Some(RegexBuilder::new("lamp").case_insensitive(true).build().unwrap()),
            ..ProductFilter::default()
        };
        assert!(filter.matches(&product("Desk LAMP", 1.0)));
        assert!(!filter.matches(&product("Chair", 1.0)));
    }

    #[test]
    fn patch_touches_only_present_fields() {
        let mut p = product("old", 5.0);
        ProductPatch {
            name: Some("new".to_owned()),
            stock: Some(3),
            ..ProductPatch::default()
        }
        .apply_to(&mut p);

        assert_eq!(p.name, "new");
        assert_eq!(p.stock, 3);
        assert_eq!(p.description, "d");
        assert!((p.price - 5.0).abs() < f64::EPSILON);
    }
}
