use serde::{Deserialize, Serialize};

/// Configuration for the products module.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProductsConfig {
    /// Longest accepted product name, in characters.
    pub max_name_length: usize,
}

impl Default for ProductsConfig {
    fn default() -> Self {
        Self {
            max_name_length: 200,
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let cfg: ProductsConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg.max_name_length, 200);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let res: Result<ProductsConfig, _> = serde_json::from_str(r#"{"max_name_len": 3}"#);
        assert!(res.is_err());
    }
}
