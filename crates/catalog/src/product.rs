//! Product entries as delivered by the catalog resource.

use serde::{Deserialize, Serialize};

/// Product identifier (opaque string from the catalog source).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Unit price as published by the catalog (assumed non-negative, not validated).
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(pub f64);

impl Price {
    pub fn amount(self) -> f64 {
        self.0
    }

    /// Total order over prices, used for sorting.
    pub fn total_cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Renders as `$` followed by the number the way a browser prints it:
/// shortest round-trip digits, `-0` as `0`, exponent form outside
/// `[1e-6, 1e21)` (`$10`, `$9.5`, `$1e+21`, `$1e-7`).
impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let amount = self.0;
        f.write_str("$")?;

        if amount == 0.0 {
            return f.write_str("0");
        }
        if amount.is_nan() {
            return f.write_str("NaN");
        }
        if amount.is_infinite() {
            return f.write_str(if amount > 0.0 { "Infinity" } else { "-Infinity" });
        }

        let magnitude = amount.abs();
        if (1e-6..1e21).contains(&magnitude) {
            return write!(f, "{amount}");
        }

        let scientific = format!("{amount:e}");
        match scientific.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                write!(f, "{mantissa}e+{exponent}")
            }
            _ => f.write_str(&scientific),
        }
    }
}

/// A catalog entry. Immutable once fetched; the cart stores copies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub url: String,
    pub image: String,
    pub brand: String,
    pub price: Price,
    pub tags: Vec<String>,
}

impl Product {
    /// Membership test used by the tag filter.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Decode a catalog body (a JSON array of products).
pub fn parse_catalog(body: &str) -> Result<Vec<Product>, serde_json::Error> {
    serde_json::from_str(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_catalog_body_with_original_field_names() {
        let body = r#"[
            {"id":"1","name":"A","url":"/a","image":"a.png","brand":"Acme","price":10,"tags":["book"]},
            {"id":"2","name":"B","url":"/b","image":"b.png","brand":"Bolt","price":5.5,"tags":["gel","discount"]}
        ]"#;

        let products = parse_catalog(body).unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].id, ProductId::from("1"));
        assert_eq!(products[0].price, Price(10.0));
        assert!(products[1].has_tag("discount"));
        assert!(!products[1].has_tag("book"));
    }

    #[test]
    fn rejects_non_array_body() {
        assert!(parse_catalog(r#"{"id":"1"}"#).is_err());
        assert!(parse_catalog("<html>not found</html>").is_err());
    }

    #[test]
    fn price_renders_like_a_plain_number() {
        assert_eq!(Price(10.0).to_string(), "$10");
        assert_eq!(Price(9.5).to_string(), "$9.5");
        assert_eq!(Price(0.99).to_string(), "$0.99");
        assert_eq!(Price(0.000001).to_string(), "$0.000001");
        assert_eq!(Price(123456789012345680000.0).to_string(), "$123456789012345680000");
    }

    #[test]
    fn price_edge_values_render_like_a_browser() {
        assert_eq!(Price(-0.0).to_string(), "$0");
        assert_eq!(Price(0.0).to_string(), "$0");
        assert_eq!(Price(1e21).to_string(), "$1e+21");
        assert_eq!(Price(1.5e21).to_string(), "$1.5e+21");
        assert_eq!(Price(-2e22).to_string(), "$-2e+22");
        assert_eq!(Price(1e-7).to_string(), "$1e-7");
        assert_eq!(Price(2.5e-8).to_string(), "$2.5e-8");
        assert_eq!(Price(f64::INFINITY).to_string(), "$Infinity");
        assert_eq!(Price(f64::NEG_INFINITY).to_string(), "$-Infinity");
        assert_eq!(Price(f64::NAN).to_string(), "$NaN");
    }
}
