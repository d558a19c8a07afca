//! Price ordering for the product list.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::product::Product;

/// Tri-state price sort selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortOrder {
    /// Nothing chosen yet; existing order is left untouched.
    #[default]
    #[serde(rename = "")]
    Unset,
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl SortOrder {
    /// Value used by the `<select>` options.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Unset => "",
            SortOrder::Ascending => "asc",
            SortOrder::Descending => "desc",
        }
    }

    /// Return `products` ordered by price.
    ///
    /// The sort is stable: products with equal prices keep their current
    /// relative order in both directions. `Unset` returns the input as is.
    pub fn sorted(self, products: &[Product]) -> Vec<Product> {
        let mut sorted = products.to_vec();
        self.sort_in_place(&mut sorted);
        sorted
    }

    pub fn sort_in_place(self, products: &mut [Product]) {
        match self {
            SortOrder::Unset => {}
            SortOrder::Ascending => products.sort_by(|a, b| a.price.total_cmp(&b.price)),
            SortOrder::Descending => products.sort_by(|a, b| b.price.total_cmp(&a.price)),
        }
    }
}

impl core::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Ok(SortOrder::Unset),
            "asc" => Ok(SortOrder::Ascending),
            "desc" => Ok(SortOrder::Descending),
            other => Err(DomainError::UnknownSortOrder(other.to_string())),
        }
    }
}
