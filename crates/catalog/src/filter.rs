//! Tag filter: a fixed list of candidate tags and the active selection.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::product::Product;

/// Tags offered as filter buttons when nothing else is configured.
pub const DEFAULT_FILTER_TAGS: [&str; 7] = [
    "toothpaste",
    "discount",
    "gel",
    "cookies",
    "creme",
    "comics",
    "book",
];

/// Ordered list of filter tags offered to the user.
///
/// This is configuration data, not derived from the catalog: a tag may match
/// no product, and product tags outside this list never get a button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct FilterTags(Vec<String>);

impl FilterTags {
    /// Build a tag list, rejecting blank labels and duplicates.
    pub fn new<I, S>(tags: I) -> DomainResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut out: Vec<String> = Vec::new();
        for tag in tags {
            let tag = tag.into().trim().to_string();
            if tag.is_empty() {
                return Err(DomainError::validation("filter tag must not be empty"));
            }
            if out.contains(&tag) {
                return Err(DomainError::validation(format!(
                    "duplicate filter tag: {tag}"
                )));
            }
            out.push(tag);
        }
        Ok(Self(out))
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.0.iter().any(|t| t == tag)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for FilterTags {
    fn default() -> Self {
        Self(DEFAULT_FILTER_TAGS.iter().map(|t| t.to_string()).collect())
    }
}

impl TryFrom<Vec<String>> for FilterTags {
    type Error = DomainError;

    fn try_from(value: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<FilterTags> for Vec<String> {
    fn from(value: FilterTags) -> Self {
        value.0
    }
}

/// Currently applied filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "tag")]
pub enum FilterSelection {
    #[default]
    All,
    Tag(String),
}

impl FilterSelection {
    pub fn tag(tag: impl Into<String>) -> Self {
        Self::Tag(tag.into())
    }

    /// Result of clicking `clicked` while `self` is active.
    ///
    /// Clicking the active tag goes back to `All`; clicking another tag
    /// replaces it; clicking `All` always clears.
    pub fn toggled(&self, clicked: &FilterSelection) -> FilterSelection {
        match clicked {
            FilterSelection::All => FilterSelection::All,
            FilterSelection::Tag(_) if clicked == self => FilterSelection::All,
            FilterSelection::Tag(tag) => FilterSelection::Tag(tag.clone()),
        }
    }

    pub fn active_tag(&self) -> Option<&str> {
        match self {
            FilterSelection::All => None,
            FilterSelection::Tag(tag) => Some(tag),
        }
    }

    pub fn matches(&self, product: &Product) -> bool {
        match self {
            FilterSelection::All => true,
            FilterSelection::Tag(tag) => product.has_tag(tag),
        }
    }

    /// Products passing the filter, in their current order.
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        products.iter().filter(|p| self.matches(p)).collect()
    }
}
