//! `shopfront-catalog`: storefront domain.
//!
//! Product model, price sorting, tag filtering, the append-only cart and the
//! storefront aggregate that ties them together. Pure, deterministic logic
//! only (no IO, no HTTP, no rendering toolkit).

pub mod aggregate;
pub mod cart;
pub mod error;
pub mod filter;
pub mod product;
pub mod sort;
pub mod storefront;
pub mod view;

pub use aggregate::{Aggregate, NamedEvent};
pub use cart::Cart;
pub use error::{DomainError, DomainResult};
pub use filter::{DEFAULT_FILTER_TAGS, FilterSelection, FilterTags};
pub use product::{Price, Product, ProductId, parse_catalog};
pub use sort::SortOrder;
pub use storefront::{
    CatalogLoadFailed, CatalogReplaced, FilterChanged, ItemAddedToCart, LoadStatus,
    ProductsSorted, Storefront, StorefrontCommand, StorefrontEvent,
};
pub use view::{CartLine, FilterButton, ProductCard, SortOption, StorefrontView};
