//! Render-ready projection of the storefront state.
//!
//! Both the browser component and the text preview draw from this, so the
//! labels, active flags and formatting live in one place.

use serde::Serialize;

use crate::filter::{FilterSelection, FilterTags};
use crate::product::{Product, ProductId};
use crate::sort::SortOrder;
use crate::storefront::{LoadStatus, Storefront};

pub const HEADING: &str = "Product List";
pub const CART_HEADING: &str = "Cart";
pub const SORT_LABEL: &str = "Sort by price : ";
pub const ALL_LABEL: &str = "All";
pub const ADD_TO_CART_LABEL: &str = "Add to cart";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SortOption {
    pub value: &'static str,
    pub label: &'static str,
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterButton {
    pub label: String,
    /// Selection to dispatch when clicked.
    pub selection: FilterSelection,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductCard {
    pub id: ProductId,
    pub name: String,
    pub brand: String,
    pub image: String,
    pub url: String,
    pub price_label: String,
    /// Copy handed to the cart when the button is clicked.
    pub product: Product,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartLine {
    pub id: ProductId,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StorefrontView {
    pub sort_options: Vec<SortOption>,
    pub selected_sort: SortOrder,
    pub filter_buttons: Vec<FilterButton>,
    pub cards: Vec<ProductCard>,
    pub cart_lines: Vec<CartLine>,
    pub load_status: LoadStatus,
}

/// The three `<select>` options: placeholder, ascending, descending.
pub fn sort_options() -> Vec<SortOption> {
    vec![
        SortOption {
            value: SortOrder::Unset.as_str(),
            label: "Sort by price",
            disabled: true,
        },
        SortOption {
            value: SortOrder::Ascending.as_str(),
            label: "Low to high",
            disabled: false,
        },
        SortOption {
            value: SortOrder::Descending.as_str(),
            label: "High to low",
            disabled: false,
        },
    ]
}

/// "All" followed by one button per configured tag.
pub fn filter_buttons(tags: &FilterTags, active: &FilterSelection) -> Vec<FilterButton> {
    let all = FilterButton {
        label: ALL_LABEL.to_string(),
        selection: FilterSelection::All,
        active: *active == FilterSelection::All,
    };

    core::iter::once(all)
        .chain(tags.iter().map(|tag| FilterButton {
            label: tag.to_string(),
            selection: FilterSelection::tag(tag),
            active: active.active_tag() == Some(tag),
        }))
        .collect()
}

impl ProductCard {
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            brand: product.brand.clone(),
            image: product.image.clone(),
            url: product.url.clone(),
            price_label: product.price.to_string(),
            product: product.clone(),
        }
    }
}

impl CartLine {
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            text: format!("{}-{}-{}", product.brand, product.name, product.price),
        }
    }
}

impl StorefrontView {
    pub fn build(state: &Storefront, tags: &FilterTags) -> Self {
        Self {
            sort_options: sort_options(),
            selected_sort: state.sort_order(),
            filter_buttons: filter_buttons(tags, state.filter()),
            cards: state
                .visible_products()
                .into_iter()
                .map(ProductCard::from_product)
                .collect(),
            cart_lines: state.cart().items().iter().map(CartLine::from_product).collect(),
            load_status: state.load_status().clone(),
        }
    }
}
