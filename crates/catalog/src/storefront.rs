use core::convert::Infallible;

use serde::{Deserialize, Serialize};

use crate::aggregate::{Aggregate, NamedEvent};
use crate::cart::Cart;
use crate::filter::FilterSelection;
use crate::product::Product;
use crate::sort::SortOrder;

/// Where the one catalog load of a component lifetime stands.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "status", content = "message")]
pub enum LoadStatus {
    #[default]
    Pending,
    Loaded,
    Failed(String),
}

/// Aggregate root: the storefront component state.
///
/// Three independent axes (sort, filter, cart) over one fetched product
/// list. No transition can fail.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Storefront {
    products: Vec<Product>,
    sort: SortOrder,
    filter: FilterSelection,
    cart: Cart,
    load: LoadStatus,
    version: u64,
}

impl Storefront {
    pub fn new() -> Self {
        Self::default()
    }

    /// The full product list in its current (possibly sorted) order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort
    }

    pub fn filter(&self) -> &FilterSelection {
        &self.filter
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn load_status(&self) -> &LoadStatus {
        &self.load
    }

    /// Products shown in the grid: the current list restricted by the filter.
    pub fn visible_products(&self) -> Vec<&Product> {
        self.filter.apply(&self.products)
    }

    /// Pure transition: the state after `command`, leaving `self` untouched.
    pub fn transition(&self, command: &StorefrontCommand) -> Storefront {
        let mut next = self.clone();
        next.dispatch(command);
        next
    }

    /// Handle `command` and apply the resulting events in place.
    pub fn dispatch(&mut self, command: &StorefrontCommand) -> Vec<StorefrontEvent> {
        let events = match self.handle(command) {
            Ok(events) => events,
            Err(never) => match never {},
        };
        for event in &events {
            tracing::debug!(event_type = event.event_type(), "storefront event");
            self.apply(event);
        }
        events
    }
}

/// User actions and load completions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StorefrontCommand {
    /// The catalog fetch succeeded.
    ReplaceCatalog(Vec<Product>),
    /// The catalog fetch failed; carries the raw error text.
    RecordLoadFailure(String),
    SelectSort(SortOrder),
    /// A filter button was clicked (`All` or a tag).
    SelectFilter(FilterSelection),
    AddToCart(Product),
}

/// Event: CatalogReplaced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogReplaced {
    /// Already ordered by the sort order active at load time.
    pub products: Vec<Product>,
}

/// Event: CatalogLoadFailed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogLoadFailed {
    pub message: String,
}

/// Event: ProductsSorted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductsSorted {
    pub order: SortOrder,
    pub products: Vec<Product>,
}

/// Event: FilterChanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterChanged {
    pub filter: FilterSelection,
}

/// Event: ItemAddedToCart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemAddedToCart {
    pub product: Product,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StorefrontEvent {
    CatalogReplaced(CatalogReplaced),
    CatalogLoadFailed(CatalogLoadFailed),
    ProductsSorted(ProductsSorted),
    FilterChanged(FilterChanged),
    ItemAddedToCart(ItemAddedToCart),
}

impl NamedEvent for StorefrontEvent {
    fn event_type(&self) -> &'static str {
        match self {
            StorefrontEvent::CatalogReplaced(_) => "storefront.catalog.replaced",
            StorefrontEvent::CatalogLoadFailed(_) => "storefront.catalog.load_failed",
            StorefrontEvent::ProductsSorted(_) => "storefront.products.sorted",
            StorefrontEvent::FilterChanged(_) => "storefront.filter.changed",
            StorefrontEvent::ItemAddedToCart(_) => "storefront.cart.item_added",
        }
    }
}

impl Aggregate for Storefront {
    type Command = StorefrontCommand;
    type Event = StorefrontEvent;
    type Error = Infallible;

    fn version(&self) -> u64 {
        self.version
    }

    fn apply(&mut self, event: &Self::Event) {
        match event {
            StorefrontEvent::CatalogReplaced(e) => {
                self.products = e.products.clone();
                self.load = LoadStatus::Loaded;
            }
            StorefrontEvent::CatalogLoadFailed(e) => {
                self.load = LoadStatus::Failed(e.message.clone());
            }
            StorefrontEvent::ProductsSorted(e) => {
                self.sort = e.order;
                self.products = e.products.clone();
            }
            StorefrontEvent::FilterChanged(e) => {
                self.filter = e.filter.clone();
            }
            StorefrontEvent::ItemAddedToCart(e) => {
                self.cart.add(e.product.clone());
            }
        }

        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        let event = match command {
            StorefrontCommand::ReplaceCatalog(products) => {
                StorefrontEvent::CatalogReplaced(CatalogReplaced {
                    products: self.sort.sorted(products),
                })
            }
            StorefrontCommand::RecordLoadFailure(message) => {
                StorefrontEvent::CatalogLoadFailed(CatalogLoadFailed {
                    message: message.clone(),
                })
            }
            StorefrontCommand::SelectSort(order) => StorefrontEvent::ProductsSorted(ProductsSorted {
                order: *order,
                products: order.sorted(&self.products),
            }),
            StorefrontCommand::SelectFilter(clicked) => StorefrontEvent::FilterChanged(FilterChanged {
                filter: self.filter.toggled(clicked),
            }),
            StorefrontCommand::AddToCart(product) => {
                StorefrontEvent::ItemAddedToCart(ItemAddedToCart {
                    product: product.clone(),
                })
            }
        };

        Ok(vec![event])
    }
}
