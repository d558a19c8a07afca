//! Text rendering of the storefront, for the native preview binary.

use std::fmt;

use shopfront_catalog::view::{ADD_TO_CART_LABEL, ALL_LABEL, CART_HEADING, HEADING, SORT_LABEL};
use shopfront_catalog::{
    FilterSelection, LoadStatus, ProductId, SortOrder, Storefront, StorefrontCommand,
    StorefrontView,
};
use shopfront_loader::FailureNotifier;
use thiserror::Error;

/// A user interaction replayed against the storefront.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewAction {
    Sort(SortOrder),
    /// Click on a filter button, matched exactly (`"All"` clears).
    Tag(String),
    /// Click on a card's add-to-cart button.
    Add(ProductId),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PreviewError {
    #[error("no product with id {0} is shown in the grid")]
    ProductNotShown(ProductId),
}

impl PreviewAction {
    /// Translate into a storefront command against the current state.
    ///
    /// Add-to-cart only reaches products that are visible, like a real click.
    pub fn to_command(&self, state: &Storefront) -> Result<StorefrontCommand, PreviewError> {
        match self {
            PreviewAction::Sort(order) => Ok(StorefrontCommand::SelectSort(*order)),
            PreviewAction::Tag(tag) if tag == ALL_LABEL => {
                Ok(StorefrontCommand::SelectFilter(FilterSelection::All))
            }
            PreviewAction::Tag(tag) => Ok(StorefrontCommand::SelectFilter(FilterSelection::tag(
                tag.as_str(),
            ))),
            PreviewAction::Add(id) => state
                .visible_products()
                .into_iter()
                .find(|p| &p.id == id)
                .map(|p| StorefrontCommand::AddToCart(p.clone()))
                .ok_or_else(|| PreviewError::ProductNotShown(id.clone())),
        }
    }
}

/// Apply `actions` in order.
pub fn replay(state: &mut Storefront, actions: &[PreviewAction]) -> Result<(), PreviewError> {
    for action in actions {
        let command = action.to_command(state)?;
        state.dispatch(&command);
    }
    Ok(())
}

/// Render the view as plain text. Active filter and selected sort are bracketed.
pub fn render(view: &StorefrontView) -> String {
    let mut out = String::new();
    write_view(&mut out, view).expect("writing to a String cannot fail");
    out
}

fn write_view(out: &mut impl fmt::Write, view: &StorefrontView) -> fmt::Result {
    writeln!(out, "{HEADING}")?;
    writeln!(out)?;

    let sort_label = view
        .sort_options
        .iter()
        .find(|o| o.value == view.selected_sort.as_str())
        .map(|o| o.label)
        .unwrap_or_default();
    writeln!(out, "{SORT_LABEL}[{sort_label}]")?;

    let buttons: Vec<String> = view
        .filter_buttons
        .iter()
        .map(|b| {
            if b.active {
                format!("[{}]", b.label)
            } else {
                b.label.clone()
            }
        })
        .collect();
    writeln!(out, "{}", buttons.join(" "))?;
    writeln!(out)?;

    match &view.load_status {
        LoadStatus::Pending => writeln!(out, "Loading...")?,
        LoadStatus::Failed(message) => writeln!(out, "Catalog unavailable: {message}")?,
        LoadStatus::Loaded => {
            for card in &view.cards {
                writeln!(
                    out,
                    "- {} | {} | {} | {} [{ADD_TO_CART_LABEL}]",
                    card.name, card.brand, card.price_label, card.image
                )?;
            }
        }
    }

    writeln!(out)?;
    writeln!(out, "{CART_HEADING}")?;
    for line in &view.cart_lines {
        writeln!(out, "{}", line.text)?;
    }
    Ok(())
}

/// Prints load failures to stderr (the terminal stand-in for an alert).
#[derive(Debug, Default)]
pub struct StderrNotifier;

impl FailureNotifier for StderrNotifier {
    fn notify(&self, message: &str) {
        eprintln!("{message}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopfront_catalog::{FilterTags, Price, Product};

    fn catalog() -> Vec<Product> {
        vec![
            Product {
                id: ProductId::from("1"),
                name: "A".to_string(),
                url: "/a".to_string(),
                image: "/a.png".to_string(),
                brand: "Acme".to_string(),
                price: Price(10.0),
                tags: vec!["book".to_string()],
            },
            Product {
                id: ProductId::from("2"),
                name: "B".to_string(),
                url: "/b".to_string(),
                image: "/b.png".to_string(),
                brand: "Bolt".to_string(),
                price: Price(5.0),
                tags: vec!["gel".to_string()],
            },
        ]
    }

    fn loaded() -> Storefront {
        Storefront::new().transition(&StorefrontCommand::ReplaceCatalog(catalog()))
    }

    #[test]
    fn renders_sorted_filtered_grid_and_cart() {
        let mut state = loaded();
        replay(
            &mut state,
            &[
                PreviewAction::Sort(SortOrder::Ascending),
                PreviewAction::Add(ProductId::from("1")),
                PreviewAction::Tag("book".to_string()),
            ],
        )
        .unwrap();

        let text = render(&StorefrontView::build(&state, &FilterTags::default()));

        assert!(text.starts_with("Product List\n"));
        assert!(text.contains("Sort by price : [Low to high]"));
        assert!(text.contains("All toothpaste discount gel cookies creme comics [book]"));
        assert!(text.contains("- A | Acme | $10 | /a.png [Add to cart]"));
        assert!(!text.contains("- B |"));
        assert!(text.ends_with("Cart\nAcme-A-$10\n"));
    }

    #[test]
    fn all_clears_filter() {
        let mut state = loaded();
        replay(
            &mut state,
            &[
                PreviewAction::Tag("gel".to_string()),
                PreviewAction::Tag("All".to_string()),
            ],
        )
        .unwrap();
        assert_eq!(state.filter(), &FilterSelection::All);
    }

    #[test]
    fn lowercase_all_is_an_ordinary_tag() {
        let tags = FilterTags::new(vec!["all".to_string(), "book".to_string()]).unwrap();
        let mut state = loaded();
        replay(&mut state, &[PreviewAction::Tag("all".to_string())]).unwrap();

        assert_eq!(state.filter(), &FilterSelection::tag("all"));
        assert!(state.visible_products().is_empty());

        let text = render(&StorefrontView::build(&state, &tags));
        assert!(text.contains("All [all] book"));
    }

    #[test]
    fn write_view_reports_writer_failure() {
        struct Refusing;
        impl fmt::Write for Refusing {
            fn write_str(&mut self, _: &str) -> fmt::Result {
                Err(fmt::Error)
            }
        }

        let view = StorefrontView::build(&loaded(), &FilterTags::default());
        assert_eq!(write_view(&mut Refusing, &view), Err(fmt::Error));
    }

    #[test]
    fn cannot_add_hidden_product() {
        let mut state = loaded();
        let err = replay(
            &mut state,
            &[
                PreviewAction::Tag("gel".to_string()),
                PreviewAction::Add(ProductId::from("1")),
            ],
        )
        .unwrap_err();
        assert_eq!(err, PreviewError::ProductNotShown(ProductId::from("1")));
        assert!(state.cart().is_empty());
    }

    #[test]
    fn failed_load_renders_message_instead_of_grid() {
        let state = Storefront::new().transition(&StorefrontCommand::RecordLoadFailure(
            "network error: refused".to_string(),
        ));
        let text = render(&StorefrontView::build(&state, &FilterTags::default()));
        assert!(text.contains("Catalog unavailable: network error: refused"));
        assert!(text.contains("Sort by price : [Sort by price]"));
    }
}
