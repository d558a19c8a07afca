//! The product list component.

use leptos::*;

use shopfront_catalog::view::{
    ADD_TO_CART_LABEL, CART_HEADING, HEADING, SORT_LABEL, sort_options,
};
use shopfront_catalog::{LoadStatus, SortOrder, Storefront, StorefrontCommand, StorefrontView};
use shopfront_loader::{
    CatalogLoader, MountGeneration, ResolvedSource, Settings, Url, resolve_source,
};

use crate::frontend::notifier::AlertNotifier;

/// Main application component.
#[component]
pub fn App() -> impl IntoView {
    view! { <ProductList settings=Settings::default()/> }
}

fn page_url() -> Option<Url> {
    let href = web_sys::window()?.location().href().ok()?;
    Url::parse(&href).ok()
}

/// Sort select, filter buttons, product grid and cart over one storefront state.
///
/// The catalog is fetched once on mount. Teardown advances the mount
/// generation, so a fetch that completes afterwards touches nothing.
#[component]
pub fn ProductList(settings: Settings) -> impl IntoView {
    let state = create_rw_signal(Storefront::new());
    let dispatch = move |command: StorefrontCommand| {
        state.update(|s| {
            s.dispatch(&command);
        });
    };

    let mount = MountGeneration::new();
    {
        let mount = mount.clone();
        on_cleanup(move || mount.teardown());
    }

    let catalog_source = settings.catalog_source.clone();
    spawn_local(async move {
        let source = resolve_source(&catalog_source, page_url().as_ref())
            .and_then(ResolvedSource::from_location);
        let loader = CatalogLoader::resolving(source, mount);
        if let Some(command) = loader.run(&AlertNotifier).await {
            dispatch(command);
        }
    });

    let tags = settings.filter_tags;
    let view_model = create_memo(move |_| state.with(|s| StorefrontView::build(s, &tags)));

    view! {
        <div class="product-list">
            <h3>{HEADING}</h3>

            <div class="product-sort">
                <label>{SORT_LABEL}</label>
                <select
                    prop:value=move || view_model.with(|v| v.selected_sort.as_str())
                    on:change=move |ev| {
                        if let Ok(order) = event_target_value(&ev).parse::<SortOrder>() {
                            dispatch(StorefrontCommand::SelectSort(order));
                        }
                    }
                >
                    {sort_options()
                        .into_iter()
                        .map(|option| {
                            view! {
                                <option value=option.value disabled=option.disabled>
                                    {option.label}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>

            <div class="filter-tab">
                {move || {
                    view_model
                        .with(|v| v.filter_buttons.clone())
                        .into_iter()
                        .map(|button| {
                            let class = if button.active { "tab active" } else { "tab" };
                            let selection = button.selection;
                            view! {
                                <button
                                    class=class
                                    on:click=move |_| {
                                        dispatch(StorefrontCommand::SelectFilter(selection.clone()))
                                    }
                                >
                                    {button.label}
                                </button>
                            }
                        })
                        .collect_view()
                }}
            </div>

            {move || {
                matches!(view_model.with(|v| v.load_status.clone()), LoadStatus::Pending)
                    .then(|| view! { <p class="loading">"Loading..."</p> })
            }}

            <div class="product-grid">
                {move || {
                    view_model
                        .with(|v| v.cards.clone())
                        .into_iter()
                        .map(|card| {
                            let product = card.product;
                            let alt = card.name.clone();
                            view! {
                                <div class="product-card">
                                    <img src=card.image alt=alt/>
                                    <h4>{card.name}</h4>
                                    <p>{card.brand}</p>
                                    <p>{card.price_label}</p>
                                    <button on:click=move |_| {
                                        dispatch(StorefrontCommand::AddToCart(product.clone()))
                                    }>
                                        {ADD_TO_CART_LABEL}
                                    </button>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>

            <div class="cart">
                <h3>{CART_HEADING}</h3>
                {move || {
                    view_model
                        .with(|v| v.cart_lines.clone())
                        .into_iter()
                        .map(|line| view! { <p id=line.id.to_string()>{line.text}</p> })
                        .collect_view()
                }}
            </div>
        </div>
    }
}
