use crate::api::{ApiError, CatalogClient};
use crate::config::StoreConfig;
use crate::Route;
use digistore_common::{CartService, LoadState, SessionCart};
use digistore_ui::stores::{CatalogLoad, HomeState, HomeStateStoreExt};
use digistore_ui::{HomeView, Product};
use dioxus::prelude::*;
use tracing::{debug, error, info};

/// Turn a settled request into display state, logging failures.
///
/// Errors stop here: the view gets a `Failed` state, nothing is rethrown.
fn settle<T>(source: &str, outcome: Result<Vec<T>, ApiError>) -> CatalogLoad<T> {
    match outcome {
        Ok(items) => {
            debug!("Loaded {} {source}", items.len());
            LoadState::Ready(items)
        }
        Err(e) => {
            error!("Error fetching {source}: {e}");
            LoadState::Failed(e.to_string())
        }
    }
}

async fn load_products(client: CatalogClient, per_page: u32, state: Store<HomeState>) {
    state.products().set(LoadState::Loading);
    let outcome = client.fetch_products(per_page).await;
    state.products().set(settle("products", outcome));
}

async fn load_categories(client: CatalogClient, state: Store<HomeState>) {
    state.categories().set(LoadState::Loading);
    let outcome = client.fetch_categories().await;
    state.categories().set(settle("categories", outcome));
}

/// One unit per click.
fn add_to_cart(cart: &mut impl CartService, product: &Product) {
    info!("Adding to cart: {} (id {})", product.name, product.id);
    cart.add(product.id, 1);
}

#[component]
pub fn Home() -> Element {
    let config: StoreConfig = use_context();
    let mut cart: Signal<SessionCart> = use_context();
    let state = use_store(HomeState::default);

    // Both requests start on mount and run independently. The tasks belong to
    // this scope and are dropped with it.
    use_hook(|| {
        let client = CatalogClient::new(&config);
        spawn(load_products(
            client.clone(),
            config.featured_per_page,
            state,
        ));
        spawn(load_categories(client, state));
    });

    rsx! {
        HomeView {
            state,
            placeholder_count: config.featured_per_page as usize,
            on_add_to_cart: move |product: Product| add_to_cart(&mut *cart.write(), &product),
            on_browse_products: move |_| {
                navigator().push(Route::Products {});
            },
        }
    }
}
