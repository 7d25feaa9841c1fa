//! Catalog page: product grid, buy action, and the admin entry point for
//! adding products.
//!
//! SYSTEM CONTEXT
//! ==============
//! Fetches on mount. Buying posts a single-unit order and acknowledges with a
//! blocking alert; a failed order is reported inline. The product list itself
//! is not refreshed.

#[cfg(test)]
#[path = "products_test.rs"]
mod products_test;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::product_card::ProductCard;
use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::net::types::Product;
use crate::routes::AppRoute;
use crate::state::claims::Role;
use crate::state::listing::Listing;
use crate::state::session::AppSession;
use crate::util::dialog::alert;

use super::authorized;

pub(crate) const ORDER_PLACED: &str = "Order placed!";

pub(crate) fn order_failed_message(product_id: u64, err: &ApiError) -> String {
    format!("Could not order product {product_id}: {err}")
}

#[component]
pub fn ProductsPage(session: RwSignal<AppSession>, api: ApiClient) -> impl IntoView {
    let products = RwSignal::new(Listing::<Product>::default());
    let order_error = RwSignal::new(None::<String>);
    let can_add = move || session.with(|store| store.role().is_some_and(Role::can_manage_catalog));

    load_products(products, authorized(&api, session));

    let on_buy = Callback::new(move |product_id: u64| buy(authorized(&api, session), product_id, order_error));

    view! {
        <div class="products-page">
            <div class="products-page__header">
                <h1>"Products"</h1>
                <Show when=can_add>
                    <a class="products-page__add" href=AppRoute::NewProduct.path()>"+ Add"</a>
                </Show>
            </div>
            <Show when=move || order_error.get().is_some()>
                <p class="page-error">{move || order_error.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || products.with(|l| l.loading && l.is_empty())>
                <p class="page-status">"Loading..."</p>
            </Show>
            <Show when=move || products.with(|l| l.error.is_some())>
                <p class="page-error">{move || products.with(|l| l.error.clone().unwrap_or_default())}</p>
            </Show>
            <Show when=move || products.with(Listing::shows_empty_state)>
                <p class="page-status">"No products yet."</p>
            </Show>
            <div class="product-grid">
                <For
                    each=move || products.with(|l| l.items.clone())
                    key=|product| product.id
                    children=move |product: Product| view! { <ProductCard product on_buy/> }
                />
            </div>
        </div>
    }
}

fn load_products(products: RwSignal<Listing<Product>>, client: ApiClient) {
    let Some(ticket) = products.try_update(Listing::begin) else {
        return;
    };
    spawn_local(async move {
        let result = client.list_products().await;
        if let Err(err) = &result {
            log::warn!("product fetch failed: {err}");
        }
        products.try_update(|l| l.finish(ticket, result));
    });
}

fn buy(client: ApiClient, product_id: u64, order_error: RwSignal<Option<String>>) {
    order_error.set(None);
    spawn_local(async move {
        match client.place_order(product_id).await {
            Ok(()) => {
                log::info!("order placed: product={product_id}");
                alert(ORDER_PLACED);
            }
            Err(err) => {
                log::warn!("order failed: product={product_id} err={err}");
                order_error.try_set(Some(order_failed_message(product_id, &err)));
            }
        }
    });
}
