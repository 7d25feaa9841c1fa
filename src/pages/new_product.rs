//! Admin form for adding a catalog product.
//!
//! Only reachable through the route guard's admin branch.

#[cfg(test)]
#[path = "new_product_test.rs"]
mod new_product_test;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::ApiClient;
use crate::net::types::NewProduct;
use crate::routes::AppRoute;
use crate::state::session::AppSession;

use super::authorized;

/// Require a non-blank name and a finite, non-negative price.
pub(crate) fn validate_new_product(name: &str, price: &str) -> Result<NewProduct, &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Enter a product name.");
    }
    let price = price
        .trim()
        .trim_start_matches('$')
        .parse::<f64>()
        .map_err(|_| "Enter a valid price.")?;
    if !price.is_finite() || price < 0.0 {
        return Err("Enter a valid price.");
    }
    Ok(NewProduct { name: name.to_owned(), price })
}

#[component]
pub fn NewProductPage(session: RwSignal<AppSession>, api: ApiClient) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let price = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let product = match validate_new_product(&name.get(), &price.get()) {
            Ok(product) => product,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Saving...".to_owned());

        let client = authorized(&api, session);
        let navigate = navigate.clone();
        spawn_local(async move {
            match client.create_product(&product).await {
                Ok(()) => {
                    log::info!("product created: name={}", product.name);
                    navigate(&AppRoute::Products.path(), NavigateOptions::default());
                }
                Err(err) => {
                    log::warn!("product create failed: name={} err={err}", product.name);
                    info.set(format!("Could not add product: {err}"));
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="new-product-page">
            <h1>"Add Product"</h1>
            <form class="product-form" on:submit=on_submit>
                <input
                    class="product-form__input"
                    type="text"
                    placeholder="Product name"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <input
                    class="product-form__input"
                    type="text"
                    inputmode="decimal"
                    placeholder="Price"
                    prop:value=move || price.get()
                    on:input=move |ev| price.set(event_target_value(&ev))
                />
                <button class="product-form__submit" type="submit" disabled=move || busy.get()>
                    "Add"
                </button>
                <a class="product-form__cancel" href=AppRoute::Products.path()>"Cancel"</a>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="page-error">{move || info.get()}</p>
            </Show>
        </div>
    }
}
