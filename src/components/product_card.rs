//! Catalog card for a single product.

use leptos::prelude::*;

use crate::net::types::{Product, format_price};

#[component]
pub fn ProductCard(product: Product, on_buy: Callback<u64>) -> impl IntoView {
    let id = product.id;
    view! {
        <div class="product-card">
            <h2 class="product-card__name">{product.name}</h2>
            <p class="product-card__price">{format_price(product.price)}</p>
            <button class="product-card__buy" on:click=move |_| on_buy.run(id)>"Buy"</button>
        </div>
    }
}
