//! Order history for the signed-in user.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::net::api::ApiClient;
use crate::net::types::{Order, order_summary};
use crate::routes::AppRoute;
use crate::state::listing::Listing;
use crate::state::session::AppSession;

use super::authorized;

#[component]
pub fn OrdersPage(session: RwSignal<AppSession>, api: ApiClient) -> impl IntoView {
    let orders = RwSignal::new(Listing::<Order>::default());

    load_orders(orders, authorized(&api, session));

    view! {
        <div class="orders-page">
            <h1>"My Orders"</h1>
            <Show when=move || orders.with(|l| l.error.is_some())>
                <p class="page-error">{move || orders.with(|l| l.error.clone().unwrap_or_default())}</p>
            </Show>
            <Show when=move || orders.with(Listing::shows_empty_state)>
                <p class="page-status">"No orders yet."</p>
            </Show>
            <ul class="order-list">
                <For
                    each=move || orders.with(|l| l.items.clone())
                    key=|order| order.id
                    children=move |order: Order| {
                        view! {
                            <li class="order-list__item">
                                <a href=AppRoute::OrderDetail(order.id).path()>{order_summary(&order)}</a>
                            </li>
                        }
                    }
                />
            </ul>
        </div>
    }
}

fn load_orders(orders: RwSignal<Listing<Order>>, client: ApiClient) {
    let Some(ticket) = orders.try_update(Listing::begin) else {
        return;
    };
    spawn_local(async move {
        let result = client.list_orders().await;
        if let Err(err) = &result {
            log::warn!("order fetch failed: {err}");
        }
        orders.try_update(|l| l.finish(ticket, result));
    });
}
