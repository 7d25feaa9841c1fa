//! Single-order view reached from the order history.

#[cfg(test)]
#[path = "order_detail_test.rs"]
mod order_detail_test;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;

use crate::net::api::ApiClient;
use crate::net::types::Order;
use crate::routes::AppRoute;
use crate::state::listing::Detail;
use crate::state::session::AppSession;

use super::authorized;

pub(crate) fn parse_order_id(raw: &str) -> Option<u64> {
    raw.trim().parse().ok()
}

#[component]
pub fn OrderDetailPage(session: RwSignal<AppSession>, api: ApiClient) -> impl IntoView {
    let params = use_params_map();
    let order_id = Memo::new(move |_| params.with(|p| p.get("id").as_deref().and_then(parse_order_id)));
    let order = RwSignal::new(Detail::<Order>::default());

    Effect::new(move || {
        let Some(id) = order_id.get() else {
            order.update(|d| d.reject("Unknown order."));
            return;
        };
        let Some(ticket) = order.try_update(Detail::begin) else {
            return;
        };
        let client = authorized(&api, session);
        spawn_local(async move {
            let result = client.fetch_order(id).await;
            if let Err(err) = &result {
                log::warn!("order fetch failed: id={id} err={err}");
            }
            order.try_update(|d| d.finish(ticket, result));
        });
    });

    view! {
        <div class="order-detail-page">
            <h1>{move || order_id.get().map_or_else(|| "Order".to_owned(), |id| format!("Order #{id}"))}</h1>
            <Show when=move || order.with(|d| d.error.is_some())>
                <p class="page-error">{move || order.with(|d| d.error.clone().unwrap_or_default())}</p>
            </Show>
            {move || {
                order
                    .with(|d| d.value.clone())
                    .map(|o| {
                        view! {
                            <dl class="order-detail">
                                <dt>"Product"</dt>
                                <dd>{o.product_id}</dd>
                                <dt>"Quantity"</dt>
                                <dd>{o.quantity}</dd>
                                <dt>"Status"</dt>
                                <dd><em>{o.status}</em></dd>
                            </dl>
                        }
                    })
            }}
            <a class="order-detail__back" href=AppRoute::Orders.path()>"Back to orders"</a>
        </div>
    }
}
