//! Root application component with routing.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::components::route_guard::RouteGuard;
use crate::config::ClientConfig;
use crate::net::api::ApiClient;
use crate::pages::{
    login::LoginPage, new_product::NewProductPage, order_detail::OrderDetailPage, orders::OrdersPage,
    products::ProductsPage, register::RegisterPage,
};
use crate::routes::AppRoute;
use crate::state::session::AppSession;
use crate::util::storage::BrowserStorage;

/// Root application component.
///
/// Restores the persisted session once and hands it, together with the API
/// client, to each route explicitly.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    let api = ApiClient::from_config(&config);
    let session = RwSignal::new(AppSession::restore(BrowserStorage));
    log::debug!(
        "app start: api={} authenticated={}",
        api.base_url(),
        session.with_untracked(AppSession::is_authenticated)
    );

    let login_view = {
        let api = api.clone();
        move || view! { <LoginPage session api=api.clone()/> }
    };
    let register_view = {
        let api = api.clone();
        move || view! { <RegisterPage api=api.clone()/> }
    };
    let products_view = {
        let api = api.clone();
        move || {
            let api = api.clone();
            view! {
                <RouteGuard session>
                    <ProductsPage session api=api.clone()/>
                </RouteGuard>
            }
        }
    };
    let new_product_view = {
        let api = api.clone();
        move || {
            let api = api.clone();
            view! {
                <RouteGuard session>
                    <NewProductPage session api=api.clone()/>
                </RouteGuard>
            }
        }
    };
    let orders_view = {
        let api = api.clone();
        move || {
            let api = api.clone();
            view! {
                <RouteGuard session>
                    <OrdersPage session api=api.clone()/>
                </RouteGuard>
            }
        }
    };
    let order_detail_view = move || {
        let api = api.clone();
        view! {
            <RouteGuard session>
                <OrderDetailPage session api=api.clone()/>
            </RouteGuard>
        }
    };
    let fallback = || view! { <Redirect path=AppRoute::FALLBACK.path()/> };

    view! {
        <Title text="OverclocKart"/>

        <Router>
            <NavBar session/>
            <main class="page">
                <Routes fallback>
                    <Route path=StaticSegment("") view=fallback/>
                    <Route path=StaticSegment("login") view=login_view/>
                    <Route path=StaticSegment("register") view=register_view/>
                    <Route path=StaticSegment("products") view=products_view/>
                    <Route path=(StaticSegment("products"), StaticSegment("new")) view=new_product_view/>
                    <Route path=StaticSegment("orders") view=orders_view/>
                    <Route path=(StaticSegment("orders"), ParamSegment("id")) view=order_detail_view/>
                </Routes>
            </main>
        </Router>
    }
}
