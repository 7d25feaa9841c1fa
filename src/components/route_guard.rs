//! Wrapper that renders its children only when the route guard allows it.

use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use crate::routes::{AppRoute, RouteDecision, guard};
use crate::state::session::AppSession;

/// Guard the current location against `session`.
///
/// Re-evaluates whenever the path or the session changes, so logging out on
/// a guarded page sends the user to `/login` without extra wiring.
#[component]
pub fn RouteGuard(session: RwSignal<AppSession>, children: ChildrenFn) -> impl IntoView {
    let location = use_location();
    let decision = Memo::new(move |_| {
        let route = AppRoute::resolve(&location.pathname.get());
        session.with(|store| guard(route, store.session()))
    });

    move || match decision.get() {
        RouteDecision::Render => children().into_any(),
        RouteDecision::Redirect(target) => {
            log::debug!("route guard redirect: to={}", target.path());
            view! { <Redirect path=target.path()/> }.into_any()
        }
    }
}
