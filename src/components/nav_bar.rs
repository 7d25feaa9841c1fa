//! Top navigation with identity and logout.

use leptos::prelude::*;

use crate::routes::AppRoute;
use crate::state::session::AppSession;

/// Navigation links plus the signed-in identity. Hidden when logged out.
#[component]
pub fn NavBar(session: RwSignal<AppSession>) -> impl IntoView {
    let identity = move || {
        session.with(|store| {
            store
                .session()
                .map(|s| format!("{} ({})", s.subject().unwrap_or("signed in"), s.role()))
        })
    };

    // The route guard reacts to the cleared session and redirects.
    let on_logout = move |_| {
        session.update(AppSession::logout);
        log::info!("logged out");
    };

    view! {
        <Show when=move || session.with(AppSession::is_authenticated)>
            <nav class="nav-bar">
                <a class="nav-bar__link" href=AppRoute::Products.path()>"Products"</a>
                <a class="nav-bar__link" href=AppRoute::Orders.path()>"My Orders"</a>
                <span class="nav-bar__identity">{identity}</span>
                <button class="nav-bar__logout" on:click=on_logout>"Log Out"</button>
            </nav>
        </Show>
    }
}
