//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its route-scoped fetches and form state and receives the
//! session signal and API client as props from `app`.

pub mod login;
pub mod new_product;
pub mod order_detail;
pub mod orders;
pub mod products;
pub mod register;

use leptos::prelude::*;

use crate::net::api::ApiClient;
use crate::state::session::AppSession;

/// Client carrying the bearer token of the current session.
pub(crate) fn authorized(api: &ApiClient, session: RwSignal<AppSession>) -> ApiClient {
    api.with_bearer(session.with_untracked(|store| store.token().cloned()))
}
