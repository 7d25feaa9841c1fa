//! Login page exchanging username + password for a session.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::ApiClient;
use crate::net::types::Credentials;
use crate::routes::AppRoute;
use crate::state::session::{AppSession, authenticate};
use crate::util::dialog::alert;

pub(crate) const LOGIN_FAILED: &str = "Login failed";

/// Trim the username and require both fields.
pub(crate) fn validate_login_input(username: &str, password: &str) -> Result<Credentials, &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Enter both username and password.");
    }
    Ok(Credentials { username: username.to_owned(), password: password.to_owned() })
}

#[component]
pub fn LoginPage(session: RwSignal<AppSession>, api: ApiClient) -> impl IntoView {
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let credentials = match validate_login_input(&username.get(), &password.get()) {
            Ok(credentials) => credentials,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        let api = api.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match authenticate(&api, &credentials).await {
                Ok(new_session) => {
                    session.update(|store| store.commit(new_session));
                    navigate(&AppRoute::Products.path(), NavigateOptions::default());
                }
                Err(err) => {
                    log::warn!("login failed: user={} err={err}", credentials.username);
                    info.set(LOGIN_FAILED.to_owned());
                    busy.set(false);
                    alert(LOGIN_FAILED);
                }
            }
        });
    };

    view! {
        <div class="login-page">
            <h1>"Sign In"</h1>
            <form class="login-form" on:submit=on_submit>
                <input
                    class="login-input"
                    type="text"
                    placeholder="Username"
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
                <input
                    class="login-input"
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button class="login-button" type="submit" disabled=move || busy.get()>
                    "Log In"
                </button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="login-message">{move || info.get()}</p>
            </Show>
            <p class="login-footer">
                "No account? "
                <a href=AppRoute::Register.path()>"Register"</a>
            </p>
        </div>
    }
}
