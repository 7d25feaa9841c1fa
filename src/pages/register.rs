//! Account registration page.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::routes::AppRoute;

use super::login::validate_login_input;

pub(crate) fn register_failed_message(err: &ApiError) -> String {
    match err.status() {
        Some(409) => "Username already taken.".to_owned(),
        _ => format!("Registration failed: {err}"),
    }
}

#[component]
pub fn RegisterPage(api: ApiClient) -> impl IntoView {
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
        info.set("Creating account...".to_owned());

        let api = api.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match api.register(&credentials).await {
                Ok(()) => {
                    log::info!("registered: user={}", credentials.username);
                    navigate(&AppRoute::Login.path(), NavigateOptions::default());
                }
                Err(err) => {
                    log::warn!("register failed: user={} err={err}", credentials.username);
                    info.set(register_failed_message(&err));
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-page">
            <h1>"Create Account"</h1>
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
                    "Register"
                </button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="login-message">{move || info.get()}</p>
            </Show>
            <p class="login-footer">
                <a href=AppRoute::Login.path()>"Back to sign in"</a>
            </p>
        </div>
    }
}
