//! Registration page. Creating an account does not sign the user in.

use leptos::prelude::*;

use crate::util::form;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = email.get().trim().to_owned();
        let username_value = username.get().trim().to_owned();
        if email_value.is_empty() || username_value.is_empty() {
            info.set("Email and username are required.".to_owned());
            return;
        }
        if !form::passwords_match(&password.get(), &confirm.get()) {
            info.set("Passwords do not match.".to_owned());
            return;
        }
        let password_value = password.get();
        busy.set(true);
        info.set("Creating account...".to_owned());

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let store = crate::state::auth::AuthStore::new(crate::net::api::HttpApi);
            match store.register(&email_value, &username_value, &password_value).await {
                Ok(()) => {
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/login");
                    }
                }
                Err(message) => {
                    info.set(message);
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = password_value;
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Join PhillyFlow"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="confirm password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        "Create Account"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <p class="auth-switch">
                    "Already signed up? " <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
