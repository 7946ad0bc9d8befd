//! Registration form wired to the session.

use leptos::prelude::*;

use crate::net::types::SignupRequest;
use crate::router::history;
use crate::state::session::Session;

/// New-account form. A successful signup routes to the login page; it never
/// signs the visitor in by itself.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let state = session.watch();

    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let session = session.clone();
        leptos::task::spawn_local(async move {
            let payload = SignupRequest {
                first_name: first_name.get_untracked(),
                last_name: last_name.get_untracked(),
                username: username.get_untracked(),
                email: email.get_untracked(),
                password: password.get_untracked(),
            };
            if session.signup(&payload).await.is_ok() {
                history::navigate("/login");
            }
        });
    };

    let text_field = move |label: &'static str, kind: &'static str, value: RwSignal<String>| {
        view! {
            <label class="form__field">
                {label}
                <input
                    type=kind
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
            </label>
        }
    };

    view! {
        <div class="page">
            <div class="container form-card">
                <h1>"Create account"</h1>
                <form class="form" on:submit=on_submit>
                    {text_field("First name", "text", first_name)}
                    {text_field("Last name", "text", last_name)}
                    {text_field("Username", "text", username)}
                    {text_field("Email", "email", email)}
                    {text_field("Password", "password", password)}
                    {move || state.with(|s| s.last_error.clone()).map(|message| view! {
                        <p class="form__error">{message}</p>
                    })}
                    <button
                        class="btn btn--primary btn--full"
                        type="submit"
                        disabled=move || state.with(|s| s.loading)
                    >
                        {move || if state.with(|s| s.loading) { "Creating…" } else { "Sign Up" }}
                    </button>
                </form>
                <p class="form-card__alt">
                    <a href="#/login">"Already registered? Sign in"</a>
                </p>
            </div>
        </div>
    }
}
