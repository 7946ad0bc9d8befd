//! Login form wired to the session.

use leptos::prelude::*;

use crate::router::history;
use crate::state::session::Session;

/// Username/password form. Submitting drives [`Session::login`]; a failure
/// message renders inline and the button is disabled while the call is in
/// flight.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let state = session.watch();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let session = session.clone();
        leptos::task::spawn_local(async move {
            let name = username.get_untracked();
            let pass = password.get_untracked();
            if session.login(&name, &pass).await.is_ok() {
                history::navigate("/");
            }
        });
    };

    view! {
        <div class="page">
            <div class="container form-card">
                <h1>"Login"</h1>
                <form class="form" on:submit=on_submit>
                    <label class="form__field">
                        "Username"
                        <input
                            type="text"
                            placeholder="you@example.com"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form__field">
                        "Password"
                        <input
                            type="password"
                            placeholder="••••••••"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    {move || state.with(|s| s.last_error.clone()).map(|message| view! {
                        <p class="form__error">{message}</p>
                    })}
                    <button
                        class="btn btn--primary btn--full"
                        type="submit"
                        disabled=move || state.with(|s| s.loading)
                    >
                        {move || if state.with(|s| s.loading) { "Signing in…" } else { "Sign In" }}
                    </button>
                </form>
                <p class="form-card__alt">
                    <a href="#/register">"Create an account"</a>
                </p>
            </div>
        </div>
    }
}
