//! Account profile page, reading the shared session.

use leptos::prelude::*;

use crate::net::types::Role;
use crate::state::session::Session;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<Session>();
    let state = session.watch();

    view! {
        <div class="page">
            <div class="container">
                <h1>"Profile"</h1>
                <Show
                    when=move || state.with(|s| s.user.is_some())
                    fallback=|| view! {
                        <p class="empty-state">
                            "You are not signed in. " <a href="#/login">"Login"</a>
                        </p>
                    }
                >
                    <div class="profile-card">
                        <p class="profile-card__name">
                            {move || state.with(|s| {
                                s.user.as_ref().map(|u| u.display_name.clone()).unwrap_or_default()
                            })}
                        </p>
                        <p class="profile-card__role">
                            {move || {
                                let admin = state.with(|s| {
                                    s.user.as_ref().is_some_and(|u| u.role == Role::Admin)
                                });
                                if admin { "Administrator" } else { "Customer" }
                            }}
                        </p>
                        <a href="#/orders">"Order history"</a>
                    </div>
                </Show>
            </div>
        </div>
    }
}
