//! Top navigation bar with session-aware actions.

use leptos::prelude::*;

use crate::net::types::Role;
use crate::state::session::Session;

/// Header shown on every page.
///
/// Anonymous visitors get login/sign-up buttons; a signed-in user gets
/// their name, a logout button, and (for admins) a console link.
#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<Session>();
    let state = session.watch();
    let on_logout = {
        let session = session.clone();
        move |_| session.logout()
    };

    let display_name = move || {
        state.with(|s| {
            s.user
                .as_ref()
                .map(|u| u.display_name.clone())
                .unwrap_or_default()
        })
    };
    let is_admin = move || state.with(|s| s.user.as_ref().is_some_and(|u| u.role == Role::Admin));

    view! {
        <header class="navbar">
            <div class="container navbar__inner">
                <a href="#/" class="navbar__brand">"Shopfront"</a>
                <nav class="navbar__links">
                    <a href="#/catalog">"Catalog"</a>
                    <a href="#/wishlist">"Wishlist"</a>
                    <a href="#/cart">"Cart"</a>
                    <a href="#/orders">"Orders"</a>
                </nav>
                <div class="navbar__actions">
                    <Show
                        when=move || state.with(|s| s.user.is_some())
                        fallback=|| view! {
                            <a class="btn btn--sm" href="#/login">"Login"</a>
                            <a class="btn btn--sm btn--secondary" href="#/register">"Sign Up"</a>
                        }
                    >
                        {move || is_admin().then(|| view! {
                            <a class="navbar__admin" href="#/admin">"Admin"</a>
                        })}
                        <a class="navbar__user" href="#/profile">{display_name}</a>
                        <button class="btn btn--sm" on:click=on_logout.clone()>"Logout"</button>
                    </Show>
                </div>
            </div>
        </header>
    }
}
