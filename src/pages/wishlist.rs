//! Wishlist page.

use leptos::prelude::*;

#[component]
pub fn WishlistPage() -> impl IntoView {
    view! {
        <div class="page">
            <div class="container">
                <h1>"Wishlist"</h1>
                <p class="empty-state">
                    "Nothing saved yet. Tap the heart on any product to keep it here."
                </p>
                <a class="btn btn--secondary" href="#/catalog">"Find something"</a>
            </div>
        </div>
    }
}
