//! Single-product page.

use leptos::prelude::*;

#[component]
pub fn ProductDetailPage() -> impl IntoView {
    view! {
        <div class="page">
            <div class="container product-detail">
                <div class="product-detail__image"></div>
                <div class="product-detail__info">
                    <h1>"Aurora Headphones"</h1>
                    <p class="product-detail__price">"$129.00"</p>
                    <p>
                        "Closed-back, wired, and unreasonably comfortable. "
                        "Ships in recycled packaging."
                    </p>
                    <div class="product-detail__actions">
                        <button class="btn btn--primary">"Add to cart"</button>
                        <button class="btn btn--secondary">"Add to wishlist"</button>
                    </div>
                </div>
            </div>
        </div>
    }
}
