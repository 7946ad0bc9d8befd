//! Single-order page, loaded on demand.

use leptos::prelude::*;

#[component]
pub fn OrderDetailPage() -> impl IntoView {
    view! {
        <div class="page">
            <div class="container">
                <h1>"Order #1042"</h1>
                <p>"Placed 2026-07-30 · Delivered 2026-08-02"</p>
                <div class="cart-line">
                    <span>"Aurora Headphones"</span>
                    <span>"1 × $129.00"</span>
                </div>
                <div class="cart-line">
                    <span>"Field Notebook, 3-pack"</span>
                    <span>"2 × $12.00"</span>
                </div>
                <div class="cart-line cart-line--total">
                    <span>"Total"</span>
                    <span>"$153.00"</span>
                </div>
            </div>
        </div>
    }
}
