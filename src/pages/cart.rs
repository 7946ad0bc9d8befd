//! Shopping cart page.

use leptos::prelude::*;

#[component]
pub fn CartPage() -> impl IntoView {
    view! {
        <div class="page">
            <div class="container">
                <h1>"Your cart"</h1>
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
                <a class="btn btn--primary" href="#/checkout/address">"Checkout"</a>
            </div>
        </div>
    }
}
