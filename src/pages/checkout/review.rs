//! Checkout step 3: order review.

use leptos::prelude::*;

#[component]
pub fn ReviewPage() -> impl IntoView {
    view! {
        <div class="page">
            <div class="container">
                <h1>"Review your order"</h1>
                <div class="cart-line">
                    <span>"Aurora Headphones"</span>
                    <span>"1 × $129.00"</span>
                </div>
                <div class="cart-line">
                    <span>"Shipping"</span>
                    <span>"$6.00"</span>
                </div>
                <div class="cart-line cart-line--total">
                    <span>"Total"</span>
                    <span>"$135.00"</span>
                </div>
                <button class="btn btn--primary">"Place order"</button>
            </div>
        </div>
    }
}
