//! Checkout step 1: shipping address.

use leptos::prelude::*;

#[component]
pub fn AddressPage() -> impl IntoView {
    view! {
        <div class="page">
            <div class="container form-card">
                <h1>"Shipping address"</h1>
                <div class="form">
                    <label class="form__field">"Street" <input type="text"/></label>
                    <label class="form__field">"City" <input type="text"/></label>
                    <label class="form__field">"Postal code" <input type="text"/></label>
                    <a class="btn btn--primary btn--full" href="#/checkout/payment">"Continue"</a>
                </div>
            </div>
        </div>
    }
}
