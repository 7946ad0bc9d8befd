//! Checkout step 2: payment details.

use leptos::prelude::*;

#[component]
pub fn PaymentPage() -> impl IntoView {
    view! {
        <div class="page">
            <div class="container form-card">
                <h1>"Payment"</h1>
                <div class="form">
                    <label class="form__field">"Card number" <input type="text"/></label>
                    <label class="form__field">"Expiry" <input type="text" placeholder="MM/YY"/></label>
                    <label class="form__field">"CVC" <input type="text"/></label>
                    <a class="btn btn--primary btn--full" href="#/checkout/review">"Continue"</a>
                </div>
            </div>
        </div>
    }
}
