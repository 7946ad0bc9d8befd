//! Page footer.

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container footer__inner">
                <span>"Shopfront"</span>
                <span class="footer__note">"Demo storefront — no real orders are placed."</span>
            </div>
        </footer>
    }
}
