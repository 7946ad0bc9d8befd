//! Landing page.

use leptos::prelude::*;

use super::catalog::PRODUCTS;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page">
            <div class="container">
                <section class="hero">
                    <h1>"Everything for the well-kept desk"</h1>
                    <p>"Small-batch goods, shipped from our warehouse to yours."</p>
                    <a class="btn btn--primary" href="#/catalog">"Browse the catalog"</a>
                </section>
                <section>
                    <h2>"Featured"</h2>
                    <div class="product-grid">
                        {PRODUCTS
                            .iter()
                            .take(3)
                            .map(|(name, price)| view! {
                                <a class="product-card" href="#/product">
                                    <div class="product-card__image"></div>
                                    <div class="product-card__name">{*name}</div>
                                    <div class="product-card__price">{*price}</div>
                                </a>
                            })
                            .collect_view()}
                    </div>
                </section>
            </div>
        </div>
    }
}
