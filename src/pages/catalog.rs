//! Catalog page with the product grid.

use leptos::prelude::*;

/// Placeholder inventory shown until the catalog API is wired in.
pub const PRODUCTS: &[(&str, &str)] = &[
    ("Aurora Headphones", "$129.00"),
    ("Granite Water Bottle", "$24.50"),
    ("Linen Throw Blanket", "$58.00"),
    ("Cedar Desk Organizer", "$42.00"),
    ("Brass Reading Lamp", "$86.00"),
    ("Field Notebook, 3-pack", "$12.00"),
];

#[component]
pub fn CatalogPage() -> impl IntoView {
    view! {
        <div class="page">
            <div class="container">
                <h1>"Catalog"</h1>
                <div class="product-grid">
                    {PRODUCTS
                        .iter()
                        .map(|(name, price)| view! {
                            <a class="product-card" href="#/product">
                                <div class="product-card__image"></div>
                                <div class="product-card__name">{*name}</div>
                                <div class="product-card__price">{*price}</div>
                            </a>
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
