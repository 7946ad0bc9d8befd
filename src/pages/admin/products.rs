//! Admin product management.

use leptos::prelude::*;

#[component]
pub fn ProductsPage() -> impl IntoView {
    view! {
        <div class="page">
            <div class="container">
                <h1>"Admin · Products"</h1>
                <table class="table">
                    <thead>
                        <tr><th>"Product"</th><th>"Price"</th><th>"Stock"</th></tr>
                    </thead>
                    <tbody>
                        <tr><td>"Aurora Headphones"</td><td>"$129.00"</td><td>"61"</td></tr>
                        <tr><td>"Granite Water Bottle"</td><td>"$24.50"</td><td>"4"</td></tr>
                        <tr><td>"Brass Reading Lamp"</td><td>"$86.00"</td><td>"17"</td></tr>
                    </tbody>
                </table>
                <button class="btn btn--primary">"New product"</button>
            </div>
        </div>
    }
}
