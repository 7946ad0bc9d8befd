//! Order history pages.

pub mod order_detail;

use leptos::prelude::*;

/// Order history list.
#[component]
pub fn OrdersPage() -> impl IntoView {
    view! {
        <div class="page">
            <div class="container">
                <h1>"Orders"</h1>
                <table class="table">
                    <thead>
                        <tr><th>"Order"</th><th>"Placed"</th><th>"Status"</th><th>"Total"</th></tr>
                    </thead>
                    <tbody>
                        <tr>
                            <td><a href="#/order">"#1042"</a></td>
                            <td>"2026-07-30"</td>
                            <td><span class="badge badge--ok">"Delivered"</span></td>
                            <td>"$153.00"</td>
                        </tr>
                        <tr>
                            <td><a href="#/order">"#1041"</a></td>
                            <td>"2026-07-12"</td>
                            <td><span class="badge">"Shipped"</span></td>
                            <td>"$58.00"</td>
                        </tr>
                    </tbody>
                </table>
            </div>
        </div>
    }
}
