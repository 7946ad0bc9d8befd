//! Admin order management.

use leptos::prelude::*;

#[component]
pub fn AdminOrdersPage() -> impl IntoView {
    view! {
        <div class="page">
            <div class="container">
                <h1>"Admin · Orders"</h1>
                <table class="table">
                    <thead>
                        <tr><th>"Order"</th><th>"Customer"</th><th>"Status"</th><th>"Total"</th></tr>
                    </thead>
                    <tbody>
                        <tr><td>"#1042"</td><td>"alice"</td><td>"Delivered"</td><td>"$153.00"</td></tr>
                        <tr><td>"#1043"</td><td>"bob"</td><td>"Processing"</td><td>"$86.00"</td></tr>
                    </tbody>
                </table>
            </div>
        </div>
    }
}
