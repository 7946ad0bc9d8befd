//! Admin landing page with store-wide numbers.

use leptos::prelude::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <div class="page">
            <div class="container">
                <h1>"Admin · Dashboard"</h1>
                <div class="stat-grid">
                    <div class="stat-card"><span class="stat-card__value">"214"</span>"Orders this month"</div>
                    <div class="stat-card"><span class="stat-card__value">"$18,420"</span>"Revenue"</div>
                    <div class="stat-card"><span class="stat-card__value">"37"</span>"Low-stock items"</div>
                </div>
                <nav class="admin-nav">
                    <a href="#/admin/products">"Products"</a>
                    <a href="#/admin/orders">"Orders"</a>
                    <a href="#/admin/users">"Users"</a>
                </nav>
            </div>
        </div>
    }
}
