//! Admin user management.

use leptos::prelude::*;

#[component]
pub fn UsersPage() -> impl IntoView {
    view! {
        <div class="page">
            <div class="container">
                <h1>"Admin · Users"</h1>
                <table class="table">
                    <thead>
                        <tr><th>"Username"</th><th>"Email"</th><th>"Role"</th></tr>
                    </thead>
                    <tbody>
                        <tr><td>"alice"</td><td>"alice@example.com"</td><td>"ADMIN"</td></tr>
                        <tr><td>"bob"</td><td>"bob@example.com"</td><td>"USER"</td></tr>
                    </tbody>
                </table>
            </div>
        </div>
    }
}
