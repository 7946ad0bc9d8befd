//! Root application component: wires the session to the API client and
//! hosts the router.

use std::sync::Arc;

use leptos::prelude::*;

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::config;
use crate::net::api::ApiClient;
use crate::router::RouterOutlet;
use crate::router::history::{HashNavigator, Navigator};
use crate::state::session::Session;
use crate::util::storage::{CredentialStore, LocalCredentialStore};

/// Root component.
///
/// Builds the API client and the session handle, installs the unauthorized
/// callback, kicks off the post-reload profile refetch, and provides the
/// session to the component tree.
#[component]
pub fn App() -> impl IntoView {
    let api = Arc::new(ApiClient::new(config::api_base()));
    let store: Arc<dyn CredentialStore> = Arc::new(LocalCredentialStore);
    let nav: Arc<dyn Navigator> = Arc::new(HashNavigator);

    let session = Session::new(api, store, nav);
    session.install_unauthorized_handler();
    {
        let session = session.clone();
        leptos::task::spawn_local(async move { session.restore_profile().await });
    }
    on_cleanup({
        let session = session.clone();
        move || session.teardown()
    });
    provide_context(session);

    view! {
        <Navbar/>
        <main class="app-main">
            <RouterOutlet/>
        </main>
        <Footer/>
    }
}
