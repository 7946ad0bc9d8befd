//! The routed-view host component.

use std::sync::Arc;

use leptos::prelude::*;

use super::{RouteTarget, storefront_routes};
use crate::router::history;
use crate::state::session::Session;

/// Renders the view for the current location fragment.
///
/// Subscribes to `hashchange` for its lifetime and re-resolves on every
/// change. Deferred views render a placeholder while their loader runs; a
/// load that settles after the user has navigated away only warms the cache.
#[component]
pub fn RouterOutlet() -> impl IntoView {
    let session = expect_context::<Session>();
    let table = Arc::new(storefront_routes());

    let path = RwSignal::new(history::current_path());
    let loaded = RwSignal::new(0u32);

    // Held until the outlet is disposed; dropping it removes the listener.
    let listener = history::listen(move || path.set(history::current_path()));
    let _listener = StoredValue::new_local(listener);

    move || {
        loaded.track();
        let current = path.get();
        let authed = session.watch().with(|s| s.token.is_some());
        match table.resolve(&current, authed) {
            RouteTarget::Eager(view) => view(),
            RouteTarget::Lazy(lazy) => {
                if let Some(view) = lazy.cached() {
                    view()
                } else {
                    if let Some(load) = lazy.begin_load() {
                        let lazy = Arc::clone(lazy);
                        leptos::task::spawn_local(async move {
                            lazy.finish_load(load.await);
                            loaded.update(|n| *n += 1);
                        });
                    }
                    view! { <div class="page page--loading">"Loading…"</div> }.into_any()
                }
            }
        }
    }
}
