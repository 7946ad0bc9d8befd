//! Hash router: a static route table resolved against the location
//! fragment, with an access guard for the admin console and views whose
//! construction is deferred until first navigation.
//!
//! Resolution never hard-fails: an empty fragment means the root path, an
//! unmatched path renders the root view, and an admin path without a
//! credential is rewritten to the login path before lookup. The guard is a
//! UI convenience only; the server still authorizes every admin endpoint.


pub mod history;
pub mod outlet;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use leptos::prelude::*;

use crate::pages;
use crate::util::BoxFuture;

pub use outlet::RouterOutlet;

pub const ROOT_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const ADMIN_PREFIX: &str = "/admin";

/// Constructor for a routed view.
pub type ViewFn = fn() -> AnyView;

/// Whether `path` addresses the admin console.
pub fn is_admin_path(path: &str) -> bool {
    path == ADMIN_PREFIX || path.starts_with("/admin/")
}

/// A view that is built asynchronously on first navigation and cached for
/// the lifetime of its route table.
pub struct LazyView {
    loader: Box<dyn Fn() -> BoxFuture<ViewFn> + Send + Sync>,
    state: Mutex<LazyState>,
}

enum LazyState {
    Idle,
    Loading,
    Ready(ViewFn),
}

impl LazyView {
    pub fn new(loader: impl Fn() -> BoxFuture<ViewFn> + Send + Sync + 'static) -> Self {
        Self {
            loader: Box::new(loader),
            state: Mutex::new(LazyState::Idle),
        }
    }

    /// The loaded view, if the loader has completed.
    pub fn cached(&self) -> Option<ViewFn> {
        match *self.state.lock().unwrap_or_else(PoisonError::into_inner) {
            LazyState::Ready(view) => Some(view),
            _ => None,
        }
    }

    /// Start loading. Returns the future to drive on the first call only;
    /// later calls (loading or loaded) return `None`.
    pub fn begin_load(&self) -> Option<BoxFuture<ViewFn>> {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        match *state {
            LazyState::Idle => {
                *state = LazyState::Loading;
                drop(state);
                Some((self.loader)())
            }
            _ => None,
        }
    }

    /// Record the loaded view.
    pub fn finish_load(&self, view: ViewFn) {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner) = LazyState::Ready(view);
    }
}

/// What a path resolves to.
#[derive(Clone)]
pub enum RouteTarget {
    Eager(ViewFn),
    Lazy(Arc<LazyView>),
}

/// Static path-to-view mapping with guard and fallback semantics.
pub struct RouteTable {
    routes: HashMap<&'static str, RouteTarget>,
    fallback: RouteTarget,
}

impl RouteTable {
    pub fn new(routes: Vec<(&'static str, RouteTarget)>, fallback: RouteTarget) -> Self {
        Self {
            routes: routes.into_iter().collect(),
            fallback,
        }
    }

    /// The canonical path that will be looked up for `path`.
    ///
    /// Empty paths normalize to the root; admin paths without a credential
    /// are redirected to login; unmatched paths fall back to the root.
    pub fn resolve_path<'a>(&self, path: &'a str, authed: bool) -> &'a str {
        let path = if path.is_empty() { ROOT_PATH } else { path };
        let path = if is_admin_path(path) && !authed {
            LOGIN_PATH
        } else {
            path
        };
        if self.routes.contains_key(path) {
            path
        } else {
            ROOT_PATH
        }
    }

    /// Resolve `path` to its view descriptor.
    pub fn resolve(&self, path: &str, authed: bool) -> &RouteTarget {
        self.routes
            .get(self.resolve_path(path, authed))
            .unwrap_or(&self.fallback)
    }
}

fn eager(view: ViewFn) -> RouteTarget {
    RouteTarget::Eager(view)
}

/// Deferred route whose loader resolves to an already-compiled view.
///
/// The indirection still exercises the full lazy lifecycle (placeholder,
/// load, cache), matching how on-demand views behave.
fn lazy(view: ViewFn) -> RouteTarget {
    RouteTarget::Lazy(Arc::new(LazyView::new(move || {
        Box::pin(std::future::ready(view))
    })))
}

/// The storefront's route table.
pub fn storefront_routes() -> RouteTable {
    RouteTable::new(
        vec![
            ("/", eager(|| pages::home::HomePage().into_any())),
            ("/catalog", eager(|| pages::catalog::CatalogPage().into_any())),
            ("/product", eager(|| pages::product_detail::ProductDetailPage().into_any())),
            ("/cart", eager(|| pages::cart::CartPage().into_any())),
            ("/wishlist", eager(|| pages::wishlist::WishlistPage().into_any())),
            ("/login", eager(|| pages::auth::login::LoginPage().into_any())),
            ("/register", eager(|| pages::auth::register::RegisterPage().into_any())),
            ("/checkout/address", eager(|| pages::checkout::address::AddressPage().into_any())),
            ("/checkout/payment", eager(|| pages::checkout::payment::PaymentPage().into_any())),
            ("/checkout/review", eager(|| pages::checkout::review::ReviewPage().into_any())),
            ("/orders", eager(|| pages::orders::OrdersPage().into_any())),
            ("/order", lazy(|| pages::orders::order_detail::OrderDetailPage().into_any())),
            ("/profile", eager(|| pages::profile::ProfilePage().into_any())),
            ("/admin", lazy(|| pages::admin::dashboard::DashboardPage().into_any())),
            ("/admin/products", lazy(|| pages::admin::products::ProductsPage().into_any())),
            ("/admin/orders", lazy(|| pages::admin::orders::AdminOrdersPage().into_any())),
            ("/admin/user", lazy(|| pages::admin::users::UsersPage().into_any())),
            ("/admin/users", lazy(|| pages::admin::users::UsersPage().into_any())),
        ],
        eager(|| pages::home::HomePage().into_any()),
    )
}
