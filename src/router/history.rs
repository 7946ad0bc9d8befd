//! Location-fragment access and change notification.
//!
//! The navigable path is whatever follows `#` in the URL, e.g. `#/catalog`.
//! Navigation only rewrites the fragment; the page itself never reloads.
//! Everything here is browser-only and stubs out natively.

/// Navigation seam injected into the session, so state logic can redirect
/// without reaching for the window.
pub trait Navigator: Send + Sync {
    /// Rewrite the fragment to `path`.
    fn go(&self, path: &str);
    /// The current navigable path.
    fn current(&self) -> String;
}

/// [`Navigator`] over the real location fragment.
pub struct HashNavigator;

impl Navigator for HashNavigator {
    fn go(&self, path: &str) {
        navigate(path);
    }

    fn current(&self) -> String {
        current_path()
    }
}

/// The path after the fragment marker; empty when there is no fragment.
pub fn current_path() -> String {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .map(|hash| hash.trim_start_matches('#').to_owned())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "csr"))]
    {
        String::new()
    }
}

/// Set the fragment to `path`, triggering a `hashchange`.
pub fn navigate(path: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_hash(path);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = path;
    }
}

/// Subscription to `hashchange`; dropping it removes the listener.
pub struct HashListener {
    #[cfg(feature = "csr")]
    closure: wasm_bindgen::closure::Closure<dyn FnMut()>,
}

/// Observe fragment changes for the lifetime of the returned handle.
pub fn listen(callback: impl FnMut() + 'static) -> Option<HashListener> {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;

        let closure = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(callback);
        let window = web_sys::window()?;
        window
            .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref())
            .ok()?;
        Some(HashListener { closure })
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = callback;
        None
    }
}

#[cfg(feature = "csr")]
impl Drop for HashListener {
    fn drop(&mut self) {
        use wasm_bindgen::JsCast;

        if let Some(window) = web_sys::window() {
            let _ = window.remove_event_listener_with_callback(
                "hashchange",
                self.closure.as_ref().unchecked_ref(),
            );
        }
    }
}
