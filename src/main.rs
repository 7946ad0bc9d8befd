//! Browser entry point. Built for `wasm32-unknown-unknown` with the `csr`
//! feature (see `index.html` / `Trunk.toml`); a no-op on other targets.

fn main() {
    #[cfg(feature = "csr")]
    {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);
        leptos::mount::mount_to_body(shopfront::app::App);
    }
}
