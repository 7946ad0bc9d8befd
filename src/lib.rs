//! # shopfront
//!
//! Leptos + WASM storefront client. A single-page application with
//! hash-fragment routing: catalog browsing, cart, checkout, orders, profile,
//! and an admin console, talking to the store API over HTTP.
//!
//! This crate contains pages, components, the shared session state, the
//! request layer, and the hash router. Browser-only code is gated behind the
//! `csr` feature so the rest of the crate builds and tests natively.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod router;
pub mod state;
pub mod util;
