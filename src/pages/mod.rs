//! Storefront pages. Most of these render static mock content; the auth
//! pages and profile are wired to the shared session.

pub mod admin;
pub mod auth;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod home;
pub mod orders;
pub mod product_detail;
pub mod profile;
pub mod wishlist;
