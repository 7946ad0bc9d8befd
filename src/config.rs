//! Build-time configuration.

/// API base used when `SHOPFRONT_API_BASE` is not set at compile time.
pub const DEFAULT_API_BASE: &str = "http://localhost:3030/api";

/// Base URL for the store API.
///
/// Resolved from the `SHOPFRONT_API_BASE` environment variable at compile
/// time, falling back to [`DEFAULT_API_BASE`].
pub fn api_base() -> String {
    option_env!("SHOPFRONT_API_BASE")
        .unwrap_or(DEFAULT_API_BASE)
        .to_owned()
}
