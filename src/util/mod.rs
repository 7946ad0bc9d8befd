//! Small shared utilities.

pub mod storage;

/// Boxed future without a `Send` bound, for single-threaded (browser) async.
pub type BoxFuture<T> = std::pin::Pin<Box<dyn std::future::Future<Output = T>>>;
