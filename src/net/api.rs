//! Request layer for the store API.
//!
//! [`ApiClient`] owns the base URL, the transient bearer credential, and the
//! unauthorized callback. Every call attaches `Content-Type` and (when a
//! credential is set) `Authorization`, normalizes the response to JSON or
//! text, and maps non-2xx statuses to [`ApiError`].
//!
//! ERROR HANDLING
//! ==============
//! A 401/403 response additionally fires the registered unauthorized
//! handler before the error is returned, so the session layer can tear
//! itself down without the two being coupled. Nothing here retries.
//!
//! The HTTP transport itself sits behind the [`Fetch`] trait: `gloo-net`
//! in the browser (`csr` feature), fakes in tests.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::{Arc, Mutex, PoisonError};

use serde::Serialize;
use serde_json::Value;

use crate::util::BoxFuture;

/// Statuses the server uses to signal a rejected credential.
const UNAUTHORIZED_STATUSES: [u16; 2] = [401, 403];

/// Error raised for any failed request.
///
/// `status` is `None` when the request never completed (network failure,
/// timeout). `data` carries the parsed response body, if there was one.
#[derive(Clone, Debug, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    pub status: Option<u16>,
    pub message: String,
    pub data: Value,
}

impl ApiError {
    /// A transport-level failure with no HTTP status.
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: message.into(),
            data: Value::Null,
        }
    }

    /// Build the error for a non-2xx response.
    ///
    /// The message prefers a server-supplied `message` or `error` field and
    /// falls back to the status line.
    pub fn from_response(status: u16, status_text: &str, data: Value) -> Self {
        let server_message = data
            .get("message")
            .or_else(|| data.get("error"))
            .and_then(Value::as_str)
            .map(str::to_owned);
        let message = server_message
            .filter(|m| !m.is_empty())
            .or_else(|| Some(status_text.to_owned()).filter(|m| !m.is_empty()))
            .unwrap_or_else(|| "Request failed".to_owned());
        Self {
            status: Some(status),
            message,
            data,
        }
    }

    /// Whether the server rejected the presented credential.
    pub fn is_unauthorized(&self) -> bool {
        self.status
            .is_some_and(|s| UNAUTHORIZED_STATUSES.contains(&s))
    }
}

/// Callback invoked when the server rejects the current credential.
pub type UnauthorizedHandler = Arc<dyn Fn() + Send + Sync>;

/// Request as handed to the transport.
#[derive(Clone, Debug)]
pub struct FetchRequest {
    pub url: String,
    pub method: &'static str,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
    pub timeout_ms: Option<u32>,
}

/// Response as produced by the transport, before interpretation.
#[derive(Clone, Debug)]
pub struct FetchResponse {
    pub status: u16,
    pub status_text: String,
    pub content_type: Option<String>,
    pub body: String,
}

/// HTTP transport seam.
pub trait Fetch: Send + Sync {
    /// Perform the request; `Err` means it never completed.
    fn send(&self, req: FetchRequest) -> BoxFuture<Result<FetchResponse, String>>;
}

/// Body of an outbound request: JSON to serialize, or a raw string passed
/// through untouched.
#[derive(Clone, Debug)]
pub enum RequestBody {
    Json(Value),
    Raw(String),
}

/// Per-call options, mirroring what callers actually vary.
#[derive(Clone, Debug)]
pub struct RequestOpts {
    pub method: &'static str,
    pub body: Option<RequestBody>,
    pub headers: Vec<(String, String)>,
}

impl Default for RequestOpts {
    fn default() -> Self {
        Self {
            method: "GET",
            body: None,
            headers: Vec::new(),
        }
    }
}

/// Client handle for the store API.
pub struct ApiClient {
    base_url: String,
    timeout_ms: Option<u32>,
    credential: Mutex<Option<String>>,
    on_unauthorized: Mutex<Option<UnauthorizedHandler>>,
    fetch: Arc<dyn Fetch>,
}

impl ApiClient {
    /// Client over the default transport for the current target.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_fetch(base_url, default_fetch())
    }

    /// Client over an explicit transport (tests, instrumentation).
    pub fn with_fetch(base_url: impl Into<String>, fetch: Arc<dyn Fetch>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_ms: None,
            credential: Mutex::new(None),
            on_unauthorized: Mutex::new(None),
            fetch,
        }
    }

    /// Apply a per-request timeout in milliseconds. Off by default.
    pub fn with_timeout(mut self, ms: u32) -> Self {
        self.timeout_ms = Some(ms);
        self
    }

    /// Set the bearer credential attached to subsequent calls.
    ///
    /// Idempotent; calls already built keep the credential they started with.
    pub fn set_credential(&self, token: &str) {
        *self
            .credential
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(token.to_owned());
    }

    /// Drop the bearer credential for subsequent calls. Idempotent.
    pub fn clear_credential(&self) {
        *self
            .credential
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = None;
    }

    pub fn has_credential(&self) -> bool {
        self.credential
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Register (or with `None`, clear) the unauthorized callback.
    ///
    /// At most one handler is held; a new registration replaces the old.
    pub fn set_unauthorized_handler(&self, handler: Option<UnauthorizedHandler>) {
        *self
            .on_unauthorized
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = handler;
    }

    /// Issue a request against `base_url + path`.
    ///
    /// 2xx responses resolve to the parsed body: JSON when the response
    /// declares it (a malformed JSON body degrades to `null`), text
    /// otherwise. Anything else raises [`ApiError`]; 401/403 also fires the
    /// unauthorized handler first.
    pub async fn request(&self, path: &str, opts: RequestOpts) -> Result<Value, ApiError> {
        let req = FetchRequest {
            url: format!("{}{}", self.base_url, path),
            method: opts.method,
            headers: self.build_headers(opts.headers),
            body: opts.body.map(|b| match b {
                RequestBody::Raw(s) => s,
                RequestBody::Json(v) => v.to_string(),
            }),
            timeout_ms: self.timeout_ms,
        };

        let resp = match self.fetch.send(req).await {
            Ok(resp) => resp,
            Err(e) => {
                log::warn!("request to {path} failed: {e}");
                return Err(ApiError::transport(e));
            }
        };

        let is_json = resp
            .content_type
            .as_deref()
            .is_some_and(|c| c.contains("application/json"));
        let data = if is_json {
            serde_json::from_str(&resp.body).unwrap_or(Value::Null)
        } else {
            Value::String(resp.body)
        };

        if (200..300).contains(&resp.status) {
            return Ok(data);
        }

        let err = ApiError::from_response(resp.status, &resp.status_text, data);
        if err.is_unauthorized() {
            // Clone the handler out first; it may replace or clear the slot.
            let handler = self
                .on_unauthorized
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clone();
            if let Some(handler) = handler {
                log::warn!("credential rejected by {path} ({})", resp.status);
                handler();
            }
        }
        Err(err)
    }

    /// GET `path`.
    pub async fn get(&self, path: &str) -> Result<Value, ApiError> {
        self.request(path, RequestOpts::default()).await
    }

    /// POST `path` with a JSON body.
    pub async fn post_json<T: Serialize>(&self, path: &str, body: &T) -> Result<Value, ApiError> {
        let body = serde_json::to_value(body).unwrap_or(Value::Null);
        self.request(
            path,
            RequestOpts {
                method: "POST",
                body: Some(RequestBody::Json(body)),
                ..RequestOpts::default()
            },
        )
        .await
    }

    fn build_headers(&self, extra: Vec<(String, String)>) -> Vec<(String, String)> {
        let mut headers = vec![("Content-Type".to_owned(), "application/json".to_owned())];
        headers.extend(extra);
        if let Some(token) = self
            .credential
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_deref()
        {
            headers.push(("Authorization".to_owned(), format!("Bearer {token}")));
        }
        headers
    }
}

fn default_fetch() -> Arc<dyn Fetch> {
    #[cfg(feature = "csr")]
    {
        Arc::new(BrowserFetch)
    }
    #[cfg(not(feature = "csr"))]
    {
        Arc::new(UnavailableFetch)
    }
}

/// Transport over `gloo-net`, browser only.
#[cfg(feature = "csr")]
struct BrowserFetch;

#[cfg(feature = "csr")]
impl Fetch for BrowserFetch {
    fn send(&self, req: FetchRequest) -> BoxFuture<Result<FetchResponse, String>> {
        Box::pin(async move {
            use gloo_net::http::{Method, RequestBuilder};

            let method = match req.method {
                "POST" => Method::POST,
                "PUT" => Method::PUT,
                "DELETE" => Method::DELETE,
                "PATCH" => Method::PATCH,
                _ => Method::GET,
            };
            let mut builder = RequestBuilder::new(&req.url).method(method);
            for (name, value) in &req.headers {
                builder = builder.header(name, value);
            }
            let request = match req.body {
                Some(body) => builder.body(body).map_err(|e| e.to_string())?,
                None => builder.build().map_err(|e| e.to_string())?,
            };

            let send = Box::pin(request.send());
            let resp = match req.timeout_ms {
                Some(ms) => {
                    use futures::future::{Either, select};
                    let timeout = Box::pin(gloo_timers::future::TimeoutFuture::new(ms));
                    match select(send, timeout).await {
                        Either::Left((resp, _)) => resp,
                        Either::Right(_) => return Err(format!("request timed out after {ms}ms")),
                    }
                }
                None => send.await,
            }
            .map_err(|e| e.to_string())?;

            Ok(FetchResponse {
                status: resp.status(),
                status_text: resp.status_text(),
                content_type: resp.headers().get("content-type"),
                body: resp.text().await.unwrap_or_default(),
            })
        })
    }
}

/// Native stub; HTTP is only meaningful in the browser build.
#[cfg(not(feature = "csr"))]
struct UnavailableFetch;

#[cfg(not(feature = "csr"))]
impl Fetch for UnavailableFetch {
    fn send(&self, _req: FetchRequest) -> BoxFuture<Result<FetchResponse, String>> {
        Box::pin(std::future::ready(Err(
            "HTTP transport is only available in the browser".to_owned(),
        )))
    }
}
