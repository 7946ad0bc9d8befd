//! Test doubles for the HTTP transport.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};

use futures::channel::oneshot;
use serde_json::Value;

use super::api::{Fetch, FetchRequest, FetchResponse};
use crate::util::BoxFuture;

/// Transport returning queued responses immediately, recording every request.
#[derive(Default)]
pub struct FakeFetch {
    requests: Mutex<Vec<FetchRequest>>,
    responses: Mutex<VecDeque<Result<FetchResponse, String>>>,
}

impl FakeFetch {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push_response(&self, status: u16, status_text: &str, content_type: Option<&str>, body: &str) {
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(Ok(FetchResponse {
                status,
                status_text: status_text.to_owned(),
                content_type: content_type.map(str::to_owned),
                body: body.to_owned(),
            }));
    }

    pub fn push_json(&self, status: u16, body: &Value) {
        self.push_response(status, "", Some("application/json"), &body.to_string());
    }

    pub fn push_text(&self, status: u16, body: &str) {
        self.push_response(status, "", Some("text/plain"), body);
    }

    pub fn push_transport_error(&self, message: &str) {
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(Err(message.to_owned()));
    }

    pub fn requests(&self) -> Vec<FetchRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests().len()
    }

    pub fn last_request(&self) -> FetchRequest {
        self.requests()
            .last()
            .cloned()
            .expect("no request was made")
    }
}

impl Fetch for FakeFetch {
    fn send(&self, req: FetchRequest) -> BoxFuture<Result<FetchResponse, String>> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(req);
        let res = self
            .responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
            .unwrap_or_else(|| {
                Ok(FetchResponse {
                    status: 200,
                    status_text: "OK".to_owned(),
                    content_type: Some("application/json".to_owned()),
                    body: "{}".to_owned(),
                })
            });
        Box::pin(std::future::ready(res))
    }
}

/// Transport whose responses are settled by the test, for interleaving
/// concurrent calls. Each request consumes one pre-registered slot.
#[derive(Default)]
pub struct ManualFetch {
    requests: Mutex<Vec<FetchRequest>>,
    slots: Mutex<VecDeque<oneshot::Receiver<Result<FetchResponse, String>>>>,
}

impl ManualFetch {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Register a slot for the next request; the returned sender settles it.
    pub fn expect_call(&self) -> oneshot::Sender<Result<FetchResponse, String>> {
        let (tx, rx) = oneshot::channel();
        self.slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(rx);
        tx
    }

    pub fn call_count(&self) -> usize {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl Fetch for ManualFetch {
    fn send(&self, req: FetchRequest) -> BoxFuture<Result<FetchResponse, String>> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(req);
        let slot = self
            .slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front();
        Box::pin(async move {
            match slot {
                Some(rx) => rx.await.unwrap_or_else(|_| Err("request dropped".to_owned())),
                None => Err("unexpected request".to_owned()),
            }
        })
    }
}

/// JSON body of a successful login for `user` with token `token`.
pub fn login_body(token: &str, user: &str) -> Value {
    serde_json::json!({
        "token": token,
        "user": { "id": "u-1", "displayName": user, "role": "USER" },
    })
}

/// A settled 200 JSON response, for [`ManualFetch`] senders.
pub fn ok_json(body: &Value) -> Result<FetchResponse, String> {
    Ok(FetchResponse {
        status: 200,
        status_text: "OK".to_owned(),
        content_type: Some("application/json".to_owned()),
        body: body.to_string(),
    })
}

/// A settled error response with a JSON `message` body.
pub fn err_json(status: u16, message: &str) -> Result<FetchResponse, String> {
    Ok(FetchResponse {
        status,
        status_text: String::new(),
        content_type: Some("application/json".to_owned()),
        body: serde_json::json!({ "message": message }).to_string(),
    })
}
