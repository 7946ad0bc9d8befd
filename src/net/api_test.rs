use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use futures::executor::block_on;
use serde_json::{Value, json};

use super::*;
use crate::net::testing::FakeFetch;

fn client(fetch: &Arc<FakeFetch>) -> ApiClient {
    ApiClient::with_fetch("http://store.test/api", Arc::clone(fetch) as Arc<dyn Fetch>)
}

fn header(req: &FetchRequest, name: &str) -> Option<String> {
    req.headers
        .iter()
        .find(|(n, _)| n == name)
        .map(|(_, v)| v.clone())
}

// =============================================================
// Credential handling
// =============================================================

#[test]
fn authorization_header_tracks_credential() {
    let fetch = FakeFetch::new();
    let api = client(&fetch);

    let _ = block_on(api.get("/products"));
    api.set_credential("tok-1");
    let _ = block_on(api.get("/products"));
    api.clear_credential();
    let _ = block_on(api.get("/products"));

    let reqs = fetch.requests();
    assert_eq!(header(&reqs[0], "Authorization"), None);
    assert_eq!(
        header(&reqs[1], "Authorization").as_deref(),
        Some("Bearer tok-1")
    );
    assert_eq!(header(&reqs[2], "Authorization"), None);
}

#[test]
fn set_and_clear_credential_are_idempotent() {
    let fetch = FakeFetch::new();
    let api = client(&fetch);

    api.set_credential("tok-1");
    api.set_credential("tok-1");
    assert!(api.has_credential());

    api.clear_credential();
    api.clear_credential();
    assert!(!api.has_credential());
}

#[test]
fn content_type_is_always_json() {
    let fetch = FakeFetch::new();
    let api = client(&fetch);

    let _ = block_on(api.get("/products"));
    assert_eq!(
        header(&fetch.last_request(), "Content-Type").as_deref(),
        Some("application/json")
    );
}

// =============================================================
// Request building
// =============================================================

#[test]
fn url_is_base_plus_path() {
    let fetch = FakeFetch::new();
    let api = client(&fetch);

    let _ = block_on(api.get("/orders/42"));
    assert_eq!(fetch.last_request().url, "http://store.test/api/orders/42");
}

#[test]
fn json_body_is_serialized() {
    let fetch = FakeFetch::new();
    let api = client(&fetch);

    let _ = block_on(api.post_json("/cart", &json!({ "productId": 7 })));
    let req = fetch.last_request();
    assert_eq!(req.method, "POST");
    assert_eq!(req.body.as_deref(), Some(r#"{"productId":7}"#));
}

#[test]
fn raw_string_body_passes_through() {
    let fetch = FakeFetch::new();
    let api = client(&fetch);

    let opts = RequestOpts {
        method: "POST",
        body: Some(RequestBody::Raw("already-serialized".to_owned())),
        ..RequestOpts::default()
    };
    let _ = block_on(api.request("/echo", opts));
    assert_eq!(fetch.last_request().body.as_deref(), Some("already-serialized"));
}

// =============================================================
// Response interpretation
// =============================================================

#[test]
fn json_success_returns_parsed_body() {
    let fetch = FakeFetch::new();
    fetch.push_json(200, &json!({ "id": 1 }));
    let api = client(&fetch);

    let data = block_on(api.get("/products/1")).expect("request ok");
    assert_eq!(data, json!({ "id": 1 }));
}

#[test]
fn text_success_returns_text() {
    let fetch = FakeFetch::new();
    fetch.push_text(200, "pong");
    let api = client(&fetch);

    let data = block_on(api.get("/ping")).expect("request ok");
    assert_eq!(data, Value::String("pong".to_owned()));
}

#[test]
fn malformed_json_body_degrades_to_null() {
    let fetch = FakeFetch::new();
    fetch.push_response(200, "OK", Some("application/json"), "{not json");
    let api = client(&fetch);

    let data = block_on(api.get("/odd")).expect("request ok");
    assert_eq!(data, Value::Null);
}

// =============================================================
// Failures
// =============================================================

#[test]
fn error_message_prefers_message_field() {
    let fetch = FakeFetch::new();
    fetch.push_json(400, &json!({ "message": "bad input", "error": "other" }));
    let api = client(&fetch);

    let err = block_on(api.get("/x")).expect_err("request fails");
    assert_eq!(err.message, "bad input");
    assert_eq!(err.status, Some(400));
}

#[test]
fn error_message_falls_back_to_error_field() {
    let fetch = FakeFetch::new();
    fetch.push_json(409, &json!({ "error": "username taken" }));
    let api = client(&fetch);

    let err = block_on(api.get("/x")).expect_err("request fails");
    assert_eq!(err.message, "username taken");
}

#[test]
fn error_message_falls_back_to_status_line() {
    let fetch = FakeFetch::new();
    fetch.push_response(
        500,
        "Internal Server Error",
        Some("application/json"),
        "{}",
    );
    let api = client(&fetch);

    let err = block_on(api.get("/x")).expect_err("request fails");
    assert_eq!(err.message, "Internal Server Error");
}

#[test]
fn error_message_has_last_resort_fallback() {
    let fetch = FakeFetch::new();
    fetch.push_response(502, "", None, "");
    let api = client(&fetch);

    let err = block_on(api.get("/x")).expect_err("request fails");
    assert_eq!(err.message, "Request failed");
}

#[test]
fn error_carries_parsed_body() {
    let fetch = FakeFetch::new();
    fetch.push_json(422, &json!({ "message": "nope", "field": "email" }));
    let api = client(&fetch);

    let err = block_on(api.get("/x")).expect_err("request fails");
    assert_eq!(err.data["field"], "email");
}

#[test]
fn transport_error_has_no_status() {
    let fetch = FakeFetch::new();
    fetch.push_transport_error("connection refused");
    let api = client(&fetch);

    let err = block_on(api.get("/x")).expect_err("request fails");
    assert_eq!(err.status, None);
    assert!(!err.is_unauthorized());
}

// =============================================================
// Unauthorized notification
// =============================================================

fn counting_handler() -> (UnauthorizedHandler, Arc<AtomicUsize>) {
    let count = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&count);
    let handler: UnauthorizedHandler = Arc::new(move || {
        seen.fetch_add(1, Ordering::SeqCst);
    });
    (handler, count)
}

#[test]
fn unauthorized_fires_handler_once_and_still_errors() {
    for status in [401, 403] {
        let fetch = FakeFetch::new();
        fetch.push_json(status, &json!({ "message": "expired" }));
        let api = client(&fetch);
        let (handler, count) = counting_handler();
        api.set_unauthorized_handler(Some(handler));

        let err = block_on(api.get("/orders")).expect_err("request fails");
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert_eq!(err.status, Some(status));
        assert_eq!(err.message, "expired");
    }
}

#[test]
fn unauthorized_without_handler_still_errors() {
    let fetch = FakeFetch::new();
    fetch.push_json(401, &json!({ "message": "expired" }));
    let api = client(&fetch);

    let err = block_on(api.get("/orders")).expect_err("request fails");
    assert!(err.is_unauthorized());
}

#[test]
fn other_errors_do_not_fire_handler() {
    let fetch = FakeFetch::new();
    fetch.push_json(500, &json!({ "message": "boom" }));
    let api = client(&fetch);
    let (handler, count) = counting_handler();
    api.set_unauthorized_handler(Some(handler));

    let _ = block_on(api.get("/orders"));
    assert_eq!(count.load(Ordering::SeqCst), 0);
}

#[test]
fn registering_a_handler_replaces_the_previous_one() {
    let fetch = FakeFetch::new();
    fetch.push_json(401, &json!({}));
    let api = client(&fetch);
    let (first, first_count) = counting_handler();
    let (second, second_count) = counting_handler();
    api.set_unauthorized_handler(Some(first));
    api.set_unauthorized_handler(Some(second));

    let _ = block_on(api.get("/orders"));
    assert_eq!(first_count.load(Ordering::SeqCst), 0);
    assert_eq!(second_count.load(Ordering::SeqCst), 1);
}

#[test]
fn cleared_handler_no_longer_fires() {
    let fetch = FakeFetch::new();
    fetch.push_json(401, &json!({}));
    let api = client(&fetch);
    let (handler, count) = counting_handler();
    api.set_unauthorized_handler(Some(handler));
    api.set_unauthorized_handler(None);

    let _ = block_on(api.get("/orders"));
    assert_eq!(count.load(Ordering::SeqCst), 0);
}

#[test]
fn handler_may_clear_the_slot_reentrantly() {
    let fetch = FakeFetch::new();
    fetch.push_json(401, &json!({}));
    fetch.push_json(401, &json!({}));
    let api = Arc::new(client(&fetch));
    let (inner, count) = counting_handler();
    let reentrant = Arc::clone(&api);
    api.set_unauthorized_handler(Some(Arc::new(move || {
        inner();
        reentrant.set_unauthorized_handler(None);
    })));

    let _ = block_on(api.get("/orders"));
    let _ = block_on(api.get("/orders"));
    assert_eq!(count.load(Ordering::SeqCst), 1);
}
