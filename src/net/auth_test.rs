use std::sync::Arc;

use futures::executor::block_on;
use serde_json::json;

use super::*;
use crate::net::api::Fetch;
use crate::net::testing::FakeFetch;
use crate::net::types::Role;

fn client(fetch: &Arc<FakeFetch>) -> ApiClient {
    ApiClient::with_fetch("http://store.test/api", Arc::clone(fetch) as Arc<dyn Fetch>)
}

fn credentials() -> LoginRequest {
    LoginRequest {
        username: "alice".to_owned(),
        password: "secret".to_owned(),
    }
}

// =============================================================
// login
// =============================================================

#[test]
fn login_posts_to_login_endpoint() {
    let fetch = FakeFetch::new();
    let api = client(&fetch);

    let _ = block_on(login(&api, &credentials()));
    let req = fetch.last_request();
    assert_eq!(req.method, "POST");
    assert_eq!(req.url, "http://store.test/api/auth/login");
    assert!(req.body.as_deref().is_some_and(|b| b.contains("alice")));
}

#[test]
fn login_sets_credential_from_token() {
    let fetch = FakeFetch::new();
    fetch.push_json(200, &json!({ "token": "tok-1" }));
    let api = client(&fetch);

    let auth = block_on(login(&api, &credentials())).expect("login ok");
    assert_eq!(auth.bearer(), Some("tok-1"));
    assert!(api.has_credential());
}

#[test]
fn login_accepts_access_token_field() {
    let fetch = FakeFetch::new();
    fetch.push_json(200, &json!({ "accessToken": "tok-2" }));
    let api = client(&fetch);

    let auth = block_on(login(&api, &credentials())).expect("login ok");
    assert_eq!(auth.bearer(), Some("tok-2"));
    assert!(api.has_credential());
}

#[test]
fn login_prefers_token_over_access_token() {
    let fetch = FakeFetch::new();
    fetch.push_json(200, &json!({ "token": "tok-1", "accessToken": "tok-2" }));
    let api = client(&fetch);

    let auth = block_on(login(&api, &credentials())).expect("login ok");
    assert_eq!(auth.bearer(), Some("tok-1"));
}

#[test]
fn login_parses_user_profile() {
    let fetch = FakeFetch::new();
    fetch.push_json(
        200,
        &json!({
            "token": "tok-1",
            "user": { "id": "u-1", "displayName": "Alice", "role": "ADMIN" },
        }),
    );
    let api = client(&fetch);

    let auth = block_on(login(&api, &credentials())).expect("login ok");
    let user = auth.user.expect("user present");
    assert_eq!(user.display_name, "Alice");
    assert_eq!(user.role, Role::Admin);
}

#[test]
fn login_without_token_leaves_credential_unset() {
    let fetch = FakeFetch::new();
    fetch.push_json(200, &json!({ "user": { "id": "u-1" } }));
    let api = client(&fetch);

    let _ = block_on(login(&api, &credentials())).expect("login ok");
    assert!(!api.has_credential());
}

#[test]
fn login_failure_propagates_error_and_keeps_credential() {
    let fetch = FakeFetch::new();
    fetch.push_json(401, &json!({ "message": "bad credentials" }));
    let api = client(&fetch);
    api.set_credential("existing");

    let err = block_on(login(&api, &credentials())).expect_err("login fails");
    assert_eq!(err.message, "bad credentials");
    assert!(api.has_credential());
}

// =============================================================
// signup
// =============================================================

#[test]
fn signup_posts_payload_and_returns_body() {
    let fetch = FakeFetch::new();
    fetch.push_json(201, &json!({ "id": "u-9" }));
    let api = client(&fetch);

    let payload = SignupRequest {
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        username: "ada".to_owned(),
        email: "ada@example.com".to_owned(),
        password: "pw".to_owned(),
    };
    let data = block_on(signup(&api, &payload)).expect("signup ok");
    assert_eq!(data["id"], "u-9");
    let req = fetch.last_request();
    assert_eq!(req.url, "http://store.test/api/auth/signup");
    assert!(req.body.as_deref().is_some_and(|b| b.contains("firstName")));
}

#[test]
fn signup_never_touches_credential() {
    let fetch = FakeFetch::new();
    fetch.push_json(201, &json!({ "token": "tok-x" }));
    let api = client(&fetch);

    let _ = block_on(signup(&api, &SignupRequest::default())).expect("signup ok");
    assert!(!api.has_credential());
}

// =============================================================
// fetch_profile
// =============================================================

#[test]
fn fetch_profile_parses_user() {
    let fetch = FakeFetch::new();
    fetch.push_json(
        200,
        &json!({ "id": "u-1", "username": "alice", "role": "USER" }),
    );
    let api = client(&fetch);

    let user = block_on(fetch_profile(&api)).expect("profile ok");
    assert_eq!(user.display_name, "alice");
    assert_eq!(user.role, Role::User);
}

#[test]
fn fetch_profile_tolerates_unknown_role() {
    let fetch = FakeFetch::new();
    fetch.push_json(
        200,
        &json!({ "id": "u-1", "displayName": "Bob", "role": "AUDITOR" }),
    );
    let api = client(&fetch);

    let user = block_on(fetch_profile(&api)).expect("profile ok");
    assert_eq!(user.role, Role::User);
}
