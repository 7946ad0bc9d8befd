//! Session state and operations.
//!
//! [`SessionState`] is the plain record of who is signed in; [`Session`] is
//! the handle components use to act on it. The handle couples the state
//! signal with the API client, durable credential storage, and navigation,
//! all injected at construction so tests run against fakes.
//!
//! STATE MACHINE
//! =============
//! Anonymous -> Authenticating -> Authenticated, with `last_error` recording
//! the most recent failed operation. A failed login never ejects an existing
//! session; a rejected credential (401/403 anywhere) always does, via the
//! unauthorized handler installed on the API client.
//!
//! Concurrent logins are not deduplicated. Each operation takes a ticket
//! from a monotonic sequence and only the most recently issued operation may
//! commit its outcome; stale settlements are discarded.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use leptos::prelude::*;
use serde_json::Value;

use crate::net::api::{ApiClient, ApiError};
use crate::net::auth;
use crate::net::types::{LoginRequest, SignupRequest, UserProfile};
use crate::router::LOGIN_PATH;
use crate::router::history::Navigator;
use crate::util::storage::CredentialStore;

/// Lifecycle phase derived from the session record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    Anonymous,
    Authenticating,
    Authenticated,
}

/// Current user identity, credential, and in-flight operation status.
///
/// `user` is only ever present alongside `token`; the reverse can hold
/// right after a reload, until the profile is refetched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub user: Option<UserProfile>,
    pub token: Option<String>,
    pub loading: bool,
    pub last_error: Option<String>,
}

impl SessionState {
    pub fn phase(&self) -> SessionPhase {
        if self.loading {
            SessionPhase::Authenticating
        } else if self.user.is_some() && self.token.is_some() {
            SessionPhase::Authenticated
        } else {
            SessionPhase::Anonymous
        }
    }

    /// An auth operation was issued.
    fn begin(&mut self) {
        self.loading = true;
        self.last_error = None;
    }

    /// Login settled successfully.
    fn adopt(&mut self, token: Option<String>, user: Option<UserProfile>) {
        if let Some(token) = token {
            self.token = Some(token);
        }
        self.user = user;
        self.loading = false;
    }

    /// An operation settled with an error. Credential and user are left as
    /// they were.
    fn fail(&mut self, message: String) {
        self.last_error = Some(message);
        self.loading = false;
    }

    /// An operation settled without touching identity (signup).
    fn settle(&mut self) {
        self.loading = false;
    }

    /// Drop all session facts.
    fn reset(&mut self) {
        self.user = None;
        self.token = None;
        self.loading = false;
        self.last_error = None;
    }
}

/// Handle to the session, shared through context.
#[derive(Clone)]
pub struct Session {
    api: Arc<ApiClient>,
    store: Arc<dyn CredentialStore>,
    nav: Arc<dyn Navigator>,
    state: RwSignal<SessionState>,
    seq: Arc<AtomicU64>,
}

impl Session {
    /// Build the session, seeding the credential from durable storage.
    ///
    /// A stored token is pushed into the API client so requests issued
    /// before any login are already authenticated. Missing or unreadable
    /// storage just means an anonymous start.
    pub fn new(
        api: Arc<ApiClient>,
        store: Arc<dyn CredentialStore>,
        nav: Arc<dyn Navigator>,
    ) -> Self {
        let mut initial = SessionState::default();
        if let Some(token) = store.load() {
            api.set_credential(&token);
            initial.token = Some(token);
        }
        Self {
            api,
            store,
            nav,
            state: RwSignal::new(initial),
            seq: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Reactive read access for components. Consumers must not write back.
    pub fn watch(&self) -> ReadSignal<SessionState> {
        self.state.read_only()
    }

    /// Current state, untracked. Mainly for tests and imperative checks.
    pub fn snapshot(&self) -> SessionState {
        self.state.get_untracked()
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Register the unauthorized callback on the API client.
    ///
    /// Mirrors [`Session::logout`], except it only navigates when not
    /// already on the login view, so a burst of rejected calls cannot loop
    /// the redirect.
    pub fn install_unauthorized_handler(&self) {
        let api = Arc::downgrade(&self.api);
        let store = Arc::clone(&self.store);
        let nav = Arc::clone(&self.nav);
        let state = self.state;
        let seq = Arc::clone(&self.seq);
        self.api.set_unauthorized_handler(Some(Arc::new(move || {
            log::warn!("credential rejected, dropping session");
            seq.fetch_add(1, Ordering::SeqCst);
            if let Some(api) = api.upgrade() {
                api.clear_credential();
            }
            store.clear();
            state.update(SessionState::reset);
            if !nav.current().starts_with(LOGIN_PATH) {
                nav.go(LOGIN_PATH);
            }
        })));
    }

    /// Deregister the unauthorized callback.
    pub fn teardown(&self) {
        self.api.set_unauthorized_handler(None);
    }

    /// Exchange credentials for a session.
    ///
    /// On success the token is persisted and the returned profile adopted.
    /// On failure the error message is recorded and the pre-call
    /// credential/user are untouched.
    pub async fn login(&self, username: &str, password: &str) -> Result<(), ApiError> {
        let ticket = self.issue_ticket();
        let request = LoginRequest {
            username: username.to_owned(),
            password: password.to_owned(),
        };
        let result = auth::login(&self.api, &request).await;
        if !self.is_current(ticket) {
            log::info!("stale login settled, discarding");
            return result.map(|_| ());
        }
        match result {
            Ok(response) => {
                if let Some(token) = response.bearer() {
                    self.store.save(token);
                }
                let token = response.bearer().map(str::to_owned);
                self.state.update(|s| s.adopt(token, response.user));
                Ok(())
            }
            Err(e) => {
                log::warn!("login failed: {e}");
                self.state.update(|s| s.fail(e.message.clone()));
                Err(e)
            }
        }
    }

    /// Create an account. Never mutates the credential or user.
    pub async fn signup(&self, payload: &SignupRequest) -> Result<Value, ApiError> {
        let ticket = self.issue_ticket();
        let result = auth::signup(&self.api, payload).await;
        if !self.is_current(ticket) {
            log::info!("stale signup settled, discarding");
            return result;
        }
        match result {
            Ok(data) => {
                self.state.update(SessionState::settle);
                Ok(data)
            }
            Err(e) => {
                log::warn!("signup failed: {e}");
                self.state.update(|s| s.fail(e.message.clone()));
                Err(e)
            }
        }
    }

    /// Drop the session and return to the login view. Always succeeds,
    /// idempotent.
    pub fn logout(&self) {
        self.seq.fetch_add(1, Ordering::SeqCst);
        self.api.clear_credential();
        self.store.clear();
        self.state.update(SessionState::reset);
        self.nav.go(LOGIN_PATH);
    }

    /// After a reload the store may hold a credential but no profile yet;
    /// refetch it. A failure leaves the session as-is (a credential
    /// rejection is already handled by the unauthorized path).
    pub async fn restore_profile(&self) {
        let pending = self
            .state
            .with_untracked(|s| s.token.is_some() && s.user.is_none());
        if !pending {
            return;
        }
        let ticket = self.seq.load(Ordering::SeqCst);
        match auth::fetch_profile(&self.api).await {
            Ok(user) => {
                if self.is_current(ticket) {
                    self.state.update(|s| {
                        if s.token.is_some() {
                            s.user = Some(user);
                        }
                    });
                }
            }
            Err(e) => log::warn!("profile restore failed: {e}"),
        }
    }

    fn issue_ticket(&self) -> u64 {
        let ticket = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.update(SessionState::begin);
        ticket
    }

    fn is_current(&self, ticket: u64) -> bool {
        self.seq.load(Ordering::SeqCst) == ticket
    }
}
