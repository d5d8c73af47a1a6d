//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use resource_api::api::handlers::resource_routes;
use resource_api::domain::{User, UserFields, UserResource};
use resource_api::infra::{Gateway, GatewayError, GatewayResult};

// =============================================================================
// In-memory gateway
// =============================================================================

/// In-memory user gateway that counts every call it receives.
///
/// Enforces email uniqueness and assigns ids from 1, like the real table.
#[derive(Default)]
pub struct FakeUserGateway {
    state: Mutex<FakeState>,
    calls: AtomicUsize,
}

#[derive(Default)]
struct FakeState {
    rows: BTreeMap<i32, User>,
    last_id: i32,
}

impl FakeUserGateway {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Number of gateway operations invoked so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record_call(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

fn to_user(id: i32, fields: UserFields) -> User {
    User {
        id,
        name: fields.name,
        email: fields.email,
        password: fields.password,
        tel: fields.tel,
        role: fields.role,
    }
}

#[async_trait]
impl Gateway<UserResource> for FakeUserGateway {
    async fn find_many(&self) -> GatewayResult<Vec<User>> {
        self.record_call();
        let state = self.state.lock().unwrap();
        Ok(state.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> GatewayResult<Option<User>> {
        self.record_call();
        let state = self.state.lock().unwrap();
        Ok(state.rows.get(&id).cloned())
    }

    async fn create(&self, fields: UserFields) -> GatewayResult<User> {
        self.record_call();
        let mut state = self.state.lock().unwrap();

        if state.rows.values().any(|u| u.email == fields.email) {
            return Err(GatewayError::UniqueViolation("users_email_key".to_string()));
        }

        state.last_id += 1;
        let user = to_user(state.last_id, fields);
        state.rows.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update_by_id(&self, id: i32, fields: UserFields) -> GatewayResult<User> {
        self.record_call();
        let mut state = self.state.lock().unwrap();

        let row = state.rows.get_mut(&id).ok_or(GatewayError::NotFound)?;
        *row = to_user(id, fields);
        Ok(row.clone())
    }

    async fn delete_by_id(&self, id: i32) -> GatewayResult<User> {
        self.record_call();
        let mut state = self.state.lock().unwrap();

        state.rows.remove(&id).ok_or(GatewayError::NotFound)
    }
}

// =============================================================================
// Request helpers
// =============================================================================

/// Router serving only `/users` on top of the given gateway
pub fn user_router(gateway: Arc<dyn Gateway<UserResource>>) -> Router {
    Router::new().nest("/users", resource_routes(gateway))
}

/// Send a request with an optional JSON body and decode the JSON response
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    dispatch(app, request).await
}

/// Send a request whose body is passed through untouched
pub async fn send_raw(app: &Router, method: Method, uri: &str, body: &'static str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap();

    dispatch(app, request).await
}

/// Send a bodiless request and return the response body as text
pub async fn send_text(app: &Router, uri: &str) -> (StatusCode, String) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, String::from_utf8_lossy(&bytes).into_owned())
}

async fn dispatch(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, json)
}
