//! Generic CRUD handlers, shared by every [`Resource`].
//!
//! Each handler validates its input through the extractors, makes exactly one
//! gateway call, and maps the outcome to a single response. Gateway failures
//! are classified here, once, by [`GatewayError`] variant.

use std::sync::Arc;

use axum::{extract::State, routing::get, Router};

use crate::api::extractors::{ResourceId, ValidatedJson};
use crate::domain::{Descriptor, Resource};
use crate::errors::{AppError, AppResult};
use crate::infra::{Gateway, GatewayError};
use crate::types::{ApiResponse, Created};

/// Router state for one resource: its injected gateway.
pub struct ResourceState<R: Resource> {
    gateway: Arc<dyn Gateway<R>>,
}

impl<R: Resource> ResourceState<R> {
    pub fn new(gateway: Arc<dyn Gateway<R>>) -> Self {
        Self { gateway }
    }
}

impl<R: Resource> Clone for ResourceState<R> {
    fn clone(&self) -> Self {
        Self {
            gateway: Arc::clone(&self.gateway),
        }
    }
}

/// Create the CRUD routes for resource `R`, to be nested under its path.
pub fn resource_routes<R: Resource>(gateway: Arc<dyn Gateway<R>>) -> Router {
    Router::new()
        .route("/", get(list::<R>).post(create::<R>))
        .route("/:id", get(show::<R>).put(update::<R>).delete(destroy::<R>))
        .with_state(ResourceState::new(gateway))
}

/// List every record
pub async fn list<R: Resource>(
    State(state): State<ResourceState<R>>,
) -> AppResult<ApiResponse<Vec<R::Record>>> {
    let d = R::descriptor();

    let records = state
        .gateway
        .find_many()
        .await
        .map_err(|e| gateway_failure(d, Operation::List, e))?;

    Ok(ApiResponse::success(
        format!("{} retrieved successfully", d.plural_title),
        records,
    ))
}

/// Get one record by id
pub async fn show<R: Resource>(
    State(state): State<ResourceState<R>>,
    ResourceId { id, .. }: ResourceId<R>,
) -> AppResult<ApiResponse<R::Record>> {
    let d = R::descriptor();

    let record = state
        .gateway
        .find_by_id(id)
        .await
        .map_err(|e| gateway_failure(d, Operation::Get, e))?
        .ok_or_else(|| AppError::not_found(d.not_found()))?;

    Ok(ApiResponse::success(
        format!("{} retrieved successfully", d.title),
        record,
    ))
}

/// Create a record
pub async fn create<R: Resource>(
    State(state): State<ResourceState<R>>,
    ValidatedJson(fields): ValidatedJson<R>,
) -> AppResult<Created<R::Record>> {
    let d = R::descriptor();

    let record = state
        .gateway
        .create(fields)
        .await
        .map_err(|e| gateway_failure(d, Operation::Create, e))?;

    tracing::info!(resource = d.plural, "{} created", d.title);

    Ok(Created(ApiResponse::success(
        format!("{} created successfully", d.title),
        record,
    )))
}

/// Replace every writable field of a record
pub async fn update<R: Resource>(
    State(state): State<ResourceState<R>>,
    ResourceId { id, .. }: ResourceId<R>,
    ValidatedJson(fields): ValidatedJson<R>,
) -> AppResult<ApiResponse<R::Record>> {
    let d = R::descriptor();

    let record = state
        .gateway
        .update_by_id(id, fields)
        .await
        .map_err(|e| gateway_failure(d, Operation::Update, e))?;

    Ok(ApiResponse::success(
        format!("{} updated successfully", d.title),
        record,
    ))
}

/// Delete a record, returning it
pub async fn destroy<R: Resource>(
    State(state): State<ResourceState<R>>,
    ResourceId { id, .. }: ResourceId<R>,
) -> AppResult<ApiResponse<R::Record>> {
    let d = R::descriptor();

    let record = state
        .gateway
        .delete_by_id(id)
        .await
        .map_err(|e| gateway_failure(d, Operation::Delete, e))?;

    Ok(ApiResponse::success(
        format!("{} deleted successfully", d.title),
        record,
    ))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operation {
    List,
    Get,
    Create,
    Update,
    Delete,
}

impl Operation {
    fn gerund(self) -> &'static str {
        match self {
            Operation::List | Operation::Get => "fetching",
            Operation::Create => "creating",
            Operation::Update => "updating",
            Operation::Delete => "deleting",
        }
    }

    /// Fixed detail returned for unclassified failures
    fn failure_detail(self, d: &Descriptor) -> String {
        match self {
            Operation::List => format!("Unable to fetch {}", d.plural),
            Operation::Get => format!("Unable to fetch {}", d.singular),
            Operation::Create => format!("Unable to create {}", d.singular),
            Operation::Update => format!("Unable to update {}", d.singular),
            Operation::Delete => format!("Unable to delete {}", d.singular),
        }
    }
}

/// Map a gateway failure to exactly one response.
///
/// Only create reports conflicts, and only update and delete report a
/// missing record; every other combination is a generic 500.
fn gateway_failure(d: &Descriptor, op: Operation, err: GatewayError) -> AppError {
    match (op, err) {
        (Operation::Create, GatewayError::UniqueViolation(constraint)) => {
            tracing::warn!(resource = d.plural, %constraint, "Duplicate {}", d.singular);
            AppError::conflict(d.conflict_message, d.conflict_detail)
        }
        (Operation::Update | Operation::Delete, GatewayError::NotFound) => {
            AppError::not_found(d.not_found())
        }
        (op, err) => {
            tracing::error!(resource = d.plural, error = %err, "Error {} {}", op.gerund(), d.singular);
            AppError::internal(op.failure_detail(d))
        }
    }
}
