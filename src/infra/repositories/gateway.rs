//! Persistence gateway contract shared by every resource.

use async_trait::async_trait;
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::domain::Resource;

/// Closed set of failures a gateway may report.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// The targeted record does not exist
    #[error("record not found")]
    NotFound,

    /// A unique key already holds the submitted value
    #[error("unique constraint violated: {0}")]
    UniqueViolation(String),

    #[error("persistence failure: {0}")]
    Other(String),
}

/// Result type alias
pub type GatewayResult<T> = Result<T, GatewayError>;

impl From<DbErr> for GatewayError {
    fn from(err: DbErr) -> Self {
        if let Some(SqlErr::UniqueConstraintViolation(detail)) = err.sql_err() {
            return GatewayError::UniqueViolation(detail);
        }

        match err {
            DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated => GatewayError::NotFound,
            other => GatewayError::Other(other.to_string()),
        }
    }
}

/// Single-table data access for one resource kind.
///
/// Implementations own their connection handling; callers only see records
/// and [`GatewayError`] variants.
#[async_trait]
pub trait Gateway<R: Resource>: Send + Sync {
    /// All records, ordered by id
    async fn find_many(&self) -> GatewayResult<Vec<R::Record>>;

    async fn find_by_id(&self, id: i32) -> GatewayResult<Option<R::Record>>;

    /// Insert a record; duplicate unique keys fail with `UniqueViolation`
    async fn create(&self, fields: R::Fields) -> GatewayResult<R::Record>;

    /// Replace every writable column; a missing id fails with `NotFound`
    async fn update_by_id(&self, id: i32, fields: R::Fields) -> GatewayResult<R::Record>;

    /// Remove a record and hand it back; a missing id fails with `NotFound`
    async fn delete_by_id(&self, id: i32) -> GatewayResult<R::Record>;
}
