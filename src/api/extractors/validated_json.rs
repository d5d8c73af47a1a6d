//! Validated JSON extractor - Combines deserialization with validation.

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use validator::Validate;

use crate::domain::Resource;
use crate::errors::AppError;

/// Validated request body for resource `R`, already normalized into the
/// writable fields handed to the gateway.
///
/// Malformed JSON, wrongly typed fields and missing or empty required fields
/// all reject with the same 400 "Invalid request body" response.
///
/// # Example
///
/// ```rust,ignore
/// use resource_api::api::extractors::ValidatedJson;
/// use resource_api::domain::UserResource;
///
/// async fn create_user(ValidatedJson(fields): ValidatedJson<UserResource>) {
///     // fields.role is already defaulted to "user"
/// }
/// ```
pub struct ValidatedJson<R: Resource>(pub R::Fields);

#[async_trait]
impl<S, R> FromRequest<S> for ValidatedJson<R>
where
    S: Send + Sync,
    R: Resource,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let descriptor = R::descriptor();

        let Json(payload) = Json::<R::Payload>::from_request(req, state)
            .await
            .map_err(|e| {
                tracing::debug!(resource = descriptor.plural, "Rejected body: {}", e.body_text());
                invalid_body::<R>()
            })?;

        payload.validate().map_err(|e| {
            tracing::debug!(
                resource = descriptor.plural,
                "Rejected body: {}",
                format_validation_errors(&e)
            );
            invalid_body::<R>()
        })?;

        Ok(ValidatedJson(R::into_fields(payload)))
    }
}

fn invalid_body<R: Resource>() -> AppError {
    AppError::bad_request(
        "Invalid request body",
        Some(R::descriptor().required_fields.to_string()),
    )
}

/// Format validation errors into a log-friendly string
fn format_validation_errors(errors: &validator::ValidationErrors) -> String {
    errors
        .field_errors()
        .iter()
        .map(|(field, errs)| {
            let codes: Vec<&str> = errs.iter().map(|e| e.code.as_ref()).collect();
            format!("{} ({})", field, codes.join(", "))
        })
        .collect::<Vec<_>>()
        .join(", ")
}
