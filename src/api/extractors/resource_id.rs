//! Path identifier extractor.

use std::marker::PhantomData;

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::domain::Resource;
use crate::errors::AppError;

/// Integer record id taken from the `:id` path segment.
///
/// The id is read from the leading decimal digits of the segment, so
/// `12abc` is 12. A segment with no leading digits, or one that overflows
/// `i32`, is rejected with a 400 ("Invalid user id" and so on) before the
/// handler runs.
pub struct ResourceId<R> {
    pub id: i32,
    resource: PhantomData<fn() -> R>,
}

impl<R> ResourceId<R> {
    pub fn new(id: i32) -> Self {
        Self {
            id,
            resource: PhantomData,
        }
    }
}

#[async_trait]
impl<S, R> FromRequestParts<S> for ResourceId<R>
where
    S: Send + Sync,
    R: Resource,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let invalid = || AppError::bad_request(R::descriptor().invalid_id(), None);

        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| invalid())?;

        parse_id(&raw).map(Self::new).ok_or_else(invalid)
    }
}

/// Parse a record id from leading whitespace, an optional sign and the
/// digit run that follows. Anything after the digits is ignored.
pub fn parse_id(raw: &str) -> Option<i32> {
    let trimmed = raw.trim_start();
    let sign_len = usize::from(trimmed.starts_with(['+', '-']));
    let digits_len = trimmed[sign_len..]
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len() - sign_len);

    if digits_len == 0 {
        return None;
    }

    trimmed[..sign_len + digits_len].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::parse_id;

    #[test]
    fn accepts_decimal_integers() {
        assert_eq!(parse_id("42"), Some(42));
        assert_eq!(parse_id("-3"), Some(-3));
        assert_eq!(parse_id("+7"), Some(7));
        assert_eq!(parse_id("-2147483648"), Some(i32::MIN));
    }

    #[test]
    fn reads_leading_digits_and_ignores_the_rest() {
        assert_eq!(parse_id("12abc"), Some(12));
        assert_eq!(parse_id("1.5"), Some(1));
        assert_eq!(parse_id(" 1"), Some(1));
        assert_eq!(parse_id("\t-4x"), Some(-4));
    }

    #[test]
    fn rejects_input_without_leading_digits() {
        assert_eq!(parse_id("abc"), None);
        assert_eq!(parse_id(""), None);
        assert_eq!(parse_id("-"), None);
        assert_eq!(parse_id("+x1"), None);
        assert_eq!(parse_id(".5"), None);
        assert_eq!(parse_id("a1"), None);
    }

    #[test]
    fn rejects_ids_that_overflow() {
        assert_eq!(parse_id("99999999999"), None);
        assert_eq!(parse_id("2147483648abc"), None);
    }
}
