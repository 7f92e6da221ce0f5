//! HTTP request extractors.
//!
//! Identity arrives from the upstream authentication layer as two headers;
//! bodies and query strings are decoded with rejections mapped onto
//! [`ServiceError`] so every failure shares one envelope.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{FromRequest, FromRequestParts, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::domain::accounts::{Caller, Role};
use crate::domain::shared::Timestamp;
use crate::error::ServiceError;

/// Header carrying the authenticated user ID.
pub const USER_ID_HEADER: &str = "x-user-id";

/// Header carrying the authenticated user's role.
pub const USER_ROLE_HEADER: &str = "x-user-role";

/// The caller identity of a request.
#[derive(Debug, Clone)]
pub struct CallerIdentity(pub Caller);

fn header<'a>(parts: &'a Parts, name: &str) -> Result<&'a str, ServiceError> {
    let value = parts
        .headers
        .get(name)
        .ok_or_else(|| ServiceError::unauthenticated(format!("Missing {name} header")))?;
    let value = value
        .to_str()
        .map_err(|_| ServiceError::unauthenticated(format!("Unreadable {name} header")))?
        .trim();
    if value.is_empty() {
        return Err(ServiceError::unauthenticated(format!("Empty {name} header")));
    }
    Ok(value)
}

impl<S> FromRequestParts<S> for CallerIdentity
where
    S: Send + Sync,
{
    type Rejection = ServiceError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user_id = header(parts, USER_ID_HEADER)?;
        let role = header(parts, USER_ROLE_HEADER)?;
        let role = Role::from_str_case_insensitive(role)
            .ok_or_else(|| ServiceError::unauthenticated(format!("Unknown role '{role}'")))?;
        Ok(Self(Caller::new(user_id, role)))
    }
}

/// JSON body extractor whose rejection is a `VALIDATION_ERROR`.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ServiceError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(json_rejection(&rejection)),
        }
    }
}

fn json_rejection(rejection: &JsonRejection) -> ServiceError {
    ServiceError::validation(rejection.body_text())
}

/// Query string for the dashboard.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardQuery {
    /// Reference instant, RFC 3339.
    pub as_of: Option<String>,
}

impl DashboardQuery {
    /// Decode an extracted query, mapping rejections and bad timestamps to
    /// validation errors.
    pub fn reference_time(
        query: Result<Query<Self>, QueryRejection>,
    ) -> Result<Option<Timestamp>, ServiceError> {
        let Query(query) = query.map_err(|e| ServiceError::validation(e.body_text()))?;
        query
            .as_of
            .map(|raw| {
                Timestamp::parse(&raw).map_err(|e| {
                    ServiceError::validation(format!("asOf must be an RFC 3339 timestamp: {e}"))
                        .with_context("field", "asOf")
                })
            })
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use axum::http::Request as HttpRequest;

    use super::*;
    use crate::error::ErrorCode;

    async fn extract(request: HttpRequest<()>) -> Result<CallerIdentity, ServiceError> {
        let (mut parts, ()) = request.into_parts();
        CallerIdentity::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn reads_identity_headers() {
        let request = HttpRequest::builder()
            .header(USER_ID_HEADER, "u-1")
            .header(USER_ROLE_HEADER, "Admin")
            .body(())
            .unwrap();
        let CallerIdentity(caller) = extract(request).await.unwrap();
        assert_eq!(caller.user_id.as_str(), "u-1");
        assert!(caller.is_admin());
    }

    #[tokio::test]
    async fn missing_header_is_unauthenticated() {
        let request = HttpRequest::builder()
            .header(USER_ID_HEADER, "u-1")
            .body(())
            .unwrap();
        let err = extract(request).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::Unauthenticated);
    }

    #[tokio::test]
    async fn unknown_role_is_unauthenticated() {
        let request = HttpRequest::builder()
            .header(USER_ID_HEADER, "u-1")
            .header(USER_ROLE_HEADER, "superuser")
            .body(())
            .unwrap();
        let err = extract(request).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::Unauthenticated);
    }

    #[test]
    fn bad_as_of_is_validation_error() {
        let query = Ok(Query(DashboardQuery {
            as_of: Some("yesterday".to_string()),
        }));
        let err = DashboardQuery::reference_time(query).unwrap_err();
        assert_eq!(err.code(), ErrorCode::ValidationError);

        let query = Ok(Query(DashboardQuery {
            as_of: Some("2026-05-02T12:00:00Z".to_string()),
        }));
        assert!(DashboardQuery::reference_time(query).unwrap().is_some());
    }
}
