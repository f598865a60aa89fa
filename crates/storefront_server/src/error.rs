//! Error kinds at the HTTP boundary and their status-code dispatch.
//!
//! # Invariants
//! - `NotFound` is the only 404; `Conflict` and `Unhandled` are 400.
//! - Unhandled failures are described with the request method and URI by
//!   [`describe_failures`]; handlers never format that message themselves.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::Request;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::error;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use storefront_core::{DbError, RepoError, ServiceError};

#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    Conflict(String),
    Unhandled(String),
}

/// Marker left on unhandled-failure responses for [`describe_failures`].
#[derive(Debug, Clone)]
struct UnhandledFailure(String);

#[derive(Serialize)]
struct DetailBody<'a> {
    detail: &'a str,
}

#[derive(Serialize)]
struct MessageBody {
    message: String,
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(detail) | Self::Conflict(detail) | Self::Unhandled(detail) => {
                write!(f, "{detail}")
            }
        }
    }
}

impl Error for ApiError {}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) | Self::Unhandled(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            Self::NotFound(detail) | Self::Conflict(detail) => {
                (status, Json(DetailBody { detail: &detail })).into_response()
            }
            Self::Unhandled(detail) => {
                let mut response = (
                    status,
                    Json(MessageBody {
                        message: detail.clone(),
                    }),
                )
                    .into_response();
                response.extensions_mut().insert(UnhandledFailure(detail));
                response
            }
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(value: ServiceError) -> Self {
        match value {
            ServiceError::NotFound { .. } => Self::NotFound(value.detail()),
            ServiceError::Conflict { .. } => Self::Conflict(value.detail()),
            ServiceError::Repo(err) => Self::from(err),
        }
    }
}

impl From<RepoError> for ApiError {
    fn from(value: RepoError) -> Self {
        Self::Unhandled(value.to_string())
    }
}

impl From<DbError> for ApiError {
    fn from(value: DbError) -> Self {
        Self::Unhandled(value.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(value: JsonRejection) -> Self {
        Self::Unhandled(value.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(value: PathRejection) -> Self {
        Self::Unhandled(value.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(value: QueryRejection) -> Self {
        Self::Unhandled(value.body_text())
    }
}

/// Rewrites unhandled failures into a message naming the request.
///
/// The URI is the request-target as received (path and query), not an
/// absolute URL with scheme and host.
pub async fn describe_failures(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let mut response = next.run(request).await;
    let Some(UnhandledFailure(detail)) = response.extensions_mut().remove::<UnhandledFailure>()
    else {
        return response;
    };

    error!(
        "event=request_failed module=server status=error method={} uri={} error={}",
        method, uri, detail
    );
    let message = format!("Failed to execute: {method}: {uri}. Detail: {detail}");
    (StatusCode::BAD_REQUEST, Json(MessageBody { message })).into_response()
}
