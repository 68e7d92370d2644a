use actix_web::{HttpResponse, ResponseError};
use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use serde::Serialize;
use thiserror::Error;
use crate::error::{AddressError, FaviconError, PingError};

/// Sent when even the error message cannot be serialized.
pub const JSON_MARSHAL_ERROR: &str = r#"{"error": "Error marshaling json! Please make a bug report."}"#;

/// Errors reported to http clients as `{"error": "<message>"}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Address(#[from] AddressError),
    #[error("Failed to connect to server: {0}")]
    Ping(#[from] PingError),
    #[error(transparent)]
    Favicon(#[from] FaviconError),
    #[error("Failed to marshal response JSON!")]
    Internal(serde_json::Error),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Address(_) => StatusCode::BAD_REQUEST,
            ApiError::Ping(PingError::TimedOut) => StatusCode::GATEWAY_TIMEOUT,
            ApiError::Ping(_) => StatusCode::BAD_GATEWAY,
            ApiError::Favicon(FaviconError::NoIcon) => StatusCode::NOT_FOUND,
            ApiError::Favicon(_) => StatusCode::BAD_GATEWAY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = serde_json::to_string(&ErrorBody { error: self.to_string() })
            .unwrap_or_else(|_| JSON_MARSHAL_ERROR.to_string());
        HttpResponse::build(self.status_code())
            .content_type(ContentType::json())
            .body(body)
    }
}
