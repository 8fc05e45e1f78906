use actix_web::HttpResponse;
use thiserror::Error;

use crate::domain::errors::DomainError;

/// Errors surfaced to HTTP clients. Every body is `{"error": <message>}`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Internal(String),
}

impl AppError {
    /// Maps a domain failure onto a response. Invalid input keeps its detail;
    /// everything else, not-found included, becomes a 500 carrying `message`.
    pub fn from_domain(err: DomainError, message: &str) -> Self {
        match err {
            DomainError::InvalidInput(detail) => AppError::BadRequest(detail),
            other => {
                log::error!("{}: {}", message, other);
                AppError::Internal(message.to_string())
            }
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        match self {
            AppError::BadRequest(_) => actix_web::http::StatusCode::BAD_REQUEST,
            AppError::Internal(_) => actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "error": self.to_string()
        }))
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn bad_request_returns_400() {
        let resp = AppError::BadRequest("quantity is required".to_string()).error_response();
        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn internal_error_returns_500() {
        let err = AppError::Internal("something went wrong".to_string());
        assert_eq!(
            err.error_response().status(),
            actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn display_is_the_client_message() {
        assert_eq!(AppError::Internal("msg".to_string()).to_string(), "msg");
    }

    #[test]
    fn domain_invalid_input_maps_to_bad_request_with_detail() {
        let app_err = AppError::from_domain(
            DomainError::InvalidInput("bad value".to_string()),
            "ignored",
        );
        assert!(matches!(app_err, AppError::BadRequest(ref d) if d == "bad value"));
    }

    #[test]
    fn domain_not_found_maps_to_internal() {
        let app_err = AppError::from_domain(DomainError::NotFound, "lookup failed");
        assert!(matches!(app_err, AppError::Internal(ref m) if m == "lookup failed"));
    }

    #[test]
    fn domain_timeout_maps_to_internal_without_leaking_detail() {
        let app_err = AppError::from_domain(
            DomainError::Timeout(Duration::from_secs(100)),
            "update failed",
        );
        assert_eq!(app_err.to_string(), "update failed");
    }
}
