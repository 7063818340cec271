//! Mapping from domain errors to HTTP responses.
//!
//! Client-input kinds keep their stable machine codes; infrastructure
//! failures surface as generic 503/500 payloads so an unreachable
//! directory is never mistaken for a bad code.

use actix_web::HttpResponse;

use recovery_core::errors::{DomainError, RecoveryError};
use recovery_shared::types::response::{ApiResponse, ErrorResponse};

/// Render a domain error as an HTTP response
pub fn domain_error_response(err: &DomainError) -> HttpResponse {
    match err {
        DomainError::Recovery(kind) => {
            let body = ApiResponse::<()>::error(ErrorResponse::new(kind.code(), kind.to_string()));
            match kind {
                RecoveryError::EmailNotFound => HttpResponse::NotFound().json(body),
                RecoveryError::MissingFields
                | RecoveryError::PasswordTooShort
                | RecoveryError::CodeInvalidOrExpired => HttpResponse::BadRequest().json(body),
            }
        }
        DomainError::Unavailable { message } => {
            log::error!("Dependency unavailable: {}", message);
            HttpResponse::ServiceUnavailable().json(ApiResponse::<()>::error(ErrorResponse::new(
                "SERVICE_UNAVAILABLE",
                "Service temporarily unavailable, please try again later",
            )))
        }
        DomainError::Internal { message } => {
            log::error!("Internal error: {}", message);
            HttpResponse::InternalServerError().json(ApiResponse::<()>::error(ErrorResponse::new(
                "INTERNAL_ERROR",
                "An internal error occurred",
            )))
        }
    }
}

/// Response for requests that fail DTO-level presence validation
///
/// Kept identical to the core's `MissingFields` mapping so callers see
/// one error shape regardless of which layer caught the omission.
pub fn missing_fields_response() -> HttpResponse {
    domain_error_response(&DomainError::Recovery(RecoveryError::MissingFields))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn test_status_codes_per_kind() {
        let cases = [
            (RecoveryError::MissingFields, StatusCode::BAD_REQUEST),
            (RecoveryError::PasswordTooShort, StatusCode::BAD_REQUEST),
            (RecoveryError::EmailNotFound, StatusCode::NOT_FOUND),
            (RecoveryError::CodeInvalidOrExpired, StatusCode::BAD_REQUEST),
        ];
        for (kind, status) in cases {
            let response = domain_error_response(&DomainError::Recovery(kind));
            assert_eq!(response.status(), status);
        }
    }

    #[test]
    fn test_infrastructure_failures_are_distinct() {
        let response = domain_error_response(&DomainError::unavailable("directory down"));
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let response = domain_error_response(&DomainError::internal("bug"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
