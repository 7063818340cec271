//! Route registration and middleware construction.
//!
//! The binary and the tests both assemble their `App` from these
//! pieces: `configure_routes` registers the recovery endpoints for a
//! concrete set of service implementations, `create_cors` builds the
//! CORS middleware.

use actix_cors::Cors;
use actix_web::{web, HttpResponse};

use recovery_core::repositories::{AccountDirectory, OtpLedger};
use recovery_core::services::recovery::{NotificationChannel, PasswordHasher};
use recovery_shared::types::response::HealthResponse;

use crate::handlers::missing_fields_response;
use crate::routes::recovery::{forgot_password, reset_password, verify_otp};

/// Register the health check and the `/api/v1/recovery` scope
///
/// The matching `AppState` must be attached via `app_data` by the
/// caller. Body extraction failures (absent keys, malformed JSON) are
/// rendered as the same `MISSING_FIELDS` envelope the handlers return,
/// so callers see one error shape regardless of which layer rejected
/// the body.
pub fn configure_routes<L, A, N, H>(cfg: &mut web::ServiceConfig)
where
    L: OtpLedger + 'static,
    A: AccountDirectory + 'static,
    N: NotificationChannel + 'static,
    H: PasswordHasher + 'static,
{
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        actix_web::error::InternalError::from_response(err, missing_fields_response()).into()
    }))
    .route("/health", web::get().to(health_check)).service(
        web::scope("/api/v1").service(
            web::scope("/recovery")
                .route(
                    "/forgot-password",
                    web::post().to(forgot_password::<L, A, N, H>),
                )
                .route("/verify-otp", web::post().to(verify_otp::<L, A, N, H>))
                .route(
                    "/reset-password",
                    web::post().to(reset_password::<L, A, N, H>),
                ),
        ),
    );
}

/// CORS middleware for the recovery endpoints
pub fn create_cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec!["GET", "POST"])
        .allow_any_header()
        .max_age(3600)
}

async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse::ok())
}
