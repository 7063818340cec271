use actix_web::{web, HttpResponse};
use validator::Validate;

use recovery_core::repositories::{AccountDirectory, OtpLedger};
use recovery_core::services::mask_email;
use recovery_core::services::recovery::{NotificationChannel, PasswordHasher};
use recovery_shared::types::response::ApiResponse;

use crate::dto::VerifyOtpRequest;
use crate::handlers::{domain_error_response, missing_fields_response};

use super::AppState;

/// Handler for POST /api/v1/recovery/verify-otp
///
/// Non-consuming pre-check: front-ends confirm the code before asking
/// the user for a new password. The success payload is the verified
/// descriptor only; for password-reset verifications it carries no
/// account profile data.
pub async fn verify_otp<L, A, N, H>(
    state: web::Data<AppState<L, A, N, H>>,
    request: web::Json<VerifyOtpRequest>,
) -> HttpResponse
where
    L: OtpLedger + 'static,
    A: AccountDirectory + 'static,
    N: NotificationChannel + 'static,
    H: PasswordHasher + 'static,
{
    if request.0.validate().is_err() {
        return missing_fields_response();
    }

    log::info!(
        "Processing verify-otp request for {} ({})",
        mask_email(&request.email),
        request.purpose
    );

    match state
        .verification_service
        .verify(&request.email, request.purpose, &request.code)
        .await
    {
        Ok(verified) => HttpResponse::Ok().json(ApiResponse::success(verified)),
        Err(err) => domain_error_response(&err),
    }
}
