use actix_web::{web, HttpResponse};
use validator::Validate;

use recovery_core::repositories::{AccountDirectory, OtpLedger};
use recovery_core::services::mask_email;
use recovery_core::services::recovery::{NotificationChannel, PasswordHasher};
use recovery_shared::types::response::ApiResponse;

use crate::dto::{MessageResponse, ResetPasswordRequest};
use crate::handlers::{domain_error_response, missing_fields_response};

use super::AppState;

/// Handler for POST /api/v1/recovery/reset-password
///
/// Consumes a valid code exactly once and replaces the account's
/// credential. Accepts both `newPassword` and the legacy `new_password`
/// spelling; precedence is resolved by the core's compatibility shim.
/// The response carries neither the password nor the code.
pub async fn reset_password<L, A, N, H>(
    state: web::Data<AppState<L, A, N, H>>,
    request: web::Json<ResetPasswordRequest>,
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
        "Processing reset-password request for {}",
        mask_email(&request.email)
    );

    match state
        .recovery_service
        .reset_password(request.into_inner().into())
        .await
    {
        Ok(outcome) => HttpResponse::Ok().json(ApiResponse::success(MessageResponse {
            message: outcome.message,
        })),
        Err(err) => domain_error_response(&err),
    }
}
