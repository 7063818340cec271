use actix_web::{web, HttpResponse};
use validator::Validate;

use recovery_core::repositories::{AccountDirectory, OtpLedger};
use recovery_core::services::mask_email;
use recovery_core::services::recovery::{NotificationChannel, PasswordHasher};
use recovery_shared::types::response::ApiResponse;

use crate::dto::{ForgotPasswordRequest, MessageResponse};
use crate::handlers::{domain_error_response, missing_fields_response};

use super::AppState;

/// Handler for POST /api/v1/recovery/forgot-password
///
/// Issues a password-reset code and hands it to the notification
/// channel. The response confirms issuance only; the code itself
/// travels out of band and appears in no payload.
pub async fn forgot_password<L, A, N, H>(
    state: web::Data<AppState<L, A, N, H>>,
    request: web::Json<ForgotPasswordRequest>,
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
        "Processing forgot-password request for {}",
        mask_email(&request.email)
    );

    match state.recovery_service.request_code(&request.email).await {
        Ok(result) => {
            if !result.delivered {
                log::warn!(
                    "Code issued but delivery failed for {}",
                    mask_email(&request.email)
                );
            }
            HttpResponse::Ok().json(ApiResponse::success(MessageResponse {
                message: result.message,
            }))
        }
        Err(err) => domain_error_response(&err),
    }
}
