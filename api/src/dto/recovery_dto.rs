//! Request and response DTOs for the recovery endpoints

use serde::{Deserialize, Serialize};
use validator::Validate;

use recovery_core::domain::entities::otp::OtpPurpose;
use recovery_core::services::recovery::ResetRequest;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ForgotPasswordRequest {
    #[validate(length(min = 1))]
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VerifyOtpRequest {
    #[validate(length(min = 1))]
    pub email: String,
    #[validate(length(min = 1))]
    pub code: String,
    /// Defaults to password reset when omitted; unknown purpose strings
    /// are rejected at deserialization.
    #[serde(default = "default_purpose")]
    pub purpose: OtpPurpose,
}

fn default_purpose() -> OtpPurpose {
    OtpPurpose::PasswordReset
}

/// Reset payload with both password field spellings
///
/// `newPassword` is canonical; `new_password` is the legacy alias older
/// clients still send. Both are carried explicitly (no serde alias) so
/// the precedence decision happens in the core's compatibility shim,
/// where it is tested, not silently at deserialization.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ResetPasswordRequest {
    #[validate(length(min = 1))]
    pub email: String,
    #[validate(length(min = 1))]
    pub code: String,
    #[serde(rename = "newPassword")]
    pub new_password: Option<String>,
    #[serde(rename = "new_password")]
    pub new_password_legacy: Option<String>,
}

impl From<ResetPasswordRequest> for ResetRequest {
    fn from(dto: ResetPasswordRequest) -> Self {
        ResetRequest {
            email: dto.email,
            code: dto.code,
            new_password: dto.new_password,
            new_password_legacy: dto.new_password_legacy,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_request_accepts_both_password_spellings() {
        let json = r#"{"email":"a@b.co","code":"123456","newPassword":"A","new_password":"B"}"#;
        let dto: ResetPasswordRequest = serde_json::from_str(json).unwrap();

        assert_eq!(dto.new_password.as_deref(), Some("A"));
        assert_eq!(dto.new_password_legacy.as_deref(), Some("B"));
    }

    #[test]
    fn test_reset_request_with_legacy_field_only() {
        let json = r#"{"email":"a@b.co","code":"123456","new_password":"B"}"#;
        let dto: ResetPasswordRequest = serde_json::from_str(json).unwrap();

        assert!(dto.new_password.is_none());
        assert_eq!(dto.new_password_legacy.as_deref(), Some("B"));
    }

    #[test]
    fn test_verify_request_purpose_defaults_to_password_reset() {
        let json = r#"{"email":"a@b.co","code":"123456"}"#;
        let dto: VerifyOtpRequest = serde_json::from_str(json).unwrap();
        assert_eq!(dto.purpose, OtpPurpose::PasswordReset);
    }

    #[test]
    fn test_verify_request_rejects_unknown_purpose() {
        let json = r#"{"email":"a@b.co","code":"123456","purpose":"mystery"}"#;
        assert!(serde_json::from_str::<VerifyOtpRequest>(json).is_err());
    }
}
