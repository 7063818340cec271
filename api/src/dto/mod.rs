pub mod recovery_dto;

pub use recovery_dto::{
    ForgotPasswordRequest, MessageResponse, ResetPasswordRequest, VerifyOtpRequest,
};
