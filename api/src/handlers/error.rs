//! Mapping of domain outcomes and errors to HTTP responses
//!
//! Every body is a [`StatusResponse`]. Storage and provider error text is
//! logged by the service and never echoed here.

use actix_web::{error::JsonPayloadError, http::StatusCode, HttpRequest, HttpResponse};
use lv_core::errors::DomainError;
use lv_core::services::otp::VerifyCodeResult;
use lv_shared::StatusResponse;
use validator::ValidationErrors;

fn respond(status: StatusCode, code: &str, message: &str) -> HttpResponse {
    HttpResponse::build(status).json(StatusResponse::new(code, message))
}

/// Response for a failed service call
pub fn domain_error_response(error: &DomainError) -> HttpResponse {
    match error {
        DomainError::Validation { .. } => respond(
            StatusCode::BAD_REQUEST,
            "validation_error",
            "The request is not valid",
        ),
        DomainError::UnknownEmail => respond(
            StatusCode::NOT_FOUND,
            "unknown_email",
            "No account is registered for this email",
        ),
        DomainError::NotifyFailed { .. } => respond(
            StatusCode::BAD_GATEWAY,
            "notify_failed",
            "The login code could not be delivered. Please try again",
        ),
        DomainError::StoreUnavailable { .. } => respond(
            StatusCode::SERVICE_UNAVAILABLE,
            "store_unavailable",
            "The service is temporarily unavailable. Please try again later",
        ),
        DomainError::Internal { .. } => respond(
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal_error",
            "An internal error occurred",
        ),
    }
}

/// Response for a finished verification
pub fn verify_result_response(result: VerifyCodeResult) -> HttpResponse {
    match result {
        VerifyCodeResult::LoggedIn => respond(StatusCode::OK, "logged_in", "Login successful"),
        VerifyCodeResult::Expired => respond(
            StatusCode::BAD_REQUEST,
            "expired",
            "The login code has expired. Please request a new one",
        ),
        VerifyCodeResult::Invalid => respond(
            StatusCode::UNAUTHORIZED,
            "invalid_code",
            "The login code is incorrect",
        ),
        VerifyCodeResult::NotFound => respond(
            StatusCode::NOT_FOUND,
            "not_found",
            "No pending login code for this email. Please request a new one",
        ),
    }
}

/// Response for a request body that failed field validation
pub fn validation_error_response(errors: &ValidationErrors) -> HttpResponse {
    let mut fields: Vec<&str> = errors.field_errors().keys().copied().collect();
    fields.sort_unstable();

    respond(
        StatusCode::BAD_REQUEST,
        "validation_error",
        &format!("Invalid value for: {}", fields.join(", ")),
    )
}

/// Turn malformed JSON bodies into the standard 400 envelope
pub fn json_error_handler(error: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    tracing::debug!(error = %error, "Rejected malformed JSON body");
    let response = respond(
        StatusCode::BAD_REQUEST,
        "validation_error",
        "Request body must be valid JSON",
    );
    actix_web::error::InternalError::from_response(error, response).into()
}
