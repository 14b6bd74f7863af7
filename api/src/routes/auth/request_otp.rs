use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth::RequestOtpRequest;
use crate::handlers::error::{domain_error_response, validation_error_response};

use lv_core::repositories::{OtpRepository, UserRepository};
use lv_core::services::otp::NotifierTrait;
use lv_shared::StatusResponse;

use super::AppState;

/// Handler for POST /api/v1/auth/request-otp
///
/// Sends a login code to a registered email.
///
/// # Request Body
///
/// ```json
/// { "email": "user@example.com" }
/// ```
///
/// # Responses
///
/// * 200 `sent`
/// * 400 `validation_error`
/// * 404 `unknown_email`
/// * 502 `notify_failed`
/// * 503 `store_unavailable`
pub async fn request_otp<U, O, N>(
    state: web::Data<AppState<U, O, N>>,
    request: web::Json<RequestOtpRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    O: OtpRepository + 'static,
    N: NotifierTrait + 'static,
{
    let request = request.into_inner().trimmed();
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    match state.otp_service.request_otp(&request.email).await {
        Ok(_) => HttpResponse::Ok().json(StatusResponse::new(
            "sent",
            "A login code has been sent to your email",
        )),
        Err(error) => domain_error_response(&error),
    }
}
