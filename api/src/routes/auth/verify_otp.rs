use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth::VerifyOtpRequest;
use crate::handlers::error::{domain_error_response, validation_error_response, verify_result_response};

use lv_core::repositories::{OtpRepository, UserRepository};
use lv_core::services::otp::NotifierTrait;

use super::AppState;

/// Handler for POST /api/v1/auth/verify-otp
///
/// Checks a login code. A correct code can be used once.
///
/// # Request Body
///
/// ```json
/// { "email": "user@example.com", "code": "123456" }
/// ```
///
/// # Responses
///
/// * 200 `logged_in`
/// * 400 `expired` or `validation_error`
/// * 401 `invalid_code`
/// * 404 `not_found`
/// * 503 `store_unavailable`
pub async fn verify_otp<U, O, N>(
    state: web::Data<AppState<U, O, N>>,
    request: web::Json<VerifyOtpRequest>,
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

    match state.otp_service.verify_otp(&request.email, &request.code).await {
        Ok(result) => verify_result_response(result),
        Err(error) => domain_error_response(&error),
    }
}
