//! Application factory
//!
//! Builds the Actix-web application around an [`AppState`].

use actix_web::{web, App, HttpResponse};
use tracing_actix_web::TracingLogger;

use crate::handlers::error::json_error_handler;
use crate::routes::auth::{request_otp::request_otp, verify_otp::verify_otp, AppState};
use crate::routes::health::{health_check, root};

use lv_core::repositories::{OtpRepository, UserRepository};
use lv_core::services::otp::NotifierTrait;
use lv_shared::StatusResponse;

/// Register the OTP routes under `/api/v1/auth`
pub fn configure_auth<U, O, N>(cfg: &mut web::ServiceConfig)
where
    U: UserRepository + 'static,
    O: OtpRepository + 'static,
    N: NotifierTrait + 'static,
{
    cfg.service(
        web::scope("/api/v1/auth")
            .route("/request-otp", web::post().to(request_otp::<U, O, N>))
            .route("/verify-otp", web::post().to(verify_otp::<U, O, N>)),
    );
}

/// Create and configure the application with all dependencies
pub fn create_app<U, O, N>(
    app_state: web::Data<AppState<U, O, N>>,
    max_payload_size: usize,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    O: OtpRepository + 'static,
    N: NotifierTrait + 'static,
{
    let json_config = web::JsonConfig::default()
        .limit(max_payload_size)
        .error_handler(json_error_handler);

    App::new()
        .app_data(app_state)
        .app_data(json_config)
        .wrap(TracingLogger::default())
        .route("/", web::get().to(root))
        .route("/health", web::get().to(health_check))
        .configure(configure_auth::<U, O, N>)
        .default_service(web::route().to(|| async {
            HttpResponse::NotFound().json(StatusResponse::new(
                "not_found",
                "The requested resource was not found",
            ))
        }))
}
