use actix_web::HttpResponse;
use lv_shared::HealthResponse;

/// Handler for GET /health
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse::healthy(
        "lawvriksh-api",
        env!("CARGO_PKG_VERSION"),
    ))
}

/// Handler for GET /
pub async fn root() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Welcome to the LawVriksh Backend"
    }))
}
