//! Liveness probe.

use actix_web::HttpResponse;

/// `GET /status` reports that the process is up and serving.
pub async fn status() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "service": "idp",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
