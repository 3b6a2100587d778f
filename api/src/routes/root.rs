use actix_web::HttpResponse;

/// Handler for GET /
pub async fn read_root() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "Hello": "World" }))
}

/// Handler for GET /health
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "food-names-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
