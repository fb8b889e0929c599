use rocket::serde::json::Json;
use serde::Serialize;
use utoipa::ToSchema;

/// Liveness payload.
#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct HealthStatus {
    status: String,
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    summary = "Health check",
    description = "Returns service status for health checks.",
    responses((status = 200, description = "Service is up", body = HealthStatus))
)]
#[rocket::get("/health")]
pub(crate) fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok".to_string(),
    })
}
