use actix_web::{get, web, HttpResponse, Responder};
use chrono::{DateTime, Utc};
use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use serde::Serialize;
use std::sync::Arc;
use tracing::warn;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    timestamp: DateTime<Utc>,
}

#[derive(Serialize)]
struct ReadinessResponse {
    status: &'static str,
    database: &'static str,
}

#[derive(Serialize)]
struct ServiceInfo {
    message: &'static str,
    version: &'static str,
    endpoints: Vec<&'static str>,
}

/// LIVENESS PROBE
/// - No I/O
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        timestamp: Utc::now(),
    })
}

/// READINESS PROBE
/// - Checks the database
#[get("/ready")]
pub async fn readiness(db: web::Data<Arc<DatabaseConnection>>) -> impl Responder {
    let result = db
        .execute(Statement::from_string(
            db.get_database_backend(),
            "SELECT 1",
        ))
        .await;

    match result {
        Ok(_) => HttpResponse::Ok().json(ReadinessResponse {
            status: "ok",
            database: "ok",
        }),
        Err(e) => {
            warn!(error = %e, "Readiness check failed");
            HttpResponse::ServiceUnavailable().json(ReadinessResponse {
                status: "unhealthy",
                database: "unhealthy",
            })
        }
    }
}

#[get("/")]
pub async fn service_info() -> impl Responder {
    HttpResponse::Ok().json(ServiceInfo {
        message: "RecycLog API",
        version: env!("CARGO_PKG_VERSION"),
        endpoints: vec![
            "POST /api/v1/users/register",
            "POST /api/v1/users/login",
            "GET /api/v1/users/me",
            "PUT /api/v1/users/profile",
            "POST /api/v1/users/logout",
            "GET /api/v1/users/leaderboard",
            "POST /api/v1/recycling/log",
            "GET /api/v1/recycling/stats",
            "GET /health",
            "GET /ready",
        ],
    })
}
