use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::modules::rates::models::TutorRate;
use crate::modules::rates::repositories::BackendClient;

/// Health check response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub checks: HealthChecks,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthChecks {
    pub backend: String,
    pub application: String,
}

/// Readiness check response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub checks: ReadinessChecks,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessChecks {
    pub backend: bool,
    pub application: bool,
}

/// GET /health - Liveness check
/// Does not check the rates backend
pub async fn health_check() -> impl Responder {
    let response = HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        checks: HealthChecks {
            backend: "not_checked".to_string(),
            application: "healthy".to_string(),
        },
    };

    HttpResponse::Ok().json(response)
}

/// GET /ready - Readiness check
/// Lists tutor rates straight from the backend, bypassing the cache
pub async fn readiness_check(backend: web::Data<BackendClient>) -> impl Responder {
    let mut checks = ReadinessChecks {
        backend: false,
        application: true,
    };

    match backend.list_rates::<TutorRate>().await {
        Ok(_) => {
            checks.backend = true;
        }
        Err(e) => {
            tracing::error!("Backend readiness check failed: {}", e);
        }
    }

    let ready = checks.backend && checks.application;
    let response = ReadinessResponse { ready, checks };

    if ready {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}

/// Configure health check routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/ready", web::get().to(readiness_check));
}
