//! Rate catalog endpoints for the dashboard.
//!
//! Catalogs are served whole from the cache; `RateFilter` query parameters
//! narrow the view without touching what is cached.

use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::core::{AppError, Result};
use crate::modules::rates::models::{default_rate, ClassType, RateDraft, RateFilter, RatePatch};
use crate::modules::rates::services::RateCatalogService;

/// Query for `GET /{catalog}/default`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefaultRateQuery {
    pub class_type: ClassType,
    #[serde(default)]
    pub subject: Option<String>,
}

/// GET /tutor-rates
pub async fn list_tutor_rates(
    service: web::Data<RateCatalogService>,
    filter: web::Query<RateFilter>,
) -> Result<HttpResponse> {
    let rates = service.list_tutor_rates().await?;
    Ok(HttpResponse::Ok().json(filter.apply(rates.as_slice())))
}

/// GET /tutor-rates/default
pub async fn default_tutor_rate(
    service: web::Data<RateCatalogService>,
    query: web::Query<DefaultRateQuery>,
) -> Result<HttpResponse> {
    let rates = service.list_tutor_rates().await?;
    let rate = default_rate(rates.as_slice(), query.class_type, query.subject.as_deref())
        .ok_or_else(|| {
            AppError::not_found(format!("No default {} tutor rate", query.class_type))
        })?;
    Ok(HttpResponse::Ok().json(rate))
}

/// POST /tutor-rates
pub async fn create_tutor_rate(
    service: web::Data<RateCatalogService>,
    draft: web::Json<RateDraft>,
) -> Result<HttpResponse> {
    let rate = service.create_tutor_rate(draft.into_inner()).await?;
    Ok(HttpResponse::Created().json(rate))
}

/// PATCH /tutor-rates/{id}
pub async fn update_tutor_rate(
    service: web::Data<RateCatalogService>,
    path: web::Path<String>,
    patch: web::Json<RatePatch>,
) -> Result<HttpResponse> {
    let rate = service
        .update_tutor_rate(&path.into_inner(), patch.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(rate))
}

/// DELETE /tutor-rates/{id}
pub async fn delete_tutor_rate(
    service: web::Data<RateCatalogService>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    service.delete_tutor_rate(&path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// GET /tutor-rates/{id}/assignments
pub async fn list_tutor_rate_assignments(
    service: web::Data<RateCatalogService>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let assignments = service
        .list_tutor_rate_assignments(&path.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(assignments))
}

/// GET /parent-rates
pub async fn list_parent_rates(
    service: web::Data<RateCatalogService>,
    filter: web::Query<RateFilter>,
) -> Result<HttpResponse> {
    let rates = service.list_parent_rates().await?;
    Ok(HttpResponse::Ok().json(filter.apply(rates.as_slice())))
}

/// GET /parent-rates/default
pub async fn default_parent_rate(
    service: web::Data<RateCatalogService>,
    query: web::Query<DefaultRateQuery>,
) -> Result<HttpResponse> {
    let rates = service.list_parent_rates().await?;
    let rate = default_rate(rates.as_slice(), query.class_type, query.subject.as_deref())
        .ok_or_else(|| {
            AppError::not_found(format!("No default {} parent rate", query.class_type))
        })?;
    Ok(HttpResponse::Ok().json(rate))
}

/// POST /parent-rates
pub async fn create_parent_rate(
    service: web::Data<RateCatalogService>,
    draft: web::Json<RateDraft>,
) -> Result<HttpResponse> {
    let rate = service.create_parent_rate(draft.into_inner()).await?;
    Ok(HttpResponse::Created().json(rate))
}

/// PATCH /parent-rates/{id}
pub async fn update_parent_rate(
    service: web::Data<RateCatalogService>,
    path: web::Path<String>,
    patch: web::Json<RatePatch>,
) -> Result<HttpResponse> {
    let rate = service
        .update_parent_rate(&path.into_inner(), patch.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(rate))
}

/// DELETE /parent-rates/{id}
pub async fn delete_parent_rate(
    service: web::Data<RateCatalogService>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    service.delete_parent_rate(&path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Configure rate catalog routes. `/default` is registered ahead of `/{id}`
/// so it is not captured as an id.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/tutor-rates")
            .route("", web::get().to(list_tutor_rates))
            .route("", web::post().to(create_tutor_rate))
            .route("/default", web::get().to(default_tutor_rate))
            .route("/{id}/assignments", web::get().to(list_tutor_rate_assignments))
            .route("/{id}", web::patch().to(update_tutor_rate))
            .route("/{id}", web::delete().to(delete_tutor_rate)),
    )
    .service(
        web::scope("/parent-rates")
            .route("", web::get().to(list_parent_rates))
            .route("", web::post().to(create_parent_rate))
            .route("/default", web::get().to(default_parent_rate))
            .route("/{id}", web::patch().to(update_parent_rate))
            .route("/{id}", web::delete().to(delete_parent_rate)),
    );
}
