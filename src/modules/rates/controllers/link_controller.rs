use actix_web::{web, HttpResponse};

use crate::core::Result;
use crate::modules::rates::models::CreateRateLinkRequest;
use crate::modules::rates::services::RateLinkService;

/// GET /rate-links
pub async fn list_links(service: web::Data<RateLinkService>) -> Result<HttpResponse> {
    let links = service.list_links().await?;
    Ok(HttpResponse::Ok().json(links.as_slice()))
}

/// POST /rate-links
pub async fn create_link(
    service: web::Data<RateLinkService>,
    request: web::Json<CreateRateLinkRequest>,
) -> Result<HttpResponse> {
    let link = service
        .create_link(&request.tutor_rate_id, &request.parent_rate_id)
        .await?;
    Ok(HttpResponse::Created().json(link))
}

/// DELETE /rate-links/{id}
///
/// Removes the association only; both rates stay as they were.
pub async fn delete_link(
    service: web::Data<RateLinkService>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    service.delete_link(&path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Configure rate link routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/rate-links")
            .route("", web::get().to(list_links))
            .route("", web::post().to(create_link))
            .route("/{id}", web::delete().to(delete_link)),
    );
}
