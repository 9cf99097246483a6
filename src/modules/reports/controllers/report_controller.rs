use actix_web::{web, HttpResponse};

use crate::core::Result;
use crate::modules::reports::services::ReportService;

/// GET /profit-report
///
/// Per-link profit table and summary over links whose rates both exist.
pub async fn get_profit_report(service: web::Data<ReportService>) -> Result<HttpResponse> {
    let report = service.generate_profit_report().await?;
    Ok(HttpResponse::Ok().json(report))
}

/// Configure report routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/profit-report", web::get().to(get_profit_report));
}
