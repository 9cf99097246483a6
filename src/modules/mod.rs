pub mod health;
pub mod rates;
pub mod reports;

use actix_web::web;

/// Dashboard API routes, mounted under `/api`
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .configure(rates::configure)
            .configure(reports::configure),
    );
}
