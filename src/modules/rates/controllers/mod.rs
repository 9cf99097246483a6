pub mod link_controller;
pub mod rate_controller;

use actix_web::web;

/// Configure rate catalog and rate link routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    rate_controller::configure(cfg);
    link_controller::configure(cfg);
}
