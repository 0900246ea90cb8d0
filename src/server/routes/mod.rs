//! HTTP route modules

pub mod transform;
pub mod ui;

use crate::server::handlers::health_check;
use actix_web::web;

/// Register every route the gateway serves
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(ui::index))
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/api").route("/transform", web::post().to(transform::transform_image)),
        );
}
