pub mod api_v1;
pub mod export_handlers;
pub mod presentation_handlers;

use actix_web::web;

/// Register the HTML pages, download endpoints and the JSON API.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(presentation_handlers::index))
        .route("/generate", web::post().to(presentation_handlers::generate))
        .route("/edit", web::post().to(presentation_handlers::edit))
        .route("/export/{format}", web::post().to(export_handlers::download))
        .service(web::scope("/api/v1").configure(api_v1::configure));
}
