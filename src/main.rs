use actix_web::{App, HttpServer, middleware, web};

use deckgen::config::AppConfig;
use deckgen::handlers;
use deckgen::models::outline::Generator;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = AppConfig::from_env();

    // Catalog is loaded once and shared read-only by every worker
    let generator = match &config.catalog_path {
        Some(path) => {
            let generator = Generator::load(path).map_err(|e| {
                log::error!("Failed to load catalog {}: {e}", path.display());
                std::io::Error::new(std::io::ErrorKind::InvalidData, e)
            })?;
            log::info!("Loaded catalog from {}", path.display());
            generator
        }
        None => Generator::builtin(),
    };
    log::info!(
        "{} categories available, default '{}'",
        generator.catalog().categories().len(),
        generator.catalog().default_category()
    );
    let generator = web::Data::new(generator);

    log::info!("Starting server at http://{}", config.bind_addr);

    let static_dir = config.static_dir.clone();
    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(generator.clone())
            // Static files
            .service(actix_files::Files::new("/static", static_dir.clone()))
            .configure(handlers::configure)
            // Default 404 handler (must be registered last)
            .default_service(web::to(|| async {
                let html = include_str!("../templates/errors/404.html");
                actix_web::HttpResponse::NotFound()
                    .content_type("text/html; charset=utf-8")
                    .body(html)
            }))
    })
    .bind(config.bind_addr.as_str())?
    .run()
    .await
}
