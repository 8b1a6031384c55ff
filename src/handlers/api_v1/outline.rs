use actix_web::{web, HttpResponse};

use crate::errors::AppError;
use crate::handlers::export_handlers::attachment;
use crate::models::export::ExportFormat;
use crate::models::outline::{Generator, Outline};
use crate::templates_structs::{
    ApiErrorResponse, ApiExportRequest, ApiOutlineRequest, ApiOutlineResponse,
};
use crate::validate;

fn invalid_topic(details: String) -> HttpResponse {
    HttpResponse::BadRequest().json(ApiErrorResponse {
        error: "Validation failed".to_string(),
        details: Some(details),
    })
}

/// GET /api/v1/categories - Known categories with their template length
pub async fn categories(generator: web::Data<Generator>) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(generator.catalog().categories()))
}

/// POST /api/v1/outline - Generate an outline
/// Unknown categories fall back to the default; counts are not clamped.
pub async fn generate(
    generator: web::Data<Generator>,
    body: web::Json<ApiOutlineRequest>,
) -> Result<HttpResponse, AppError> {
    if let Some(error) = validate::validate_topic(&body.topic) {
        return Ok(invalid_topic(error));
    }

    let catalog = generator.catalog();
    let requested = body.category.as_deref().unwrap_or(catalog.default_category());
    let category = catalog.resolve(requested).name.clone();
    let count = body.slide_count.unwrap_or(validate::DEFAULT_SLIDES);

    let outline = generator.generate(&body.topic, &category, count);
    log::info!("API generated {} slides for '{}' ({})", outline.len(), body.topic, category);

    Ok(HttpResponse::Ok().json(ApiOutlineResponse {
        topic: body.topic.clone(),
        category,
        slides: outline.into_slides(),
    }))
}

/// POST /api/v1/export - Serialize slides as a JSON or text document
pub async fn export(body: web::Json<ApiExportRequest>) -> Result<HttpResponse, AppError> {
    if let Some(error) = validate::validate_topic(&body.topic) {
        return Ok(invalid_topic(error));
    }

    let requested = body.format.as_deref().unwrap_or("json");
    let Some(format) = ExportFormat::parse(requested) else {
        return Ok(HttpResponse::BadRequest().json(ApiErrorResponse {
            error: "Unsupported export format".to_string(),
            details: Some(format!("'{requested}' is not one of: json, text")),
        }));
    };

    let body = body.into_inner();
    let outline = Outline::from_slides(body.slides);
    attachment(&outline, &body.topic, format)
}
