use actix_web::http::header::{
    Charset, ContentDisposition, DispositionParam, DispositionType, ExtendedValue,
};
use actix_web::{web, HttpResponse};
use std::collections::HashMap;

use crate::errors::AppError;
use crate::handlers::presentation_handlers::render_form_with_errors;
use crate::models::export::{self, ExportFormat};
use crate::models::outline::{Generator, Outline};
use crate::templates_structs::{FormValues, outline_from_form};
use crate::validate;

/// POST /export/{format} - download the submitted outline as JSON or text.
pub async fn download(
    generator: web::Data<Generator>,
    path: web::Path<String>,
    form: web::Form<HashMap<String, String>>,
) -> Result<HttpResponse, AppError> {
    let format = ExportFormat::parse(&path.into_inner()).ok_or(AppError::NotFound)?;
    let values = FormValues::from_form(&form, generator.catalog().default_category());

    if let Some(error) = validate::validate_topic(&values.topic) {
        return render_form_with_errors(&generator, values, vec![error]);
    }

    let outline = outline_from_form(&form);
    attachment(&outline, &values.topic, format)
}

/// Export `outline` and wrap the chosen format as a file download.
pub(crate) fn attachment(
    outline: &Outline,
    topic: &str,
    format: ExportFormat,
) -> Result<HttpResponse, AppError> {
    let (record, _) = export::export(outline, topic);
    let body = record.render(format)?;

    log::info!(
        "Exported {} slides for '{}' as {}",
        record.slides.len(),
        topic,
        format.extension()
    );

    Ok(HttpResponse::Ok()
        .content_type(format.mime_type())
        .insert_header(ContentDisposition {
            disposition: DispositionType::Attachment,
            parameters: file_name_params(format.file_name(topic)),
        })
        .body(body))
}

/// `filename` must stay ASCII; non-ASCII names also go out as an RFC 5987
/// `filename*` with the plain parameter as fallback.
fn file_name_params(name: String) -> Vec<DispositionParam> {
    if name.is_ascii() {
        return vec![DispositionParam::Filename(name)];
    }
    let fallback = name
        .chars()
        .map(|c| if c.is_ascii() { c } else { '_' })
        .collect();
    vec![
        DispositionParam::Filename(fallback),
        DispositionParam::FilenameExt(ExtendedValue {
            charset: Charset::Ext("UTF-8".to_string()),
            language_tag: None,
            value: name.into_bytes(),
        }),
    ]
}
