use actix_web::{web, HttpResponse};
use std::collections::HashMap;

use crate::errors::{AppError, render};
use crate::models::export::{self, ExportFormat};
use crate::models::outline::{Generator, Outline};
use crate::models::presenter;
use crate::templates_structs::{
    FormValues, OutlineTemplate, PageContext, PresentationFormTemplate, outline_from_form,
};
use crate::validate;

/// GET / - input form with default values.
pub async fn index(generator: web::Data<Generator>) -> Result<HttpResponse, AppError> {
    let catalog = generator.catalog();
    let tmpl = PresentationFormTemplate::new(
        PageContext::new(),
        catalog.categories(),
        FormValues::defaults(catalog.default_category()),
        vec![],
    );
    render(tmpl)
}

/// POST /generate - validate the topic and render a freshly generated outline.
pub async fn generate(
    generator: web::Data<Generator>,
    form: web::Form<HashMap<String, String>>,
) -> Result<HttpResponse, AppError> {
    let catalog = generator.catalog();
    let mut values = FormValues::from_form(&form, catalog.default_category());

    if let Some(error) = validate::validate_topic(&values.topic) {
        return render_form_with_errors(&generator, values, vec![error]);
    }

    values.category = catalog.resolve(&values.category).name.clone();
    let outline = generator.generate(&values.topic, &values.category, values.num_slides);
    log::info!(
        "Generated {} slides for '{}' ({})",
        outline.len(),
        values.topic,
        values.category
    );

    let flash = format!("Generated {} slides for '{}'", outline.len(), values.topic);
    render_outline(&generator, PageContext::new().with_flash(flash), values, outline)
}

/// POST /edit - apply edited slide content and render the outline again.
pub async fn edit(
    generator: web::Data<Generator>,
    form: web::Form<HashMap<String, String>>,
) -> Result<HttpResponse, AppError> {
    let values = FormValues::from_form(&form, generator.catalog().default_category());

    if let Some(error) = validate::validate_topic(&values.topic) {
        return render_form_with_errors(&generator, values, vec![error]);
    }

    let outline = outline_from_form(&form);
    log::info!("Updated {} slides for '{}'", outline.len(), values.topic);

    render_outline(&generator, PageContext::new().with_flash("Slides updated"), values, outline)
}

/// Re-render the input form keeping what the user typed.
pub(crate) fn render_form_with_errors(
    generator: &Generator,
    values: FormValues,
    errors: Vec<String>,
) -> Result<HttpResponse, AppError> {
    let tmpl = PresentationFormTemplate::new(
        PageContext::new(),
        generator.catalog().categories(),
        values,
        errors,
    );
    render(tmpl)
}

fn render_outline(
    generator: &Generator,
    ctx: PageContext,
    values: FormValues,
    outline: Outline,
) -> Result<HttpResponse, AppError> {
    let cards = presenter::build_cards(outline.slides(), values.options(), &mut rand::rng());
    let (record, text_preview) = export::export(&outline, &values.topic);
    let json_preview = record.to_json()?;

    let tmpl = OutlineTemplate {
        ctx,
        category_label: generator.catalog().resolve(&values.category).label.clone(),
        cards,
        slides: outline.into_slides(),
        json_file_name: ExportFormat::Json.file_name(&values.topic),
        text_file_name: ExportFormat::Text.file_name(&values.topic),
        json_preview,
        text_preview,
        form: values,
    };
    render(tmpl)
}
