use askama::Template;
use std::collections::HashMap;

use crate::models::catalog::CategoryOption;
use crate::models::outline::{Outline, Slide};
use crate::models::presenter::{DisplayOptions, SlideCard};
use crate::validate::{self, MAX_SLIDES, MIN_SLIDES};
use super::PageContext;

/// Input form values, as submitted or as defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct FormValues {
    pub topic: String,
    pub category: String,
    pub num_slides: i64,
    pub include_speaker_notes: bool,
    pub include_timing: bool,
}

impl FormValues {
    pub fn defaults(default_category: &str) -> Self {
        let options = DisplayOptions::default();
        Self {
            topic: String::new(),
            category: default_category.to_string(),
            num_slides: validate::DEFAULT_SLIDES,
            include_speaker_notes: options.include_speaker_notes,
            include_timing: options.include_timing,
        }
    }

    /// Read the input fields from a submitted form. Checkboxes are only
    /// present when ticked.
    pub fn from_form(form: &HashMap<String, String>, default_category: &str) -> Self {
        Self {
            topic: form.get("topic").cloned().unwrap_or_default(),
            category: form
                .get("category")
                .filter(|c| !c.is_empty())
                .cloned()
                .unwrap_or_else(|| default_category.to_string()),
            num_slides: validate::clamp_slide_count(form.get("num_slides").map(|s| s.as_str())),
            include_speaker_notes: form.contains_key("include_speaker_notes"),
            include_timing: form.contains_key("include_timing"),
        }
    }

    pub fn options(&self) -> DisplayOptions {
        DisplayOptions {
            include_speaker_notes: self.include_speaker_notes,
            include_timing: self.include_timing,
        }
    }
}

/// Rebuild an outline from the editor's `title_{i}` / `content_{i}` fields.
///
/// Indices are read from 0 upward and stop at the first missing title.
/// A missing content field keeps the slide with empty content.
pub fn outline_from_form(form: &HashMap<String, String>) -> Outline {
    let slides = (0..)
        .map_while(|i| {
            let title = form.get(&format!("title_{i}"))?;
            let content = form.get(&format!("content_{i}")).cloned().unwrap_or_default();
            Some(Slide { title: title.clone(), content })
        })
        .collect();
    Outline::from_slides(slides)
}

#[derive(Template)]
#[template(path = "presentation/form.html")]
pub struct PresentationFormTemplate {
    pub ctx: PageContext,
    pub categories: Vec<CategoryOption>,
    pub form: FormValues,
    pub errors: Vec<String>,
    pub min_slides: i64,
    pub max_slides: i64,
}

impl PresentationFormTemplate {
    pub fn new(ctx: PageContext, categories: Vec<CategoryOption>, form: FormValues, errors: Vec<String>) -> Self {
        Self { ctx, categories, form, errors, min_slides: MIN_SLIDES, max_slides: MAX_SLIDES }
    }
}

#[derive(Template)]
#[template(path = "presentation/outline.html")]
pub struct OutlineTemplate {
    pub ctx: PageContext,
    pub form: FormValues,
    pub category_label: String,
    pub cards: Vec<SlideCard>,
    pub slides: Vec<Slide>,
    pub json_file_name: String,
    pub text_file_name: String,
    pub json_preview: String,
    pub text_preview: String,
}
