// Template context structures for Askama templates and API payloads.

mod api;
mod presentation;

pub use self::api::{ApiOutlineRequest, ApiOutlineResponse, ApiExportRequest, ApiErrorResponse};
pub use self::presentation::{
    FormValues, PresentationFormTemplate, OutlineTemplate, outline_from_form,
};

pub const APP_NAME: &str = "Presentation Generator";

/// Common context shared by all pages.
/// Templates access these as `ctx.app_name`, `ctx.flash`.
pub struct PageContext {
    pub app_name: String,
    pub flash: Option<String>,
}

impl PageContext {
    pub fn new() -> Self {
        Self { app_name: APP_NAME.to_string(), flash: None }
    }

    pub fn with_flash(mut self, message: impl Into<String>) -> Self {
        self.flash = Some(message.into());
        self
    }
}

impl Default for PageContext {
    fn default() -> Self {
        Self::new()
    }
}
