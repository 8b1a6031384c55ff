pub mod content;
pub mod types;

pub use content::{ContentLibrary, fallback_content};
pub use types::{Outline, Slide};

use std::path::Path;

use crate::models::catalog::{CatalogDocument, CatalogError, TemplateCatalog};

/// Outline generator: a template catalog plus the canned-content library.
///
/// Holds no mutable state, so one instance is shared by every request.
#[derive(Debug, Clone, Default)]
pub struct Generator {
    catalog: TemplateCatalog,
    content: ContentLibrary,
}

impl Generator {
    pub fn new(catalog: TemplateCatalog, content: ContentLibrary) -> Self {
        Self { catalog, content }
    }

    pub fn builtin() -> Self {
        Self::new(TemplateCatalog::builtin(), ContentLibrary::builtin())
    }

    /// Build from a catalog document. Its `content` map is layered over the
    /// built-in canned sentences.
    pub fn from_document(doc: CatalogDocument) -> Result<Self, CatalogError> {
        let catalog = TemplateCatalog::new(doc.categories, &doc.default_category)?;
        let content = ContentLibrary::builtin().with_overrides(doc.content);
        Ok(Self::new(catalog, content))
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        Self::from_document(CatalogDocument::load(path)?)
    }

    pub fn catalog(&self) -> &TemplateCatalog {
        &self.catalog
    }

    /// Generate up to `count` slides for `topic` from `category`'s titles.
    ///
    /// Counts above the template length truncate; zero or negative counts
    /// yield an empty outline. The topic is not validated here.
    pub fn generate(&self, topic: &str, category: &str, count: i64) -> Outline {
        let titles = self.catalog.get_titles(category);
        let n = usize::try_from(count).unwrap_or(0).min(titles.len());

        let slides = titles[..n]
            .iter()
            .enumerate()
            .map(|(i, title)| Slide {
                title: format!("Slide {}: {}", i + 1, title),
                content: self.slide_content(topic, title),
            })
            .collect();

        log::debug!("Generated {n} slides from category '{category}'");
        Outline::from_slides(slides)
    }

    pub fn slide_content(&self, topic: &str, title: &str) -> String {
        self.content.slide_content(topic, title)
    }
}
