use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// One presentation category and its ordered slide titles.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogEntry {
    pub name: String,
    pub label: String,
    pub titles: Vec<String>,
}

/// On-disk catalog document, as accepted by `TemplateCatalog::from_json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogDocument {
    pub default_category: String,
    pub categories: Vec<CatalogEntry>,
    /// Extra canned content keyed by template title, `{topic}` is substituted.
    #[serde(default)]
    pub content: HashMap<String, String>,
}

/// Category summary for forms and the categories API.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategoryOption {
    pub name: String,
    pub label: String,
    pub slide_count: usize,
}

#[derive(Debug)]
pub enum CatalogError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Empty,
    DuplicateCategory(String),
    DuplicateTitle { category: String, title: String },
    UnknownDefault(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Io(e) => write!(f, "Catalog read error: {e}"),
            CatalogError::Json(e) => write!(f, "Catalog JSON error: {e}"),
            CatalogError::Empty => write!(f, "Catalog defines no categories"),
            CatalogError::DuplicateCategory(name) => {
                write!(f, "Category '{name}' is defined more than once")
            }
            CatalogError::DuplicateTitle { category, title } => {
                write!(f, "Title '{title}' appears twice in category '{category}'")
            }
            CatalogError::UnknownDefault(name) => {
                write!(f, "Default category '{name}' is not defined")
            }
        }
    }
}

impl std::error::Error for CatalogError {}

impl From<std::io::Error> for CatalogError {
    fn from(e: std::io::Error) -> Self {
        CatalogError::Io(e)
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::Json(e)
    }
}
