pub mod types;

pub use types::*;

use std::collections::HashSet;
use std::path::Path;

const BUSINESS: [&str; 10] = [
    "Executive Summary",
    "Problem Statement",
    "Market Analysis",
    "Solution Overview",
    "Business Model",
    "Financial Projections",
    "Implementation Timeline",
    "Team & Resources",
    "Risk Assessment",
    "Call to Action",
];

const TECHNICAL: [&str; 10] = [
    "Introduction & Overview",
    "Problem Definition",
    "Technical Requirements",
    "Architecture & Design",
    "Implementation Details",
    "Testing & Validation",
    "Performance Analysis",
    "Security Considerations",
    "Future Enhancements",
    "Conclusion",
];

const EDUCATIONAL: [&str; 10] = [
    "Learning Objectives",
    "Background & Context",
    "Key Concepts",
    "Detailed Explanation",
    "Real-world Examples",
    "Interactive Activity",
    "Assessment & Review",
    "Additional Resources",
    "Q&A Session",
    "Summary & Next Steps",
];

const RESEARCH: [&str; 10] = [
    "Research Question",
    "Literature Review",
    "Methodology",
    "Data Collection",
    "Results & Analysis",
    "Discussion",
    "Limitations",
    "Implications",
    "Future Research",
    "Conclusions",
];

pub const DEFAULT_CATEGORY: &str = "business";

/// Immutable category -> title sequence table.
///
/// Lookups never fail: an unknown category resolves to the default
/// category's titles.
#[derive(Debug, Clone)]
pub struct TemplateCatalog {
    entries: Vec<CatalogEntry>,
    default_index: usize,
}

impl TemplateCatalog {
    /// Build a catalog, checking names are unique, titles are unique within
    /// each category, and the default category exists.
    pub fn new(entries: Vec<CatalogEntry>, default_category: &str) -> Result<Self, CatalogError> {
        if entries.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut names = HashSet::new();
        for entry in &entries {
            if !names.insert(entry.name.as_str()) {
                return Err(CatalogError::DuplicateCategory(entry.name.clone()));
            }
            let mut titles = HashSet::new();
            for title in &entry.titles {
                if !titles.insert(title.as_str()) {
                    return Err(CatalogError::DuplicateTitle {
                        category: entry.name.clone(),
                        title: title.clone(),
                    });
                }
            }
        }

        let default_index = entries
            .iter()
            .position(|e| e.name == default_category)
            .ok_or_else(|| CatalogError::UnknownDefault(default_category.to_string()))?;

        Ok(Self { entries, default_index })
    }

    /// The four reference categories, `business` as default.
    pub fn builtin() -> Self {
        let entry = |name: &str, label: &str, titles: &[&str]| CatalogEntry {
            name: name.to_string(),
            label: label.to_string(),
            titles: titles.iter().map(|t| t.to_string()).collect(),
        };
        Self {
            entries: vec![
                entry("business", "Business", &BUSINESS),
                entry("technical", "Technical", &TECHNICAL),
                entry("educational", "Educational", &EDUCATIONAL),
                entry("research", "Research", &RESEARCH),
            ],
            default_index: 0,
        }
    }

    /// Parse a catalog document. Any `content` section is ignored here;
    /// see `Generator::from_document` for the full load.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let doc = CatalogDocument::parse(json)?;
        Self::new(doc.categories, &doc.default_category)
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Titles for `category`, or the default category's titles if unknown.
    pub fn get_titles(&self, category: &str) -> &[String] {
        &self.resolve(category).titles
    }

    /// The entry a category name resolves to after fallback.
    pub fn resolve(&self, category: &str) -> &CatalogEntry {
        match self.entries.iter().find(|e| e.name == category) {
            Some(entry) => entry,
            None => {
                log::warn!(
                    "Unknown category '{}', falling back to '{}'",
                    category,
                    self.default_category()
                );
                &self.entries[self.default_index]
            }
        }
    }

    pub fn contains(&self, category: &str) -> bool {
        self.entries.iter().any(|e| e.name == category)
    }

    pub fn default_category(&self) -> &str {
        &self.entries[self.default_index].name
    }

    pub fn categories(&self) -> Vec<CategoryOption> {
        self.entries
            .iter()
            .map(|e| CategoryOption {
                name: e.name.clone(),
                label: e.label.clone(),
                slide_count: e.titles.len(),
            })
            .collect()
    }
}

impl Default for TemplateCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl CatalogDocument {
    pub fn parse(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path)?;
        Self::parse(&json)
    }
}
