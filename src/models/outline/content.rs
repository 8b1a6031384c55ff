use std::collections::HashMap;

const TOPIC_PLACEHOLDER: &str = "{topic}";

const BUILTIN_CONTENT: [(&str, &str); 10] = [
    ("Executive Summary", "Brief overview of {topic} and its key benefits for stakeholders"),
    ("Problem Statement", "Current challenges and pain points related to {topic}"),
    ("Market Analysis", "Market size, trends, and opportunities in the {topic} space"),
    ("Solution Overview", "How {topic} addresses the identified problems"),
    ("Introduction & Overview", "Welcome to our presentation on {topic} - setting the stage"),
    ("Problem Definition", "Technical challenges and requirements for {topic}"),
    ("Learning Objectives", "What you will learn about {topic} by the end of this session"),
    ("Research Question", "Key research questions driving our study of {topic}"),
    ("Background & Context", "Historical background and current state of {topic}"),
    ("Literature Review", "Previous research and findings related to {topic}"),
];

/// Canned sentence templates keyed by template title.
///
/// Keys are titles only, not (category, title): two categories sharing a
/// title share its sentence.
#[derive(Debug, Clone)]
pub struct ContentLibrary {
    templates: HashMap<String, String>,
}

impl ContentLibrary {
    pub fn builtin() -> Self {
        let templates = BUILTIN_CONTENT
            .iter()
            .map(|(title, tmpl)| (title.to_string(), tmpl.to_string()))
            .collect();
        Self { templates }
    }

    pub fn empty() -> Self {
        Self { templates: HashMap::new() }
    }

    /// Add or replace canned sentences.
    pub fn with_overrides(mut self, overrides: HashMap<String, String>) -> Self {
        self.templates.extend(overrides);
        self
    }

    pub fn contains(&self, title: &str) -> bool {
        self.templates.contains_key(title)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Content sentence for a slide, falling back to the generic sentence
    /// for titles without canned content.
    pub fn slide_content(&self, topic: &str, title: &str) -> String {
        match self.templates.get(title) {
            Some(tmpl) => tmpl.replace(TOPIC_PLACEHOLDER, topic),
            None => fallback_content(topic, title),
        }
    }
}

impl Default for ContentLibrary {
    fn default() -> Self {
        Self::builtin()
    }
}

pub fn fallback_content(topic: &str, title: &str) -> String {
    format!("Detailed information about {title} in the context of {topic}")
}
