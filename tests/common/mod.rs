//! Shared test infrastructure.
//!
//! # Helpers
//! - `test_app!()` - actix test service over the built-in catalog
//! - `test_app!(generator)` - same, over a substitute generator
//! - `small_generator()` - two tiny categories for isolated tests
//! - `form_body()` - url-encoded form payload

#![allow(dead_code, unused_macros)]

use regex::Regex;

use deckgen::models::catalog::{CatalogEntry, TemplateCatalog};
use deckgen::models::outline::{ContentLibrary, Generator};

// ============================================================================
// TEST CONSTANTS
// ============================================================================

pub const TOPIC: &str = "Machine Learning";
pub const CATEGORIES: [&str; 4] = ["business", "technical", "educational", "research"];

// ============================================================================
// APP SETUP
// ============================================================================

/// Build an initialised actix test service with the application routes.
/// Test files pull this in with `#[macro_use] mod common;`.
macro_rules! test_app {
    () => {
        test_app!(deckgen::models::outline::Generator::builtin())
    };
    ($generator:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($generator))
                .configure(deckgen::handlers::configure),
        )
        .await
    };
}

/// Generator over two small categories, `alpha` being the default.
pub fn small_generator() -> Generator {
    let entry = |name: &str, titles: &[&str]| CatalogEntry {
        name: name.to_string(),
        label: name.to_uppercase(),
        titles: titles.iter().map(|t| t.to_string()).collect(),
    };
    let catalog = TemplateCatalog::new(
        vec![
            entry("alpha", &["Opening", "Executive Summary", "Closing"]),
            entry("beta", &["Only Slide"]),
        ],
        "alpha",
    )
    .expect("valid catalog");
    Generator::new(catalog, ContentLibrary::builtin())
}

// ============================================================================
// REQUEST / RESPONSE HELPERS
// ============================================================================

pub fn form_body(pairs: &[(&str, &str)]) -> String {
    serde_urlencoded::to_string(pairs).expect("Failed to encode form")
}

/// Count the editor's hidden `title_{i}` inputs in a rendered outline page.
pub fn count_title_fields(html: &str) -> usize {
    let re = Regex::new(r#"name="title_\d+""#).expect("Failed to compile regex");
    re.find_iter(html).count()
}

/// Extract the value of the hidden input named `name`.
pub fn hidden_value(html: &str, name: &str) -> Option<String> {
    let pattern = format!(r#"name="{}"\s+value="([^"]*)""#, regex::escape(name));
    let re = Regex::new(&pattern).expect("Failed to compile regex");
    re.captures(html)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str().to_string())
}
