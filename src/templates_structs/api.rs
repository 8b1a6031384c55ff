use serde::{Serialize, Deserialize};

use crate::models::outline::Slide;

/// Generate request for `POST /api/v1/outline`.
#[derive(Deserialize, Debug)]
pub struct ApiOutlineRequest {
    pub topic: String,
    #[serde(default)]
    pub category: Option<String>, // catalog default when absent
    #[serde(default)]
    pub slide_count: Option<i64>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ApiOutlineResponse {
    pub topic: String,
    pub category: String,
    pub slides: Vec<Slide>,
}

/// Export request for `POST /api/v1/export`.
#[derive(Deserialize, Debug)]
pub struct ApiExportRequest {
    pub topic: String,
    #[serde(default)]
    pub slides: Vec<Slide>,
    #[serde(default)]
    pub format: Option<String>,
}

/// API error response.
#[derive(Serialize, Deserialize, Debug)]
pub struct ApiErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}
