pub const TOPIC_REQUIRED: &str = "Please enter a topic to generate your presentation!";

pub const MIN_SLIDES: i64 = 3;
pub const MAX_SLIDES: i64 = 15;
pub const DEFAULT_SLIDES: i64 = 8;

/// Validate a presentation topic. An empty or whitespace-only topic is the
/// only rejection; length and content are otherwise unrestricted.
pub fn validate_topic(topic: &str) -> Option<String> {
    topic.trim().is_empty().then(|| TOPIC_REQUIRED.to_string())
}

/// Slide count from the form's slider: unparsable input becomes the
/// default, anything else is clamped to 3..=15.
pub fn clamp_slide_count(raw: Option<&str>) -> i64 {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
        .unwrap_or(DEFAULT_SLIDES)
        .clamp(MIN_SLIDES, MAX_SLIDES)
}
