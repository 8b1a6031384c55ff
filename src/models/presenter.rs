use rand::Rng;

use crate::models::outline::Slide;

pub const MIN_MINUTES: u32 = 2;
pub const MAX_MINUTES: u32 = 5;

/// Display toggles. They change what is shown next to each slide, never
/// the outline itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayOptions {
    pub include_speaker_notes: bool,
    pub include_timing: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self { include_speaker_notes: true, include_timing: false }
    }
}

pub fn speaker_notes(slide_title: &str) -> String {
    format!(
        "Key points to emphasize: Make sure to engage the audience when discussing {}. Use visual aids where possible.",
        slide_title.to_lowercase()
    )
}

/// Rough speaking time for one slide, in whole minutes.
pub fn estimate_minutes<R: Rng>(rng: &mut R) -> u32 {
    rng.random_range(MIN_MINUTES..=MAX_MINUTES)
}

/// A slide as shown on the overview page.
#[derive(Debug, Clone)]
pub struct SlideCard {
    pub title: String,
    pub content: String,
    pub notes: Option<String>,
    pub minutes: Option<u32>,
}

pub fn build_cards<R: Rng>(slides: &[Slide], options: DisplayOptions, rng: &mut R) -> Vec<SlideCard> {
    slides
        .iter()
        .map(|slide| SlideCard {
            title: slide.title.clone(),
            content: slide.content.clone(),
            notes: options.include_speaker_notes.then(|| speaker_notes(&slide.title)),
            minutes: options.include_timing.then(|| estimate_minutes(&mut *rng)),
        })
        .collect()
}
