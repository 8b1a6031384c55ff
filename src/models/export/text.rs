use crate::models::outline::Slide;

const SEPARATOR_WIDTH: usize = 50;

/// Plain-text rendering: upper-cased header, `=` rule, then one
/// title/underline/content block per slide. Content is written verbatim.
pub fn render_text(topic: &str, slides: &[Slide]) -> String {
    let mut out = format!("PRESENTATION: {}\n", topic.to_uppercase());
    out.push_str(&"=".repeat(SEPARATOR_WIDTH));
    out.push_str("\n\n");

    for slide in slides {
        out.push_str(&slide.title);
        out.push('\n');
        out.push_str(&"-".repeat(slide.title.chars().count()));
        out.push('\n');
        out.push_str(&slide.content);
        out.push_str("\n\n");
    }

    out
}
