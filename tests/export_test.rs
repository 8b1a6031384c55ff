//! Export tests - JSON document and plain-text rendering of an outline.

mod common;

use chrono::{Local, NaiveDate};

use deckgen::models::export::{self, ExportFormat, ExportRecord, render_text};
use deckgen::models::outline::{Generator, Outline, Slide};
use common::*;

#[test]
fn test_json_round_trip_preserves_slides() {
    let generator = Generator::builtin();
    for category in CATEGORIES {
        let mut outline = generator.generate(TOPIC, category, 10);
        outline.set_content(3, "Edited \"quoted\"\ncontent with ünïcødé");

        let (record, _) = export::export(&outline, TOPIC);
        let json = record.to_json().expect("serialize");
        let back = ExportRecord::from_json(&json).expect("parse");

        assert_eq!(back.topic, TOPIC);
        assert_eq!(back.outline(), outline);
        assert_eq!(back.slides, record.slides);
    }
}

#[test]
fn test_round_trip_keeps_timestamp_to_the_microsecond() {
    let created_at = NaiveDate::from_ymd_opt(2025, 1, 31)
        .and_then(|d| d.and_hms_micro_opt(23, 59, 58, 42))
        .expect("valid date");
    let outline = Generator::builtin().generate(TOPIC, "business", 2);
    let (record, _) = export::export_at(&outline, TOPIC, created_at);
    let back = ExportRecord::from_json(&record.to_json().expect("serialize")).expect("parse");
    assert_eq!(back.created_at, created_at);
}

#[test]
fn test_from_json_accepts_timestamp_without_fraction() {
    let json = r#"{"presentation": {"topic": "T", "created": "2024-05-01T10:00:00", "slides": []}}"#;
    let record = ExportRecord::from_json(json).expect("parse");
    assert_eq!(record.created_at.to_string(), "2024-05-01 10:00:00");
    assert!(record.slides.is_empty());
}

#[test]
fn test_from_json_rejects_bad_documents() {
    assert!(ExportRecord::from_json("[]").is_err());
    let bad_time = r#"{"presentation": {"topic": "T", "created": "yesterday", "slides": []}}"#;
    assert!(ExportRecord::from_json(bad_time).is_err());
}

#[test]
fn test_reexport_changes_only_timestamp() {
    let outline = Generator::builtin().generate(TOPIC, "technical", 4);
    let (first, first_text) = export::export(&outline, TOPIC);
    let (second, second_text) = export::export(&outline, TOPIC);
    assert!(second.created_at >= first.created_at);
    assert_eq!(first.slides, second.slides);
    assert_eq!(first_text, second_text);
}

#[test]
fn test_created_at_is_local_now() {
    let before = Local::now().naive_local();
    let (record, _) = export::export(&Outline::default(), TOPIC);
    assert!(record.created_at >= before);
}

#[test]
fn test_text_header_and_separator() {
    let outline = Generator::builtin().generate("machine learning", "business", 1);
    let (_, text) = export::export(&outline, "machine learning");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "PRESENTATION: MACHINE LEARNING");
    assert_eq!(lines[1], "=".repeat(50));
    assert_eq!(lines[2], "");
    assert_eq!(lines[3], "Slide 1: Executive Summary");
}

#[test]
fn test_text_underlines_match_title_length() {
    let generator = Generator::builtin();
    for category in CATEGORIES {
        let outline = generator.generate(TOPIC, category, 10);
        let text = render_text(TOPIC, outline.slides());
        let lines: Vec<&str> = text.lines().collect();
        for (i, slide) in outline.slides().iter().enumerate() {
            // header(3 lines) then 4 lines per slide: title, underline, content, blank
            let title_line = 3 + i * 4;
            assert_eq!(lines[title_line], slide.title);
            assert_eq!(lines[title_line + 1], "-".repeat(slide.title.chars().count()));
            assert_eq!(lines[title_line + 2], slide.content);
        }
    }
}

#[test]
fn test_text_keeps_multiline_content_verbatim() {
    let slides = vec![Slide {
        title: "Slide 1: Notes".to_string(),
        content: "first\n\n  indented\n".to_string(),
    }];
    let text = render_text("t", &slides);
    assert!(text.ends_with("Slide 1: Notes\n--------------\nfirst\n\n  indented\n\n\n"));
}

#[test]
fn test_render_matches_format() {
    let outline = Generator::builtin().generate(TOPIC, "research", 2);
    let (record, text) = export::export(&outline, TOPIC);
    assert_eq!(record.render(ExportFormat::Text).expect("text"), text);
    assert_eq!(
        record.render(ExportFormat::Json).expect("json"),
        record.to_json().expect("json")
    );
}

#[test]
fn test_file_names_and_mime_types() {
    assert_eq!(ExportFormat::Json.file_name(TOPIC), "Machine_Learning_presentation.json");
    assert_eq!(ExportFormat::Text.file_name(TOPIC), "Machine_Learning_presentation.txt");
    assert_eq!(ExportFormat::Json.mime_type(), "application/json");
    assert!(ExportFormat::Text.mime_type().starts_with("text/plain"));
}
