pub mod text;
pub mod types;

pub use text::render_text;
pub use types::*;

use chrono::{Local, NaiveDateTime, Timelike};

use crate::models::outline::Outline;

/// Export the current outline, stamped with the local time of the call.
pub fn export(outline: &Outline, topic: &str) -> (ExportRecord, String) {
    export_at(outline, topic, Local::now().naive_local())
}

/// Export with an explicit timestamp.
pub fn export_at(outline: &Outline, topic: &str, created_at: NaiveDateTime) -> (ExportRecord, String) {
    let record = ExportRecord {
        topic: topic.to_string(),
        created_at,
        slides: outline.slides().to_vec(),
    };
    let text = render_text(&record.topic, &record.slides);
    (record, text)
}

/// ISO-8601 local time; the fraction is left out on a whole second.
pub fn format_created(created_at: NaiveDateTime) -> String {
    let format = if created_at.nanosecond() / 1_000 == 0 {
        CREATED_FORMAT_WHOLE_SECONDS
    } else {
        CREATED_FORMAT
    };
    created_at.format(format).to_string()
}

impl ExportRecord {
    pub fn to_document(&self) -> PresentationDocument {
        PresentationDocument {
            presentation: PresentationBody {
                topic: self.topic.clone(),
                created: format_created(self.created_at),
                slides: self.slides.clone(),
            },
        }
    }

    /// Pretty JSON with two-space indentation.
    pub fn to_json(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(&self.to_document())?)
    }

    pub fn to_text(&self) -> String {
        render_text(&self.topic, &self.slides)
    }

    /// Read a JSON export back into a record.
    pub fn from_json(json: &str) -> Result<Self, ExportError> {
        let doc: PresentationDocument = serde_json::from_str(json)?;
        let created_at = NaiveDateTime::parse_from_str(&doc.presentation.created, CREATED_PARSE_FORMAT)?;
        Ok(Self {
            topic: doc.presentation.topic,
            created_at,
            slides: doc.presentation.slides,
        })
    }

    pub fn outline(&self) -> Outline {
        Outline::from_slides(self.slides.clone())
    }

    /// Serialized body for a download in the given format.
    pub fn render(&self, format: ExportFormat) -> Result<String, ExportError> {
        match format {
            ExportFormat::Json => self.to_json(),
            ExportFormat::Text => Ok(self.to_text()),
        }
    }
}
