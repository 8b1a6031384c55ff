use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Slide {
    pub title: String,
    pub content: String,
}

/// Ordered slides produced by one generation request.
///
/// Owned by the request that created it; edits replace a slide's content
/// in place and never reorder, add or remove slides.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Outline {
    slides: Vec<Slide>,
}

impl Outline {
    pub fn from_slides(slides: Vec<Slide>) -> Self {
        Self { slides }
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn into_slides(self) -> Vec<Slide> {
        self.slides
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Replace the content of the slide at `index`. Returns false if there
    /// is no such slide.
    pub fn set_content(&mut self, index: usize, content: impl Into<String>) -> bool {
        match self.slides.get_mut(index) {
            Some(slide) => {
                slide.content = content.into();
                true
            }
            None => false,
        }
    }
}
