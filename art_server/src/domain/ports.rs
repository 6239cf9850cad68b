use async_trait::async_trait;

use crate::domain::errors::ModelError;
use crate::domain::image::DecodedImage;

// One unit of model input or output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentPart {
    Text(String),
    InlineImage(DecodedImage),
}

impl ContentPart {
    pub fn text(value: impl Into<String>) -> Self {
        ContentPart::Text(value.into())
    }

    pub fn as_image(&self) -> Option<&DecodedImage> {
        match self {
            ContentPart::InlineImage(image) => Some(image),
            ContentPart::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ContentPart::Text(text) => Some(text),
            ContentPart::InlineImage(_) => None,
        }
    }
}

// What the caller wants back from a generation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputModality {
    Text,
    Image,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelRequest {
    pub model: String,
    pub parts: Vec<ContentPart>,
    pub output: OutputModality,
    pub candidate_count: Option<u32>,
}

impl ModelRequest {
    pub fn new(model: impl Into<String>, parts: Vec<ContentPart>, output: OutputModality) -> Self {
        Self {
            model: model.into(),
            parts,
            output,
            candidate_count: None,
        }
    }

    pub fn with_candidate_count(mut self, count: u32) -> Self {
        self.candidate_count = Some(count);
        self
    }
}

// A candidate with `parts: None` had no content block at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Candidate {
    pub parts: Option<Vec<ContentPart>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelResponse {
    pub candidates: Vec<Candidate>,
}

impl ModelResponse {
    // Text parts of the first candidate joined in order.
    pub fn first_text(&self) -> Option<String> {
        let parts = self.candidates.first()?.parts.as_ref()?;
        let text = parts
            .iter()
            .filter_map(ContentPart::as_text)
            .collect::<Vec<_>>()
            .join("");
        let trimmed = text.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }
}

// Port for the generative model service. Orchestration strategies depend on
// this trait, not on the HTTP client behind it.
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    // False when the service credential is missing; callers must not issue
    // requests in that case.
    fn is_configured(&self) -> bool;

    async fn generate_content(&self, request: ModelRequest) -> Result<ModelResponse, ModelError>;
}
