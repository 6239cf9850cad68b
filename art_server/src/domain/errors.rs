use serde::Serialize;
use std::fmt;

use crate::domain::image::InvalidImageFormat;

// Closed set of failure categories reported to clients alongside the message.
// Serializing here is a dependency leak, but it keeps the wire names in one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Validation,
    InvalidImageFormat,
    Configuration,
    UpstreamEmptyResponse,
    UpstreamNoImage,
    UpstreamCallFailure,
}

// Failures raised by a model service adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    MissingCredential,
    Transport(String),
    Upstream { status: u16, message: Option<String> },
    Decode(String),
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::MissingCredential => write!(f, "Gemini API key not configured"),
            ModelError::Transport(err) => write!(f, "model transport error: {err}"),
            ModelError::Upstream { status, message } => {
                if let Some(message) = message {
                    write!(f, "model upstream error {status}: {message}")
                } else {
                    write!(f, "model upstream error {status}")
                }
            }
            ModelError::Decode(err) => write!(f, "model response decode error: {err}"),
        }
    }
}

impl std::error::Error for ModelError {}

// Every way a visualization request can fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VisualizeError {
    MissingImage,
    InvalidRequest(String),
    InvalidImage(InvalidImageFormat),
    MissingCredential,
    NoCandidates,
    NoContent,
    EmptyText { stage: &'static str },
    NoImageGenerated,
    Model(ModelError),
}

impl VisualizeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            VisualizeError::MissingImage | VisualizeError::InvalidRequest(_) => {
                ErrorKind::Validation
            }
            VisualizeError::InvalidImage(_) => ErrorKind::InvalidImageFormat,
            VisualizeError::MissingCredential
            | VisualizeError::Model(ModelError::MissingCredential) => ErrorKind::Configuration,
            VisualizeError::NoCandidates
            | VisualizeError::NoContent
            | VisualizeError::EmptyText { .. } => ErrorKind::UpstreamEmptyResponse,
            VisualizeError::NoImageGenerated => ErrorKind::UpstreamNoImage,
            VisualizeError::Model(_) => ErrorKind::UpstreamCallFailure,
        }
    }
}

impl fmt::Display for VisualizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VisualizeError::MissingImage => write!(f, "No image provided"),
            VisualizeError::InvalidRequest(reason) => write!(f, "Invalid request body: {reason}"),
            VisualizeError::InvalidImage(err) => write!(f, "Invalid image: {err}"),
            VisualizeError::MissingCredential => write!(f, "Gemini API key not configured"),
            VisualizeError::NoCandidates => write!(f, "No candidates in response"),
            VisualizeError::NoContent => write!(f, "No content or parts in candidate"),
            VisualizeError::EmptyText { stage } => write!(f, "No text in {stage} response"),
            VisualizeError::NoImageGenerated => write!(f, "No image generated in response"),
            VisualizeError::Model(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for VisualizeError {}

impl From<InvalidImageFormat> for VisualizeError {
    fn from(err: InvalidImageFormat) -> Self {
        VisualizeError::InvalidImage(err)
    }
}

impl From<ModelError> for VisualizeError {
    fn from(err: ModelError) -> Self {
        VisualizeError::Model(err)
    }
}
