use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::{
    Candidate, ContentPart, DecodedImage, GenerativeModel, ModelError, ModelRequest,
    ModelResponse,
};

pub(crate) type Script = Arc<Mutex<VecDeque<Result<ModelResponse, ModelError>>>>;

// Model double that replays queued responses and records every request.
#[derive(Clone)]
pub(crate) struct ScriptedModel {
    configured: bool,
    script: Script,
    requests: Arc<Mutex<Vec<ModelRequest>>>,
}

impl ScriptedModel {
    pub(crate) fn new() -> Self {
        Self {
            configured: true,
            script: Arc::new(Mutex::new(VecDeque::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub(crate) fn unconfigured() -> Self {
        Self {
            configured: false,
            ..Self::new()
        }
    }

    pub(crate) fn respond(self, response: Result<ModelResponse, ModelError>) -> Self {
        self.script
            .lock()
            .expect("script mutex poisoned")
            .push_back(response);
        self
    }

    pub(crate) fn requests(&self) -> Vec<ModelRequest> {
        self.requests
            .lock()
            .expect("requests mutex poisoned")
            .clone()
    }
}

#[async_trait]
impl GenerativeModel for ScriptedModel {
    fn is_configured(&self) -> bool {
        self.configured
    }

    async fn generate_content(&self, request: ModelRequest) -> Result<ModelResponse, ModelError> {
        self.requests
            .lock()
            .expect("requests mutex poisoned")
            .push(request);

        self.script
            .lock()
            .expect("script mutex poisoned")
            .pop_front()
            .unwrap_or_else(|| Err(ModelError::Transport("script exhausted".to_string())))
    }
}

// Response with a single candidate holding the given parts.
pub(crate) fn single_candidate(parts: Vec<ContentPart>) -> ModelResponse {
    ModelResponse {
        candidates: vec![Candidate { parts: Some(parts) }],
    }
}

pub(crate) fn text_response(text: &str) -> ModelResponse {
    single_candidate(vec![ContentPart::text(text)])
}

pub(crate) fn image_response(mime_type: &str, bytes: &str) -> ModelResponse {
    single_candidate(vec![ContentPart::InlineImage(DecodedImage::new(
        mime_type, bytes,
    ))])
}

pub(crate) fn room_photo() -> DecodedImage {
    DecodedImage::new("image/jpeg", "/9j/4AAQ")
}
