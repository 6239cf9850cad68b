use crate::domain::{
    Candidate, ContentPart, DecodedImage, GenerativeModel, ModelError, ModelRequest,
    ModelResponse, OutputModality,
};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const API_KEY_HEADER: &str = "x-goog-api-key";

// Thin wrapper around reqwest for Gemini generateContent calls.
#[derive(Clone)]
pub struct GeminiClient {
    http: Client,
    base_url: String,
    api_key: Option<String>,
}

impl GeminiClient {
    pub fn new(
        base_url: impl Into<String>,
        api_key: Option<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
        })
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/v1beta/models/{model}:generateContent", self.base_url)
    }
}

#[async_trait]
impl GenerativeModel for GeminiClient {
    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn generate_content(&self, request: ModelRequest) -> Result<ModelResponse, ModelError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(ModelError::MissingCredential)?;
        let url = self.endpoint(&request.model);
        let body = GenerateContentBody::from(&request);

        tracing::debug!(model = %request.model, parts = request.parts.len(), "calling gemini.");
        let res = self
            .http
            .post(url)
            .header(API_KEY_HEADER, api_key)
            .json(&body)
            .send()
            .await
            .map_err(|err| ModelError::Transport(err.to_string()))?;
        let status = res.status();

        // Keep upstream status/message so the failure is explainable in logs.
        if !status.is_success() {
            let message = res
                .json::<ErrorEnvelope>()
                .await
                .ok()
                .and_then(|payload| payload.error)
                .and_then(|detail| detail.message);
            return Err(ModelError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        let payload = res
            .json::<GenerateContentResponse>()
            .await
            .map_err(|err| ModelError::Decode(err.to_string()))?;

        Ok(payload.into())
    }
}

// Wire format of the Gemini REST API (camelCase JSON).

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentBody {
    contents: Vec<WireContent>,
    generation_config: WireGenerationConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct WireGenerationConfig {
    response_modalities: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    candidate_count: Option<u32>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct WireContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    parts: Option<Vec<WirePart>>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WirePart {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(default, alias = "inline_data", skip_serializing_if = "Option::is_none")]
    inline_data: Option<WireBlob>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireBlob {
    #[serde(alias = "mime_type")]
    mime_type: String,
    data: String,
}

#[derive(Debug, Default, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<WireCandidate>,
}

#[derive(Debug, Default, Deserialize)]
struct WireCandidate {
    #[serde(default)]
    content: Option<WireContent>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: Option<ErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: Option<String>,
}

impl From<&ModelRequest> for GenerateContentBody {
    fn from(request: &ModelRequest) -> Self {
        let parts = request
            .parts
            .iter()
            .map(|part| match part {
                ContentPart::Text(text) => WirePart {
                    text: Some(text.clone()),
                    inline_data: None,
                },
                ContentPart::InlineImage(image) => WirePart {
                    text: None,
                    inline_data: Some(WireBlob {
                        mime_type: image.mime_type.clone(),
                        data: image.bytes.clone(),
                    }),
                },
            })
            .collect();

        let modality = match request.output {
            OutputModality::Text => "TEXT",
            OutputModality::Image => "IMAGE",
        };

        Self {
            contents: vec![WireContent {
                role: Some("user".to_string()),
                parts: Some(parts),
            }],
            generation_config: WireGenerationConfig {
                response_modalities: vec![modality],
                candidate_count: request.candidate_count,
            },
        }
    }
}

impl From<GenerateContentResponse> for ModelResponse {
    fn from(response: GenerateContentResponse) -> Self {
        let candidates = response
            .candidates
            .into_iter()
            .map(|candidate| Candidate {
                parts: candidate
                    .content
                    .and_then(|content| content.parts)
                    .map(|parts| parts.into_iter().filter_map(into_content_part).collect()),
            })
            .collect();

        ModelResponse { candidates }
    }
}

// Parts carrying neither text nor inline data (function calls etc.) are dropped.
fn into_content_part(part: WirePart) -> Option<ContentPart> {
    match (part.inline_data, part.text) {
        (Some(blob), _) => Some(ContentPart::InlineImage(DecodedImage::new(
            blob.mime_type,
            blob.data,
        ))),
        (None, Some(text)) => Some(ContentPart::Text(text)),
        (None, None) => None,
    }
}
