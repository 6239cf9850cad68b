use async_trait::async_trait;

use crate::domain::{
    ArtType, ContentPart, DecodedImage, GenerativeModel, ModelRequest, ModelResponse,
    OutputModality, VisualizeError,
};
use crate::use_cases::prompts;

// A strategy drives one or more model calls for a single request and unwraps
// the generated image. Exactly one implementation is active per process.
#[async_trait]
pub trait VisualizationStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    async fn visualize(
        &self,
        model: &dyn GenerativeModel,
        room: &DecodedImage,
        art: ArtType,
    ) -> Result<DecodedImage, VisualizeError>;
}

// One image-conditioned edit call.
pub struct SingleCallEdit {
    pub edit_model: String,
}

#[async_trait]
impl VisualizationStrategy for SingleCallEdit {
    fn name(&self) -> &'static str {
        "single_call"
    }

    async fn visualize(
        &self,
        model: &dyn GenerativeModel,
        room: &DecodedImage,
        art: ArtType,
    ) -> Result<DecodedImage, VisualizeError> {
        let request = ModelRequest::new(
            self.edit_model.clone(),
            vec![
                ContentPart::InlineImage(room.clone()),
                ContentPart::Text(prompts::edit_prompt(art.describe())),
            ],
            OutputModality::Image,
        );

        let response = model.generate_content(request).await?;
        first_inline_image(response)
    }
}

// The first inline image across the first candidate's parts wins.
fn first_inline_image(response: ModelResponse) -> Result<DecodedImage, VisualizeError> {
    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or(VisualizeError::NoCandidates)?;
    let parts = candidate.parts.ok_or(VisualizeError::NoContent)?;

    parts
        .into_iter()
        .find_map(|part| match part {
            ContentPart::InlineImage(image) => Some(image),
            ContentPart::Text(_) => None,
        })
        .ok_or(VisualizeError::NoImageGenerated)
}

// Room analysis, then prompt synthesis, then text-to-image. The final call
// never sees the room photo; fidelity rests on the synthesized prompt.
pub struct AnalyzeThenGenerate {
    pub analysis_model: String,
    pub text_model: String,
    pub image_model: String,
}

#[async_trait]
impl VisualizationStrategy for AnalyzeThenGenerate {
    fn name(&self) -> &'static str {
        "pipeline"
    }

    async fn visualize(
        &self,
        model: &dyn GenerativeModel,
        room: &DecodedImage,
        art: ArtType,
    ) -> Result<DecodedImage, VisualizeError> {
        let analysis = model
            .generate_content(ModelRequest::new(
                self.analysis_model.clone(),
                vec![
                    ContentPart::Text(prompts::room_analysis_prompt()),
                    ContentPart::InlineImage(room.clone()),
                ],
                OutputModality::Text,
            ))
            .await?
            .first_text()
            .ok_or(VisualizeError::EmptyText {
                stage: "room analysis",
            })?;
        tracing::debug!(analysis_len = analysis.len(), "room analysis complete.");

        let image_prompt = model
            .generate_content(ModelRequest::new(
                self.text_model.clone(),
                vec![ContentPart::Text(prompts::synthesis_prompt(
                    &analysis,
                    art.describe(),
                ))],
                OutputModality::Text,
            ))
            .await?
            .first_text()
            .ok_or(VisualizeError::EmptyText {
                stage: "prompt synthesis",
            })?;
        tracing::debug!(prompt = %image_prompt, "image prompt synthesized.");

        let response = model
            .generate_content(
                ModelRequest::new(
                    self.image_model.clone(),
                    vec![ContentPart::Text(image_prompt)],
                    OutputModality::Image,
                )
                .with_candidate_count(1),
            )
            .await?;

        // Only the first part of the first candidate is considered here.
        response
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.parts)
            .and_then(|parts| parts.into_iter().next())
            .and_then(|part| match part {
                ContentPart::InlineImage(image) => Some(image),
                ContentPart::Text(_) => None,
            })
            .ok_or(VisualizeError::NoImageGenerated)
    }
}
