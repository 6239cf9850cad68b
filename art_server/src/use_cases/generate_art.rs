use crate::domain::{ArtType, DecodedImage, GenerativeModel, VisualizeError};
use crate::use_cases::orchestration::VisualizationStrategy;

// Input of one visualization request, already lifted out of the wire format.
#[derive(Debug, Clone, Default)]
pub struct GenerateArtCommand {
    pub image: Option<String>,
    pub art_type: Option<String>,
}

// Generate-art use case with injected dependencies.
pub struct GenerateArtUseCase<'a> {
    pub model: &'a dyn GenerativeModel,
    pub strategy: &'a dyn VisualizationStrategy,
}

impl GenerateArtUseCase<'_> {
    pub async fn execute(&self, command: GenerateArtCommand) -> Result<DecodedImage, VisualizeError> {
        let image = command
            .image
            .filter(|value| !value.is_empty())
            .ok_or(VisualizeError::MissingImage)?;

        // Checked before any decoding so a missing key never reaches the model.
        if !self.model.is_configured() {
            return Err(VisualizeError::MissingCredential);
        }

        let room = DecodedImage::parse(&image)?;
        let art = ArtType::from_id(command.art_type.as_deref());
        tracing::debug!(
            art_type = art.id(),
            mime_type = %room.mime_type,
            strategy = self.strategy.name(),
            "visualizing art."
        );

        self.strategy.visualize(self.model, &room, art).await
    }
}
