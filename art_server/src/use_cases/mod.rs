pub mod generate_art;
pub mod orchestration;
pub mod prompts;

#[cfg(test)]
pub(crate) mod test_support;

pub use generate_art::{GenerateArtCommand, GenerateArtUseCase};
pub use orchestration::{AnalyzeThenGenerate, SingleCallEdit, VisualizationStrategy};
