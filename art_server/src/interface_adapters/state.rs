use crate::domain::GenerativeModel;
use crate::use_cases::VisualizationStrategy;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    // We use Arc<dyn Trait> to hold any implementation (dependency injection).
    pub model: Arc<dyn GenerativeModel>,
    // Orchestration chosen at startup; never swapped while serving.
    pub strategy: Arc<dyn VisualizationStrategy>,
}
