// Clients for the external services this server talks to.
pub mod gemini;

pub use gemini::GeminiClient;
