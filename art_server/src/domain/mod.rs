pub mod art;
pub mod errors;
pub mod image;
pub mod ports;

// Re-export the domain boundary types and ports.
pub use art::ArtType;
pub use errors::{ErrorKind, ModelError, VisualizeError};
pub use image::{DecodedImage, InvalidImageFormat};
pub use ports::{
    Candidate, ContentPart, GenerativeModel, ModelRequest, ModelResponse, OutputModality,
};
