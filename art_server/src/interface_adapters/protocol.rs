use crate::domain::ErrorKind;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateArtRequest {
    // Room photo as a data URL. Optional here so its absence maps to our own 400.
    #[serde(default)]
    pub image: Option<String>,
    // Any JSON value is accepted; only known strings select an art type.
    #[serde(default)]
    pub art_type: Option<Value>,
}

impl GenerateArtRequest {
    pub fn art_type_id(&self) -> Option<&str> {
        self.art_type.as_ref().and_then(Value::as_str)
    }
}

// Exactly one of the two shapes is returned per request. The `success` flag
// is written from the variant, so it cannot disagree with the payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateArtResponse {
    Success { image_url: String },
    Failure { error: String, error_kind: ErrorKind },
}

impl GenerateArtResponse {
    pub fn success(image_url: String) -> Self {
        GenerateArtResponse::Success { image_url }
    }

    pub fn failure(error: String, error_kind: ErrorKind) -> Self {
        GenerateArtResponse::Failure { error, error_kind }
    }
}

impl Serialize for GenerateArtResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            GenerateArtResponse::Success { image_url } => {
                let mut body = serializer.serialize_struct("GenerateArtResponse", 2)?;
                body.serialize_field("success", &true)?;
                body.serialize_field("imageUrl", image_url)?;
                body.end()
            }
            GenerateArtResponse::Failure { error, error_kind } => {
                let mut body = serializer.serialize_struct("GenerateArtResponse", 3)?;
                body.serialize_field("success", &false)?;
                body.serialize_field("error", error)?;
                body.serialize_field("errorKind", error_kind)?;
                body.end()
            }
        }
    }
}
