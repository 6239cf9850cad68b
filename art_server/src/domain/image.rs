use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::fmt;

// Media type assumed when the data URL header does not name one.
pub const DEFAULT_MIME_TYPE: &str = "image/jpeg";

const DATA_URL_SCHEME: &str = "data:";
const BASE64_MARKER: &str = ";base64,";

// Image payload split out of a data URL. `bytes` stays base64 encoded because
// that is what the model API consumes and returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub bytes: String,
    pub mime_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidImageFormat {
    NotADataUrl,
    NotBase64Encoded,
    NotAnImage(String),
    EmptyPayload,
    MalformedPayload,
}

impl fmt::Display for InvalidImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidImageFormat::NotADataUrl => write!(f, "image must be a data URL"),
            InvalidImageFormat::NotBase64Encoded => {
                write!(f, "image data URL must be base64 encoded")
            }
            InvalidImageFormat::NotAnImage(mime) => {
                write!(f, "unsupported media type {mime}, expected an image")
            }
            InvalidImageFormat::EmptyPayload => write!(f, "image data URL has an empty payload"),
            InvalidImageFormat::MalformedPayload => {
                write!(f, "image data URL payload is not valid base64")
            }
        }
    }
}

impl std::error::Error for InvalidImageFormat {}

impl DecodedImage {
    pub fn new(mime_type: impl Into<String>, bytes: impl Into<String>) -> Self {
        Self {
            bytes: bytes.into(),
            mime_type: mime_type.into(),
        }
    }

    // Parse `data:<mime>;base64,<payload>`. Anything else is rejected rather
    // than forwarded to the model service.
    pub fn parse(data_url: &str) -> Result<Self, InvalidImageFormat> {
        let rest = data_url
            .strip_prefix(DATA_URL_SCHEME)
            .ok_or(InvalidImageFormat::NotADataUrl)?;
        let (header, payload) = rest
            .split_once(BASE64_MARKER)
            .ok_or(InvalidImageFormat::NotBase64Encoded)?;

        let mime_type = match parse_media_type(header) {
            Some(mime) if mime.to_ascii_lowercase().starts_with("image/") => mime,
            Some(mime) => return Err(InvalidImageFormat::NotAnImage(mime)),
            None => DEFAULT_MIME_TYPE.to_string(),
        };

        if payload.is_empty() {
            return Err(InvalidImageFormat::EmptyPayload);
        }
        STANDARD
            .decode(payload)
            .map_err(|_| InvalidImageFormat::MalformedPayload)?;

        Ok(Self {
            bytes: payload.to_string(),
            mime_type,
        })
    }

    pub fn to_data_url(&self) -> String {
        format!(
            "{DATA_URL_SCHEME}{}{BASE64_MARKER}{}",
            self.mime_type, self.bytes
        )
    }
}

// Returns the `type/subtype` essence as written, ignoring any parameters.
fn parse_media_type(header: &str) -> Option<String> {
    let essence = header.split(';').next().unwrap_or_default().trim();
    let (kind, subtype) = essence.split_once('/')?;

    let is_token = |value: &str| {
        !value.is_empty()
            && value
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    };

    (is_token(kind) && is_token(subtype)).then(|| essence.to_string())
}
