use std::{
    env, fmt,
    net::{IpAddr, Ipv4Addr, SocketAddr},
    str::FromStr,
    time::Duration,
};

// Runtime configuration, read once at startup.

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_EDIT_MODEL: &str = "gemini-2.5-flash-image";
pub const DEFAULT_TEXT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_IMAGE_MODEL: &str = "gemini-2.5-flash-image";
// Phone photos become multi-megabyte strings once base64 encoded.
pub const DEFAULT_MAX_BODY_BYTES: usize = 20 * 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    SingleCall,
    Pipeline,
}

impl FromStr for StrategyKind {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "single_call" | "single-call" => Ok(StrategyKind::SingleCall),
            "pipeline" => Ok(StrategyKind::Pipeline),
            other => Err(ConfigError::InvalidStrategy(other.to_string())),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    InvalidStrategy(String),
    InvalidBaseUrl(String),
    InvalidValue { key: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidStrategy(value) => write!(
                f,
                "ART_STRATEGY must be single_call or pipeline, got {value:?}"
            ),
            ConfigError::InvalidBaseUrl(err) => write!(f, "GEMINI_BASE_URL is invalid: {err}"),
            ConfigError::InvalidValue { key, value } => write!(f, "{key} is invalid: {value:?}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// Not Debug on purpose: it carries the API key.
#[derive(Clone)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    pub gemini_api_key: Option<String>,
    pub gemini_base_url: String,
    pub edit_model: String,
    pub text_model: String,
    pub image_model: String,
    pub upstream_timeout: Option<Duration>,
    pub strategy: StrategyKind,
    pub max_body_bytes: usize,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    // Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let gemini_base_url = get("GEMINI_BASE_URL")
            .unwrap_or_else(|| DEFAULT_GEMINI_BASE_URL.to_string());
        url::Url::parse(&gemini_base_url)
            .map_err(|err| ConfigError::InvalidBaseUrl(err.to_string()))?;

        let strategy = match get("ART_STRATEGY") {
            Some(value) => value.parse()?,
            None => StrategyKind::SingleCall,
        };

        let host = parse_or(
            "ART_SERVER_HOST",
            get("ART_SERVER_HOST"),
            IpAddr::V4(Ipv4Addr::LOCALHOST),
        )?;
        let port = parse_or("ART_SERVER_PORT", get("ART_SERVER_PORT"), DEFAULT_PORT)?;
        // A zero timeout would fail every upstream call, so it is refused.
        let upstream_timeout = match get("GEMINI_TIMEOUT_MS") {
            Some(value) => match parse_or("GEMINI_TIMEOUT_MS", Some(value.clone()), 0u64)? {
                0 => {
                    return Err(ConfigError::InvalidValue {
                        key: "GEMINI_TIMEOUT_MS",
                        value,
                    });
                }
                millis => Some(Duration::from_millis(millis)),
            },
            None => None,
        };
        let max_body_bytes = parse_or(
            "MAX_BODY_BYTES",
            get("MAX_BODY_BYTES"),
            DEFAULT_MAX_BODY_BYTES,
        )?;

        Ok(Self {
            host,
            port,
            gemini_api_key: get("GEMINI_API_KEY").map(|key| key.trim().to_string()),
            gemini_base_url,
            edit_model: get("GEMINI_EDIT_MODEL").unwrap_or_else(|| DEFAULT_EDIT_MODEL.to_string()),
            text_model: get("GEMINI_TEXT_MODEL").unwrap_or_else(|| DEFAULT_TEXT_MODEL.to_string()),
            image_model: get("GEMINI_IMAGE_MODEL")
                .unwrap_or_else(|| DEFAULT_IMAGE_MODEL.to_string()),
            upstream_timeout,
            strategy,
            max_body_bytes,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_or<T: FromStr>(
    key: &'static str,
    value: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value }),
        None => Ok(default),
    }
}
