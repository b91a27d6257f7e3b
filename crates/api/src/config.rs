//! API configuration.

use std::env;

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8000;

/// Default request body cap for uploads (10 MiB)
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// API configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Identifiers answered by existence checks
    pub person_ids: Vec<i64>,
    /// Maximum accepted request body size in bytes
    pub max_upload_bytes: usize,
    /// Serve Swagger UI and the OpenAPI document
    pub enable_docs: bool,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            host: env::var("SERVER_HOST").unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            port: env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_SERVER_PORT),
            person_ids: env::var("PERSON_IDS")
                .ok()
                .map(|raw| parse_person_ids(&raw))
                .unwrap_or_else(|| domain::DEFAULT_PERSON_IDS.to_vec()),
            max_upload_bytes: env::var("MAX_UPLOAD_BYTES")
                .ok()
                .and_then(|b| b.parse().ok())
                .unwrap_or(DEFAULT_MAX_UPLOAD_BYTES),
            enable_docs: env::var("ENABLE_DOCS")
                .ok()
                .map(|v| parse_flag(&v))
                .unwrap_or(true),
        }
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_SERVER_HOST.to_string(),
            port: DEFAULT_SERVER_PORT,
            person_ids: domain::DEFAULT_PERSON_IDS.to_vec(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            enable_docs: true,
        }
    }
}

/// Parse a comma-separated identifier list, skipping entries that are not positive integers.
pub fn parse_person_ids(raw: &str) -> Vec<i64> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .filter_map(|entry| match entry.parse::<i64>() {
            Ok(id) if id >= domain::MIN_PERSON_ID => Some(id),
            _ => {
                tracing::warn!("Ignoring invalid entry in PERSON_IDS: {:?}", entry);
                None
            }
        })
        .collect()
}

fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}
