use std::path::PathBuf;

pub const DEFAULT_ENDPOINT: &str = "https://quizapi-backend.onrender.com/generate-quiz";
pub const ENDPOINT_ENV: &str = "QUIZMASTER_API_URL";
pub const UPLOAD_FIELD: &str = "file";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub endpoint: String,
    pub pdf_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        Self::with_endpoint(std::env::var(ENDPOINT_ENV).ok())
    }

    fn with_endpoint(value: Option<String>) -> Self {
        let endpoint = value
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        Self {
            endpoint,
            pdf_dir: PathBuf::from("."),
        }
    }
}
