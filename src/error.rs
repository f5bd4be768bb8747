use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Organization name is required (--org or GITHUB_ORG)")]
    MissingOrganization,

    #[error("GitHub token is required (--token or GITHUB_TOKEN)")]
    MissingToken,

    #[error("Failed to read config file '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Any failure talking to the hosting service.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("GitHub rejected the token during {operation}: {message}")]
    Authentication { operation: String, message: String },

    #[error("GitHub rate limit exceeded during {operation}: {message}")]
    RateLimited { operation: String, message: String },

    #[error("{operation} failed with status {status}: {message}")]
    Api {
        operation: String,
        status: u16,
        message: String,
    },

    #[error("network error during {operation}: {message}")]
    Network { operation: String, message: String },

    #[error("malformed response during {operation}: {message}")]
    Decode { operation: String, message: String },

    #[error("Invalid GitHub API base URL '{url}': {message}")]
    InvalidBaseUrl { url: String, message: String },
}

#[derive(Error, Debug)]
pub enum CollectError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("Failed to acquire request permit: {0}")]
    Semaphore(#[from] tokio::sync::AcquireError),
}

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write report: {0}")]
    WriteReport(std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
