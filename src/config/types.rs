use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::defaults::*;

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct Config {
    /// GitHub API base URL (GitHub Enterprise, e.g. https://ghe.example.com/api/v3)
    #[serde(default)]
    pub api_base: Option<String>,

    /// Maximum number of in-flight GitHub requests (1 to 64)
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,

    /// Page size for pull request and review listings (GitHub caps it at 100).
    /// Repository listings always use the maximum.
    #[serde(default = "default_per_page")]
    pub per_page: u8,

    /// Follow pagination for pull requests and reviews instead of reading one page
    #[serde(default)]
    pub all_pages: bool,

    #[serde(default)]
    pub format: OutputFormat,

    /// Raw base label -> canonical base label. Replaces the built-in table when set.
    #[serde(default = "default_aliases")]
    pub aliases: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Markdown,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Markdown => write!(f, "markdown"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}
