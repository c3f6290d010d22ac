//! Configuration type definitions

use serde::{Deserialize, Serialize};

use crate::domain::document::{DocumentFormat, DEFAULT_TITLE};

/// Where the catalog comes from and how to authenticate the relay
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// URL, file or directory of the catalog
    #[serde(default)]
    pub url: Option<String>,

    /// Environment variable holding a bearer token for the relay
    #[serde(default)]
    pub token_env: Option<String>,

    /// `name=value` cookie pairs sent by the relay
    #[serde(default)]
    pub cookies: Vec<String>,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: None,
            token_env: None,
            cookies: Vec::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    30
}

/// Generated document settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentConfig {
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default)]
    pub format: DocumentFormat,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            format: DocumentFormat::default(),
        }
    }
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

/// Terminal UI settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiConfig {
    /// Force Unicode icons on or off (auto-detected when unset)
    #[serde(default)]
    pub unicode: Option<bool>,
}

/// Complete configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,

    #[serde(default)]
    pub document: DocumentConfig,

    #[serde(default)]
    pub ui: UiConfig,
}

