//! Configuration schema for the notes service.

use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr};

/// Wildcard entry that allows every origin.
pub const ANY_ORIGIN: &str = "*";

/// Root config for the notes service.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct NotesConfig {
    #[serde(default, rename = "$schema", skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    #[serde(default)]
    pub app: AppConfig,
    #[serde(default)]
    pub cors: CorsConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

impl NotesConfig {
    /// Start building a config programmatically with defaults applied.
    pub fn builder() -> NotesConfigBuilder {
        NotesConfigBuilder::new()
    }
}

/// Builder for assembling a `NotesConfig` in code.
#[derive(Debug, Default, Clone)]
pub struct NotesConfigBuilder {
    config: NotesConfig,
}

impl NotesConfigBuilder {
    /// Create a new builder seeded with default config values.
    pub fn new() -> Self {
        Self {
            config: NotesConfig::default(),
        }
    }

    /// Replace the application metadata.
    pub fn app(mut self, app: AppConfig) -> Self {
        self.config.app = app;
        self
    }

    /// Replace the CORS policy.
    pub fn cors(mut self, cors: CorsConfig) -> Self {
        self.config.cors = cors;
        self
    }

    /// Replace the listener settings.
    pub fn server(mut self, server: ServerConfig) -> Self {
        self.config.server = server;
        self
    }

    /// Finalize and return the built `NotesConfig`.
    pub fn build(self) -> NotesConfig {
        self.config
    }
}

/// Application metadata published in the API document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_app_description")]
    pub description: String,
    #[serde(default = "default_app_version")]
    pub version: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            description: default_app_description(),
            version: default_app_version(),
        }
    }
}

fn default_app_name() -> String {
    "Notes API".to_string()
}

fn default_app_description() -> String {
    "A simple Notes management API with CRUD operations.".to_string()
}

fn default_app_version() -> String {
    "0.1.0".to_string()
}

/// Cross-origin request policy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CorsConfig {
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: default_allowed_origins(),
        }
    }
}

impl CorsConfig {
    /// Build a policy from an explicit origin list.
    pub fn with_origins<I, S>(origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed_origins: origins.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse a comma-separated origin list, trimming entries and dropping empties.
    pub fn parse_origin_list(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// True when the wildcard origin is configured.
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|origin| origin == ANY_ORIGIN)
    }

    /// True when requests from `origin` may be served.
    pub fn allows_origin(&self, origin: &str) -> bool {
        self.allows_any_origin() || self.allowed_origins.iter().any(|allowed| allowed == origin)
    }
}

fn default_allowed_origins() -> Vec<String> {
    vec![ANY_ORIGIN.to_string()]
}

/// Listener settings for the HTTP server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerConfig {
    #[serde(default = "default_address")]
    pub address: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: default_address(),
            port: default_port(),
        }
    }
}

fn default_address() -> IpAddr {
    IpAddr::V4(Ipv4Addr::LOCALHOST)
}

fn default_port() -> u16 {
    8000
}
