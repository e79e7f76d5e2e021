//! Client configuration

use crate::{CoreResult, OAuthProvider};
use serde::{Deserialize, Serialize};

/// Fixed storage layout shared by every frontend variant
pub struct SessionConfig;

impl SessionConfig {
    /// Storage key holding the raw session token
    pub const TOKEN_KEY: &'static str = "token";

    /// Prefix for persisted settings field values
    pub const SETTINGS_KEY_PREFIX: &'static str = "settings.";
}

/// Per-variant application configuration, loaded from `app.toml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub branding: Branding,
    pub provider: OAuthProvider,
    /// API origin; the page origin is used when unset
    pub api_base_url: Option<String>,
    pub settings_fields: Vec<SettingsField>,
    /// Show the streamers linked to the signed-in account
    pub show_streamers: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            branding: Branding::default(),
            provider: OAuthProvider::Twitch,
            api_base_url: None,
            settings_fields: Vec::new(),
            show_streamers: false,
        }
    }
}

impl AppConfig {
    /// Parse a TOML document
    pub fn from_toml_str(source: &str) -> CoreResult<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML document, falling back to defaults when it is invalid
    pub fn from_toml_str_or_default(source: &str) -> Self {
        match Self::from_toml_str(source) {
            Ok(config) => config,
            Err(e) => {
                tracing::error!("Invalid app configuration, using defaults: {e}");
                Self::default()
            }
        }
    }

    fn validate(&self) -> CoreResult<()> {
        let mut seen = std::collections::HashSet::new();
        for field in &self.settings_fields {
            if field.key.trim().is_empty() {
                return Err(crate::CoreError::invalid_config(
                    "settings field key must not be empty",
                ));
            }
            if !seen.insert(field.key.as_str()) {
                return Err(crate::CoreError::invalid_config(format!(
                    "duplicate settings field key: {}",
                    field.key
                )));
            }
        }
        Ok(())
    }
}

/// Branding shown in headers and the login screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Branding {
    pub title: String,
    pub tagline: Option<String>,
}

impl Default for Branding {
    fn default() -> Self {
        Self {
            title: "Beacon".to_string(),
            tagline: None,
        }
    }
}

/// Extra input rendered on the settings screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingsField {
    pub key: String,
    pub label: String,
    #[serde(default)]
    pub placeholder: Option<String>,
}
