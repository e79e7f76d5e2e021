//! OAuth identity providers supported by the API

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identity provider used for login
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OAuthProvider {
    #[default]
    Twitch,
}

impl OAuthProvider {
    /// Path segment used by the API and the frontend routes
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Twitch => "twitch",
        }
    }

    /// Human readable name for buttons and headings
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Twitch => "Twitch",
        }
    }

    /// Frontend route the provider redirects back to after consent
    pub fn callback_path(&self) -> String {
        format!("/auth/callback/{}/", self.as_str())
    }
}

impl fmt::Display for OAuthProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a path segment names no known provider
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown OAuth provider: {0}")]
pub struct UnknownProvider(pub String);

impl FromStr for OAuthProvider {
    type Err = UnknownProvider;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "twitch" => Ok(Self::Twitch),
            _ => Err(UnknownProvider(s.to_string())),
        }
    }
}
