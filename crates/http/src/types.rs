//! Response bodies of the Beacon API

use serde::{Deserialize, Serialize};

/// Response of `GET /api/auth/get_authorization_url/{provider}/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizationUrlResponse {
    pub authorization_url: String,
}

/// Response of `GET /api/auth/callback/{provider}/?code=...`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallbackResponse {
    pub token: String,
}

/// Twitch account a streamer is linked to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TwitchAccount {
    pub id: u64,
    pub name: String,
}

/// Element of `GET /api/streamers/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Streamer {
    pub twitch: TwitchAccount,
}
