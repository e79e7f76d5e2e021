//! Client configuration and initialization

use crate::storage::BrowserStorage;
use beacon_core::AppConfig;
use beacon_http::{BeaconClient, ClientError, SessionService};
use web_sys::window;

/// Session service used by the browser build
pub type Session = SessionService<BrowserStorage>;

/// Get the base URL for API calls
fn get_base_url(config: &AppConfig) -> Result<String, ClientError> {
    if let Some(url) = &config.api_base_url {
        return Ok(url.clone());
    }

    // Fall back to the page origin
    window()
        .and_then(|w| w.location().origin().ok())
        .ok_or_else(|| ClientError::InvalidBaseUrl {
            url: String::new(),
            reason: "cannot determine page origin".into(),
        })
}

/// Build the session service for the configured provider
pub fn create_session(config: &AppConfig) -> Result<Session, ClientError> {
    let client = BeaconClient::new(get_base_url(config)?)?;
    Ok(SessionService::new(client, config.provider, BrowserStorage))
}
