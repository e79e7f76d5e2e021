//! Beacon API client

pub mod auth;
pub mod error;
pub mod streamers;

use error::ClientError;
use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;

/// Thin typed wrapper over the Beacon REST API.
///
/// Requests are anonymous unless a method takes a session token.
#[derive(Clone, Debug)]
pub struct BeaconClient {
    http: Client,
    base_url: String,
}

impl BeaconClient {
    /// `base_url` must be an absolute origin; a trailing slash is dropped
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let url = base_url.into();
        let base_url = url.trim_end_matches('/').to_string();
        if let Err(e) = Url::parse(&base_url) {
            return Err(ClientError::InvalidBaseUrl {
                url,
                reason: e.to_string(),
            });
        }

        Ok(Self {
            http: Client::builder().build()?,
            base_url,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `path` relative to the API origin
    fn get(&self, path: &str) -> RequestBuilder {
        self.http.get(format!("{}{}", self.base_url, path))
    }

    /// Send `request` and decode a JSON body on success
    async fn send<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        request: RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::debug!(endpoint, status = status.as_u16(), "API request failed");
            return Err(ClientError::from_status(status, body));
        }

        serde_json::from_str(&body).map_err(|source| ClientError::UnexpectedBody { endpoint, source })
    }
}
