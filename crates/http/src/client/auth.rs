//! Authentication API client methods

use super::{BeaconClient, ClientError};
use crate::types::{AuthorizationUrlResponse, CallbackResponse};
use beacon_core::OAuthProvider;

impl BeaconClient {
    /// Fetch the provider consent URL the user should be sent to
    pub async fn get_authorization_url(
        &self,
        provider: OAuthProvider,
    ) -> Result<AuthorizationUrlResponse, ClientError> {
        let request = self.get(&format!("/api/auth/get_authorization_url/{provider}/"));
        self.send("get_authorization_url", request).await
    }

    /// Exchange the provider redirect parameters for a session token.
    ///
    /// `query` is the redirect's query string, forwarded verbatim. A leading
    /// `?` is optional.
    pub async fn exchange_callback(
        &self,
        provider: OAuthProvider,
        query: &str,
    ) -> Result<CallbackResponse, ClientError> {
        let query = query.trim_start_matches('?');
        let path = if query.is_empty() {
            format!("/api/auth/callback/{provider}/")
        } else {
            format!("/api/auth/callback/{provider}/?{query}")
        };
        self.send("auth_callback", self.get(&path)).await
    }
}
