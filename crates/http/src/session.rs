//! Session lifecycle: login link, callback exchange, validation and logout

use crate::client::{BeaconClient, error::ClientError};
use crate::types::Streamer;
use beacon_core::{
    Clock, CoreError, KeyValueStore, OAuthProvider, Page, SessionToken, SettingsStore,
    SystemClock, TokenStore, TokenValidator, ViewState,
};

/// Errors surfaced to the views
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    Storage(#[from] CoreError),

    /// No valid session token is stored
    #[error("not signed in")]
    SignedOut,
}

/// Ties the API client to the token slot for one provider
#[derive(Clone, Debug)]
pub struct SessionService<S, C = SystemClock> {
    client: BeaconClient,
    provider: OAuthProvider,
    validator: TokenValidator<S, C>,
}

impl<S: KeyValueStore + Clone> SessionService<S> {
    pub fn new(client: BeaconClient, provider: OAuthProvider, store: S) -> Self {
        Self::with_clock(client, provider, store, SystemClock)
    }
}

impl<S: KeyValueStore + Clone, C: Clock> SessionService<S, C> {
    pub fn with_clock(client: BeaconClient, provider: OAuthProvider, store: S, clock: C) -> Self {
        Self {
            client,
            provider,
            validator: TokenValidator::with_clock(TokenStore::new(store), clock),
        }
    }

    pub fn provider(&self) -> OAuthProvider {
        self.provider
    }

    pub fn tokens(&self) -> &TokenStore<S> {
        self.validator.tokens()
    }

    /// Values of the configurable settings fields
    pub fn settings(&self) -> SettingsStore<S> {
        SettingsStore::new(self.tokens().backend().clone())
    }

    /// Raw token if one is stored and not expired
    pub fn current_token(&self) -> Option<String> {
        self.validator.get_and_validate()
    }

    /// Decoded token if one is stored and not expired
    pub fn current_session(&self) -> Option<SessionToken> {
        match self.validator.validate() {
            Ok(status) => status.into_token(),
            Err(e) => {
                tracing::warn!("Failed to read session token: {e}");
                None
            }
        }
    }

    /// Decide what to show on `page`. Only the home page consults the token.
    pub fn view_for(&self, page: Page) -> ViewState {
        let authorized = match page {
            Page::Home => self.current_token().is_some(),
            Page::Callback(_) => false,
        };
        let view = ViewState::evaluate(page, authorized);
        tracing::debug!(?page, ?view, "Evaluated view state");
        view
    }

    /// Fetch the provider consent URL for the login link
    pub async fn authorization_url(&self) -> Result<String, SessionError> {
        let response = self.client.get_authorization_url(self.provider).await?;
        Ok(response.authorization_url)
    }

    /// Exchange the callback query string for a token and store it.
    ///
    /// The returned token is stored as received, without decoding it first.
    pub async fn complete_callback(&self, query: &str) -> Result<String, SessionError> {
        let response = self.client.exchange_callback(self.provider, query).await?;
        self.tokens().set(&response.token)?;
        tracing::info!(provider = %self.provider, "Login completed");
        Ok(response.token)
    }

    /// Streamers the signed-in user may manage.
    ///
    /// Sends the validated token as a bearer credential. A token the API
    /// refuses is removed, so the next home evaluation asks for login again.
    pub async fn streamers(&self) -> Result<Vec<Streamer>, SessionError> {
        let token = self.current_token().ok_or(SessionError::SignedOut)?;
        match self.client.list_streamers(&token).await {
            Ok(streamers) => Ok(streamers),
            Err(e) if e.is_unauthorized() => {
                tracing::info!("Session token refused by the API, signing out");
                self.tokens().remove()?;
                Err(e.into())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Forget the token. Returns the page to navigate to.
    pub fn logout(&self) -> Result<Page, SessionError> {
        self.tokens().remove()?;
        tracing::info!("Logged out");
        Ok(Page::Home)
    }
}
