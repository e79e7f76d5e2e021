//! Navigation and view state for the login flow

use crate::OAuthProvider;

/// Pages the client knows how to render
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Home,
    Callback(OAuthProvider),
}

impl Page {
    /// Recognise a location path. Trailing slashes are optional.
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.trim_matches('/');
        if trimmed.is_empty() {
            return Some(Self::Home);
        }

        let mut segments = trimmed.split('/');
        match (segments.next(), segments.next(), segments.next(), segments.next()) {
            (Some("auth"), Some("callback"), Some(provider), None) => {
                provider.parse().ok().map(Self::Callback)
            }
            _ => None,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Callback(provider) => provider.callback_path(),
        }
    }
}

/// What the app shows for the current page and session
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewState {
    HomeUnauthorized,
    HomeAuthorized,
    CallbackPending,
}

impl ViewState {
    /// Evaluate the state for a page given whether a valid token is stored
    pub fn evaluate(page: Page, authorized: bool) -> Self {
        match page {
            Page::Callback(_) => Self::CallbackPending,
            Page::Home if authorized => Self::HomeAuthorized,
            Page::Home => Self::HomeUnauthorized,
        }
    }

    pub fn is_authorized(&self) -> bool {
        matches!(self, Self::HomeAuthorized)
    }
}

/// Progress of the authorization URL request
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AuthorizeState {
    #[default]
    Loading,
    Ready { authorization_url: String },
    Failed { message: String },
}

impl AuthorizeState {
    pub fn from_result<E: std::fmt::Display>(result: Result<String, E>) -> Self {
        match result {
            Ok(authorization_url) => Self::Ready { authorization_url },
            Err(e) => Self::Failed {
                message: e.to_string(),
            },
        }
    }

    /// Target of the login link, once known
    pub fn link_href(&self) -> Option<&str> {
        match self {
            Self::Ready { authorization_url } => Some(authorization_url),
            _ => None,
        }
    }
}

/// Progress of the callback exchange
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CallbackState {
    #[default]
    Exchanging,
    /// Token stored; the client should navigate to this page
    Completed { redirect_to: Page },
    Failed { message: String },
}

impl CallbackState {
    pub fn from_result<T, E: std::fmt::Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(_) => Self::Completed {
                redirect_to: Page::Home,
            },
            Err(e) => Self::Failed {
                message: e.to_string(),
            },
        }
    }
}
