//! Beacon core types: token lifecycle, storage seam and navigation flow

pub mod config;
pub mod error;
pub mod flow;
pub mod provider;
pub mod settings;
pub mod storage;
pub mod token;
pub mod token_store;
pub mod validator;

pub use config::{AppConfig, Branding, SessionConfig, SettingsField};
pub use error::{CoreError, CoreResult};
pub use flow::{AuthorizeState, CallbackState, Page, ViewState};
pub use provider::{OAuthProvider, UnknownProvider};
pub use settings::SettingsStore;
pub use storage::{KeyValueStore, MemoryStore};
pub use token::{Claims, SessionToken, TokenError};
pub use token_store::TokenStore;
pub use validator::{Clock, FixedClock, SystemClock, TokenStatus, TokenValidator};
