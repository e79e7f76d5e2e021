//! Beacon HTTP client and session service
//!
//! Talks to the auth and streamer APIs and keeps the session token in a
//! [`KeyValueStore`](beacon_core::KeyValueStore).

pub mod client;
pub mod session;
pub mod types;

pub use client::{BeaconClient, error::ClientError};
pub use session::{SessionError, SessionService};
pub use types::{AuthorizationUrlResponse, CallbackResponse, Streamer, TwitchAccount};
