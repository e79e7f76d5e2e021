//! Shared views and session plumbing for the Beacon web frontends
//!
//! Each frontend binary only supplies an [`AppConfig`]; branding and the
//! extra settings fields are the only differences between variants.

pub mod app;
pub mod client;
pub mod components;
pub mod context;
pub mod logging;
pub mod routes;
pub mod storage;
pub mod views;

pub use app::{BeaconApp, BeaconAppProps};
pub use beacon_core::AppConfig;
pub use context::{use_app, use_session, AppContext};
pub use routes::Route;
pub use storage::BrowserStorage;
