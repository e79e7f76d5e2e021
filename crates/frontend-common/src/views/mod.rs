//! Page-level views

mod auth_callback;
mod authorize;
mod home;
mod settings;

pub use auth_callback::AuthCallback;
pub use authorize::Authorize;
pub use home::Home;
pub use settings::Settings;
