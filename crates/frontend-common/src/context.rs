//! Application context shared by every view

use crate::client::{create_session, Session};
use beacon_core::AppConfig;
use beacon_http::ClientError;
use std::rc::Rc;
use yew::prelude::*;

/// Configuration and session service for the running app
#[derive(Clone)]
pub struct AppContext {
    pub config: Rc<AppConfig>,
    pub session: Rc<Session>,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Result<Self, ClientError> {
        let session = create_session(&config)?;
        Ok(Self {
            config: Rc::new(config),
            session: Rc::new(session),
        })
    }
}

impl PartialEq for AppContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.config, &other.config) && Rc::ptr_eq(&self.session, &other.session)
    }
}

/// Hook to use the app context
#[hook]
pub fn use_app() -> AppContext {
    use_context::<AppContext>()
        .expect("AppContext not found. Make sure to render views inside BeaconApp")
}

/// Hook to get the session service
#[hook]
pub fn use_session() -> Rc<Session> {
    use_app().session
}
