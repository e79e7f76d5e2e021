//! Persistence of the session token

use crate::config::SessionConfig;
use crate::{CoreResult, KeyValueStore};

/// Single-slot token storage on top of a [`KeyValueStore`].
///
/// No validation happens at this layer.
#[derive(Clone, Debug)]
pub struct TokenStore<S> {
    store: S,
}

impl<S: KeyValueStore> TokenStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn get(&self) -> CoreResult<Option<String>> {
        self.store.get(SessionConfig::TOKEN_KEY)
    }

    pub fn set(&self, token: &str) -> CoreResult<()> {
        tracing::debug!("Storing session token");
        self.store.set(SessionConfig::TOKEN_KEY, token)
    }

    pub fn remove(&self) -> CoreResult<()> {
        tracing::debug!("Removing session token");
        self.store.remove(SessionConfig::TOKEN_KEY)
    }

    /// Backing store, shared with settings persistence
    pub fn backend(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    #[test]
    fn test_token_slot_lifecycle() {
        let backend = MemoryStore::new();
        let tokens = TokenStore::new(backend.clone());

        assert_eq!(tokens.get().unwrap(), None);

        tokens.set("not-even-a-jwt").unwrap();
        assert_eq!(tokens.get().unwrap().as_deref(), Some("not-even-a-jwt"));
        assert_eq!(
            backend.get(SessionConfig::TOKEN_KEY).unwrap().as_deref(),
            Some("not-even-a-jwt")
        );

        tokens.remove().unwrap();
        assert_eq!(tokens.get().unwrap(), None);
    }
}
