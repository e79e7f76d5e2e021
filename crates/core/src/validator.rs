//! Token validity check used to gate the UI

use crate::token::{SessionToken, TokenError};
use crate::{CoreResult, KeyValueStore, TokenStore};
use chrono::Utc;
use std::cell::Cell;
use std::rc::Rc;

/// Source of wall-clock time in whole seconds since the Unix epoch
pub trait Clock {
    fn now(&self) -> i64;
}

/// Clock backed by the system (or browser) time
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> i64 {
        Utc::now().timestamp()
    }
}

/// Manually driven clock. Clones share the same instant.
#[derive(Clone, Debug, Default)]
pub struct FixedClock {
    now: Rc<Cell<i64>>,
}

impl FixedClock {
    pub fn at(now: i64) -> Self {
        Self {
            now: Rc::new(Cell::new(now)),
        }
    }

    pub fn set(&self, now: i64) {
        self.now.set(now);
    }

    pub fn advance(&self, seconds: i64) {
        self.now.set(self.now.get() + seconds);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> i64 {
        self.now.get()
    }
}

/// Outcome of checking the stored token
#[derive(Debug)]
pub enum TokenStatus {
    /// Nothing stored
    Absent,
    /// Stored value could not be decoded; it is left in place
    Malformed(TokenError),
    /// Token was past its expiry and has been removed
    Expired { expired_at: i64 },
    Valid(SessionToken),
}

impl TokenStatus {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    pub fn into_token(self) -> Option<SessionToken> {
        match self {
            Self::Valid(token) => Some(token),
            _ => None,
        }
    }
}

/// Reads the stored token and decides whether the session is usable
#[derive(Clone, Debug)]
pub struct TokenValidator<S, C = SystemClock> {
    tokens: TokenStore<S>,
    clock: C,
}

impl<S: KeyValueStore> TokenValidator<S> {
    pub fn new(tokens: TokenStore<S>) -> Self {
        Self::with_clock(tokens, SystemClock)
    }
}

impl<S: KeyValueStore, C: Clock> TokenValidator<S, C> {
    pub fn with_clock(tokens: TokenStore<S>, clock: C) -> Self {
        Self { tokens, clock }
    }

    pub fn tokens(&self) -> &TokenStore<S> {
        &self.tokens
    }

    /// Check the stored token, removing it when it has expired
    pub fn validate(&self) -> CoreResult<TokenStatus> {
        let Some(raw) = self.tokens.get()? else {
            return Ok(TokenStatus::Absent);
        };

        let token = match SessionToken::decode(raw) {
            Ok(token) => token,
            Err(e) => {
                tracing::debug!("Stored token could not be decoded: {e}");
                return Ok(TokenStatus::Malformed(e));
            }
        };

        let now = self.clock.now();
        if token.is_expired_at(now) {
            tracing::info!(
                expired_at = token.expires_at(),
                now,
                "Session token expired, removing it"
            );
            self.tokens.remove()?;
            return Ok(TokenStatus::Expired {
                expired_at: token.expires_at(),
            });
        }

        Ok(TokenStatus::Valid(token))
    }

    /// The raw token if one is stored and still valid
    pub fn get_and_validate(&self) -> Option<String> {
        match self.validate() {
            Ok(status) => status.into_token().map(SessionToken::into_string),
            Err(e) => {
                tracing::warn!("Failed to read session token: {e}");
                None
            }
        }
    }
}
