//! Refresh coordination.
//!
//! Makes token expiry invisible to callers: the first request that
//! observes an authorization failure runs the refresh exchange, every
//! other concurrent observer is queued and woken by that single exchange,
//! and nobody ever starts a second one while it is in flight.

use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use emlak_domain::{CredentialPair, TokenPair};
use thiserror::Error;
use tokio::sync::{broadcast, oneshot};
use tracing::{debug, warn};

use crate::auth::TokenStore;
use crate::session::SessionEvent;

/// Errors produced by the refresh flow. A failed refresh is terminal for
/// the current session and forces re-authentication.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// No refresh token is stored; no exchange was attempted.
    #[error("no refresh token available")]
    NoRefreshToken,

    /// The refresh exchange itself failed. Never retried automatically.
    #[error("token refresh failed: {message}")]
    RefreshFailed {
        /// User-visible description of the failure.
        message: String,
    },

    /// Token storage failed during the refresh flow.
    #[error("token storage failed: {0}")]
    Storage(String),
}

/// Port for the refresh exchange itself: one `POST /auth/refresh` call.
#[async_trait]
pub trait TokenRefresher: Send + Sync {
    /// Exchanges the refresh token for a new token pair.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the refresh token or the
    /// call cannot complete.
    async fn exchange(&self, refresh_token: &str) -> Result<TokenPair, AuthError>;
}

/// Waiters suspended on the in-flight exchange, plus the in-progress flag.
///
/// The queue exists only while a refresh is in flight and is drained
/// exactly once per attempt.
#[derive(Default)]
struct RefreshState {
    in_flight: bool,
    waiters: Vec<oneshot::Sender<Result<String, AuthError>>>,
}

/// Coordinator owning the refresh-in-progress flag and the pending queue.
///
/// Constructed once per client; holding the state in an object (rather
/// than process-wide globals) keeps the mutual-exclusion invariant
/// unit-testable.
pub struct AuthCoordinator {
    // std Mutex: only ever locked for flag/queue flips, never across an
    // await, and lockable from a Drop impl.
    state: Mutex<RefreshState>,
    session_events: broadcast::Sender<SessionEvent>,
}

impl AuthCoordinator {
    /// Creates a coordinator emitting session events on the given channel.
    #[must_use]
    pub fn new(session_events: broadcast::Sender<SessionEvent>) -> Self {
        Self {
            state: Mutex::new(RefreshState::default()),
            session_events,
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, RefreshState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Obtains a fresh access token after an authorization failure.
    ///
    /// If an exchange is already in flight the caller is queued and woken
    /// with its outcome; otherwise this caller runs the exchange. Either
    /// way, at most one exchange is in flight at any time, and every
    /// queued caller sees the same outcome.
    ///
    /// # Errors
    ///
    /// Returns an error if no refresh token is stored, the exchange fails,
    /// or token storage fails. Token-clearing and the session-expired
    /// event have already happened by the time the error is returned.
    pub async fn refresh_access_token(
        &self,
        tokens: &TokenStore,
        refresher: &dyn TokenRefresher,
    ) -> Result<String, AuthError> {
        // Queue-or-lead is decided under a single lock acquisition, so no
        // interleaving window exists between checking and setting the
        // in-progress flag.
        let waiter = {
            let mut state = self.lock_state();
            if state.in_flight {
                let (tx, rx) = oneshot::channel();
                state.waiters.push(tx);
                Some(rx)
            } else {
                state.in_flight = true;
                None
            }
        };

        if let Some(rx) = waiter {
            debug!("queued on in-flight token refresh");
            return rx.await.map_err(|_| AuthError::RefreshFailed {
                message: "refresh exchange was abandoned".to_string(),
            })?;
        }

        // The guard drains the queue and releases the flag exactly once,
        // on every exit path of the exchange. That includes the leading
        // caller's future being dropped mid-exchange: the guard's Drop
        // fails the queued waiters and frees the flag so a later failure
        // cycle can start a fresh exchange.
        let guard = SettleGuard { coordinator: self, armed: true };
        let outcome = self.run_exchange(tokens, refresher).await;
        guard.complete(&outcome);
        outcome
    }

    /// Releases the in-progress flag and wakes every queued caller with
    /// the outcome. Called exactly once per exchange attempt.
    fn settle(&self, outcome: &Result<String, AuthError>) {
        let waiters = {
            let mut state = self.lock_state();
            state.in_flight = false;
            std::mem::take(&mut state.waiters)
        };
        for tx in waiters {
            // A queued caller may have been abandoned; its loss is not ours.
            let _ = tx.send(outcome.clone());
        }
    }

    /// Runs one refresh exchange end to end: read the stored refresh
    /// token, call the backend, persist the new pair into the tier the old
    /// one came from. On any terminal failure both tiers are cleared and a
    /// session-expired event is emitted.
    async fn run_exchange(
        &self,
        tokens: &TokenStore,
        refresher: &dyn TokenRefresher,
    ) -> Result<String, AuthError> {
        let stored = match tokens.read().await {
            Ok(stored) => stored,
            Err(error) => {
                // Unreadable storage is as terminal as a missing token:
                // nothing to refresh with, so the session ends.
                warn!(%error, "token storage failed during refresh, ending session");
                self.expire_session(tokens).await;
                return Err(AuthError::Storage(error.to_string()));
            }
        };

        let Some((pair, tier)) = stored else {
            warn!("authorization failed with no refresh token stored");
            self.expire_session(tokens).await;
            return Err(AuthError::NoRefreshToken);
        };

        debug!(tier = ?tier, "starting token refresh exchange");
        match refresher.exchange(&pair.refresh_token).await {
            Ok(new_pair) => {
                let access_token = new_pair.access_token.clone();
                // Tier stickiness: the new pair goes where the old refresh
                // token was found.
                tokens
                    .store(&CredentialPair::from(new_pair), tier)
                    .await
                    .map_err(|e| AuthError::Storage(e.to_string()))?;
                debug!("token refresh succeeded");
                Ok(access_token)
            }
            Err(error) => {
                warn!(%error, "token refresh failed, ending session");
                self.expire_session(tokens).await;
                Err(error)
            }
        }
    }

    /// Clears both tiers and notifies subscribers that re-authentication
    /// is required. Clearing is best-effort: a storage failure here must
    /// not mask the refresh error.
    async fn expire_session(&self, tokens: &TokenStore) {
        if let Err(error) = tokens.clear().await {
            warn!(%error, "failed to clear tokens while expiring session");
        }
        let _ = self.session_events.send(SessionEvent::Expired);
    }
}

/// Settles the exchange outcome on drop unless the leading caller reached
/// the end of the exchange and settled it with the real outcome.
struct SettleGuard<'a> {
    coordinator: &'a AuthCoordinator,
    armed: bool,
}

impl SettleGuard<'_> {
    fn complete(mut self, outcome: &Result<String, AuthError>) {
        self.armed = false;
        self.coordinator.settle(outcome);
    }
}

impl Drop for SettleGuard<'_> {
    fn drop(&mut self) {
        if self.armed {
            warn!("refresh exchange dropped mid-flight, releasing coordinator");
            self.coordinator.settle(&Err(AuthError::RefreshFailed {
                message: "refresh exchange was abandoned".to_string(),
            }));
        }
    }
}
