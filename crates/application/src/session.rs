//! Session lifecycle events.
//!
//! Instead of navigating the host application directly, the client emits
//! events on a broadcast channel; the host decides what "go to login"
//! means for it.

/// Events emitted when the authenticated session ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// The refresh flow is exhausted: the refresh exchange failed or no
    /// refresh token existed. Tokens have been cleared; the user must
    /// re-authenticate.
    Expired,
    /// The user logged out. Tokens have been cleared.
    LoggedOut,
}
