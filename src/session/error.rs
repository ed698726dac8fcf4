//! Session-specific error types.

/// Misuse of a session handle. These indicate programmer errors and are
/// treated as fatal by the application.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// Handle used after its provider was unmounted
    #[error("Session context used outside of its provider")]
    ProviderUnmounted,

    /// A writer panicked while holding the session lock
    #[error("Session state lock poisoned")]
    Poisoned,
}
