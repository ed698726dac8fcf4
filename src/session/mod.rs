//! Authentication session state machine.
//!
//! This module contains the application-wide session record, including:
//! - `Session`, the state (anonymous, loading, authenticated or errored)
//! - `Event`, the discrete transitions dispatched into it
//! - `SessionProvider`/`SessionContext`, the explicit owner and handles
//! - Session-specific error types

mod context;
mod error;

pub use context::{SessionContext, SessionProvider};
pub use error::SessionError;

use crate::auth::{ApiError, User};
use std::fmt;

/// Failure recorded by the session when the current user cannot be loaded.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthFailure {
    pub status: Option<u16>,
    pub message: String,
}

impl AuthFailure {
    pub fn new(status: Option<u16>, message: impl Into<String>) -> Self {
        AuthFailure {
            status,
            message: message.into(),
        }
    }

    /// Whether the service rejected the session cookie, which is how a
    /// signed-out client looks to it.
    ///
    pub fn is_unauthorized(&self) -> bool {
        self.status == Some(401)
    }
}

impl fmt::Display for AuthFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(status) => write!(f, "{} (status {})", self.message, status),
            None => write!(f, "{}", self.message),
        }
    }
}

impl From<&ApiError> for AuthFailure {
    fn from(error: &ApiError) -> Self {
        AuthFailure::new(error.status(), error.summary())
    }
}

/// Events transitioning the session.
///
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    FetchingUser,
    UserLoaded(User),
    LogIn(User),
    AuthError(AuthFailure),
    Logout,
}

/// Whether, and as whom, a user is currently authenticated.
///
/// Loading is a state of its own, so a session can never be loading and
/// authenticated at the same time.
///
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Session {
    #[default]
    Anonymous,
    Loading,
    Authenticated(User),
    Errored(AuthFailure),
}

/// Flat read-only view of a session.
///
#[derive(Clone, Debug, PartialEq)]
pub struct SessionView {
    pub is_authenticated: bool,
    pub loading: bool,
    pub user: Option<User>,
    pub error: Option<AuthFailure>,
}

impl Session {
    /// Return the state following the event. Every event is accepted in
    /// every state.
    ///
    pub fn reduce(self, event: Event) -> Session {
        match event {
            Event::FetchingUser => Session::Loading,
            Event::UserLoaded(user) | Event::LogIn(user) => Session::Authenticated(user),
            Event::AuthError(failure) => Session::Errored(failure),
            Event::Logout => Session::Anonymous,
        }
    }

    /// Apply the event in place.
    ///
    pub fn apply(&mut self, event: Event) {
        *self = std::mem::take(self).reduce(event);
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated(_))
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Session::Loading)
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            Session::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&AuthFailure> {
        match self {
            Session::Errored(failure) => Some(failure),
            _ => None,
        }
    }

    pub fn view(&self) -> SessionView {
        SessionView {
            is_authenticated: self.is_authenticated(),
            loading: self.is_loading(),
            user: self.user().cloned(),
            error: self.error().cloned(),
        }
    }
}

impl SessionView {
    /// Return the failure worth reporting. A rejected session cookie only
    /// means nobody is signed in.
    ///
    pub fn reportable_error(&self) -> Option<&AuthFailure> {
        self.error.as_ref().filter(|failure| !failure.is_unauthorized())
    }

    /// Short status label for display.
    ///
    pub fn label(&self) -> &'static str {
        if self.is_authenticated {
            "Signed in"
        } else if self.loading {
            "Loading"
        } else if self.reportable_error().is_some() {
            "Authentication error"
        } else {
            "Signed out"
        }
    }
}
