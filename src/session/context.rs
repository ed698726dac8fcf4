//! Explicit owner and handles for the application session.

use super::{Event, Session, SessionError, SessionView};
use log::*;
use std::sync::{Arc, RwLock, Weak};

/// Owns the session state for as long as it is mounted at the application
/// root. Dropping the provider destroys the state.
///
pub struct SessionProvider {
    inner: Arc<RwLock<Session>>,
}

impl SessionProvider {
    /// Create an anonymous session.
    ///
    pub fn mount() -> Self {
        debug!("Mounting session provider...");
        SessionProvider {
            inner: Arc::new(RwLock::new(Session::default())),
        }
    }

    /// Return a handle for dispatching to and reading the session.
    ///
    pub fn context(&self) -> SessionContext {
        SessionContext {
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// Tear the session down.
    ///
    pub fn unmount(self) {
        drop(self);
    }
}

impl Drop for SessionProvider {
    fn drop(&mut self) {
        debug!("Unmounting session provider.");
    }
}

/// Cheap handle to the mounted session. The reducer is the only writer;
/// any number of handles may read.
///
#[derive(Clone, Debug)]
pub struct SessionContext {
    inner: Weak<RwLock<Session>>,
}

impl SessionContext {
    fn state(&self) -> Result<Arc<RwLock<Session>>, SessionError> {
        self.inner.upgrade().ok_or(SessionError::ProviderUnmounted)
    }

    /// Transition the session with the event.
    ///
    pub fn dispatch(&self, event: Event) -> Result<(), SessionError> {
        let state = self.state()?;
        let mut session = state.write().map_err(|_| SessionError::Poisoned)?;
        debug!("Dispatching session event {:?}...", event);
        session.apply(event);
        Ok(())
    }

    /// Run `f` against the current session.
    ///
    pub fn read<R>(&self, f: impl FnOnce(&Session) -> R) -> Result<R, SessionError> {
        let state = self.state()?;
        let session = state.read().map_err(|_| SessionError::Poisoned)?;
        Ok(f(&*session))
    }

    /// Return a copy of the current session.
    ///
    pub fn snapshot(&self) -> Result<Session, SessionError> {
        self.read(Session::clone)
    }

    /// Return the flat read-only view of the current session.
    ///
    pub fn view(&self) -> Result<SessionView, SessionError> {
        self.read(Session::view)
    }
}
