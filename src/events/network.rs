use crate::auth::{ApiError, AuthApi, Credentials, Registration};
use crate::session::{AuthFailure, Event as SessionEvent, SessionContext};
use crate::state::{State, View};
use anyhow::Result;
use log::*;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

/// Specify different network event types.
///
#[derive(Debug, Clone)]
pub enum Event {
    Me,
    SignIn(Credentials),
    Register(Registration),
    SignOut,
}

/// Specify struct for managing state with network events.
///
pub struct Handler<'a> {
    state: &'a Arc<Mutex<State>>,
    session: SessionContext,
    api: &'a mut AuthApi,
    timeout: Duration,
}

impl<'a> Handler<'a> {
    /// Return new instance with reference to state. Every request is
    /// abandoned once `timeout` elapses.
    ///
    pub fn new(
        state: &'a Arc<Mutex<State>>,
        session: SessionContext,
        api: &'a mut AuthApi,
        timeout: Duration,
    ) -> Self {
        Handler {
            state,
            session,
            api,
            timeout,
        }
    }

    /// Handle network events by type.
    ///
    pub async fn handle(&mut self, event: Event) -> Result<()> {
        debug!("Processing network event '{:?}'...", event);
        match event {
            Event::Me => self.me().await?,
            Event::SignIn(credentials) => self.sign_in(credentials).await?,
            Event::Register(registration) => self.register(registration).await?,
            Event::SignOut => self.sign_out().await?,
        }
        Ok(())
    }

    /// Load the user behind the current session cookie into the session.
    /// A reload started from the home view ends here either way.
    ///
    async fn me(&mut self) -> Result<()> {
        info!("Fetching current user...");
        self.session.dispatch(SessionEvent::FetchingUser)?;
        let result = with_timeout(self.timeout, self.api.current_user()).await;
        let mut state = self.state.lock().await;
        match result {
            Ok(user) => {
                info!("Loaded current user {}.", user.email);
                self.session.dispatch(SessionEvent::UserLoaded(user))?;
            }
            Err(e) => {
                warn!("Failed to fetch current user: {}", e);
                self.session
                    .dispatch(SessionEvent::AuthError(AuthFailure::from(&e)))?;
            }
        }
        state.end_refresh();
        Ok(())
    }

    /// Sign in. A failure is reported on the login page and leaves the
    /// session as it was.
    ///
    async fn sign_in(&mut self, credentials: Credentials) -> Result<()> {
        info!("Signing in as {}...", credentials.email);
        let result = with_timeout(self.timeout, self.api.sign_in(&credentials)).await;
        let mut state = self.state.lock().await;
        match result {
            Ok(user) => {
                info!("Signed in as {}.", user.email);
                state.login_mut().complete();
                self.session.dispatch(SessionEvent::LogIn(user))?;
            }
            Err(e) => {
                warn!("Failed to sign in: {}", e);
                state.login_mut().fail(e.summary());
            }
        }
        Ok(())
    }

    /// Create an account. The service signs the new account in, so success
    /// lands on the home view.
    ///
    async fn register(&mut self, registration: Registration) -> Result<()> {
        info!("Registering account for {}...", registration.email);
        let result = with_timeout(self.timeout, self.api.register(&registration)).await;
        let mut state = self.state.lock().await;
        match result {
            Ok(user) => {
                info!("Registered account {}.", user.email);
                state.register_mut().complete();
                state.set_page(View::Login);
                self.session.dispatch(SessionEvent::LogIn(user))?;
            }
            Err(e) => {
                warn!("Failed to register account: {}", e);
                state.register_mut().fail(e.summary());
            }
        }
        Ok(())
    }

    /// Forget the session cookie and log out.
    ///
    async fn sign_out(&mut self) -> Result<()> {
        info!("Signing out...");
        self.api.reset()?;
        self.session.dispatch(SessionEvent::Logout)?;
        Ok(())
    }
}

async fn with_timeout<T>(
    timeout: Duration,
    request: impl Future<Output = Result<T, ApiError>>,
) -> Result<T, ApiError> {
    match tokio::time::timeout(timeout, request).await {
        Ok(result) => result,
        Err(_) => Err(ApiError::Timeout(timeout)),
    }
}
