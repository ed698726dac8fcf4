use crate::app::NetworkEventSender;
use crate::auth::User;
use crate::events::network::Event as NetworkEvent;
use crate::form::FormError;
use crate::pages::{login_page, register_page, LoginField, LoginPage, RegisterPage};
use crate::session::{SessionContext, SessionError, SessionView};
use crate::ui::SPINNER_FRAME_COUNT;
use log::*;

use super::navigation::View;

/// Houses data representative of application state.
///
pub struct State {
    net_sender: NetworkEventSender,
    session: SessionContext,
    page: View,
    login: LoginPage,
    register: RegisterPage,
    refreshing: Option<User>,
    spinner_index: usize,
}

impl State {
    /// Return a new instance with fresh form pages. The login email starts
    /// out as the last email used.
    ///
    pub fn new(
        net_sender: NetworkEventSender,
        session: SessionContext,
        last_email: Option<String>,
    ) -> Result<State, FormError> {
        Ok(State {
            login: login_page(net_sender.clone(), last_email),
            register: register_page(net_sender.clone())?,
            net_sender,
            session,
            page: View::Login,
            refreshing: None,
            spinner_index: 0,
        })
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    /// Return a read-only view of the current session.
    ///
    pub fn session_view(&self) -> Result<SessionView, SessionError> {
        self.session.view()
    }

    /// Return the view to render for the session.
    ///
    pub fn current_view(&self, session: &SessionView) -> View {
        View::resolve(self.page, session, self.refreshing.is_some())
    }

    /// Return the selected form page.
    ///
    pub fn page(&self) -> View {
        self.page
    }

    /// Switch between the login and register pages.
    ///
    pub fn toggle_page(&mut self) -> &mut Self {
        self.page = match self.page {
            View::Register => View::Login,
            _ => View::Register,
        };
        debug!("Switched to {:?} page.", self.page);
        self
    }

    pub fn set_page(&mut self, page: View) -> &mut Self {
        self.page = page;
        self
    }

    pub fn login(&self) -> &LoginPage {
        &self.login
    }

    pub fn login_mut(&mut self) -> &mut LoginPage {
        &mut self.login
    }

    pub fn register(&self) -> &RegisterPage {
        &self.register
    }

    pub fn register_mut(&mut self) -> &mut RegisterPage {
        &mut self.register
    }

    /// Ask the network thread to reload the signed-in user. The home view
    /// keeps showing the user loaded so far until the reload ends.
    ///
    pub fn refresh_user(&mut self) -> Result<(), SessionError> {
        if let Some(user) = self.session.read(|session| session.user().cloned())? {
            self.refreshing = Some(user);
        }
        self.dispatch(NetworkEvent::Me);
        Ok(())
    }

    /// Return the user shown while a reload is running.
    ///
    pub fn refreshing_user(&self) -> Option<&User> {
        self.refreshing.as_ref()
    }

    pub fn end_refresh(&mut self) -> &mut Self {
        self.refreshing = None;
        self
    }

    /// Ask the network thread to end the session. The register page is
    /// emptied so nothing from the previous account lingers.
    ///
    pub fn sign_out(&mut self) {
        self.page = View::Login;
        self.refreshing = None;
        self.register.reset();
        self.dispatch(NetworkEvent::SignOut);
    }

    fn dispatch(&self, event: NetworkEvent) {
        debug!("Queueing network event '{:?}'...", event);
        if let Err(e) = self.net_sender.send(event) {
            error!("Failed to queue network event: {}", e);
        }
    }

    /// Return the email worth remembering for the next start.
    ///
    pub fn remembered_email(&self) -> Option<String> {
        let email = self.login.value(LoginField::Email);
        if email.is_empty() {
            None
        } else {
            Some(email)
        }
    }

    pub fn spinner_index(&self) -> usize {
        self.spinner_index
    }

    /// Advance the spinner by one frame.
    ///
    pub fn advance_spinner(&mut self) -> &mut Self {
        self.spinner_index = (self.spinner_index + 1) % SPINNER_FRAME_COUNT;
        self
    }
}
