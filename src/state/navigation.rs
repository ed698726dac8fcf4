//! Navigation-related state types.
//!
//! This module contains the views the application can show.

use crate::session::SessionView;

/// Specifying the different views.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum View {
    Login,
    Register,
    Home,
}

impl View {
    /// Resolve the view to show for the selected form page. An
    /// authenticated session always lands on the home view, and so does a
    /// session reloading the user from the home view.
    ///
    pub fn resolve(page: View, session: &SessionView, refreshing: bool) -> View {
        if session.is_authenticated || (refreshing && session.loading) {
            View::Home
        } else if page == View::Home {
            View::Login
        } else {
            page
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{AuthFailure, Session};
    use fake::{Fake, Faker};

    #[test]
    fn test_authenticated_redirects_home() {
        let session = Session::Authenticated(Faker.fake()).view();
        assert_eq!(View::resolve(View::Login, &session, false), View::Home);
        assert_eq!(View::resolve(View::Register, &session, false), View::Home);
    }

    #[test]
    fn test_unauthenticated_keeps_form_page() {
        for session in [
            Session::Anonymous,
            Session::Loading,
            Session::Errored(AuthFailure::new(Some(401), "unauthorized")),
        ] {
            let session = session.view();
            assert_eq!(View::resolve(View::Login, &session, false), View::Login);
            assert_eq!(View::resolve(View::Register, &session, false), View::Register);
            assert_eq!(View::resolve(View::Home, &session, false), View::Login);
        }
    }

    #[test]
    fn test_refresh_stays_home_while_loading() {
        let loading = Session::Loading.view();
        assert_eq!(View::resolve(View::Login, &loading, true), View::Home);

        let rejected = Session::Errored(AuthFailure::new(Some(401), "unauthorized")).view();
        assert_eq!(View::resolve(View::Login, &rejected, true), View::Login);
    }
}
