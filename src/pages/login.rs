use super::{Page, PageField};
use crate::app::NetworkEventSender;
use crate::auth::Credentials;
use crate::events::network::Event as NetworkEvent;
use crate::form::{FieldRules, Form, SubmitError, Validations};
use log::*;

/// Specifying login form fields.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LoginField {
    Email,
    Password,
}

impl PageField for LoginField {
    const ALL: &'static [Self] = &[LoginField::Email, LoginField::Password];

    fn label(&self) -> &'static str {
        match self {
            LoginField::Email => "Email",
            LoginField::Password => "Password",
        }
    }

    fn is_secret(&self) -> bool {
        matches!(self, LoginField::Password)
    }
}

pub type LoginPage = Page<LoginField>;

/// Build the login page. The email field starts out with the last email
/// used, if any. Submitting sends the credentials to the network thread.
///
pub fn login_page(net_sender: NetworkEventSender, last_email: Option<String>) -> LoginPage {
    let validations = Validations::new()
        .field(
            LoginField::Email,
            FieldRules::new().required("Please enter your email"),
        )
        .field(
            LoginField::Password,
            FieldRules::new().required("Please enter your password"),
        );

    let initial_values = last_email.map(|email| (LoginField::Email, email));
    let form = Form::initialize(initial_values, Some(validations), None).on_submit(
        move |values| {
            let credentials = Credentials {
                email: values.get(&LoginField::Email).cloned().unwrap_or_default(),
                password: values
                    .get(&LoginField::Password)
                    .cloned()
                    .unwrap_or_default(),
            };
            net_sender
                .send(NetworkEvent::SignIn(credentials))
                .map_err(|e| {
                    error!("Failed to queue sign-in request: {}", e);
                    SubmitError("Sign-in is unavailable, restart the application".to_string())
                })
        },
    );

    let mut page = Page::new("Sign in", form);
    if !page.value(LoginField::Email).is_empty() {
        page.next_field();
    }
    page
}
