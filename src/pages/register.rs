use super::{Page, PageField};
use crate::app::NetworkEventSender;
use crate::auth::Registration;
use crate::events::network::Event as NetworkEvent;
use crate::form::{FieldRules, Form, FormError, SubmitError, Validations};
use log::*;

const EMAIL_PATTERN: &str = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";
const MIN_PASSWORD_LENGTH: usize = 8;

/// Specifying registration form fields.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RegisterField {
    FirstName,
    LastName,
    Email,
    Password,
}

impl PageField for RegisterField {
    const ALL: &'static [Self] = &[
        RegisterField::FirstName,
        RegisterField::LastName,
        RegisterField::Email,
        RegisterField::Password,
    ];

    fn label(&self) -> &'static str {
        match self {
            RegisterField::FirstName => "First name",
            RegisterField::LastName => "Last name",
            RegisterField::Email => "Email",
            RegisterField::Password => "Password",
        }
    }

    fn is_secret(&self) -> bool {
        matches!(self, RegisterField::Password)
    }

    fn sanitize(&self, raw: &str) -> String {
        match self {
            RegisterField::Email => raw.trim().to_string(),
            _ => raw.to_string(),
        }
    }
}

pub type RegisterPage = Page<RegisterField>;

/// Build the registration page. Submitting sends the new account details to
/// the network thread.
///
pub fn register_page(net_sender: NetworkEventSender) -> Result<RegisterPage, FormError> {
    let validations = Validations::new()
        .field(
            RegisterField::FirstName,
            FieldRules::new().required("Please enter your first name"),
        )
        .field(
            RegisterField::LastName,
            FieldRules::new().required("Please enter your last name"),
        )
        .field(
            RegisterField::Email,
            FieldRules::new()
                .required("Please enter your email")
                .pattern(EMAIL_PATTERN, "Please enter a valid email")?,
        )
        .field(
            RegisterField::Password,
            FieldRules::new()
                .required("Please enter a password")
                .custom(
                    |value: &String| value.chars().count() >= MIN_PASSWORD_LENGTH,
                    format!(
                        "Password must be at least {} characters",
                        MIN_PASSWORD_LENGTH
                    ),
                ),
        );

    let form = Form::new([]).with_validations(validations).on_submit(move |values| {
        let field = |key: RegisterField| values.get(&key).cloned().unwrap_or_default();
        let registration = Registration {
            first_name: field(RegisterField::FirstName).trim().to_string(),
            last_name: field(RegisterField::LastName).trim().to_string(),
            email: field(RegisterField::Email),
            password: field(RegisterField::Password),
        };
        net_sender
            .send(NetworkEvent::Register(registration))
            .map_err(|e| {
                error!("Failed to queue registration request: {}", e);
                SubmitError("Registration is unavailable, restart the application".to_string())
            })
    });

    Ok(Page::new("Create account", form))
}
