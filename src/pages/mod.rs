//! Form pages.
//!
//! A page pairs a form engine with the field that has keyboard focus and a
//! banner for transport failures. The login and register pages only differ
//! in their fields, rules and the network event they submit.

mod login;
mod register;

pub use login::{login_page, LoginField, LoginPage};
pub use register::{register_page, RegisterField, RegisterPage};

use crate::form::{FieldKey, Form, SubmitOutcome};
use log::*;

/// A field shown on a page.
///
pub trait PageField: FieldKey {
    /// Every field of the page in display order.
    const ALL: &'static [Self];

    fn label(&self) -> &'static str;

    /// Whether the value is masked when rendered.
    fn is_secret(&self) -> bool {
        false
    }

    /// Transform applied to raw input before it is stored.
    fn sanitize(&self, raw: &str) -> String {
        raw.to_string()
    }
}

/// Form page state.
///
pub struct Page<F> {
    title: &'static str,
    form: Form<F>,
    focus: usize,
    banner: Option<String>,
}

impl<F: PageField> Page<F> {
    pub fn new(title: &'static str, form: Form<F>) -> Self {
        Page {
            title,
            form,
            focus: 0,
            banner: None,
        }
    }

    pub fn title(&self) -> &'static str {
        self.title
    }

    pub fn form(&self) -> &Form<F> {
        &self.form
    }

    pub fn focus(&self) -> F {
        F::ALL[self.focus]
    }

    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.form.is_submitting()
    }

    pub fn value(&self, field: F) -> String {
        self.form.value(field)
    }

    pub fn next_field(&mut self) {
        self.focus = (self.focus + 1) % F::ALL.len();
    }

    pub fn previous_field(&mut self) {
        self.focus = (self.focus + F::ALL.len() - 1) % F::ALL.len();
    }

    /// Append a character to the focused field.
    ///
    pub fn push_char(&mut self, c: char) {
        let field = self.focus();
        let mut text = self.form.value(field);
        text.push(c);
        self.change(field, &text);
    }

    /// Remove the last character of the focused field.
    ///
    pub fn pop_char(&mut self) {
        let field = self.focus();
        let mut text = self.form.value(field);
        text.pop();
        self.change(field, &text);
    }

    fn change(&mut self, field: F, raw: &str) {
        self.form
            .handle_change_with(field, move |raw| field.sanitize(raw))(raw);
    }

    /// Submit the form. Any banner from a previous attempt is cleared once
    /// the form is actually sent. A submission that could not be sent is
    /// shown as a banner.
    ///
    pub fn submit(&mut self) -> SubmitOutcome {
        let outcome = self.form.handle_submit();
        match &outcome {
            SubmitOutcome::Submitted => {
                info!("Submitting {} form...", self.title.to_lowercase());
                self.banner = None;
            }
            SubmitOutcome::Rejected => {
                // Jump to the first field that needs attention
                if let Some(index) = F::ALL
                    .iter()
                    .position(|field| self.form.error(*field).is_some())
                {
                    self.focus = index;
                }
            }
            SubmitOutcome::InFlight => {
                debug!("{} form already submitting.", self.title);
            }
            SubmitOutcome::Failed(message) => {
                self.banner = Some(message.clone());
            }
        }
        outcome
    }

    /// Finish a successful submission. Secret fields are cleared so they do
    /// not linger after sign-in.
    ///
    pub fn complete(&mut self) {
        self.form.finish_submit();
        self.banner = None;
        for field in F::ALL.iter().filter(|field| field.is_secret()) {
            self.form.set_value(*field, String::new());
        }
        self.focus = 0;
    }

    /// Finish a failed submission, showing the failure as a banner.
    ///
    pub fn fail(&mut self, message: impl Into<String>) {
        self.form.finish_submit();
        self.banner = Some(message.into());
    }

    /// Empty every field and forget errors and the banner.
    ///
    pub fn reset(&mut self) {
        self.form.reset();
        self.banner = None;
        self.focus = 0;
    }
}
