//! Generic form state and validation engine.
//!
//! This module contains the reusable form engine used by every page, including:
//! - `Form`, which owns field values, the per-field error map and the submit flow
//! - Declarative validation rules (`Rule`, `FieldRules`, `Validations`)
//! - The `FieldValue` abstraction that rules evaluate against
//! - Form configuration errors

mod error;
mod rule;
mod value;

pub use error::{FormError, SubmitError};
pub use rule::{FieldRules, Predicate, Rule, Validations};
pub use value::FieldValue;

use log::*;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// Field values keyed by field.
///
pub type FormValues<K, V> = HashMap<K, V>;

/// Error messages keyed by field.
///
pub type FieldErrors<K> = HashMap<K, String>;

/// Completion callback invoked with the current values once validation passes.
/// An error means the values went nowhere and the form is not in flight.
///
pub type OnSubmit<K, V> = Box<dyn FnMut(&FormValues<K, V>) -> Result<(), SubmitError> + Send>;

/// Anything usable as a field name.
///
pub trait FieldKey: Copy + Eq + Hash + fmt::Debug + Send + Sync + 'static {}

impl<T> FieldKey for T where T: Copy + Eq + Hash + fmt::Debug + Send + Sync + 'static {}

/// Result of a submit attempt.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation passed and the completion callback ran.
    Submitted,
    /// At least one rule failed; the error map was replaced.
    Rejected,
    /// A previous submission has not finished; nothing happened.
    InFlight,
    /// Validation passed but the completion callback failed.
    Failed(String),
}

/// Owns a typed bag of field values, validates them on submit and hands them
/// to the completion callback when every rule passes.
///
pub struct Form<K, V = String> {
    values: FormValues<K, V>,
    errors: FieldErrors<K>,
    validations: Validations<K, V>,
    on_submit: Option<OnSubmit<K, V>>,
    submitting: bool,
}

impl<K: FieldKey, V: FieldValue> Form<K, V> {
    /// Return a fresh form with the given initial values, rules and
    /// completion callback. Fields absent from `initial_values` read as
    /// their zero value.
    ///
    pub fn initialize(
        initial_values: impl IntoIterator<Item = (K, V)>,
        validations: Option<Validations<K, V>>,
        on_submit: Option<OnSubmit<K, V>>,
    ) -> Self {
        Form {
            values: initial_values.into_iter().collect(),
            errors: HashMap::new(),
            validations: validations.unwrap_or_default(),
            on_submit,
            submitting: false,
        }
    }

    /// Return a form with initial values only.
    ///
    pub fn new(initial_values: impl IntoIterator<Item = (K, V)>) -> Self {
        Self::initialize(initial_values, None, None)
    }

    pub fn with_validations(mut self, validations: Validations<K, V>) -> Self {
        self.validations = validations;
        self
    }

    pub fn on_submit<F>(mut self, on_submit: F) -> Self
    where
        F: FnMut(&FormValues<K, V>) -> Result<(), SubmitError> + Send + 'static,
    {
        self.on_submit = Some(Box::new(on_submit));
        self
    }

    pub fn values(&self) -> &FormValues<K, V> {
        &self.values
    }

    /// Return the value for the field or its zero value if it was never set.
    ///
    pub fn value(&self, key: K) -> V {
        self.values.get(&key).cloned().unwrap_or_default()
    }

    pub fn errors(&self) -> &FieldErrors<K> {
        &self.errors
    }

    pub fn error(&self, key: K) -> Option<&str> {
        self.errors.get(&key).map(String::as_str)
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Return a handler bound to one field that stores the raw value as is.
    ///
    pub fn handle_change(&mut self, key: K) -> impl FnMut(&str) + '_
    where
        V: From<String>,
    {
        move |raw: &str| self.set_value(key, V::from(raw.to_owned()))
    }

    /// Return a handler bound to one field that stores the sanitized raw
    /// value.
    ///
    pub fn handle_change_with<S>(&mut self, key: K, sanitizer: S) -> impl FnMut(&str) + '_
    where
        S: Fn(&str) -> V + 'static,
    {
        move |raw: &str| self.set_value(key, sanitizer(raw))
    }

    /// Replace exactly one field's value.
    ///
    pub fn set_value(&mut self, key: K, value: V) {
        self.values.insert(key, value);
    }

    /// Evaluate every configured rule and return the resulting error map
    /// without touching form state.
    ///
    pub fn validate(&self) -> FieldErrors<K> {
        let mut errors = HashMap::new();
        for (key, rules) in self.validations.iter() {
            let value = self.values.get(key).cloned().unwrap_or_default();
            if let Some(message) = rules.evaluate(&value) {
                errors.insert(*key, message.to_string());
            }
        }
        errors
    }

    /// Validate the form and, when every rule passes, clear the errors and
    /// invoke the completion callback exactly once. A form without rules
    /// always passes. While a submission is in flight further calls are
    /// ignored until `finish_submit` is called. A failing callback leaves
    /// the form ready for another attempt.
    ///
    pub fn handle_submit(&mut self) -> SubmitOutcome {
        if self.submitting {
            debug!("Ignoring submit while a submission is in flight.");
            return SubmitOutcome::InFlight;
        }

        let errors = self.validate();
        if !errors.is_empty() {
            debug!("Form rejected with {} field error(s).", errors.len());
            self.errors = errors;
            return SubmitOutcome::Rejected;
        }

        self.errors.clear();
        if let Some(on_submit) = self.on_submit.as_mut() {
            self.submitting = true;
            if let Err(e) = on_submit(&self.values) {
                warn!("Form submission failed: {}", e);
                self.submitting = false;
                return SubmitOutcome::Failed(e.to_string());
            }
        }
        SubmitOutcome::Submitted
    }

    /// Mark the in-flight submission as finished.
    ///
    pub fn finish_submit(&mut self) {
        self.submitting = false;
    }

    /// Drop every value and error. Rules and the completion callback stay.
    ///
    pub fn reset(&mut self) {
        self.values.clear();
        self.errors.clear();
        self.submitting = false;
    }
}

impl<K: FieldKey, V: FieldValue + fmt::Debug> fmt::Debug for Form<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Form")
            .field("values", &self.values)
            .field("errors", &self.errors)
            .field("submitting", &self.submitting)
            .finish_non_exhaustive()
    }
}
