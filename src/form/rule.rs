//! Declarative field validation rules.
//!
//! Rules are plain data. A field's rules are always evaluated in the order
//! required, pattern, custom, and when several of them fail the message of the
//! last failing rule is the one reported for the field.

use super::error::FormError;
use super::value::FieldValue;
use regex::Regex;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

/// Predicate used by custom rules.
///
pub type Predicate<V> = Arc<dyn Fn(&V) -> bool + Send + Sync>;

/// A single named validation check attached to one form field.
///
#[derive(Clone)]
pub enum Rule<V> {
    Required {
        message: String,
    },
    Pattern {
        regex: Regex,
        message: String,
    },
    Custom {
        is_valid: Predicate<V>,
        message: String,
    },
}

impl<V: FieldValue> Rule<V> {
    /// Rule failing on blank values.
    ///
    pub fn required(message: impl Into<String>) -> Self {
        Rule::Required {
            message: message.into(),
        }
    }

    /// Rule failing when the value's text has no match for `source`. The
    /// source is compiled here so a bad pattern surfaces at configuration.
    ///
    pub fn pattern(source: &str, message: impl Into<String>) -> Result<Self, FormError> {
        let regex = Regex::new(source).map_err(|e| FormError::InvalidPattern {
            source_text: source.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Rule::Pattern {
            regex,
            message: message.into(),
        })
    }

    /// Rule failing when `is_valid` returns false. Cross-field checks can be
    /// expressed by capturing shared state in the closure.
    ///
    pub fn custom<P>(is_valid: P, message: impl Into<String>) -> Self
    where
        P: Fn(&V) -> bool + Send + Sync + 'static,
    {
        Rule::Custom {
            is_valid: Arc::new(is_valid),
            message: message.into(),
        }
    }

    /// Position of this rule kind in the fixed evaluation order.
    ///
    fn rank(&self) -> u8 {
        match self {
            Rule::Required { .. } => 0,
            Rule::Pattern { .. } => 1,
            Rule::Custom { .. } => 2,
        }
    }

    /// Return true if the value satisfies this rule.
    ///
    pub fn passes(&self, value: &V) -> bool {
        match self {
            Rule::Required { .. } => !value.is_blank(),
            Rule::Pattern { regex, .. } => regex.is_match(&value.as_text()),
            Rule::Custom { is_valid, .. } => is_valid(value),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Rule::Required { message }
            | Rule::Pattern { message, .. }
            | Rule::Custom { message, .. } => message,
        }
    }
}

impl<V> fmt::Debug for Rule<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::Required { message } => f
                .debug_struct("Required")
                .field("message", message)
                .finish(),
            Rule::Pattern { regex, message } => f
                .debug_struct("Pattern")
                .field("regex", &regex.as_str())
                .field("message", message)
                .finish(),
            Rule::Custom { message, .. } => f
                .debug_struct("Custom")
                .field("message", message)
                .finish_non_exhaustive(),
        }
    }
}

/// The rule set configured for one field.
///
#[derive(Clone, Debug)]
pub struct FieldRules<V> {
    rules: Vec<Rule<V>>,
}

impl<V: FieldValue> Default for FieldRules<V> {
    fn default() -> Self {
        FieldRules { rules: vec![] }
    }
}

impl<V: FieldValue> FieldRules<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rule, keeping the set sorted by evaluation order. Rules of the
    /// same kind keep their insertion order.
    ///
    pub fn with(mut self, rule: Rule<V>) -> Self {
        let position = self
            .rules
            .iter()
            .position(|existing| existing.rank() > rule.rank())
            .unwrap_or(self.rules.len());
        self.rules.insert(position, rule);
        self
    }

    pub fn required(self, message: impl Into<String>) -> Self {
        self.with(Rule::required(message))
    }

    pub fn pattern(self, source: &str, message: impl Into<String>) -> Result<Self, FormError> {
        Ok(self.with(Rule::pattern(source, message)?))
    }

    pub fn custom<P>(self, is_valid: P, message: impl Into<String>) -> Self
    where
        P: Fn(&V) -> bool + Send + Sync + 'static,
    {
        self.with(Rule::custom(is_valid, message))
    }

    pub fn rules(&self) -> &[Rule<V>] {
        &self.rules
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Evaluate every rule against the value and return the message of the
    /// last one that failed, if any.
    ///
    pub fn evaluate(&self, value: &V) -> Option<&str> {
        self.rules
            .iter()
            .filter(|rule| !rule.passes(value))
            .last()
            .map(Rule::message)
    }
}

/// Validation rules for a whole form, keyed by field.
///
#[derive(Clone, Debug)]
pub struct Validations<K, V> {
    fields: HashMap<K, FieldRules<V>>,
}

impl<K: Eq + Hash, V: FieldValue> Default for Validations<K, V> {
    fn default() -> Self {
        Validations {
            fields: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash, V: FieldValue> Validations<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a rule set to a field, replacing any set already configured.
    ///
    pub fn field(mut self, key: K, rules: FieldRules<V>) -> Self {
        self.fields.insert(key, rules);
        self
    }

    pub fn get(&self, key: &K) -> Option<&FieldRules<V>> {
        self.fields.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &FieldRules<V>)> {
        self.fields.iter()
    }

    /// Return true if no field carries any rule.
    ///
    pub fn is_empty(&self) -> bool {
        self.fields.values().all(FieldRules::is_empty)
    }
}
