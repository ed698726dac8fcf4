//! Field value abstraction used by validation rules.

use std::borrow::Cow;

/// A value a form field can hold.
///
/// `Default` supplies the zero value read for fields that were never set.
/// `is_blank` decides whether a required rule fails, and `as_text` is what a
/// pattern rule is matched against.
pub trait FieldValue: Clone + Default + Send + Sync + 'static {
    fn is_blank(&self) -> bool;
    fn as_text(&self) -> Cow<'_, str>;
}

impl FieldValue for String {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }

    fn as_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

impl FieldValue for bool {
    fn is_blank(&self) -> bool {
        !*self
    }

    fn as_text(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }
}

impl FieldValue for i64 {
    fn is_blank(&self) -> bool {
        *self == 0
    }

    fn as_text(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }
}

impl FieldValue for u32 {
    fn is_blank(&self) -> bool {
        *self == 0
    }

    fn as_text(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }
}

impl<T: FieldValue> FieldValue for Option<T> {
    fn is_blank(&self) -> bool {
        match self {
            Some(inner) => inner.is_blank(),
            None => true,
        }
    }

    fn as_text(&self) -> Cow<'_, str> {
        match self {
            Some(inner) => inner.as_text(),
            None => Cow::Borrowed(""),
        }
    }
}
