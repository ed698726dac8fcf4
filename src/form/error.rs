//! Form configuration error types.

/// Errors raised while configuring a form. Validation failures are never
/// reported through this type; they live in the form's error map.
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    /// Pattern rule source failed to compile
    #[error("Invalid pattern '{source_text}': {reason}")]
    InvalidPattern { source_text: String, reason: String },
}

/// Raised by a completion callback that could not pass the values on.
///
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct SubmitError(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_error_display() {
        let error = FormError::InvalidPattern {
            source_text: "([a-z".to_string(),
            reason: "unclosed group".to_string(),
        };
        let error_str = error.to_string();
        assert!(error_str.contains("Invalid pattern"));
        assert!(error_str.contains("([a-z"));
        assert!(error_str.contains("unclosed group"));
    }

    #[test]
    fn test_submit_error_display() {
        let error = SubmitError("network worker stopped".to_string());
        assert_eq!(error.to_string(), "network worker stopped");
    }
}
