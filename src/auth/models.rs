//! Wire shapes of auth service responses.

use serde::Deserialize;
use serde_json::Value;

/// Response payload, either enveloped in `data` or bare.
///
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum Payload<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> Payload<T> {
    pub(crate) fn into_inner(self) -> T {
        match self {
            Payload::Wrapped { data } => data,
            Payload::Bare(data) => data,
        }
    }
}

/// Pull a human-readable message out of an error body. The service answers
/// with `{"data": {"error": ..}}`, `{"error": ..}` or `{"message": ..}`
/// depending on the handler.
///
pub(crate) fn error_message(body: &Value) -> Option<String> {
    let candidates = [
        body.pointer("/data/error"),
        body.pointer("/error"),
        body.pointer("/message"),
        body.pointer("/data/message"),
    ];
    candidates
        .into_iter()
        .flatten()
        .find_map(|value| match value {
            Value::String(text) if !text.is_empty() => Some(text.clone()),
            _ => None,
        })
}
