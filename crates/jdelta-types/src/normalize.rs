//! Input normalization: turn caller input into a [`Value`].

use tracing::debug;

use crate::value::Value;

/// Caller input to the diff engine.
#[derive(Clone, Debug, PartialEq)]
pub enum Input {
    /// An already-structured value, used as is.
    Value(Value),
    /// Serialized document text that still needs parsing.
    Text(String),
}

impl From<Value> for Input {
    fn from(value: Value) -> Self {
        Input::Value(value)
    }
}

impl From<serde_json::Value> for Input {
    fn from(value: serde_json::Value) -> Self {
        Input::Value(value.into())
    }
}

impl From<String> for Input {
    fn from(text: String) -> Self {
        Input::Text(text)
    }
}

impl From<&str> for Input {
    fn from(text: &str) -> Self {
        Input::Text(text.to_owned())
    }
}

/// Normalize caller input into a [`Value`].
///
/// Structured input is returned unchanged. Text is parsed as a JSON
/// document; text that does not parse is kept as a `String` leaf so it can
/// still be compared. This never fails.
pub fn normalize(input: impl Into<Input>) -> Value {
    match input.into() {
        Input::Value(value) => value,
        Input::Text(text) => match text.parse::<Value>() {
            Ok(value) => value,
            Err(err) => {
                debug!(error = %err, len = text.len(), "input is not a document, comparing as text");
                Value::String(text)
            }
        },
    }
}
