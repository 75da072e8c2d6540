use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Used when a chat request arrives without `input`.
pub const DEFAULT_INPUT: &str = "Hello";

/// A chat request. `input` is kept as raw JSON and relayed unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub input: Option<Value>,
}

impl ChatRequest {
    pub fn new(input: impl Into<Value>) -> Self {
        Self {
            input: Some(input.into()),
        }
    }

    /// Builds a request from a raw HTTP body.
    ///
    /// Only a JSON-typed, non-blank body is parsed. Anything else is treated
    /// as a request without `input`. A body that is JSON but not an object
    /// carries no `input` either.
    pub fn from_body(is_json: bool, body: &[u8]) -> serde_json::Result<Self> {
        if !is_json || body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }

        let value: Value = serde_json::from_slice(body)?;
        Ok(Self {
            input: value.get("input").filter(|v| !v.is_null()).cloned(),
        })
    }

    pub fn input_or_default(&self) -> Value {
        match &self.input {
            Some(Value::Null) | None => Value::from(DEFAULT_INPUT),
            Some(input) => input.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub reply: String,
}
