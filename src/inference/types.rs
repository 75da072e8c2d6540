use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body sent to the inference endpoint. `inputs` is usually a string but is
/// forwarded with whatever JSON type the caller sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpstreamRequest {
    pub inputs: Value,
}

impl UpstreamRequest {
    pub fn new(inputs: impl Into<Value>) -> Self {
        Self {
            inputs: inputs.into(),
        }
    }
}

/// The shapes an inference endpoint is known to answer with.
///
/// Classification follows a fixed priority: a generation list wins over a
/// top-level `generated_text`, which wins over a conversation wrapper.
/// Anything else is kept as its compact JSON text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpstreamReply {
    /// `[{"generated_text": ...}, ...]`
    Generations(String),
    /// `{"generated_text": ...}`
    Text(String),
    /// `{"conversation": {"generated_responses": [...]}}`
    Conversation(String),
    Unknown(String),
}

impl UpstreamReply {
    pub fn from_value(value: &Value) -> Self {
        if let Some(text) = present(value.pointer("/0/generated_text")) {
            return Self::Generations(text);
        }
        if let Some(text) = present(value.get("generated_text")) {
            return Self::Text(text);
        }
        if let Some(text) = present(value.pointer("/conversation/generated_responses/0")) {
            return Self::Conversation(text);
        }
        Self::Unknown(render(value))
    }

    pub fn into_text(self) -> String {
        match self {
            Self::Generations(text)
            | Self::Text(text)
            | Self::Conversation(text)
            | Self::Unknown(text) => text,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Generations(_) => "generations",
            Self::Text(_) => "text",
            Self::Conversation(_) => "conversation",
            Self::Unknown(_) => "unknown",
        }
    }
}

// JSON null counts as missing; other non-string values are rendered as JSON.
fn present(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(render(other)),
    }
}

/// Compact JSON text with whole-valued floats written as integers (`20.0` as `20`).
fn render(value: &Value) -> String {
    integral_floats(value.clone()).to_string()
}

// Largest magnitude at which every whole f64 is exact.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

fn integral_floats(value: Value) -> Value {
    match value {
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() <= MAX_SAFE_INTEGER => {
                Value::from(f as i64)
            }
            _ => Value::Number(n),
        },
        Value::Array(items) => Value::Array(items.into_iter().map(integral_floats).collect()),
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, v)| (key, integral_floats(v)))
                .collect(),
        ),
        other => other,
    }
}
