//! Action types
//!
//! Every action carries a string discriminator. The store never looks past it;
//! reducers and middleware decide what the discriminator and payload mean.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::Debug;

/// Anything that can be dispatched through a [`crate::Store`]
pub trait Action: Debug + Send + 'static {
    /// The discriminator reducers match on (e.g. `"counter/increment"`)
    fn action_type(&self) -> &str;
}

/// A dynamically typed action: a `type` tag plus an optional JSON payload
///
/// Serializes as `{"type": "...", "payload": ...}`. An absent `payload` key
/// is `None`; an explicit `"payload": null` is `Some(Value::Null)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnyAction {
    #[serde(rename = "type")]
    pub kind: String,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present"
    )]
    pub payload: Option<serde_json::Value>,
}

impl AnyAction {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            payload: None,
        }
    }

    pub fn with_payload(kind: impl Into<String>, payload: impl Into<serde_json::Value>) -> Self {
        Self {
            kind: kind.into(),
            payload: Some(payload.into()),
        }
    }

    /// Payload as an integer, if present and integral
    pub fn payload_i64(&self) -> Option<i64> {
        self.payload.as_ref().and_then(serde_json::Value::as_i64)
    }
}

fn present<'de, D>(deserializer: D) -> Result<Option<serde_json::Value>, D::Error>
where
    D: Deserializer<'de>,
{
    serde_json::Value::deserialize(deserializer).map(Some)
}

impl Action for AnyAction {
    fn action_type(&self) -> &str {
        &self.kind
    }
}
