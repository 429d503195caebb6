//! The remote bridge boundary.
//!
//! Every load and mutation goes through a [`Bridge`]: a named remote
//! operation that always resolves to an [`Envelope`] - `success:true`
//! plus a payload, or `success:false` plus a human-readable error. Two
//! implementations exist:
//! - [`HttpBridge`] - POSTs operations to the configured endpoint
//! - [`MockBridge`] - in-memory dataset for development and tests
//!
//! The backend nests some list payloads one level deep (`data.data`
//! instead of `data`); [`unwrap_list`] normalizes both shapes in one
//! place so no caller special-cases the quirk.

pub mod http;
pub mod mock;

pub use http::HttpBridge;
pub use mock::MockBridge;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{Error, Result};

/// A named remote operation capability.
///
/// Implementations must resolve every call: transport problems surface as
/// `Err`, backend-reported problems as an envelope with `success:false`.
pub trait Bridge {
    /// Invoke a named operation with JSON arguments.
    fn call(&self, operation: &str, args: Value) -> Result<Envelope>;

    /// Where this bridge sends operations (for display purposes).
    fn location(&self) -> String;

    /// The bridge kind name.
    fn kind(&self) -> &'static str;
}

/// The response contract shared by every remote operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope {
    pub success: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Envelope {
    pub fn ok(data: Value) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Unwrap a list payload, normalizing both response shapes.
///
/// Accepts `data: [...]` and the nested `data: { data: [...] }` variant.
/// A failure envelope, an inner `error` field, or a payload that is not a
/// list in either shape all surface as [`Error::Backend`] carrying the
/// backend message when present, else `fallback`.
pub fn unwrap_list(envelope: Envelope, fallback: &str) -> Result<Vec<Value>> {
    let data = unwrap_value(envelope, fallback)?;
    match data {
        Value::Array(rows) => Ok(rows),
        Value::Object(mut obj) => {
            if let Some(Value::String(message)) = obj.get("error") {
                return Err(Error::Backend(message.clone()));
            }
            match obj.remove("data") {
                Some(Value::Array(rows)) => Ok(rows),
                _ => Err(Error::Backend(fallback.to_string())),
            }
        }
        _ => Err(Error::Backend(fallback.to_string())),
    }
}

/// Unwrap a non-list payload, surfacing failures as [`Error::Backend`].
pub fn unwrap_value(envelope: Envelope, fallback: &str) -> Result<Value> {
    if !envelope.success {
        return Err(Error::Backend(
            envelope.error.unwrap_or_else(|| fallback.to_string()),
        ));
    }
    envelope
        .data
        .ok_or_else(|| Error::Backend(fallback.to_string()))
}
