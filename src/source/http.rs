//! Live bridge: POSTs named operations to the backend endpoint.

use std::time::Instant;

use serde_json::Value;

use super::{Bridge, Envelope};
use crate::{Error, Result};

/// Blocking HTTP bridge. One request per operation:
/// `POST <endpoint>` with body `{"operation": ..., "args": ...}`.
pub struct HttpBridge {
    endpoint: String,
    agent: ureq::Agent,
}

impl HttpBridge {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            agent: ureq::agent(),
        }
    }
}

impl Bridge for HttpBridge {
    fn call(&self, operation: &str, args: Value) -> Result<Envelope> {
        let started = Instant::now();
        let response = self
            .agent
            .post(&self.endpoint)
            .send_json(serde_json::json!({
                "operation": operation,
                "args": args,
            }))
            .map_err(|e| Error::Http(Box::new(e)))?;
        let envelope: Envelope = response.into_json()?;
        tracing::debug!(
            operation,
            success = envelope.success,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "bridge call"
        );
        Ok(envelope)
    }

    fn location(&self) -> String {
        self.endpoint.clone()
    }

    fn kind(&self) -> &'static str {
        "live"
    }
}
