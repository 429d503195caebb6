//! Write-side operations against the bridge.
//!
//! Mutations never merge their result into a store; the caller reloads
//! the affected store(s) after success. Batch adds run sequentially, one
//! completed call at a time, so the success/failure tally stays
//! consistent without any shared-counter machinery.

use serde::Serialize;
use serde_json::Value;

use crate::source::{Bridge, unwrap_value};
use crate::Result;

/// Issues create/update/delete/status-change requests.
pub struct Mutator<'a> {
    bridge: &'a dyn Bridge,
}

impl<'a> Mutator<'a> {
    pub fn new(bridge: &'a dyn Bridge) -> Self {
        Self { bridge }
    }

    /// Invoke one mutation. Backend failures surface the backend message
    /// when present, else `fallback`.
    pub fn invoke(&self, operation: &str, args: Value, fallback: &str) -> Result<Value> {
        let envelope = self.bridge.call(operation, args)?;
        unwrap_value(envelope, fallback)
    }

    /// Run one operation per item, sequentially and independently.
    ///
    /// Each item's failure is tallied, never escalated: partial success
    /// is not a failure and partial failure is not a success. The caller
    /// reloads the affected store exactly once afterward.
    pub fn batch(&self, operation: &str, items: Vec<Value>, fallback: &str) -> BatchReport {
        let mut report = BatchReport::default();
        for item in items {
            match self.invoke(operation, item, fallback) {
                Ok(_) => report.succeeded += 1,
                Err(error) => {
                    tracing::debug!(operation, %error, "batch item failed");
                    report.failed += 1;
                }
            }
        }
        report
    }
}

/// Separate success/failure tallies for one batch operation.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct BatchReport {
    pub succeeded: usize,
    pub failed: usize,
}

impl BatchReport {
    /// Human summary, e.g. "3 crew members added. 2 failed to add."
    pub fn summary(&self, noun: &str) -> String {
        let mut parts = Vec::new();
        if self.succeeded > 0 {
            parts.push(format!(
                "{} {}{} added.",
                self.succeeded,
                noun,
                if self.succeeded == 1 { "" } else { "s" }
            ));
        }
        if self.failed > 0 {
            parts.push(format!(
                "{} failed to add.",
                self.failed
            ));
        }
        if parts.is_empty() {
            parts.push("Nothing to add.".to_string());
        }
        parts.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::Envelope;
    use serde_json::json;
    use std::sync::Mutex;

    /// Stub bridge that fails for a fixed set of IDs and counts calls.
    struct FlakyBridge {
        fail_ids: Vec<i64>,
        calls: Mutex<Vec<String>>,
    }

    impl FlakyBridge {
        fn new(fail_ids: Vec<i64>) -> Self {
            Self {
                fail_ids,
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    impl Bridge for FlakyBridge {
        fn call(&self, operation: &str, args: Value) -> Result<Envelope> {
            self.calls.lock().unwrap().push(operation.to_string());
            if let Some(id) = args.as_i64() {
                if self.fail_ids.contains(&id) {
                    return Ok(Envelope::fail(format!("no such person: {}", id)));
                }
            }
            Ok(Envelope::ok(json!({"added": true})))
        }

        fn location(&self) -> String {
            "stub".to_string()
        }

        fn kind(&self) -> &'static str {
            "stub"
        }
    }

    #[test]
    fn test_batch_tallies_success_and_failure_separately() {
        let bridge = FlakyBridge::new(vec![2, 4]);
        let mutator = Mutator::new(&bridge);
        let items: Vec<Value> = (1..=5).map(|id| json!(id)).collect();

        let report = mutator.batch("addPersonAsCrewMember", items, "Failed to add crew member");
        assert_eq!(report.succeeded, 3);
        assert_eq!(report.failed, 2);

        // One call per item, nothing extra - reload is the caller's job
        let calls = bridge.calls.lock().unwrap();
        assert_eq!(calls.len(), 5);
        assert!(calls.iter().all(|op| op == "addPersonAsCrewMember"));
    }

    #[test]
    fn test_invoke_surfaces_backend_message() {
        let bridge = FlakyBridge::new(vec![7]);
        let mutator = Mutator::new(&bridge);
        let err = mutator
            .invoke("addPersonAsCrewMember", json!(7), "Failed to add crew member")
            .unwrap_err();
        assert!(err.to_string().contains("no such person: 7"));
    }

    #[test]
    fn test_batch_summary_wording() {
        let report = BatchReport { succeeded: 3, failed: 2 };
        assert_eq!(report.summary("crew member"), "3 crew members added. 2 failed to add.");

        let single = BatchReport { succeeded: 1, failed: 0 };
        assert_eq!(single.summary("bartender"), "1 bartender added.");

        let empty = BatchReport::default();
        assert_eq!(empty.summary("student"), "Nothing to add.");
    }
}
