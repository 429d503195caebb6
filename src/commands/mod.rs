//! Command implementations for the Greenroom CLI.
//!
//! Each command fetches the stores it needs through the bridge, runs the
//! aggregation engine over them, and returns a typed report that prints
//! as JSON or human-readable text. Commands are organized by directory
//! page:
//! - `dashboard` - headline stats and enrollment fill
//! - `personnel`, `students`, `cast`, `crew`, `bartenders` - people views
//! - `classes` - offerings, rosters, and enrollment management
//! - `shows`, `inventory` - remaining CRUD directories
//! - `schedule` - calendar built from shows and class sessions

pub mod bartenders;
pub mod cast;
pub mod classes;
pub mod crew;
pub mod dashboard;
pub mod inventory;
pub mod personnel;
pub mod schedule;
pub mod shows;
pub mod students;

use serde::Serialize;
use serde_json::Value;

use crate::models::Record;
use crate::roster::{BatchReport, Mutator};
use crate::session::EntitySession;
use crate::source::{Bridge, unwrap_list};
use crate::store::RecordStore;
use crate::{Error, Result};

/// Command results that can be serialized to JSON or formatted for humans.
pub trait Output: Serialize {
    /// Serialize to JSON string.
    fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format for human-readable output.
    fn to_human(&self) -> String;
}

/// Result of one create/update/delete/status-change, including the store
/// size after the post-mutation reload.
#[derive(Debug, Serialize)]
pub struct MutationReport {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<Value>,
    pub total_after_reload: usize,
}

impl Output for MutationReport {
    fn to_human(&self) -> String {
        self.message.clone()
    }
}

/// Result of a batch add: independent tallies plus the single reload.
#[derive(Debug, Serialize)]
pub struct BatchOutcome {
    pub succeeded: usize,
    pub failed: usize,
    pub total_after_reload: usize,
    pub message: String,
}

impl BatchOutcome {
    pub(crate) fn new(report: BatchReport, total_after_reload: usize, noun: &str) -> Self {
        Self {
            succeeded: report.succeeded,
            failed: report.failed,
            total_after_reload,
            message: report.summary(noun),
        }
    }
}

impl Output for BatchOutcome {
    fn to_human(&self) -> String {
        self.message.clone()
    }
}

/// Fetch one list operation into a typed record store, driving the
/// session load cycle. On failure the (fresh) store is abandoned and the
/// error carries the backend message or `fallback`.
pub(crate) fn fetch_list<R: Record>(
    bridge: &dyn Bridge,
    operation: &str,
    fallback: &str,
) -> Result<RecordStore<R>> {
    let mut session = EntitySession::new();
    session.begin_load()?;

    let rows = match bridge
        .call(operation, Value::Null)
        .and_then(|envelope| unwrap_list(envelope, fallback))
    {
        Ok(rows) => rows,
        Err(error) => {
            session.load_failed(error.to_string());
            return Err(error);
        }
    };

    let mut store = RecordStore::new();
    match store.load(rows) {
        Ok(()) => {
            session.load_succeeded();
            Ok(store)
        }
        Err(error) => {
            session.load_failed(error.to_string());
            Err(error)
        }
    }
}

/// Run a destructive mutation behind the confirmation step.
///
/// Without `yes` the session stops at `ConfirmingDelete` and the command
/// refuses; the flag is the second, separate user action.
pub(crate) fn guarded_remove(
    bridge: &dyn Bridge,
    operation: &str,
    args: Value,
    target_id: i64,
    yes: bool,
    what: &str,
    fallback: &str,
) -> Result<Value> {
    let mut session = EntitySession::new();
    session.view(target_id)?;
    session.confirm_delete(target_id)?;
    if !yes {
        return Err(Error::ConfirmationRequired(format!("Remove {}", what)));
    }
    if !session.try_begin_mutation() {
        return Err(Error::InvalidInput("operation already in flight".to_string()));
    }
    let result = Mutator::new(bridge).invoke(operation, args, fallback);
    session.finish_mutation();
    result
}

/// A 10-cell text bar for a clamped [0, 100] width.
pub(crate) fn text_bar(width: u32) -> String {
    let filled = (width.min(100) as usize + 5) / 10;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(10 - filled))
}

/// Merge optional field updates into a record's JSON form.
pub(crate) fn merge_fields(record: &mut Value, updates: Vec<(&str, Option<Value>)>) {
    if let Value::Object(map) = record {
        for (key, update) in updates {
            if let Some(value) = update {
                map.insert(key.to_string(), value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::MockBridge;
    use serde_json::json;

    #[test]
    fn test_text_bar_widths() {
        assert_eq!(text_bar(0), "[----------]");
        assert_eq!(text_bar(67), "[#######---]");
        assert_eq!(text_bar(100), "[##########]");
        assert_eq!(text_bar(117), "[##########]");
    }

    #[test]
    fn test_guarded_remove_requires_yes() {
        let bridge = MockBridge::new();
        let err = guarded_remove(
            &bridge,
            "deleteInventoryItem",
            json!(1),
            1,
            false,
            "inventory item 1",
            "Failed to delete inventory item",
        )
        .unwrap_err();
        assert!(matches!(err, Error::ConfirmationRequired(_)));

        // Refusal means the record is still there
        let store =
            fetch_list::<crate::models::InventoryItem>(&bridge, "getAllInventory", "failed")
                .unwrap();
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_guarded_remove_with_yes_deletes() {
        let bridge = MockBridge::new();
        guarded_remove(
            &bridge,
            "deleteInventoryItem",
            json!(1),
            1,
            true,
            "inventory item 1",
            "Failed to delete inventory item",
        )
        .unwrap();

        let store =
            fetch_list::<crate::models::InventoryItem>(&bridge, "getAllInventory", "failed")
                .unwrap();
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_merge_fields_keeps_unset() {
        let mut record = json!({"ItemID": 1, "ItemName": "Mic", "Quantity": 5});
        merge_fields(
            &mut record,
            vec![
                ("ItemName", Some(json!("Handheld Mic"))),
                ("Quantity", None),
            ],
        );
        assert_eq!(record["ItemName"], "Handheld Mic");
        assert_eq!(record["Quantity"], 5);
    }
}
