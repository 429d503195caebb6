//! In-memory record stores.
//!
//! A store owns the records of one entity kind for the duration of a
//! command. It is populated by a load that replaces the entire contents -
//! never patched in place - so a reload after any mutation re-fetches the
//! authoritative list.

use serde_json::Value;

use crate::models::Record;
use crate::{Error, Result};

/// Ordered collection of one entity kind, insertion order = load order.
#[derive(Debug)]
pub struct RecordStore<R: Record> {
    records: Vec<R>,
    loaded: bool,
}

impl<R: Record> Default for RecordStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> RecordStore<R> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            loaded: false,
        }
    }

    /// Replace the store contents wholesale from raw bridge rows.
    ///
    /// Rows deserialize into `R`; identity keys must be unique. On any
    /// error the previous contents are kept untouched - a store is never
    /// left partially populated.
    pub fn load(&mut self, rows: Vec<Value>) -> Result<()> {
        let mut incoming: Vec<R> = Vec::with_capacity(rows.len());
        for row in rows {
            incoming.push(serde_json::from_value(row)?);
        }
        for (index, record) in incoming.iter().enumerate() {
            let id = record.identity();
            if incoming[..index].iter().any(|r| r.identity() == id) {
                return Err(Error::InvalidInput(format!(
                    "Duplicate {} identity key: {}",
                    R::entity(),
                    id
                )));
            }
        }
        self.records = incoming;
        self.loaded = true;
        Ok(())
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn get(&self, id: i64) -> Result<&R> {
        self.records
            .iter()
            .find(|r| r.identity() == id)
            .ok_or_else(|| Error::NotFound(format!("{} {}", R::entity(), id)))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::InventoryItem;
    use serde_json::json;

    fn item(id: i64, name: &str) -> Value {
        json!({"ItemID": id, "ItemName": name})
    }

    #[test]
    fn test_load_replaces_wholesale() {
        let mut store: RecordStore<InventoryItem> = RecordStore::new();
        assert!(!store.is_loaded());

        store.load(vec![item(1, "Mic"), item(2, "Hat")]).unwrap();
        assert_eq!(store.len(), 2);
        assert!(store.is_loaded());

        store.load(vec![item(3, "Fog Machine")]).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.records()[0].item_id, 3);
    }

    #[test]
    fn test_duplicate_identity_rejected_and_previous_kept() {
        let mut store: RecordStore<InventoryItem> = RecordStore::new();
        store.load(vec![item(1, "Mic")]).unwrap();

        let err = store.load(vec![item(2, "Hat"), item(2, "Cane")]).unwrap_err();
        assert!(err.to_string().contains("Duplicate"));
        // Previous contents survive the failed load
        assert_eq!(store.len(), 1);
        assert_eq!(store.records()[0].item_id, 1);
    }

    #[test]
    fn test_malformed_row_keeps_previous_contents() {
        let mut store: RecordStore<InventoryItem> = RecordStore::new();
        store.load(vec![item(1, "Mic")]).unwrap();

        assert!(store.load(vec![json!("not an object")]).is_err());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_get_by_identity() {
        let mut store: RecordStore<InventoryItem> = RecordStore::new();
        store.load(vec![item(1, "Mic"), item(2, "Hat")]).unwrap();
        assert_eq!(store.get(2).unwrap().item_name, "Hat");
        assert!(store.get(9).is_err());
    }
}
