//! Inventory directory commands.

use serde::Serialize;
use serde_json::{Value, json};

use super::{MutationReport, Output, fetch_list, guarded_remove, merge_fields};
use crate::engine::{Query, filter};
use crate::models::InventoryItem;
use crate::roster::Mutator;
use crate::source::Bridge;
use crate::Result;

const LOAD_FALLBACK: &str = "Failed to load inventory";

#[derive(Debug, Serialize)]
pub struct InventoryList {
    pub total: usize,
    pub matched: usize,
    pub items: Vec<InventoryItem>,
}

impl Output for InventoryList {
    fn to_human(&self) -> String {
        let mut lines = vec![format!(
            "Inventory - {} of {} items shown",
            self.matched, self.total
        )];
        for item in &self.items {
            lines.push(format!(
                "  [{}] {} x{}  {}  {}",
                item.item_id,
                item.item_name,
                item.quantity,
                item.category.as_deref().unwrap_or("Uncategorized"),
                item.location.as_deref().unwrap_or("N/A"),
            ));
        }
        lines.join("\n")
    }
}

pub fn list(
    bridge: &dyn Bridge,
    search: Option<&str>,
    category: Option<&str>,
) -> Result<InventoryList> {
    let store = fetch_list::<InventoryItem>(bridge, "getAllInventory", LOAD_FALLBACK)?;

    let mut query = Query::new().search(search.unwrap_or_default());
    if let Some(category) = category {
        query = query.facet("category", category);
    }
    let matched = filter(store.records(), &query);

    Ok(InventoryList {
        total: store.len(),
        matched: matched.len(),
        items: matched.into_iter().cloned().collect(),
    })
}

pub fn create(
    bridge: &dyn Bridge,
    name: String,
    category: Option<String>,
    quantity: i64,
    location: Option<String>,
    notes: Option<String>,
) -> Result<MutationReport> {
    let mut payload = json!({
        "ItemName": name,
        "Quantity": quantity,
    });
    merge_fields(
        &mut payload,
        vec![
            ("Category", category.map(Value::from)),
            ("Location", location.map(Value::from)),
            ("Notes", notes.map(Value::from)),
        ],
    );

    let record =
        Mutator::new(bridge).invoke("createInventoryItem", payload, "Failed to add item")?;
    let reloaded = fetch_list::<InventoryItem>(bridge, "getAllInventory", LOAD_FALLBACK)?;
    let id = record.get("ItemID").and_then(Value::as_i64).unwrap_or(0);
    Ok(MutationReport {
        message: format!("Added inventory item #{}", id),
        record: Some(record),
        total_after_reload: reloaded.len(),
    })
}

#[allow(clippy::too_many_arguments)]
pub fn update(
    bridge: &dyn Bridge,
    item_id: i64,
    name: Option<String>,
    category: Option<String>,
    quantity: Option<i64>,
    location: Option<String>,
    notes: Option<String>,
) -> Result<MutationReport> {
    let store = fetch_list::<InventoryItem>(bridge, "getAllInventory", LOAD_FALLBACK)?;
    let mut record = serde_json::to_value(store.get(item_id)?)?;
    merge_fields(
        &mut record,
        vec![
            ("ItemName", name.map(Value::from)),
            ("Category", category.map(Value::from)),
            ("Quantity", quantity.map(Value::from)),
            ("Location", location.map(Value::from)),
            ("Notes", notes.map(Value::from)),
        ],
    );

    let updated =
        Mutator::new(bridge).invoke("updateInventoryItem", record, "Failed to update item")?;
    let reloaded = fetch_list::<InventoryItem>(bridge, "getAllInventory", LOAD_FALLBACK)?;
    Ok(MutationReport {
        message: format!("Updated inventory item #{}", item_id),
        record: Some(updated),
        total_after_reload: reloaded.len(),
    })
}

pub fn delete(bridge: &dyn Bridge, item_id: i64, yes: bool) -> Result<MutationReport> {
    let store = fetch_list::<InventoryItem>(bridge, "getAllInventory", LOAD_FALLBACK)?;
    let name = store.get(item_id)?.item_name.clone();

    guarded_remove(
        bridge,
        "deleteInventoryItem",
        json!(item_id),
        item_id,
        yes,
        &format!("{} from inventory", name),
        "Failed to delete item",
    )?;
    let reloaded = fetch_list::<InventoryItem>(bridge, "getAllInventory", LOAD_FALLBACK)?;
    Ok(MutationReport {
        message: format!("Removed {} from inventory", name),
        record: None,
        total_after_reload: reloaded.len(),
    })
}
