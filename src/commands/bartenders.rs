//! Bartender roster commands.

use serde::Serialize;
use serde_json::json;

use super::{BatchOutcome, MutationReport, Output, fetch_list, guarded_remove};
use crate::engine::{Query, filter};
use crate::models::{Bartender, value::display_date};
use crate::roster::Mutator;
use crate::source::Bridge;
use crate::Result;

const LOAD_FALLBACK: &str = "Failed to load bartenders";

#[derive(Debug, Serialize)]
pub struct BartenderList {
    pub total: usize,
    pub matched: usize,
    pub active: usize,
    pub trained: usize,
    pub bartenders: Vec<Bartender>,
}

impl Output for BartenderList {
    fn to_human(&self) -> String {
        let mut lines = vec![
            format!(
                "Bartenders - {} of {} shown",
                self.matched, self.total
            ),
            format!("  {} active | {} trained", self.active, self.trained),
        ];
        for bartender in &self.bartenders {
            let mut badges = Vec::new();
            if bartender.trained {
                badges.push("Trained");
            }
            if bartender.active {
                badges.push("Active");
            }
            lines.push(format!(
                "  [{}] {}  {} shifts, last {}  {}",
                bartender.bartender_id,
                bartender.full_name(),
                bartender.shift_count,
                display_date(bartender.last_shift_date.as_deref(), "N/A"),
                badges.join(", "),
            ));
        }
        lines.join("\n")
    }
}

/// List the bar roster. The active/trained tallies rely on the
/// normalized boolean columns, counted over the whole store.
pub fn list(bridge: &dyn Bridge, search: Option<&str>) -> Result<BartenderList> {
    let store = fetch_list::<Bartender>(bridge, "getBartendersWithDetails", LOAD_FALLBACK)?;
    let active = store.records().iter().filter(|b| b.active).count();
    let trained = store.records().iter().filter(|b| b.trained).count();

    let query = Query::new().search(search.unwrap_or_default());
    let matched = filter(store.records(), &query);

    Ok(BartenderList {
        total: store.len(),
        matched: matched.len(),
        active,
        trained,
        bartenders: matched.into_iter().cloned().collect(),
    })
}

/// Add personnel to the bar roster, sequentially, then reload once.
pub fn add(bridge: &dyn Bridge, person_ids: Vec<i64>, trained: bool) -> Result<BatchOutcome> {
    let mutator = Mutator::new(bridge);
    let items = person_ids
        .into_iter()
        .map(|id| json!({"personnelId": id, "trained": trained, "status": "Active"}))
        .collect();
    let report = mutator.batch("addPersonAsBartender", items, "Failed to add bartender");

    let reloaded = fetch_list::<Bartender>(bridge, "getBartendersWithDetails", LOAD_FALLBACK)?;
    Ok(BatchOutcome::new(report, reloaded.len(), "bartender"))
}

pub fn remove(bridge: &dyn Bridge, bartender_id: i64, yes: bool) -> Result<MutationReport> {
    let store = fetch_list::<Bartender>(bridge, "getBartendersWithDetails", LOAD_FALLBACK)?;
    let name = store.get(bartender_id)?.full_name();

    guarded_remove(
        bridge,
        "removeBartender",
        json!(bartender_id),
        bartender_id,
        yes,
        &format!("{} from the bartenders roster", name),
        "Failed to remove bartender",
    )?;
    let reloaded = fetch_list::<Bartender>(bridge, "getBartendersWithDetails", LOAD_FALLBACK)?;
    Ok(MutationReport {
        message: format!("{} removed from bartenders.", name),
        record: None,
        total_after_reload: reloaded.len(),
    })
}
