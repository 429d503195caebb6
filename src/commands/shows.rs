//! Show directory commands.

use serde::Serialize;
use serde_json::{Value, json};

use super::{MutationReport, Output, fetch_list, guarded_remove, merge_fields};
use crate::engine::{Query, filter};
use crate::models::{Show, value::display_date};
use crate::roster::Mutator;
use crate::source::Bridge;
use crate::Result;

const LOAD_FALLBACK: &str = "Failed to load shows";

#[derive(Debug, Serialize)]
pub struct ShowList {
    pub total: usize,
    pub matched: usize,
    pub shows: Vec<Show>,
}

impl Output for ShowList {
    fn to_human(&self) -> String {
        let mut lines = vec![format!("Shows - {} of {} shown", self.matched, self.total)];
        for show in &self.shows {
            lines.push(format!(
                "  [{}] {}  {}  {} {}  {}",
                show.show_id,
                show.show_type_name.as_deref().unwrap_or("Show"),
                show.venue,
                display_date(show.show_date.as_deref(), "TBD"),
                show.show_time.as_deref().unwrap_or(""),
                show.status,
            ));
        }
        lines.join("\n")
    }
}

pub fn list(
    bridge: &dyn Bridge,
    search: Option<&str>,
    status: Option<&str>,
) -> Result<ShowList> {
    let store = fetch_list::<Show>(bridge, "getAllShows", LOAD_FALLBACK)?;

    let mut query = Query::new().search(search.unwrap_or_default());
    if let Some(status) = status {
        query = query.facet("status", status);
    }
    let matched = filter(store.records(), &query);

    Ok(ShowList {
        total: store.len(),
        matched: matched.len(),
        shows: matched.into_iter().cloned().collect(),
    })
}

#[derive(Debug, Serialize)]
pub struct ShowTypeList {
    pub types: Vec<crate::models::ShowType>,
}

impl Output for ShowTypeList {
    fn to_human(&self) -> String {
        let mut lines = vec!["Show Types".to_string()];
        for show_type in &self.types {
            lines.push(format!(
                "  [{}] {}",
                show_type.show_type_id, show_type.show_type_name
            ));
        }
        lines.join("\n")
    }
}

/// The show-type lookup used when scheduling a show.
pub fn types(bridge: &dyn Bridge) -> Result<ShowTypeList> {
    let store = fetch_list::<crate::models::ShowType>(
        bridge,
        "getAllShowTypes",
        "Failed to load show types",
    )?;
    Ok(ShowTypeList {
        types: store.records().to_vec(),
    })
}

#[allow(clippy::too_many_arguments)]
pub fn create(
    bridge: &dyn Bridge,
    date: String,
    time: Option<String>,
    show_type_id: Option<i64>,
    director_id: Option<i64>,
    venue: String,
) -> Result<MutationReport> {
    let mut payload = json!({
        "ShowDate": date,
        "Venue": venue,
        "Status": "Scheduled",
    });
    merge_fields(
        &mut payload,
        vec![
            ("ShowTime", time.map(Value::from)),
            ("ShowTypeID", show_type_id.map(Value::from)),
            ("DirectorID", director_id.map(Value::from)),
        ],
    );

    let record = Mutator::new(bridge).invoke("createShow", payload, "Failed to create show")?;
    let reloaded = fetch_list::<Show>(bridge, "getAllShows", LOAD_FALLBACK)?;
    let id = record.get("ShowID").and_then(Value::as_i64).unwrap_or(0);
    Ok(MutationReport {
        message: format!("Created show #{}", id),
        record: Some(record),
        total_after_reload: reloaded.len(),
    })
}

#[allow(clippy::too_many_arguments)]
pub fn update(
    bridge: &dyn Bridge,
    show_id: i64,
    date: Option<String>,
    time: Option<String>,
    venue: Option<String>,
    status: Option<String>,
) -> Result<MutationReport> {
    let store = fetch_list::<Show>(bridge, "getAllShows", LOAD_FALLBACK)?;
    let mut record = serde_json::to_value(store.get(show_id)?)?;
    merge_fields(
        &mut record,
        vec![
            ("ShowDate", date.map(Value::from)),
            ("ShowTime", time.map(Value::from)),
            ("Venue", venue.map(Value::from)),
            ("Status", status.map(Value::from)),
        ],
    );

    let updated = Mutator::new(bridge).invoke("updateShow", record, "Failed to update show")?;
    let reloaded = fetch_list::<Show>(bridge, "getAllShows", LOAD_FALLBACK)?;
    Ok(MutationReport {
        message: format!("Updated show #{}", show_id),
        record: Some(updated),
        total_after_reload: reloaded.len(),
    })
}

pub fn delete(bridge: &dyn Bridge, show_id: i64, yes: bool) -> Result<MutationReport> {
    guarded_remove(
        bridge,
        "deleteShow",
        json!(show_id),
        show_id,
        yes,
        &format!("show {}", show_id),
        "Failed to delete show",
    )?;
    let reloaded = fetch_list::<Show>(bridge, "getAllShows", LOAD_FALLBACK)?;
    Ok(MutationReport {
        message: format!("Deleted show #{}", show_id),
        record: None,
        total_after_reload: reloaded.len(),
    })
}
