//! Crew directory commands: flat and by-duty views, roster mutations.

use std::collections::BTreeSet;

use serde::Serialize;
use serde_json::json;

use super::{BatchOutcome, MutationReport, Output, fetch_list, guarded_remove};
use crate::engine::{Query, filter, group_by};
use crate::models::CrewAssignment;
use crate::roster::Mutator;
use crate::source::Bridge;
use crate::Result;

const LOAD_FALLBACK: &str = "Failed to load crew members";

/// Headline numbers derived from the unfiltered store.
#[derive(Debug, Serialize)]
pub struct CrewStats {
    pub unique_crew: usize,
    pub duty_types: usize,
    pub shows_supported: usize,
}

fn crew_stats(records: &[CrewAssignment]) -> CrewStats {
    let unique_crew: BTreeSet<i64> = records.iter().filter_map(|m| m.personnel_id).collect();
    let duty_types: BTreeSet<&str> = records
        .iter()
        .filter_map(|m| m.duty_name.as_deref())
        .filter(|d| !d.is_empty())
        .collect();
    let shows: BTreeSet<&str> = records
        .iter()
        .filter_map(|m| m.show_name.as_deref())
        .filter(|s| !s.is_empty())
        .collect();
    CrewStats {
        unique_crew: unique_crew.len(),
        duty_types: duty_types.len(),
        shows_supported: shows.len(),
    }
}

/// Unique duty names in first-seen store order - the known-key list for
/// the by-duty view, derived from the unfiltered store.
fn duty_keys(records: &[CrewAssignment]) -> Vec<String> {
    let mut keys: Vec<String> = Vec::new();
    for member in records {
        if let Some(duty) = &member.duty_name {
            if !duty.is_empty() && !keys.contains(duty) {
                keys.push(duty.clone());
            }
        }
    }
    keys
}

#[derive(Debug, Serialize)]
pub struct CrewList {
    pub total: usize,
    pub matched: usize,
    pub stats: CrewStats,
    pub members: Vec<CrewAssignment>,
}

impl Output for CrewList {
    fn to_human(&self) -> String {
        let mut lines = vec![
            format!(
                "Crew Directory - {} of {} assignments shown",
                self.matched, self.total
            ),
            format!(
                "  {} crew members | {} duty types | {} shows supported",
                self.stats.unique_crew, self.stats.duty_types, self.stats.shows_supported
            ),
        ];
        for member in &self.members {
            lines.push(format!(
                "  [{}] {}  {}  {}",
                member.duty_id,
                member.display_name(),
                member.duty_name.as_deref().unwrap_or("Unassigned"),
                member.show_name.as_deref().unwrap_or("N/A"),
            ));
        }
        lines.join("\n")
    }
}

pub fn list(
    bridge: &dyn Bridge,
    search: Option<&str>,
    duty: Option<&str>,
) -> Result<CrewList> {
    let store = fetch_list::<CrewAssignment>(bridge, "getAllCrewMembers", LOAD_FALLBACK)?;
    let stats = crew_stats(store.records());

    let mut query = Query::new().search(search.unwrap_or_default());
    if let Some(duty) = duty {
        query = query.facet("duty", duty);
    }
    let matched = filter(store.records(), &query);

    Ok(CrewList {
        total: store.len(),
        matched: matched.len(),
        stats,
        members: matched.into_iter().cloned().collect(),
    })
}

#[derive(Debug, Serialize)]
pub struct CrewGroup {
    pub duty: String,
    pub count: usize,
    pub members: Vec<CrewAssignment>,
}

#[derive(Debug, Serialize)]
pub struct CrewGrouped {
    pub total: usize,
    pub matched: usize,
    pub groups: Vec<CrewGroup>,
}

impl Output for CrewGrouped {
    fn to_human(&self) -> String {
        let mut lines = vec![format!(
            "Crew by Duty - {} of {} assignments shown",
            self.matched, self.total
        )];
        for group in &self.groups {
            lines.push(format!(
                "  {} ({} assignment{})",
                group.duty,
                group.count,
                if group.count == 1 { "" } else { "s" }
            ));
            for member in &group.members {
                lines.push(format!(
                    "    [{}] {}  {}",
                    member.duty_id,
                    member.display_name(),
                    member.show_name.as_deref().unwrap_or("N/A"),
                ));
            }
        }
        lines.join("\n")
    }
}

/// Grouped view. Known keys come from the unfiltered store, so a duty
/// group that filters down to zero is dropped while its key stays stable
/// across filter changes.
pub fn grouped(bridge: &dyn Bridge, search: Option<&str>) -> Result<CrewGrouped> {
    let store = fetch_list::<CrewAssignment>(bridge, "getAllCrewMembers", LOAD_FALLBACK)?;
    let known = duty_keys(store.records());

    let query = Query::new().search(search.unwrap_or_default());
    let matched = filter(store.records(), &query);
    let matched_count = matched.len();

    let groups = group_by(&matched, &known, |m| m.duty_name.clone())
        .into_iter()
        .map(|group| CrewGroup {
            duty: group.key,
            count: group.members.len(),
            members: group.members.into_iter().cloned().collect(),
        })
        .collect();

    Ok(CrewGrouped {
        total: store.len(),
        matched: matched_count,
        groups,
    })
}

#[derive(Debug, Serialize)]
pub struct DutyTypeList {
    pub duties: Vec<crate::models::CrewDutyType>,
}

impl Output for DutyTypeList {
    fn to_human(&self) -> String {
        let mut lines = vec!["Crew Duty Types".to_string()];
        for duty in &self.duties {
            lines.push(format!("  [{}] {}", duty.crew_duty_type_id, duty.duty_name));
        }
        lines.join("\n")
    }
}

/// The duty-type lookup used when assigning crew.
pub fn duties(bridge: &dyn Bridge) -> Result<DutyTypeList> {
    let store = fetch_list::<crate::models::CrewDutyType>(
        bridge,
        "getAllCrewDutyTypes",
        "Failed to load crew duty types",
    )?;
    Ok(DutyTypeList {
        duties: store.records().to_vec(),
    })
}

/// Add personnel to the crew roster, one awaited call per person, then
/// reload the directory once.
pub fn add(bridge: &dyn Bridge, person_ids: Vec<i64>) -> Result<BatchOutcome> {
    let mutator = Mutator::new(bridge);
    let items = person_ids.into_iter().map(|id| json!(id)).collect();
    let report = mutator.batch("addPersonAsCrewMember", items, "Failed to add crew member");

    let reloaded = fetch_list::<CrewAssignment>(bridge, "getAllCrewMembers", LOAD_FALLBACK)?;
    Ok(BatchOutcome::new(report, reloaded.len(), "crew member"))
}

pub fn remove(bridge: &dyn Bridge, crew_member_id: i64, yes: bool) -> Result<MutationReport> {
    guarded_remove(
        bridge,
        "removeCrewMember",
        json!(crew_member_id),
        crew_member_id,
        yes,
        &format!("crew member {} from the crew directory", crew_member_id),
        "Failed to remove crew member",
    )?;
    let reloaded = fetch_list::<CrewAssignment>(bridge, "getAllCrewMembers", LOAD_FALLBACK)?;
    Ok(MutationReport {
        message: format!("Removed crew member {} from the crew directory", crew_member_id),
        record: None,
        total_after_reload: reloaded.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::UNASSIGNED;
    use crate::source::MockBridge;

    #[test]
    fn test_list_stats_from_unfiltered_store() {
        let bridge = MockBridge::new();
        let report = list(&bridge, Some("nobody-matches"), None).unwrap();
        assert_eq!(report.matched, 0);
        // Stats ignore the filter
        assert_eq!(report.stats.unique_crew, 4);
        assert_eq!(report.stats.duty_types, 2);
        assert_eq!(report.stats.shows_supported, 2);
    }

    #[test]
    fn test_duty_facet() {
        let bridge = MockBridge::new();
        let report = list(&bridge, None, Some("Lighting")).unwrap();
        assert_eq!(report.matched, 2);
        assert!(report
            .members
            .iter()
            .all(|m| m.duty_name.as_deref() == Some("Lighting")));
    }

    #[test]
    fn test_grouped_view_has_unassigned_last() {
        let bridge = MockBridge::new();
        let report = grouped(&bridge, None).unwrap();
        let keys: Vec<&str> = report.groups.iter().map(|g| g.duty.as_str()).collect();
        assert_eq!(keys, vec!["Lighting", "Sound", UNASSIGNED]);
        assert_eq!(report.groups[0].count, 2);
    }

    #[test]
    fn test_grouped_drops_empty_groups() {
        let bridge = MockBridge::new();
        let report = grouped(&bridge, Some("jane")).unwrap();
        let keys: Vec<&str> = report.groups.iter().map(|g| g.duty.as_str()).collect();
        assert_eq!(keys, vec!["Sound"]);
    }

    #[test]
    fn test_batch_add_tallies_and_reloads_once() {
        let bridge = MockBridge::new();
        // 42 and 43 do not exist; 5 does
        let report = add(&bridge, vec![5, 42, 43]).unwrap();
        assert_eq!(report.succeeded, 1);
        assert_eq!(report.failed, 2);
        assert_eq!(report.total_after_reload, 5);
    }

    #[test]
    fn test_remove_requires_confirmation() {
        let bridge = MockBridge::new();
        assert!(remove(&bridge, 11, false).is_err());
        let report = remove(&bridge, 11, true).unwrap();
        assert_eq!(report.total_after_reload, 3);
    }
}
