//! Student directory commands.

use serde::Serialize;

use super::{Output, fetch_list};
use crate::engine::{Query, StatusBreakdown, filter, status_breakdown};
use crate::models::{StudentRecord, StudentStatus};
use crate::source::Bridge;
use crate::Result;

const LOAD_FALLBACK: &str = "Failed to load students";

#[derive(Debug, Serialize)]
pub struct StudentList {
    pub total: usize,
    pub matched: usize,
    pub breakdown: StatusBreakdown,
    pub students: Vec<StudentRecord>,
}

impl Output for StudentList {
    fn to_human(&self) -> String {
        let mut lines = vec![format!(
            "Student Directory - {} of {} shown",
            self.matched, self.total
        )];
        let segments: Vec<String> = self
            .breakdown
            .segments
            .iter()
            .map(|s| format!("{} {} ({}%)", s.status, s.count, s.percent))
            .collect();
        lines.push(format!("  Status: {}", segments.join(" | ")));
        for student in &self.students {
            lines.push(format!(
                "  [{}] {}  {}  {}",
                student.student_id,
                student.full_name(),
                student.status,
                student.current_level_name.as_deref().unwrap_or("no level"),
            ));
        }
        lines.join("\n")
    }
}

/// List students with optional search and status facet. The status
/// breakdown always covers the whole store, not the filtered view, so
/// the segmented bar stays stable while filtering.
pub fn list(
    bridge: &dyn Bridge,
    search: Option<&str>,
    status: Option<&str>,
) -> Result<StudentList> {
    let store = fetch_list::<StudentRecord>(bridge, "getAllStudentsWithDetails", LOAD_FALLBACK)?;

    let statuses: Vec<String> = StudentStatus::all().iter().map(|s| s.to_string()).collect();
    let breakdown = status_breakdown(store.records(), "status", &statuses);

    let mut query = Query::new().search(search.unwrap_or_default());
    if let Some(status) = status {
        query = query.facet("status", status);
    }
    let matched = filter(store.records(), &query);

    Ok(StudentList {
        total: store.len(),
        matched: matched.len(),
        breakdown,
        students: matched.into_iter().cloned().collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::MockBridge;

    #[test]
    fn test_breakdown_matches_reference_scenario() {
        let bridge = MockBridge::new();
        let report = list(&bridge, None, None).unwrap();
        assert_eq!(report.breakdown.total, 3);

        let active = report.breakdown.segment("Active").unwrap();
        assert_eq!((active.count, active.percent), (2, 67));
        let inactive = report.breakdown.segment("Inactive").unwrap();
        assert_eq!((inactive.count, inactive.percent), (0, 0));
        let graduated = report.breakdown.segment("Graduated").unwrap();
        assert_eq!((graduated.count, graduated.percent), (1, 33));
    }

    #[test]
    fn test_status_facet_filters_rows_not_breakdown() {
        let bridge = MockBridge::new();
        let report = list(&bridge, None, Some("Graduated")).unwrap();
        assert_eq!(report.matched, 1);
        assert_eq!(report.students[0].full_name(), "Marcus Lee");
        // Breakdown still reflects the whole store
        assert_eq!(report.breakdown.total, 3);
    }

    #[test]
    fn test_all_sentinel_keeps_everyone() {
        let bridge = MockBridge::new();
        let report = list(&bridge, None, Some("all")).unwrap();
        assert_eq!(report.matched, 3);
    }
}
