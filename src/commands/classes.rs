//! Class offering commands: directory, CRUD, and roster management.

use serde::Serialize;
use serde_json::{Value, json};

use super::{BatchOutcome, MutationReport, Output, fetch_list, guarded_remove, merge_fields, text_bar};
use crate::engine::{FillBar, Query, filter};
use crate::models::{ClassOffering, Enrollment, EnrollmentStatus, value::display_date};
use crate::roster::Mutator;
use crate::source::Bridge;
use crate::Result;

const LOAD_FALLBACK: &str = "Failed to load classes";
const ROSTER_FALLBACK: &str = "Failed to load students";

#[derive(Debug, Serialize)]
pub struct ClassRow {
    #[serde(flatten)]
    pub offering: ClassOffering,
    pub fill: FillBar,
}

#[derive(Debug, Serialize)]
pub struct ClassList {
    pub total: usize,
    pub matched: usize,
    pub classes: Vec<ClassRow>,
}

impl Output for ClassList {
    fn to_human(&self) -> String {
        let mut lines = vec![format!(
            "Classes - {} of {} shown",
            self.matched, self.total
        )];
        for row in &self.classes {
            lines.push(format!(
                "  [{}] {}  {}  {}  {} {} ({}%)",
                row.offering.offering_id,
                row.offering.label(),
                row.offering.teacher_name.as_deref().unwrap_or("TBD"),
                row.offering.status,
                text_bar(row.fill.width),
                row.fill.label(),
                row.fill.percent,
            ));
        }
        lines.join("\n")
    }
}

pub fn list(
    bridge: &dyn Bridge,
    search: Option<&str>,
    status: Option<&str>,
) -> Result<ClassList> {
    let store = fetch_list::<ClassOffering>(bridge, "getAllClasses", LOAD_FALLBACK)?;

    let mut query = Query::new().search(search.unwrap_or_default());
    if let Some(status) = status {
        query = query.facet("status", status);
    }
    let matched = filter(store.records(), &query);

    Ok(ClassList {
        total: store.len(),
        matched: matched.len(),
        classes: matched
            .into_iter()
            .map(|offering| ClassRow {
                fill: FillBar::new(offering.enrolled_count, offering.max_students),
                offering: offering.clone(),
            })
            .collect(),
    })
}

#[derive(Debug, Serialize)]
pub struct ClassDetail {
    #[serde(flatten)]
    pub offering: ClassOffering,
    pub fill: FillBar,
}

impl Output for ClassDetail {
    fn to_human(&self) -> String {
        let o = &self.offering;
        [
            format!("{} (#{})", o.label(), o.offering_id),
            format!("  Teacher:    {}", o.teacher_name.as_deref().unwrap_or("TBD")),
            format!("  Room:       {}", o.venue_or_room.as_deref().unwrap_or("TBD")),
            format!("  Runs:       {} - {}",
                display_date(o.start_date.as_deref(), "TBD"),
                display_date(o.end_date.as_deref(), "TBD")),
            format!("  Status:     {}", o.status),
            format!(
                "  Enrollment: {} {} ({}%)",
                text_bar(self.fill.width),
                self.fill.label(),
                self.fill.percent
            ),
        ]
        .join("\n")
    }
}

pub fn show(bridge: &dyn Bridge, offering_id: i64) -> Result<ClassDetail> {
    let store = fetch_list::<ClassOffering>(bridge, "getAllClasses", LOAD_FALLBACK)?;
    let offering = store.get(offering_id)?.clone();
    Ok(ClassDetail {
        fill: FillBar::new(offering.enrolled_count, offering.max_students),
        offering,
    })
}

#[allow(clippy::too_many_arguments)]
pub fn create(
    bridge: &dyn Bridge,
    class_level_id: i64,
    start_date: Option<String>,
    end_date: Option<String>,
    teacher_id: Option<i64>,
    room: Option<String>,
    max_students: i64,
) -> Result<MutationReport> {
    let mut payload = json!({
        "ClassLevelID": class_level_id,
        "MaxStudents": max_students,
        "Status": "Open",
    });
    merge_fields(
        &mut payload,
        vec![
            ("StartDate", start_date.map(Value::from)),
            ("EndDate", end_date.map(Value::from)),
            ("TeacherPersonnelID", teacher_id.map(Value::from)),
            ("VenueOrRoom", room.map(Value::from)),
        ],
    );

    let record =
        Mutator::new(bridge).invoke("createClassOffering", payload, "Failed to create class")?;
    let reloaded = fetch_list::<ClassOffering>(bridge, "getAllClasses", LOAD_FALLBACK)?;
    let id = record.get("OfferingID").and_then(Value::as_i64).unwrap_or(0);
    Ok(MutationReport {
        message: format!("Created class offering #{}", id),
        record: Some(record),
        total_after_reload: reloaded.len(),
    })
}

#[allow(clippy::too_many_arguments)]
pub fn update(
    bridge: &dyn Bridge,
    offering_id: i64,
    start_date: Option<String>,
    end_date: Option<String>,
    teacher_id: Option<i64>,
    room: Option<String>,
    max_students: Option<i64>,
    status: Option<String>,
) -> Result<MutationReport> {
    let store = fetch_list::<ClassOffering>(bridge, "getAllClasses", LOAD_FALLBACK)?;
    let mut record = serde_json::to_value(store.get(offering_id)?)?;
    merge_fields(
        &mut record,
        vec![
            ("StartDate", start_date.map(Value::from)),
            ("EndDate", end_date.map(Value::from)),
            ("TeacherPersonnelID", teacher_id.map(Value::from)),
            ("VenueOrRoom", room.map(Value::from)),
            ("MaxStudents", max_students.map(Value::from)),
            ("Status", status.map(Value::from)),
        ],
    );

    let updated = Mutator::new(bridge).invoke("updateClass", record, "Failed to update class")?;
    let reloaded = fetch_list::<ClassOffering>(bridge, "getAllClasses", LOAD_FALLBACK)?;
    Ok(MutationReport {
        message: format!("Updated class offering #{}", offering_id),
        record: Some(updated),
        total_after_reload: reloaded.len(),
    })
}

pub fn delete(bridge: &dyn Bridge, offering_id: i64, yes: bool) -> Result<MutationReport> {
    let store = fetch_list::<ClassOffering>(bridge, "getAllClasses", LOAD_FALLBACK)?;
    let label = store.get(offering_id)?.label();

    guarded_remove(
        bridge,
        "deleteClass",
        json!(offering_id),
        offering_id,
        yes,
        &format!("class offering {}", label),
        "Failed to delete class",
    )?;
    let reloaded = fetch_list::<ClassOffering>(bridge, "getAllClasses", LOAD_FALLBACK)?;
    Ok(MutationReport {
        message: format!("Deleted class offering {}", label),
        record: None,
        total_after_reload: reloaded.len(),
    })
}

#[derive(Debug, Serialize)]
pub struct LevelList {
    pub levels: Vec<crate::models::ClassLevel>,
}

impl Output for LevelList {
    fn to_human(&self) -> String {
        let mut lines = vec!["Class Levels".to_string()];
        for level in &self.levels {
            lines.push(format!(
                "  [{}] {}  {}",
                level.class_level_id,
                level.level_name,
                level.description.as_deref().unwrap_or(""),
            ));
        }
        lines.join("\n")
    }
}

/// The level lookup used when creating an offering.
pub fn levels(bridge: &dyn Bridge) -> Result<LevelList> {
    let store = fetch_list::<crate::models::ClassLevel>(
        bridge,
        "getAllClassLevels",
        "Failed to load class levels",
    )?;
    Ok(LevelList {
        levels: store.records().to_vec(),
    })
}

#[derive(Debug, Serialize)]
pub struct RosterReport {
    pub offering_id: i64,
    pub total: usize,
    pub students: Vec<Enrollment>,
}

impl Output for RosterReport {
    fn to_human(&self) -> String {
        let mut lines = vec![format!(
            "Roster for offering #{} - {} student{}",
            self.offering_id,
            self.total,
            if self.total == 1 { "" } else { "s" }
        )];
        for row in &self.students {
            lines.push(format!(
                "  [{}] {}  {}  enrolled {}",
                row.enrollment_id,
                row.full_name(),
                row.status,
                display_date(row.enrollment_date.as_deref(), "N/A"),
            ));
        }
        lines.join("\n")
    }
}

/// Fetch the enrolled roster for one offering. Administrative removal
/// rows are excluded from display.
fn fetch_roster(bridge: &dyn Bridge, offering_id: i64) -> Result<Vec<Enrollment>> {
    let envelope = bridge.call("getEnrolledStudents", json!(offering_id))?;
    let rows = crate::source::unwrap_list(envelope, ROSTER_FALLBACK)?;
    let mut students: Vec<Enrollment> = Vec::with_capacity(rows.len());
    for row in rows {
        students.push(serde_json::from_value(row)?);
    }
    students.retain(|row| !row.is_admin_row());
    Ok(students)
}

pub fn roster(bridge: &dyn Bridge, offering_id: i64) -> Result<RosterReport> {
    let students = fetch_roster(bridge, offering_id)?;
    Ok(RosterReport {
        offering_id,
        total: students.len(),
        students,
    })
}

/// Enroll students one awaited call at a time, then reload the roster
/// exactly once - even when some items failed, since the others took.
pub fn enroll(
    bridge: &dyn Bridge,
    offering_id: i64,
    student_ids: Vec<i64>,
) -> Result<BatchOutcome> {
    let mutator = Mutator::new(bridge);
    let items = student_ids
        .into_iter()
        .map(|id| json!({"offeringId": offering_id, "studentId": id}))
        .collect();
    let report = mutator.batch("enrollStudent", items, "Failed to add student");

    let students = fetch_roster(bridge, offering_id)?;
    Ok(BatchOutcome::new(report, students.len(), "student"))
}

pub fn drop(bridge: &dyn Bridge, enrollment_id: i64, yes: bool) -> Result<MutationReport> {
    guarded_remove(
        bridge,
        "removeStudentFromClass",
        json!(enrollment_id),
        enrollment_id,
        yes,
        &format!("enrollment {} from the class", enrollment_id),
        "Failed to remove student",
    )?;
    Ok(MutationReport {
        message: "Student removed successfully".to_string(),
        record: None,
        total_after_reload: 0,
    })
}

pub fn set_status(
    bridge: &dyn Bridge,
    enrollment_id: i64,
    status: EnrollmentStatus,
) -> Result<MutationReport> {
    let updated = Mutator::new(bridge).invoke(
        "updateEnrollmentStatus",
        json!({"enrollmentId": enrollment_id, "status": status.to_string()}),
        "Failed to update enrollment",
    )?;
    Ok(MutationReport {
        message: format!("Enrollment {} set to {}", enrollment_id, status),
        record: Some(updated),
        total_after_reload: 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::MockBridge;

    #[test]
    fn test_list_fill_bars() {
        let bridge = MockBridge::new();
        let report = list(&bridge, None, None).unwrap();
        assert_eq!(report.total, 2);

        let beginner = &report.classes[0];
        assert_eq!(beginner.fill.percent, 67);
        assert_eq!(beginner.fill.width, 67);

        // Over-enrolled: raw percent kept, bar clamped, text keeps counts
        let intermediate = &report.classes[1];
        assert_eq!(intermediate.fill.percent, 117);
        assert_eq!(intermediate.fill.width, 100);
        assert_eq!(intermediate.fill.label(), "14 / 12");
    }

    #[test]
    fn test_over_enrolled_human_bar_is_full() {
        let bridge = MockBridge::new();
        let report = list(&bridge, Some("intermediate"), None).unwrap();
        let text = report.to_human();
        assert!(text.contains("[##########] 14 / 12 (117%)"));
    }

    #[test]
    fn test_roster_excludes_admin_rows() {
        let bridge = MockBridge::new();
        let report = roster(&bridge, 1).unwrap();
        assert_eq!(report.total, 2);
        assert!(report.students.iter().all(|s| !s.is_admin_row()));
    }

    #[test]
    fn test_enroll_batch_tally_and_single_roster_reload() {
        let bridge = MockBridge::new();
        // 4 and 5 exist; 77 does not
        let report = enroll(&bridge, 1, vec![4, 5, 77]).unwrap();
        assert_eq!(report.succeeded, 2);
        assert_eq!(report.failed, 1);
        // Roster reloaded once after the whole batch: 2 visible + 2 new
        assert_eq!(report.total_after_reload, 4);
    }

    #[test]
    fn test_set_status_roundtrip() {
        let bridge = MockBridge::new();
        let report = set_status(&bridge, 101, EnrollmentStatus::Completed).unwrap();
        assert!(report.message.contains("Completed"));
    }

    #[test]
    fn test_update_merges_status() {
        let bridge = MockBridge::new();
        update(
            &bridge,
            1,
            None,
            None,
            None,
            None,
            None,
            Some("Completed".to_string()),
        )
        .unwrap();
        let detail = show(&bridge, 1).unwrap();
        assert_eq!(detail.offering.status.to_string(), "Completed");
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let bridge = MockBridge::new();
        assert!(delete(&bridge, 1, false).is_err());
        let report = delete(&bridge, 1, true).unwrap();
        assert_eq!(report.total_after_reload, 1);
    }
}
