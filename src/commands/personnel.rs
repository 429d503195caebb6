//! Personnel directory commands.

use serde::Serialize;
use serde_json::{Value, json};

use super::{MutationReport, Output, fetch_list, guarded_remove, merge_fields};
use crate::engine::{Query, filter};
use crate::models::{Personnel, value::display_date};
use crate::roster::Mutator;
use crate::source::Bridge;
use crate::Result;

const LOAD_FALLBACK: &str = "Failed to load personnel";

#[derive(Debug, Serialize)]
pub struct PersonnelList {
    pub total: usize,
    pub matched: usize,
    pub personnel: Vec<Personnel>,
}

impl Output for PersonnelList {
    fn to_human(&self) -> String {
        let mut lines = vec![format!(
            "Personnel Directory - {} of {} shown",
            self.matched, self.total
        )];
        for person in &self.personnel {
            lines.push(format!(
                "  [{}] {}  {}  {}",
                person.personnel_id,
                person.full_name(),
                person.primary_email.as_deref().unwrap_or("no email"),
                person.primary_phone.as_deref().unwrap_or("no phone"),
            ));
        }
        lines.join("\n")
    }
}

pub fn list(bridge: &dyn Bridge, search: Option<&str>) -> Result<PersonnelList> {
    let store = fetch_list::<Personnel>(bridge, "getAllPersonnel", LOAD_FALLBACK)?;
    let query = Query::new().search(search.unwrap_or_default());
    let matched = filter(store.records(), &query);
    Ok(PersonnelList {
        total: store.len(),
        matched: matched.len(),
        personnel: matched.into_iter().cloned().collect(),
    })
}

#[derive(Debug, Serialize)]
pub struct PersonnelDetail {
    pub person: Personnel,
}

impl Output for PersonnelDetail {
    fn to_human(&self) -> String {
        let p = &self.person;
        [
            format!("{} (#{})", p.full_name(), p.personnel_id),
            format!("  Email:     {}", p.primary_email.as_deref().unwrap_or("N/A")),
            format!("  Phone:     {}", p.primary_phone.as_deref().unwrap_or("N/A")),
            format!("  Instagram: {}", p.instagram.as_deref().unwrap_or("N/A")),
            format!("  Birthday:  {}", display_date(p.birthday.as_deref(), "N/A")),
        ]
        .join("\n")
    }
}

pub fn show(bridge: &dyn Bridge, id: i64) -> Result<PersonnelDetail> {
    let store = fetch_list::<Personnel>(bridge, "getAllPersonnel", LOAD_FALLBACK)?;
    Ok(PersonnelDetail {
        person: store.get(id)?.clone(),
    })
}

#[allow(clippy::too_many_arguments)]
pub fn create(
    bridge: &dyn Bridge,
    first_name: String,
    last_name: String,
    email: Option<String>,
    phone: Option<String>,
    instagram: Option<String>,
    birthday: Option<String>,
) -> Result<MutationReport> {
    let mut payload = json!({
        "FirstName": first_name,
        "LastName": last_name,
    });
    merge_fields(
        &mut payload,
        vec![
            ("PrimaryEmail", email.map(Value::from)),
            ("PrimaryPhone", phone.map(Value::from)),
            ("Instagram", instagram.map(Value::from)),
            ("Birthday", birthday.map(Value::from)),
        ],
    );

    let record = Mutator::new(bridge).invoke("createPersonnel", payload, "Failed to add person")?;
    let store = fetch_list::<Personnel>(bridge, "getAllPersonnel", LOAD_FALLBACK)?;
    let id = record.get("PersonnelID").and_then(Value::as_i64).unwrap_or(0);
    Ok(MutationReport {
        message: format!("Added personnel #{}", id),
        record: Some(record),
        total_after_reload: store.len(),
    })
}

#[allow(clippy::too_many_arguments)]
pub fn update(
    bridge: &dyn Bridge,
    id: i64,
    first_name: Option<String>,
    last_name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    instagram: Option<String>,
    birthday: Option<String>,
) -> Result<MutationReport> {
    let store = fetch_list::<Personnel>(bridge, "getAllPersonnel", LOAD_FALLBACK)?;
    let mut record = serde_json::to_value(store.get(id)?)?;
    merge_fields(
        &mut record,
        vec![
            ("FirstName", first_name.map(Value::from)),
            ("LastName", last_name.map(Value::from)),
            ("PrimaryEmail", email.map(Value::from)),
            ("PrimaryPhone", phone.map(Value::from)),
            ("Instagram", instagram.map(Value::from)),
            ("Birthday", birthday.map(Value::from)),
        ],
    );

    let updated =
        Mutator::new(bridge).invoke("updatePersonnel", record, "Failed to update person")?;
    let reloaded = fetch_list::<Personnel>(bridge, "getAllPersonnel", LOAD_FALLBACK)?;
    Ok(MutationReport {
        message: format!("Updated personnel #{}", id),
        record: Some(updated),
        total_after_reload: reloaded.len(),
    })
}

pub fn delete(bridge: &dyn Bridge, id: i64, yes: bool) -> Result<MutationReport> {
    let store = fetch_list::<Personnel>(bridge, "getAllPersonnel", LOAD_FALLBACK)?;
    let name = store.get(id)?.full_name();

    guarded_remove(
        bridge,
        "deletePersonnel",
        json!(id),
        id,
        yes,
        &format!("{} from the personnel directory", name),
        "Failed to delete person",
    )?;
    let reloaded = fetch_list::<Personnel>(bridge, "getAllPersonnel", LOAD_FALLBACK)?;
    Ok(MutationReport {
        message: format!("Removed {} from the personnel directory", name),
        record: None,
        total_after_reload: reloaded.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::MockBridge;

    #[test]
    fn test_list_unfiltered() {
        let bridge = MockBridge::new();
        let report = list(&bridge, None).unwrap();
        assert_eq!(report.total, 5);
        assert_eq!(report.matched, 5);
    }

    #[test]
    fn test_list_search_matches_name_and_email() {
        let bridge = MockBridge::new();
        let by_name = list(&bridge, Some("jane")).unwrap();
        assert_eq!(by_name.matched, 1);
        assert_eq!(by_name.personnel[0].personnel_id, 2);

        let by_email = list(&bridge, Some("okafor@")).unwrap();
        assert_eq!(by_email.matched, 1);
        assert_eq!(by_email.personnel[0].personnel_id, 5);
    }

    #[test]
    fn test_create_then_reload_counts() {
        let bridge = MockBridge::new();
        let report = create(
            &bridge,
            "New".to_string(),
            "Member".to_string(),
            Some("new@troupe.org".to_string()),
            None,
            None,
            None,
        )
        .unwrap();
        assert_eq!(report.total_after_reload, 6);
        assert!(report.message.contains("#6"));
    }

    #[test]
    fn test_update_merges_only_provided_fields() {
        let bridge = MockBridge::new();
        update(
            &bridge,
            1,
            None,
            None,
            Some("fresh@troupe.org".to_string()),
            None,
            None,
            None,
        )
        .unwrap();

        let detail = show(&bridge, 1).unwrap();
        assert_eq!(detail.person.primary_email.as_deref(), Some("fresh@troupe.org"));
        assert_eq!(detail.person.first_name, "John");
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let bridge = MockBridge::new();
        assert!(delete(&bridge, 1, false).is_err());
        let report = delete(&bridge, 1, true).unwrap();
        assert_eq!(report.total_after_reload, 4);
    }
}
