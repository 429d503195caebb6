//! Cast directory commands.

use serde::Serialize;

use super::{Output, fetch_list};
use crate::engine::{Query, filter};
use crate::models::{CastAssignment, value::display_date};
use crate::source::Bridge;
use crate::Result;

const LOAD_FALLBACK: &str = "Failed to load cast members";

#[derive(Debug, Serialize)]
pub struct CastList {
    pub total: usize,
    pub matched: usize,
    pub members: Vec<CastAssignment>,
}

impl Output for CastList {
    fn to_human(&self) -> String {
        let mut lines = vec![format!(
            "Cast Directory - {} of {} assignments shown",
            self.matched, self.total
        )];
        for member in &self.members {
            lines.push(format!(
                "  [{}] {}  {}  last show {}",
                member.performance_id,
                member.display_name(),
                member.primary_email.as_deref().unwrap_or("no email"),
                display_date(member.last_show_date.as_deref(), "TBD"),
            ));
        }
        lines.join("\n")
    }
}

/// List cast assignments. This endpoint nests its payload one level
/// deep; the envelope adapter unwraps it like any other list.
pub fn list(bridge: &dyn Bridge, search: Option<&str>) -> Result<CastList> {
    let store = fetch_list::<CastAssignment>(bridge, "getAllCastMembers", LOAD_FALLBACK)?;
    let query = Query::new().search(search.unwrap_or_default());
    let matched = filter(store.records(), &query);
    Ok(CastList {
        total: store.len(),
        matched: matched.len(),
        members: matched.into_iter().cloned().collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::MockBridge;

    #[test]
    fn test_list_unwraps_nested_payload() {
        let bridge = MockBridge::new();
        let report = list(&bridge, None).unwrap();
        assert_eq!(report.total, 2);
    }

    #[test]
    fn test_search_by_full_name() {
        let bridge = MockBridge::new();
        let report = list(&bridge, Some("jane sm")).unwrap();
        assert_eq!(report.matched, 1);
        assert_eq!(report.members[0].display_name(), "Jane Smith");
    }
}
