//! Partitioning a filtered view into named buckets.

use crate::models::value::parse_date;

/// Catch-all group key for records with a missing or empty bucket key.
pub const UNASSIGNED: &str = "Unassigned";

/// One named bucket of a grouped view.
#[derive(Debug)]
pub struct Group<'a, R> {
    pub key: String,
    pub members: Vec<&'a R>,
}

/// Partition `records` into buckets following `known_keys` order.
///
/// The known-key list is derived from the *unfiltered* store, so a group
/// can legitimately be empty under one filter and populated under the
/// next. Buckets left empty by the current filter are dropped from the
/// output. Records whose key is missing, empty, or absent from the known
/// list land in a trailing [`UNASSIGNED`] bucket, which is itself dropped
/// when empty. Every record appears in exactly one bucket.
pub fn group_by<'a, R, F>(
    records: &[&'a R],
    known_keys: &[String],
    key_fn: F,
) -> Vec<Group<'a, R>>
where
    F: Fn(&R) -> Option<String>,
{
    let mut groups: Vec<Group<'a, R>> = Vec::new();
    let mut unassigned: Vec<&'a R> = Vec::new();

    let keys: Vec<&String> = known_keys.iter().filter(|k| !k.is_empty()).collect();

    let mut keyed: Vec<(Option<String>, &'a R)> = Vec::with_capacity(records.len());
    for record in records {
        keyed.push((key_fn(record), *record));
    }

    for key in &keys {
        let members: Vec<&'a R> = keyed
            .iter()
            .filter(|(k, _)| k.as_deref() == Some(key.as_str()))
            .map(|(_, r)| *r)
            .collect();
        if !members.is_empty() {
            groups.push(Group {
                key: (*key).clone(),
                members,
            });
        }
    }

    for (key, record) in &keyed {
        let known = match key {
            Some(k) => !k.is_empty() && keys.iter().any(|known| known.as_str() == k.as_str()),
            None => false,
        };
        if !known {
            unassigned.push(*record);
        }
    }
    if !unassigned.is_empty() {
        groups.push(Group {
            key: UNASSIGNED.to_string(),
            members: unassigned,
        });
    }

    groups
}

/// Deduplicate date keys and sort them chronologically ascending,
/// regardless of input order. Unparseable keys sort after all real dates,
/// lexically among themselves.
pub fn sorted_date_keys<I>(keys: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut unique: Vec<String> = Vec::new();
    for key in keys {
        if key.is_empty() || unique.contains(&key) {
            continue;
        }
        unique.push(key);
    }
    unique.sort_by(|a, b| match (parse_date(a), parse_date(b)) {
        (Some(da), Some(db)) => da.cmp(&db),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => a.cmp(b),
    });
    unique
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    use crate::models::Record;

    #[derive(Debug, Deserialize)]
    struct Duty {
        id: i64,
        duty: Option<String>,
    }

    impl Record for Duty {
        fn entity() -> &'static str {
            "duty"
        }

        fn identity(&self) -> i64 {
            self.id
        }

        fn searchable(&self) -> Vec<String> {
            vec![self.duty.clone().unwrap_or_default()]
        }
    }

    fn duties() -> Vec<Duty> {
        vec![
            Duty { id: 1, duty: Some("Lighting".into()) },
            Duty { id: 2, duty: Some("Sound".into()) },
            Duty { id: 3, duty: Some("Lighting".into()) },
            Duty { id: 4, duty: None },
            Duty { id: 5, duty: Some("".into()) },
        ]
    }

    fn refs(records: &[Duty]) -> Vec<&Duty> {
        records.iter().collect()
    }

    #[test]
    fn test_groups_follow_known_key_order() {
        let records = duties();
        let known = vec!["Sound".to_string(), "Lighting".to_string()];
        let groups = group_by(&refs(&records), &known, |d| d.duty.clone());
        let keys: Vec<&str> = groups.iter().map(|g| g.key.as_str()).collect();
        assert_eq!(keys, vec!["Sound", "Lighting", UNASSIGNED]);
    }

    #[test]
    fn test_grouping_is_a_partition() {
        let records = duties();
        let known = vec!["Lighting".to_string(), "Sound".to_string()];
        let groups = group_by(&refs(&records), &known, |d| d.duty.clone());

        let mut seen: Vec<i64> = groups
            .iter()
            .flat_map(|g| g.members.iter().map(|d| d.id))
            .collect();
        seen.sort_unstable();
        assert_eq!(seen, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_empty_groups_are_dropped() {
        let records = vec![Duty { id: 1, duty: Some("Sound".into()) }];
        let known = vec!["Lighting".to_string(), "Sound".to_string()];
        let groups = group_by(&refs(&records), &known, |d| d.duty.clone());
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].key, "Sound");
    }

    #[test]
    fn test_missing_and_empty_keys_fall_to_unassigned() {
        let records = duties();
        let known = vec!["Lighting".to_string(), "Sound".to_string()];
        let groups = group_by(&refs(&records), &known, |d| d.duty.clone());
        let unassigned = groups.iter().find(|g| g.key == UNASSIGNED).unwrap();
        let ids: Vec<i64> = unassigned.members.iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![4, 5]);
    }

    #[test]
    fn test_no_unassigned_group_when_all_keyed() {
        let records = vec![
            Duty { id: 1, duty: Some("Sound".into()) },
            Duty { id: 2, duty: Some("Lighting".into()) },
        ];
        let known = vec!["Lighting".to_string(), "Sound".to_string()];
        let groups = group_by(&refs(&records), &known, |d| d.duty.clone());
        assert!(groups.iter().all(|g| g.key != UNASSIGNED));
    }

    #[test]
    fn test_key_outside_known_list_falls_to_unassigned() {
        let records = vec![Duty { id: 9, duty: Some("Rigging".into()) }];
        let known = vec!["Lighting".to_string()];
        let groups = group_by(&refs(&records), &known, |d| d.duty.clone());
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].key, UNASSIGNED);
    }

    #[test]
    fn test_sorted_date_keys_chronological() {
        let keys = vec![
            "2025-03-14".to_string(),
            "2024-12-01".to_string(),
            "2025-03-14".to_string(),
            "2025-01-02".to_string(),
        ];
        assert_eq!(
            sorted_date_keys(keys),
            vec!["2024-12-01", "2025-01-02", "2025-03-14"]
        );
    }

    #[test]
    fn test_sorted_date_keys_unparseable_sort_last() {
        let keys = vec![
            "someday".to_string(),
            "2025-01-02".to_string(),
            "later".to_string(),
        ];
        assert_eq!(
            sorted_date_keys(keys),
            vec!["2025-01-02", "later", "someday"]
        );
    }
}
