//! Calendar command: shows plus weekly class sessions, grouped by date.

use chrono::Days;
use serde::Serialize;

use super::{Output, fetch_list};
use crate::engine::{assign_colors, group_by, sorted_date_keys};
use crate::models::{CalendarEvent, ClassOffering, EventKind, Show, value::parse_date};
use crate::source::Bridge;
use crate::Result;

#[derive(Debug, Serialize)]
pub struct ScheduleDay {
    pub date: String,
    /// Palette index for the date badge
    pub color: usize,
    pub events: Vec<CalendarEvent>,
}

#[derive(Debug, Serialize)]
pub struct ScheduleReport {
    pub total: usize,
    pub shows: usize,
    pub classes: usize,
    pub days: Vec<ScheduleDay>,
}

impl Output for ScheduleReport {
    fn to_human(&self) -> String {
        let mut lines = vec![format!(
            "Schedule - {} events ({} shows, {} class sessions)",
            self.total, self.shows, self.classes
        )];
        for day in &self.days {
            lines.push(format!("  {} [color {}]", day.date, day.color));
            for event in &day.events {
                let tag = match event.kind {
                    EventKind::Show => "show ",
                    EventKind::Class => "class",
                };
                lines.push(format!("    {} {}", tag, event.title));
            }
        }
        lines.join("\n")
    }
}

fn show_events(shows: &[Show]) -> Vec<CalendarEvent> {
    let mut events = Vec::new();
    for show in shows {
        let Some(date) = show.show_date.as_deref().and_then(parse_date) else {
            // A show without a parseable date cannot be placed on the grid
            continue;
        };
        events.push(CalendarEvent {
            id: format!("show-{}", show.show_id),
            title: format!(
                "{} - {}",
                show.show_type_name.as_deref().unwrap_or("Show"),
                show.venue
            ),
            date: date.format("%Y-%m-%d").to_string(),
            kind: EventKind::Show,
        });
    }
    events
}

/// Expand each offering into weekly sessions across its date range.
fn class_events(classes: &[ClassOffering]) -> Vec<CalendarEvent> {
    let mut events = Vec::new();
    for offering in classes {
        let start = offering.start_date.as_deref().and_then(parse_date);
        let end = offering.end_date.as_deref().and_then(parse_date);
        let (Some(start), Some(end)) = (start, end) else {
            continue;
        };
        let title = format!(
            "{} - {}",
            offering.label(),
            offering.venue_or_room.as_deref().unwrap_or("TBD")
        );
        let mut current = start;
        while current <= end {
            let date = current.format("%Y-%m-%d").to_string();
            events.push(CalendarEvent {
                id: format!("class-{}-{}", offering.offering_id, date),
                title: title.clone(),
                date,
                kind: EventKind::Class,
            });
            match current.checked_add_days(Days::new(7)) {
                Some(next) => current = next,
                None => break,
            }
        }
    }
    events
}

pub fn schedule(bridge: &dyn Bridge) -> Result<ScheduleReport> {
    let shows = fetch_list::<Show>(bridge, "getAllShows", "Failed to load shows")?;
    let classes = fetch_list::<ClassOffering>(bridge, "getAllClasses", "Failed to load classes")?;

    let mut events = show_events(shows.records());
    events.extend(class_events(classes.records()));

    let shows_count = events.iter().filter(|e| e.kind == EventKind::Show).count();
    let classes_count = events.len() - shows_count;

    // Chronological day grouping with stable badge colors per date
    let keys = sorted_date_keys(events.iter().map(|e| e.date.clone()));
    let colors = assign_colors(&keys);
    let refs: Vec<&CalendarEvent> = events.iter().collect();
    let days = group_by(&refs, &keys, |e| Some(e.date.clone()))
        .into_iter()
        .map(|group| ScheduleDay {
            color: colors.get(&group.key).copied().unwrap_or(0),
            date: group.key,
            events: group.members.into_iter().cloned().collect(),
        })
        .collect();

    Ok(ScheduleReport {
        total: events.len(),
        shows: shows_count,
        classes: classes_count,
        days,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::PALETTE_SIZE;
    use crate::source::MockBridge;

    #[test]
    fn test_schedule_counts_and_recurrence() {
        let bridge = MockBridge::new();
        let report = schedule(&bridge).unwrap();
        assert_eq!(report.shows, 2);
        // Two offerings, each spanning six weekly sessions
        assert_eq!(report.classes, 12);
        assert_eq!(report.total, 14);
    }

    #[test]
    fn test_days_are_chronological_with_position_colors() {
        let bridge = MockBridge::new();
        let report = schedule(&bridge).unwrap();
        let dates: Vec<&str> = report.days.iter().map(|d| d.date.as_str()).collect();
        let mut sorted = dates.clone();
        sorted.sort();
        assert_eq!(dates, sorted);

        // First day is the December show, color 0; colors wrap within the palette
        assert_eq!(report.days[0].date, "2024-12-15");
        assert_eq!(report.days[0].color, 0);
        assert!(report.days.iter().all(|d| d.color < PALETTE_SIZE));

        // More distinct dates than palette entries forces a wrap
        assert!(report.days.len() > PALETTE_SIZE);
        assert_eq!(report.days[PALETTE_SIZE].color, 0);
    }

    #[test]
    fn test_every_event_lands_on_exactly_one_day() {
        let bridge = MockBridge::new();
        let report = schedule(&bridge).unwrap();
        let placed: usize = report.days.iter().map(|d| d.events.len()).sum();
        assert_eq!(placed, report.total);
    }
}
