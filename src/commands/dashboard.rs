//! Dashboard command: headline counts plus class enrollment fill.

use serde::Serialize;
use serde_json::Value;

use super::{Output, fetch_list, text_bar};
use crate::engine::FillBar;
use crate::models::{ClassOffering, DashboardStats};
use crate::source::{Bridge, unwrap_value};
use crate::Result;

#[derive(Debug, Serialize)]
pub struct EnrollmentBar {
    pub label: String,
    pub fill: FillBar,
}

#[derive(Debug, Serialize)]
pub struct DashboardReport {
    pub stats: DashboardStats,
    pub enrollment: Vec<EnrollmentBar>,
}

impl Output for DashboardReport {
    fn to_human(&self) -> String {
        let mut lines = vec![
            "Dashboard".to_string(),
            format!("  Total Personnel: {}", self.stats.total_personnel),
            format!("  Active Students: {}", self.stats.active_students),
            format!("  Upcoming Shows:  {}", self.stats.upcoming_shows),
            format!("  Active Classes:  {}", self.stats.active_classes),
            "Class Enrollment".to_string(),
        ];
        for bar in &self.enrollment {
            lines.push(format!(
                "  {} {} {} ({}%)",
                bar.label,
                text_bar(bar.fill.width),
                bar.fill.label(),
                bar.fill.percent,
            ));
        }
        lines.join("\n")
    }
}

pub fn dashboard(bridge: &dyn Bridge) -> Result<DashboardReport> {
    let envelope = bridge.call("getDashboardStats", Value::Null)?;
    let stats: DashboardStats =
        serde_json::from_value(unwrap_value(envelope, "Failed to load dashboard stats")?)?;

    let classes = fetch_list::<ClassOffering>(bridge, "getAllClasses", "Failed to load classes")?;
    let enrollment = classes
        .records()
        .iter()
        .map(|offering| EnrollmentBar {
            label: offering.label(),
            fill: FillBar::new(offering.enrolled_count, offering.max_students),
        })
        .collect();

    Ok(DashboardReport { stats, enrollment })
}
