//! Summary statistics over a record store or filtered view.

use serde::Serialize;

use crate::models::Record;

/// Integer percentage with guarded division: `round(count / total * 100)`
/// when `total > 0`, else 0.
pub fn percentage(count: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (count as f64 / total as f64 * 100.0).round() as u32
}

/// One segment of a status distribution.
#[derive(Debug, Clone, Serialize)]
pub struct StatusSegment {
    pub status: String,
    pub count: usize,
    pub percent: u32,
}

/// Counts and percentages over an enumerated status set.
#[derive(Debug, Clone, Serialize)]
pub struct StatusBreakdown {
    pub total: usize,
    pub segments: Vec<StatusSegment>,
}

impl StatusBreakdown {
    pub fn segment(&self, status: &str) -> Option<&StatusSegment> {
        self.segments.iter().find(|s| s.status == status)
    }
}

/// Segment a record set by a status facet.
///
/// The caller supplies the enumerated status list; statuses with no
/// matching records report a zero count rather than being omitted.
pub fn status_breakdown<R: Record>(
    records: &[R],
    facet: &str,
    statuses: &[String],
) -> StatusBreakdown {
    let total = records.len();
    let segments = statuses
        .iter()
        .map(|status| {
            let count = records
                .iter()
                .filter(|r| r.facet(facet).as_deref() == Some(status.as_str()))
                .count();
            StatusSegment {
                status: status.clone(),
                count,
                percent: percentage(count, total),
            }
        })
        .collect();
    StatusBreakdown { total, segments }
}

/// Enrollment fill for one class offering.
///
/// `percent` is the raw fill and may exceed 100 to signal
/// over-enrollment; `width` is clamped to [0, 100] for the visual bar.
#[derive(Debug, Clone, Serialize)]
pub struct FillBar {
    pub enrolled: i64,
    pub max: i64,
    pub percent: u32,
    pub width: u32,
}

impl FillBar {
    pub fn new(enrolled: i64, max: i64) -> Self {
        let percent = if max > 0 {
            (enrolled.max(0) as f64 / max as f64 * 100.0).round() as u32
        } else {
            0
        };
        Self {
            enrolled,
            max,
            percent,
            width: percent.min(100),
        }
    }

    /// Display text keeps the raw counts even when the bar is clamped.
    pub fn label(&self) -> String {
        format!("{} / {}", self.enrolled, self.max)
    }
}
