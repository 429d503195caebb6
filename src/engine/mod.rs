//! The directory aggregation engine.
//!
//! Every directory view in Greenroom is the same pipeline over one record
//! store: free-text/facet filtering, optional grouping into named buckets,
//! palette-index assignment for grouped display, and summary statistics.
//! The engine is pure - it never talks to the bridge and never mutates the
//! store it reads.

pub mod color;
pub mod filter;
pub mod group;
pub mod stats;

pub use color::{PALETTE_SIZE, assign_colors};
pub use filter::{FACET_ALL, Query, filter};
pub use group::{Group, UNASSIGNED, group_by, sorted_date_keys};
pub use stats::{FillBar, StatusBreakdown, StatusSegment, percentage, status_breakdown};
