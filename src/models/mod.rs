//! Data models for Greenroom entities.
//!
//! This module defines the directory record types backed by the troupe
//! sheet:
//! - `Personnel` - the master people directory
//! - `StudentRecord` - personnel enrolled in the class program
//! - `CastAssignment` / `CrewAssignment` - per-show assignment rows
//! - `Bartender` - bar roster with shift history
//! - `ClassOffering` / `Enrollment` - class scheduling and rosters
//! - `Show`, `InventoryItem`, lookup tables, and dashboard summaries
//!
//! Field names serialize under the sheet's column headers, so a record
//! round-trips through the bridge unchanged.

pub mod value;

use serde::{Deserialize, Serialize};
use std::fmt;

/// A directory record the aggregation engine can operate on.
///
/// Identity keys are unique within one record store at any observation
/// point. `searchable` returns the fixed per-entity field list used for
/// free-text matching; `facet` resolves a named filter/group dimension.
pub trait Record: serde::de::DeserializeOwned {
    /// Entity name used in messages ("personnel", "crew member", ...).
    fn entity() -> &'static str;

    /// The record's identity-key value.
    fn identity(&self) -> i64;

    /// Values participating in free-text search. Missing fields are
    /// represented as empty strings by the callers that build this list.
    fn searchable(&self) -> Vec<String>;

    /// Resolve a facet dimension by name. `None` means the entity does
    /// not carry that dimension at all.
    fn facet(&self, name: &str) -> Option<String> {
        let _ = name;
        None
    }
}

/// Student lifecycle status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StudentStatus {
    #[default]
    Active,
    Inactive,
    Graduated,
}

impl StudentStatus {
    /// All statuses, in display order. Statistics enumerate this list so
    /// absent statuses still report a zero count.
    pub fn all() -> &'static [StudentStatus] {
        &[
            StudentStatus::Active,
            StudentStatus::Inactive,
            StudentStatus::Graduated,
        ]
    }
}

impl fmt::Display for StudentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StudentStatus::Active => "Active",
            StudentStatus::Inactive => "Inactive",
            StudentStatus::Graduated => "Graduated",
        };
        write!(f, "{}", s)
    }
}

impl std::str::FromStr for StudentStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "Active" => Ok(StudentStatus::Active),
            "Inactive" => Ok(StudentStatus::Inactive),
            "Graduated" => Ok(StudentStatus::Graduated),
            _ => Err(format!("Unknown student status: {}", s)),
        }
    }
}

/// Class offering status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OfferingStatus {
    #[default]
    Open,
    Full,
    Completed,
}

impl fmt::Display for OfferingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OfferingStatus::Open => "Open",
            OfferingStatus::Full => "Full",
            OfferingStatus::Completed => "Completed",
        };
        write!(f, "{}", s)
    }
}

impl std::str::FromStr for OfferingStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "Open" => Ok(OfferingStatus::Open),
            "Full" => Ok(OfferingStatus::Full),
            "Completed" => Ok(OfferingStatus::Completed),
            _ => Err(format!("Unknown offering status: {}", s)),
        }
    }
}

/// Show status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShowStatus {
    #[default]
    Scheduled,
    Canceled,
}

impl fmt::Display for ShowStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ShowStatus::Scheduled => "Scheduled",
            ShowStatus::Canceled => "Canceled",
        };
        write!(f, "{}", s)
    }
}

impl std::str::FromStr for ShowStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "Scheduled" => Ok(ShowStatus::Scheduled),
            "Canceled" => Ok(ShowStatus::Canceled),
            _ => Err(format!("Unknown show status: {}", s)),
        }
    }
}

/// Enrollment status within one class offering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnrollmentStatus {
    #[default]
    Active,
    Dropped,
    Completed,
}

impl fmt::Display for EnrollmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EnrollmentStatus::Active => "Active",
            EnrollmentStatus::Dropped => "Dropped",
            EnrollmentStatus::Completed => "Completed",
        };
        write!(f, "{}", s)
    }
}

impl std::str::FromStr for EnrollmentStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "Active" => Ok(EnrollmentStatus::Active),
            "Dropped" => Ok(EnrollmentStatus::Dropped),
            "Completed" => Ok(EnrollmentStatus::Completed),
            _ => Err(format!("Unknown enrollment status: {}", s)),
        }
    }
}

/// One row of the master people directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Personnel {
    /// Unique identity key
    #[serde(rename = "PersonnelID")]
    pub personnel_id: i64,

    #[serde(rename = "FirstName", default)]
    pub first_name: String,

    #[serde(rename = "LastName", alias = "Lastname", default)]
    pub last_name: String,

    #[serde(rename = "PrimaryEmail", default, skip_serializing_if = "Option::is_none")]
    pub primary_email: Option<String>,

    #[serde(rename = "PrimaryPhone", default, skip_serializing_if = "Option::is_none")]
    pub primary_phone: Option<String>,

    #[serde(rename = "Instagram", default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,

    /// ISO date string; display formatting degrades to the raw value
    #[serde(rename = "Birthday", default, skip_serializing_if = "Option::is_none")]
    pub birthday: Option<String>,
}

impl Personnel {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

impl Record for Personnel {
    fn entity() -> &'static str {
        "personnel"
    }

    fn identity(&self) -> i64 {
        self.personnel_id
    }

    fn searchable(&self) -> Vec<String> {
        vec![
            self.full_name(),
            self.primary_email.clone().unwrap_or_default(),
            self.primary_phone.clone().unwrap_or_default(),
            self.instagram.clone().unwrap_or_default(),
        ]
    }
}

/// A personnel row joined with its student program record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentRecord {
    #[serde(rename = "StudentID")]
    pub student_id: i64,

    #[serde(rename = "PersonnelID", default)]
    pub personnel_id: i64,

    #[serde(rename = "FirstName", default)]
    pub first_name: String,

    #[serde(rename = "LastName", alias = "Lastname", default)]
    pub last_name: String,

    #[serde(rename = "PrimaryEmail", default, skip_serializing_if = "Option::is_none")]
    pub primary_email: Option<String>,

    #[serde(rename = "PrimaryPhone", default, skip_serializing_if = "Option::is_none")]
    pub primary_phone: Option<String>,

    #[serde(rename = "EnrollmentDate", default, skip_serializing_if = "Option::is_none")]
    pub enrollment_date: Option<String>,

    #[serde(rename = "StudentStatus", default)]
    pub status: StudentStatus,

    #[serde(rename = "CurrentLevel", default, skip_serializing_if = "Option::is_none")]
    pub current_level: Option<i64>,

    #[serde(rename = "CurrentLevelName", default, skip_serializing_if = "Option::is_none")]
    pub current_level_name: Option<String>,

    #[serde(rename = "ClassesCompleted", default, skip_serializing_if = "Option::is_none")]
    pub classes_completed: Option<i64>,

    #[serde(rename = "ActiveEnrollments", default, skip_serializing_if = "Option::is_none")]
    pub active_enrollments: Option<i64>,
}

impl StudentRecord {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

impl Record for StudentRecord {
    fn entity() -> &'static str {
        "student"
    }

    fn identity(&self) -> i64 {
        self.student_id
    }

    fn searchable(&self) -> Vec<String> {
        vec![
            self.full_name(),
            self.primary_email.clone().unwrap_or_default(),
            self.primary_phone.clone().unwrap_or_default(),
            self.current_level_name.clone().unwrap_or_default(),
        ]
    }

    fn facet(&self, name: &str) -> Option<String> {
        match name {
            "status" => Some(self.status.to_string()),
            _ => None,
        }
    }
}

/// A scheduled (or canceled) show, joined with its lookup names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Show {
    #[serde(rename = "ShowID")]
    pub show_id: i64,

    #[serde(rename = "ShowDate", default, skip_serializing_if = "Option::is_none")]
    pub show_date: Option<String>,

    #[serde(rename = "ShowTime", default, skip_serializing_if = "Option::is_none")]
    pub show_time: Option<String>,

    #[serde(rename = "ShowTypeID", default, skip_serializing_if = "Option::is_none")]
    pub show_type_id: Option<i64>,

    #[serde(rename = "DirectorID", default, skip_serializing_if = "Option::is_none")]
    pub director_id: Option<i64>,

    #[serde(rename = "Venue", default)]
    pub venue: String,

    #[serde(rename = "Status", default)]
    pub status: ShowStatus,

    #[serde(rename = "ShowTypeName", default, skip_serializing_if = "Option::is_none")]
    pub show_type_name: Option<String>,

    #[serde(rename = "DirectorName", default, skip_serializing_if = "Option::is_none")]
    pub director_name: Option<String>,
}

impl Record for Show {
    fn entity() -> &'static str {
        "show"
    }

    fn identity(&self) -> i64 {
        self.show_id
    }

    fn searchable(&self) -> Vec<String> {
        vec![
            self.venue.clone(),
            self.show_type_name.clone().unwrap_or_default(),
            self.director_name.clone().unwrap_or_default(),
        ]
    }

    fn facet(&self, name: &str) -> Option<String> {
        match name {
            "status" => Some(self.status.to_string()),
            _ => None,
        }
    }
}

/// A class offering joined with level/teacher names and a live headcount.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassOffering {
    #[serde(rename = "OfferingID")]
    pub offering_id: i64,

    #[serde(rename = "ClassLevelID", default, skip_serializing_if = "Option::is_none")]
    pub class_level_id: Option<i64>,

    #[serde(rename = "StartDate", default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,

    #[serde(rename = "EndDate", default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,

    #[serde(rename = "TeacherPersonnelID", default, skip_serializing_if = "Option::is_none")]
    pub teacher_personnel_id: Option<i64>,

    #[serde(rename = "VenueOrRoom", default, skip_serializing_if = "Option::is_none")]
    pub venue_or_room: Option<String>,

    #[serde(rename = "MaxStudents", default)]
    pub max_students: i64,

    #[serde(rename = "Status", default)]
    pub status: OfferingStatus,

    #[serde(rename = "LevelName", default, skip_serializing_if = "Option::is_none")]
    pub level_name: Option<String>,

    #[serde(rename = "TeacherName", default, skip_serializing_if = "Option::is_none")]
    pub teacher_name: Option<String>,

    /// May exceed `max_students` to signal over-enrollment
    #[serde(rename = "EnrolledCount", default)]
    pub enrolled_count: i64,
}

impl ClassOffering {
    /// Display label: level name when joined, otherwise the raw level ID.
    pub fn label(&self) -> String {
        match (&self.level_name, self.class_level_id) {
            (Some(name), _) => name.clone(),
            (None, Some(id)) => format!("Level {}", id),
            (None, None) => format!("Offering {}", self.offering_id),
        }
    }
}

impl Record for ClassOffering {
    fn entity() -> &'static str {
        "class offering"
    }

    fn identity(&self) -> i64 {
        self.offering_id
    }

    fn searchable(&self) -> Vec<String> {
        vec![
            self.level_name.clone().unwrap_or_default(),
            self.teacher_name.clone().unwrap_or_default(),
            self.venue_or_room.clone().unwrap_or_default(),
        ]
    }

    fn facet(&self, name: &str) -> Option<String> {
        match name {
            "status" => Some(self.status.to_string()),
            _ => None,
        }
    }
}

/// One cast assignment row (person x performance), joined with person
/// details. `Status` is an open string in the sheet, not an enum.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CastAssignment {
    #[serde(rename = "PerformanceID")]
    pub performance_id: i64,

    #[serde(rename = "ShowID", default, skip_serializing_if = "Option::is_none")]
    pub show_id: Option<i64>,

    #[serde(rename = "CastMemberID", default)]
    pub cast_member_id: i64,

    #[serde(rename = "Role", default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    #[serde(rename = "PersonnelID", default, skip_serializing_if = "Option::is_none")]
    pub personnel_id: Option<i64>,

    #[serde(rename = "FullName", default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,

    #[serde(rename = "FirstName", default)]
    pub first_name: String,

    #[serde(rename = "LastName", alias = "Lastname", default)]
    pub last_name: String,

    #[serde(rename = "PrimaryEmail", default, skip_serializing_if = "Option::is_none")]
    pub primary_email: Option<String>,

    #[serde(rename = "PrimaryPhone", default, skip_serializing_if = "Option::is_none")]
    pub primary_phone: Option<String>,

    #[serde(rename = "Birthday", default, skip_serializing_if = "Option::is_none")]
    pub birthday: Option<String>,

    #[serde(rename = "LastShowDate", default, skip_serializing_if = "Option::is_none")]
    pub last_show_date: Option<String>,

    #[serde(rename = "Status", default)]
    pub status: String,
}

impl CastAssignment {
    pub fn display_name(&self) -> String {
        if let Some(full) = &self.full_name {
            if !full.trim().is_empty() {
                return full.clone();
            }
        }
        let joined = format!("{} {}", self.first_name, self.last_name);
        let joined = joined.trim();
        if joined.is_empty() {
            "Unknown".to_string()
        } else {
            joined.to_string()
        }
    }
}

impl Record for CastAssignment {
    fn entity() -> &'static str {
        "cast member"
    }

    fn identity(&self) -> i64 {
        self.performance_id
    }

    fn searchable(&self) -> Vec<String> {
        vec![
            self.display_name(),
            self.primary_email.clone().unwrap_or_default(),
            self.primary_phone.clone().unwrap_or_default(),
        ]
    }

    fn facet(&self, name: &str) -> Option<String> {
        match name {
            "status" => Some(self.status.clone()),
            _ => None,
        }
    }
}

/// One crew duty assignment row (person x show x duty).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrewAssignment {
    #[serde(rename = "DutyID")]
    pub duty_id: i64,

    #[serde(rename = "ShowID", default, skip_serializing_if = "Option::is_none")]
    pub show_id: Option<i64>,

    #[serde(rename = "CrewMemberID", default)]
    pub crew_member_id: i64,

    #[serde(rename = "PersonnelID", default, skip_serializing_if = "Option::is_none")]
    pub personnel_id: Option<i64>,

    #[serde(rename = "FirstName", default)]
    pub first_name: String,

    #[serde(rename = "LastName", alias = "Lastname", default)]
    pub last_name: String,

    #[serde(rename = "PrimaryEmail", default, skip_serializing_if = "Option::is_none")]
    pub primary_email: Option<String>,

    #[serde(rename = "PrimaryPhone", default, skip_serializing_if = "Option::is_none")]
    pub primary_phone: Option<String>,

    /// Missing duty means the row lands in the Unassigned group
    #[serde(rename = "DutyName", default, skip_serializing_if = "Option::is_none")]
    pub duty_name: Option<String>,

    #[serde(rename = "ShowName", default, skip_serializing_if = "Option::is_none")]
    pub show_name: Option<String>,

    #[serde(rename = "ShowDate", default, skip_serializing_if = "Option::is_none")]
    pub show_date: Option<String>,

    #[serde(rename = "LastShowDate", default, skip_serializing_if = "Option::is_none")]
    pub last_show_date: Option<String>,

    #[serde(rename = "Status", default)]
    pub status: String,
}

impl CrewAssignment {
    pub fn display_name(&self) -> String {
        let joined = format!("{} {}", self.first_name, self.last_name);
        let joined = joined.trim();
        if joined.is_empty() {
            "Unknown".to_string()
        } else {
            joined.to_string()
        }
    }
}

impl Record for CrewAssignment {
    fn entity() -> &'static str {
        "crew member"
    }

    fn identity(&self) -> i64 {
        self.duty_id
    }

    fn searchable(&self) -> Vec<String> {
        vec![
            self.display_name(),
            self.primary_email.clone().unwrap_or_default(),
            self.duty_name.clone().unwrap_or_default(),
            self.show_name.clone().unwrap_or_default(),
        ]
    }

    fn facet(&self, name: &str) -> Option<String> {
        match name {
            "duty" => Some(self.duty_name.clone().unwrap_or_default()),
            "status" => Some(self.status.clone()),
            _ => None,
        }
    }
}

/// Bar roster row. `Trained`/`Active` are boolean-like sheet columns and
/// normalize through [`value::flexible_bool`] at deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bartender {
    #[serde(rename = "BartenderID")]
    pub bartender_id: i64,

    #[serde(rename = "PersonnelID", default, skip_serializing_if = "Option::is_none")]
    pub personnel_id: Option<i64>,

    #[serde(rename = "FirstName", default)]
    pub first_name: String,

    #[serde(rename = "LastName", alias = "Lastname", default)]
    pub last_name: String,

    #[serde(rename = "PrimaryEmail", default, skip_serializing_if = "Option::is_none")]
    pub primary_email: Option<String>,

    #[serde(rename = "PrimaryPhone", default, skip_serializing_if = "Option::is_none")]
    pub primary_phone: Option<String>,

    #[serde(rename = "Trained", default, deserialize_with = "value::flexible_bool")]
    pub trained: bool,

    #[serde(rename = "Active", default, deserialize_with = "value::flexible_bool")]
    pub active: bool,

    #[serde(rename = "ShiftCount", default)]
    pub shift_count: i64,

    #[serde(rename = "LastShiftDate", default, skip_serializing_if = "Option::is_none")]
    pub last_shift_date: Option<String>,
}

impl Bartender {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

impl Record for Bartender {
    fn entity() -> &'static str {
        "bartender"
    }

    fn identity(&self) -> i64 {
        self.bartender_id
    }

    fn searchable(&self) -> Vec<String> {
        vec![
            self.full_name(),
            self.primary_email.clone().unwrap_or_default(),
            self.primary_phone.clone().unwrap_or_default(),
        ]
    }
}

/// Prop/equipment inventory row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryItem {
    #[serde(rename = "ItemID")]
    pub item_id: i64,

    #[serde(rename = "ItemName", default)]
    pub item_name: String,

    #[serde(rename = "Category", default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(rename = "Quantity", default)]
    pub quantity: i64,

    #[serde(rename = "Location", default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(rename = "Notes", default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Record for InventoryItem {
    fn entity() -> &'static str {
        "inventory item"
    }

    fn identity(&self) -> i64 {
        self.item_id
    }

    fn searchable(&self) -> Vec<String> {
        vec![
            self.item_name.clone(),
            self.category.clone().unwrap_or_default(),
            self.location.clone().unwrap_or_default(),
            self.notes.clone().unwrap_or_default(),
        ]
    }

    fn facet(&self, name: &str) -> Option<String> {
        match name {
            "category" => Some(self.category.clone().unwrap_or_default()),
            _ => None,
        }
    }
}

/// One enrollment row within a class offering, joined with the student's
/// person details for roster display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enrollment {
    #[serde(rename = "EnrollmentID")]
    pub enrollment_id: i64,

    #[serde(rename = "OfferingID", default, skip_serializing_if = "Option::is_none")]
    pub offering_id: Option<i64>,

    #[serde(rename = "StudentPersonnelID", default, skip_serializing_if = "Option::is_none")]
    pub student_personnel_id: Option<i64>,

    #[serde(rename = "StudentID", default, skip_serializing_if = "Option::is_none")]
    pub student_id: Option<i64>,

    #[serde(rename = "FirstName", default)]
    pub first_name: String,

    #[serde(rename = "LastName", alias = "Lastname", default)]
    pub last_name: String,

    #[serde(rename = "PrimaryEmail", default, skip_serializing_if = "Option::is_none")]
    pub primary_email: Option<String>,

    #[serde(rename = "EnrollmentDate", default, skip_serializing_if = "Option::is_none")]
    pub enrollment_date: Option<String>,

    #[serde(rename = "Status", default)]
    pub status: EnrollmentStatus,

    /// Administrative removals carry the sentinel "ADMIN" and are hidden
    /// from rosters
    #[serde(rename = "CompletionStatus", default, skip_serializing_if = "Option::is_none")]
    pub completion_status: Option<String>,
}

impl Enrollment {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// True for rows removed administratively rather than by the student.
    pub fn is_admin_row(&self) -> bool {
        self.completion_status.as_deref() == Some("ADMIN")
    }
}

impl Record for Enrollment {
    fn entity() -> &'static str {
        "enrollment"
    }

    fn identity(&self) -> i64 {
        self.enrollment_id
    }

    fn searchable(&self) -> Vec<String> {
        vec![
            self.full_name(),
            self.primary_email.clone().unwrap_or_default(),
        ]
    }

    fn facet(&self, name: &str) -> Option<String> {
        match name {
            "status" => Some(self.status.to_string()),
            _ => None,
        }
    }
}

// === Lookup tables ===

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShowType {
    #[serde(rename = "ShowTypeID")]
    pub show_type_id: i64,
    #[serde(rename = "ShowTypeName", default)]
    pub show_type_name: String,
}

impl Record for ShowType {
    fn entity() -> &'static str {
        "show type"
    }

    fn identity(&self) -> i64 {
        self.show_type_id
    }

    fn searchable(&self) -> Vec<String> {
        vec![self.show_type_name.clone()]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassLevel {
    #[serde(rename = "ClassLevelID")]
    pub class_level_id: i64,
    #[serde(rename = "LevelName", default)]
    pub level_name: String,
    #[serde(rename = "Description", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Record for ClassLevel {
    fn entity() -> &'static str {
        "class level"
    }

    fn identity(&self) -> i64 {
        self.class_level_id
    }

    fn searchable(&self) -> Vec<String> {
        vec![
            self.level_name.clone(),
            self.description.clone().unwrap_or_default(),
        ]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrewDutyType {
    #[serde(rename = "CrewDutyTypeID")]
    pub crew_duty_type_id: i64,
    #[serde(rename = "DutyName", default)]
    pub duty_name: String,
}

impl Record for CrewDutyType {
    fn entity() -> &'static str {
        "crew duty type"
    }

    fn identity(&self) -> i64 {
        self.crew_duty_type_id
    }

    fn searchable(&self) -> Vec<String> {
        vec![self.duty_name.clone()]
    }
}

/// Backend-computed dashboard headline counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardStats {
    #[serde(rename = "totalPersonnel", default)]
    pub total_personnel: i64,
    #[serde(rename = "activeStudents", default)]
    pub active_students: i64,
    #[serde(rename = "upcomingShows", default)]
    pub upcoming_shows: i64,
    #[serde(rename = "activeClasses", default)]
    pub active_classes: i64,
}

/// Kind of calendar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Show,
    Class,
}

/// A single calendar entry derived from a show or a class session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    /// ISO date (YYYY-MM-DD)
    pub date: String,
    #[serde(rename = "type")]
    pub kind: EventKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_personnel_roundtrip_uses_sheet_columns() {
        let json = r#"{"PersonnelID":7,"FirstName":"June","LastName":"Vale","PrimaryEmail":"june@troupe.org"}"#;
        let person: Personnel = serde_json::from_str(json).unwrap();
        assert_eq!(person.personnel_id, 7);
        assert_eq!(person.full_name(), "June Vale");

        let out = serde_json::to_value(&person).unwrap();
        assert_eq!(out["PersonnelID"], 7);
        assert_eq!(out["FirstName"], "June");
        assert!(out.get("Instagram").is_none());
    }

    #[test]
    fn test_lastname_alias() {
        let json = r#"{"DutyID":3,"CrewMemberID":9,"FirstName":"Ada","Lastname":"Reyes"}"#;
        let crew: CrewAssignment = serde_json::from_str(json).unwrap();
        assert_eq!(crew.last_name, "Reyes");
        assert_eq!(crew.display_name(), "Ada Reyes");
    }

    #[test]
    fn test_student_status_roundtrip() {
        let status = StudentStatus::Graduated;
        let json = serde_json::to_string(&status).unwrap();
        assert_eq!(json, r#""Graduated""#);
        assert_eq!("Graduated".parse::<StudentStatus>().unwrap(), status);
        assert!("Alumnus".parse::<StudentStatus>().is_err());
    }

    #[test]
    fn test_student_status_all_order() {
        let all = StudentStatus::all();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0], StudentStatus::Active);
        assert_eq!(all[2], StudentStatus::Graduated);
    }

    #[test]
    fn test_bartender_flexible_bools() {
        let json = r#"[
            {"BartenderID":1,"FirstName":"A","LastName":"B","Trained":true,"Active":"true"},
            {"BartenderID":2,"FirstName":"C","LastName":"D","Trained":"1","Active":0},
            {"BartenderID":3,"FirstName":"E","LastName":"F","Active":"false"}
        ]"#;
        let bars: Vec<Bartender> = serde_json::from_str(json).unwrap();
        assert!(bars[0].trained && bars[0].active);
        assert!(bars[1].trained && !bars[1].active);
        assert!(!bars[2].trained && !bars[2].active);
    }

    #[test]
    fn test_cast_display_name_prefers_full_name() {
        let json = r#"{"PerformanceID":4,"CastMemberID":2,"FullName":"Billie Quinn","FirstName":"B","LastName":"Q"}"#;
        let cast: CastAssignment = serde_json::from_str(json).unwrap();
        assert_eq!(cast.display_name(), "Billie Quinn");
    }

    #[test]
    fn test_crew_facets() {
        let json = r#"{"DutyID":1,"CrewMemberID":2,"DutyName":"Lighting","Status":"Active"}"#;
        let crew: CrewAssignment = serde_json::from_str(json).unwrap();
        assert_eq!(crew.facet("duty").as_deref(), Some("Lighting"));
        assert_eq!(crew.facet("status").as_deref(), Some("Active"));
        assert_eq!(crew.facet("venue"), None);
    }

    #[test]
    fn test_crew_missing_duty_is_empty_facet() {
        let json = r#"{"DutyID":1,"CrewMemberID":2}"#;
        let crew: CrewAssignment = serde_json::from_str(json).unwrap();
        assert_eq!(crew.facet("duty").as_deref(), Some(""));
    }

    #[test]
    fn test_enrollment_admin_row() {
        let json = r#"{"EnrollmentID":5,"FirstName":"X","LastName":"Y","CompletionStatus":"ADMIN"}"#;
        let row: Enrollment = serde_json::from_str(json).unwrap();
        assert!(row.is_admin_row());
        assert_eq!(row.status, EnrollmentStatus::Active);
    }

    #[test]
    fn test_offering_label_fallbacks() {
        let with_name: ClassOffering =
            serde_json::from_str(r#"{"OfferingID":1,"LevelName":"Beginner"}"#).unwrap();
        assert_eq!(with_name.label(), "Beginner");

        let with_level: ClassOffering =
            serde_json::from_str(r#"{"OfferingID":2,"ClassLevelID":3}"#).unwrap();
        assert_eq!(with_level.label(), "Level 3");

        let bare: ClassOffering = serde_json::from_str(r#"{"OfferingID":9}"#).unwrap();
        assert_eq!(bare.label(), "Offering 9");
    }

    #[test]
    fn test_dashboard_stats_camel_case() {
        let json = r#"{"totalPersonnel":40,"activeStudents":25,"upcomingShows":3,"activeClasses":4}"#;
        let stats: DashboardStats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.total_personnel, 40);
        assert_eq!(stats.active_classes, 4);
    }

    #[test]
    fn test_calendar_event_kind_serialization() {
        let event = CalendarEvent {
            id: "show-1".to_string(),
            title: "Improv Night - Main Stage".to_string(),
            date: "2025-03-14".to_string(),
            kind: EventKind::Show,
        };
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["type"], "show");
    }
}
