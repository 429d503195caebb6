//! Development bridge: an in-memory dataset with full CRUD semantics.
//!
//! Mirrors the live backend closely enough that every command can run
//! against it, including the endpoints that nest their list payload one
//! level deep. Integration tests run entirely against this bridge.

use std::sync::Mutex;

use serde_json::{Value, json};

use super::{Bridge, Envelope};
use crate::{Error, Result};

/// In-memory bridge seeded with a small deterministic troupe dataset.
pub struct MockBridge {
    data: Mutex<MockData>,
}

struct MockData {
    personnel: Vec<Value>,
    students: Vec<Value>,
    shows: Vec<Value>,
    classes: Vec<Value>,
    cast: Vec<Value>,
    crew: Vec<Value>,
    bartenders: Vec<Value>,
    inventory: Vec<Value>,
    enrollments: Vec<Value>,
    show_types: Vec<Value>,
    class_levels: Vec<Value>,
    duty_types: Vec<Value>,
}

impl Default for MockBridge {
    fn default() -> Self {
        Self::new()
    }
}

impl MockBridge {
    pub fn new() -> Self {
        Self {
            data: Mutex::new(MockData::seed()),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, MockData>> {
        self.data
            .lock()
            .map_err(|_| Error::Other("mock dataset lock poisoned".to_string()))
    }
}

impl Bridge for MockBridge {
    fn call(&self, operation: &str, args: Value) -> Result<Envelope> {
        tracing::debug!(operation, "mock bridge call");
        let mut data = self.lock()?;
        Ok(data.dispatch(operation, args))
    }

    fn location(&self) -> String {
        "in-memory mock dataset".to_string()
    }

    fn kind(&self) -> &'static str {
        "mock"
    }
}

/// Largest value of `key` across `rows`, plus one.
fn next_id(rows: &[Value], key: &str) -> i64 {
    rows.iter()
        .filter_map(|row| row.get(key).and_then(Value::as_i64))
        .max()
        .unwrap_or(0)
        + 1
}

fn find_index(rows: &[Value], key: &str, id: i64) -> Option<usize> {
    rows.iter()
        .position(|row| row.get(key).and_then(Value::as_i64) == Some(id))
}

fn as_id(args: &Value) -> Option<i64> {
    args.as_i64()
}

fn str_field(row: &Value, key: &str) -> String {
    row.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

impl MockData {
    fn dispatch(&mut self, operation: &str, args: Value) -> Envelope {
        match operation {
            // === List fetches ===
            "getAllPersonnel" => Envelope::ok(json!(self.personnel)),
            "getAllStudentsWithDetails" => Envelope::ok(json!(self.students)),
            "getAllShows" => Envelope::ok(json!(self.shows)),
            "getAllClasses" => Envelope::ok(json!(self.classes)),
            "getBartendersWithDetails" => Envelope::ok(json!(self.bartenders)),
            "getAllInventory" => Envelope::ok(json!(self.inventory)),
            // These two endpoints nest their payload one level deep,
            // matching the live backend's inconsistency
            "getAllCastMembers" => Envelope::ok(json!({ "data": self.cast })),
            "getAllCrewMembers" => Envelope::ok(json!({ "data": self.crew })),

            // === Lookups ===
            "getAllShowTypes" => Envelope::ok(json!(self.show_types)),
            "getAllClassLevels" => Envelope::ok(json!(self.class_levels)),
            "getAllCrewDutyTypes" => Envelope::ok(json!(self.duty_types)),

            "getDashboardStats" => self.dashboard_stats(),

            // === Personnel CRUD ===
            "createPersonnel" => self.create(args, "PersonnelID", Collection::Personnel),
            "updatePersonnel" => self.update(args, "PersonnelID", Collection::Personnel),
            "deletePersonnel" => self.delete(args, "PersonnelID", Collection::Personnel),

            // === Show CRUD ===
            "createShow" => self.create(args, "ShowID", Collection::Shows),
            "updateShow" => self.update(args, "ShowID", Collection::Shows),
            "deleteShow" => self.delete(args, "ShowID", Collection::Shows),

            // === Class CRUD ===
            "createClassOffering" => self.create(args, "OfferingID", Collection::Classes),
            "updateClass" => self.update(args, "OfferingID", Collection::Classes),
            "deleteClass" => self.delete(args, "OfferingID", Collection::Classes),

            // === Inventory CRUD ===
            "createInventoryItem" => self.create(args, "ItemID", Collection::Inventory),
            "updateInventoryItem" => self.update(args, "ItemID", Collection::Inventory),
            "deleteInventoryItem" => self.delete(args, "ItemID", Collection::Inventory),

            // === Roster mutations ===
            "addPersonAsCrewMember" => self.add_crew_member(args),
            "removeCrewMember" => self.remove_crew_member(args),
            "addPersonAsBartender" => self.add_bartender(args),
            "removeBartender" => self.delete(args, "BartenderID", Collection::Bartenders),

            // === Enrollment ===
            "getEnrolledStudents" => self.enrolled_students(args),
            "enrollStudent" => self.enroll_student(args),
            "removeStudentFromClass" => self.delete(args, "EnrollmentID", Collection::Enrollments),
            "updateEnrollmentStatus" => self.update_enrollment_status(args),

            // Unknown operations resolve with an empty list
            _ => Envelope::ok(json!([])),
        }
    }

    fn rows_mut(&mut self, collection: Collection) -> &mut Vec<Value> {
        match collection {
            Collection::Personnel => &mut self.personnel,
            Collection::Shows => &mut self.shows,
            Collection::Classes => &mut self.classes,
            Collection::Inventory => &mut self.inventory,
            Collection::Bartenders => &mut self.bartenders,
            Collection::Enrollments => &mut self.enrollments,
        }
    }

    fn create(&mut self, args: Value, key: &str, collection: Collection) -> Envelope {
        let Value::Object(mut payload) = args else {
            return Envelope::fail("Malformed create payload");
        };
        let rows = self.rows_mut(collection);
        let id = next_id(rows, key);
        payload.insert(key.to_string(), json!(id));
        let record = Value::Object(payload);
        rows.push(record.clone());
        Envelope::ok(record)
    }

    fn update(&mut self, args: Value, key: &str, collection: Collection) -> Envelope {
        let Some(id) = args.get(key).and_then(Value::as_i64) else {
            return Envelope::fail(format!("Missing {}", key));
        };
        let rows = self.rows_mut(collection);
        match find_index(rows, key, id) {
            Some(index) => {
                rows[index] = args.clone();
                Envelope::ok(args)
            }
            None => Envelope::fail(format!("Record not found: {} {}", key, id)),
        }
    }

    fn delete(&mut self, args: Value, key: &str, collection: Collection) -> Envelope {
        let Some(id) = as_id(&args) else {
            return Envelope::fail(format!("Missing {}", key));
        };
        let rows = self.rows_mut(collection);
        match find_index(rows, key, id) {
            Some(index) => {
                rows.remove(index);
                Envelope::ok(json!({ "deleted": true }))
            }
            None => Envelope::fail(format!("Record not found: {} {}", key, id)),
        }
    }

    fn dashboard_stats(&self) -> Envelope {
        let active_students = self
            .students
            .iter()
            .filter(|s| s.get("StudentStatus").and_then(Value::as_str) == Some("Active"))
            .count();
        let upcoming_shows = self
            .shows
            .iter()
            .filter(|s| s.get("Status").and_then(Value::as_str) == Some("Scheduled"))
            .count();
        let active_classes = self
            .classes
            .iter()
            .filter(|c| c.get("Status").and_then(Value::as_str) == Some("Open"))
            .count();
        Envelope::ok(json!({
            "totalPersonnel": self.personnel.len(),
            "activeStudents": active_students,
            "upcomingShows": upcoming_shows,
            "activeClasses": active_classes,
        }))
    }

    fn add_crew_member(&mut self, args: Value) -> Envelope {
        let Some(personnel_id) = as_id(&args) else {
            return Envelope::fail("Missing personnel ID");
        };
        let Some(index) = find_index(&self.personnel, "PersonnelID", personnel_id) else {
            return Envelope::fail(format!("Personnel not found: {}", personnel_id));
        };
        let person = self.personnel[index].clone();
        let row = json!({
            "DutyID": next_id(&self.crew, "DutyID"),
            "CrewMemberID": next_id(&self.crew, "CrewMemberID"),
            "PersonnelID": personnel_id,
            "FirstName": str_field(&person, "FirstName"),
            "LastName": str_field(&person, "LastName"),
            "PrimaryEmail": str_field(&person, "PrimaryEmail"),
            "PrimaryPhone": str_field(&person, "PrimaryPhone"),
            "Status": "Active",
        });
        self.crew.push(row.clone());
        Envelope::ok(row)
    }

    fn remove_crew_member(&mut self, args: Value) -> Envelope {
        let Some(crew_member_id) = as_id(&args) else {
            return Envelope::fail("Missing crew member ID");
        };
        let before = self.crew.len();
        self.crew
            .retain(|row| row.get("CrewMemberID").and_then(Value::as_i64) != Some(crew_member_id));
        if self.crew.len() == before {
            Envelope::fail(format!("Crew member not found: {}", crew_member_id))
        } else {
            Envelope::ok(json!({ "deleted": true }))
        }
    }

    fn add_bartender(&mut self, args: Value) -> Envelope {
        let Some(personnel_id) = args.get("personnelId").and_then(Value::as_i64) else {
            return Envelope::fail("Missing personnel ID");
        };
        let trained = args
            .get("trained")
            .and_then(Value::as_bool)
            .unwrap_or(false);
        let Some(index) = find_index(&self.personnel, "PersonnelID", personnel_id) else {
            return Envelope::fail(format!("Personnel not found: {}", personnel_id));
        };
        let person = self.personnel[index].clone();
        let row = json!({
            "BartenderID": next_id(&self.bartenders, "BartenderID"),
            "PersonnelID": personnel_id,
            "FirstName": str_field(&person, "FirstName"),
            "LastName": str_field(&person, "LastName"),
            "PrimaryEmail": str_field(&person, "PrimaryEmail"),
            "PrimaryPhone": str_field(&person, "PrimaryPhone"),
            "Trained": trained,
            "Active": true,
            "ShiftCount": 0,
        });
        self.bartenders.push(row.clone());
        Envelope::ok(row)
    }

    fn enrolled_students(&self, args: Value) -> Envelope {
        let Some(offering_id) = as_id(&args) else {
            return Envelope::fail("Missing offering ID");
        };
        let rows: Vec<&Value> = self
            .enrollments
            .iter()
            .filter(|row| row.get("OfferingID").and_then(Value::as_i64) == Some(offering_id))
            .collect();
        Envelope::ok(json!(rows))
    }

    fn enroll_student(&mut self, args: Value) -> Envelope {
        let offering_id = args.get("offeringId").and_then(Value::as_i64);
        let student_id = args.get("studentId").and_then(Value::as_i64);
        let (Some(offering_id), Some(student_id)) = (offering_id, student_id) else {
            return Envelope::fail("Missing offering or student ID");
        };
        if find_index(&self.classes, "OfferingID", offering_id).is_none() {
            return Envelope::fail(format!("Class offering not found: {}", offering_id));
        }
        let Some(index) = find_index(&self.personnel, "PersonnelID", student_id) else {
            return Envelope::fail(format!("Student not found: {}", student_id));
        };
        let person = self.personnel[index].clone();
        let row = json!({
            "EnrollmentID": next_id(&self.enrollments, "EnrollmentID"),
            "OfferingID": offering_id,
            "StudentPersonnelID": student_id,
            "FirstName": str_field(&person, "FirstName"),
            "LastName": str_field(&person, "LastName"),
            "PrimaryEmail": str_field(&person, "PrimaryEmail"),
            "EnrollmentDate": "2025-01-06",
            "Status": "Active",
        });
        self.enrollments.push(row.clone());
        Envelope::ok(row)
    }

    fn update_enrollment_status(&mut self, args: Value) -> Envelope {
        let enrollment_id = args.get("enrollmentId").and_then(Value::as_i64);
        let status = args.get("status").and_then(Value::as_str);
        let (Some(enrollment_id), Some(status)) = (enrollment_id, status) else {
            return Envelope::fail("Missing enrollment ID or status");
        };
        match find_index(&self.enrollments, "EnrollmentID", enrollment_id) {
            Some(index) => {
                self.enrollments[index]["Status"] = json!(status);
                Envelope::ok(self.enrollments[index].clone())
            }
            None => Envelope::fail(format!("Enrollment not found: {}", enrollment_id)),
        }
    }

    fn seed() -> Self {
        Self {
            personnel: vec![
                json!({"PersonnelID": 1, "FirstName": "John", "LastName": "Doe", "PrimaryEmail": "john.doe@email.com", "PrimaryPhone": "555-0123", "Instagram": "@johndoe", "Birthday": "1990-01-15"}),
                json!({"PersonnelID": 2, "FirstName": "Jane", "LastName": "Smith", "PrimaryEmail": "jane.smith@email.com", "PrimaryPhone": "555-0124", "Instagram": "@janesmith", "Birthday": "1988-06-22"}),
                json!({"PersonnelID": 3, "FirstName": "Marcus", "LastName": "Lee", "PrimaryEmail": "marcus.lee@email.com", "PrimaryPhone": "555-0125"}),
                json!({"PersonnelID": 4, "FirstName": "Priya", "LastName": "Patel", "PrimaryEmail": "priya.patel@email.com", "PrimaryPhone": "555-0126"}),
                json!({"PersonnelID": 5, "FirstName": "Sam", "LastName": "Okafor", "PrimaryEmail": "sam.okafor@email.com"}),
            ],
            students: vec![
                json!({"StudentID": 1, "PersonnelID": 1, "FirstName": "John", "LastName": "Doe", "PrimaryEmail": "john.doe@email.com", "EnrollmentDate": "2024-09-01", "StudentStatus": "Active", "CurrentLevel": 1, "CurrentLevelName": "Beginner"}),
                json!({"StudentID": 2, "PersonnelID": 2, "FirstName": "Jane", "LastName": "Smith", "PrimaryEmail": "jane.smith@email.com", "EnrollmentDate": "2024-09-01", "StudentStatus": "Active", "CurrentLevel": 2, "CurrentLevelName": "Intermediate"}),
                json!({"StudentID": 3, "PersonnelID": 3, "FirstName": "Marcus", "LastName": "Lee", "PrimaryEmail": "marcus.lee@email.com", "EnrollmentDate": "2023-09-01", "StudentStatus": "Graduated", "CurrentLevel": 2, "CurrentLevelName": "Intermediate"}),
            ],
            shows: vec![
                json!({"ShowID": 1, "ShowDate": "2024-12-15", "ShowTime": "19:30", "ShowTypeID": 1, "DirectorID": 1, "Venue": "Main Theater", "Status": "Scheduled", "ShowTypeName": "Improv Show"}),
                json!({"ShowID": 2, "ShowDate": "2025-01-10", "ShowTime": "20:00", "ShowTypeID": 2, "DirectorID": 2, "Venue": "Annex Stage", "Status": "Scheduled", "ShowTypeName": "Sketch Comedy"}),
            ],
            classes: vec![
                json!({"OfferingID": 1, "ClassLevelID": 1, "StartDate": "2025-01-06", "EndDate": "2025-02-10", "TeacherPersonnelID": 2, "VenueOrRoom": "Studio A", "MaxStudents": 12, "Status": "Open", "LevelName": "Beginner", "TeacherName": "Jane Smith", "EnrolledCount": 8}),
                json!({"OfferingID": 2, "ClassLevelID": 2, "StartDate": "2025-01-08", "EndDate": "2025-02-12", "TeacherPersonnelID": 2, "VenueOrRoom": "Studio B", "MaxStudents": 12, "Status": "Open", "LevelName": "Intermediate", "TeacherName": "Jane Smith", "EnrolledCount": 14}),
            ],
            cast: vec![
                json!({"PerformanceID": 1, "ShowID": 1, "CastMemberID": 21, "Role": "Ensemble", "PersonnelID": 1, "FullName": "John Doe", "FirstName": "John", "Lastname": "Doe", "PrimaryEmail": "john.doe@email.com", "PrimaryPhone": "555-0123", "LastShowDate": "2024-12-15", "Status": "Active"}),
                json!({"PerformanceID": 2, "ShowID": 2, "CastMemberID": 22, "Role": "Host", "PersonnelID": 2, "FullName": "Jane Smith", "FirstName": "Jane", "Lastname": "Smith", "PrimaryEmail": "jane.smith@email.com", "PrimaryPhone": "555-0124", "LastShowDate": "2025-01-10", "Status": "Active"}),
            ],
            crew: vec![
                json!({"DutyID": 1, "ShowID": 1, "CrewMemberID": 11, "PersonnelID": 1, "FirstName": "John", "LastName": "Doe", "PrimaryEmail": "john.doe@email.com", "DutyName": "Lighting", "ShowName": "Winter Improv", "ShowDate": "2024-12-15", "Status": "Active"}),
                json!({"DutyID": 2, "ShowID": 1, "CrewMemberID": 12, "PersonnelID": 2, "FirstName": "Jane", "LastName": "Smith", "PrimaryEmail": "jane.smith@email.com", "DutyName": "Sound", "ShowName": "Winter Improv", "ShowDate": "2024-12-15", "Status": "Active"}),
                json!({"DutyID": 3, "ShowID": 2, "CrewMemberID": 13, "PersonnelID": 3, "FirstName": "Marcus", "LastName": "Lee", "PrimaryEmail": "marcus.lee@email.com", "DutyName": "Lighting", "ShowName": "Sketch Night", "ShowDate": "2025-01-10", "Status": "Active"}),
                json!({"DutyID": 4, "ShowID": 2, "CrewMemberID": 14, "PersonnelID": 4, "FirstName": "Priya", "LastName": "Patel", "PrimaryEmail": "priya.patel@email.com", "ShowName": "Sketch Night", "ShowDate": "2025-01-10", "Status": "Active"}),
            ],
            bartenders: vec![
                json!({"BartenderID": 1, "PersonnelID": 1, "FirstName": "John", "LastName": "Doe", "PrimaryEmail": "john.doe@email.com", "Trained": true, "Active": "true", "ShiftCount": 12, "LastShiftDate": "2024-12-15"}),
                json!({"BartenderID": 2, "PersonnelID": 4, "FirstName": "Priya", "LastName": "Patel", "PrimaryEmail": "priya.patel@email.com", "Trained": "1", "Active": 0, "ShiftCount": 3, "LastShiftDate": "2024-10-02"}),
                json!({"BartenderID": 3, "PersonnelID": 5, "FirstName": "Sam", "LastName": "Okafor", "PrimaryEmail": "sam.okafor@email.com", "Active": "false", "ShiftCount": 0}),
            ],
            inventory: vec![
                json!({"ItemID": 1, "ItemName": "Microphone", "Category": "Audio Equipment", "Quantity": 5, "Location": "Storage Room A", "Notes": "Wireless mics for performances"}),
                json!({"ItemID": 2, "ItemName": "Fog Machine", "Category": "Effects", "Quantity": 1, "Location": "Backstage"}),
                json!({"ItemID": 3, "ItemName": "Top Hat", "Category": "Costumes", "Quantity": 4, "Location": "Wardrobe"}),
            ],
            enrollments: vec![
                json!({"EnrollmentID": 101, "OfferingID": 1, "StudentPersonnelID": 1, "FirstName": "John", "LastName": "Doe", "PrimaryEmail": "john.doe@email.com", "EnrollmentDate": "2025-01-06", "Status": "Active"}),
                json!({"EnrollmentID": 102, "OfferingID": 1, "StudentPersonnelID": 2, "FirstName": "Jane", "LastName": "Smith", "PrimaryEmail": "jane.smith@email.com", "EnrollmentDate": "2025-01-06", "Status": "Active"}),
                json!({"EnrollmentID": 103, "OfferingID": 1, "StudentPersonnelID": 3, "FirstName": "Marcus", "LastName": "Lee", "PrimaryEmail": "marcus.lee@email.com", "EnrollmentDate": "2025-01-06", "Status": "Dropped", "CompletionStatus": "ADMIN"}),
            ],
            show_types: vec![
                json!({"ShowTypeID": 1, "ShowTypeName": "Improv Show"}),
                json!({"ShowTypeID": 2, "ShowTypeName": "Sketch Comedy"}),
            ],
            class_levels: vec![
                json!({"ClassLevelID": 1, "LevelName": "Beginner", "Description": "Introduction to Improv"}),
                json!({"ClassLevelID": 2, "LevelName": "Intermediate", "Description": "Building Improv Skills"}),
            ],
            duty_types: vec![
                json!({"CrewDutyTypeID": 1, "DutyName": "Lighting"}),
                json!({"CrewDutyTypeID": 2, "DutyName": "Sound"}),
                json!({"CrewDutyTypeID": 3, "DutyName": "Stage Manager"}),
            ],
        }
    }
}

#[derive(Clone, Copy)]
enum Collection {
    Personnel,
    Shows,
    Classes,
    Inventory,
    Bartenders,
    Enrollments,
}
