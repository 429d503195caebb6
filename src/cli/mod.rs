//! CLI argument definitions for the `gr` binary.

use clap::{Parser, Subcommand};

use crate::config::SourceKind;

#[derive(Parser)]
#[command(
    name = "gr",
    version,
    about = "Theater troupe administration from the command line"
)]
pub struct Cli {
    /// Output in human-readable format instead of JSON
    #[arg(short = 'H', long, global = true)]
    pub human_readable: bool,

    /// Data source backing this invocation
    #[arg(long, global = true, env = "GR_SOURCE", value_enum)]
    pub source: Option<SourceKind>,

    /// Remote bridge endpoint URL (implies the live source)
    #[arg(long, global = true, env = "GR_ENDPOINT")]
    pub endpoint: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Headline stats and class enrollment fill
    Dashboard,

    /// Calendar of shows and weekly class sessions
    Schedule,

    /// Personnel directory
    Personnel {
        #[command(subcommand)]
        command: PersonnelCommands,
    },

    /// Student directory
    Students {
        #[command(subcommand)]
        command: StudentCommands,
    },

    /// Cast directory
    Cast {
        #[command(subcommand)]
        command: CastCommands,
    },

    /// Crew directory and roster
    Crew {
        #[command(subcommand)]
        command: CrewCommands,
    },

    /// Bartender roster
    Bartenders {
        #[command(subcommand)]
        command: BartenderCommands,
    },

    /// Class offerings and enrollment
    Classes {
        #[command(subcommand)]
        command: ClassCommands,
    },

    /// Show directory
    Shows {
        #[command(subcommand)]
        command: ShowCommands,
    },

    /// Prop and equipment inventory
    Inventory {
        #[command(subcommand)]
        command: InventoryCommands,
    },
}

#[derive(Subcommand)]
pub enum PersonnelCommands {
    /// List personnel
    List {
        /// Free-text search over name, email, phone, and Instagram
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Show one person
    Show { id: i64 },
    /// Add a person to the directory
    Create {
        first_name: String,
        last_name: String,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        instagram: Option<String>,
        /// ISO date (YYYY-MM-DD)
        #[arg(long)]
        birthday: Option<String>,
    },
    /// Update a person; unset fields keep their value
    Update {
        id: i64,
        #[arg(long)]
        first_name: Option<String>,
        #[arg(long)]
        last_name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        instagram: Option<String>,
        #[arg(long)]
        birthday: Option<String>,
    },
    /// Delete a person (requires --yes)
    Delete {
        id: i64,
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum StudentCommands {
    /// List students with a status breakdown
    List {
        #[arg(short, long)]
        search: Option<String>,
        /// Filter by status (Active, Inactive, Graduated, or all)
        #[arg(long)]
        status: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum CastCommands {
    /// List cast assignments
    List {
        #[arg(short, long)]
        search: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum CrewCommands {
    /// List crew assignments
    List {
        #[arg(short, long)]
        search: Option<String>,
        /// Filter by duty name (or all)
        #[arg(long)]
        duty: Option<String>,
        /// Group the output by duty type
        #[arg(long)]
        by_duty: bool,
    },
    /// Add personnel to the crew roster
    Add {
        /// Personnel ID to add; repeat for a batch
        #[arg(long = "person", required = true)]
        person: Vec<i64>,
    },
    /// Remove a crew member (requires --yes)
    Remove {
        crew_member_id: i64,
        /// Confirm the removal
        #[arg(long)]
        yes: bool,
    },
    /// List crew duty types
    Duties,
}

#[derive(Subcommand)]
pub enum BartenderCommands {
    /// List the bar roster
    List {
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Add personnel to the bar roster
    Add {
        /// Personnel ID to add; repeat for a batch
        #[arg(long = "person", required = true)]
        person: Vec<i64>,
        /// Mark the added bartenders as trained
        #[arg(long)]
        trained: bool,
    },
    /// Remove a bartender (requires --yes)
    Remove {
        id: i64,
        /// Confirm the removal
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum ClassCommands {
    /// List class offerings with enrollment fill
    List {
        #[arg(short, long)]
        search: Option<String>,
        /// Filter by status (Open, Full, Completed, or all)
        #[arg(long)]
        status: Option<String>,
    },
    /// Show one offering
    Show { id: i64 },
    /// Create a class offering
    Create {
        /// Class level ID
        #[arg(long)]
        level: i64,
        /// ISO start date
        #[arg(long)]
        start: Option<String>,
        /// ISO end date
        #[arg(long)]
        end: Option<String>,
        /// Teacher personnel ID
        #[arg(long)]
        teacher: Option<i64>,
        #[arg(long)]
        room: Option<String>,
        #[arg(long, default_value_t = 12)]
        max_students: i64,
    },
    /// Update an offering; unset fields keep their value
    Update {
        id: i64,
        #[arg(long)]
        start: Option<String>,
        #[arg(long)]
        end: Option<String>,
        #[arg(long)]
        teacher: Option<i64>,
        #[arg(long)]
        room: Option<String>,
        #[arg(long)]
        max_students: Option<i64>,
        #[arg(long)]
        status: Option<String>,
    },
    /// Delete an offering (requires --yes)
    Delete {
        id: i64,
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
    /// List the enrolled roster for an offering
    Roster { offering_id: i64 },
    /// Enroll students into an offering
    Enroll {
        offering_id: i64,
        /// Student personnel ID to enroll; repeat for a batch
        #[arg(long = "student", required = true)]
        student: Vec<i64>,
    },
    /// Remove an enrollment from its class (requires --yes)
    Drop {
        enrollment_id: i64,
        /// Confirm the removal
        #[arg(long)]
        yes: bool,
    },
    /// Change an enrollment's status
    SetStatus {
        enrollment_id: i64,
        /// Active, Dropped, or Completed
        status: String,
    },
    /// List class levels
    Levels,
}

#[derive(Subcommand)]
pub enum ShowCommands {
    /// List shows
    List {
        #[arg(short, long)]
        search: Option<String>,
        /// Filter by status (Scheduled, Canceled, or all)
        #[arg(long)]
        status: Option<String>,
    },
    /// Schedule a show
    Create {
        /// ISO show date
        #[arg(long)]
        date: String,
        #[arg(long)]
        time: Option<String>,
        /// Show type ID
        #[arg(long)]
        show_type: Option<i64>,
        /// Director personnel ID
        #[arg(long)]
        director: Option<i64>,
        #[arg(long)]
        venue: String,
    },
    /// Update a show; unset fields keep their value
    Update {
        id: i64,
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        time: Option<String>,
        #[arg(long)]
        venue: Option<String>,
        #[arg(long)]
        status: Option<String>,
    },
    /// Delete a show (requires --yes)
    Delete {
        id: i64,
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
    /// List show types
    Types,
}

#[derive(Subcommand)]
pub enum InventoryCommands {
    /// List inventory items
    List {
        #[arg(short, long)]
        search: Option<String>,
        /// Filter by category (or all)
        #[arg(long)]
        category: Option<String>,
    },
    /// Add an item
    Create {
        name: String,
        #[arg(long)]
        category: Option<String>,
        #[arg(long, default_value_t = 1)]
        quantity: i64,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Update an item; unset fields keep their value
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        quantity: Option<i64>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Delete an item (requires --yes)
    Delete {
        id: i64,
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
}
