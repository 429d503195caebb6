//! Greenroom CLI - theater troupe administration from the command line.

use clap::Parser;
use std::process;

use greenroom::cli::{
    BartenderCommands, CastCommands, Cli, ClassCommands, Commands, CrewCommands,
    InventoryCommands, PersonnelCommands, ShowCommands, StudentCommands,
};
use greenroom::commands::{self, Output};
use greenroom::config::{self, SourceKind};
use greenroom::models::EnrollmentStatus;
use greenroom::source::{Bridge, HttpBridge, MockBridge};

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let human = cli.human_readable;

    let bridge = match build_bridge(cli.source, cli.endpoint) {
        Ok(bridge) => bridge,
        Err(error) => {
            report_error(&error, human);
            process::exit(1);
        }
    };

    if let Err(error) = run_command(cli.command, bridge.as_ref(), human) {
        report_error(&error, human);
        process::exit(1);
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_env("GR_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Resolve the configured data source and build the matching bridge.
fn build_bridge(
    source: Option<SourceKind>,
    endpoint: Option<String>,
) -> greenroom::Result<Box<dyn Bridge>> {
    let resolved = config::resolve(source, endpoint)?;
    tracing::debug!(source = %resolved.source, "data source resolved");
    Ok(match resolved.source {
        SourceKind::Mock => Box::new(MockBridge::new()),
        SourceKind::Live => Box::new(HttpBridge::new(resolved.endpoint.unwrap_or_default())),
    })
}

fn report_error(error: &greenroom::Error, human: bool) {
    if human {
        eprintln!("Error: {}", error);
    } else {
        eprintln!("{}", serde_json::json!({ "error": error.to_string() }));
    }
}

/// Print output in JSON or human-readable format.
fn output<T: Output>(result: &T, human: bool) {
    if human {
        println!("{}", result.to_human());
    } else {
        println!("{}", result.to_json());
    }
}

fn run_command(
    command: Commands,
    bridge: &dyn Bridge,
    human: bool,
) -> Result<(), greenroom::Error> {
    match command {
        Commands::Dashboard => {
            let result = commands::dashboard::dashboard(bridge)?;
            output(&result, human);
        }

        Commands::Schedule => {
            let result = commands::schedule::schedule(bridge)?;
            output(&result, human);
        }

        Commands::Personnel { command } => match command {
            PersonnelCommands::List { search } => {
                let result = commands::personnel::list(bridge, search.as_deref())?;
                output(&result, human);
            }
            PersonnelCommands::Show { id } => {
                let result = commands::personnel::show(bridge, id)?;
                output(&result, human);
            }
            PersonnelCommands::Create {
                first_name,
                last_name,
                email,
                phone,
                instagram,
                birthday,
            } => {
                let result = commands::personnel::create(
                    bridge, first_name, last_name, email, phone, instagram, birthday,
                )?;
                output(&result, human);
            }
            PersonnelCommands::Update {
                id,
                first_name,
                last_name,
                email,
                phone,
                instagram,
                birthday,
            } => {
                let result = commands::personnel::update(
                    bridge, id, first_name, last_name, email, phone, instagram, birthday,
                )?;
                output(&result, human);
            }
            PersonnelCommands::Delete { id, yes } => {
                let result = commands::personnel::delete(bridge, id, yes)?;
                output(&result, human);
            }
        },

        Commands::Students { command } => match command {
            StudentCommands::List { search, status } => {
                let result =
                    commands::students::list(bridge, search.as_deref(), status.as_deref())?;
                output(&result, human);
            }
        },

        Commands::Cast { command } => match command {
            CastCommands::List { search } => {
                let result = commands::cast::list(bridge, search.as_deref())?;
                output(&result, human);
            }
        },

        Commands::Crew { command } => match command {
            CrewCommands::List {
                search,
                duty,
                by_duty,
            } => {
                if by_duty {
                    let result = commands::crew::grouped(bridge, search.as_deref())?;
                    output(&result, human);
                } else {
                    let result =
                        commands::crew::list(bridge, search.as_deref(), duty.as_deref())?;
                    output(&result, human);
                }
            }
            CrewCommands::Add { person } => {
                let result = commands::crew::add(bridge, person)?;
                output(&result, human);
            }
            CrewCommands::Remove {
                crew_member_id,
                yes,
            } => {
                let result = commands::crew::remove(bridge, crew_member_id, yes)?;
                output(&result, human);
            }
            CrewCommands::Duties => {
                let result = commands::crew::duties(bridge)?;
                output(&result, human);
            }
        },

        Commands::Bartenders { command } => match command {
            BartenderCommands::List { search } => {
                let result = commands::bartenders::list(bridge, search.as_deref())?;
                output(&result, human);
            }
            BartenderCommands::Add { person, trained } => {
                let result = commands::bartenders::add(bridge, person, trained)?;
                output(&result, human);
            }
            BartenderCommands::Remove { id, yes } => {
                let result = commands::bartenders::remove(bridge, id, yes)?;
                output(&result, human);
            }
        },

        Commands::Classes { command } => match command {
            ClassCommands::List { search, status } => {
                let result =
                    commands::classes::list(bridge, search.as_deref(), status.as_deref())?;
                output(&result, human);
            }
            ClassCommands::Show { id } => {
                let result = commands::classes::show(bridge, id)?;
                output(&result, human);
            }
            ClassCommands::Create {
                level,
                start,
                end,
                teacher,
                room,
                max_students,
            } => {
                let result = commands::classes::create(
                    bridge, level, start, end, teacher, room, max_students,
                )?;
                output(&result, human);
            }
            ClassCommands::Update {
                id,
                start,
                end,
                teacher,
                room,
                max_students,
                status,
            } => {
                let result = commands::classes::update(
                    bridge, id, start, end, teacher, room, max_students, status,
                )?;
                output(&result, human);
            }
            ClassCommands::Delete { id, yes } => {
                let result = commands::classes::delete(bridge, id, yes)?;
                output(&result, human);
            }
            ClassCommands::Roster { offering_id } => {
                let result = commands::classes::roster(bridge, offering_id)?;
                output(&result, human);
            }
            ClassCommands::Enroll {
                offering_id,
                student,
            } => {
                let result = commands::classes::enroll(bridge, offering_id, student)?;
                output(&result, human);
            }
            ClassCommands::Drop { enrollment_id, yes } => {
                let result = commands::classes::drop(bridge, enrollment_id, yes)?;
                output(&result, human);
            }
            ClassCommands::SetStatus {
                enrollment_id,
                status,
            } => {
                let status = status
                    .parse::<EnrollmentStatus>()
                    .map_err(greenroom::Error::InvalidInput)?;
                let result = commands::classes::set_status(bridge, enrollment_id, status)?;
                output(&result, human);
            }
            ClassCommands::Levels => {
                let result = commands::classes::levels(bridge)?;
                output(&result, human);
            }
        },

        Commands::Shows { command } => match command {
            ShowCommands::List { search, status } => {
                let result =
                    commands::shows::list(bridge, search.as_deref(), status.as_deref())?;
                output(&result, human);
            }
            ShowCommands::Create {
                date,
                time,
                show_type,
                director,
                venue,
            } => {
                let result =
                    commands::shows::create(bridge, date, time, show_type, director, venue)?;
                output(&result, human);
            }
            ShowCommands::Update {
                id,
                date,
                time,
                venue,
                status,
            } => {
                let result = commands::shows::update(bridge, id, date, time, venue, status)?;
                output(&result, human);
            }
            ShowCommands::Delete { id, yes } => {
                let result = commands::shows::delete(bridge, id, yes)?;
                output(&result, human);
            }
            ShowCommands::Types => {
                let result = commands::shows::types(bridge)?;
                output(&result, human);
            }
        },

        Commands::Inventory { command } => match command {
            InventoryCommands::List { search, category } => {
                let result =
                    commands::inventory::list(bridge, search.as_deref(), category.as_deref())?;
                output(&result, human);
            }
            InventoryCommands::Create {
                name,
                category,
                quantity,
                location,
                notes,
            } => {
                let result =
                    commands::inventory::create(bridge, name, category, quantity, location, notes)?;
                output(&result, human);
            }
            InventoryCommands::Update {
                id,
                name,
                category,
                quantity,
                location,
                notes,
            } => {
                let result = commands::inventory::update(
                    bridge, id, name, category, quantity, location, notes,
                )?;
                output(&result, human);
            }
            InventoryCommands::Delete { id, yes } => {
                let result = commands::inventory::delete(bridge, id, yes)?;
                output(&result, human);
            }
        },
    }

    Ok(())
}
