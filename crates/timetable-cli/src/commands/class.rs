//! Class management commands for CLI.

use clap::Subcommand;
use timetable_core::{ClassEntryDraft, Weekday};

#[derive(Subcommand)]
pub enum ClassAction {
    /// Add a new class
    Add {
        /// Class name
        name: String,
        /// Weekday, e.g. monday
        #[arg(long)]
        day: Weekday,
        /// Start time, 24-hour HH:MM
        #[arg(long)]
        start: String,
        /// End time, 24-hour HH:MM
        #[arg(long)]
        end: String,
        /// Instructor name
        #[arg(long)]
        instructor: Option<String>,
        /// Room or building
        #[arg(long)]
        location: Option<String>,
        /// Free-form notes
        #[arg(long)]
        notes: Option<String>,
        /// Display color (defaults to a random palette pick)
        #[arg(long)]
        color: Option<String>,
    },
    /// Replace an existing class by id
    Update {
        /// Class ID
        id: String,
        /// Class name
        name: String,
        /// Weekday, e.g. monday
        #[arg(long)]
        day: Weekday,
        /// Start time, 24-hour HH:MM
        #[arg(long)]
        start: String,
        /// End time, 24-hour HH:MM
        #[arg(long)]
        end: String,
        /// Instructor name
        #[arg(long)]
        instructor: Option<String>,
        /// Room or building
        #[arg(long)]
        location: Option<String>,
        /// Free-form notes
        #[arg(long)]
        notes: Option<String>,
        /// Display color
        #[arg(long)]
        color: Option<String>,
    },
    /// Get class details
    Get {
        /// Class ID
        id: String,
    },
    /// List all classes
    List,
    /// Delete a class
    Delete {
        /// Class ID
        id: String,
    },
}

pub fn run(action: ClassAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = super::open_store()?;

    match action {
        ClassAction::Add {
            name,
            day,
            start,
            end,
            instructor,
            location,
            notes,
            color,
        } => {
            let entry = store.upsert(ClassEntryDraft {
                id: None,
                name,
                instructor,
                location,
                notes,
                day,
                start_time: start,
                end_time: end,
                color,
            })?;
            println!("Class added: {}", entry.id);
            println!("{}", serde_json::to_string_pretty(&entry)?);
        }
        ClassAction::Update {
            id,
            name,
            day,
            start,
            end,
            instructor,
            location,
            notes,
            color,
        } => {
            let entry = store.upsert(ClassEntryDraft {
                id: Some(id),
                name,
                instructor,
                location,
                notes,
                day,
                start_time: start,
                end_time: end,
                color,
            })?;
            println!("Class updated: {}", entry.id);
            println!("{}", serde_json::to_string_pretty(&entry)?);
        }
        ClassAction::Get { id } => match store.find_by_id(&id) {
            Some(entry) => println!("{}", serde_json::to_string_pretty(&entry)?),
            None => return Err(format!("no class with id '{id}'").into()),
        },
        ClassAction::List => {
            println!("{}", serde_json::to_string_pretty(&store.all())?);
        }
        ClassAction::Delete { id } => {
            if store.delete_by_id(&id)? {
                println!("Class deleted: {id}");
            } else {
                println!("No class with id '{id}'");
            }
        }
    }
    Ok(())
}
