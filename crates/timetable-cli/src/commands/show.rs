//! Day agenda and week grid rendering.

use chrono::{Datelike, Local};
use clap::Subcommand;
use timetable_core::{time, ClassEntry, Config, DisplayWindow, Weekday};

#[derive(Subcommand)]
pub enum ShowAction {
    /// Agenda for one day (today by default)
    Day {
        /// Weekday, e.g. monday
        day: Option<Weekday>,
    },
    /// Full week grid
    Week,
}

fn display_window(config: &Config) -> DisplayWindow {
    DisplayWindow::new(
        config.display.window_start_hour,
        config.display.window_end_hour,
    )
    .unwrap_or_default()
}

fn time_range(entry: &ClassEntry) -> String {
    format!("{} - {}", entry.start_time, entry.end_time)
}

fn render_day(day: Weekday, entries: &[ClassEntry], window: &DisplayWindow) {
    println!("{}", day.display_name());
    if entries.is_empty() {
        println!("  (no classes)");
        return;
    }

    let mut sorted = entries.to_vec();
    sorted.sort_by_key(|e| time::parse_to_minutes(&e.start_time).unwrap_or(0));

    for entry in &sorted {
        let mut line = format!("  {}  {}", time_range(entry), entry.name);
        if let Some(location) = &entry.location {
            line.push_str(&format!(" @ {location}"));
        }
        if let Some(instructor) = &entry.instructor {
            line.push_str(&format!(" ({instructor})"));
        }
        println!("{line}");
    }

    if let Ok(blocks) = window.day_layout(&sorted) {
        let hours: f64 = blocks.iter().map(|b| f64::from(b.height) / 60.0).sum();
        println!("  {} classes, {:.1} hours", sorted.len(), hours);
    }
}

pub fn run(action: ShowAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = super::open_store()?;
    let config = Config::load_or_default();
    let window = display_window(&config);

    match action {
        ShowAction::Day { day } => {
            let day = day.unwrap_or_else(|| Weekday::from(Local::now().weekday()));
            render_day(day, &store.find_by_day(day), &window);
        }
        ShowAction::Week => {
            let today = Weekday::from(Local::now().weekday());
            for (day, entries) in store.find_by_week() {
                if day == today {
                    println!("--- today ---");
                }
                render_day(day, &entries, &window);
                println!();
            }
        }
    }
    Ok(())
}
