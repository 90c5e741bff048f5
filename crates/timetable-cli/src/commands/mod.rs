pub mod class;
pub mod config;
pub mod show;
pub mod stats;

use timetable_core::{FileStore, ScheduleStore};

/// Open the schedule over the default on-disk store.
pub fn open_store() -> Result<ScheduleStore<FileStore>, Box<dyn std::error::Error>> {
    let adapter = FileStore::open()?;
    Ok(ScheduleStore::load(adapter)?)
}
