//! # Timetable Core Library
//!
//! Core business logic for the Timetable weekly class-schedule manager.
//! All operations are available through this library; the CLI binary is a
//! thin presentation layer over the same types.
//!
//! ## Architecture
//!
//! - **ScheduleStore**: owns the class collection, enforces the same-day
//!   no-overlap invariant, persists through a pluggable adapter
//! - **Time utilities**: "HH:MM" parsing, durations, grid offsets
//! - **Statistics**: counts, weekly hours, and next-class lookup as pure
//!   functions of a snapshot plus an instant
//! - **Storage**: file-backed persistence adapter and TOML configuration
//!
//! ## Key Components
//!
//! - [`ScheduleStore`]: canonical entry collection
//! - [`ClassEntry`] / [`ClassEntryDraft`]: the schedule data model
//! - [`DisplayWindow`]: grid layout geometry
//! - [`Config`]: application configuration management

pub mod day;
pub mod entry;
pub mod error;
pub mod layout;
pub mod stats;
pub mod storage;
pub mod store;
pub mod time;

pub use day::Weekday;
pub use entry::{random_color, ClassEntry, ClassEntryDraft, COLOR_PALETTE};
pub use error::{ConfigError, CoreError, PersistenceError, ScheduleError, TimeError};
pub use layout::{DisplayWindow, LayoutBlock};
pub use stats::ScheduleStats;
pub use storage::{Config, FileStore, MemoryStore, PersistenceAdapter};
pub use store::ScheduleStore;
