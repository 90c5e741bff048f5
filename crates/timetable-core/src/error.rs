//! Core error types for timetable-core.
//!
//! This module defines the error hierarchy using thiserror. Validation
//! failures are returned to the caller as typed results; the core never
//! aborts the process.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for timetable-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Time parsing errors
    #[error("Time error: {0}")]
    Time(#[from] TimeError),

    /// Schedule validation errors
    #[error("Schedule error: {0}")]
    Schedule(#[from] ScheduleError),

    /// Persistence-related errors
    #[error("Persistence error: {0}")]
    Persistence(#[from] PersistenceError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Time-string parsing errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeError {
    /// The string does not parse as "HH:MM" with in-range components
    #[error("Invalid time format: '{0}' is not a valid HH:MM time")]
    InvalidFormat(String),
}

/// Schedule validation errors.
///
/// All of these are recovered at the `upsert`/`delete_by_id` boundary and
/// reported to the caller for user-facing presentation.
#[derive(Error, Debug)]
pub enum ScheduleError {
    /// End time is not strictly after start time
    #[error("Invalid time range: end time ({end}) must be after start time ({start})")]
    InvalidTimeRange { start: String, end: String },

    /// Overlapping interval on the same day
    #[error("Time conflict with existing class '{name}' ({start} - {end})")]
    TimeConflict {
        name: String,
        start: String,
        end: String,
    },

    /// Required display name is missing
    #[error("Class name must not be empty")]
    EmptyName,

    /// Malformed start or end time on the draft
    #[error("Time error: {0}")]
    Time(#[from] TimeError),

    /// The backing store rejected a write
    #[error("Persistence error: {0}")]
    Persistence(#[from] PersistenceError),
}

/// Persistence adapter errors.
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// Failed to load the serialized collection
    #[error("Failed to load schedule from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save the serialized collection
    #[error("Failed to save schedule to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Adapter failure without a filesystem location
    #[error("Store failure: {0}")]
    StoreFailed(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
