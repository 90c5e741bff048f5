//! Derived schedule statistics.
//!
//! Pure functions of an entry snapshot plus an instant. The periodic
//! once-per-minute refresh simply re-invokes [`snapshot`]; nothing here
//! mutates the store.

use chrono::{DateTime, Datelike, Local, Timelike};
use serde::{Deserialize, Serialize};

use crate::day::Weekday;
use crate::entry::ClassEntry;
use crate::time;

/// Aggregate figures for the stats panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleStats {
    pub total_classes: usize,
    pub today_classes: usize,
    /// Raw sum of class durations in hours; round only for display.
    pub weekly_hours: f64,
    /// Start time of the next class later today, if any.
    pub next_class: Option<String>,
}

impl ScheduleStats {
    /// Weekly hours rounded to the nearest integer, as shown in the panel.
    pub fn weekly_hours_display(&self) -> i64 {
        self.weekly_hours.round() as i64
    }
}

/// Compute all statistics as of `now`.
pub fn snapshot(entries: &[ClassEntry], now: DateTime<Local>) -> ScheduleStats {
    let today = Weekday::from(now.weekday());
    let minutes_now = now.hour() * 60 + now.minute();
    ScheduleStats {
        total_classes: total_classes(entries),
        today_classes: today_classes(entries, today),
        weekly_hours: weekly_hours(entries),
        next_class: next_class(entries, today, minutes_now),
    }
}

/// Size of the full collection.
pub fn total_classes(entries: &[ClassEntry]) -> usize {
    entries.len()
}

/// Count of entries falling on `today`.
pub fn today_classes(entries: &[ClassEntry], today: Weekday) -> usize {
    entries.iter().filter(|e| e.day == today).count()
}

/// Sum of all class durations in hours.
///
/// Stored entries already satisfy start < end, so an unparseable or
/// inverted pair only ever appears through hand-edited persistence; such
/// entries contribute nothing.
pub fn weekly_hours(entries: &[ClassEntry]) -> f64 {
    entries
        .iter()
        .filter_map(|e| time::duration_minutes(&e.start_time, &e.end_time).ok())
        .filter(|&d| d > 0)
        .map(|d| f64::from(d) / 60.0)
        .sum()
}

/// Start time of the earliest class strictly after `minutes_now` on `today`.
///
/// Today-only on purpose: classes on later days are never considered, so
/// after the last class of the day this reports `None` even when tomorrow
/// has entries.
pub fn next_class(entries: &[ClassEntry], today: Weekday, minutes_now: u32) -> Option<String> {
    entries
        .iter()
        .filter(|e| e.day == today)
        .filter_map(|e| {
            let start = time::parse_to_minutes(&e.start_time).ok()?;
            (start > minutes_now).then(|| (start, e.start_time.clone()))
        })
        .min_by_key(|(start, _)| *start)
        .map(|(_, start_time)| start_time)
}
