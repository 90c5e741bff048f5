//! Class entry data model.

use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::day::Weekday;

/// Fixed palette a new class is colored from when the user does not pick
/// a color themselves.
pub const COLOR_PALETTE: [&str; 7] = [
    "#4CAF50", "#2196F3", "#FF9800", "#9C27B0", "#F44336", "#00BCD4", "#795548",
];

/// Pick a random palette color.
pub fn random_color() -> String {
    let mut rng = rand::thread_rng();
    COLOR_PALETTE
        .choose(&mut rng)
        .unwrap_or(&COLOR_PALETTE[0])
        .to_string()
}

/// One recurring weekly class occurrence.
///
/// Field names are camelCase on the wire so the persisted JSON blob keeps
/// the stable encoding (`startTime`, `endTime`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassEntry {
    /// Opaque unique identifier, assigned at creation, immutable.
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub instructor: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    pub day: Weekday,
    /// Wall-clock "HH:MM", 24-hour.
    pub start_time: String,
    /// Wall-clock "HH:MM", 24-hour; strictly after `start_time`.
    pub end_time: String,
    /// Display color token (hex code or any string the view accepts).
    pub color: String,
}

/// A draft entry as submitted by the view layer.
///
/// Same shape as [`ClassEntry`] but `id` is absent for new entries and
/// `color` falls back to a random palette pick.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassEntryDraft {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub instructor: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    pub day: Weekday,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub color: Option<String>,
}

impl Default for ClassEntryDraft {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            instructor: None,
            location: None,
            notes: None,
            day: Weekday::Monday,
            start_time: String::new(),
            end_time: String::new(),
            color: None,
        }
    }
}

impl ClassEntryDraft {
    /// Materialize the draft into a stored entry under the given id.
    pub(crate) fn into_entry(self, id: String) -> ClassEntry {
        ClassEntry {
            id,
            name: self.name,
            instructor: self.instructor,
            location: self.location,
            notes: self.notes,
            day: self.day,
            start_time: self.start_time,
            end_time: self.end_time,
            color: self.color.unwrap_or_else(random_color),
        }
    }
}
