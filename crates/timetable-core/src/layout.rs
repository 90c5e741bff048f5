//! Grid layout for the day and week views.
//!
//! The view draws class blocks on a fixed hour window (08:00-20:00 by
//! default) at one pixel per minute: a block's top edge is the offset of
//! its start time from the window start, its height is its duration.

use serde::{Deserialize, Serialize};

use crate::entry::ClassEntry;
use crate::error::TimeError;
use crate::time;

/// The fixed hour range the grid renders.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DisplayWindow {
    /// First hour shown (inclusive).
    pub start_hour: u32,
    /// Last labeled hour (inclusive).
    pub end_hour: u32,
}

impl Default for DisplayWindow {
    fn default() -> Self {
        Self {
            start_hour: 8,
            end_hour: 20,
        }
    }
}

/// Computed position of one class block, in minutes == pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutBlock {
    pub entry_id: String,
    /// Offset of the top edge from the window start; negative when the
    /// class starts before the window.
    pub top: i32,
    pub height: i32,
}

impl DisplayWindow {
    /// Window with validated hour bounds.
    pub fn new(start_hour: u32, end_hour: u32) -> Option<Self> {
        if start_hour >= end_hour || end_hour > 23 {
            return None;
        }
        Some(Self {
            start_hour,
            end_hour,
        })
    }

    /// 12-hour label for every whole hour in the window, inclusive.
    pub fn hour_labels(&self) -> Vec<String> {
        (self.start_hour..=self.end_hour)
            .map(|hour| time::format_display(hour, 0))
            .collect()
    }

    /// Position one entry on the grid.
    pub fn block(&self, entry: &ClassEntry) -> Result<LayoutBlock, TimeError> {
        let top = time::display_offset(&entry.start_time, self.start_hour)?;
        let height = time::duration_minutes(&entry.start_time, &entry.end_time)?;
        Ok(LayoutBlock {
            entry_id: entry.id.clone(),
            top,
            height,
        })
    }

    /// Blocks for one day's entries, sorted chronologically.
    ///
    /// Display order is derived here; the store keeps entries unordered.
    pub fn day_layout(&self, entries: &[ClassEntry]) -> Result<Vec<LayoutBlock>, TimeError> {
        let mut blocks = entries
            .iter()
            .map(|e| self.block(e))
            .collect::<Result<Vec<_>, _>>()?;
        blocks.sort_by_key(|b| b.top);
        Ok(blocks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::day::Weekday;

    fn entry(id: &str, start: &str, end: &str) -> ClassEntry {
        ClassEntry {
            id: id.into(),
            name: "Class".into(),
            instructor: None,
            location: None,
            notes: None,
            day: Weekday::Monday,
            start_time: start.into(),
            end_time: end.into(),
            color: "#2196F3".into(),
        }
    }

    #[test]
    fn default_window_is_8_to_20() {
        let w = DisplayWindow::default();
        assert_eq!(w.start_hour, 8);
        assert_eq!(w.end_hour, 20);
    }

    #[test]
    fn rejects_inverted_window() {
        assert!(DisplayWindow::new(20, 8).is_none());
        assert!(DisplayWindow::new(8, 8).is_none());
        assert!(DisplayWindow::new(8, 24).is_none());
    }

    #[test]
    fn hour_labels_cover_window_inclusive() {
        let labels = DisplayWindow::default().hour_labels();
        assert_eq!(labels.len(), 13);
        assert_eq!(labels.first().map(String::as_str), Some("8:00 AM"));
        assert_eq!(labels.last().map(String::as_str), Some("8:00 PM"));
    }

    #[test]
    fn block_position_is_minutes_from_window_start() {
        let w = DisplayWindow::default();
        let b = w.block(&entry("a", "09:30", "11:00")).unwrap();
        assert_eq!(b.top, 90);
        assert_eq!(b.height, 90);
    }

    #[test]
    fn day_layout_sorts_chronologically() {
        let w = DisplayWindow::default();
        let blocks = w
            .day_layout(&[
                entry("late", "14:00", "15:00"),
                entry("early", "08:00", "09:00"),
            ])
            .unwrap();
        assert_eq!(blocks[0].entry_id, "early");
        assert_eq!(blocks[1].entry_id, "late");
    }
}
