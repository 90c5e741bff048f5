//! Canonical class-entry collection with validation and conflict checks.
//!
//! The store is the sole owner of the collection. Every mutation validates
//! the draft, enforces the same-day no-overlap invariant, and persists the
//! whole collection through the [`PersistenceAdapter`] before returning.
//! Callers re-fetch after mutating; query results are snapshots.

use std::collections::BTreeMap;

use uuid::Uuid;

use crate::day::Weekday;
use crate::entry::{ClassEntry, ClassEntryDraft};
use crate::error::ScheduleError;
use crate::storage::PersistenceAdapter;
use crate::time;

/// Owner of the weekly schedule.
pub struct ScheduleStore<P: PersistenceAdapter> {
    entries: Vec<ClassEntry>,
    persistence: P,
}

impl<P: PersistenceAdapter> ScheduleStore<P> {
    /// Build a store from whatever the adapter has saved.
    ///
    /// An absent or unparseable blob initializes an empty collection; a
    /// broken local store should not lock the user out of their schedule.
    pub fn load(persistence: P) -> Result<Self, ScheduleError> {
        let entries = match persistence.load()? {
            Some(blob) => serde_json::from_str(&blob).unwrap_or_default(),
            None => Vec::new(),
        };
        Ok(Self {
            entries,
            persistence,
        })
    }

    /// Insert a new entry or replace an existing one by id.
    ///
    /// Validation order: non-empty name, parseable times, start strictly
    /// before end (compared as minutes, not strings), then the same-day
    /// half-open overlap scan. On success the full collection is persisted
    /// and the stored entry is returned.
    pub fn upsert(&mut self, draft: ClassEntryDraft) -> Result<ClassEntry, ScheduleError> {
        if draft.name.trim().is_empty() {
            return Err(ScheduleError::EmptyName);
        }

        let start = time::parse_to_minutes(&draft.start_time)?;
        let end = time::parse_to_minutes(&draft.end_time)?;
        if start >= end {
            return Err(ScheduleError::InvalidTimeRange {
                start: draft.start_time.clone(),
                end: draft.end_time.clone(),
            });
        }

        if let Some(existing) = self.find_conflict(&draft, start, end)? {
            return Err(ScheduleError::TimeConflict {
                name: existing.name.clone(),
                start: existing.start_time.clone(),
                end: existing.end_time.clone(),
            });
        }

        let existing_slot = draft
            .id
            .as_deref()
            .and_then(|id| self.entries.iter().position(|e| e.id == id));

        let entry = match existing_slot {
            Some(index) => {
                let id = self.entries[index].id.clone();
                let entry = draft.into_entry(id);
                self.entries[index] = entry.clone();
                entry
            }
            None => {
                // Unknown or absent id: mint a fresh one and append.
                let entry = draft.into_entry(Uuid::new_v4().to_string());
                self.entries.push(entry.clone());
                entry
            }
        };

        self.persist()?;
        Ok(entry)
    }

    /// Remove the entry with the given id.
    ///
    /// Returns whether a removal occurred; an unknown id is a no-op that
    /// returns `Ok(false)` without touching the adapter.
    pub fn delete_by_id(&mut self, id: &str) -> Result<bool, ScheduleError> {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        if self.entries.len() == before {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    /// Entry lookup by id.
    pub fn find_by_id(&self, id: &str) -> Option<ClassEntry> {
        self.entries.iter().find(|e| e.id == id).cloned()
    }

    /// All entries on one day, unordered; sort by start time for display.
    pub fn find_by_day(&self, day: Weekday) -> Vec<ClassEntry> {
        self.entries.iter().filter(|e| e.day == day).cloned().collect()
    }

    /// Entries for all seven days, keyed in Sunday-first grid order.
    /// Days without classes map to an empty sequence.
    pub fn find_by_week(&self) -> BTreeMap<Weekday, Vec<ClassEntry>> {
        Weekday::ALL
            .iter()
            .map(|&day| (day, self.find_by_day(day)))
            .collect()
    }

    /// Full collection snapshot.
    pub fn all(&self) -> Vec<ClassEntry> {
        self.entries.clone()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Half-open interval scan against same-day entries, skipping the entry
    /// being replaced. Touching endpoints do not conflict.
    fn find_conflict(
        &self,
        draft: &ClassEntryDraft,
        start: u32,
        end: u32,
    ) -> Result<Option<&ClassEntry>, ScheduleError> {
        for existing in &self.entries {
            if draft.id.as_deref() == Some(existing.id.as_str()) {
                continue;
            }
            if existing.day != draft.day {
                continue;
            }
            let existing_start = time::parse_to_minutes(&existing.start_time)?;
            let existing_end = time::parse_to_minutes(&existing.end_time)?;
            if start < existing_end && end > existing_start {
                return Ok(Some(existing));
            }
        }
        Ok(None)
    }

    fn persist(&self) -> Result<(), ScheduleError> {
        let blob = serde_json::to_string(&self.entries)
            .map_err(|e| crate::error::PersistenceError::StoreFailed(e.to_string()))?;
        self.persistence.save(&blob)?;
        Ok(())
    }
}
