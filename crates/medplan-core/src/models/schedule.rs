//! Daily schedule model.

use serde::Serialize;

use super::TimeOfDay;

/// Display lines bucketed by time of day.
///
/// Serializes as `{"Morning": [...], "Afternoon": [...], "Night": [...]}`.
/// A schedule is never edited after it is built; derive a new one when the
/// records change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Schedule {
    #[serde(rename = "Morning")]
    morning: Vec<String>,
    #[serde(rename = "Afternoon")]
    afternoon: Vec<String>,
    #[serde(rename = "Night")]
    night: Vec<String>,
}

impl Schedule {
    /// Build a schedule from already-filled buckets.
    pub fn from_buckets(morning: Vec<String>, afternoon: Vec<String>, night: Vec<String>) -> Self {
        Self {
            morning,
            afternoon,
            night,
        }
    }

    /// Entries for one time of day.
    pub fn bucket(&self, time: TimeOfDay) -> &[String] {
        match time {
            TimeOfDay::Morning => &self.morning,
            TimeOfDay::Afternoon => &self.afternoon,
            TimeOfDay::Night => &self.night,
        }
    }

    /// Buckets in display order: Morning, Afternoon, Night.
    pub fn iter(&self) -> impl Iterator<Item = (TimeOfDay, &[String])> + '_ {
        TimeOfDay::ALL.into_iter().map(move |t| (t, self.bucket(t)))
    }

    /// Total scheduled doses across all buckets.
    pub fn total_doses(&self) -> usize {
        self.iter().map(|(_, entries)| entries.len()).sum()
    }

    /// Number of buckets with at least one entry.
    pub fn active_buckets(&self) -> usize {
        self.iter().filter(|(_, entries)| !entries.is_empty()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.total_doses() == 0
    }
}
