//! Schedule deriver: records → time-of-day buckets.

use tracing::debug;

use crate::models::{DoseSlots, MedicineRecord, Schedule, TimeOfDay};

/// Derive a schedule from records, preserving record order in each bucket.
///
/// Records with a malformed frequency code contribute to no bucket.
pub fn derive_schedule(records: &[MedicineRecord]) -> Schedule {
    let mut morning = Vec::new();
    let mut afternoon = Vec::new();
    let mut night = Vec::new();

    for record in records {
        let Some(slots) = record.dose_slots() else {
            debug!(
                medicine = record.name(),
                code = record.frequency_code(),
                "unrecognized frequency code, not scheduled"
            );
            continue;
        };

        for time in slots.active_times() {
            let bucket = match time {
                TimeOfDay::Morning => &mut morning,
                TimeOfDay::Afternoon => &mut afternoon,
                TimeOfDay::Night => &mut night,
            };
            bucket.push(record.display_line());
        }
    }

    Schedule::from_buckets(morning, afternoon, night)
}

/// Explain a frequency code in plain language.
pub fn describe_frequency(code: &str) -> String {
    match DoseSlots::parse(code.trim()) {
        Some(slots) => slots.describe(),
        None => format!(
            "\"{}\" is not a recognized dosage pattern (expected something like 1-0-1).",
            code.trim()
        ),
    }
}
