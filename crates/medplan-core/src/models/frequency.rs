//! Frequency codes and times of day.
//!
//! A frequency code is three `0`/`1` slots joined by hyphens, read as
//! Morning-Afternoon-Night. `1-0-1` means morning and night.

use std::fmt;

/// Fixed time-of-day slots, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Night,
}

impl TimeOfDay {
    /// All slots in display order.
    pub const ALL: [TimeOfDay; 3] = [TimeOfDay::Morning, TimeOfDay::Afternoon, TimeOfDay::Night];

    /// Display label ("Morning", "Afternoon", "Night").
    pub fn label(&self) -> &'static str {
        match self {
            TimeOfDay::Morning => "Morning",
            TimeOfDay::Afternoon => "Afternoon",
            TimeOfDay::Night => "Night",
        }
    }

    /// Phrase used in plain-language explanations.
    fn phrase(&self) -> &'static str {
        match self {
            TimeOfDay::Morning => "in the morning",
            TimeOfDay::Afternoon => "in the afternoon",
            TimeOfDay::Night => "at night",
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Active dose slots parsed from a frequency code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DoseSlots {
    pub morning: bool,
    pub afternoon: bool,
    pub night: bool,
}

impl DoseSlots {
    /// Parse a code of the form `a-b-c` with each slot `0` or `1`.
    ///
    /// Anything else (wrong slot count, other digits, spaces inside the
    /// code) returns `None`.
    pub fn parse(code: &str) -> Option<Self> {
        let mut slots = [false; 3];
        let mut parts = code.split('-');

        for slot in slots.iter_mut() {
            *slot = match parts.next()? {
                "0" => false,
                "1" => true,
                _ => return None,
            };
        }

        if parts.next().is_some() {
            return None;
        }

        Some(Self {
            morning: slots[0],
            afternoon: slots[1],
            night: slots[2],
        })
    }

    /// Whether the given time of day is active.
    pub fn includes(&self, time: TimeOfDay) -> bool {
        match time {
            TimeOfDay::Morning => self.morning,
            TimeOfDay::Afternoon => self.afternoon,
            TimeOfDay::Night => self.night,
        }
    }

    /// Active times of day, in display order.
    pub fn active_times(&self) -> Vec<TimeOfDay> {
        TimeOfDay::ALL
            .into_iter()
            .filter(|t| self.includes(*t))
            .collect()
    }

    /// Plain-language explanation, e.g. "Take in the morning and at night."
    pub fn describe(&self) -> String {
        let phrases: Vec<&str> = self.active_times().iter().map(|t| t.phrase()).collect();

        match phrases.as_slice() {
            [] => "No scheduled dose time in this pattern.".to_string(),
            [only] => format!("Take {}.", only),
            [first, second] => format!("Take {} and {}.", first, second),
            [init @ .., last] => format!("Take {}, and {}.", init.join(", "), last),
        }
    }
}
