//! Prescription-text interpreter.
//!
//! Pipeline: Tokenizer → Record Builder → Schedule Deriver → Advisories

mod builder;
mod scheduler;
mod tokenizer;

pub use builder::*;
pub use scheduler::*;
pub use tokenizer::*;

use chrono::NaiveDate;
use tracing::{debug, trace};

use crate::advisory::{self, AdvisoryCatalog};
use crate::models::{MedicineRecord, Schedule};
use crate::report::MedicationPlan;

/// Outcome for one non-empty input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine {
    Record(MedicineRecord),
    Skipped(SkippedLine),
}

/// Lazily parse text into per-line outcomes.
pub fn parse_lines(text: &str) -> impl Iterator<Item = ParsedLine> + '_ {
    tokenize(text).map(|line| {
        let parsed = match line {
            TokenizedLine::Skipped(skipped) => ParsedLine::Skipped(skipped),
            TokenizedLine::Fields(group) => match build_record(&group) {
                Ok(record) => ParsedLine::Record(record),
                Err(reason) => ParsedLine::Skipped(SkippedLine {
                    line_number: group.line_number,
                    text: group.text,
                    reason,
                }),
            },
        };

        match &parsed {
            ParsedLine::Record(record) => {
                trace!(medicine = record.name(), "parsed prescription line")
            }
            ParsedLine::Skipped(skipped) => debug!(
                line = skipped.line_number,
                reason = %skipped.reason,
                "skipping prescription line"
            ),
        }

        parsed
    })
}

/// Parse text into records, dropping lines that do not form a record.
pub fn parse_prescription(text: &str) -> Vec<MedicineRecord> {
    parse_lines(text)
        .filter_map(|line| match line {
            ParsedLine::Record(record) => Some(record),
            ParsedLine::Skipped(_) => None,
        })
        .collect()
}

/// Interpreter bound to an advisory catalog.
///
/// Holds no state besides the catalog; every method is a pure function of
/// its arguments.
#[derive(Debug, Clone, Default)]
pub struct Interpreter {
    catalog: AdvisoryCatalog,
}

impl Interpreter {
    /// Create an interpreter with the built-in catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an interpreter with a custom catalog.
    pub fn with_catalog(catalog: AdvisoryCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &AdvisoryCatalog {
        &self.catalog
    }

    pub fn parse(&self, text: &str) -> Vec<MedicineRecord> {
        parse_prescription(text)
    }

    pub fn derive_schedule(&self, records: &[MedicineRecord]) -> Schedule {
        derive_schedule(records)
    }

    pub fn generate_nudges(&self, records: &[MedicineRecord]) -> Vec<String> {
        advisory::generate_nudges(records, &self.catalog.nudges)
    }

    pub fn check_advisory_warnings(&self, schedule: &Schedule) -> Vec<String> {
        advisory::check_advisory_warnings(schedule, &self.catalog.warnings)
    }

    pub fn daily_motivation(&self, date: NaiveDate) -> String {
        advisory::daily_motivation(date, &self.catalog.motivation).to_string()
    }

    /// Run the whole pipeline for one prescription text.
    pub fn plan(&self, text: &str, date: NaiveDate) -> MedicationPlan {
        let mut records = Vec::new();
        let mut skipped = Vec::new();
        for line in parse_lines(text) {
            match line {
                ParsedLine::Record(record) => records.push(record),
                ParsedLine::Skipped(line) => skipped.push(line),
            }
        }

        let schedule = self.derive_schedule(&records);
        let nudges = self.generate_nudges(&records);
        let warnings = self.check_advisory_warnings(&schedule);

        debug!(
            records = records.len(),
            skipped = skipped.len(),
            doses = schedule.total_doses(),
            warnings = warnings.len(),
            "built medication plan"
        );

        MedicationPlan::new(
            records,
            skipped,
            schedule,
            nudges,
            warnings,
            self.catalog.missed_dose_note.clone(),
            self.daily_motivation(date),
        )
    }
}
