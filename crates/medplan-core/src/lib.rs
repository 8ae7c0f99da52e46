//! MedPlan Core Library
//!
//! Stateless interpreter that turns free-text prescriptions into a daily
//! medication schedule plus supportive messaging.
//!
//! # Architecture
//!
//! ```text
//! Prescription text (typed or OCR'd by the caller)
//!         │
//!         ▼
//!   Line Tokenizer ──► skipped lines (reported, never fatal)
//!         │
//!         ▼
//!   Record Builder ──► MedicineRecord[]
//!         │
//!         ├───────────────────────┐
//!         ▼                       ▼
//!   Schedule Deriver          Nudges
//!   (Morning/Afternoon/Night)
//!         │
//!         ▼
//!   Safety Warnings          Daily Motivation (date only)
//! ```
//!
//! # Core Principle
//!
//! **Bad input never fails.** Malformed lines are skipped and malformed
//! frequency codes schedule nothing; the result is only emptier.
//!
//! # Modules
//!
//! - [`models`]: Domain types (MedicineRecord, DoseSlots, Schedule)
//! - [`interpreter`]: Tokenizer, record builder and schedule deriver
//! - [`advisory`]: Nudges, warnings, motivation and their catalog
//! - [`report`]: Full plan bundle with JSON and text output

pub mod advisory;
pub mod interpreter;
pub mod models;
pub mod report;

// Re-export commonly used types
pub use advisory::{AdvisoryCatalog, CatalogError, MessagePool, WarningRule};
pub use interpreter::{
    derive_schedule, describe_frequency, parse_lines, parse_prescription, Interpreter,
    ParsedLine, SkipReason, SkippedLine,
};
pub use models::{DoseSlots, MedicineRecord, Schedule, TimeOfDay};
pub use report::MedicationPlan;

use chrono::NaiveDate;

/// Nudges for a set of records, using the built-in catalog.
pub fn generate_nudges(records: &[MedicineRecord]) -> Vec<String> {
    advisory::generate_nudges(records, &AdvisoryCatalog::default().nudges)
}

/// Safety warnings for a schedule, using the built-in catalog.
pub fn check_advisory_warnings(schedule: &Schedule) -> Vec<String> {
    advisory::check_advisory_warnings(schedule, &AdvisoryCatalog::default().warnings)
}

/// Motivation message for a date, using the built-in pool.
pub fn daily_motivation(date: NaiveDate) -> String {
    advisory::daily_motivation(date, &MessagePool::default()).to_string()
}

// UniFFI setup - using proc macros
uniffi::setup_scaffolding!();

use std::sync::Arc;

// =========================================================================
// FFI Error Type
// =========================================================================

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum MedPlanError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<CatalogError> for MedPlanError {
    fn from(e: CatalogError) -> Self {
        MedPlanError::InvalidCatalog(e.to_string())
    }
}

impl From<serde_json::Error> for MedPlanError {
    fn from(e: serde_json::Error) -> Self {
        MedPlanError::SerializationError(e.to_string())
    }
}

impl From<chrono::ParseError> for MedPlanError {
    fn from(e: chrono::ParseError) -> Self {
        MedPlanError::InvalidInput(format!("date must be YYYY-MM-DD: {}", e))
    }
}

fn parse_date(date: &str) -> Result<NaiveDate, MedPlanError> {
    Ok(NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")?)
}

// =========================================================================
// Factory Functions (exported to FFI)
// =========================================================================

/// Create an engine, optionally overriding the catalog with JSON.
#[uniffi::export]
pub fn open_engine(catalog_json: Option<String>) -> Result<Arc<MedPlanCore>, MedPlanError> {
    let catalog = match catalog_json {
        Some(json) => AdvisoryCatalog::from_json(&json)?,
        None => AdvisoryCatalog::default(),
    };
    Ok(Arc::new(MedPlanCore {
        interpreter: Interpreter::with_catalog(catalog),
    }))
}

// =========================================================================
// Main API Object
// =========================================================================

/// Interpreter wrapper for FFI. Holds only the immutable catalog.
#[derive(uniffi::Object)]
pub struct MedPlanCore {
    interpreter: Interpreter,
}

#[uniffi::export]
impl MedPlanCore {
    /// Parse prescription text into records.
    pub fn parse_prescription(&self, text: String) -> Vec<FfiMedicineRecord> {
        self.interpreter
            .parse(&text)
            .into_iter()
            .map(|r| r.into())
            .collect()
    }

    /// Derive the daily schedule. Records with an empty name or code are ignored.
    pub fn derive_schedule(&self, records: Vec<FfiMedicineRecord>) -> FfiSchedule {
        let records = to_records(records);
        self.interpreter.derive_schedule(&records).into()
    }

    pub fn generate_nudges(&self, records: Vec<FfiMedicineRecord>) -> Vec<String> {
        let records = to_records(records);
        self.interpreter.generate_nudges(&records)
    }

    pub fn check_advisory_warnings(&self, schedule: FfiSchedule) -> Vec<String> {
        self.interpreter.check_advisory_warnings(&schedule.into())
    }

    /// Motivation for an ISO date (`YYYY-MM-DD`).
    pub fn daily_motivation(&self, date: String) -> Result<String, MedPlanError> {
        Ok(self.interpreter.daily_motivation(parse_date(&date)?))
    }

    /// Plain-language reading of a frequency code.
    pub fn describe_frequency(&self, code: String) -> String {
        describe_frequency(&code)
    }

    /// Full plan as JSON for an ISO date (`YYYY-MM-DD`).
    pub fn plan_json(&self, text: String, date: String) -> Result<String, MedPlanError> {
        let plan = self.interpreter.plan(&text, parse_date(&date)?);
        Ok(plan.to_json()?)
    }
}

fn to_records(records: Vec<FfiMedicineRecord>) -> Vec<MedicineRecord> {
    records
        .into_iter()
        .filter_map(FfiMedicineRecord::into_record)
        .collect()
}

// =========================================================================
// FFI Types
// =========================================================================

/// FFI-safe medicine record.
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct FfiMedicineRecord {
    pub name: String,
    pub dose: String,
    pub frequency_code: String,
    pub instruction: String,
    pub duration_text: String,
}

impl From<MedicineRecord> for FfiMedicineRecord {
    fn from(record: MedicineRecord) -> Self {
        Self {
            name: record.name().to_string(),
            dose: record.dose().to_string(),
            frequency_code: record.frequency_code().to_string(),
            instruction: record.instruction().to_string(),
            duration_text: record.duration_text().to_string(),
        }
    }
}

impl FfiMedicineRecord {
    /// Convert back to a record; `None` if the name or code is blank.
    pub fn into_record(self) -> Option<MedicineRecord> {
        MedicineRecord::new(
            &self.name,
            &self.dose,
            &self.frequency_code,
            &self.instruction,
            &self.duration_text,
        )
    }
}

/// FFI-safe schedule.
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct FfiSchedule {
    pub morning: Vec<String>,
    pub afternoon: Vec<String>,
    pub night: Vec<String>,
}

impl From<Schedule> for FfiSchedule {
    fn from(schedule: Schedule) -> Self {
        Self {
            morning: schedule.bucket(TimeOfDay::Morning).to_vec(),
            afternoon: schedule.bucket(TimeOfDay::Afternoon).to_vec(),
            night: schedule.bucket(TimeOfDay::Night).to_vec(),
        }
    }
}

impl From<FfiSchedule> for Schedule {
    fn from(schedule: FfiSchedule) -> Self {
        Schedule::from_buckets(schedule.morning, schedule.afternoon, schedule.night)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "Paracetamol 500 mg – 1-0-1 – After food – 5 days\n\
                          Amoxicillin 250 mg – 0-1-1 – After food – 7 days";

    #[test]
    fn test_default_engine_roundtrip() {
        let core = open_engine(None).unwrap();

        let records = core.parse_prescription(SAMPLE.into());
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].dose, "500 mg");

        let schedule = core.derive_schedule(records.clone());
        assert_eq!(schedule.night.len(), 2);

        let warnings = core.check_advisory_warnings(schedule);
        assert!(warnings.contains(&AdvisoryCatalog::default().warnings.night_crowding));

        let nudges = core.generate_nudges(records);
        assert_eq!(nudges.len(), 2);
    }

    #[test]
    fn test_engine_with_catalog_json() {
        let core = open_engine(Some(r#"{"motivation": ["only one"]}"#.into())).unwrap();
        assert_eq!(core.daily_motivation("2024-02-29".into()).unwrap(), "only one");
    }

    #[test]
    fn test_engine_rejects_bad_catalog() {
        assert!(matches!(
            open_engine(Some("{not json".into())),
            Err(MedPlanError::InvalidCatalog(_))
        ));
        assert!(matches!(
            open_engine(Some(r#"{"motivation": []}"#.into())),
            Err(MedPlanError::InvalidCatalog(_))
        ));
    }

    #[test]
    fn test_bad_date() {
        let core = open_engine(None).unwrap();
        assert!(matches!(
            core.daily_motivation("15/03/2024".into()),
            Err(MedPlanError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_ffi_records_with_empty_name_are_ignored() {
        let core = open_engine(None).unwrap();
        let records = vec![FfiMedicineRecord {
            name: "  ".into(),
            dose: "1 mg".into(),
            frequency_code: "1-1-1".into(),
            instruction: "x".into(),
            duration_text: "1 day".into(),
        }];

        let schedule = core.derive_schedule(records);
        assert!(schedule.morning.is_empty());
    }

    #[test]
    fn test_plan_json() {
        let core = open_engine(None).unwrap();
        let json = core.plan_json(SAMPLE.into(), "2024-06-01".into()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["records"].as_array().unwrap().len(), 2);
        assert_eq!(value["schedule"]["Afternoon"][0], "Amoxicillin 250 mg (After food)");
    }

    #[test]
    fn test_free_functions_use_builtin_catalog() {
        let records = parse_prescription(SAMPLE);
        let nudges = generate_nudges(&records);
        assert_eq!(
            nudges.last().map(String::as_str),
            Some("Taking medicines at the same time every day improves recovery.")
        );

        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert_eq!(daily_motivation(date), Interpreter::new().daily_motivation(date));
    }
}
