//! Medication plan report: everything the presentation layer shows.

use serde::Serialize;

use crate::interpreter::{describe_frequency, SkippedLine};
use crate::models::{MedicineRecord, Schedule};

/// Plain-language explanation of one record's frequency code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrequencyExplanation {
    /// Medicine name
    pub medicine: String,
    /// Frequency code as written
    pub code: String,
    /// E.g. "Take in the morning and at night."
    pub explanation: String,
}

/// Full output of one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MedicationPlan {
    /// Records in input order
    pub records: Vec<MedicineRecord>,
    /// Non-empty lines that produced no record
    pub skipped: Vec<SkippedLine>,
    pub schedule: Schedule,
    /// One entry per record
    pub explanations: Vec<FrequencyExplanation>,
    pub nudges: Vec<String>,
    pub warnings: Vec<String>,
    pub missed_dose_note: String,
    pub motivation: String,
}

impl MedicationPlan {
    pub(crate) fn new(
        records: Vec<MedicineRecord>,
        skipped: Vec<SkippedLine>,
        schedule: Schedule,
        nudges: Vec<String>,
        warnings: Vec<String>,
        missed_dose_note: String,
        motivation: String,
    ) -> Self {
        let explanations = records
            .iter()
            .map(|record| FrequencyExplanation {
                medicine: record.name().to_string(),
                code: record.frequency_code().to_string(),
                explanation: describe_frequency(record.frequency_code()),
            })
            .collect();

        Self {
            records,
            skipped,
            schedule,
            explanations,
            nudges,
            warnings,
            missed_dose_note,
            motivation,
        }
    }

    /// Export to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Render as plain text, one section per part of the plan.
    pub fn to_text(&self) -> String {
        let mut out = String::new();

        out.push_str("Daily routine\n");
        if self.schedule.is_empty() {
            out.push_str("  (nothing scheduled)\n");
        }
        for (time, entries) in self.schedule.iter() {
            if entries.is_empty() {
                continue;
            }
            out.push_str(&format!("  {}\n", time));
            for entry in entries {
                out.push_str(&format!("    - {}\n", entry));
            }
        }

        if !self.explanations.is_empty() {
            out.push_str("\nHow to read it\n");
            for e in &self.explanations {
                out.push_str(&format!("  {} ({}): {}\n", e.medicine, e.code, e.explanation));
            }
        }

        out.push_str("\nWhy timing matters\n");
        for nudge in &self.nudges {
            out.push_str(&format!("  * {}\n", nudge));
        }

        if !self.warnings.is_empty() {
            out.push_str("\nSafety awareness\n");
            for warning in &self.warnings {
                out.push_str(&format!("  ! {}\n", warning));
            }
        }

        if !self.skipped.is_empty() {
            out.push_str("\nLines not understood\n");
            for line in &self.skipped {
                out.push_str(&format!(
                    "  line {}: {} ({})\n",
                    line.line_number, line.text, line.reason
                ));
            }
        }

        out.push_str(&format!("\n{}\n", self.missed_dose_note));
        out.push_str(&format!("\nToday: {}\n", self.motivation));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::SkipReason;

    fn sample_plan() -> MedicationPlan {
        let records = vec![
            MedicineRecord::new("Paracetamol", "500 mg", "1-0-1", "After food", "5 days").unwrap(),
            MedicineRecord::new("Ibuprofen", "200 mg", "as needed", "After food", "3 days")
                .unwrap(),
        ];
        let schedule = Schedule::from_buckets(
            vec!["Paracetamol 500 mg (After food)".into()],
            vec![],
            vec!["Paracetamol 500 mg (After food)".into()],
        );
        let skipped = vec![SkippedLine {
            line_number: 3,
            text: "Vitamin D".into(),
            reason: SkipReason::TooFewFields { found: 1 },
        }];

        MedicationPlan::new(
            records,
            skipped,
            schedule,
            vec!["Keep a routine.".into()],
            vec![],
            "Missed? Carry on.".into(),
            "You can do it.".into(),
        )
    }

    #[test]
    fn test_explanations_per_record() {
        let plan = sample_plan();

        assert_eq!(plan.explanations.len(), 2);
        assert_eq!(
            plan.explanations[0].explanation,
            "Take in the morning and at night."
        );
        assert!(plan.explanations[1]
            .explanation
            .contains("not a recognized dosage pattern"));
    }

    #[test]
    fn test_to_json() {
        let json = sample_plan().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["records"][0]["frequencyCode"], "1-0-1");
        assert_eq!(value["schedule"]["Night"][0], "Paracetamol 500 mg (After food)");
        assert_eq!(value["skipped"][0]["reason"]["kind"], "too_few_fields");
        assert_eq!(value["motivation"], "You can do it.");
    }

    #[test]
    fn test_to_text_sections() {
        let text = sample_plan().to_text();

        assert!(text.contains("  Morning\n    - Paracetamol 500 mg (After food)\n"));
        assert!(!text.contains("Afternoon"));
        assert!(text.contains("  * Keep a routine."));
        assert!(!text.contains("Safety awareness"));
        assert!(text.contains("line 3: Vitamin D (expected at least 4 fields, found 1)"));
        assert!(text.ends_with("Today: You can do it.\n"));
    }
}
