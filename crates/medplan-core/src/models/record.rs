//! Medicine record model.

use serde::Serialize;

use super::DoseSlots;

/// One medicine line from a prescription, as written.
///
/// Fields hold the trimmed text of the prescription line; nothing is
/// normalized. `name` and `frequency_code` are never empty.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MedicineRecord {
    name: String,
    dose: String,
    frequency_code: String,
    instruction: String,
    duration_text: String,
}

impl MedicineRecord {
    /// Create a record from its five text fields.
    ///
    /// Every field is trimmed. Returns `None` when the name or the
    /// frequency code is empty after trimming.
    pub fn new(
        name: &str,
        dose: &str,
        frequency_code: &str,
        instruction: &str,
        duration_text: &str,
    ) -> Option<Self> {
        let name = name.trim();
        let frequency_code = frequency_code.trim();
        if name.is_empty() || frequency_code.is_empty() {
            return None;
        }

        Some(Self {
            name: name.to_string(),
            dose: dose.trim().to_string(),
            frequency_code: frequency_code.to_string(),
            instruction: instruction.trim().to_string(),
            duration_text: duration_text.trim().to_string(),
        })
    }

    /// Medicine name (first token of the name/dose field).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Dose text, e.g. "500 mg". May be empty.
    pub fn dose(&self) -> &str {
        &self.dose
    }

    /// Frequency code as written, e.g. "1-0-1".
    pub fn frequency_code(&self) -> &str {
        &self.frequency_code
    }

    pub fn instruction(&self) -> &str {
        &self.instruction
    }

    pub fn duration_text(&self) -> &str {
        &self.duration_text
    }

    /// Parsed dose slots, or `None` if the frequency code is malformed.
    pub fn dose_slots(&self) -> Option<DoseSlots> {
        DoseSlots::parse(&self.frequency_code)
    }

    /// Text shown in a schedule bucket: `"{name} {dose} ({instruction})"`.
    ///
    /// An empty dose is left out rather than leaving a double space.
    pub fn display_line(&self) -> String {
        if self.dose.is_empty() {
            format!("{} ({})", self.name, self.instruction)
        } else {
            format!("{} {} ({})", self.name, self.dose, self.instruction)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_fields() {
        let record =
            MedicineRecord::new(" Paracetamol ", " 500 mg", "1-0-1 ", " After food ", "5 days")
                .unwrap();

        assert_eq!(record.name(), "Paracetamol");
        assert_eq!(record.dose(), "500 mg");
        assert_eq!(record.frequency_code(), "1-0-1");
        assert_eq!(record.instruction(), "After food");
        assert_eq!(record.duration_text(), "5 days");
    }

    #[test]
    fn test_new_requires_name_and_code() {
        assert!(MedicineRecord::new("  ", "500 mg", "1-0-1", "", "").is_none());
        assert!(MedicineRecord::new("Paracetamol", "500 mg", "   ", "", "").is_none());
        // Instruction and duration may be empty
        assert!(MedicineRecord::new("Paracetamol", "", "1-0-1", "", "").is_some());
    }

    #[test]
    fn test_display_line() {
        let record =
            MedicineRecord::new("Amoxicillin", "250 mg", "0-1-1", "After food", "7 days").unwrap();
        assert_eq!(record.display_line(), "Amoxicillin 250 mg (After food)");

        let record = MedicineRecord::new("ORS", "", "1-1-1", "After stool", "3 days").unwrap();
        assert_eq!(record.display_line(), "ORS (After stool)");
    }

    #[test]
    fn test_serializes_camel_case() {
        let record =
            MedicineRecord::new("Paracetamol", "500 mg", "1-0-1", "After food", "5 days").unwrap();
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["frequencyCode"], "1-0-1");
        assert_eq!(json["durationText"], "5 days");
    }
}
