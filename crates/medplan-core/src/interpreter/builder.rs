//! Record builder: tokenized fields → `MedicineRecord`.

use crate::models::MedicineRecord;

use super::tokenizer::{split_name_dose, FieldGroup, SkipReason};

/// Build a record from a field group.
///
/// Fields map by position: name/dose, frequency code, instruction,
/// duration. Anything past the fourth field is ignored. A malformed but
/// non-empty frequency code is kept as written.
pub fn build_record(group: &FieldGroup) -> Result<MedicineRecord, SkipReason> {
    let [name_dose, frequency, instruction, duration] = match group.fields.as_slice() {
        [a, b, c, d, ..] => [a, b, c, d],
        other => {
            return Err(SkipReason::TooFewFields {
                found: other.len(),
            })
        }
    };

    let (name, dose) = split_name_dose(name_dose).ok_or(SkipReason::MissingName)?;

    if frequency.trim().is_empty() {
        return Err(SkipReason::MissingFrequency);
    }

    MedicineRecord::new(&name, &dose, frequency, instruction, duration)
        .ok_or(SkipReason::MissingName)
}
