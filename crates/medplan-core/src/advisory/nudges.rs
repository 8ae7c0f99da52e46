//! Behavioral nudges.

use crate::models::MedicineRecord;

use super::NudgeCatalog;

/// Build the nudge list for a set of records.
///
/// One course-completion nudge per watched record, in record order
/// (repeats are kept), followed by the closing nudge.
pub fn generate_nudges(records: &[MedicineRecord], catalog: &NudgeCatalog) -> Vec<String> {
    records
        .iter()
        .filter(|record| catalog.is_watched(record.name()))
        .map(|_| catalog.antibiotic_completion.clone())
        .chain(std::iter::once(catalog.closing.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> MedicineRecord {
        MedicineRecord::new(name, "250 mg", "1-0-1", "After food", "7 days").unwrap()
    }

    #[test]
    fn test_closing_nudge_always_present() {
        let catalog = NudgeCatalog::default();
        let nudges = generate_nudges(&[], &catalog);

        assert_eq!(nudges, vec![catalog.closing.clone()]);
    }

    #[test]
    fn test_antibiotic_nudge_per_record() {
        let catalog = NudgeCatalog::default();
        let nudges = generate_nudges(
            &[record("Amoxicillin"), record("Paracetamol"), record("AZITHROMYCIN")],
            &catalog,
        );

        assert_eq!(
            nudges,
            vec![
                catalog.antibiotic_completion.clone(),
                catalog.antibiotic_completion.clone(),
                catalog.closing.clone(),
            ]
        );
    }

    #[test]
    fn test_custom_watch_list() {
        let catalog = NudgeCatalog {
            antibiotic_watch_list: vec!["paracetamol".into()],
            antibiotic_completion: "finish it".into(),
            closing: "bye".into(),
        };

        let nudges = generate_nudges(&[record("Amoxicillin"), record("Paracetamol")], &catalog);
        assert_eq!(nudges, vec!["finish it".to_string(), "bye".to_string()]);
    }
}
