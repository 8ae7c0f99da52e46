//! Non-clinical safety warnings.
//!
//! Rules look only at bucket sizes, never at which drug is scheduled.
//! An empty schedule never fires a rule, whatever the thresholds.
//!
//! Rules, evaluated in order:
//! - Night crowding: more than one entry at Night
//! - Heavy daily load: total doses at or above a threshold
//! - All-day spread: non-empty buckets at or above a threshold

use crate::models::{Schedule, TimeOfDay};

use super::WarningCatalog;

/// A single warning rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningRule {
    NightCrowding,
    HeavyDailyLoad,
    AllDaySpread,
}

impl WarningRule {
    /// All rules in evaluation order.
    pub const ALL: [WarningRule; 3] = [
        WarningRule::NightCrowding,
        WarningRule::HeavyDailyLoad,
        WarningRule::AllDaySpread,
    ];

    /// Whether the rule fires for this schedule.
    pub fn fires(&self, schedule: &Schedule, catalog: &WarningCatalog) -> bool {
        if schedule.is_empty() {
            return false;
        }

        match self {
            WarningRule::NightCrowding => schedule.bucket(TimeOfDay::Night).len() > 1,
            WarningRule::HeavyDailyLoad => schedule.total_doses() >= catalog.heavy_load_threshold,
            WarningRule::AllDaySpread => schedule.active_buckets() >= catalog.spread_threshold,
        }
    }

    /// Message appended when the rule fires.
    pub fn message<'a>(&self, catalog: &'a WarningCatalog) -> &'a str {
        match self {
            WarningRule::NightCrowding => &catalog.night_crowding,
            WarningRule::HeavyDailyLoad => &catalog.heavy_load,
            WarningRule::AllDaySpread => &catalog.all_day_spread,
        }
    }
}

/// Rules that fire for a schedule, in evaluation order.
pub fn fired_rules(schedule: &Schedule, catalog: &WarningCatalog) -> Vec<WarningRule> {
    WarningRule::ALL
        .into_iter()
        .filter(|rule| rule.fires(schedule, catalog))
        .collect()
}

/// Warning messages for a schedule.
pub fn check_advisory_warnings(schedule: &Schedule, catalog: &WarningCatalog) -> Vec<String> {
    fired_rules(schedule, catalog)
        .into_iter()
        .map(|rule| rule.message(catalog).to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("Med{} 1 mg (x)", i)).collect()
    }

    fn schedule(morning: usize, afternoon: usize, night: usize) -> Schedule {
        Schedule::from_buckets(entries(morning), entries(afternoon), entries(night))
    }

    #[test]
    fn test_night_crowding_boundaries() {
        let catalog = WarningCatalog::default();

        assert!(!WarningRule::NightCrowding.fires(&schedule(0, 0, 0), &catalog));
        assert!(!WarningRule::NightCrowding.fires(&schedule(0, 0, 1), &catalog));
        assert!(WarningRule::NightCrowding.fires(&schedule(0, 0, 2), &catalog));
        // Other buckets never count toward night crowding
        assert!(!WarningRule::NightCrowding.fires(&schedule(3, 3, 1), &catalog));
    }

    #[test]
    fn test_heavy_load_threshold() {
        let catalog = WarningCatalog::default();

        assert!(!WarningRule::HeavyDailyLoad.fires(&schedule(2, 2, 1), &catalog));
        assert!(WarningRule::HeavyDailyLoad.fires(&schedule(2, 2, 2), &catalog));
    }

    #[test]
    fn test_all_day_spread() {
        let catalog = WarningCatalog::default();

        assert!(!WarningRule::AllDaySpread.fires(&schedule(1, 0, 1), &catalog));
        assert!(WarningRule::AllDaySpread.fires(&schedule(1, 1, 1), &catalog));

        let strict = WarningCatalog {
            spread_threshold: 2,
            ..WarningCatalog::default()
        };
        assert!(WarningRule::AllDaySpread.fires(&schedule(1, 0, 1), &strict));
    }

    #[test]
    fn test_empty_schedule_has_no_warnings() {
        let catalog = WarningCatalog::default();
        assert!(check_advisory_warnings(&Schedule::default(), &catalog).is_empty());
    }

    #[test]
    fn test_zero_thresholds_ignore_empty_schedule() {
        let catalog = WarningCatalog {
            heavy_load_threshold: 0,
            spread_threshold: 0,
            ..WarningCatalog::default()
        };

        assert!(check_advisory_warnings(&Schedule::default(), &catalog).is_empty());
        assert_eq!(
            fired_rules(&schedule(1, 0, 0), &catalog),
            vec![WarningRule::HeavyDailyLoad, WarningRule::AllDaySpread]
        );
    }

    #[test]
    fn test_messages_follow_rule_order() {
        let catalog = WarningCatalog::default();
        let warnings = check_advisory_warnings(&schedule(2, 2, 2), &catalog);

        assert_eq!(
            warnings,
            vec![
                catalog.night_crowding.clone(),
                catalog.heavy_load.clone(),
                catalog.all_day_spread.clone(),
            ]
        );
    }

    #[test]
    fn test_single_night_rule() {
        let catalog = WarningCatalog::default();
        let rules = fired_rules(&schedule(0, 0, 2), &catalog);
        assert_eq!(rules, vec![WarningRule::NightCrowding]);
    }
}
