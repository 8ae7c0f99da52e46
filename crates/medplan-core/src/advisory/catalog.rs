//! Advisory catalog: the fixed lists and texts behind every advisory.
//!
//! The catalog is plain data. [`AdvisoryCatalog::default`] carries the
//! built-in texts; a JSON document can override any subset of them.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Catalog loading errors.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Message pool must contain at least one message")]
    EmptyPool,

    #[error("Warning threshold `{0}` must be at least 1")]
    ZeroThreshold(&'static str),
}

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Non-empty, ordered list of messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "Vec<String>")]
pub struct MessagePool(Vec<String>);

impl MessagePool {
    /// Create a pool. Fails on an empty list.
    pub fn new(messages: Vec<String>) -> CatalogResult<Self> {
        if messages.is_empty() {
            return Err(CatalogError::EmptyPool);
        }
        Ok(Self(messages))
    }

    /// Pick the message at `index`, wrapping around the pool.
    pub fn pick(&self, index: usize) -> &str {
        &self.0[index % self.0.len()]
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a pool built through `new`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<MessagePool> for Vec<String> {
    fn from(pool: MessagePool) -> Self {
        pool.0
    }
}

impl Default for MessagePool {
    fn default() -> Self {
        Self(
            [
                "Every dose you take on time is a step toward feeling better.",
                "Small routines build strong recoveries. You are doing great.",
                "Your health is worth the few seconds each dose takes.",
                "Consistency beats perfection. Keep going, one dose at a time.",
                "Taking care of yourself today makes tomorrow easier.",
                "You are in charge of your recovery, and it shows.",
                "A steady routine is one of the best medicines there is.",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        )
    }
}

/// Texts and watch-list used for nudges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NudgeCatalog {
    /// Medicine names (matched case-insensitively) that trigger the
    /// course-completion nudge
    pub antibiotic_watch_list: Vec<String>,
    /// Appended once per watched record
    pub antibiotic_completion: String,
    /// Always appended last
    pub closing: String,
}

impl Default for NudgeCatalog {
    fn default() -> Self {
        Self {
            antibiotic_watch_list: [
                "amoxicillin",
                "azithromycin",
                "cefixime",
                "ciprofloxacin",
                "doxycycline",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            antibiotic_completion:
                "Completing the full antibiotic course helps prevent resistance.".into(),
            closing: "Taking medicines at the same time every day improves recovery.".into(),
        }
    }
}

impl NudgeCatalog {
    /// Whether `name` is on the antibiotic watch-list (case-insensitive).
    pub fn is_watched(&self, name: &str) -> bool {
        let name = name.trim().to_lowercase();
        self.antibiotic_watch_list
            .iter()
            .any(|watched| watched.trim().to_lowercase() == name)
    }
}

/// Messages and thresholds for the safety-warning rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WarningCatalog {
    pub night_crowding: String,
    pub heavy_load: String,
    /// Total daily doses at which `heavy_load` fires
    pub heavy_load_threshold: usize,
    pub all_day_spread: String,
    /// Non-empty buckets at which `all_day_spread` fires
    pub spread_threshold: usize,
}

impl Default for WarningCatalog {
    fn default() -> Self {
        Self {
            night_crowding: "Multiple medicines are scheduled at night. \
                             Take them after food to avoid stomach irritation."
                .into(),
            heavy_load: "Your routine has many doses in a day. \
                         A written checklist helps avoid missed or doubled doses."
                .into(),
            heavy_load_threshold: 6,
            all_day_spread: "Your doses are spread across the whole day. \
                             Setting a reminder for each time can help."
                .into(),
            spread_threshold: 3,
        }
    }
}

impl WarningCatalog {
    /// Reject thresholds that would fire on an empty schedule.
    pub fn validate(&self) -> CatalogResult<()> {
        if self.heavy_load_threshold == 0 {
            return Err(CatalogError::ZeroThreshold("heavy_load_threshold"));
        }
        if self.spread_threshold == 0 {
            return Err(CatalogError::ZeroThreshold("spread_threshold"));
        }
        Ok(())
    }
}

/// Every fixed text and list used to build advisories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdvisoryCatalog {
    pub nudges: NudgeCatalog,
    pub warnings: WarningCatalog,
    pub motivation: MessagePool,
    /// Guidance shown with every plan
    pub missed_dose_note: String,
}

impl Default for AdvisoryCatalog {
    fn default() -> Self {
        Self {
            nudges: NudgeCatalog::default(),
            warnings: WarningCatalog::default(),
            motivation: MessagePool::default(),
            missed_dose_note: "If a dose is missed, continue with the next scheduled time \
                               as advised by your healthcare provider."
                .into(),
        }
    }
}

/// Catalog as written in JSON, before validation.
#[derive(Deserialize)]
#[serde(default)]
struct RawCatalog {
    nudges: NudgeCatalog,
    warnings: WarningCatalog,
    motivation: Vec<String>,
    missed_dose_note: String,
}

impl Default for RawCatalog {
    fn default() -> Self {
        let catalog = AdvisoryCatalog::default();
        Self {
            nudges: catalog.nudges,
            warnings: catalog.warnings,
            motivation: catalog.motivation.into(),
            missed_dose_note: catalog.missed_dose_note,
        }
    }
}

impl RawCatalog {
    fn validate(self) -> CatalogResult<AdvisoryCatalog> {
        self.warnings.validate()?;
        Ok(AdvisoryCatalog {
            nudges: self.nudges,
            warnings: self.warnings,
            motivation: MessagePool::new(self.motivation)?,
            missed_dose_note: self.missed_dose_note,
        })
    }
}

impl AdvisoryCatalog {
    /// Parse a catalog from JSON. Missing keys keep their defaults.
    ///
    /// Fails with `EmptyPool` on an empty motivation list and with
    /// `ZeroThreshold` when a warning threshold is 0.
    pub fn from_json(json: &str) -> CatalogResult<Self> {
        let raw: RawCatalog = serde_json::from_str(json)?;
        raw.validate()
    }

    /// Load a catalog from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
