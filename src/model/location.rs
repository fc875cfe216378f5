use serde::{Deserialize, Serialize};

use crate::config::DangerTuning;
use crate::error::ValidationError;

use super::wildlife::WildlifePopulation;

/// Snapshot of a location and its resident hazards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationInstance {
    pub id: u64,
    pub name: String,
    /// Static danger on the shared scale; even tame locations default to 1.
    pub base_danger_level: i32,
    /// The single faction holding this location, if any.
    pub controlling_faction: Option<u64>,
    /// Wildlife populations resident here.
    pub wildlife: Vec<WildlifePopulation>,
    /// Finer classification within the location's type (e.g. "ruin").
    pub sub_type: Option<String>,
}

impl LocationInstance {
    pub fn validate(&self, tuning: &DangerTuning) -> Result<(), ValidationError> {
        if self.base_danger_level < 0 || self.base_danger_level > tuning.max_danger_level {
            return Err(ValidationError::DangerLevelOutOfRange {
                level: self.base_danger_level,
                max: tuning.max_danger_level,
            });
        }
        Ok(())
    }
}
