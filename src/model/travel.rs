use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::config::DangerTuning;
use crate::error::ValidationError;

/// Whether a route is common knowledge, concealed, or only open part of
/// the year.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Visibility {
    #[default]
    Visible,
    Hidden,
    Seasonal,
}

string_enum!(Visibility {
    Visible => "visible",
    Hidden => "hidden",
    Seasonal => "seasonal",
});

/// Snapshot of a travel route between two locations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelLink {
    pub id: u64,
    pub name: String,
    pub from_location: u64,
    pub to_location: u64,
    /// Speed multiplier for travel; 1.0 is normal pace.
    pub speed: f64,
    pub visibility: Visibility,
    /// Static danger on the shared scale, before wildlife and faction
    /// modifiers.
    pub base_danger_level: i32,
    /// Biomes the route crosses; their resident wildlife contributes to
    /// the route's danger.
    pub biome_ids: BTreeSet<u64>,
    /// Factions with influence along the route.
    pub faction_ids: BTreeSet<u64>,
    /// Terrain difficulty multiplier; 1.0 is neutral ground.
    pub terrain_modifier: f64,
    /// Surveyed length, if the route has been mapped.
    pub distance_km: Option<f64>,
}

impl TravelLink {
    pub fn validate(&self, tuning: &DangerTuning) -> Result<(), ValidationError> {
        if self.speed <= 0.0 {
            return Err(ValidationError::NonPositiveSpeed {
                link_id: self.id,
                speed: self.speed,
            });
        }
        if self.terrain_modifier <= 0.0 {
            return Err(ValidationError::NonPositiveTerrainModifier {
                link_id: self.id,
                modifier: self.terrain_modifier,
            });
        }
        if self.base_danger_level < 0 || self.base_danger_level > tuning.max_danger_level {
            return Err(ValidationError::DangerLevelOutOfRange {
                level: self.base_danger_level,
                max: tuning.max_danger_level,
            });
        }
        Ok(())
    }
}
