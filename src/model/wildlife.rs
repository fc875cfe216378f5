use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Threat bands over the shared 0-10 danger scale.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(into = "String", try_from = "String")]
pub enum ThreatLevel {
    Harmless,
    Passive,
    Defensive,
    Aggressive,
    Hostile,
    Deadly,
}

string_enum!(ThreatLevel {
    Harmless => "harmless",
    Passive => "passive",
    Defensive => "defensive",
    Aggressive => "aggressive",
    Hostile => "hostile",
    Deadly => "deadly",
});

impl ThreatLevel {
    /// Classify a danger level into its band. Bands are 2 levels wide;
    /// anything at 8 or above reads as deadly.
    pub fn from_danger_level(level: f64) -> Self {
        if level <= 0.0 {
            ThreatLevel::Harmless
        } else if level < 2.0 {
            ThreatLevel::Passive
        } else if level < 4.0 {
            ThreatLevel::Defensive
        } else if level < 6.0 {
            ThreatLevel::Aggressive
        } else if level < 8.0 {
            ThreatLevel::Hostile
        } else {
            ThreatLevel::Deadly
        }
    }
}

/// Snapshot of one wildlife population resident in a location or biome.
///
/// The persistence layer owns creation and mutation; the engine only reads
/// these. Counts arrive from a signed store, so negatives are rejected at
/// validation rather than made unrepresentable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WildlifePopulation {
    pub id: u64,
    pub name: String,
    /// Current head count in this location.
    pub population: i32,
    /// Danger of a single individual on the shared scale.
    pub danger_rating: i32,
    /// Whether individuals group into packs for increased danger.
    pub pack_behavior: bool,
    pub pack_size_min: i32,
    pub pack_size_max: i32,
    /// Maximum population the location can sustain.
    pub max_population: i32,
    /// Per-cycle regrowth rate in [0, 1].
    pub spawn_rate: f64,
}

impl WildlifePopulation {
    /// Reject malformed snapshots before any danger math runs.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.population < 0 {
            return Err(ValidationError::NegativePopulation {
                name: self.name.clone(),
                population: self.population,
            });
        }
        if self.danger_rating < 0 {
            return Err(ValidationError::NegativeDangerRating {
                name: self.name.clone(),
                rating: self.danger_rating,
            });
        }
        if self.pack_size_min > self.pack_size_max
            || (self.pack_behavior && self.pack_size_max < 1)
        {
            return Err(ValidationError::PackSizeRange {
                name: self.name.clone(),
                min: self.pack_size_min,
                max: self.pack_size_max,
            });
        }
        if self.max_population < 0 {
            return Err(ValidationError::NegativeMaxPopulation {
                name: self.name.clone(),
                max_population: self.max_population,
            });
        }
        if !(0.0..=1.0).contains(&self.spawn_rate) {
            return Err(ValidationError::SpawnRateOutOfRange {
                name: self.name.clone(),
                rate: self.spawn_rate,
            });
        }
        Ok(())
    }

    /// Next-cycle head count: stochastic growth by `spawn_rate`, capped at
    /// `max_population`. An empty population stays empty, and a population
    /// already over capacity does not grow but is not culled.
    pub fn regrown(&self, rng: &mut dyn RngCore) -> Result<i32, ValidationError> {
        self.validate()?;
        if self.population == 0 {
            return Ok(0);
        }
        let growth = stochastic_round(self.population as f64 * self.spawn_rate, rng);
        let cap = self.max_population.max(self.population);
        Ok(self.population.saturating_add(growth as i32).min(cap))
    }
}

/// Stochastic rounding: values < 1.0 are probabilistically rounded to 0 or 1,
/// values >= 1.0 are rounded normally. Avoids small populations being
/// permanently stuck at their current size.
fn stochastic_round(exact: f64, rng: &mut dyn RngCore) -> u32 {
    use rand::Rng;
    if exact < 1.0 && exact > 0.0 {
        if rng.random_range(0.0..1.0) < exact { 1 } else { 0 }
    } else {
        exact.round() as u32
    }
}
