use thiserror::Error;

/// Malformed-snapshot errors.
///
/// Raised immediately when a computation receives an invalid snapshot and
/// never coerced into a neutral value. Missing data is different: a
/// character with no standing toward a faction, or a route with no
/// wildlife, resolves to the documented neutral contribution instead of
/// erroring.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("wildlife '{name}' has negative population {population}")]
    NegativePopulation { name: String, population: i32 },

    #[error("wildlife '{name}' has negative danger rating {rating}")]
    NegativeDangerRating { name: String, rating: i32 },

    #[error("wildlife '{name}' has invalid pack size range {min}..={max}")]
    PackSizeRange { name: String, min: i32, max: i32 },

    #[error("wildlife '{name}' has negative max population {max_population}")]
    NegativeMaxPopulation { name: String, max_population: i32 },

    #[error("wildlife '{name}' spawn rate {rate} outside [0, 1]")]
    SpawnRateOutOfRange { name: String, rate: f64 },

    #[error(
        "reputation {score} of character {character_id} toward faction {faction_id} \
         outside [-100, 100]"
    )]
    ReputationOutOfRange {
        character_id: u64,
        faction_id: u64,
        score: i32,
    },

    #[error("base danger level {level} outside [0, {max}]")]
    DangerLevelOutOfRange { level: i32, max: i32 },

    #[error("travel link {link_id} speed must be positive, got {speed}")]
    NonPositiveSpeed { link_id: u64, speed: f64 },

    #[error("travel link {link_id} terrain modifier must be positive, got {modifier}")]
    NonPositiveTerrainModifier { link_id: u64, modifier: f64 },

    #[error("blueprint {blueprint_id} requires a non-positive quantity of resource {resource_id}")]
    NonPositiveCost { blueprint_id: u64, resource_id: u64 },
}
