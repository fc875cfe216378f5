use crate::config::DangerTuning;
use crate::error::ValidationError;
use crate::model::WildlifePopulation;

/// Fully-modified danger contribution of a wildlife population.
///
/// Base is `danger_rating x population`. Pack hunters gain a bonus
/// multiplier of `pack_bonus_per_pack` per complete pack, where a complete
/// pack needs `pack_size_max` individuals and fewer than `pack_size_min`
/// individuals cannot form a pack at all. Modifiers only amplify: the
/// result is never below the base.
pub fn effective_danger(
    population: &WildlifePopulation,
    tuning: &DangerTuning,
) -> Result<f64, ValidationError> {
    population.validate()?;
    if population.population == 0 {
        return Ok(0.0);
    }
    let base = f64::from(population.danger_rating) * f64::from(population.population);
    if !population.pack_behavior {
        return Ok(base);
    }
    let packs = if population.population < population.pack_size_min {
        0
    } else {
        population.population / population.pack_size_max
    };
    let bonus = f64::from(packs) * tuning.pack_bonus_per_pack;
    Ok(base * (1.0 + bonus))
}
