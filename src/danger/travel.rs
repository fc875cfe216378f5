use crate::config::DangerTuning;
use crate::error::ValidationError;
use crate::model::{CharacterFactionRelationship, TravelLink, WildlifePopulation};

use super::{faction, wildlife};

/// Baseline overland pace in km/h that `TravelLink::speed` multiplies.
const BASE_TRAVEL_KMH: f64 = 4.0;

/// Effective danger of traveling a link, on the same scale as its
/// `base_danger_level`.
///
/// Starts from base x terrain. Wildlife resident along the route adds its
/// summed effective danger scaled down by `wildlife_normalizer`. If the
/// traveler has standing with any faction on the route, the most adverse
/// standing applies — never an average of several. The result is clamped
/// to zero: an escorted road is safe, not negatively dangerous.
///
/// `route_wildlife` holds the populations of the link's biomes as supplied
/// by the snapshot provider; an empty `traveler_relationships` slice means
/// no traveler (or one unknown to every faction), which adjusts nothing.
pub fn effective_danger(
    link: &TravelLink,
    route_wildlife: &[WildlifePopulation],
    traveler_relationships: &[CharacterFactionRelationship],
    tuning: &DangerTuning,
) -> Result<f64, ValidationError> {
    link.validate(tuning)?;

    let mut level = f64::from(link.base_danger_level) * link.terrain_modifier;

    let mut wildlife_sum = 0.0;
    for population in route_wildlife {
        wildlife_sum += wildlife::effective_danger(population, tuning)?;
    }
    level += wildlife_sum / tuning.wildlife_normalizer;

    if let Some(worst) = faction::most_adverse(traveler_relationships, &link.faction_ids) {
        level += faction::danger_adjustment(worst, tuning)?;
    }

    tracing::debug!("travel link {} assessed at danger {level:.2}", link.id);
    Ok(level.max(0.0))
}

/// Estimated hours to traverse the link, or `None` when the route has no
/// surveyed distance. Rough terrain slows travel the same way it raises
/// danger: multiplicatively.
pub fn travel_time_hours(
    link: &TravelLink,
    tuning: &DangerTuning,
) -> Result<Option<f64>, ValidationError> {
    link.validate(tuning)?;
    let Some(distance) = link.distance_km else {
        return Ok(None);
    };
    Ok(Some(
        distance / (BASE_TRAVEL_KMH * link.speed) * link.terrain_modifier,
    ))
}
