use crate::config::DangerTuning;
use crate::error::ValidationError;
use crate::model::{CharacterFactionRelationship, LocationInstance};

use super::{faction, wildlife};

/// Resident danger of a location: its base level, its wildlife, and the
/// observer's standing with the controlling faction.
///
/// A location has exactly one controller, so there is no worst-case
/// selection here — a standing toward any other faction contributes
/// nothing, as does the absence of a controller or of a standing record.
/// Clamped to zero like the travel aggregation.
pub fn resident_danger(
    location: &LocationInstance,
    observer_relationship: Option<&CharacterFactionRelationship>,
    tuning: &DangerTuning,
) -> Result<f64, ValidationError> {
    location.validate(tuning)?;

    let mut level = f64::from(location.base_danger_level);

    let mut wildlife_sum = 0.0;
    for population in &location.wildlife {
        wildlife_sum += wildlife::effective_danger(population, tuning)?;
    }
    level += wildlife_sum / tuning.wildlife_normalizer;

    if let (Some(controller), Some(rel)) = (location.controlling_faction, observer_relationship)
        && rel.faction_id == controller
    {
        level += faction::danger_adjustment(rel, tuning)?;
    }

    Ok(level.max(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::WildlifePopulation;

    fn marsh() -> LocationInstance {
        LocationInstance {
            id: 1,
            name: "Blackfen".to_string(),
            base_danger_level: 1,
            controlling_faction: None,
            wildlife: vec![],
            sub_type: Some("marsh".to_string()),
        }
    }

    fn serpents() -> WildlifePopulation {
        WildlifePopulation {
            id: 2,
            name: "fen serpent".to_string(),
            population: 10,
            danger_rating: 2,
            pack_behavior: false,
            pack_size_min: 1,
            pack_size_max: 1,
            max_population: 30,
            spawn_rate: 0.1,
        }
    }

    #[test]
    fn uncontrolled_empty_location_is_its_base_level() {
        let tuning = DangerTuning::default();
        let level = resident_danger(&marsh(), None, &tuning).unwrap();
        assert_eq!(level, 1.0);
    }

    #[test]
    fn resident_wildlife_raises_the_level() {
        let tuning = DangerTuning::default();
        let mut loc = marsh();
        loc.wildlife.push(serpents());
        // 10 serpents at rating 2 -> 20, normalized by 10 -> +2
        let level = resident_danger(&loc, None, &tuning).unwrap();
        assert_eq!(level, 3.0);
    }

    #[test]
    fn good_standing_with_the_controller_calms_the_place() {
        let tuning = DangerTuning::default();
        let mut loc = marsh();
        loc.base_danger_level = 4;
        loc.controlling_faction = Some(7);
        let rel = CharacterFactionRelationship::from_score(1, 7, 40);
        let level = resident_danger(&loc, Some(&rel), &tuning).unwrap();
        assert_eq!(level, 2.0); // 4 - 40/20
    }

    #[test]
    fn standing_with_a_non_controller_changes_nothing() {
        let tuning = DangerTuning::default();
        let mut loc = marsh();
        loc.base_danger_level = 4;
        loc.controlling_faction = Some(7);
        let rel = CharacterFactionRelationship::from_score(1, 8, -100);
        let level = resident_danger(&loc, Some(&rel), &tuning).unwrap();
        assert_eq!(level, 4.0);
    }

    #[test]
    fn clamped_at_zero_for_welcome_guests() {
        let tuning = DangerTuning::default();
        let mut loc = marsh();
        loc.controlling_faction = Some(7);
        let rel = CharacterFactionRelationship::from_score(1, 7, 100);
        let level = resident_danger(&loc, Some(&rel), &tuning).unwrap();
        assert_eq!(level, 0.0);
    }
}
