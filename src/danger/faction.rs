use std::collections::BTreeSet;

use crate::config::DangerTuning;
use crate::error::ValidationError;
use crate::model::CharacterFactionRelationship;

/// Signed danger adjustment from a character's standing with a faction.
///
/// Linear in reputation with the sign fixed by contract: higher reputation
/// means safer passage. With the default divisor of 20, +100 reputation
/// yields -5.0 and -100 yields +5.0. Callers with no standing use 0.0
/// (neutral) instead of calling this.
pub fn danger_adjustment(
    relationship: &CharacterFactionRelationship,
    tuning: &DangerTuning,
) -> Result<f64, ValidationError> {
    relationship.validate()?;
    Ok(-f64::from(relationship.reputation_score) / tuning.reputation_divisor)
}

/// The most adverse applicable standing: lowest reputation among
/// `relationships` whose faction appears in `faction_ids`.
///
/// Assessment is pessimistic by contract — the worst standing governs, not
/// the average. Ties on reputation break by faction id for reproducibility.
pub fn most_adverse<'a>(
    relationships: &'a [CharacterFactionRelationship],
    faction_ids: &BTreeSet<u64>,
) -> Option<&'a CharacterFactionRelationship> {
    relationships
        .iter()
        .filter(|r| faction_ids.contains(&r.faction_id))
        .min_by_key(|r| (r.reputation_score, r.faction_id))
}
