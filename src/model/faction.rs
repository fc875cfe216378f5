use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Standing bands derived from reputation score.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(into = "String", try_from = "String")]
pub enum RelationshipStatus {
    Hostile,
    Unfriendly,
    Neutral,
    Friendly,
    Allied,
}

string_enum!(RelationshipStatus {
    Hostile => "hostile",
    Unfriendly => "unfriendly",
    Neutral => "neutral",
    Friendly => "friendly",
    Allied => "allied",
});

impl RelationshipStatus {
    /// Band edges at ±25 and ±75; scores on an edge fall into the more
    /// extreme band.
    pub fn from_score(score: i32) -> Self {
        match score {
            i32::MIN..=-75 => RelationshipStatus::Hostile,
            -74..=-25 => RelationshipStatus::Unfriendly,
            -24..=24 => RelationshipStatus::Neutral,
            25..=74 => RelationshipStatus::Friendly,
            _ => RelationshipStatus::Allied,
        }
    }
}

/// Snapshot of one character's standing with one faction.
///
/// The stored `status` band belongs to the persistence layer; danger policy
/// reads only the numeric score, so a stale band cannot skew routing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterFactionRelationship {
    pub character_id: u64,
    pub faction_id: u64,
    /// Standing from -100 (sworn enemy) to +100 (trusted ally).
    pub reputation_score: i32,
    pub status: RelationshipStatus,
}

impl CharacterFactionRelationship {
    /// Build a snapshot with the status band derived from the score.
    pub fn from_score(character_id: u64, faction_id: u64, reputation_score: i32) -> Self {
        Self {
            character_id,
            faction_id,
            reputation_score,
            status: RelationshipStatus::from_score(reputation_score),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(-100..=100).contains(&self.reputation_score) {
            return Err(ValidationError::ReputationOutOfRange {
                character_id: self.character_id,
                faction_id: self.faction_id,
                score: self.reputation_score,
            });
        }
        Ok(())
    }
}
