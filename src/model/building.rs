use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Attribute categories a building can count toward. Matched against
/// leader-trait weights when scoring blueprints.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(into = "String", try_from = "String")]
pub enum BuildingAttribute {
    Defensive,
    Economic,
    Expansion,
    Cultural,
    Spiritual,
    Military,
    Residential,
    Production,
    Administrative,
    Infrastructure,
}

string_enum!(BuildingAttribute {
    Defensive => "defensive",
    Economic => "economic",
    Expansion => "expansion",
    Cultural => "cultural",
    Spiritual => "spiritual",
    Military => "military",
    Residential => "residential",
    Production => "production",
    Administrative => "administrative",
    Infrastructure => "infrastructure",
});

/// Blueprint for a constructible building.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildingBlueprint {
    pub id: u64,
    pub name: String,
    /// Attribute categories this building counts toward.
    pub attributes: BTreeSet<BuildingAttribute>,
    /// Resource id -> required quantity; every entry must be positive.
    pub cost: BTreeMap<u64, u32>,
    /// Resource-output multiplier granted once built, if any.
    pub production_bonus: Option<f64>,
    /// Defense multiplier granted once built, if any.
    pub defense_bonus: Option<f64>,
}

impl BuildingBlueprint {
    /// A cost entry of zero is a malformed catalogue row, not a free
    /// building.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (&resource_id, &quantity) in &self.cost {
            if quantity == 0 {
                return Err(ValidationError::NonPositiveCost {
                    blueprint_id: self.id,
                    resource_id,
                });
            }
        }
        Ok(())
    }
}
