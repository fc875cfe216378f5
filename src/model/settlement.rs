use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::building::BuildingBlueprint;
use super::traits::LeaderTrait;

/// The character leading a settlement, with the traits that steer its
/// building policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettlementLeader {
    pub character_id: u64,
    pub traits: Vec<LeaderTrait>,
}

/// Snapshot of a settlement's decision-relevant state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settlement {
    pub id: u64,
    pub name: String,
    pub leader: Option<SettlementLeader>,
    /// Resource id -> stockpiled quantity.
    pub resources: BTreeMap<u64, u32>,
    /// Blueprint ids already constructed here.
    pub buildings: BTreeSet<u64>,
}

impl Settlement {
    /// Strict affordability: every required resource must be stocked in
    /// full. A single shortfall disqualifies the blueprint.
    pub fn can_afford(&self, blueprint: &BuildingBlueprint) -> bool {
        blueprint
            .cost
            .iter()
            .all(|(resource_id, &required)| {
                self.resources.get(resource_id).copied().unwrap_or(0) >= required
            })
    }
}
