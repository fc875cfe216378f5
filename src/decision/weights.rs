use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::model::{BuildingAttribute, LeaderTrait};

/// Partial weights each trait contributes, as (trait, attribute, weight)
/// rows. Primary attributes weigh 1.0, secondary leanings 0.3-0.5.
const DEFAULT_TRAIT_WEIGHTS: &[(LeaderTrait, BuildingAttribute, f64)] = &[
    (LeaderTrait::Defensive, BuildingAttribute::Defensive, 1.0),
    (LeaderTrait::Defensive, BuildingAttribute::Military, 0.5),
    (LeaderTrait::Aggressive, BuildingAttribute::Military, 1.0),
    (LeaderTrait::Aggressive, BuildingAttribute::Expansion, 0.5),
    (LeaderTrait::Supportive, BuildingAttribute::Residential, 1.0),
    (LeaderTrait::Supportive, BuildingAttribute::Infrastructure, 1.0),
    (LeaderTrait::Strategic, BuildingAttribute::Defensive, 1.0),
    (LeaderTrait::Strategic, BuildingAttribute::Military, 0.5),
    (LeaderTrait::Strategic, BuildingAttribute::Administrative, 1.0),
    (LeaderTrait::Economical, BuildingAttribute::Economic, 1.0),
    (LeaderTrait::Economical, BuildingAttribute::Production, 1.0),
    (LeaderTrait::Expansive, BuildingAttribute::Expansion, 1.0),
    (LeaderTrait::Expansive, BuildingAttribute::Residential, 0.5),
    (LeaderTrait::Expansive, BuildingAttribute::Economic, 0.3),
    (LeaderTrait::Cultural, BuildingAttribute::Cultural, 1.0),
    (LeaderTrait::Cultural, BuildingAttribute::Spiritual, 0.5),
    (LeaderTrait::Spiritual, BuildingAttribute::Spiritual, 1.0),
    (LeaderTrait::Spiritual, BuildingAttribute::Cultural, 0.5),
];

/// Data-driven mapping from leader traits to building-attribute weights.
///
/// Injected into the evaluator rather than consulted as module state, so an
/// alternative policy is a constructor away and the scorer needs no global
/// setup to test.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraitWeightTable {
    rows: Vec<(LeaderTrait, BuildingAttribute, f64)>,
}

impl Default for TraitWeightTable {
    fn default() -> Self {
        Self {
            rows: DEFAULT_TRAIT_WEIGHTS.to_vec(),
        }
    }
}

impl TraitWeightTable {
    /// A table with no rows; every trait set scores to nothing.
    pub fn empty() -> Self {
        Self { rows: Vec::new() }
    }

    /// Append a weighting row. Rows accumulate: adding a second row for the
    /// same (trait, attribute) pair sums with the first.
    pub fn with_weight(
        mut self,
        leader_trait: LeaderTrait,
        attribute: BuildingAttribute,
        weight: f64,
    ) -> Self {
        self.rows.push((leader_trait, attribute, weight));
        self
    }

    /// Summed per-category weights for a trait set.
    ///
    /// Weights from multiple traits compound per category — no
    /// normalization, so a leader whose traits all pull one way prefers
    /// that category proportionally harder. Duplicate traits in the input
    /// count once.
    pub fn weights_for(&self, traits: &[LeaderTrait]) -> BTreeMap<BuildingAttribute, f64> {
        let held: BTreeSet<LeaderTrait> = traits.iter().copied().collect();
        let mut weights = BTreeMap::new();
        for &(leader_trait, attribute, weight) in &self.rows {
            if held.contains(&leader_trait) {
                *weights.entry(attribute).or_insert(0.0) += weight;
            }
        }
        weights
    }
}
