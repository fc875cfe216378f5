use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::model::{BuildingBlueprint, LeaderTrait, Settlement};

use super::weights::TraitWeightTable;

/// One scored blueprint in a recommendation ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub blueprint_id: u64,
    /// Summed attribute weight under the leader's trait profile. Retained
    /// even for unaffordable entries so exports still show the affinity.
    pub score: f64,
    /// Whether the settlement can currently cover the full cost table.
    pub affordable: bool,
}

/// Scores every available blueprint against a leader's trait profile and
/// the settlement's stores.
#[derive(Debug, Clone, Default)]
pub struct BuildingEvaluator {
    weights: TraitWeightTable,
}

impl BuildingEvaluator {
    pub fn new(weights: TraitWeightTable) -> Self {
        Self { weights }
    }

    /// Rank `catalogue` for `settlement`, best first.
    ///
    /// Score is the summed weight of the blueprint's attribute tags under
    /// the leader's trait profile. Unaffordable blueprints are demoted
    /// below every affordable one; blueprints already standing in the
    /// settlement are excluded. Ties break by blueprint id ascending, so
    /// identical snapshots always produce identical rankings.
    pub fn recommend(
        &self,
        settlement: &Settlement,
        leader_traits: &[LeaderTrait],
        catalogue: &[BuildingBlueprint],
    ) -> Result<Vec<Recommendation>, ValidationError> {
        let weights = self.weights.weights_for(leader_traits);

        let mut ranked = Vec::with_capacity(catalogue.len());
        for blueprint in catalogue {
            blueprint.validate()?;
            if settlement.buildings.contains(&blueprint.id) {
                continue;
            }
            let score: f64 = blueprint
                .attributes
                .iter()
                .filter_map(|attribute| weights.get(attribute))
                .sum();
            ranked.push(Recommendation {
                blueprint_id: blueprint.id,
                score,
                affordable: settlement.can_afford(blueprint),
            });
        }

        ranked.sort_by(|a, b| {
            b.affordable
                .cmp(&a.affordable)
                .then(b.score.total_cmp(&a.score))
                .then(a.blueprint_id.cmp(&b.blueprint_id))
        });

        tracing::debug!(
            "ranked {} blueprints for settlement {}",
            ranked.len(),
            settlement.id
        );
        Ok(ranked)
    }
}
