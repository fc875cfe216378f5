use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::model::{BuildingBlueprint, Settlement};

use super::evaluation::BuildingEvaluator;

/// Outcome of one decision cycle.
///
/// `NoAction` is an ordinary result of scarcity, a leaderless settlement,
/// or an empty catalogue — not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum SettlementDecision {
    Build { blueprint_id: u64, score: f64 },
    NoAction,
}

/// Top-level expansion policy: picks the next building for a settlement
/// from the evaluation ranking.
///
/// Pure function of the snapshot — resource deduction and construction
/// persistence stay with the caller, which owns the transaction.
#[derive(Debug, Clone, Default)]
pub struct DecisionEngine {
    evaluator: BuildingEvaluator,
}

impl DecisionEngine {
    pub fn new(evaluator: BuildingEvaluator) -> Self {
        Self { evaluator }
    }

    /// Choose the highest-scoring affordable blueprint, or `NoAction` when
    /// nothing qualifies.
    pub fn decide(
        &self,
        settlement: &Settlement,
        catalogue: &[BuildingBlueprint],
    ) -> Result<SettlementDecision, ValidationError> {
        let Some(leader) = &settlement.leader else {
            tracing::warn!("settlement {} has no leader, skipping expansion", settlement.id);
            return Ok(SettlementDecision::NoAction);
        };

        let ranked = self
            .evaluator
            .recommend(settlement, &leader.traits, catalogue)?;

        match ranked.into_iter().find(|r| r.affordable) {
            Some(top) => Ok(SettlementDecision::Build {
                blueprint_id: top.blueprint_id,
                score: top.score,
            }),
            None => {
                tracing::debug!("settlement {} cannot afford any blueprint", settlement.id);
                Ok(SettlementDecision::NoAction)
            }
        }
    }
}
