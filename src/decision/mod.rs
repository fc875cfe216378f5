//! Settlement building policy: trait weighting, blueprint evaluation, and
//! the expansion decision.

mod engine;
mod evaluation;
mod weights;

pub use engine::{DecisionEngine, SettlementDecision};
pub use evaluation::{BuildingEvaluator, Recommendation};
pub use weights::TraitWeightTable;
