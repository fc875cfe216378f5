pub mod config;
pub mod danger;
pub mod decision;
pub mod error;
pub mod flush;
pub mod model;
pub mod scenario;

pub use config::DangerTuning;
pub use decision::{
    BuildingEvaluator, DecisionEngine, Recommendation, SettlementDecision, TraitWeightTable,
};
pub use error::ValidationError;
pub use model::{
    BuildingAttribute, BuildingBlueprint, CharacterFactionRelationship, LeaderTrait,
    LocationInstance, RelationshipStatus, Settlement, SettlementLeader, ThreatLevel, TravelLink,
    Visibility, WildlifePopulation,
};
pub use scenario::Scenario;
