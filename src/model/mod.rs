#[macro_use]
mod macros;

pub mod building;
pub mod faction;
pub mod location;
pub mod settlement;
pub mod traits;
pub mod travel;
pub mod wildlife;

pub use building::{BuildingAttribute, BuildingBlueprint};
pub use faction::{CharacterFactionRelationship, RelationshipStatus};
pub use location::LocationInstance;
pub use settlement::{Settlement, SettlementLeader};
pub use traits::{LeaderTrait, OPPOSING_PAIRS, generate_leader_traits};
pub use travel::{TravelLink, Visibility};
pub use wildlife::{ThreatLevel, WildlifePopulation};
