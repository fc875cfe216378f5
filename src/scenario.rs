//! Snapshot builders for tests and examples.
//!
//! [`Scenario`] assembles the immutable snapshots the engine consumes,
//! minting ids monotonically so fixtures stay deterministic without a
//! shared registry. Returned values are plain structs — tweak fields
//! directly where a fixture needs something unusual.

use std::collections::{BTreeMap, BTreeSet};

use crate::model::{
    BuildingAttribute, BuildingBlueprint, CharacterFactionRelationship, LeaderTrait,
    LocationInstance, Settlement, SettlementLeader, TravelLink, Visibility, WildlifePopulation,
};

#[derive(Debug)]
pub struct Scenario {
    next_id: u64,
}

impl Scenario {
    pub fn new() -> Self {
        Self { next_id: 1 }
    }

    fn next_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// A docile, solitary population of the given size and rating.
    pub fn wildlife(&mut self, name: &str, population: i32, danger_rating: i32) -> WildlifePopulation {
        WildlifePopulation {
            id: self.next_id(),
            name: name.to_string(),
            population,
            danger_rating,
            pack_behavior: false,
            pack_size_min: 1,
            pack_size_max: 1,
            max_population: population.max(10),
            spawn_rate: 0.1,
        }
    }

    /// Same as [`wildlife`](Self::wildlife) but hunting in packs of
    /// `min..=max` individuals.
    pub fn pack_wildlife(
        &mut self,
        name: &str,
        population: i32,
        danger_rating: i32,
        pack_size_min: i32,
        pack_size_max: i32,
    ) -> WildlifePopulation {
        let mut pop = self.wildlife(name, population, danger_rating);
        pop.pack_behavior = true;
        pop.pack_size_min = pack_size_min;
        pop.pack_size_max = pack_size_max;
        pop
    }

    /// A plain visible trail between two locations: speed 1.0, neutral
    /// terrain, base danger 1, no factions or biomes.
    pub fn travel_link(&mut self, name: &str, from_location: u64, to_location: u64) -> TravelLink {
        TravelLink {
            id: self.next_id(),
            name: name.to_string(),
            from_location,
            to_location,
            speed: 1.0,
            visibility: Visibility::default(),
            base_danger_level: 1,
            biome_ids: BTreeSet::new(),
            faction_ids: BTreeSet::new(),
            terrain_modifier: 1.0,
            distance_km: None,
        }
    }

    /// An uncontrolled location at the default base danger of 1.
    pub fn location(&mut self, name: &str) -> LocationInstance {
        LocationInstance {
            id: self.next_id(),
            name: name.to_string(),
            base_danger_level: 1,
            controlling_faction: None,
            wildlife: Vec::new(),
            sub_type: None,
        }
    }

    /// A standing snapshot with the status band derived from the score.
    pub fn relationship(
        &mut self,
        character_id: u64,
        faction_id: u64,
        reputation_score: i32,
    ) -> CharacterFactionRelationship {
        CharacterFactionRelationship::from_score(character_id, faction_id, reputation_score)
    }

    /// A free blueprint tagged with the given attributes; add cost entries
    /// directly for affordability fixtures.
    pub fn blueprint(&mut self, name: &str, attributes: &[BuildingAttribute]) -> BuildingBlueprint {
        BuildingBlueprint {
            id: self.next_id(),
            name: name.to_string(),
            attributes: attributes.iter().copied().collect(),
            cost: BTreeMap::new(),
            production_bonus: None,
            defense_bonus: None,
        }
    }

    /// A settlement led by a character with the given traits and an empty
    /// stockpile.
    pub fn settlement(&mut self, name: &str, leader_traits: &[LeaderTrait]) -> Settlement {
        Settlement {
            id: self.next_id(),
            name: name.to_string(),
            leader: Some(SettlementLeader {
                character_id: self.next_id(),
                traits: leader_traits.to_vec(),
            }),
            resources: BTreeMap::new(),
            buildings: BTreeSet::new(),
        }
    }
}

impl Default for Scenario {
    fn default() -> Self {
        Self::new()
    }
}
