use rand::RngCore;
use serde::{Deserialize, Serialize};

/// Personality traits a settlement leader can hold.
///
/// Each trait pulls building preference toward one or more attribute
/// categories; the weighting lives in the decision layer's weight table.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(into = "String", try_from = "String")]
pub enum LeaderTrait {
    Defensive,
    Aggressive,
    Supportive,
    Strategic,
    Economical,
    Expansive,
    Cultural,
    Spiritual,
}

string_enum!(LeaderTrait {
    Defensive => "defensive",
    Aggressive => "aggressive",
    Supportive => "supportive",
    Strategic => "strategic",
    Economical => "economical",
    Expansive => "expansive",
    Cultural => "cultural",
    Spiritual => "spiritual",
});

/// Opposing pairs: a leader cannot hold both traits in a pair.
pub const OPPOSING_PAIRS: [(LeaderTrait, LeaderTrait); 2] = [
    (LeaderTrait::Defensive, LeaderTrait::Expansive),
    (LeaderTrait::Aggressive, LeaderTrait::Supportive),
];

/// All traits in order, used for weighted selection.
const ALL_TRAITS: [LeaderTrait; 8] = [
    LeaderTrait::Defensive,
    LeaderTrait::Aggressive,
    LeaderTrait::Supportive,
    LeaderTrait::Strategic,
    LeaderTrait::Economical,
    LeaderTrait::Expansive,
    LeaderTrait::Cultural,
    LeaderTrait::Spiritual,
];

fn archetype_weight(archetype: &str, t: LeaderTrait) -> u32 {
    match archetype {
        "warlord" => match t {
            LeaderTrait::Aggressive => 4,
            LeaderTrait::Strategic => 3,
            LeaderTrait::Expansive => 2,
            _ => 1,
        },
        "steward" => match t {
            LeaderTrait::Economical => 4,
            LeaderTrait::Supportive => 3,
            LeaderTrait::Defensive => 2,
            _ => 1,
        },
        "zealot" => match t {
            LeaderTrait::Spiritual => 4,
            LeaderTrait::Cultural => 3,
            LeaderTrait::Defensive => 2,
            _ => 1,
        },
        "founder" => match t {
            LeaderTrait::Expansive => 4,
            LeaderTrait::Economical => 2,
            LeaderTrait::Strategic => 2,
            _ => 1,
        },
        // anything else: uniform
        _ => 1,
    }
}

fn opposite_of(t: LeaderTrait) -> Option<LeaderTrait> {
    for &(a, b) in &OPPOSING_PAIRS {
        if t == a {
            return Some(b);
        }
        if t == b {
            return Some(a);
        }
    }
    None
}

/// Generate 2-4 traits for a settlement leader based on archetype,
/// respecting opposing constraints.
pub fn generate_leader_traits(archetype: &str, rng: &mut dyn RngCore) -> Vec<LeaderTrait> {
    // Decide count: 2 (50%), 3 (35%), 4 (15%)
    let roll: u32 = rng.next_u32() % 100;
    let count = if roll < 50 {
        2
    } else if roll < 85 {
        3
    } else {
        4
    };

    let mut chosen: Vec<LeaderTrait> = Vec::with_capacity(count);

    for _ in 0..count {
        // Candidate weights excluding already-chosen traits and their opposites
        let mut candidates: Vec<(LeaderTrait, u32)> = Vec::new();
        for &t in &ALL_TRAITS {
            if chosen.contains(&t) {
                continue;
            }
            if let Some(opp) = opposite_of(t)
                && chosen.contains(&opp)
            {
                continue;
            }
            candidates.push((t, archetype_weight(archetype, t)));
        }
        let Some(&(last, _)) = candidates.last() else {
            break;
        };

        let total: u32 = candidates.iter().map(|(_, w)| w).sum();
        let mut roll = rng.next_u32() % total;
        let mut picked = last;
        for &(t, w) in &candidates {
            if roll < w {
                picked = t;
                break;
            }
            roll -= w;
        }
        chosen.push(picked);
    }

    chosen
}
