use serde::{Deserialize, Serialize};

/// Central numeric policy for danger assessment.
///
/// All tuning constants live here and are injected into the calculators,
/// so policy changes are data, not code edits, and tests can pin exact
/// values without global setup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DangerTuning {
    /// Bonus multiplier contributed by each complete pack a wildlife
    /// population can field.
    pub pack_bonus_per_pack: f64,
    /// Maps reputation in [-100, 100] onto a signed danger adjustment:
    /// adjustment = -reputation / divisor, so +100 reputation lowers the
    /// level by 100 / divisor.
    pub reputation_divisor: f64,
    /// Scales summed wildlife danger down to a bounded delta on the link
    /// and location scale, so a teeming route raises danger without
    /// dwarfing the base level.
    pub wildlife_normalizer: f64,
    /// Upper bound of the shared danger scale; base levels are validated
    /// against it.
    pub max_danger_level: i32,
}

impl Default for DangerTuning {
    fn default() -> Self {
        Self {
            pack_bonus_per_pack: 0.5,
            reputation_divisor: 20.0,
            wildlife_normalizer: 10.0,
            max_danger_level: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_maps_full_reputation_to_five_levels() {
        let tuning = DangerTuning::default();
        assert_eq!(100.0 / tuning.reputation_divisor, 5.0);
    }

    #[test]
    fn serde_round_trip() {
        let tuning = DangerTuning::default();
        let json = serde_json::to_value(&tuning).unwrap();
        let back: DangerTuning = serde_json::from_value(json).unwrap();
        assert_eq!(back, tuning);
    }
}
