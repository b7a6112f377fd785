//! Score calculation: base scores per judgment level scaled by a
//! combo-driven multiplier.

/// Combo count at which the multiplier starts ramping.
pub const COMBO_BONUS_THRESHOLD: u32 = 10;
/// Multiplier reached at the top of the ramp.
pub const MAX_COMBO_MULTIPLIER: f64 = 2.0;
/// Combo span over which the ramp runs (threshold + span = full bonus).
const COMBO_RAMP_SPAN: f64 = 100.0;

/// Score multiplier for the given combo: 1.0 below the threshold, then
/// a linear ramp to `MAX_COMBO_MULTIPLIER` over the next 100 combo.
pub fn combo_multiplier(combo: u32) -> f64 {
    if combo < COMBO_BONUS_THRESHOLD {
        return 1.0;
    }
    let bonus_ratio = ((combo - COMBO_BONUS_THRESHOLD) as f64 / COMBO_RAMP_SPAN).min(1.0);
    1.0 + (MAX_COMBO_MULTIPLIER - 1.0) * bonus_ratio
}

/// Final score for an event: `floor(base * multiplier)`, using the
/// combo as it stood before the event.
pub fn event_score(base_score: u32, combo: u32) -> u32 {
    (base_score as f64 * combo_multiplier(combo)).floor() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiplier_flat_below_threshold() {
        assert_eq!(combo_multiplier(0), 1.0);
        assert_eq!(combo_multiplier(9), 1.0);
    }

    #[test]
    fn multiplier_ramps_linearly() {
        assert_eq!(combo_multiplier(10), 1.0);
        assert_eq!(combo_multiplier(60), 1.5);
        assert_eq!(combo_multiplier(110), 2.0);
    }

    #[test]
    fn multiplier_caps_at_max() {
        assert_eq!(combo_multiplier(110), MAX_COMBO_MULTIPLIER);
        assert_eq!(combo_multiplier(500), MAX_COMBO_MULTIPLIER);
    }

    #[test]
    fn event_score_floors() {
        // combo 15 -> multiplier 1.05; 700 * 1.05 = 735
        assert_eq!(event_score(700, 15), 735);
        // combo 11 -> multiplier 1.01; 300 * 1.01 = 303
        assert_eq!(event_score(300, 11), 303);
        // combo 13 -> 1.03; 1000 * 1.03 = 1030
        assert_eq!(event_score(1000, 13), 1030);
        assert_eq!(event_score(0, 50), 0);
    }

    #[test]
    fn event_score_without_bonus() {
        assert_eq!(event_score(1000, 0), 1000);
        assert_eq!(event_score(700, 9), 700);
    }
}
