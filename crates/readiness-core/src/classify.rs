//! Recommendation tier classification.
//!
//! Rules are checked in order and the first match wins; no rule matching
//! means [`Recommendation::No`].

use serde::{Deserialize, Serialize};

use crate::model::Recommendation;

/// The only scores the tier depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TierInputs {
    pub overall: u32,
    pub psychometric: u32,
    pub technical: u32,
}

/// A tier and the condition that grants it.
pub type TierRule = (fn(&TierInputs) -> bool, Recommendation);

pub const TIER_RULES: [TierRule; 2] = [
    (strong_fit, Recommendation::Yes),
    (partial_fit, Recommendation::Maybe),
];

fn strong_fit(s: &TierInputs) -> bool {
    s.overall >= 75 && s.psychometric >= 70 && s.technical >= 60
}

fn partial_fit(s: &TierInputs) -> bool {
    s.overall >= 55 && (s.psychometric >= 60 || s.technical >= 50)
}

pub fn classify(inputs: TierInputs) -> Recommendation {
    TIER_RULES
        .iter()
        .find(|(matches, _)| matches(&inputs))
        .map(|&(_, tier)| tier)
        .unwrap_or(Recommendation::No)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tier(overall: u32, psychometric: u32, technical: u32) -> Recommendation {
        classify(TierInputs {
            overall,
            psychometric,
            technical,
        })
    }

    #[test]
    fn yes_needs_all_three_thresholds() {
        assert_eq!(tier(75, 70, 60), Recommendation::Yes);
        assert_eq!(tier(74, 70, 60), Recommendation::Maybe);
        assert_eq!(tier(75, 69, 60), Recommendation::Maybe);
        assert_eq!(tier(75, 70, 59), Recommendation::Maybe);
    }

    #[test]
    fn maybe_needs_overall_and_one_strength() {
        assert_eq!(tier(55, 60, 0), Recommendation::Maybe);
        assert_eq!(tier(55, 0, 50), Recommendation::Maybe);
        assert_eq!(tier(55, 59, 49), Recommendation::No);
        assert_eq!(tier(54, 100, 100), Recommendation::No);
    }

    #[test]
    fn first_match_wins() {
        // Satisfies both rules; the earlier one decides.
        let inputs = TierInputs {
            overall: 90,
            psychometric: 90,
            technical: 90,
        };
        assert!(TIER_RULES.iter().all(|(matches, _)| matches(&inputs)));
        assert_eq!(classify(inputs), Recommendation::Yes);
    }

    #[test]
    fn empty_assessment_is_no() {
        assert_eq!(tier(20, 0, 0), Recommendation::No);
    }
}
