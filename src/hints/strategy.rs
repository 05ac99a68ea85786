//! Hint strategies
//!
//! Defines the `HintStrategy` trait and one implementation per hint style.

use super::Hint;
use crate::core::{HintStyle, SearchRange};
use crate::learner::HotColdLearner;

/// Distance ratio below which the range hint says "very close"
pub const VERY_CLOSE_RATIO: f64 = 0.1;
/// Distance ratio below which the range hint says "warm"
pub const WARM_RATIO: f64 = 0.3;
/// Distance ratio below which the range hint says "lukewarm"
pub const LUKEWARM_RATIO: f64 = 0.5;

/// A way of turning a guess into feedback for the player
pub trait HintStrategy {
    /// Produce the hint for `guess` given the hidden `secret` and the current range
    fn hint(&self, guess: i64, secret: i64, range: SearchRange) -> Hint;
}

/// Enum wrapper for all hint strategies
///
/// Built once per game from the style the bandit chose.
pub enum HintStrategyType<'a> {
    /// Hot or cold against the learner's threshold
    HotCold(HotColdHints<'a>),
    /// Plain direction to the secret
    HigherLower(HigherLowerHints),
    /// Distance tiers relative to the range width
    Range(RangeHints),
}

impl<'a> HintStrategyType<'a> {
    /// Strategy for `style`, reading the hot threshold from `learner`
    #[must_use]
    pub const fn for_style(style: HintStyle, learner: &'a HotColdLearner) -> Self {
        match style {
            HintStyle::HotCold => Self::HotCold(HotColdHints { learner }),
            HintStyle::HigherLower => Self::HigherLower(HigherLowerHints),
            HintStyle::Range => Self::Range(RangeHints),
        }
    }
}

impl HintStrategy for HintStrategyType<'_> {
    fn hint(&self, guess: i64, secret: i64, range: SearchRange) -> Hint {
        match self {
            Self::HotCold(s) => s.hint(guess, secret, range),
            Self::HigherLower(s) => s.hint(guess, secret, range),
            Self::Range(s) => s.hint(guess, secret, range),
        }
    }
}

/// Hot/cold against the learned threshold
pub struct HotColdHints<'a> {
    pub learner: &'a HotColdLearner,
}

impl HintStrategy for HotColdHints<'_> {
    fn hint(&self, guess: i64, secret: i64, range: SearchRange) -> Hint {
        if self.learner.is_hot(guess, secret, range) {
            Hint::Hot
        } else {
            Hint::Cold
        }
    }
}

/// Direction only
///
/// An exact match reads as "lower", since only `guess < secret` says higher.
pub struct HigherLowerHints;

impl HintStrategy for HigherLowerHints {
    fn hint(&self, guess: i64, secret: i64, _range: SearchRange) -> Hint {
        if guess < secret {
            Hint::Higher
        } else {
            Hint::Lower
        }
    }
}

/// Four tiers of distance relative to the current range width
pub struct RangeHints;

impl HintStrategy for RangeHints {
    fn hint(&self, guess: i64, secret: i64, range: SearchRange) -> Hint {
        let distance = (guess - secret).abs() as f64;
        let width = range.width() as f64;

        if distance < width * VERY_CLOSE_RATIO {
            Hint::VeryClose
        } else if distance < width * WARM_RATIO {
            Hint::Warm
        } else if distance < width * LUKEWARM_RATIO {
            Hint::Lukewarm
        } else {
            Hint::Far
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(lo: i64, hi: i64) -> SearchRange {
        SearchRange::new(lo, hi).unwrap()
    }

    #[test]
    fn hot_cold_follows_learner() {
        let learner = HotColdLearner::default();
        let strategy = HintStrategyType::for_style(HintStyle::HotCold, &learner);

        // k = 0.3 on width 100 → threshold 30
        assert_eq!(strategy.hint(71, 50, range(1, 100)), Hint::Hot);
        assert_eq!(strategy.hint(80, 50, range(1, 100)), Hint::Cold);
    }

    #[test]
    fn hot_cold_tracks_learned_k() {
        let mut learner = HotColdLearner::default();
        learner.set_k(0.1);
        let strategy = HotColdHints { learner: &learner };
        assert_eq!(strategy.hint(71, 50, range(1, 100)), Hint::Cold);
        assert_eq!(strategy.hint(55, 50, range(1, 100)), Hint::Hot);
    }

    #[test]
    fn higher_lower_direction() {
        let strategy = HigherLowerHints;
        assert_eq!(strategy.hint(10, 50, range(1, 100)), Hint::Higher);
        assert_eq!(strategy.hint(90, 50, range(1, 100)), Hint::Lower);
        assert_eq!(strategy.hint(50, 50, range(1, 100)), Hint::Lower);
    }

    #[test]
    fn range_tiers_at_boundaries() {
        let strategy = RangeHints;
        let r = range(1, 100);

        // width 100: tiers break at 10, 30, 50
        assert_eq!(strategy.hint(50, 50, r), Hint::VeryClose);
        assert_eq!(strategy.hint(59, 50, r), Hint::VeryClose);
        assert_eq!(strategy.hint(60, 50, r), Hint::Warm);
        assert_eq!(strategy.hint(79, 50, r), Hint::Warm);
        assert_eq!(strategy.hint(80, 50, r), Hint::Lukewarm);
        assert_eq!(strategy.hint(99, 50, r), Hint::Lukewarm);
        assert_eq!(strategy.hint(1, 51, r), Hint::Far);
    }

    #[test]
    fn range_tiers_use_current_width() {
        let strategy = RangeHints;
        // Distance 5 is very close on [1, 100] but far on [40, 49]
        assert_eq!(strategy.hint(45, 50, range(1, 100)), Hint::VeryClose);
        assert_eq!(strategy.hint(40, 45, range(40, 49)), Hint::Far);
    }

    #[test]
    fn wrapper_dispatches_by_style() {
        let learner = HotColdLearner::default();
        let r = range(1, 100);
        assert!(matches!(
            HintStrategyType::for_style(HintStyle::HigherLower, &learner),
            HintStrategyType::HigherLower(_)
        ));
        assert_eq!(
            HintStrategyType::for_style(HintStyle::Range, &learner).hint(1, 100, r),
            Hint::Far
        );
    }
}
