//! Hints shown to the player after each guess

mod strategy;

pub use strategy::{
    HigherLowerHints, HintStrategy, HintStrategyType, HotColdHints, LUKEWARM_RATIO, RangeHints,
    VERY_CLOSE_RATIO, WARM_RATIO,
};

use std::fmt;

/// Feedback for one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hint {
    /// Within the learned hot threshold
    Hot,
    /// Outside the learned hot threshold
    Cold,
    /// The secret is above the guess
    Higher,
    /// The secret is at or below the guess
    Lower,
    /// Within 10% of the current range width
    VeryClose,
    /// Within 30% of the current range width
    Warm,
    /// Within 50% of the current range width
    Lukewarm,
    /// Further than half the current range width
    Far,
}

impl Hint {
    /// Whether the hint signals the guess is near the secret
    #[must_use]
    pub const fn is_warm(self) -> bool {
        matches!(self, Self::Hot | Self::VeryClose | Self::Warm)
    }
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Hot => "🔥 HOT!",
            Self::Cold => "❄️ COLD!",
            Self::Higher => "Higher!",
            Self::Lower => "Lower!",
            Self::VeryClose => "🔥 Very close!",
            Self::Warm => "🔥 Getting warm!",
            Self::Lukewarm => "🌤️ Lukewarm",
            Self::Far => "❄️ Far away!",
        };
        f.write_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_texts() {
        assert_eq!(Hint::Hot.to_string(), "🔥 HOT!");
        assert_eq!(Hint::Cold.to_string(), "❄️ COLD!");
        assert_eq!(Hint::Higher.to_string(), "Higher!");
        assert_eq!(Hint::Far.to_string(), "❄️ Far away!");
    }

    #[test]
    fn warmth() {
        assert!(Hint::Hot.is_warm());
        assert!(Hint::Warm.is_warm());
        assert!(!Hint::Lukewarm.is_warm());
        assert!(!Hint::Higher.is_warm());
    }
}
