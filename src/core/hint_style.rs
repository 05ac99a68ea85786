//! Hint style identifiers
//!
//! The closed set of hint styles the bandit chooses between.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A style of hint given after each guess
///
/// Declaration order is the fixed iteration order used for tie-breaking,
/// so `Ord` follows it too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HintStyle {
    /// Binary proximity against the learned hot threshold
    HotCold,
    /// Direction only
    HigherLower,
    /// Four-tier distance relative to the current range width
    Range,
}

/// Error type for unknown style identifiers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown hint style '{0}'")]
pub struct HintStyleError(pub String);

impl HintStyle {
    /// Every style, in iteration order
    pub const ALL: [Self; 3] = [Self::HotCold, Self::HigherLower, Self::Range];

    /// Stable identifier used in persisted records
    ///
    /// # Examples
    /// ```
    /// use adaptive_guess::core::HintStyle;
    ///
    /// assert_eq!(HintStyle::HigherLower.id(), "higher_lower");
    /// assert_eq!("range".parse::<HintStyle>(), Ok(HintStyle::Range));
    /// assert!("loud".parse::<HintStyle>().is_err());
    /// ```
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::HotCold => "hot_cold",
            Self::HigherLower => "higher_lower",
            Self::Range => "range",
        }
    }
}

impl FromStr for HintStyle {
    type Err = HintStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|style| style.id() == s)
            .ok_or_else(|| HintStyleError(s.to_string()))
    }
}

impl fmt::Display for HintStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_parse_back() {
        for style in HintStyle::ALL {
            assert_eq!(style.id().parse::<HintStyle>(), Ok(style));
        }
    }

    #[test]
    fn unknown_id_rejected() {
        assert_eq!(
            "HOT_COLD".parse::<HintStyle>(),
            Err(HintStyleError("HOT_COLD".to_string()))
        );
        assert!("".parse::<HintStyle>().is_err());
    }

    #[test]
    fn ordering_follows_declaration() {
        let mut shuffled = vec![HintStyle::Range, HintStyle::HotCold, HintStyle::HigherLower];
        shuffled.sort();
        assert_eq!(shuffled, HintStyle::ALL);
    }

    #[test]
    fn serde_uses_ids() {
        let json = serde_json::to_string(&HintStyle::HotCold).unwrap();
        assert_eq!(json, "\"hot_cold\"");

        let style: HintStyle = serde_json::from_str("\"higher_lower\"").unwrap();
        assert_eq!(style, HintStyle::HigherLower);
    }

    #[test]
    fn display_matches_id() {
        assert_eq!(format!("{}", HintStyle::Range), "range");
    }
}
