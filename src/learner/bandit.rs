//! Epsilon-greedy hint style selection
//!
//! Tracks the average attempts-to-win per hint style and, most of the time,
//! picks the style with the lowest average.

use crate::core::HintStyle;
use rand::Rng;
use rand::prelude::IndexedRandom;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Weight kept from the previous average on each update
const KEEP_WEIGHT: f64 = 0.8;

/// Running statistics for one hint style
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StyleStats {
    /// Games won with this style
    pub attempts: u64,
    /// Smoothed attempts-to-win (0.0 until the first game)
    pub avg_attempts: f64,
}

impl StyleStats {
    /// Fold in one game: exact value on the first game, EMA afterwards
    fn record(&mut self, attempts: u32) {
        self.attempts = self.attempts.saturating_add(1);
        self.avg_attempts = if self.attempts == 1 {
            f64::from(attempts)
        } else {
            KEEP_WEIGHT * self.avg_attempts + (1.0 - KEEP_WEIGHT) * f64::from(attempts)
        };
    }
}

/// Epsilon-greedy bandit over a fixed, ordered set of hint styles
///
/// Every configured style always has an entry in the statistics map.
#[derive(Debug, Clone)]
pub struct HintBandit {
    exploration_rate: f64,
    stats: BTreeMap<HintStyle, StyleStats>,
    total_games: u64,
}

impl HintBandit {
    /// Create a bandit over `styles`
    ///
    /// An empty `styles` means every style. `exploration_rate` is clamped to `[0, 1]`.
    #[must_use]
    pub fn new(styles: &[HintStyle], exploration_rate: f64) -> Self {
        let styles: &[HintStyle] = if styles.is_empty() {
            &HintStyle::ALL
        } else {
            styles
        };
        Self {
            exploration_rate: exploration_rate.clamp(0.0, 1.0),
            stats: styles.iter().map(|&s| (s, StyleStats::default())).collect(),
            total_games: 0,
        }
    }

    /// Configured styles in iteration order
    pub fn styles(&self) -> impl Iterator<Item = HintStyle> + '_ {
        self.stats.keys().copied()
    }

    #[must_use]
    pub fn stats(&self, style: HintStyle) -> Option<&StyleStats> {
        self.stats.get(&style)
    }

    /// Overwrite stored statistics for a configured style
    ///
    /// Returns `false` and changes nothing for a style this bandit doesn't track.
    pub fn restore(&mut self, style: HintStyle, stats: StyleStats) -> bool {
        match self.stats.get_mut(&style) {
            Some(slot) => {
                *slot = stats;
                true
            }
            None => false,
        }
    }

    #[inline]
    #[must_use]
    pub const fn exploration_rate(&self) -> f64 {
        self.exploration_rate
    }

    /// Games recorded since this bandit was created
    #[inline]
    #[must_use]
    pub const fn total_games(&self) -> u64 {
        self.total_games
    }

    /// Pick a hint style for the next game
    ///
    /// With probability `exploration_rate` a uniformly random style,
    /// otherwise the first style with the lowest average attempts.
    ///
    /// # Panics
    /// Never panics. The bandit always tracks at least one style.
    pub fn select_hint_style<R: Rng>(&self, rng: &mut R) -> HintStyle {
        if rng.random::<f64>() < self.exploration_rate {
            let styles: Vec<HintStyle> = self.styles().collect();
            let style = *styles.choose(rng).expect("bandit has at least one style");
            debug!(%style, "exploring hint style");
            return style;
        }

        let style = self.best_style().expect("bandit has at least one style");
        debug!(%style, "exploiting hint style");
        style
    }

    /// Style with the lowest average, first in iteration order on ties
    #[must_use]
    pub fn best_style(&self) -> Option<HintStyle> {
        self.stats
            .iter()
            .min_by(|(_, a), (_, b)| a.avg_attempts.total_cmp(&b.avg_attempts))
            .map(|(&style, _)| style)
    }

    /// Record a won game played with `style`
    pub fn update_stats(&mut self, style: HintStyle, attempts: u32) {
        let Some(stats) = self.stats.get_mut(&style) else {
            warn!(%style, "ignoring result for untracked hint style");
            return;
        };
        stats.record(attempts);
        self.total_games = self.total_games.saturating_add(1);

        debug!(
            %style,
            games = stats.attempts,
            avg_attempts = stats.avg_attempts,
            "updated hint style stats"
        );
    }
}

impl Default for HintBandit {
    /// All styles, 10% exploration
    fn default() -> Self {
        Self::new(&HintStyle::ALL, 0.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn greedy() -> HintBandit {
        HintBandit::new(&HintStyle::ALL, 0.0)
    }

    #[test]
    fn every_style_has_stats() {
        let bandit = HintBandit::default();
        for style in HintStyle::ALL {
            assert_eq!(bandit.stats(style), Some(&StyleStats::default()));
        }
        assert_eq!(bandit.styles().collect::<Vec<_>>(), HintStyle::ALL);
    }

    #[test]
    fn first_game_sets_average_exactly() {
        let mut bandit = greedy();
        bandit.update_stats(HintStyle::Range, 7);

        let stats = bandit.stats(HintStyle::Range).unwrap();
        assert_eq!(stats.attempts, 1);
        assert!((stats.avg_attempts - 7.0).abs() < f64::EPSILON);
        assert_eq!(bandit.total_games(), 1);
    }

    #[test]
    fn later_games_blend() {
        let mut bandit = greedy();
        bandit.update_stats(HintStyle::HotCold, 10);
        bandit.update_stats(HintStyle::HotCold, 5);

        // 0.8 * 10 + 0.2 * 5
        let stats = bandit.stats(HintStyle::HotCold).unwrap();
        assert_eq!(stats.attempts, 2);
        assert!((stats.avg_attempts - 9.0).abs() < 1e-12);
    }

    #[test]
    fn greedy_ties_go_to_first_style() {
        let mut rng = StdRng::seed_from_u64(1);
        let bandit = greedy();
        for _ in 0..20 {
            assert_eq!(bandit.select_hint_style(&mut rng), HintStyle::HotCold);
        }
    }

    #[test]
    fn greedy_picks_lowest_average() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut bandit = greedy();
        bandit.update_stats(HintStyle::HotCold, 9);
        bandit.update_stats(HintStyle::HigherLower, 4);
        bandit.update_stats(HintStyle::Range, 6);
        assert_eq!(bandit.select_hint_style(&mut rng), HintStyle::HigherLower);

        // Tie between higher_lower and range: first in order wins
        bandit.restore(
            HintStyle::Range,
            StyleStats {
                attempts: 1,
                avg_attempts: 4.0,
            },
        );
        assert_eq!(bandit.select_hint_style(&mut rng), HintStyle::HigherLower);
    }

    #[test]
    fn unplayed_style_counts_as_zero_average() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut bandit = greedy();
        bandit.update_stats(HintStyle::HotCold, 3);
        assert_eq!(bandit.select_hint_style(&mut rng), HintStyle::HigherLower);
    }

    #[test]
    fn full_exploration_reaches_every_style() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut bandit = HintBandit::new(&HintStyle::ALL, 1.0);
        bandit.update_stats(HintStyle::HigherLower, 1);

        let mut seen = std::collections::BTreeSet::new();
        for _ in 0..200 {
            seen.insert(bandit.select_hint_style(&mut rng));
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn subset_bandit_ignores_untracked_style() {
        let mut bandit = HintBandit::new(&[HintStyle::Range], 0.0);
        bandit.update_stats(HintStyle::HotCold, 5);
        assert_eq!(bandit.total_games(), 0);
        assert_eq!(bandit.stats(HintStyle::HotCold), None);
        assert!(!bandit.restore(HintStyle::HotCold, StyleStats::default()));
        assert_eq!(bandit.best_style(), Some(HintStyle::Range));
    }

    #[test]
    fn empty_style_list_means_all() {
        let bandit = HintBandit::new(&[], 0.0);
        assert_eq!(bandit.styles().count(), 3);
    }

    #[test]
    fn exploration_rate_clamped() {
        let eager = HintBandit::new(&HintStyle::ALL, 3.0);
        assert!((eager.exploration_rate() - 1.0).abs() < f64::EPSILON);
        assert!(HintBandit::new(&HintStyle::ALL, -1.0).exploration_rate().abs() < f64::EPSILON);
    }

    #[test]
    fn game_counts_saturate() {
        let mut bandit = greedy();
        bandit.restore(
            HintStyle::Range,
            StyleStats {
                attempts: u64::MAX,
                avg_attempts: 5.0,
            },
        );
        bandit.update_stats(HintStyle::Range, 5);

        let stats = bandit.stats(HintStyle::Range).unwrap();
        assert_eq!(stats.attempts, u64::MAX);
        assert!((stats.avg_attempts - 5.0).abs() < 1e-12);
    }
}
