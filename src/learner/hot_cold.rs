//! Hot/cold threshold learner
//!
//! Learns the fraction `k` of the current range within which a guess counts
//! as "hot". After each won game `k` moves by a fixed-rate step depending on
//! whether the player met the target number of guesses.

use crate::config::ConfigError;
use crate::core::SearchRange;
use tracing::debug;

/// Lowest allowed threshold multiplier
pub const MIN_K: f64 = 0.1;
/// Highest allowed threshold multiplier
pub const MAX_K: f64 = 0.8;
/// Threshold multiplier for a fresh learner
pub const DEFAULT_K: f64 = 0.3;

/// One completed game as seen by the learner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRecord {
    /// Guesses the player needed
    pub actual_guesses: u32,
    /// Guesses the learner expected
    pub predicted_guesses: u32,
}

/// Learner for the hot/cold threshold multiplier
///
/// `k` always lies in `[MIN_K, MAX_K]`.
#[derive(Debug, Clone)]
pub struct HotColdLearner {
    k: f64,
    target_guesses: u32,
    learning_rate: f64,
    history: Vec<GameRecord>,
}

impl HotColdLearner {
    /// Create a learner aiming for `target_guesses` per game
    ///
    /// # Errors
    /// Returns `ConfigError::ZeroTargetGuesses` for a zero target and
    /// `ConfigError::InvalidLearningRate` for a non-finite or non-positive rate.
    pub fn new(target_guesses: u32, learning_rate: f64) -> Result<Self, ConfigError> {
        if target_guesses == 0 {
            return Err(ConfigError::ZeroTargetGuesses);
        }
        if !learning_rate.is_finite() || learning_rate <= 0.0 {
            return Err(ConfigError::InvalidLearningRate(learning_rate));
        }
        Ok(Self {
            k: DEFAULT_K,
            target_guesses,
            learning_rate,
            history: Vec::new(),
        })
    }

    /// Current threshold multiplier
    #[inline]
    #[must_use]
    pub const fn k(&self) -> f64 {
        self.k
    }

    /// Restore a stored multiplier, clamped into bounds
    pub fn set_k(&mut self, k: f64) {
        self.k = if k.is_nan() { DEFAULT_K } else { k.clamp(MIN_K, MAX_K) };
    }

    #[inline]
    #[must_use]
    pub const fn target_guesses(&self) -> u32 {
        self.target_guesses
    }

    /// Games recorded this session, oldest first
    #[must_use]
    pub fn history(&self) -> &[GameRecord] {
        &self.history
    }

    /// Whether `guess` is within `k * width` of `secret`
    ///
    /// # Examples
    /// ```
    /// use adaptive_guess::core::SearchRange;
    /// use adaptive_guess::learner::HotColdLearner;
    ///
    /// let learner = HotColdLearner::default(); // k = 0.3
    /// let range = SearchRange::new(1, 100).unwrap();
    /// assert!(learner.is_hot(40, 50, range));
    /// assert!(!learner.is_hot(80, 50, range));
    /// ```
    #[must_use]
    pub fn is_hot(&self, guess: i64, secret: i64, range: SearchRange) -> bool {
        let distance = (guess - secret).abs() as f64;
        let threshold = self.k * range.width() as f64;
        distance < threshold
    }

    /// Record a won game and adapt `k`
    ///
    /// The prediction is the target itself, so the update reduces to a
    /// two-way rule on `actual_guesses <= target_guesses`.
    pub fn record_game(&mut self, actual_guesses: u32) {
        let predicted_guesses = self.target_guesses;
        self.history.push(GameRecord {
            actual_guesses,
            predicted_guesses,
        });
        self.update_k(actual_guesses, predicted_guesses);
    }

    fn update_k(&mut self, actual_guesses: u32, predicted_guesses: u32) {
        let target = f64::from(self.target_guesses);
        let previous = self.k;

        if actual_guesses <= self.target_guesses {
            // Player is on target: widen the hot zone
            self.k += self.learning_rate * (1.0 - f64::from(predicted_guesses) / target);
        } else {
            // Hints were too generous: narrow it
            self.k -= self.learning_rate * (f64::from(actual_guesses) / target - 1.0);
        }
        self.k = self.k.clamp(MIN_K, MAX_K);

        debug!(
            actual_guesses,
            predicted_guesses,
            previous,
            k = self.k,
            "updated hot/cold threshold"
        );
    }
}

impl Default for HotColdLearner {
    /// Target of 3 guesses, learning rate 0.1
    fn default() -> Self {
        Self {
            k: DEFAULT_K,
            target_guesses: 3,
            learning_rate: 0.1,
            history: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn range(lo: i64, hi: i64) -> SearchRange {
        SearchRange::new(lo, hi).unwrap()
    }

    #[test]
    fn zero_target_is_config_error() {
        assert!(matches!(
            HotColdLearner::new(0, 0.1),
            Err(ConfigError::ZeroTargetGuesses)
        ));
        assert!(matches!(
            HotColdLearner::new(3, -0.1),
            Err(ConfigError::InvalidLearningRate(_))
        ));
    }

    #[test]
    fn default_starts_at_default_k() {
        let learner = HotColdLearner::default();
        assert!((learner.k() - DEFAULT_K).abs() < f64::EPSILON);
        assert_eq!(learner.target_guesses(), 3);
        assert!(learner.history().is_empty());
    }

    #[test]
    fn is_hot_uses_strict_threshold() {
        // k = 0.3, width = 10 → threshold 3.0
        let learner = HotColdLearner::default();
        let r = range(1, 10);
        assert!(learner.is_hot(3, 5, r)); // distance 2
        assert!(!learner.is_hot(2, 5, r)); // distance 3 is not < 3.0
        assert!(learner.is_hot(5, 5, r));
    }

    #[test]
    fn is_hot_scales_with_current_range() {
        let learner = HotColdLearner::default();
        // Same distance, narrower range: no longer hot
        assert!(learner.is_hot(40, 50, range(1, 100)));
        assert!(!learner.is_hot(40, 50, range(40, 60)));
    }

    #[test]
    fn on_target_game_leaves_k_unchanged() {
        // predicted == target, so the success step is zero
        let mut learner = HotColdLearner::default();
        learner.record_game(3);
        assert!((learner.k() - DEFAULT_K).abs() < f64::EPSILON);

        learner.record_game(1);
        assert!((learner.k() - DEFAULT_K).abs() < f64::EPSILON);
    }

    #[test]
    fn slow_game_narrows_hot_zone() {
        let mut learner = HotColdLearner::default();
        learner.record_game(6);
        // 0.3 - 0.1 * (6/3 - 1) = 0.2
        assert!((learner.k() - 0.2).abs() < 1e-12);
    }

    #[test]
    fn very_slow_games_hit_floor() {
        let mut learner = HotColdLearner::default();
        learner.record_game(30);
        assert!((learner.k() - MIN_K).abs() < f64::EPSILON);
        learner.record_game(30);
        assert!((learner.k() - MIN_K).abs() < f64::EPSILON);
    }

    #[test]
    fn history_records_prediction_as_target() {
        let mut learner = HotColdLearner::new(5, 0.2).unwrap();
        learner.record_game(2);
        learner.record_game(9);
        assert_eq!(
            learner.history(),
            &[
                GameRecord {
                    actual_guesses: 2,
                    predicted_guesses: 5
                },
                GameRecord {
                    actual_guesses: 9,
                    predicted_guesses: 5
                },
            ]
        );
    }

    #[test]
    fn k_stays_in_bounds_for_any_sequence() {
        let mut rng = StdRng::seed_from_u64(7);
        for target in 1..=6 {
            let mut learner = HotColdLearner::new(target, 0.35).unwrap();
            for _ in 0..500 {
                learner.record_game(rng.random_range(1..=40));
                assert!((MIN_K..=MAX_K).contains(&learner.k()));
            }
        }
    }

    #[test]
    fn set_k_clamps() {
        let mut learner = HotColdLearner::default();
        learner.set_k(2.0);
        assert!((learner.k() - MAX_K).abs() < f64::EPSILON);
        learner.set_k(0.0);
        assert!((learner.k() - MIN_K).abs() < f64::EPSILON);
        learner.set_k(f64::NAN);
        assert!((learner.k() - DEFAULT_K).abs() < f64::EPSILON);
        learner.set_k(0.45);
        assert!((learner.k() - 0.45).abs() < f64::EPSILON);
    }
}
