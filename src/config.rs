//! Game settings
//!
//! Tunables for the learners and the location of stored profiles.

use std::path::PathBuf;
use thiserror::Error;

/// Invalid settings
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("target guesses must be at least 1")]
    ZeroTargetGuesses,
    #[error("learning rate must be finite and positive, got {0}")]
    InvalidLearningRate(f64),
    #[error("exploration rate must be within [0, 1], got {0}")]
    InvalidExplorationRate(f64),
}

/// Learner tunables plus the profile directory
#[derive(Debug, Clone, PartialEq)]
pub struct GameSettings {
    /// Guesses per game the hot/cold learner aims for (default: 3)
    pub target_guesses: u32,

    /// Hot/cold threshold step size (default: 0.1)
    pub learning_rate: f64,

    /// Probability of picking a random hint style (default: 0.1)
    pub exploration_rate: f64,

    /// Where `user_<name>.json` records live (default: current directory)
    pub profile_dir: PathBuf,
}

impl GameSettings {
    /// Check every tunable is usable
    ///
    /// # Errors
    /// Returns the first `ConfigError` found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.target_guesses == 0 {
            return Err(ConfigError::ZeroTargetGuesses);
        }
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(ConfigError::InvalidLearningRate(self.learning_rate));
        }
        if !(0.0..=1.0).contains(&self.exploration_rate) {
            return Err(ConfigError::InvalidExplorationRate(self.exploration_rate));
        }
        Ok(())
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            target_guesses: 3,
            learning_rate: 0.1,
            exploration_rate: 0.1,
            profile_dir: PathBuf::from("."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(GameSettings::default().validate(), Ok(()));
    }

    #[test]
    fn zero_target_rejected() {
        let settings = GameSettings {
            target_guesses: 0,
            ..GameSettings::default()
        };
        assert_eq!(settings.validate(), Err(ConfigError::ZeroTargetGuesses));
    }

    #[test]
    fn bad_rates_rejected() {
        let settings = GameSettings {
            learning_rate: 0.0,
            ..GameSettings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::InvalidLearningRate(_))
        ));

        let settings = GameSettings {
            learning_rate: f64::NAN,
            ..GameSettings::default()
        };
        assert!(settings.validate().is_err());

        let settings = GameSettings {
            exploration_rate: 1.5,
            ..GameSettings::default()
        };
        assert_eq!(
            settings.validate(),
            Err(ConfigError::InvalidExplorationRate(1.5))
        );
    }

    #[test]
    fn exploration_bounds_inclusive() {
        for rate in [0.0, 1.0] {
            let settings = GameSettings {
                exploration_rate: rate,
                ..GameSettings::default()
            };
            assert_eq!(settings.validate(), Ok(()));
        }
    }
}
