//! Per-user adaptive state
//!
//! A `UserProfile` owns the learners for one player and converts to and
//! from the stored `ProfileRecord`.

pub mod store;

pub use store::{ProfileError, ProfileRecord, ProfileStore, StyleRecord, is_valid_username};

use crate::config::{ConfigError, GameSettings};
use crate::core::HintStyle;
use crate::learner::{HintBandit, HotColdLearner, StyleStats};
use tracing::{debug, warn};

/// Smallest range the game will shrink to
pub const MIN_RANGE_SIZE: u32 = 10;
/// Largest range the game will grow to
pub const MAX_RANGE_SIZE: u32 = 10_000;
/// Range for a new player
pub const DEFAULT_RANGE_SIZE: u32 = 100;
/// Position bias for a new player
pub const DEFAULT_ALPHA: f64 = 0.5;

/// Outcome of loading a profile
#[derive(Debug)]
pub enum LoadStatus {
    /// A stored record was applied
    Restored,
    /// No record existed; defaults in use
    Fresh,
    /// A record existed but couldn't be read; defaults in use
    Failed(ProfileError),
}

/// Adaptive state for one player
#[derive(Debug, Clone)]
pub struct UserProfile {
    /// Player name, also the record key
    pub username: String,
    /// Where in a range this player tends to guess, smoothed
    pub alpha: f64,
    /// Smoothed attempts per won game; `None` before the first win
    pub avg_attempts: Option<f64>,
    /// Upper bound of the opening range `[1, range_size]`
    pub range_size: u32,
    /// Won human-guess games
    pub games_played: u64,
    /// Hot/cold threshold learner
    pub hot_cold: HotColdLearner,
    /// Hint style selector
    pub bandit: HintBandit,
}

impl UserProfile {
    /// New profile with default learners
    #[must_use]
    pub fn new(username: impl Into<String>) -> Self {
        Self::with_learners(username, HotColdLearner::default(), HintBandit::default())
    }

    /// New profile with learners tuned by `settings`
    ///
    /// # Errors
    /// Returns `ConfigError` if the settings are invalid.
    pub fn with_settings(
        username: impl Into<String>,
        settings: &GameSettings,
    ) -> Result<Self, ConfigError> {
        settings.validate()?;
        let hot_cold = HotColdLearner::new(settings.target_guesses, settings.learning_rate)?;
        let bandit = HintBandit::new(&HintStyle::ALL, settings.exploration_rate);
        Ok(Self::with_learners(username, hot_cold, bandit))
    }

    fn with_learners(
        username: impl Into<String>,
        hot_cold: HotColdLearner,
        bandit: HintBandit,
    ) -> Self {
        Self {
            username: username.into(),
            alpha: DEFAULT_ALPHA,
            avg_attempts: None,
            range_size: DEFAULT_RANGE_SIZE,
            games_played: 0,
            hot_cold,
            bandit,
        }
    }

    /// Populate from `store`, keeping defaults on any failure
    ///
    /// Never fails: a read or parse error is returned inside
    /// `LoadStatus::Failed` and the profile stays at its defaults.
    pub fn load(&mut self, store: &ProfileStore) -> LoadStatus {
        match store.load(&self.username) {
            Ok(Some(record)) => {
                self.apply_record(&record);
                LoadStatus::Restored
            }
            Ok(None) => LoadStatus::Fresh,
            Err(e) => {
                warn!(username = %self.username, error = %e, "falling back to default profile");
                LoadStatus::Failed(e)
            }
        }
    }

    /// Write the full current state under `username`
    ///
    /// # Errors
    /// Returns `ProfileError` if the record can't be written.
    pub fn save(&self, store: &ProfileStore) -> Result<std::path::PathBuf, ProfileError> {
        store.save(&self.to_record())
    }

    /// Snapshot as a storable record
    #[must_use]
    pub fn to_record(&self) -> ProfileRecord {
        let hint_style_stats = self
            .bandit
            .styles()
            .filter_map(|style| {
                self.bandit.stats(style).map(|s| {
                    (
                        style.id().to_string(),
                        StyleRecord {
                            attempts: s.attempts,
                            avg_attempts: s.avg_attempts,
                        },
                    )
                })
            })
            .collect();

        ProfileRecord {
            username: self.username.clone(),
            alpha: self.alpha,
            avg_attempts: self.avg_attempts,
            range_size: self.range_size,
            games_played: self.games_played,
            hot_cold_k: Some(self.hot_cold.k()),
            hint_style_stats,
        }
    }

    /// Overwrite state from `record`
    ///
    /// `range_size` and `k` are clamped into bounds; unknown styles are skipped.
    pub fn apply_record(&mut self, record: &ProfileRecord) {
        self.alpha = record.alpha;
        self.avg_attempts = record.avg_attempts;
        self.range_size = record.range_size.clamp(MIN_RANGE_SIZE, MAX_RANGE_SIZE);
        self.games_played = record.games_played;

        if let Some(k) = record.hot_cold_k {
            self.hot_cold.set_k(k);
        }

        for (name, stats) in &record.hint_style_stats {
            let Ok(style) = name.parse::<HintStyle>() else {
                debug!(style = %name, "skipping unknown hint style");
                continue;
            };
            self.bandit.restore(
                style,
                StyleStats {
                    attempts: stats.attempts,
                    avg_attempts: stats.avg_attempts,
                },
            );
        }
    }
}
