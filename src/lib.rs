//! Adaptive number guessing game
//!
//! A console game that learns from its player between games:
//! - a hot/cold hint threshold tuned toward a target number of guesses
//! - an epsilon-greedy choice among hint styles
//! - a position bias (`alpha`) used when the game guesses the player's number
//!
//! # Example
//! ```
//! use adaptive_guess::core::HintStyle;
//! use adaptive_guess::learner::HintBandit;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut bandit = HintBandit::new(&HintStyle::ALL, 0.0);
//! bandit.update_stats(HintStyle::HotCold, 6);
//! bandit.update_stats(HintStyle::HigherLower, 4);
//! bandit.update_stats(HintStyle::Range, 5);
//!
//! let mut rng = StdRng::seed_from_u64(0);
//! assert_eq!(bandit.select_hint_style(&mut rng), HintStyle::HigherLower);
//! ```

pub mod app;
pub mod config;
pub mod console;
pub mod core;
pub mod game;
pub mod hints;
pub mod learner;
pub mod profile;

pub use config::{ConfigError, GameSettings};
pub use game::{AdaptiveGame, RoundOutcome};
pub use profile::UserProfile;
