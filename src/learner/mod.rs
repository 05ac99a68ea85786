//! Online learners that adapt between games
//!
//! - `HotColdLearner`: threshold for the hot/cold hint
//! - `HintBandit`: epsilon-greedy choice of hint style

mod bandit;
mod hot_cold;

pub use bandit::{HintBandit, StyleStats};
pub use hot_cold::{DEFAULT_K, GameRecord, HotColdLearner, MAX_K, MIN_K};
