//! Core types shared by the learners and the game

mod hint_style;
mod range;

pub use hint_style::{HintStyle, HintStyleError};
pub use range::{RangeError, SearchRange};
