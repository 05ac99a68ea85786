//! Inclusive search range
//!
//! Both game modes shrink a `[lo, hi]` window toward the hidden value.
//! Narrowing only ever raises `lo` or lowers `hi`.

use std::fmt;
use thiserror::Error;

/// Errors from building or narrowing a range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RangeError {
    /// `lo > hi` at construction
    #[error("empty range [{lo}, {hi}]")]
    Empty { lo: i64, hi: i64 },
    /// A narrowing step left no value in the range
    #[error("no value satisfies the answers given (range became [{lo}, {hi}])")]
    Contradiction { lo: i64, hi: i64 },
}

/// A non-empty inclusive integer range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchRange {
    lo: i64,
    hi: i64,
}

impl SearchRange {
    /// Create a new range
    ///
    /// # Errors
    /// Returns `RangeError::Empty` if `lo > hi`.
    ///
    /// # Examples
    /// ```
    /// use adaptive_guess::core::SearchRange;
    ///
    /// let range = SearchRange::new(1, 100).unwrap();
    /// assert_eq!(range.width(), 100);
    /// assert_eq!(range.biased_guess(0.5), 51);
    ///
    /// assert!(SearchRange::new(5, 4).is_err());
    /// ```
    pub const fn new(lo: i64, hi: i64) -> Result<Self, RangeError> {
        if lo > hi {
            return Err(RangeError::Empty { lo, hi });
        }
        Ok(Self { lo, hi })
    }

    /// The opening range `[1, size]` of a game (`size` of 0 treated as 1)
    #[must_use]
    pub fn opening(size: u32) -> Self {
        Self {
            lo: 1,
            hi: i64::from(size.max(1)),
        }
    }

    /// Lower bound (inclusive)
    #[inline]
    #[must_use]
    pub const fn lo(&self) -> i64 {
        self.lo
    }

    /// Upper bound (inclusive)
    #[inline]
    #[must_use]
    pub const fn hi(&self) -> i64 {
        self.hi
    }

    /// Number of values in the range, `hi - lo + 1`
    #[inline]
    #[must_use]
    pub const fn width(&self) -> i64 {
        self.hi - self.lo + 1
    }

    #[inline]
    #[must_use]
    pub const fn contains(&self, value: i64) -> bool {
        self.lo <= value && value <= self.hi
    }

    /// Normalized position of `value` in `[0, 1]`
    ///
    /// Returns `None` for a single-value range, where position is meaningless.
    #[must_use]
    pub fn position_of(&self, value: i64) -> Option<f64> {
        if self.hi > self.lo {
            Some((value - self.lo) as f64 / (self.hi - self.lo) as f64)
        } else {
            None
        }
    }

    /// Guess at fraction `alpha` of the way through the range
    ///
    /// Rounds half away from zero and clamps back into the range.
    #[must_use]
    pub fn biased_guess(&self, alpha: f64) -> i64 {
        let guess = if self.hi > self.lo {
            (self.lo as f64 + (self.hi - self.lo) as f64 * alpha).round() as i64
        } else {
            self.lo
        };
        guess.clamp(self.lo, self.hi)
    }

    /// The hidden value is above `guess`
    ///
    /// # Errors
    /// Returns `RangeError::Contradiction` if nothing remains.
    pub fn above(self, guess: i64) -> Result<Self, RangeError> {
        Self::narrowed(self.lo.max(guess + 1), self.hi)
    }

    /// The hidden value is below `guess`
    ///
    /// # Errors
    /// Returns `RangeError::Contradiction` if nothing remains.
    pub fn below(self, guess: i64) -> Result<Self, RangeError> {
        Self::narrowed(self.lo, self.hi.min(guess - 1))
    }

    const fn narrowed(lo: i64, hi: i64) -> Result<Self, RangeError> {
        if lo > hi {
            Err(RangeError::Contradiction { lo, hi })
        } else {
            Ok(Self { lo, hi })
        }
    }
}

impl fmt::Display for SearchRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lo, self.hi)
    }
}
