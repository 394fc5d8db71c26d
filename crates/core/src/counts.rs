use core::fmt;
use core::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

macro_rules! count_newtype {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(usize);

        impl $name {
            #[inline]
            pub const fn new(value: usize) -> Self {
                Self(value)
            }

            #[inline]
            pub const fn zero() -> Self {
                Self(0)
            }

            #[inline]
            pub const fn value(self) -> usize {
                self.0
            }

            #[inline]
            pub const fn is_zero(self) -> bool {
                self.0 == 0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::zero()
            }
        }

        impl Add for $name {
            type Output = Self;

            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0.saturating_add(rhs.0))
            }
        }

        impl AddAssign for $name {
            fn add_assign(&mut self, rhs: Self) {
                self.0 = self.0.saturating_add(rhs.0);
            }
        }

        impl From<usize> for $name {
            fn from(value: usize) -> Self {
                Self::new(value)
            }
        }

        impl PartialEq<usize> for $name {
            fn eq(&self, other: &usize) -> bool {
                self.0 == *other
            }
        }

        impl PartialEq<$name> for usize {
            fn eq(&self, other: &$name) -> bool {
                *self == other.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

count_newtype!(
    /// Number of whitespace-delimited tokens in the extracted text.
    WordCount
);

count_newtype!(
    /// Length of the raw document, markup included.
    CharCount
);

/// Rounded Flesch reading-ease score, always within `0..=100`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct ReadabilityScore(u8);

impl ReadabilityScore {
    pub const MAX: Self = Self(100);

    /// Returns `None` when `value` is above 100.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value <= 100 { Some(Self(value)) } else { None }
    }

    /// Rounds half up after clamping to `0..=100`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_f64(value: f64) -> Self {
        let clamped = value.clamp(0.0, 100.0);
        // NaN survives clamp; `as` maps it to 0.
        let rounded = (clamped + 0.5) as u8;
        Self(rounded.min(100))
    }

    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for ReadabilityScore {
    type Error = &'static str;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or("readability score must be within 0..=100")
    }
}

impl From<ReadabilityScore> for u8 {
    fn from(score: ReadabilityScore) -> Self {
        score.0
    }
}

impl PartialEq<u8> for ReadabilityScore {
    fn eq(&self, other: &u8) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for ReadabilityScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eq_with_usize_both_sides() {
        let count = WordCount::from(7);
        assert!(count == 7usize);
        assert!(7usize == count);
    }

    #[test]
    fn add_saturates() {
        let mut total = CharCount::new(usize::MAX - 1);
        total += CharCount::new(5);
        assert_eq!(total, usize::MAX);
    }

    #[test]
    fn score_rounds_half_up_and_clamps() {
        assert_eq!(ReadabilityScore::from_f64(49.5), 50);
        assert_eq!(ReadabilityScore::from_f64(49.49), 49);
        assert_eq!(ReadabilityScore::from_f64(-12.0), 0);
        assert_eq!(ReadabilityScore::from_f64(130.2), 100);
        assert_eq!(ReadabilityScore::from_f64(f64::NAN), 0);
    }

    #[test]
    fn score_rejects_out_of_range() {
        assert!(ReadabilityScore::new(101).is_none());
        assert_eq!(ReadabilityScore::new(100), Some(ReadabilityScore::MAX));
    }
}
