use serde::{Serialize, Serializer};
use std::fmt;

/// An average held in integer hundredths.
///
/// Every average in this crate is reported to two decimal places, rounded
/// half-up. Keeping the value in hundredths makes that rounding exact and
/// lets averages be summed and compared without float drift. On the wire
/// it serializes as a plain JSON number (`185.0`, `33.33`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Average(u64);

impl Average {
    /// `sum / count` rounded half-up to two decimals, or `None` when there is nothing to average.
    pub fn of(sum: u64, count: u64) -> Option<Self> {
        Self::of_hundredths(sum * 100, count)
    }

    /// Same as [`Average::of`], but `sum_hundredths` is already scaled by 100.
    pub fn of_hundredths(sum_hundredths: u64, count: u64) -> Option<Self> {
        if count == 0 {
            return None;
        }
        // floor(x + 0.5) with x = sum / count, kept in integers
        Some(Self((sum_hundredths * 2 + count) / (count * 2)))
    }

    pub fn from_hundredths(hundredths: u64) -> Self {
        Self(hundredths)
    }

    pub fn hundredths(self) -> u64 {
        self.0
    }

    pub fn as_f64(self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl fmt::Display for Average {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl Serialize for Average {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}
