//! The `Interval` type: one inclusive duty-on window within an hour.

use std::fmt;

use duty_core::Minute;

use crate::{ScheduleError, ScheduleResult};

/// An inclusive `[start, end]` minute window within a single hour.
///
/// Invariant: `start <= end` and both are in `0..=59`.  Intervals built by
/// [`Schedule::build`][crate::Schedule::build] always satisfy this; the
/// checked constructor exists for callers assembling intervals by hand.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval {
    pub start: u8,
    pub end:   u8,
}

impl Interval {
    /// Validate and construct an interval.
    pub fn new(start: u8, end: u8) -> ScheduleResult<Interval> {
        if end > Minute::MAX {
            return Err(ScheduleError::Config(format!(
                "interval end {end} out of range 0..=59"
            )));
        }
        if start > end {
            return Err(ScheduleError::Config(format!(
                "interval start {start} exceeds end {end}"
            )));
        }
        Ok(Interval { start, end })
    }

    /// `true` if `minute` falls inside this window (inclusive on both sides).
    #[inline]
    pub fn contains(&self, minute: Minute) -> bool {
        self.start <= minute.get() && minute.get() <= self.end
    }

    /// Window length in minutes (an interval is never empty).
    #[inline]
    pub fn len_minutes(&self) -> u8 {
        self.end - self.start + 1
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:02}–{:02}]", self.start, self.end)
    }
}
