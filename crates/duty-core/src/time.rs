//! Wall-clock time model.
//!
//! # Design
//!
//! The controller only ever needs a `(hour, minute)` pair in the deployment's
//! local time zone — never a date, never seconds.  `WallTime` is therefore a
//! two-field snapshot, validated on construction so that downstream schedule
//! arithmetic can assume in-range values.
//!
//! Deriving a `WallTime` from a Unix timestamp is plain integer arithmetic
//! (`from_unix_secs`); no datetime library is required.  DST and time-zone
//! policy are the caller's responsibility — the caller hands in a fixed UTC
//! offset and gets the corresponding local clock reading.

use std::fmt;

use crate::{CoreResult, DutyError};

const SECS_PER_DAY: i64 = 86_400;

// ── Hour ──────────────────────────────────────────────────────────────────────

/// An hour-of-day in `0..=23`.
///
/// Construction is validated; a stored `Hour` is always in range, so lookups
/// keyed by `Hour` never need a bounds check.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hour(u8);

impl Hour {
    pub const MAX: u8 = 23;

    /// Validate and wrap an hour-of-day value.
    pub fn new(hour: u8) -> CoreResult<Hour> {
        if hour > Self::MAX {
            return Err(DutyError::Config(format!(
                "hour {hour} out of range 0..=23"
            )));
        }
        Ok(Hour(hour))
    }

    #[inline]
    pub fn get(self) -> u8 {
        self.0
    }

    /// All 24 hours, ascending.
    pub fn all() -> impl Iterator<Item = Hour> {
        (0..=Self::MAX).map(Hour)
    }

    pub(crate) const fn new_unchecked(hour: u8) -> Hour {
        Hour(hour)
    }
}

impl fmt::Display for Hour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}h", self.0)
    }
}

// ── Minute ────────────────────────────────────────────────────────────────────

/// A minute-of-hour in `0..=59`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Minute(u8);

impl Minute {
    pub const MAX: u8 = 59;

    /// Validate and wrap a minute-of-hour value.
    pub fn new(minute: u8) -> CoreResult<Minute> {
        if minute > Self::MAX {
            return Err(DutyError::Config(format!(
                "minute {minute} out of range 0..=59"
            )));
        }
        Ok(Minute(minute))
    }

    #[inline]
    pub fn get(self) -> u8 {
        self.0
    }

    pub(crate) const fn new_unchecked(minute: u8) -> Minute {
        Minute(minute)
    }
}

impl fmt::Display for Minute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}m", self.0)
    }
}

// ── WallTime ──────────────────────────────────────────────────────────────────

/// A consistent `(hour, minute)` clock snapshot in local time.
///
/// `WallTime` is cheap to copy and carries no date: the schedule repeats
/// daily, so the day is irrelevant to every decision the controller makes.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WallTime {
    pub hour:   Hour,
    pub minute: Minute,
}

impl WallTime {
    /// Validate and assemble a snapshot from raw components.
    pub fn new(hour: u8, minute: u8) -> CoreResult<WallTime> {
        Ok(WallTime {
            hour:   Hour::new(hour)?,
            minute: Minute::new(minute)?,
        })
    }

    /// Local `(hour, minute)` for a Unix timestamp at a fixed UTC offset.
    ///
    /// The local second-of-day is wrapped into `0..86_400` with Euclidean
    /// remainder, so timestamps before the epoch (or offsets west of UTC
    /// near it) still yield a valid clock reading.
    pub fn from_unix_secs(unix_secs: i64, utc_offset_secs: i32) -> WallTime {
        let local = (unix_secs + utc_offset_secs as i64).rem_euclid(SECS_PER_DAY);
        WallTime {
            hour:   Hour::new_unchecked((local / 3_600) as u8),
            minute: Minute::new_unchecked(((local % 3_600) / 60) as u8),
        }
    }
}

impl fmt::Display for WallTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour.get(), self.minute.get())
    }
}
