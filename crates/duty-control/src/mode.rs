//! The operator-selectable override mode.
//!
//! The mode is a closed enumeration with exhaustive matching everywhere it
//! is consumed.  The string forms are the persisted wire names the hosting
//! service has always used; parsing rejects anything else outright rather
//! than falling back to `Normal`.

use std::fmt;
use std::str::FromStr;

use crate::ControlError;

/// Operator-selected policy that overrides or relaxes the hour-restricted
/// schedule.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum OverrideMode {
    /// Follow the hour-restricted schedule.
    Normal,
    /// Ignore the hour restriction: follow the all-day schedule instead.
    NeglectHours,
    /// Hold the actuator off regardless of schedule or time.
    ForciblyOff,
}

impl OverrideMode {
    /// The persisted wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            OverrideMode::Normal => "normal",
            OverrideMode::NeglectHours => "neglect_hours",
            OverrideMode::ForciblyOff => "forcibly_off",
        }
    }
}

impl FromStr for OverrideMode {
    type Err = ControlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(OverrideMode::Normal),
            "neglect_hours" => Ok(OverrideMode::NeglectHours),
            "forcibly_off" => Ok(OverrideMode::ForciblyOff),
            other => Err(ControlError::UnknownMode(other.to_string())),
        }
    }
}

impl fmt::Display for OverrideMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
