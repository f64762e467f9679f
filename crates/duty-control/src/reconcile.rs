//! Mode reconciliation: schedule tables + the decision function.
//!
//! `decide` is the whole decision path — pure, synchronous, and total over
//! the closed [`OverrideMode`] enum.  The caller hands in one consistent
//! snapshot of the mode and the clock; nothing here reads ambient state.

use duty_core::{ControllerConfig, WallTime};
use duty_schedule::Schedule;

use crate::{ControlResult, OverrideMode};

// ── ScheduleTables ────────────────────────────────────────────────────────────

/// The two precomputed schedule tables a deployment runs on.
///
/// Built once at startup (or on operator-triggered config change) and shared
/// read-only across arbitrarily many concurrent decisions — both tables are
/// immutable after construction.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScheduleTables {
    /// On-windows for the configured active hours only.
    pub restricted: Schedule,
    /// On-windows for every hour of the day, same duty-cycle pair.
    pub all_day: Schedule,
}

impl ScheduleTables {
    /// Build both tables from a validated configuration.
    pub fn build(config: &ControllerConfig) -> ControlResult<ScheduleTables> {
        config.validate()?;
        Ok(ScheduleTables {
            restricted: Schedule::build(&config.active_hours, config.duty)?,
            all_day:    Schedule::build(&ControllerConfig::all_day_hours(), config.duty)?,
        })
    }
}

// ── decide ────────────────────────────────────────────────────────────────────

/// Compute the desired actuator state for one `(mode, now)` snapshot.
///
/// | Mode           | Rule                                                  |
/// |----------------|-------------------------------------------------------|
/// | `ForciblyOff`  | always `false`                                        |
/// | `NeglectHours` | membership of `now` in the all-day table              |
/// | `Normal`       | membership of `now` in the restricted table           |
///
/// An hour absent from the consulted table is off, so `Normal` fails safe
/// outside the configured hours.  The match is exhaustive: an unknown mode
/// cannot reach this function (it is rejected at parse time).
pub fn decide(tables: &ScheduleTables, mode: OverrideMode, now: WallTime) -> bool {
    match mode {
        OverrideMode::ForciblyOff => false,
        OverrideMode::NeglectHours => tables.all_day.is_on_at(now),
        OverrideMode::Normal => tables.restricted.is_on_at(now),
    }
}
