//! The `Schedule` table and its generation algorithm.
//!
//! # Cycle model
//!
//! A schedule encodes a continuous duty cycle ("`work_minutes` on,
//! `sleep_minutes` off") laid out over a set of active hours-of-day.  Within
//! one hour, on-windows are the arithmetic progression
//!
//! ```text
//! cursor, cursor + period, cursor + 2·period, …   (while < 60)
//! ```
//!
//! where `period = work_minutes + sleep_minutes` and each start `s` yields
//! the inclusive window `(s, s + work_minutes - 1)`.
//!
//! The `cursor` carries the cycle phase across contiguous hours
//! (`last_start + period - 60`), so an on-window straddling an hour boundary
//! resumes mid-cycle instead of restarting.  When the active-hour set has a
//! gap of more than one hour, the phase resets to 0: each active block
//! starts cleanly at minute 0.  A carry is never propagated across a gap,
//! stale or otherwise.
//!
//! With `period > 60` an hour can fall entirely inside a sleep span; such an
//! hour maps to an empty window list (all-off) and the carry is reduced by
//! 60 so the following contiguous hour stays in phase.
//!
//! Back-to-back windows (`sleep_minutes == 0`) are coalesced, so a
//! continuously-on hour is stored as the single window `(0, 59)`.

use std::collections::BTreeMap;

use duty_core::{DutyCycleConfig, Hour, WallTime};

use crate::{Interval, ScheduleError, ScheduleResult};

/// An immutable hour → ordered on-window table.
///
/// Built once via [`Schedule::build`] and shared read-only from then on;
/// reconciliation never mutates it.  Rebuilding on a configuration change is
/// the hosting service's policy, not this crate's.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Schedule {
    table: BTreeMap<Hour, Vec<Interval>>,
}

impl Schedule {
    // ── Generation ────────────────────────────────────────────────────────

    /// Build the on-window table for `active_hours` under the given duty
    /// cycle.
    ///
    /// Fails with a configuration error if `active_hours` is empty, any
    /// hour is outside `0..=23`, or `work_minutes == 0`.  Duplicate hours
    /// collapse; input order is irrelevant.  Identical inputs always yield
    /// an identical table.
    pub fn build(active_hours: &[u8], duty: DutyCycleConfig) -> ScheduleResult<Schedule> {
        if active_hours.is_empty() {
            return Err(ScheduleError::Config(
                "active_hours must not be empty".to_string(),
            ));
        }
        duty.validate()?;

        let mut hours = active_hours
            .iter()
            .map(|&h| Hour::new(h))
            .collect::<Result<Vec<Hour>, _>>()?;
        hours.sort_unstable();
        hours.dedup();

        let work   = duty.work_minutes as i64;
        let period = duty.period() as i64;

        let mut table: BTreeMap<Hour, Vec<Interval>> = BTreeMap::new();
        let mut cursor: i64 = 0;
        let mut prev: Option<Hour> = None;

        for &hour in &hours {
            // Non-contiguous predecessor: the cycle phase restarts at 0.
            if let Some(p) = prev {
                if hour.get() - p.get() != 1 {
                    cursor = 0;
                }
            }

            let mut windows = Vec::new();
            let mut s = cursor;
            while s < 60 {
                let end = s + work - 1;
                // A window whose end precedes minute 0 belongs wholly to an
                // earlier hour; only the clipped remainder lands here.
                if end >= 0 {
                    windows.push(Interval {
                        start: s.max(0) as u8,
                        end:   end.min(59) as u8,
                    });
                }
                s += period;
            }

            // `s` is now the first candidate start at or past 60; relative
            // to the next hour it sits at `s - 60`.
            cursor = s - 60;
            prev = Some(hour);
            table.insert(hour, coalesce(windows));
        }

        Ok(Schedule { table })
    }

    // ── Lookups ───────────────────────────────────────────────────────────

    /// The ordered on-windows for `hour`, or `None` if the hour is not in
    /// the active set.
    pub fn intervals_at(&self, hour: Hour) -> Option<&[Interval]> {
        self.table.get(&hour).map(Vec::as_slice)
    }

    /// Membership test: `true` iff `now.minute` falls inside some on-window
    /// of `now.hour`.  An hour absent from the table is off.
    pub fn is_on_at(&self, now: WallTime) -> bool {
        match self.table.get(&now.hour) {
            Some(windows) => windows.iter().any(|w| w.contains(now.minute)),
            None => false,
        }
    }

    /// Active hours, ascending.
    pub fn hours(&self) -> impl Iterator<Item = Hour> + '_ {
        self.table.keys().copied()
    }

    /// Number of active hours in the table.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

/// Merge back-to-back windows into one.
///
/// `sleep_minutes == 0` generates adjacent windows (`(0,4) (5,9) …`) that
/// describe a continuously-on hour; after merging it reads as the single
/// window `(0,59)`.  Input is already sorted by start.
fn coalesce(windows: Vec<Interval>) -> Vec<Interval> {
    let mut merged: Vec<Interval> = Vec::with_capacity(windows.len());
    for w in windows {
        match merged.last_mut() {
            Some(last) if w.start <= last.end + 1 => {
                last.end = last.end.max(w.end);
            }
            _ => merged.push(w),
        }
    }
    merged
}
