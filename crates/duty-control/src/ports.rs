//! Port traits for the controller's external collaborators.
//!
//! The core never owns the override-mode store, the clock, or the physical
//! actuator — the hosting service does.  These traits are the seams: the
//! service implements them over whatever persistence, time-zone policy, and
//! device transport it has, and the [`Controller`][crate::Controller] only
//! ever sees consistent snapshots.
//!
//! In-memory / fixed implementations are provided for tests and for services
//! that keep this state in process.

use std::time::{SystemTime, UNIX_EPOCH};

use duty_core::WallTime;

use crate::{ControlError, ControlResult, OverrideMode};

// ── ModeStore ─────────────────────────────────────────────────────────────────

/// Get/set access to the persisted override mode.
///
/// Implementations must validate on write (a store can only ever hold one of
/// the three known modes), so `get` at decision time never surfaces an
/// unknown value.
pub trait ModeStore {
    fn get(&self) -> ControlResult<OverrideMode>;
    fn set(&mut self, mode: OverrideMode) -> ControlResult<()>;
}

/// A `ModeStore` holding the mode in process memory.
#[derive(Copy, Clone, Debug)]
pub struct InMemoryModeStore {
    mode: OverrideMode,
}

impl InMemoryModeStore {
    pub fn new(mode: OverrideMode) -> Self {
        Self { mode }
    }
}

impl Default for InMemoryModeStore {
    /// Starts in `Normal` — the hour-restricted schedule applies.
    fn default() -> Self {
        Self::new(OverrideMode::Normal)
    }
}

impl ModeStore for InMemoryModeStore {
    fn get(&self) -> ControlResult<OverrideMode> {
        Ok(self.mode)
    }

    fn set(&mut self, mode: OverrideMode) -> ControlResult<()> {
        self.mode = mode;
        Ok(())
    }
}

// ── Clock ─────────────────────────────────────────────────────────────────────

/// Supplies the current `(hour, minute)` in the deployment's local time.
///
/// DST and time-zone policy live behind this trait, outside the core.
pub trait Clock {
    fn now(&self) -> ControlResult<WallTime>;
}

/// A `Clock` frozen at one instant.  For tests and replay.
#[derive(Copy, Clone, Debug)]
pub struct FixedClock(pub WallTime);

impl Clock for FixedClock {
    fn now(&self) -> ControlResult<WallTime> {
        Ok(self.0)
    }
}

/// A `Clock` reading the system time at a fixed UTC offset.
///
/// No datetime library: the local minute-of-day is derived with integer
/// arithmetic from the Unix timestamp.
#[derive(Copy, Clone, Debug)]
pub struct LocalClock {
    /// Seconds east of UTC (negative west).  E.g. UTC+3 → `10_800`.
    pub utc_offset_secs: i32,
}

impl LocalClock {
    pub fn new(utc_offset_secs: i32) -> Self {
        Self { utc_offset_secs }
    }

    /// A clock reporting UTC wall time.
    pub fn utc() -> Self {
        Self::new(0)
    }
}

impl Clock for LocalClock {
    fn now(&self) -> ControlResult<WallTime> {
        let unix_secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| ControlError::Clock(e.to_string()))?
            .as_secs() as i64;
        Ok(WallTime::from_unix_secs(unix_secs, self.utc_offset_secs))
    }
}

// ── ActuatorDriver ────────────────────────────────────────────────────────────

/// Applies a decision to the physical device (LED, relay, …).
///
/// The driver owns the transport and any achieved-state reporting; the
/// controller only hands it the desired boolean.
pub trait ActuatorDriver {
    fn apply(&mut self, on: bool) -> ControlResult<()>;
}

/// An `ActuatorDriver` that drops the decision.  Use when only the returned
/// boolean matters (e.g. the hosting service relays it over its own wire).
#[derive(Copy, Clone, Debug, Default)]
pub struct NoopActuator;

impl ActuatorDriver for NoopActuator {
    fn apply(&mut self, _on: bool) -> ControlResult<()> {
        Ok(())
    }
}
