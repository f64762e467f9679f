//! Controller configuration.
//!
//! Typically loaded from a config file by the hosting service and validated
//! once at startup (or at operator-triggered change time).  The core crates
//! take a validated config and never re-read it mid-decision.

use crate::{CoreResult, DutyError, Hour};

// ── DutyCycleConfig ───────────────────────────────────────────────────────────

/// The repeating on/off timing pair: `work_minutes` on, `sleep_minutes` off.
///
/// Shared by both schedule tables built in a deployment.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DutyCycleConfig {
    /// Minutes the actuator stays on per cycle.  Must be > 0.
    pub work_minutes: u32,
    /// Minutes the actuator stays off per cycle.  0 means continuously on.
    pub sleep_minutes: u32,
}

impl DutyCycleConfig {
    pub fn new(work_minutes: u32, sleep_minutes: u32) -> CoreResult<Self> {
        let cfg = DutyCycleConfig { work_minutes, sleep_minutes };
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject a zero work window — a cycle that is never on is a
    /// configuration mistake, not a policy.
    pub fn validate(&self) -> CoreResult<()> {
        if self.work_minutes == 0 {
            return Err(DutyError::Config(
                "work_minutes must be > 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Full cycle length in minutes (on + off).
    #[inline]
    pub fn period(&self) -> u32 {
        self.work_minutes + self.sleep_minutes
    }
}

// ── ControllerConfig ──────────────────────────────────────────────────────────

/// Top-level controller configuration: which hours the restricted schedule
/// covers, and the duty-cycle pair used by both tables.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ControllerConfig {
    /// Hours-of-day the restricted schedule is active for.  Order and
    /// duplicates are irrelevant; must be non-empty with every hour ≤ 23.
    pub active_hours: Vec<u8>,

    /// The work/sleep pair shared by the restricted and all-day tables.
    pub duty: DutyCycleConfig,
}

impl ControllerConfig {
    pub fn new(active_hours: Vec<u8>, duty: DutyCycleConfig) -> CoreResult<Self> {
        let cfg = ControllerConfig { active_hours, duty };
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> CoreResult<()> {
        if self.active_hours.is_empty() {
            return Err(DutyError::Config(
                "active_hours must not be empty".to_string(),
            ));
        }
        for &h in &self.active_hours {
            Hour::new(h)?;
        }
        self.duty.validate()
    }

    /// The historical deployment default: evening-through-midnight operation,
    /// hours 8..=23 plus hour 0.
    pub fn default_hours() -> Vec<u8> {
        let mut hours: Vec<u8> = (8..=23).collect();
        hours.push(0);
        hours
    }

    /// Every hour of the day, for the unrestricted table.
    pub fn all_day_hours() -> Vec<u8> {
        (0..=23).collect()
    }
}
