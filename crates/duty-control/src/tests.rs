//! Unit tests for duty-control.

use duty_core::{ControllerConfig, DutyCycleConfig, WallTime};

use crate::{
    decide, ActuatorDriver, Clock, ControlObserver, ControlResult, Controller, FixedClock,
    InMemoryModeStore, LocalClock, OverrideMode, ScheduleTables,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn at(hour: u8, minute: u8) -> WallTime {
    WallTime::new(hour, minute).unwrap()
}

/// Restricted hours {8, 9}, 5 on / 5 off.
fn config() -> ControllerConfig {
    ControllerConfig::new(vec![8, 9], DutyCycleConfig::new(5, 5).unwrap()).unwrap()
}

fn tables() -> ScheduleTables {
    ScheduleTables::build(&config()).unwrap()
}

/// Records every boolean handed to the actuator.
#[derive(Default)]
struct RecordingActuator {
    applied: Vec<bool>,
}

impl ActuatorDriver for RecordingActuator {
    fn apply(&mut self, on: bool) -> ControlResult<()> {
        self.applied.push(on);
        Ok(())
    }
}

/// Records observer callbacks.
#[derive(Default)]
struct Recorder {
    decisions:    Vec<(OverrideMode, WallTime, bool)>,
    mode_changes: Vec<(OverrideMode, OverrideMode)>,
}

impl ControlObserver for Recorder {
    fn on_decision(&mut self, mode: OverrideMode, now: WallTime, on: bool) {
        self.decisions.push((mode, now, on));
    }

    fn on_mode_change(&mut self, old: OverrideMode, new: OverrideMode) {
        self.mode_changes.push((old, new));
    }
}

// ── OverrideMode ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod mode {
    use super::*;

    #[test]
    fn wire_names_round_trip() {
        for mode in [
            OverrideMode::Normal,
            OverrideMode::NeglectHours,
            OverrideMode::ForciblyOff,
        ] {
            assert_eq!(mode.as_str().parse::<OverrideMode>().unwrap(), mode);
        }
    }

    #[test]
    fn unknown_mode_rejected() {
        assert!("auto".parse::<OverrideMode>().is_err());
        assert!("".parse::<OverrideMode>().is_err());
        // Case matters: the store persists exact wire names.
        assert!("Normal".parse::<OverrideMode>().is_err());
    }

    #[test]
    fn display_matches_wire_name() {
        assert_eq!(OverrideMode::NeglectHours.to_string(), "neglect_hours");
    }
}

// ── decide ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod decide_rules {
    use super::*;

    #[test]
    fn forcibly_off_is_false_at_every_time() {
        let t = tables();
        for hour in 0..24 {
            for minute in (0..60).step_by(7) {
                assert!(!decide(&t, OverrideMode::ForciblyOff, at(hour, minute)));
            }
        }
    }

    #[test]
    fn neglect_hours_equals_all_day_membership() {
        let t = tables();
        for hour in 0..24 {
            for minute in 0..60 {
                let now = at(hour, minute);
                assert_eq!(
                    decide(&t, OverrideMode::NeglectHours, now),
                    t.all_day.is_on_at(now),
                    "at {now}"
                );
            }
        }
    }

    #[test]
    fn normal_equals_restricted_membership() {
        let t = tables();
        for hour in 0..24 {
            for minute in 0..60 {
                let now = at(hour, minute);
                assert_eq!(
                    decide(&t, OverrideMode::Normal, now),
                    t.restricted.is_on_at(now),
                    "at {now}"
                );
            }
        }
    }

    #[test]
    fn normal_fails_safe_outside_active_hours() {
        let t = tables();
        // Minute 2 is inside an on-window for active hours, but hour 7 is
        // not in the restricted set.
        assert!(decide(&t, OverrideMode::Normal, at(8, 2)));
        assert!(!decide(&t, OverrideMode::Normal, at(7, 2)));
        assert!(!decide(&t, OverrideMode::Normal, at(23, 2)));
    }

    #[test]
    fn neglect_hours_runs_outside_active_hours() {
        let t = tables();
        assert!(decide(&t, OverrideMode::NeglectHours, at(3, 2)));
        assert!(!decide(&t, OverrideMode::NeglectHours, at(3, 7)));
    }
}

// ── ScheduleTables ────────────────────────────────────────────────────────────

#[cfg(test)]
mod schedule_tables {
    use super::*;

    #[test]
    fn restricted_covers_config_hours_only() {
        let t = tables();
        assert_eq!(t.restricted.len(), 2);
        assert_eq!(t.all_day.len(), 24);
    }

    #[test]
    fn invalid_config_rejected() {
        let bad = ControllerConfig {
            active_hours: vec![],
            duty:         DutyCycleConfig::new(5, 5).unwrap(),
        };
        assert!(ScheduleTables::build(&bad).is_err());
    }

    #[test]
    fn both_tables_share_the_duty_pair() {
        let t = tables();
        for now in [at(8, 0), at(8, 13), at(8, 30), at(8, 57)] {
            assert_eq!(t.restricted.is_on_at(now), t.all_day.is_on_at(now));
        }
    }
}

// ── Controller ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod controller {
    use super::*;

    fn make(store_mode: OverrideMode, now: WallTime) -> Controller<InMemoryModeStore, FixedClock, RecordingActuator> {
        Controller::new(
            &config(),
            InMemoryModeStore::new(store_mode),
            FixedClock(now),
            RecordingActuator::default(),
        )
        .unwrap()
    }

    #[test]
    fn reconcile_drives_actuator_and_observer() {
        let mut obs = Recorder::default();
        let mut ctl = make(OverrideMode::Normal, at(8, 2));
        let on = ctl.reconcile(&mut obs).unwrap();
        assert!(on);
        assert_eq!(ctl.actuator.applied, vec![true]);
        assert_eq!(obs.decisions, vec![(OverrideMode::Normal, at(8, 2), true)]);
    }

    #[test]
    fn reconcile_off_in_sleep_window() {
        let mut ctl = make(OverrideMode::Normal, at(8, 7));
        assert!(!ctl.reconcile(&mut crate::NoopObserver).unwrap());
    }

    #[test]
    fn forcibly_off_wins_over_schedule() {
        let mut ctl = make(OverrideMode::ForciblyOff, at(8, 2));
        assert!(!ctl.reconcile(&mut crate::NoopObserver).unwrap());
    }

    #[test]
    fn reconcile_reads_a_fresh_mode_snapshot() {
        let mut obs = Recorder::default();
        // 7:02 — outside restricted hours, inside the all-day on-window.
        let mut ctl = make(OverrideMode::Normal, at(7, 2));
        assert!(!ctl.reconcile(&mut obs).unwrap());

        ctl.set_mode(OverrideMode::NeglectHours, &mut obs).unwrap();
        assert!(ctl.reconcile(&mut obs).unwrap());
    }

    #[test]
    fn set_mode_notifies_only_on_change() {
        let mut obs = Recorder::default();
        let mut ctl = make(OverrideMode::Normal, at(8, 0));

        ctl.set_mode(OverrideMode::Normal, &mut obs).unwrap();
        assert!(obs.mode_changes.is_empty());

        ctl.set_mode(OverrideMode::ForciblyOff, &mut obs).unwrap();
        assert_eq!(
            obs.mode_changes,
            vec![(OverrideMode::Normal, OverrideMode::ForciblyOff)]
        );
        assert_eq!(ctl.mode().unwrap(), OverrideMode::ForciblyOff);
    }

    #[test]
    fn invalid_config_fails_at_construction() {
        let bad = ControllerConfig {
            active_hours: vec![25],
            duty:         DutyCycleConfig::new(5, 5).unwrap(),
        };
        let result = Controller::new(
            &bad,
            InMemoryModeStore::default(),
            FixedClock(at(0, 0)),
            RecordingActuator::default(),
        );
        assert!(result.is_err());
    }
}

// ── Clocks ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod clocks {
    use super::*;

    #[test]
    fn fixed_clock_reports_its_instant() {
        let clock = FixedClock(at(21, 42));
        assert_eq!(clock.now().unwrap(), at(21, 42));
    }

    #[test]
    fn local_clock_yields_a_valid_snapshot() {
        // Only sanity here — the arithmetic itself is covered by
        // WallTime::from_unix_secs tests in duty-core.
        assert!(LocalClock::utc().now().is_ok());
        assert!(LocalClock::new(-5 * 3_600).now().is_ok());
    }
}
