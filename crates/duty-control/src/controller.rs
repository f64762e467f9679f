//! The `Controller`: ports composed around the pure decision core.

use duty_core::ControllerConfig;

use crate::{
    decide, ActuatorDriver, Clock, ControlObserver, ControlResult, ModeStore, OverrideMode,
    ScheduleTables,
};

/// Composes the external collaborators around [`decide`].
///
/// One `reconcile` call is one decision request: read a mode snapshot and a
/// clock snapshot, compute the desired state, apply it to the actuator, and
/// report it.  The schedule tables are built once at construction and never
/// mutated; to change the configuration, the hosting service builds a new
/// `Controller`.
///
/// # Example
///
/// ```rust,ignore
/// let config = ControllerConfig::new(ControllerConfig::default_hours(), duty)?;
/// let mut ctl = Controller::new(&config, InMemoryModeStore::default(), LocalClock::utc(), relay)?;
/// let on = ctl.reconcile(&mut NoopObserver)?;
/// ```
pub struct Controller<S: ModeStore, C: Clock, A: ActuatorDriver> {
    /// The two precomputed tables.  Immutable for the controller's lifetime.
    pub tables: ScheduleTables,

    /// The persisted override mode, read fresh on every reconciliation.
    pub store: S,

    /// Local wall-clock source.
    pub clock: C,

    /// The device driver that receives every decision.
    pub actuator: A,
}

impl<S: ModeStore, C: Clock, A: ActuatorDriver> Controller<S, C, A> {
    /// Validate `config`, build both schedule tables, and assemble the
    /// controller.
    pub fn new(config: &ControllerConfig, store: S, clock: C, actuator: A) -> ControlResult<Self> {
        let tables = ScheduleTables::build(config)?;
        log::info!(
            "controller ready: {} active hours, duty {}on/{}off",
            tables.restricted.len(),
            config.duty.work_minutes,
            config.duty.sleep_minutes,
        );
        Ok(Self { tables, store, clock, actuator })
    }

    /// Handle one decision request.
    ///
    /// Reads one consistent snapshot of the mode and the clock, decides,
    /// drives the actuator, and returns the decision.
    pub fn reconcile<O: ControlObserver>(&mut self, observer: &mut O) -> ControlResult<bool> {
        let mode = self.store.get()?;
        let now = self.clock.now()?;
        let on = decide(&self.tables, mode, now);
        log::debug!("decision at {now} (mode {mode}): {}", if on { "on" } else { "off" });
        self.actuator.apply(on)?;
        observer.on_decision(mode, now, on);
        Ok(on)
    }

    /// Change the override mode.
    ///
    /// The store is the validation boundary: only the three known modes are
    /// representable here, so decision time never sees an invalid value.
    pub fn set_mode<O: ControlObserver>(
        &mut self,
        mode: OverrideMode,
        observer: &mut O,
    ) -> ControlResult<()> {
        let old = self.store.get()?;
        self.store.set(mode)?;
        if old != mode {
            log::info!("override mode changed: {old} -> {mode}");
            observer.on_mode_change(old, mode);
        }
        Ok(())
    }

    /// The current override mode, as the store reports it.
    pub fn mode(&self) -> ControlResult<OverrideMode> {
        self.store.get()
    }
}
