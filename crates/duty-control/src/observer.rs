//! Controller observer trait for telemetry and progress reporting.

use duty_core::WallTime;

use crate::OverrideMode;

/// Callbacks invoked by [`Controller`][crate::Controller] at key points.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  The controller stays ignorant of any
/// telemetry format — an observer can forward decisions to a dashboard, a
/// log file, or a message bus.
///
/// # Example — decision counter
///
/// ```rust,ignore
/// struct OnCounter { on: u64 }
///
/// impl ControlObserver for OnCounter {
///     fn on_decision(&mut self, _mode: OverrideMode, _now: WallTime, on: bool) {
///         if on {
///             self.on += 1;
///         }
///     }
/// }
/// ```
pub trait ControlObserver {
    /// Called after every reconciliation, with the snapshot it used and the
    /// decision it produced.
    fn on_decision(&mut self, _mode: OverrideMode, _now: WallTime, _on: bool) {}

    /// Called when the operator changes the override mode.
    fn on_mode_change(&mut self, _old: OverrideMode, _new: OverrideMode) {}
}

/// A [`ControlObserver`] that does nothing.
pub struct NoopObserver;

impl ControlObserver for NoopObserver {}
