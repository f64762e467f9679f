//! `duty-control` — override modes, reconciliation, and the controller.
//!
//! # Crate layout
//!
//! | Module         | Contents                                            |
//! |----------------|-----------------------------------------------------|
//! | [`mode`]       | `OverrideMode` (closed three-variant enum)          |
//! | [`reconcile`]  | `ScheduleTables`, `decide`                          |
//! | [`ports`]      | `ModeStore`, `Clock`, `ActuatorDriver` + impls      |
//! | [`observer`]   | `ControlObserver`, `NoopObserver`                   |
//! | [`controller`] | `Controller<S, C, A>`                               |
//! | [`error`]      | `ControlError`, `ControlResult<T>`                  |
//!
//! # Decision model (summary)
//!
//! ```text
//! forcibly_off   → off
//! neglect_hours  → all-day table membership at (hour, minute)
//! normal         → restricted table membership at (hour, minute)
//! absent hour    → off (fails safe outside configured hours)
//! ```
//!
//! Both tables are built once via [`ScheduleTables::build`] and shared
//! read-only; every reconciliation reads a fresh `(mode, now)` snapshot
//! through the port traits.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use duty_control::{Controller, InMemoryModeStore, LocalClock, NoopActuator, NoopObserver};
//! use duty_core::{ControllerConfig, DutyCycleConfig};
//!
//! let config = ControllerConfig::new(
//!     ControllerConfig::default_hours(),
//!     DutyCycleConfig::new(5, 5)?,
//! )?;
//! let mut ctl = Controller::new(&config, InMemoryModeStore::default(), LocalClock::utc(), NoopActuator)?;
//! let on = ctl.reconcile(&mut NoopObserver)?;
//! ```

pub mod controller;
pub mod error;
pub mod mode;
pub mod observer;
pub mod ports;
pub mod reconcile;

#[cfg(test)]
mod tests;

pub use controller::Controller;
pub use error::{ControlError, ControlResult};
pub use mode::OverrideMode;
pub use observer::{ControlObserver, NoopObserver};
pub use ports::{
    ActuatorDriver, Clock, FixedClock, InMemoryModeStore, LocalClock, ModeStore, NoopActuator,
};
pub use reconcile::{decide, ScheduleTables};
