//! `duty-schedule` — duty-cycle schedule generation and lookup.
//!
//! # Crate layout
//!
//! | Module       | Contents                                   |
//! |--------------|--------------------------------------------|
//! | [`interval`] | `Interval` (one on-window within an hour)  |
//! | [`schedule`] | `Schedule` (hour → window table) + builder |
//! | [`error`]    | `ScheduleError`, `ScheduleResult<T>`       |
//!
//! # Cycle model (summary)
//!
//! ```text
//! period        = work_minutes + sleep_minutes
//! windows(hour) = (s, s + work_minutes - 1)  for s = cursor, cursor+period, … < 60
//! cursor'       = last_start + period - 60   (carried into a contiguous next hour)
//! cursor'       = 0                          (after a gap in the active-hour set)
//! ```
//!
//! The table is immutable once built; `is_on_at` answers the per-request
//! membership test the reconciler needs.

pub mod error;
pub mod interval;
pub mod schedule;


pub use error::{ScheduleError, ScheduleResult};
pub use interval::Interval;
pub use schedule::Schedule;
