//! `duty-core` — foundational types for the `dutycycle` controller.
//!
//! This crate is a dependency of every other `duty-*` crate.  It has no
//! `duty-*` dependencies and minimal external ones (only `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                      |
//! |------------|-----------------------------------------------|
//! | [`time`]   | `Hour`, `Minute`, `WallTime`                  |
//! | [`config`] | `DutyCycleConfig`, `ControllerConfig`         |
//! | [`error`]  | `DutyError`, `CoreResult`                     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod config;
pub mod error;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{ControllerConfig, DutyCycleConfig};
pub use error::{CoreResult, DutyError};
pub use time::{Hour, Minute, WallTime};
