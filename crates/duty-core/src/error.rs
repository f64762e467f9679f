//! Shared error type.
//!
//! Sub-crates define their own error enums and either convert into
//! `DutyError` via `From` impls or wrap it as one variant.  Both patterns are
//! acceptable; prefer whichever keeps error sites clean.

use thiserror::Error;

/// The top-level error type for `duty-core` and a common base for the other
/// `duty-*` crates.
///
/// Every rejected input is a `Config` error: bad duty-cycle parameters, bad
/// hour or minute values, an unrecognized override mode.  Failures are
/// deterministic and loud — the core never substitutes a default duty cycle
/// or coerces an out-of-range value.
#[derive(Debug, Error)]
pub enum DutyError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `duty-*` crates.
pub type CoreResult<T> = Result<T, DutyError>;
