//! # berlin-clock-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **driving port** `TimeConverter`: `HH:MM:SS` in, clock text out
//! - Define the **driven port** `TimeSource`: where "now" comes from
//! - Provide `ClockFormatter`, the service implementing the conversion
//!
//! ## Dependency rule
//! Depends on `berlin-clock-domain` only (plus `tracing`).
//! Callers (the CLI) depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
