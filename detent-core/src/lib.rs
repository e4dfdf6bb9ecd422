//! Board-agnostic input pipeline for the Detent controller
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Collaborator traits (digital lines, analog channels, report sink)
//! - Quadrature decoding and switch debouncing
//! - Pulsed/level button bookkeeping
//! - Analog axis calibration, scaling and deadband
//! - Diff-suppressed report publishing
//! - The fixed-rate tick scheduler tying it all together
//!
//! Everything here is synchronous and single-owner: the [`Controller`]
//! owns the whole pipeline state and mutates it once per tick, so the
//! crate runs unchanged under host tests with fake collaborators.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod axis;
pub mod config;
pub mod controller;
pub mod heartbeat;
pub mod input;
pub mod report;
pub mod traits;

pub use config::ControllerConfig;
pub use controller::{Controller, ReportDisposition, TickOutcome};
