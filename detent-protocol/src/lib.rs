//! Detent USB HID report contract
//!
//! This crate defines the fixed report layout the Detent controller sends
//! to the host, and the HID report descriptor that describes it. The
//! layout never varies at runtime:
//!
//! ```text
//! ┌──────────────┬──────────────────────────────┬─────────────┐
//! │ BUTTONS      │ AXES                         │ PADDING     │
//! │ 2B (LE mask) │ 6 × 2B (LE i16, X..Rz)       │ 50B (zero)  │
//! └──────────────┴──────────────────────────────┴─────────────┘
//! ```
//!
//! Bits 0..15 of the button mask are the logical buttons in encoder order
//! (CW, CCW, switch per encoder); bit 15 is reserved and always zero. The
//! frame is zero-padded to the 64-byte interrupt endpoint size so every
//! transfer carries the same number of bytes.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod descriptor;
pub mod report;

pub use descriptor::GAMEPAD_REPORT_DESCRIPTOR;
pub use report::{Axis, GamepadReport, AXIS_COUNT, BUTTON_BITS, REPORT_LEN, USABLE_BUTTON_MASK};
