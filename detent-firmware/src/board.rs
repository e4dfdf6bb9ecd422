//! Board wiring for the reference five-encoder panel
//!
//! | Function         | GPIO         |
//! |------------------|--------------|
//! | Encoder 0 A/B/SW | 2 / 3 / 4    |
//! | Encoder 1 A/B/SW | 5 / 6 / 7    |
//! | Encoder 2 A/B/SW | 8 / 9 / 10   |
//! | Encoder 3 A/B/SW | 11 / 12 / 13 |
//! | Encoder 4 A/B/SW | 14 / 15 / 16 |
//! | Axes X..Rz       | 40..45 (ADC) |
//! | Heartbeat LED    | 25           |
//!
//! Six analog axes need the RP2350B package: its ADC mux covers GPIO
//! 40-47, where the A package stops at four channels.

use detent_core::config::{AxisMode, ControllerConfig, EncoderLines};
use detent_protocol::AXIS_COUNT;

use crate::sources::{AdcBank, GpioBank};

/// Encoder channels on the reference panel.
pub const ENCODER_COUNT: usize = 5;

/// Digital lines: three per encoder, in config order.
pub const LINE_COUNT: usize = ENCODER_COUNT * 3;

// Embassy tasks cannot be generic, so the source banks are pinned to
// the board's sizes here.
pub type BoardDio = GpioBank<LINE_COUNT>;
pub type BoardAdc = AdcBank<AXIS_COUNT>;

/// Controller configuration for the reference panel.
///
/// Line ids index the GPIO bank: encoder `n` occupies lines `3n..3n+2`.
/// The stick axes X/Y/Z calibrate their centers at boot; the dial axes
/// Rx/Ry/Rz run from the nominal midpoint.
pub fn controller_config() -> ControllerConfig {
    let mut cfg = ControllerConfig::default();

    for encoder in 0..ENCODER_COUNT as u8 {
        let base = encoder * 3;
        let _ = cfg.encoders.push(EncoderLines {
            a: base,
            b: base + 1,
            sw: base + 2,
        });
    }

    for (i, axis) in cfg.axes.iter_mut().enumerate() {
        axis.mode = if i < 3 {
            AxisMode::Calibrated
        } else {
            AxisMode::Nominal
        };
    }

    cfg
}
