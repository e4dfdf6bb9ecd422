//! Configuration types and capacity limits
//!
//! All tuning lives here as plain data: the firmware assembles one
//! [`ControllerConfig`] at boot and hands it to the controller. Defaults
//! carry the reference-hardware values.

use heapless::Vec;

use detent_protocol::AXIS_COUNT;

/// Maximum number of encoder channels a controller can drive.
pub const MAX_ENCODERS: usize = 8;

/// Logical buttons per encoder: CW pulse, CCW pulse, press switch.
pub const BUTTONS_PER_ENCODER: usize = 3;

/// Maximum number of logical buttons across all channels.
pub const MAX_BUTTONS: usize = MAX_ENCODERS * BUTTONS_PER_ENCODER;

/// Full-scale value of the 12-bit converter feeding the axis pipeline.
pub const ADC_MAX: u16 = 4095;

/// Converter midpoint, used as the center for uncalibrated axes.
pub const NOMINAL_CENTER: u16 = 2048;

/// Wiring of one encoder channel: quadrature pair plus press switch.
///
/// Values are opaque line ids resolved by the digital source; the core
/// never interprets them beyond passing them back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EncoderLines {
    pub a: u8,
    pub b: u8,
    pub sw: u8,
}

/// Scaling mode for one analog axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AxisMode {
    /// Centered on a boot-time averaged rest position.
    Calibrated,
    /// Centered on the converter midpoint, no calibration.
    Nominal,
    /// No centering; the raw converter range is expanded to the full
    /// unsigned 16 bits (the report carries the same bit pattern).
    Unsigned,
}

/// One analog axis: which converter channel feeds it and how it scales.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AxisConfig {
    pub channel: u8,
    pub mode: AxisMode,
}

/// Which deadband policy the axis pipeline applies after scaling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DeadbandMode {
    /// Zero any centered value whose magnitude is below the threshold.
    /// Unsigned axes pass through unchanged (they have no rest point).
    AbsoluteNearZero,
    /// Hold the last transmitted value until the new value differs from
    /// it by at least the threshold. Applies to every axis mode.
    RelativeToLast,
}

/// Deadband policy and threshold in scaled output units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeadbandConfig {
    pub mode: DeadbandMode,
    pub threshold: u16,
}

impl Default for DeadbandConfig {
    fn default() -> Self {
        Self {
            mode: DeadbandMode::AbsoluteNearZero,
            threshold: 1000,
        }
    }
}

/// Pipeline timing, all in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimingConfig {
    /// How long an encoder step holds its pulse button.
    pub pulse_ms: u32,
    /// Quiescence a switch must show before a level change commits.
    pub debounce_ms: u32,
    /// Minimum spacing between report build/send attempts.
    pub report_interval_ms: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            pulse_ms: 20,
            debounce_ms: 8,
            report_interval_ms: 5,
        }
    }
}

/// Heartbeat LED timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HeartbeatConfig {
    /// Blink half-period while the link is healthy.
    pub slow_ms: u32,
    /// Blink half-period once the link has gone stale.
    pub fast_ms: u32,
    /// No confirmed send for longer than this marks the link stale.
    pub stale_after_ms: u32,
}

impl Default for HeartbeatConfig {
    fn default() -> Self {
        Self {
            slow_ms: 500,
            fast_ms: 100,
            stale_after_ms: 1000,
        }
    }
}

/// Boot-time axis center calibration parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CalibrationConfig {
    /// Samples averaged per calibrated axis.
    pub samples: u32,
    /// Delay between consecutive samples, in microseconds.
    pub spacing_us: u32,
}

impl Default for CalibrationConfig {
    fn default() -> Self {
        Self {
            samples: 256,
            spacing_us: 200,
        }
    }
}

/// Everything the controller needs to know about the build it runs on.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ControllerConfig {
    /// Populated encoder channels in button-mask order.
    pub encoders: Vec<EncoderLines, MAX_ENCODERS>,
    /// The six report axes in wire order.
    pub axes: [AxisConfig; AXIS_COUNT],
    /// Switches read low when pressed (pull-up wiring).
    pub switches_active_low: bool,
    pub timing: TimingConfig,
    pub heartbeat: HeartbeatConfig,
    pub deadband: DeadbandConfig,
    pub calibration: CalibrationConfig,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            encoders: Vec::new(),
            axes: core::array::from_fn(|i| AxisConfig {
                channel: i as u8,
                mode: AxisMode::Nominal,
            }),
            switches_active_low: true,
            timing: TimingConfig::default(),
            heartbeat: HeartbeatConfig::default(),
            deadband: DeadbandConfig::default(),
            calibration: CalibrationConfig::default(),
        }
    }
}
