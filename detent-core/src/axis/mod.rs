//! Analog axis pipeline: calibration, scaling and deadband

pub mod calibrate;
pub mod scale;

pub use calibrate::CenterCalibrator;

use detent_protocol::AXIS_COUNT;

use crate::config::{AxisConfig, AxisMode, DeadbandConfig, DeadbandMode, NOMINAL_CENTER};
use crate::traits::AnalogSource;

/// Scaled axis values for one report, wire order.
pub type AxisValues = [i16; AXIS_COUNT];

/// The six report axes with their centers and the deadband policy.
#[derive(Debug, Clone, Copy)]
pub struct AxisBank {
    axes: [AxisConfig; AXIS_COUNT],
    centers: [u16; AXIS_COUNT],
    deadband: DeadbandConfig,
}

impl AxisBank {
    /// Bank with every center at the nominal midpoint; calibrated axes get
    /// their real centers installed via [`set_center`](Self::set_center)
    /// after the boot calibration phase.
    pub fn new(axes: [AxisConfig; AXIS_COUNT], deadband: DeadbandConfig) -> Self {
        Self {
            axes,
            centers: [NOMINAL_CENTER; AXIS_COUNT],
            deadband,
        }
    }

    /// Install the boot-calibrated center for one axis. Out-of-range
    /// axes are ignored.
    pub fn set_center(&mut self, axis: usize, center: u16) {
        if let Some(slot) = self.centers.get_mut(axis) {
            *slot = center;
        }
    }

    /// Center currently in effect for one axis; the nominal midpoint
    /// for an out-of-range axis.
    pub fn center(&self, axis: usize) -> u16 {
        self.centers.get(axis).copied().unwrap_or(NOMINAL_CENTER)
    }

    /// Sample and scale every axis, applying the configured deadband
    /// against `last`, the values of the last transmitted report.
    pub fn sample(&self, adc: &mut impl AnalogSource, last: &AxisValues) -> AxisValues {
        let mut out = [0i16; AXIS_COUNT];
        for (i, axis) in self.axes.iter().enumerate() {
            let raw = adc.read_channel(axis.channel);
            let scaled = match axis.mode {
                AxisMode::Calibrated => scale::scale_centered(raw, self.centers[i]),
                AxisMode::Nominal => scale::scale_centered(raw, NOMINAL_CENTER),
                AxisMode::Unsigned => scale::scale_unsigned(raw) as i16,
            };
            out[i] = match self.deadband.mode {
                DeadbandMode::AbsoluteNearZero => match axis.mode {
                    AxisMode::Unsigned => scaled,
                    _ => scale::absolute_deadband(scaled, self.deadband.threshold),
                },
                DeadbandMode::RelativeToLast => {
                    scale::relative_deadband(scaled, last[i], self.deadband.threshold)
                }
            };
        }
        out
    }
}
