//! Boot-time axis center calibration
//!
//! Joystick axes rarely rest exactly at the converter midpoint, so every
//! calibrated axis gets its rest position averaged once per power-up.
//! Centering on the true rest point avoids an asymmetric deadzone
//! downstream. The accumulator is wide enough that the mean is exact for
//! any sample count the config can express.
//!
//! The caller owns the sampling loop (and its inter-sample delay); this
//! type only accumulates. If the control is touched while samples are
//! being taken the center comes out biased for the session: accepted,
//! not detected.

use crate::config::NOMINAL_CENTER;

/// Averaging accumulator for one axis.
#[derive(Debug, Clone, Copy)]
pub struct CenterCalibrator {
    sum: u64,
    count: u32,
}

impl CenterCalibrator {
    pub const fn new() -> Self {
        Self { sum: 0, count: 0 }
    }

    /// Record one raw sample.
    pub fn record(&mut self, raw: u16) {
        self.sum += raw as u64;
        self.count += 1;
    }

    /// Number of samples recorded so far.
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Mean of the recorded samples; the nominal midpoint when none were
    /// recorded.
    pub fn center(&self) -> u16 {
        if self.count == 0 {
            return NOMINAL_CENTER;
        }
        (self.sum / self.count as u64) as u16
    }
}

impl Default for CenterCalibrator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_input_returns_that_constant() {
        for samples in [1u32, 2, 7, 256] {
            let mut cal = CenterCalibrator::new();
            for _ in 0..samples {
                cal.record(1931);
            }
            assert_eq!(cal.center(), 1931, "count {}", samples);
        }
    }

    #[test]
    fn test_mean_of_mixed_samples() {
        let mut cal = CenterCalibrator::new();
        cal.record(2000);
        cal.record(2100);
        assert_eq!(cal.center(), 2050);
        assert_eq!(cal.count(), 2);
    }

    #[test]
    fn test_empty_calibrator_falls_back_to_nominal() {
        assert_eq!(CenterCalibrator::new().center(), NOMINAL_CENTER);
    }

    #[test]
    fn test_accumulator_does_not_overflow_at_full_scale() {
        let mut cal = CenterCalibrator::new();
        for _ in 0..100_000u32 {
            cal.record(4095);
        }
        assert_eq!(cal.center(), 4095);
    }
}
