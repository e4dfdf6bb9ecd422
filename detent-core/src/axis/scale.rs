//! Raw-sample scaling and deadband policies
//!
//! All arithmetic is integer; the converter is 12-bit and the report axes
//! are 16-bit.

use crate::config::ADC_MAX;

/// Largest positive offset a 12-bit sample can sit from its center.
const POS_SPAN: i32 = 2047;

/// Most negative offset (the source range is asymmetric two's-complement).
const NEG_SPAN: i32 = -2048;

/// Scale a raw sample around `center` to the full signed 16-bit range.
///
/// The offset is clamped to the representable source span first. `+2047`
/// maps to exactly `+32767`; the negative side has one extra unit of
/// range and the linear formula overshoots there, so a saturated negative
/// offset is pinned to exactly `-32768`.
pub fn scale_centered(raw: u16, center: u16) -> i16 {
    let offset = (raw as i32 - center as i32).clamp(NEG_SPAN, POS_SPAN);
    if offset <= NEG_SPAN {
        return i16::MIN;
    }
    ((offset * i16::MAX as i32) / POS_SPAN) as i16
}

/// Expand an uncentered 12-bit sample to the full unsigned 16-bit range.
pub fn scale_unsigned(raw: u16) -> u16 {
    let raw = raw.min(ADC_MAX) as u32;
    (raw * u16::MAX as u32 / ADC_MAX as u32) as u16
}

/// Zero a centered value resting inside the threshold.
pub fn absolute_deadband(value: i16, threshold: u16) -> i16 {
    if value.unsigned_abs() < threshold {
        0
    } else {
        value
    }
}

/// Suppress a change smaller than the threshold by holding the last
/// transmitted value.
pub fn relative_deadband(value: i16, last: i16, threshold: u16) -> i16 {
    if (value as i32 - last as i32).unsigned_abs() < threshold as u32 {
        last
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_center_scales_to_zero() {
        assert_eq!(scale_centered(2048, 2048), 0);
        assert_eq!(scale_centered(1931, 1931), 0);
    }

    #[test]
    fn test_extremes_hit_exact_output_limits() {
        assert_eq!(scale_centered(4095, 2048), i16::MAX);
        assert_eq!(scale_centered(0, 2048), i16::MIN);
    }

    #[test]
    fn test_offcenter_calibration_saturates_cleanly() {
        // A center far from nominal clamps instead of overflowing
        assert_eq!(scale_centered(4095, 1000), i16::MAX);
        assert_eq!(scale_centered(0, 3000), i16::MIN);
    }

    #[test]
    fn test_one_short_of_negative_extreme() {
        // Only a fully saturated offset reaches the output minimum
        assert_eq!(scale_centered(1, 2048), -32767);
    }

    #[test]
    fn test_unsigned_spans_full_range() {
        assert_eq!(scale_unsigned(0), 0);
        assert_eq!(scale_unsigned(4095), u16::MAX);
        assert_eq!(scale_unsigned(2048), 32775); // 2048 * 65535 / 4095
    }

    #[test]
    fn test_absolute_deadband_zeroes_rest_noise() {
        assert_eq!(absolute_deadband(999, 1000), 0);
        assert_eq!(absolute_deadband(-999, 1000), 0);
        assert_eq!(absolute_deadband(1000, 1000), 1000);
        assert_eq!(absolute_deadband(-1000, 1000), -1000);
        assert_eq!(absolute_deadband(5, 0), 5);
    }

    #[test]
    fn test_relative_deadband_holds_last_value() {
        assert_eq!(relative_deadband(1099, 1000, 100), 1000);
        assert_eq!(relative_deadband(1100, 1000, 100), 1100);
        assert_eq!(relative_deadband(-50, 40, 100), 40);
        assert_eq!(relative_deadband(i16::MIN, i16::MAX, 100), i16::MIN);
    }

    proptest! {
        /// Scaling is monotonic in the raw sample and stays in range.
        #[test]
        fn prop_centered_scaling_is_monotonic(center in 0u16..=4095, raw in 0u16..4095) {
            let lo = scale_centered(raw, center);
            let hi = scale_centered(raw + 1, center);
            prop_assert!(lo <= hi);
        }

        /// The sign of the output always matches the side of the center.
        #[test]
        fn prop_sign_matches_offset(center in 0u16..=4095, raw in 0u16..=4095) {
            let scaled = scale_centered(raw, center) as i32;
            let offset = raw as i32 - center as i32;
            if offset == 0 {
                prop_assert_eq!(scaled, 0);
            } else {
                prop_assert_eq!(scaled.signum(), offset.signum());
            }
        }

        #[test]
        fn prop_unsigned_is_monotonic(raw in 0u16..4095) {
            prop_assert!(scale_unsigned(raw) <= scale_unsigned(raw + 1));
        }
    }
}
