//! Gamepad report structure and byte encoding

/// Number of axes carried in every report, in wire order.
pub const AXIS_COUNT: usize = 6;

/// Number of logical button bits the layout carries.
pub const BUTTON_BITS: usize = 15;

/// Mask of the usable button bits; bit 15 is reserved and always zero.
pub const USABLE_BUTTON_MASK: u16 = 0x7FFF;

/// Fixed transport frame size in bytes.
pub const REPORT_LEN: usize = 64;

/// Offset of the axis block within the frame.
const AXES_OFFSET: usize = 2;

/// Axis slots in wire order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Axis {
    X = 0,
    Y,
    Z,
    Rx,
    Ry,
    Rz,
}

impl Axis {
    /// All axes in wire order.
    pub const ALL: [Axis; AXIS_COUNT] = [Axis::X, Axis::Y, Axis::Z, Axis::Rx, Axis::Ry, Axis::Rz];

    /// Index of this axis within the report's axis array.
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// One gamepad report: button bitmask plus six signed axes.
///
/// `buttons` is stored unmasked; [`encode`](Self::encode) applies
/// [`USABLE_BUTTON_MASK`] so the reserved bit can never reach the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GamepadReport {
    pub buttons: u16,
    pub axes: [i16; AXIS_COUNT],
}

impl GamepadReport {
    /// All buttons released, all axes at rest.
    pub const fn new() -> Self {
        Self {
            buttons: 0,
            axes: [0; AXIS_COUNT],
        }
    }

    /// Encode into the fixed transport frame.
    ///
    /// Bytes 0-1 are the masked button bits little-endian, bytes 2-13 the
    /// axes little-endian in [`Axis::ALL`] order, the remainder zero.
    pub fn encode(&self) -> [u8; REPORT_LEN] {
        let mut frame = [0u8; REPORT_LEN];
        let masked = self.buttons & USABLE_BUTTON_MASK;
        frame[..AXES_OFFSET].copy_from_slice(&masked.to_le_bytes());
        for (i, value) in self.axes.iter().enumerate() {
            let at = AXES_OFFSET + i * 2;
            frame[at..at + 2].copy_from_slice(&value.to_le_bytes());
        }
        frame
    }

    /// Decode the typed fields back out of a frame. Padding is ignored.
    pub fn decode(frame: &[u8; REPORT_LEN]) -> Self {
        let buttons = u16::from_le_bytes([frame[0], frame[1]]);
        let mut axes = [0i16; AXIS_COUNT];
        for (i, value) in axes.iter_mut().enumerate() {
            let at = AXES_OFFSET + i * 2;
            *value = i16::from_le_bytes([frame[at], frame[at + 1]]);
        }
        Self { buttons, axes }
    }
}

impl Default for GamepadReport {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_rest_report_is_all_zero() {
        let frame = GamepadReport::new().encode();
        assert_eq!(frame, [0u8; REPORT_LEN]);
    }

    #[test]
    fn test_button_mask_is_little_endian() {
        let report = GamepadReport {
            buttons: 0x0201, // buttons 0 and 9
            axes: [0; AXIS_COUNT],
        };
        let frame = report.encode();
        assert_eq!(frame[0], 0x01);
        assert_eq!(frame[1], 0x02);
    }

    #[test]
    fn test_reserved_bit_never_encoded() {
        let report = GamepadReport {
            buttons: 0xFFFF,
            axes: [0; AXIS_COUNT],
        };
        let frame = report.encode();
        assert_eq!(frame[0], 0xFF);
        assert_eq!(frame[1], 0x7F);
    }

    #[test]
    fn test_axis_layout() {
        let report = GamepadReport {
            buttons: 0,
            axes: [0x1122, -1, i16::MIN, i16::MAX, 0, 0x7B],
        };
        let frame = report.encode();
        // X at bytes 2-3
        assert_eq!(frame[2], 0x22);
        assert_eq!(frame[3], 0x11);
        // Y = -1
        assert_eq!(frame[4], 0xFF);
        assert_eq!(frame[5], 0xFF);
        // Z = i16::MIN
        assert_eq!(frame[6], 0x00);
        assert_eq!(frame[7], 0x80);
        // Rx = i16::MAX
        assert_eq!(frame[8], 0xFF);
        assert_eq!(frame[9], 0x7F);
        // Rz at bytes 12-13
        assert_eq!(frame[12], 0x7B);
        assert_eq!(frame[13], 0x00);
    }

    #[test]
    fn test_padding_stays_zero() {
        let report = GamepadReport {
            buttons: 0x7FFF,
            axes: [i16::MIN; AXIS_COUNT],
        };
        let frame = report.encode();
        assert!(frame[14..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_axis_indices_match_wire_order() {
        assert_eq!(Axis::X.index(), 0);
        assert_eq!(Axis::Rz.index(), 5);
        for (i, axis) in Axis::ALL.iter().enumerate() {
            assert_eq!(axis.index(), i);
        }
    }

    proptest! {
        #[test]
        fn prop_roundtrip_masks_buttons(buttons: u16, axes: [i16; AXIS_COUNT]) {
            let report = GamepadReport { buttons, axes };
            let decoded = GamepadReport::decode(&report.encode());
            prop_assert_eq!(decoded.buttons, buttons & USABLE_BUTTON_MASK);
            prop_assert_eq!(decoded.axes, axes);
        }

        #[test]
        fn prop_equal_state_encodes_identically(buttons: u16, axes: [i16; AXIS_COUNT]) {
            let a = GamepadReport { buttons, axes };
            let b = GamepadReport { buttons, axes };
            let frame_a = a.encode();
            let frame_b = b.encode();
            prop_assert_eq!(frame_a.as_slice(), frame_b.as_slice());
        }
    }
}
