//! HID report descriptor for the gamepad interface
//!
//! Describes exactly the layout produced by
//! [`GamepadReport::encode`](crate::report::GamepadReport::encode): 15
//! buttons, one reserved pad bit, six 16-bit signed axes and 50 bytes of
//! constant padding, 512 bits per report.
//!
//! The axes are declared with signed logical ranges. A build that selects
//! the unsigned scaling mode for an axis still enumerates with this
//! descriptor; the host is expected to rescale such an axis itself.

/// Report descriptor handed to the HID class at enumeration.
#[rustfmt::skip]
pub static GAMEPAD_REPORT_DESCRIPTOR: &[u8] = &[
    0x05, 0x01,       // Usage Page (Generic Desktop)
    0x09, 0x04,       // Usage (Joystick)
    0xA1, 0x01,       // Collection (Application)
    0x05, 0x09,       //   Usage Page (Button)
    0x19, 0x01,       //   Usage Minimum (Button 1)
    0x29, 0x0F,       //   Usage Maximum (Button 15)
    0x15, 0x00,       //   Logical Minimum (0)
    0x25, 0x01,       //   Logical Maximum (1)
    0x75, 0x01,       //   Report Size (1)
    0x95, 0x0F,       //   Report Count (15)
    0x81, 0x02,       //   Input (Data, Variable, Absolute)
    0x75, 0x01,       //   Report Size (1)
    0x95, 0x01,       //   Report Count (1)
    0x81, 0x03,       //   Input (Constant) - reserved bit 15
    0x05, 0x01,       //   Usage Page (Generic Desktop)
    0x09, 0x30,       //   Usage (X)
    0x09, 0x31,       //   Usage (Y)
    0x09, 0x32,       //   Usage (Z)
    0x09, 0x33,       //   Usage (Rx)
    0x09, 0x34,       //   Usage (Ry)
    0x09, 0x35,       //   Usage (Rz)
    0x16, 0x00, 0x80, //   Logical Minimum (-32768)
    0x26, 0xFF, 0x7F, //   Logical Maximum (32767)
    0x75, 0x10,       //   Report Size (16)
    0x95, 0x06,       //   Report Count (6)
    0x81, 0x02,       //   Input (Data, Variable, Absolute)
    0x75, 0x08,       //   Report Size (8)
    0x95, 0x32,       //   Report Count (50)
    0x81, 0x03,       //   Input (Constant) - pad to the frame size
    0xC0,             // End Collection
];
