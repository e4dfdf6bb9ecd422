//! USB HID device assembly
//!
//! Builds the USB device exposing the gamepad HID interface. Descriptor
//! buffers and class state live in static cells so the device and the
//! writer endpoint can be handed to tasks.

use embassy_rp::peripherals::USB;
use embassy_rp::usb::Driver;
use embassy_usb::class::hid::{Config as HidConfig, HidWriter, State};
use embassy_usb::{Builder, Config, UsbDevice};
use static_cell::StaticCell;

use detent_protocol::{GAMEPAD_REPORT_DESCRIPTOR, REPORT_LEN};

/// Shared hobbyist VID/PID pair (Van Ooijen Technische Informatica).
const USB_VID: u16 = 0x16c0;
const USB_PID: u16 = 0x27dc;

// Descriptor buffers and class state (must live forever)
static CONFIG_DESCRIPTOR: StaticCell<[u8; 256]> = StaticCell::new();
static BOS_DESCRIPTOR: StaticCell<[u8; 256]> = StaticCell::new();
static CONTROL_BUF: StaticCell<[u8; 64]> = StaticCell::new();
static HID_STATE: StaticCell<State> = StaticCell::new();

pub type GamepadWriter = HidWriter<'static, Driver<'static, USB>, REPORT_LEN>;

/// Assemble the USB device and the HID writer endpoint.
///
/// Call once; the backing static cells panic on a second init.
pub fn build(
    driver: Driver<'static, USB>,
) -> (UsbDevice<'static, Driver<'static, USB>>, GamepadWriter) {
    let mut config = Config::new(USB_VID, USB_PID);
    config.manufacturer = Some("Detent");
    config.product = Some("Detent Encoder Panel");
    config.serial_number = Some("0001");
    config.max_power = 100;
    config.max_packet_size_0 = 64;

    let mut builder = Builder::new(
        driver,
        config,
        CONFIG_DESCRIPTOR.init([0; 256]),
        BOS_DESCRIPTOR.init([0; 256]),
        &mut [], // no MS OS descriptors
        CONTROL_BUF.init([0; 64]),
    );

    let hid_config = HidConfig {
        report_descriptor: GAMEPAD_REPORT_DESCRIPTOR,
        request_handler: None,
        poll_ms: 1,
        max_packet_size: 64,
    };
    let writer = HidWriter::new(&mut builder, HID_STATE.init(State::new()), hid_config);

    (builder.build(), writer)
}
