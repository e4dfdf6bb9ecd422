//! USB device and report writer task
//!
//! Runs the USB device state machine and drains the outbound report
//! queue into the HID IN endpoint. Both halves share one task; the
//! device half must be polled for the endpoint half to make progress.

use defmt::*;
use embassy_futures::join::join;
use embassy_rp::peripherals::USB;
use embassy_rp::usb::Driver;
use embassy_usb::UsbDevice;

use crate::channels::REPORT_QUEUE;
use crate::hid::GamepadWriter;

/// USB task - device state machine plus report writer
#[embassy_executor::task]
pub async fn usb_task(
    mut usb: UsbDevice<'static, Driver<'static, USB>>,
    mut writer: GamepadWriter,
) {
    info!("USB task started");

    let drain = async {
        loop {
            let frame = REPORT_QUEUE.receive().await;
            if let Err(e) = writer.write(&frame).await {
                // Endpoint stalls while the host is away; the frame is
                // lost but the sampler's diff logic resends on change
                warn!("HID write failed: {:?}", e);
            }
        }
    };

    join(usb.run(), drain).await;
}
