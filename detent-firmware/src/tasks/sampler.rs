//! Fixed-rate input sampling task
//!
//! Drives the controller at the native tick rate: every tick reads the
//! encoder lines and advances debounce and pulse state; the controller
//! decides on its own cadence when a report leaves the device.

use defmt::*;
use embassy_rp::gpio::Output;
use embassy_time::{Duration, Ticker};

use detent_core::{Controller, ReportDisposition};

use crate::board::{BoardAdc, BoardDio};
use crate::sources::QueueSink;
use crate::tasks::now_ms;

/// Tick interval in milliseconds
pub const TICK_INTERVAL_MS: u32 = 1;

/// Sampler task - ticks the controller and mirrors its heartbeat LED
#[embassy_executor::task]
pub async fn sampler_task(
    mut controller: Controller,
    mut dio: BoardDio,
    mut adc: BoardAdc,
    mut led: Output<'static>,
) {
    info!("Sampler task started");

    let mut sink = QueueSink;
    let mut ticker = Ticker::every(Duration::from_millis(TICK_INTERVAL_MS as u64));

    loop {
        ticker.next().await;

        let outcome = controller.tick(now_ms(), &mut dio, &mut adc, &mut sink);

        if outcome.led {
            led.set_high();
        } else {
            led.set_low();
        }

        match outcome.report {
            ReportDisposition::Sent => trace!("Report queued"),
            ReportDisposition::Failed => warn!("Report queue full"),
            _ => {}
        }
    }
}
