//! Detent - Multi-axis Encoder Panel Firmware
//!
//! Main firmware binary for RP2350-based encoder panels. The device
//! enumerates as a USB HID gamepad: every encoder detent fires a timed
//! button pulse, every press switch maps to a debounced button, and six
//! analog inputs feed the gamepad axes.
//!
//! Named after the detent - the click position of a rotary encoder -
//! which is the unit of movement this device reports to the host.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Channel};
use embassy_rp::bind_interrupts;
use embassy_rp::block::ImageDef;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::peripherals::USB;
use embassy_rp::usb::{Driver, InterruptHandler as UsbInterruptHandler};
use embassy_time::Timer;
use {defmt_rtt as _, panic_probe as _};

use detent_core::axis::CenterCalibrator;
use detent_core::config::NOMINAL_CENTER;
use detent_core::{Controller, ControllerConfig};
use detent_protocol::AXIS_COUNT;

use crate::board::{BoardAdc, BoardDio};

mod board;
mod channels;
mod hid;
mod sources;
mod tasks;

/// Boot ROM image definition (RP2350 secure executable)
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = ImageDef::secure_exe();

/// Picotool metadata
#[link_section = ".bi_entries"]
#[used]
pub static PICOTOOL_ENTRIES: [embassy_rp::binary_info::EntryAddr; 4] = [
    embassy_rp::binary_info::rp_program_name!(c"detent"),
    embassy_rp::binary_info::rp_program_description!(c"Multi-axis encoder panel HID gamepad"),
    embassy_rp::binary_info::rp_cargo_version!(),
    embassy_rp::binary_info::rp_program_build_attribute!(),
];

bind_interrupts!(struct Irqs {
    USBCTRL_IRQ => UsbInterruptHandler<USB>;
});

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Detent firmware v{} starting...", env!("CARGO_PKG_VERSION"));

    // Initialize RP2350 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let cfg = board::controller_config();

    // Setup USB HID device
    let driver = Driver::new(p.USB, Irqs);
    let (usb, writer) = hid::build(driver);
    info!("USB HID device built");

    // Encoder lines in config order, pulled up for the common-ground
    // panel wiring
    let mut dio = BoardDio::new([
        Input::new(p.PIN_2, Pull::Up),
        Input::new(p.PIN_3, Pull::Up),
        Input::new(p.PIN_4, Pull::Up),
        Input::new(p.PIN_5, Pull::Up),
        Input::new(p.PIN_6, Pull::Up),
        Input::new(p.PIN_7, Pull::Up),
        Input::new(p.PIN_8, Pull::Up),
        Input::new(p.PIN_9, Pull::Up),
        Input::new(p.PIN_10, Pull::Up),
        Input::new(p.PIN_11, Pull::Up),
        Input::new(p.PIN_12, Pull::Up),
        Input::new(p.PIN_13, Pull::Up),
        Input::new(p.PIN_14, Pull::Up),
        Input::new(p.PIN_15, Pull::Up),
        Input::new(p.PIN_16, Pull::Up),
    ]);

    // Analog axes in wire order X..Rz
    let adc = Adc::new_blocking(p.ADC, embassy_rp::adc::Config::default());
    let mut adc = BoardAdc::new(
        adc,
        [
            Channel::new_pin(p.PIN_40, Pull::None),
            Channel::new_pin(p.PIN_41, Pull::None),
            Channel::new_pin(p.PIN_42, Pull::None),
            Channel::new_pin(p.PIN_43, Pull::None),
            Channel::new_pin(p.PIN_44, Pull::None),
            Channel::new_pin(p.PIN_45, Pull::None),
        ],
    );
    info!("Inputs initialized");

    // Heartbeat LED
    let led = Output::new(p.PIN_25, Level::Low);

    // Boot-time center calibration for the axes that ask for it.
    // The sticks must be at rest; dials and sliders are untouched.
    let centers = calibrate_centers(&cfg, &mut adc).await;

    let mut controller = Controller::new(cfg, tasks::now_ms());
    for (axis, center) in centers.iter().enumerate() {
        controller.set_axis_center(axis, *center);
    }
    controller.seed(&mut dio, tasks::now_ms());
    info!("Controller seeded");

    // Spawn tasks
    spawner.spawn(tasks::usb_task(usb, writer)).unwrap();
    spawner
        .spawn(tasks::sampler_task(controller, dio, adc, led))
        .unwrap();

    info!("All tasks spawned, firmware running");

    // Main task has nothing else to do - all work happens in spawned tasks
    loop {
        Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}

/// Measure resting centers for calibrated axes.
///
/// Averages a burst of spaced samples per axis; uncalibrated axes keep
/// the nominal midpoint.
async fn calibrate_centers(cfg: &ControllerConfig, adc: &mut BoardAdc) -> [u16; AXIS_COUNT] {
    use detent_core::config::AxisMode;
    use detent_core::traits::AnalogSource;

    let mut centers = [NOMINAL_CENTER; AXIS_COUNT];
    for (i, axis) in cfg.axes.iter().enumerate() {
        if axis.mode != AxisMode::Calibrated {
            continue;
        }
        let mut calibrator = CenterCalibrator::new();
        for _ in 0..cfg.calibration.samples {
            calibrator.record(adc.read_channel(axis.channel));
            Timer::after_micros(cfg.calibration.spacing_us as u64).await;
        }
        centers[i] = calibrator.center();
        info!("Axis {} center calibrated: {}", i, centers[i]);
    }
    centers
}
