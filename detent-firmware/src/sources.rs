//! Hardware-backed input sources
//!
//! Adapters between the board peripherals and the source traits the
//! controller samples through. Line and channel ids are indices into
//! the arrays handed over at construction, in config order.

use embassy_rp::adc::{Adc, Blocking, Channel};
use embassy_rp::gpio::Input;

use detent_core::config::NOMINAL_CENTER;
use detent_core::traits::{AnalogSource, DigitalSource, ReportSink, SendError};
use detent_protocol::REPORT_LEN;

use crate::channels::REPORT_QUEUE;

/// Digital input lines in config order.
pub struct GpioBank<const N: usize> {
    lines: [Input<'static>; N],
}

impl<const N: usize> GpioBank<N> {
    pub fn new(lines: [Input<'static>; N]) -> Self {
        Self { lines }
    }
}

impl<const N: usize> DigitalSource for GpioBank<N> {
    fn read_line(&mut self, line: u8) -> bool {
        self.lines[line as usize].is_high()
    }
}

/// Analog channels in axis order.
pub struct AdcBank<const N: usize> {
    adc: Adc<'static, Blocking>,
    channels: [Channel<'static>; N],
}

impl<const N: usize> AdcBank<N> {
    pub fn new(adc: Adc<'static, Blocking>, channels: [Channel<'static>; N]) -> Self {
        Self { adc, channels }
    }
}

impl<const N: usize> AnalogSource for AdcBank<N> {
    fn read_channel(&mut self, channel: u8) -> u16 {
        // A failed conversion reads as the resting midpoint rather than
        // a full-scale deflection
        self.adc
            .blocking_read(&mut self.channels[channel as usize])
            .unwrap_or(NOMINAL_CENTER)
    }
}

/// Report sink backed by the outbound USB queue.
pub struct QueueSink;

impl ReportSink for QueueSink {
    fn send(&mut self, frame: &[u8; REPORT_LEN]) -> Result<(), SendError> {
        REPORT_QUEUE.try_send(*frame).map_err(|_| SendError::Busy)
    }
}
