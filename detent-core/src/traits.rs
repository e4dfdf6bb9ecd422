//! Collaborator contracts between the pipeline and the board binding
//!
//! The core is sans-io: every pin read, converter sample and report
//! transmission goes through these traits. The firmware crate implements
//! them over real peripherals; tests implement them with fakes.

use detent_protocol::REPORT_LEN;

/// Errors a report sink can return from [`ReportSink::send`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SendError {
    /// The transport cannot take a frame right now (queue full or link
    /// down). The frame is dropped; the caller keeps its diff baseline.
    Busy,
}

/// Digital input lines (quadrature phases and switches).
pub trait DigitalSource {
    /// Read the electrical level of one line; `true` is high.
    ///
    /// Takes `&mut self` because bus-backed expanders need mutable access.
    fn read_line(&mut self, line: u8) -> bool;
}

/// Analog input channels (potentiometers and joystick axes).
pub trait AnalogSource {
    /// Read one raw converter sample in `0..=`[`ADC_MAX`].
    ///
    /// [`ADC_MAX`]: crate::config::ADC_MAX
    fn read_channel(&mut self, channel: u8) -> u16;
}

/// Outgoing report transport.
pub trait ReportSink {
    /// Hand one frame to the transport.
    ///
    /// `Ok` means the frame was accepted for delivery; only then does the
    /// caller advance its diff baseline and last-good-send timestamp.
    fn send(&mut self, frame: &[u8; REPORT_LEN]) -> Result<(), SendError>;
}
