//! Report assembly and diff-suppressed publishing
//!
//! The publisher owns the last *successfully transmitted* frame and only
//! hands a new frame to the sink when the bytes differ. This bounds
//! transport traffic to the rate of actual input change rather than the
//! sampling rate. A refused send leaves the baseline untouched, so the
//! same content stays eligible for retry on the next build.

use detent_protocol::{GamepadReport, AXIS_COUNT, REPORT_LEN};

use crate::axis::AxisValues;
use crate::traits::{ReportSink, SendError};

/// Outcome of one publish attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Publish {
    /// Frame matches the last transmitted one; nothing sent.
    Unchanged,
    /// Frame differed and the sink accepted it.
    Sent,
    /// Frame differed but the sink refused it; unchanged baseline.
    Failed,
}

/// Builds frames and suppresses duplicates.
#[derive(Debug, Clone)]
pub struct ReportPublisher {
    last_frame: [u8; REPORT_LEN],
    last_axes: AxisValues,
    primed: bool,
}

impl ReportPublisher {
    pub const fn new() -> Self {
        Self {
            last_frame: [0; REPORT_LEN],
            last_axes: [0; AXIS_COUNT],
            primed: false,
        }
    }

    /// Axis values of the last accepted report (rest until one is).
    pub fn last_axes(&self) -> &AxisValues {
        &self.last_axes
    }

    /// Build the frame for this state and hand it to the sink if it
    /// differs from the last accepted frame.
    ///
    /// The first build after construction always transmits, even an
    /// all-zero frame, so the host sees one authoritative rest report.
    pub fn publish(
        &mut self,
        buttons: u16,
        axes: AxisValues,
        sink: &mut impl ReportSink,
    ) -> Publish {
        let frame = GamepadReport { buttons, axes }.encode();
        if self.primed && frame == self.last_frame {
            return Publish::Unchanged;
        }
        match sink.send(&frame) {
            Ok(()) => {
                self.last_frame = frame;
                self.last_axes = axes;
                self.primed = true;
                Publish::Sent
            }
            Err(SendError::Busy) => Publish::Failed,
        }
    }
}

impl Default for ReportPublisher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use detent_protocol::USABLE_BUTTON_MASK;

    #[derive(Default)]
    struct Sink {
        sent: std::vec::Vec<[u8; REPORT_LEN]>,
        refuse: bool,
    }

    impl ReportSink for Sink {
        fn send(&mut self, frame: &[u8; REPORT_LEN]) -> Result<(), SendError> {
            if self.refuse {
                return Err(SendError::Busy);
            }
            self.sent.push(*frame);
            Ok(())
        }
    }

    #[test]
    fn test_identical_state_sends_exactly_once() {
        let mut publisher = ReportPublisher::new();
        let mut sink = Sink::default();
        let axes = [10, 0, -3, 0, 0, 0];

        assert_eq!(publisher.publish(0b101, axes, &mut sink), Publish::Sent);
        assert_eq!(publisher.publish(0b101, axes, &mut sink), Publish::Unchanged);
        assert_eq!(sink.sent.len(), 1);
    }

    #[test]
    fn test_first_all_zero_report_still_transmits() {
        let mut publisher = ReportPublisher::new();
        let mut sink = Sink::default();

        assert_eq!(publisher.publish(0, [0; 6], &mut sink), Publish::Sent);
        assert_eq!(sink.sent.len(), 1);
        assert_eq!(sink.sent[0], [0u8; REPORT_LEN]);
        // Only the first one is unconditional
        assert_eq!(publisher.publish(0, [0; 6], &mut sink), Publish::Unchanged);
        assert_eq!(sink.sent.len(), 1);
    }

    #[test]
    fn test_any_field_change_sends_again() {
        let mut publisher = ReportPublisher::new();
        let mut sink = Sink::default();

        publisher.publish(0, [0; 6], &mut sink);
        assert_eq!(publisher.publish(1, [0; 6], &mut sink), Publish::Sent);
        assert_eq!(publisher.publish(1, [0, 0, 0, 0, 0, -1], &mut sink), Publish::Sent);
        assert_eq!(sink.sent.len(), 3);
    }

    #[test]
    fn test_masked_button_bits_do_not_retrigger() {
        let mut publisher = ReportPublisher::new();
        let mut sink = Sink::default();

        publisher.publish(USABLE_BUTTON_MASK, [0; 6], &mut sink);
        // Bit 15 never reaches the wire, so this is the same frame
        assert_eq!(publisher.publish(0xFFFF, [0; 6], &mut sink), Publish::Unchanged);
    }

    #[test]
    fn test_refused_send_keeps_baseline_for_retry() {
        let mut publisher = ReportPublisher::new();
        let mut sink = Sink::default();

        publisher.publish(0, [0; 6], &mut sink);

        sink.refuse = true;
        assert_eq!(publisher.publish(0b1, [0; 6], &mut sink), Publish::Failed);
        assert_eq!(publisher.last_axes(), &[0; 6]);

        // Same content retries once the sink recovers
        sink.refuse = false;
        assert_eq!(publisher.publish(0b1, [0; 6], &mut sink), Publish::Sent);
        assert_eq!(sink.sent.len(), 2);
    }

    #[test]
    fn test_last_axes_update_only_on_success() {
        let mut publisher = ReportPublisher::new();
        let mut sink = Sink { refuse: true, ..Default::default() };

        assert_eq!(publisher.publish(0, [500; 6], &mut sink), Publish::Failed);
        assert_eq!(publisher.last_axes(), &[0; 6]);

        sink.refuse = false;
        assert_eq!(publisher.publish(0, [500; 6], &mut sink), Publish::Sent);
        assert_eq!(publisher.last_axes(), &[500; 6]);
    }
}
