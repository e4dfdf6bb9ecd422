//! The tick scheduler
//!
//! Owns every piece of pipeline state and advances it once per tick, in a
//! fixed order: heartbeat, decode + debounce per channel, pulse expiry,
//! then (at the report cadence) axis scaling and the publish attempt.
//! Decode and debounce run at the native tick rate for responsiveness;
//! transmission is rate-limited separately so the transport never sees
//! more than one frame per report interval.
//!
//! Single-threaded by construction: all mutation happens inside
//! [`Controller::tick`], so no locking exists anywhere in the core.

use heapless::Vec;

use crate::axis::AxisBank;
use crate::config::{ControllerConfig, BUTTONS_PER_ENCODER, MAX_ENCODERS};
use crate::heartbeat::Heartbeat;
use crate::input::buttons::ButtonBank;
use crate::input::channel::EncoderChannel;
use crate::report::{Publish, ReportPublisher};
use crate::traits::{AnalogSource, DigitalSource, ReportSink};

/// What happened to the report on one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReportDisposition {
    /// Report interval not yet elapsed; no build attempted.
    Deferred,
    /// Built a frame identical to the last transmitted one; suppressed.
    Unchanged,
    /// Built a differing frame and the sink accepted it.
    Sent,
    /// Built a differing frame but the sink refused it; will retry on a
    /// later tick while the content still differs.
    Failed,
}

/// Summary of one tick for the binding to act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickOutcome {
    /// Heartbeat LED level for this tick.
    pub led: bool,
    pub report: ReportDisposition,
}

/// Button slot for an encoder's clockwise pulse.
const fn cw_slot(channel: usize) -> usize {
    channel * BUTTONS_PER_ENCODER
}

/// Button slot for an encoder's counter-clockwise pulse.
const fn ccw_slot(channel: usize) -> usize {
    channel * BUTTONS_PER_ENCODER + 1
}

/// Button slot for an encoder's press switch.
const fn switch_slot(channel: usize) -> usize {
    channel * BUTTONS_PER_ENCODER + 2
}

/// The input pipeline. One instance owns the whole device state.
pub struct Controller {
    cfg: ControllerConfig,
    channels: Vec<EncoderChannel, MAX_ENCODERS>,
    buttons: ButtonBank,
    axes: AxisBank,
    publisher: ReportPublisher,
    heartbeat: Heartbeat,
    last_report_ms: u32,
}

impl Controller {
    /// Build the pipeline for `cfg`.
    ///
    /// The first tick already attempts a report so the host receives the
    /// rest state immediately. Calibrated axis centers default to the
    /// nominal midpoint until [`set_axis_center`](Self::set_axis_center)
    /// installs measured ones.
    pub fn new(cfg: ControllerConfig, now_ms: u32) -> Self {
        let mut channels = Vec::new();
        for lines in &cfg.encoders {
            // Capacity matches the config's encoder capacity
            let _ = channels.push(EncoderChannel::new(*lines));
        }
        let axes = AxisBank::new(cfg.axes, cfg.deadband);
        let heartbeat = Heartbeat::new(cfg.heartbeat, now_ms);
        let last_report_ms = now_ms.wrapping_sub(cfg.timing.report_interval_ms);
        Self {
            cfg,
            channels,
            buttons: ButtonBank::new(),
            axes,
            publisher: ReportPublisher::new(),
            heartbeat,
            last_report_ms,
        }
    }

    /// Install a boot-calibrated center for one axis.
    pub fn set_axis_center(&mut self, axis: usize, center: u16) {
        self.axes.set_center(axis, center);
    }

    /// Capture live pin state before the first tick.
    ///
    /// Seeds every channel's quadrature state and switch debouncer, and
    /// presets held switches in the button bank so power-on levels read
    /// as levels, not edges.
    pub fn seed(&mut self, dio: &mut impl DigitalSource, now_ms: u32) {
        let active_low = self.cfg.switches_active_low;
        for (i, channel) in self.channels.iter_mut().enumerate() {
            let held = channel.seed(dio, active_low, now_ms);
            self.buttons.set_level(switch_slot(i), held);
        }
    }

    /// Advance the pipeline by one tick.
    pub fn tick(
        &mut self,
        now_ms: u32,
        dio: &mut impl DigitalSource,
        adc: &mut impl AnalogSource,
        sink: &mut impl ReportSink,
    ) -> TickOutcome {
        let led = self.heartbeat.update(now_ms);

        let active_low = self.cfg.switches_active_low;
        let debounce_ms = self.cfg.timing.debounce_ms;
        let pulse_ms = self.cfg.timing.pulse_ms;
        for (i, channel) in self.channels.iter_mut().enumerate() {
            let sample = channel.sample(dio, active_low, debounce_ms, now_ms);
            if sample.step > 0 {
                self.buttons.pulse(cw_slot(i), now_ms, pulse_ms);
            } else if sample.step < 0 {
                self.buttons.pulse(ccw_slot(i), now_ms, pulse_ms);
            }
            if let Some(level) = sample.switch {
                self.buttons.set_level(switch_slot(i), level);
            }
        }

        self.buttons.expire(now_ms);

        let report = if now_ms.wrapping_sub(self.last_report_ms) >= self.cfg.timing.report_interval_ms
        {
            self.last_report_ms = now_ms;
            let axes = self.axes.sample(adc, self.publisher.last_axes());
            match self.publisher.publish(self.buttons.mask(), axes, sink) {
                Publish::Unchanged => ReportDisposition::Unchanged,
                Publish::Sent => {
                    self.heartbeat.record_send_ok(now_ms);
                    ReportDisposition::Sent
                }
                Publish::Failed => ReportDisposition::Failed,
            }
        } else {
            ReportDisposition::Deferred
        };

        TickOutcome { led, report }
    }

    /// True when no send has been confirmed within the stale window.
    pub fn link_stale(&self, now_ms: u32) -> bool {
        self.heartbeat.link_stale(now_ms)
    }
}
