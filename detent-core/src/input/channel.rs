//! One encoder channel: quadrature pair plus press switch

use crate::config::EncoderLines;
use crate::input::debounce::Debouncer;
use crate::input::quadrature::Decoder;
use crate::traits::DigitalSource;

/// What one channel produced this tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChannelSample {
    /// Decoded rotation step, +1 clockwise.
    pub step: i8,
    /// Newly committed switch level (debounced, polarity applied).
    pub switch: Option<bool>,
}

/// Per-channel sampling state.
#[derive(Debug, Clone, Copy)]
pub struct EncoderChannel {
    lines: EncoderLines,
    decoder: Decoder,
    switch: Debouncer,
}

impl EncoderChannel {
    /// Channel with unseeded state; call [`seed`](Self::seed) before the
    /// first tick so power-on levels do not read as edges.
    pub fn new(lines: EncoderLines) -> Self {
        Self {
            lines,
            decoder: Decoder::new(),
            switch: Debouncer::new(false, 0),
        }
    }

    /// Capture the live pin state.
    ///
    /// Returns the current logical switch level so the caller can preset
    /// the corresponding button instead of synthesizing a press.
    pub fn seed(&mut self, dio: &mut impl DigitalSource, active_low: bool, now_ms: u32) -> bool {
        let a = dio.read_line(self.lines.a);
        let b = dio.read_line(self.lines.b);
        self.decoder.seed(a, b);

        let level = logical(dio.read_line(self.lines.sw), active_low);
        self.switch = Debouncer::new(level, now_ms);
        level
    }

    /// Sample all three lines once.
    pub fn sample(
        &mut self,
        dio: &mut impl DigitalSource,
        active_low: bool,
        settle_ms: u32,
        now_ms: u32,
    ) -> ChannelSample {
        let a = dio.read_line(self.lines.a);
        let b = dio.read_line(self.lines.b);
        let step = self.decoder.update(a, b);

        let raw = logical(dio.read_line(self.lines.sw), active_low);
        let switch = self.switch.sample(raw, now_ms, settle_ms);

        ChannelSample { step, switch }
    }
}

/// Electrical-to-logical level conversion.
#[inline]
fn logical(raw: bool, active_low: bool) -> bool {
    raw ^ active_low
}
