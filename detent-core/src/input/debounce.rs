//! Switch debouncing by quiescence
//!
//! A raw change restarts the settling window; the stable state commits
//! only once the raw level has held unchanged for the full window and
//! still differs from the stable level. A constantly chattering line
//! therefore never commits; that reads as "no stable state yet", not an
//! error.

/// Raw-to-stable filter for one switch.
#[derive(Debug, Clone, Copy)]
pub struct Debouncer {
    raw_last: bool,
    stable: bool,
    changed_at_ms: u32,
}

impl Debouncer {
    /// Both raw and stable start at `level`, with no window pending.
    pub const fn new(level: bool, now_ms: u32) -> Self {
        Self {
            raw_last: level,
            stable: level,
            changed_at_ms: now_ms,
        }
    }

    /// Current debounced level.
    pub fn stable(&self) -> bool {
        self.stable
    }

    /// Feed one raw sample.
    ///
    /// Returns the new stable level on the tick it commits, `None`
    /// otherwise.
    pub fn sample(&mut self, raw: bool, now_ms: u32, settle_ms: u32) -> Option<bool> {
        if raw != self.raw_last {
            self.raw_last = raw;
            self.changed_at_ms = now_ms;
            return None;
        }
        if self.stable != raw && now_ms.wrapping_sub(self.changed_at_ms) >= settle_ms {
            self.stable = raw;
            return Some(raw);
        }
        None
    }
}
