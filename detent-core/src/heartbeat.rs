//! Link-health heartbeat
//!
//! Advisory blink state: slow while reports are being accepted, fast once
//! no send has succeeded within the stale window. It signals degraded
//! transport health to whoever is looking at the LED and never feeds back
//! into the pipeline.

use crate::config::HeartbeatConfig;

#[derive(Debug, Clone, Copy)]
pub struct Heartbeat {
    cfg: HeartbeatConfig,
    led_on: bool,
    toggled_at_ms: u32,
    last_ok_ms: u32,
}

impl Heartbeat {
    /// The link counts as fresh as of `now_ms`.
    pub const fn new(cfg: HeartbeatConfig, now_ms: u32) -> Self {
        Self {
            cfg,
            led_on: false,
            toggled_at_ms: now_ms,
            last_ok_ms: now_ms,
        }
    }

    /// Note a confirmed transmission.
    pub fn record_send_ok(&mut self, now_ms: u32) {
        self.last_ok_ms = now_ms;
    }

    /// True when no send has been confirmed within the stale window.
    pub fn link_stale(&self, now_ms: u32) -> bool {
        now_ms.wrapping_sub(self.last_ok_ms) > self.cfg.stale_after_ms
    }

    /// Advance the blink state, returning the LED level for this tick.
    pub fn update(&mut self, now_ms: u32) -> bool {
        let period = if self.link_stale(now_ms) {
            self.cfg.fast_ms
        } else {
            self.cfg.slow_ms
        };
        if now_ms.wrapping_sub(self.toggled_at_ms) >= period {
            self.led_on = !self.led_on;
            self.toggled_at_ms = now_ms;
        }
        self.led_on
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HeartbeatConfig;

    fn heartbeat() -> Heartbeat {
        Heartbeat::new(
            HeartbeatConfig {
                slow_ms: 500,
                fast_ms: 100,
                stale_after_ms: 1000,
            },
            0,
        )
    }

    #[test]
    fn test_blinks_slow_while_link_fresh() {
        let mut hb = heartbeat();
        hb.record_send_ok(0);
        assert!(!hb.update(499));
        assert!(hb.update(500));
        hb.record_send_ok(500);
        assert!(hb.update(999));
        assert!(!hb.update(1000));
    }

    #[test]
    fn test_blinks_fast_once_stale() {
        let mut hb = heartbeat();
        // No send confirmations; stale after 1000 ms
        assert!(!hb.link_stale(1000));
        assert!(hb.link_stale(1001));

        assert!(hb.update(1001)); // toggled: 1001 - 0 >= 100
        assert!(hb.update(1100));
        assert!(!hb.update(1101));
    }

    #[test]
    fn test_send_ok_returns_to_slow() {
        let mut hb = heartbeat();
        assert!(hb.link_stale(2000));
        hb.record_send_ok(2000);
        assert!(!hb.link_stale(2500));
        assert!(hb.link_stale(3001));
    }

    #[test]
    fn test_staleness_survives_clock_wrap() {
        let mut hb = heartbeat();
        hb.record_send_ok(u32::MAX - 100);
        assert!(!hb.link_stale(u32::MAX));
        assert!(!hb.link_stale(899)); // 1000 ms after the last ok
        assert!(hb.link_stale(901));
    }
}
