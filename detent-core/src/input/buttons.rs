//! Logical button bank
//!
//! Fixed array of button slots feeding the report bitmask. Encoder steps
//! occupy pulsed slots that auto-release after a configured duration;
//! switches occupy level slots that track their debounced state. Re-firing
//! an active pulse just pushes its release out; no queueing.

use detent_protocol::USABLE_BUTTON_MASK;

use crate::config::MAX_BUTTONS;

/// Wrap-safe "now has reached the deadline" test for u32 millisecond
/// clocks.
#[inline]
fn reached(now_ms: u32, deadline_ms: u32) -> bool {
    now_ms.wrapping_sub(deadline_ms) < u32::MAX / 2
}

#[derive(Debug, Clone, Copy, Default)]
struct Slot {
    active: bool,
    release_at_ms: Option<u32>,
}

/// All logical buttons of the device.
#[derive(Debug, Clone)]
pub struct ButtonBank {
    slots: [Slot; MAX_BUTTONS],
}

impl ButtonBank {
    pub const fn new() -> Self {
        Self {
            slots: [Slot {
                active: false,
                release_at_ms: None,
            }; MAX_BUTTONS],
        }
    }

    /// Activate a pulsed slot and (re)schedule its release.
    ///
    /// Out-of-range slots are ignored.
    pub fn pulse(&mut self, index: usize, now_ms: u32, pulse_ms: u32) {
        if let Some(slot) = self.slots.get_mut(index) {
            slot.active = true;
            slot.release_at_ms = Some(now_ms.wrapping_add(pulse_ms));
        }
    }

    /// Track a debounced switch level on a level slot.
    ///
    /// Out-of-range slots are ignored.
    pub fn set_level(&mut self, index: usize, on: bool) {
        if let Some(slot) = self.slots.get_mut(index) {
            slot.active = on;
            slot.release_at_ms = None;
        }
    }

    /// Clear every pulsed slot whose release time has been reached.
    pub fn expire(&mut self, now_ms: u32) {
        for slot in &mut self.slots {
            if let Some(release_at) = slot.release_at_ms {
                if reached(now_ms, release_at) {
                    slot.active = false;
                    slot.release_at_ms = None;
                }
            }
        }
    }

    /// Bitmask of active slots, bit `i` for slot `i`, masked to the wire
    /// width. Slots beyond the wire width never reach the mask.
    pub fn mask(&self) -> u16 {
        let mut mask = 0u16;
        for (i, slot) in self.slots.iter().enumerate().take(16) {
            if slot.active {
                mask |= 1 << i;
            }
        }
        mask & USABLE_BUTTON_MASK
    }
}

impl Default for ButtonBank {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PULSE: u32 = 20;

    #[test]
    fn test_pulse_holds_until_release_time() {
        let mut bank = ButtonBank::new();
        bank.pulse(0, 100, PULSE);
        assert_eq!(bank.mask(), 0b1);

        bank.expire(100 + PULSE - 1);
        assert_eq!(bank.mask(), 0b1);

        bank.expire(100 + PULSE);
        assert_eq!(bank.mask(), 0);
    }

    #[test]
    fn test_expiry_past_deadline_still_clears() {
        let mut bank = ButtonBank::new();
        bank.pulse(3, 0, PULSE);
        bank.expire(500);
        assert_eq!(bank.mask(), 0);
    }

    #[test]
    fn test_refire_extends_the_pulse() {
        let mut bank = ButtonBank::new();
        bank.pulse(1, 0, PULSE);
        bank.pulse(1, 15, PULSE);
        // Original deadline passed, extended one not
        bank.expire(20);
        assert_eq!(bank.mask(), 0b10);
        bank.expire(35);
        assert_eq!(bank.mask(), 0);
    }

    #[test]
    fn test_level_slots_ignore_expiry() {
        let mut bank = ButtonBank::new();
        bank.set_level(2, true);
        bank.expire(u32::MAX / 3);
        assert_eq!(bank.mask(), 0b100);
        bank.set_level(2, false);
        assert_eq!(bank.mask(), 0);
    }

    #[test]
    fn test_mask_orders_by_slot_index() {
        let mut bank = ButtonBank::new();
        bank.set_level(0, true);
        bank.set_level(5, true);
        bank.set_level(14, true);
        assert_eq!(bank.mask(), (1 << 0) | (1 << 5) | (1 << 14));
    }

    #[test]
    fn test_mask_clips_to_wire_width() {
        let mut bank = ButtonBank::new();
        for i in 0..MAX_BUTTONS {
            bank.set_level(i, true);
        }
        assert_eq!(bank.mask(), USABLE_BUTTON_MASK);
    }

    #[test]
    fn test_out_of_range_slot_is_ignored() {
        let mut bank = ButtonBank::new();
        bank.pulse(MAX_BUTTONS, 0, PULSE);
        bank.set_level(MAX_BUTTONS + 7, true);
        assert_eq!(bank.mask(), 0);
    }

    #[test]
    fn test_release_survives_clock_wrap() {
        let mut bank = ButtonBank::new();
        bank.pulse(0, u32::MAX - 5, PULSE);
        // Deadline wrapped to 14; just before it the pulse is still live
        bank.expire(u32::MAX);
        assert_eq!(bank.mask(), 0b1);
        bank.expire(14);
        assert_eq!(bank.mask(), 0);
    }
}
