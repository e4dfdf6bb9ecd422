//! Quadrature decoding
//!
//! Table-driven Gray-code decoder: the previous and current 2-bit (A,B)
//! states index a 16-entry table whose entries are the signed step for
//! that transition. Bounce and double-step transitions decode to 0, which
//! is all the noise rejection the quadrature pins need; only the switch
//! path is debounced.

/// Signed step per `(prev << 2) | curr` state pair.
///
/// A leads B for clockwise rotation, so one full detent cycle
/// `00 → 10 → 11 → 01 → 00` contributes +4.
#[rustfmt::skip]
const STEP_TABLE: [i8; 16] = [
     0, -1,  1,  0,
     1,  0,  0, -1,
    -1,  0,  0,  1,
     0,  1, -1,  0,
];

/// Pack two phase levels into the 2-bit state `(a << 1) | b`.
#[inline]
pub const fn pack(a: bool, b: bool) -> u8 {
    ((a as u8) << 1) | (b as u8)
}

/// Step decoded from one state transition: +1 clockwise, -1
/// counter-clockwise, 0 for rest, bounce or an illegal double change.
#[inline]
pub const fn step(prev: u8, curr: u8) -> i8 {
    STEP_TABLE[(((prev & 0b11) << 2) | (curr & 0b11)) as usize]
}

/// Per-channel decoder; the only state is the previous 2-bit sample.
#[derive(Debug, Clone, Copy)]
pub struct Decoder {
    last: u8,
}

impl Decoder {
    pub const fn new() -> Self {
        Self { last: 0 }
    }

    /// Capture the live phase state without producing a step.
    pub fn seed(&mut self, a: bool, b: bool) {
        self.last = pack(a, b);
    }

    /// Feed one sample, returning the decoded step.
    pub fn update(&mut self, a: bool, b: bool) -> i8 {
        let curr = pack(a, b);
        let step = step(self.last, curr);
        self.last = curr;
        step
    }
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}
