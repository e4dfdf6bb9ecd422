//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels.

use embassy_time::Instant;

pub mod sampler;
pub mod usb;

pub use sampler::sampler_task;
pub use usb::usb_task;

/// Milliseconds since boot, truncated to the controller's clock width.
pub fn now_ms() -> u32 {
    Instant::now().as_millis() as u32
}
