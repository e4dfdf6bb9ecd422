//! Inter-task communication channels
//!
//! Defines the static channels used for communication between Embassy
//! tasks. Uses embassy-sync primitives for safe async communication.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;

use detent_protocol::REPORT_LEN;

/// Channel capacity for outbound report frames
const REPORT_QUEUE_SIZE: usize = 4;

/// Encoded report frames on their way to the USB writer.
///
/// The sampler enqueues at most one frame per report interval; a full
/// queue reads back to it as a refused send, which it retries while the
/// device state still differs from the last delivered frame.
pub static REPORT_QUEUE: Channel<CriticalSectionRawMutex, [u8; REPORT_LEN], REPORT_QUEUE_SIZE> =
    Channel::new();
