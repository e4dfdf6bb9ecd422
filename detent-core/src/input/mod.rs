//! Digital input handling: quadrature decoding, switch debouncing and
//! logical button bookkeeping.

pub mod buttons;
pub mod channel;
pub mod debounce;
pub mod quadrature;

pub use buttons::ButtonBank;
pub use channel::{ChannelSample, EncoderChannel};
pub use debounce::Debouncer;
pub use quadrature::Decoder;
