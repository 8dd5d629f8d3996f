//! IR capture, decode, and transmit
//!
//! The receive path is interrupt driven: the platform layer feeds pin edge
//! timestamps into [`IrReceiver::on_edge`] and idle-timer expiries into
//! [`IrReceiver::on_idle_timeout`]; the main loop polls
//! [`IrReceiver::decode`]. The transmit path is blocking PWM bit-banging
//! through [`IrSender`].

pub mod buffer;
pub mod capture;
pub mod consts;
pub mod crc;
pub mod decode;
pub mod encode;
pub mod timing;

#[cfg(test)]
pub(crate) mod sim;

pub use buffer::{RAW_BUFFER_LEN, RawTimingBuffer};
pub use capture::{CaptureState, IrConfig, IrReceiver, PinLevel};
pub use crc::crc8;
pub use decode::{
    ALL_DECODERS, DEFAULT_DECODERS, DecodedFrame, DecoderFn, REPEAT, RX_DATA_LEN, Scheme,
};
pub use encode::{CARRIER_KHZ, IrSender, TX_BUF_MAX};
