//! Protocol decoders
//!
//! Each scheme is a plain function with a common signature, tried in priority
//! order against a completed raw frame; the first success wins. A `None`
//! result means "not this scheme" (too short, header mismatch, bit mismatch,
//! or bad checksum) and the dispatcher moves on.

pub mod bytes;
pub mod classic;
pub mod hash;
pub mod rc;

use heapless::Vec;

use super::buffer::RawTimingBuffer;
use super::timing::{match_mark, match_space};

/// Capacity of the decoded byte buffer for the long protocols
pub const RX_DATA_LEN: usize = 100;

/// Decoded value reported when a repeat code is received
pub const REPEAT: u32 = 0xFFFF_FFFF;

/// Decode scheme tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    Nec,
    Sony,
    Sanyo,
    Mitsubishi,
    Rc5,
    Rc6,
    Dish,
    Sharp,
    Panasonic,
    Jvc,
    Disney,
    Bytes,
    /// FNV hash fallback; not a real decode, just a stable fingerprint
    Unknown,
}

/// Result of a successful decode attempt
///
/// Fixed-width schemes populate `value`/`bits`; the byte-oriented schemes
/// (BYTES, Disney) populate `data` instead and set `bits` to 8x the byte
/// count. `address` is only used by Panasonic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedFrame {
    pub scheme: Scheme,
    pub value: u32,
    pub bits: u16,
    pub address: u16,
    pub data: Vec<u8, RX_DATA_LEN>,
}

impl DecodedFrame {
    /// Frame carrying a numeric value
    pub fn value(scheme: Scheme, value: u32, bits: u16) -> Self {
        Self {
            scheme,
            value,
            bits,
            address: 0,
            data: Vec::new(),
        }
    }

    /// Repeat-code sentinel frame for `scheme`
    pub fn repeat(scheme: Scheme) -> Self {
        Self::value(scheme, REPEAT, 0)
    }

    /// Frame carrying a byte sequence
    pub fn data(scheme: Scheme, data: Vec<u8, RX_DATA_LEN>) -> Self {
        let bits = (data.len() * 8) as u16;
        Self {
            scheme,
            value: 0,
            bits,
            address: 0,
            data,
        }
    }

    /// Return true if this frame is a repeat-code sentinel
    pub fn is_repeat(&self) -> bool {
        self.bits == 0 && self.value == REPEAT
    }
}

/// Common decoder signature: raw frame in, decoded frame or not-this-scheme
pub type DecoderFn = fn(&RawTimingBuffer) -> Option<DecodedFrame>;

/// The application decode chain: BYTES only, as deployed on the badge link
pub static DEFAULT_DECODERS: &[DecoderFn] = &[bytes::decode_bytes];

/// Every supported scheme in priority order
///
/// The hash fallback matches nearly any capture, so it is last; with this
/// chain a noisy frame decodes as `Scheme::Unknown` instead of failing.
pub static ALL_DECODERS: &[DecoderFn] = &[
    bytes::decode_bytes,
    classic::decode_nec,
    classic::decode_panasonic,
    classic::decode_sony,
    classic::decode_sanyo,
    classic::decode_mitsubishi,
    rc::decode_rc5,
    rc::decode_rc6,
    classic::decode_jvc,
    hash::decode_disney,
    hash::decode_hash,
];

/// Duration at `idx`, or 0 (which matches no tolerance window) past the end
pub(crate) fn at(buf: &[u32], idx: usize) -> u32 {
    buf.get(idx).copied().unwrap_or(0)
}

/// Read one pulse-width bit: a constant-width mark then a wide (1) or
/// narrow (0) space. Advances `offset` past both entries.
pub(crate) fn pwm_bit(
    buf: &[u32],
    offset: &mut usize,
    bit_mark: u32,
    one_space: u32,
    zero_space: u32,
) -> Option<bool> {
    if !match_mark(at(buf, *offset), bit_mark) {
        return None;
    }
    *offset += 1;
    let bit = if match_space(at(buf, *offset), one_space) {
        true
    } else if match_space(at(buf, *offset), zero_space) {
        false
    } else {
        return None;
    };
    *offset += 1;
    Some(bit)
}
