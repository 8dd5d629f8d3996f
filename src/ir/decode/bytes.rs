//! BYTES scheme decoder
//!
//! The custom application protocol: an NEC-style header, then a stream of
//! MSB-first bytes where the first byte is a self-describing frame length
//! and the last is a CRC8 over everything before it (length byte included).
//!
//! The byte count is derived from how many mark/space pairs were captured,
//! not from the embedded length byte, so trailing noise can decode as extra
//! garbage bytes; the CRC check then rejects the frame. Fragile on paper,
//! but it is what the deployed link does.

use heapless::Vec;

use crate::ir::buffer::RawTimingBuffer;
use crate::ir::consts::{
    BYTES_MIN_SAMPLES, NEC_BIT_MARK, NEC_HDR_MARK, NEC_HDR_SPACE, NEC_ONE_SPACE, NEC_ZERO_SPACE,
};
use crate::ir::crc::crc8;
use crate::ir::timing::{match_mark, match_space};

use super::{DecodedFrame, RX_DATA_LEN, Scheme, at, pwm_bit};

/// Attempt a BYTES decode of `raw`
pub fn decode_bytes(raw: &RawTimingBuffer) -> Option<DecodedFrame> {
    let buf = raw.as_slice();
    let mut offset = 0;

    if raw.len() < BYTES_MIN_SAMPLES {
        return None;
    }

    // Header
    if !match_mark(at(buf, offset), NEC_HDR_MARK) {
        return None;
    }
    offset += 1;
    if !match_space(at(buf, offset), NEC_HDR_SPACE) {
        return None;
    }
    offset += 1;

    // LEN, DATA, and CRC: byte count comes from the captured pair count.
    let total_len = (raw.len() - offset - 1) / 8 / 2;
    let mut data: Vec<u8, RX_DATA_LEN> = Vec::new();
    for _ in 0..total_len {
        let mut byte = 0u8;
        for _ in 0..8 {
            let bit = pwm_bit(buf, &mut offset, NEC_BIT_MARK, NEC_ONE_SPACE, NEC_ZERO_SPACE)?;
            byte = (byte << 1) | bit as u8;
        }
        data.push(byte).ok()?;
    }

    // Validate CRC: frame length from the first byte, checksum over the
    // length byte and payload, sent checksum in the last covered slot.
    let frame_len = *data.first()? as usize;
    if frame_len < 2 || frame_len > data.len() {
        crate::log_warn!("BYTES: bad length byte");
        return None;
    }
    let crc_sent = data[frame_len - 1];
    let crc_calc = crc8(&data[..frame_len - 1]);
    if crc_calc != crc_sent {
        crate::log_warn!("BYTES: bad CRC");
        return None;
    }

    Some(DecodedFrame::data(Scheme::Bytes, data))
}
