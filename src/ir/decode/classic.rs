//! Classic fixed-width scheme decoders
//!
//! NEC, Sony, Sanyo, Mitsubishi, Panasonic, and JVC. All follow the same
//! pattern: validate a minimum length and the header, then shift bits in
//! MSB-first. Several schemes report a short buffer right after a frame as
//! a repeat code instead of re-decoding.

use crate::ir::buffer::RawTimingBuffer;
use crate::ir::consts::*;
use crate::ir::timing::{match_mark, match_space};

use super::{DecodedFrame, Scheme, at, pwm_bit};

/// Attempt an NEC decode (32 bits, or the 4-sample repeat code)
pub fn decode_nec(raw: &RawTimingBuffer) -> Option<DecodedFrame> {
    let buf = raw.as_slice();
    let mut offset = 0;

    // Initial mark
    if !match_mark(at(buf, offset), NEC_HDR_MARK) {
        return None;
    }
    offset += 1;

    // Check for repeat
    if raw.len() == 4
        && match_space(at(buf, offset), NEC_RPT_SPACE)
        && match_mark(at(buf, offset + 1), NEC_BIT_MARK)
    {
        return Some(DecodedFrame::repeat(Scheme::Nec));
    }
    if raw.len() < 2 * NEC_BITS + 3 {
        return None;
    }

    // Initial space
    if !match_space(at(buf, offset), NEC_HDR_SPACE) {
        return None;
    }
    offset += 1;

    let mut data = 0u32;
    for _ in 0..NEC_BITS {
        let bit = pwm_bit(buf, &mut offset, NEC_BIT_MARK, NEC_ONE_SPACE, NEC_ZERO_SPACE)?;
        data = (data << 1) | bit as u32;
    }

    Some(DecodedFrame::value(Scheme::Nec, data, NEC_BITS as u16))
}

/// Attempt a Sony decode (12+ bits, value encoded in mark widths)
pub fn decode_sony(raw: &RawTimingBuffer) -> Option<DecodedFrame> {
    let buf = raw.as_slice();
    // Header mark plus a space/mark pair per bit.
    if raw.len() < 2 * SONY_BITS + 1 {
        return None;
    }
    let mut offset = 0;

    // Some Sonys deliver repeats fast after the first frame; a short leading
    // gap is the tell. Compared against raw ticks, not a tolerance window --
    // the deliberate fast path.
    if at(buf, offset) < SONY_DOUBLE_SPACE_USECS {
        return Some(DecodedFrame::repeat(Scheme::Sony));
    }

    // Initial mark
    if !match_mark(at(buf, offset), SONY_HDR_MARK) {
        return None;
    }
    offset += 1;

    let mut data = 0u32;
    while offset + 1 < raw.len() {
        if !match_space(at(buf, offset), SONY_HDR_SPACE) {
            break;
        }
        offset += 1;
        if match_mark(at(buf, offset), SONY_ONE_MARK) {
            data = (data << 1) | 1;
        } else if match_mark(at(buf, offset), SONY_ZERO_MARK) {
            data <<= 1;
        } else {
            return None;
        }
        offset += 1;
    }

    let bits = (offset - 1) / 2;
    if bits < SONY_BITS {
        return None;
    }
    Some(DecodedFrame::value(Scheme::Sony, data, bits as u16))
}

/// Attempt a Sanyo decode (SA 8650B: Sony-like, double header mark)
pub fn decode_sanyo(raw: &RawTimingBuffer) -> Option<DecodedFrame> {
    let buf = raw.as_slice();
    if raw.len() < 2 * SANYO_BITS + 2 {
        return None;
    }
    let mut offset = 0;

    if at(buf, offset) < SANYO_DOUBLE_SPACE_USECS {
        return Some(DecodedFrame::repeat(Scheme::Sanyo));
    }
    offset += 1;

    // Initial mark, then a second header mark
    if !match_mark(at(buf, offset), SANYO_HDR_MARK) {
        return None;
    }
    offset += 1;
    if !match_mark(at(buf, offset), SANYO_HDR_MARK) {
        return None;
    }
    offset += 1;

    let mut data = 0u32;
    while offset + 1 < raw.len() {
        if !match_space(at(buf, offset), SANYO_HDR_SPACE) {
            break;
        }
        offset += 1;
        if match_mark(at(buf, offset), SANYO_ONE_MARK) {
            data = (data << 1) | 1;
        } else if match_mark(at(buf, offset), SANYO_ZERO_MARK) {
            data <<= 1;
        } else {
            return None;
        }
        offset += 1;
    }

    let bits = (offset - 1) / 2;
    if bits < SANYO_BITS {
        return None;
    }
    Some(DecodedFrame::value(Scheme::Sanyo, data, bits as u16))
}

/// Attempt a Mitsubishi decode (RM 75501: no header mark, value in marks)
pub fn decode_mitsubishi(raw: &RawTimingBuffer) -> Option<DecodedFrame> {
    let buf = raw.as_slice();
    if raw.len() < 2 * MITSUBISHI_BITS + 2 {
        return None;
    }
    let mut offset = 1;

    // Initial space
    if !match_mark(at(buf, offset), MITSUBISHI_HDR_SPACE) {
        return None;
    }
    offset += 1;

    let mut data = 0u32;
    while offset + 1 < raw.len() {
        if match_mark(at(buf, offset), MITSUBISHI_ONE_MARK) {
            data = (data << 1) | 1;
        } else if match_mark(at(buf, offset), MITSUBISHI_ZERO_MARK) {
            data <<= 1;
        } else {
            return None;
        }
        offset += 1;
        if !match_space(at(buf, offset), MITSUBISHI_HDR_SPACE) {
            break;
        }
        offset += 1;
    }

    let bits = (offset - 1) / 2;
    if bits < MITSUBISHI_BITS {
        return None;
    }
    Some(DecodedFrame::value(Scheme::Mitsubishi, data, bits as u16))
}

/// Attempt a Panasonic decode (48 bits; address in the high word)
pub fn decode_panasonic(raw: &RawTimingBuffer) -> Option<DecodedFrame> {
    let buf = raw.as_slice();
    let mut offset = 0;

    if !match_mark(at(buf, offset), PANASONIC_HDR_MARK) {
        return None;
    }
    offset += 1;
    if !match_mark(at(buf, offset), PANASONIC_HDR_SPACE) {
        return None;
    }
    offset += 1;

    let mut data = 0u64;
    for _ in 0..PANASONIC_BITS {
        let bit = pwm_bit(
            buf,
            &mut offset,
            PANASONIC_BIT_MARK,
            PANASONIC_ONE_SPACE,
            PANASONIC_ZERO_SPACE,
        )?;
        data = (data << 1) | bit as u64;
    }

    let mut frame =
        DecodedFrame::value(Scheme::Panasonic, data as u32, PANASONIC_BITS as u16);
    frame.address = (data >> 32) as u16;
    Some(frame)
}

/// Attempt a JVC decode (16 bits; repeats skip the header)
pub fn decode_jvc(raw: &RawTimingBuffer) -> Option<DecodedFrame> {
    let buf = raw.as_slice();
    let mut offset = 0;

    // Check for repeat: a headerless frame bracketed by bit marks
    if raw.len() >= 1
        && raw.len() - 1 == 33
        && match_mark(at(buf, offset), JVC_BIT_MARK)
        && match_mark(at(buf, raw.len() - 1), JVC_BIT_MARK)
    {
        return Some(DecodedFrame::repeat(Scheme::Jvc));
    }

    // Initial mark
    if !match_mark(at(buf, offset), JVC_HDR_MARK) {
        return None;
    }
    offset += 1;
    if raw.len() < 2 * JVC_BITS + 1 {
        return None;
    }
    // Initial space
    if !match_space(at(buf, offset), JVC_HDR_SPACE) {
        return None;
    }
    offset += 1;

    let mut data = 0u32;
    for _ in 0..JVC_BITS {
        let bit = pwm_bit(buf, &mut offset, JVC_BIT_MARK, JVC_ONE_SPACE, JVC_ZERO_SPACE)?;
        data = (data << 1) | bit as u32;
    }

    // Stop bit
    if !match_mark(at(buf, offset), JVC_BIT_MARK) {
        return None;
    }

    Some(DecodedFrame::value(Scheme::Jvc, data, JVC_BITS as u16))
}
