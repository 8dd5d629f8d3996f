//! Philips RC5 and RC6 decoders
//!
//! Both are Manchester coded, so durations come in one, two, or three bit
//! widths. `RcLevelTracker` splits each duration into single-width levels and
//! hands them out one at a time; the decoders then consume level pairs.

use crate::ir::buffer::RawTimingBuffer;
use crate::ir::capture::PinLevel;
use crate::ir::consts::{
    MIN_RC5_SAMPLES, MIN_RC6_SAMPLES, RC5_T1, RC6_HDR_MARK, RC6_HDR_SPACE, RC6_T1,
};
use crate::ir::timing::{match_mark, match_space};

use super::{DecodedFrame, Scheme, at};

/// Splits raw durations into single-bit-width levels
///
/// A duration spanning two bit widths yields its level twice before the
/// cursor advances. Reads past the end of the buffer yield `Space`, which
/// lets a frame's trailing idle finish the last Manchester pair.
struct RcLevelTracker<'a> {
    buf: &'a [u32],
    offset: usize,
    used: u32,
}

impl<'a> RcLevelTracker<'a> {
    fn new(buf: &'a [u32], offset: usize) -> Self {
        Self {
            buf,
            offset,
            used: 0,
        }
    }

    fn at_end(&self) -> bool {
        self.offset >= self.buf.len()
    }

    /// Next level, or None when the current duration is not a whole multiple
    /// of `t1`
    fn level(&mut self, t1: u32) -> Option<PinLevel> {
        if self.at_end() {
            return Some(PinLevel::Space);
        }
        let width = self.buf[self.offset];
        let (val, matcher): (_, fn(u32, u32) -> bool) = if self.offset % 2 == 0 {
            (PinLevel::Mark, match_mark)
        } else {
            (PinLevel::Space, match_space)
        };

        let avail = if matcher(width, t1) {
            1
        } else if matcher(width, 2 * t1) {
            2
        } else if matcher(width, 3 * t1) {
            3
        } else {
            return None;
        };

        self.used += 1;
        if self.used >= avail {
            self.used = 0;
            self.offset += 1;
        }
        Some(val)
    }
}

/// Attempt an RC5 decode (Manchester, space-then-mark is a 1)
pub fn decode_rc5(raw: &RawTimingBuffer) -> Option<DecodedFrame> {
    if raw.len() < MIN_RC5_SAMPLES + 2 {
        return None;
    }
    let mut levels = RcLevelTracker::new(raw.as_slice(), 0);

    // Start bits
    if levels.level(RC5_T1)? != PinLevel::Mark {
        return None;
    }
    if levels.level(RC5_T1)? != PinLevel::Space {
        return None;
    }
    if levels.level(RC5_T1)? != PinLevel::Mark {
        return None;
    }

    let mut data = 0u32;
    let mut nbits = 0u16;
    while !levels.at_end() {
        let level_a = levels.level(RC5_T1)?;
        let level_b = levels.level(RC5_T1)?;
        match (level_a, level_b) {
            (PinLevel::Space, PinLevel::Mark) => data = (data << 1) | 1,
            (PinLevel::Mark, PinLevel::Space) => data <<= 1,
            _ => return None,
        }
        nbits += 1;
    }

    Some(DecodedFrame::value(Scheme::Rc5, data, nbits))
}

/// Attempt an RC6 decode (headered Manchester, sense reversed from RC5,
/// double-wide trailer bit)
pub fn decode_rc6(raw: &RawTimingBuffer) -> Option<DecodedFrame> {
    let buf = raw.as_slice();
    if raw.len() < MIN_RC6_SAMPLES {
        return None;
    }
    let mut offset = 0;

    // Initial mark
    if !match_mark(at(buf, offset), RC6_HDR_MARK) {
        return None;
    }
    offset += 1;
    if !match_space(at(buf, offset), RC6_HDR_SPACE) {
        return None;
    }
    offset += 1;

    let mut levels = RcLevelTracker::new(buf, offset);

    // Start bit (always 1)
    if levels.level(RC6_T1)? != PinLevel::Mark {
        return None;
    }
    if levels.level(RC6_T1)? != PinLevel::Space {
        return None;
    }

    let mut data = 0u32;
    let mut nbits = 0u16;
    while !levels.at_end() {
        let level_a = levels.level(RC6_T1)?;
        if nbits == 3 {
            // T bit is double wide; second half must match
            if level_a != levels.level(RC6_T1)? {
                return None;
            }
        }
        let level_b = levels.level(RC6_T1)?;
        if nbits == 3 {
            if level_b != levels.level(RC6_T1)? {
                return None;
            }
        }
        match (level_a, level_b) {
            (PinLevel::Mark, PinLevel::Space) => data = (data << 1) | 1,
            (PinLevel::Space, PinLevel::Mark) => data <<= 1,
            _ => return None,
        }
        nbits += 1;
    }

    Some(DecodedFrame::value(Scheme::Rc6, data, nbits))
}
