//! Protocol timing constants
//!
//! Pulse parameters in microseconds. The first mark of a frame is the one
//! following the long idle gap. The NEC-family header values are tuned for
//! the TSOP32338 receiver part (nominal NEC timing is 9000/4500); treat them
//! as configuration, not protocol law.

pub const NEC_HDR_MARK: u32 = 4000;
pub const NEC_HDR_SPACE: u32 = 2000;
pub const NEC_BIT_MARK: u32 = 500;
pub const NEC_ONE_SPACE: u32 = 1000;
pub const NEC_ZERO_SPACE: u32 = 500;
pub const NEC_RPT_SPACE: u32 = 2250;
pub const NEC_BITS: usize = 32;

pub const SONY_HDR_MARK: u32 = 2400;
pub const SONY_HDR_SPACE: u32 = 600;
pub const SONY_ONE_MARK: u32 = 1200;
pub const SONY_ZERO_MARK: u32 = 600;
// Usually see ~713 for the repeat gap; compared against raw ticks.
pub const SONY_DOUBLE_SPACE_USECS: u32 = 500;
pub const SONY_BITS: usize = 12;

// SA 8650B
pub const SANYO_HDR_MARK: u32 = 3500;
pub const SANYO_HDR_SPACE: u32 = 950;
pub const SANYO_ONE_MARK: u32 = 2400;
pub const SANYO_ZERO_MARK: u32 = 700;
pub const SANYO_DOUBLE_SPACE_USECS: u32 = 800;
pub const SANYO_BITS: usize = 12;

// Mitsubishi RM 75501
pub const MITSUBISHI_HDR_SPACE: u32 = 350;
pub const MITSUBISHI_ONE_MARK: u32 = 1950;
pub const MITSUBISHI_ZERO_MARK: u32 = 750;
pub const MITSUBISHI_BITS: usize = 16;

pub const RC5_T1: u32 = 889;
pub const MIN_RC5_SAMPLES: usize = 11;

pub const RC6_HDR_MARK: u32 = 2666;
pub const RC6_HDR_SPACE: u32 = 889;
pub const RC6_T1: u32 = 444;
pub const MIN_RC6_SAMPLES: usize = 1;

pub const SHARP_BIT_MARK: u32 = 245;
pub const SHARP_ONE_SPACE: u32 = 1805;
pub const SHARP_ZERO_SPACE: u32 = 795;
pub const SHARP_TOGGLE_MASK: u32 = 0x3FF;

pub const DISH_HDR_MARK: u32 = 400;
pub const DISH_HDR_SPACE: u32 = 6100;
pub const DISH_BIT_MARK: u32 = 400;
pub const DISH_ONE_SPACE: u32 = 1700;
pub const DISH_ZERO_SPACE: u32 = 2800;
pub const DISH_TOP_BIT: u32 = 0x8000;

pub const PANASONIC_HDR_MARK: u32 = 3500;
pub const PANASONIC_HDR_SPACE: u32 = 1775;
pub const PANASONIC_BIT_MARK: u32 = 432;
pub const PANASONIC_ONE_SPACE: u32 = 1296;
pub const PANASONIC_ZERO_SPACE: u32 = 453;
pub const PANASONIC_BITS: usize = 48;

pub const JVC_HDR_MARK: u32 = 8000;
pub const JVC_HDR_SPACE: u32 = 4000;
pub const JVC_BIT_MARK: u32 = 600;
pub const JVC_ONE_SPACE: u32 = 1600;
pub const JVC_ZERO_SPACE: u32 = 550;
pub const JVC_BITS: usize = 16;

/// Minimum raw sample count before a BYTES decode is attempted; rejects noise.
pub const BYTES_MIN_SAMPLES: usize = 80;

pub const TOPBIT: u32 = 0x8000_0000;
