//! Bit-banging IR transmitter
//!
//! Marks are carrier bursts (PWM at 50% duty), spaces are carrier off; bit
//! timing comes from busy-waiting on the platform timer. Everything here
//! blocks for the duration of the burst, so callers sharing the pin
//! environment with a receiver disable capture around a send.

use crate::ir::consts::*;
use crate::ir::crc::crc8;
use crate::platform::{
    PlatformError, Result,
    traits::{PwmInterface, TimerInterface},
};

/// Default carrier frequency in kHz
pub const CARRIER_KHZ: u32 = 38;

/// Maximum payload length accepted by `send_bytes`
pub const TX_BUF_MAX: usize = 32;

// Detector settle time after the carrier comes up, before the first header.
const TX_SETTLE_US: u32 = 2000;

/// IR transmitter over a PWM slice and a busy-wait timer
pub struct IrSender<P: PwmInterface, T: TimerInterface> {
    pwm: P,
    timer: T,
}

impl<P: PwmInterface, T: TimerInterface> IrSender<P, T> {
    pub fn new(pwm: P, timer: T) -> Self {
        Self { pwm, timer }
    }

    /// Tear down into the underlying peripherals
    pub fn release(self) -> (P, T) {
        (self.pwm, self.timer)
    }

    /// Bring up the carrier at `khz` with the output off
    pub fn enable_ir_out(&mut self, khz: u32) -> Result<()> {
        self.pwm.set_frequency(khz * 1000)?;
        self.pwm.set_duty_cycle(0.0)?;
        self.pwm.enable();
        Ok(())
    }

    /// Carrier burst for `us` microseconds
    pub fn mark(&mut self, us: u32) -> Result<()> {
        self.pwm.set_duty_cycle(0.5)?;
        if us > 0 {
            self.timer.delay_us(us)?;
        }
        Ok(())
    }

    /// Carrier off for `us` microseconds
    pub fn space(&mut self, us: u32) -> Result<()> {
        self.pwm.set_duty_cycle(0.0)?;
        if us > 0 {
            self.timer.delay_us(us)?;
        }
        Ok(())
    }

    fn pwm_bit(&mut self, bit: bool, bit_mark: u32, one_space: u32, zero_space: u32) -> Result<()> {
        self.mark(bit_mark)?;
        self.space(if bit { one_space } else { zero_space })
    }

    fn pwm_byte(&mut self, byte: u8, bit_mark: u32, one_space: u32, zero_space: u32) -> Result<()> {
        for i in (0..8).rev() {
            self.pwm_bit(byte >> i & 1 != 0, bit_mark, one_space, zero_space)?;
        }
        Ok(())
    }

    /// Send an NEC frame; `data` is MSB aligned (pass 32 bits for nbits=32)
    pub fn send_nec(&mut self, mut data: u32, nbits: u32) -> Result<()> {
        self.enable_ir_out(CARRIER_KHZ)?;
        self.timer.delay_us(TX_SETTLE_US)?;
        self.mark(NEC_HDR_MARK)?;
        self.space(NEC_HDR_SPACE)?;
        for _ in 0..nbits {
            self.pwm_bit(data & TOPBIT != 0, NEC_BIT_MARK, NEC_ONE_SPACE, NEC_ZERO_SPACE)?;
            data <<= 1;
        }
        self.mark(NEC_BIT_MARK)?;
        self.space(0)
    }

    /// Send a length-prefixed, CRC-protected byte frame on NEC timing
    ///
    /// Wire layout: header, LEN byte (payload length + 2), payload bytes,
    /// CRC8 over LEN and payload, then a final bit mark.
    pub fn send_bytes(&mut self, payload: &[u8]) -> Result<()> {
        if payload.len() > TX_BUF_MAX {
            return Err(PlatformError::InvalidConfig);
        }
        let length_byte = payload.len() as u8 + 2;
        let crc_byte = length_byte ^ crc8(payload);

        self.enable_ir_out(CARRIER_KHZ)?;
        self.timer.delay_us(TX_SETTLE_US)?;
        self.mark(NEC_HDR_MARK)?;
        self.space(NEC_HDR_SPACE)?;

        self.pwm_byte(length_byte, NEC_BIT_MARK, NEC_ONE_SPACE, NEC_ZERO_SPACE)?;
        for &byte in payload {
            self.pwm_byte(byte, NEC_BIT_MARK, NEC_ONE_SPACE, NEC_ZERO_SPACE)?;
        }
        self.pwm_byte(crc_byte, NEC_BIT_MARK, NEC_ONE_SPACE, NEC_ZERO_SPACE)?;

        self.mark(NEC_BIT_MARK)?;
        self.space(0)
    }

    /// Send a Sony frame; the value rides in the mark widths
    pub fn send_sony(&mut self, data: u32, nbits: u32) -> Result<()> {
        self.enable_ir_out(CARRIER_KHZ)?;
        self.mark(SONY_HDR_MARK)?;
        self.space(SONY_HDR_SPACE)?;
        let mut data = data << (32 - nbits);
        for _ in 0..nbits {
            if data & TOPBIT != 0 {
                self.mark(SONY_ONE_MARK)?;
            } else {
                self.mark(SONY_ZERO_MARK)?;
            }
            self.space(SONY_HDR_SPACE)?;
            data <<= 1;
        }
        Ok(())
    }

    /// Replay a raw duration buffer; marks at even indices
    pub fn send_raw(&mut self, durations: &[u32], khz: u32) -> Result<()> {
        self.enable_ir_out(khz)?;
        for (i, &us) in durations.iter().enumerate() {
            if i % 2 == 0 {
                self.mark(us)?;
            } else {
                self.space(us)?;
            }
        }
        self.space(0)
    }

    /// Send an RC5 frame; the first data bit must be a one (start bit)
    pub fn send_rc5(&mut self, data: u32, nbits: u32) -> Result<()> {
        self.enable_ir_out(CARRIER_KHZ)?;
        let mut data = data << (32 - nbits);
        self.mark(RC5_T1)?;
        self.space(RC5_T1)?;
        self.mark(RC5_T1)?;
        for _ in 0..nbits {
            if data & TOPBIT != 0 {
                self.space(RC5_T1)?;
                self.mark(RC5_T1)?;
            } else {
                self.mark(RC5_T1)?;
                self.space(RC5_T1)?;
            }
            data <<= 1;
        }
        self.space(0)
    }

    /// Send an RC6 frame; the caller flips the toggle bit between presses
    pub fn send_rc6(&mut self, data: u32, nbits: u32) -> Result<()> {
        self.enable_ir_out(CARRIER_KHZ)?;
        let mut data = data << (32 - nbits);
        self.mark(RC6_HDR_MARK)?;
        self.space(RC6_HDR_SPACE)?;
        self.mark(RC6_T1)?;
        self.space(RC6_T1)?;
        for i in 0..nbits {
            // Trailer bit is double wide
            let t = if i == 3 { 2 * RC6_T1 } else { RC6_T1 };
            if data & TOPBIT != 0 {
                self.mark(t)?;
                self.space(t)?;
            } else {
                self.space(t)?;
                self.mark(t)?;
            }
            data <<= 1;
        }
        self.space(0)
    }

    /// Send a Panasonic frame: 16 address bits then 32 data bits
    pub fn send_panasonic(&mut self, address: u16, data: u32) -> Result<()> {
        self.enable_ir_out(CARRIER_KHZ)?;
        self.mark(PANASONIC_HDR_MARK)?;
        self.space(PANASONIC_HDR_SPACE)?;
        let mut address = address;
        for _ in 0..16 {
            self.pwm_bit(
                address & 0x8000 != 0,
                PANASONIC_BIT_MARK,
                PANASONIC_ONE_SPACE,
                PANASONIC_ZERO_SPACE,
            )?;
            address <<= 1;
        }
        let mut data = data;
        for _ in 0..32 {
            self.pwm_bit(
                data & TOPBIT != 0,
                PANASONIC_BIT_MARK,
                PANASONIC_ONE_SPACE,
                PANASONIC_ZERO_SPACE,
            )?;
            data <<= 1;
        }
        self.mark(PANASONIC_BIT_MARK)?;
        self.space(0)
    }

    /// Send a JVC frame; repeats omit the header
    pub fn send_jvc(&mut self, data: u32, nbits: u32, repeat: bool) -> Result<()> {
        self.enable_ir_out(CARRIER_KHZ)?;
        if !repeat {
            self.mark(JVC_HDR_MARK)?;
            self.space(JVC_HDR_SPACE)?;
        }
        let mut data = data << (32 - nbits);
        for _ in 0..nbits {
            self.pwm_bit(data & TOPBIT != 0, JVC_BIT_MARK, JVC_ONE_SPACE, JVC_ZERO_SPACE)?;
            data <<= 1;
        }
        self.mark(JVC_BIT_MARK)?;
        self.space(0)
    }

    /// Send a Sharp frame: the value and its toggle-inverted complement,
    /// 46 ms apart, as the receiver chips require
    pub fn send_sharp(&mut self, data: u32, nbits: u32) -> Result<()> {
        let invertdata = data ^ SHARP_TOGGLE_MASK;
        self.enable_ir_out(CARRIER_KHZ)?;
        self.send_sharp_half(data, nbits)?;
        self.timer.delay_ms(46)?;
        self.send_sharp_half(invertdata, nbits)?;
        self.timer.delay_ms(46)
    }

    fn send_sharp_half(&mut self, mut data: u32, nbits: u32) -> Result<()> {
        for _ in 0..nbits {
            self.pwm_bit(data & 0x4000 != 0, SHARP_BIT_MARK, SHARP_ONE_SPACE, SHARP_ZERO_SPACE)?;
            data <<= 1;
        }
        self.mark(SHARP_BIT_MARK)?;
        self.space(SHARP_ZERO_SPACE)
    }

    /// Send a DISH frame on its 56 kHz carrier; repeat 4 times for effect
    pub fn send_dish(&mut self, mut data: u32, nbits: u32) -> Result<()> {
        self.enable_ir_out(56)?;
        self.mark(DISH_HDR_MARK)?;
        self.space(DISH_HDR_SPACE)?;
        for _ in 0..nbits {
            self.pwm_bit(
                data & DISH_TOP_BIT != 0,
                DISH_BIT_MARK,
                DISH_ONE_SPACE,
                DISH_ZERO_SPACE,
            )?;
            data <<= 1;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::sim::{sim_sender, to_durations};

    #[test]
    fn test_nec_timeline() {
        let (mut sender, trace) = sim_sender();
        sender.send_nec(0x0000_00FF, 32).unwrap();

        let durations = to_durations(&trace.borrow());
        // Header, 32 bit pairs, final mark.
        assert_eq!(durations.len(), 2 + 64 + 1);
        assert_eq!(durations[0], NEC_HDR_MARK);
        assert_eq!(durations[1], NEC_HDR_SPACE);
        // First 24 bits are zeros, last 8 are ones.
        assert_eq!(durations[3], NEC_ZERO_SPACE);
        assert_eq!(durations[2 + 24 * 2 + 1], NEC_ONE_SPACE);
        assert_eq!(*durations.last().unwrap(), NEC_BIT_MARK);
    }

    #[test]
    fn test_nec_settles_before_header() {
        let (mut sender, trace) = sim_sender();
        sender.send_nec(0, 32).unwrap();
        // First carrier burst starts after the settle delay.
        assert_eq!(trace.borrow().events[0].0, 2000);
    }

    #[test]
    fn test_bytes_frame_layout() {
        let payload = [0xA5, 0x5A];
        let (mut sender, trace) = sim_sender();
        sender.send_bytes(&payload).unwrap();

        let durations = to_durations(&trace.borrow());
        // Header + (LEN + 2 payload + CRC) * 16 + final mark.
        assert_eq!(durations.len(), 2 + 4 * 16 + 1);

        // LEN byte is 4: 0b0000_0100, so bit 5 is the only one.
        let len_spaces: Vec<u32> = (0..8).map(|b| durations[2 + b * 2 + 1]).collect();
        assert_eq!(len_spaces[5], NEC_ONE_SPACE);
        assert_eq!(len_spaces[0], NEC_ZERO_SPACE);

        // CRC byte is LEN ^ A5 ^ 5A = 4 ^ 0xFF = 0xFB.
        let crc_offset = 2 + 3 * 16;
        let crc_byte = (0..8).fold(0u8, |acc, b| {
            (acc << 1) | (durations[crc_offset + b * 2 + 1] == NEC_ONE_SPACE) as u8
        });
        assert_eq!(crc_byte, 0xFB);
    }

    #[test]
    fn test_bytes_rejects_oversized_payload() {
        let (mut sender, _trace) = sim_sender();
        assert!(sender.send_bytes(&[0u8; TX_BUF_MAX + 1]).is_err());
    }

    #[test]
    fn test_sony_value_in_marks() {
        let (mut sender, trace) = sim_sender();
        sender.send_sony(0b1000_0000_0001, 12).unwrap();

        let durations = to_durations(&trace.borrow());
        // Header pair then 12 mark/space pairs; the trailing space(600) is
        // carrier-off and merges into idle.
        assert_eq!(durations[0], SONY_HDR_MARK);
        assert_eq!(durations[2], SONY_ONE_MARK);
        assert_eq!(durations[4], SONY_ZERO_MARK);
        assert_eq!(durations[2 + 11 * 2], SONY_ONE_MARK);
    }

    #[test]
    fn test_dish_uses_56khz_carrier() {
        let (mut sender, trace) = sim_sender();
        sender.send_dish(0x1234, 16).unwrap();
        assert_eq!(trace.borrow().frequency, 56_000);
    }

    #[test]
    fn test_sharp_sends_inverted_second_burst() {
        let (mut sender, trace) = sim_sender();
        sender.send_sharp(0x0123, 15).unwrap();

        let durations = to_durations(&trace.borrow());
        // 15 bit pairs plus a trailer pair per burst; the trailer space of
        // the first burst merges with the 46ms gap, and the final trailer
        // space trails into idle. 32 + 31 entries.
        assert_eq!(durations.len(), 63);

        // First bit tests 0x4000, clear in 0x0123.
        assert_eq!(durations[1], SHARP_ZERO_SPACE);
        // Fifteenth bit is bit 0 of the value: 1, and 0 once inverted.
        assert_eq!(durations[14 * 2 + 1], SHARP_ONE_SPACE);
        let second = 15 * 2 + 2;
        assert_eq!(durations[second + 14 * 2 + 1], SHARP_ZERO_SPACE);
    }

    #[test]
    fn test_raw_replay() {
        let frame = [4000, 2000, 500, 1000, 500];
        let (mut sender, trace) = sim_sender();
        sender.send_raw(&frame, CARRIER_KHZ).unwrap();
        assert_eq!(to_durations(&trace.borrow()), frame);
    }
}
