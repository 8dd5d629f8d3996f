#![cfg(feature = "mock")] // Host-side scenarios over the mock platform

use irlearn::ir::consts::{
    NEC_BIT_MARK, NEC_HDR_MARK, NEC_HDR_SPACE, NEC_ONE_SPACE, NEC_ZERO_SPACE,
};
use irlearn::ir::{ALL_DECODERS, CaptureState, IrConfig, IrReceiver, Scheme};
use irlearn::platform::mock::{MockGpio, MockIdleTimer};

type MockReceiver = IrReceiver<MockGpio, MockIdleTimer>;

fn receiver() -> MockReceiver {
    let mut rx = IrReceiver::new(MockGpio::new_input(), MockIdleTimer::new(), IrConfig::default());
    rx.enable().unwrap();
    rx
}

/// Replay a duration buffer as pin edges starting at `t0`: marks at even
/// indices drive the pin low, and the idle timeout fires after the final
/// mark.
fn replay(rx: &mut MockReceiver, durations: &[u32], t0: u64) {
    let mut t = t0;
    rx.pin_mut().set_input_state(false);
    rx.on_edge(t);
    for (i, &us) in durations.iter().enumerate() {
        t += us as u64;
        rx.pin_mut().set_input_state(i % 2 == 0);
        rx.on_edge(t);
    }
    rx.on_idle_timeout(t + 300_000);
}

fn push_byte(durations: &mut Vec<u32>, mut byte: u8) {
    for _ in 0..8 {
        durations.push(NEC_BIT_MARK);
        durations.push(if byte & 0x80 != 0 {
            NEC_ONE_SPACE
        } else {
            NEC_ZERO_SPACE
        });
        byte <<= 1;
    }
}

/// Wire frame for `payload`: header, LEN byte, payload, XOR CRC, final mark.
fn bytes_frame(payload: &[u8]) -> Vec<u32> {
    let len_byte = payload.len() as u8 + 2;
    let crc = payload.iter().fold(len_byte, |acc, &b| acc ^ b);

    let mut durations = vec![NEC_HDR_MARK, NEC_HDR_SPACE];
    push_byte(&mut durations, len_byte);
    for &b in payload {
        push_byte(&mut durations, b);
    }
    push_byte(&mut durations, crc);
    durations.push(NEC_BIT_MARK);
    durations
}

#[test]
fn test_bytes_frame_captured_and_decoded() {
    let payload = [0x10, 0x42, 0x07, 0x00, 0xFF, 0x31, 0x55, 0xAA];
    let mut rx = receiver();

    replay(&mut rx, &bytes_frame(&payload), 0);
    assert_eq!(rx.state(), CaptureState::Captured);

    let frame = rx.decode().expect("decode");
    assert_eq!(frame.scheme, Scheme::Bytes);
    assert_eq!(frame.data[0], payload.len() as u8 + 2);
    assert_eq!(&frame.data[1..=payload.len()], &payload);
}

#[test]
fn test_back_to_back_frames_after_resume() {
    let mut rx = receiver();

    replay(&mut rx, &bytes_frame(&[0x01, 0x02, 0x03]), 0);
    let first = rx.decode().expect("decode");
    rx.resume();
    assert_eq!(rx.state(), CaptureState::Idle);

    replay(&mut rx, &bytes_frame(&[0xCA, 0xFE, 0x99]), 2_000_000);
    let second = rx.decode().expect("decode");

    assert_eq!(&first.data[1..4], &[0x01, 0x02, 0x03]);
    assert_eq!(&second.data[1..4], &[0xCA, 0xFE, 0x99]);
}

#[test]
fn test_corrupted_frame_rejected_and_receiver_rearmed() {
    let mut durations = bytes_frame(&[0x11, 0x22, 0x33]);
    // Flip one payload bit: one-space becomes zero-space.
    let flip = 2 + 16 + 3;
    durations[flip] = if durations[flip] == NEC_ONE_SPACE {
        NEC_ZERO_SPACE
    } else {
        NEC_ONE_SPACE
    };

    let mut rx = receiver();
    replay(&mut rx, &durations, 0);
    assert_eq!(rx.state(), CaptureState::Captured);

    // CRC rejects the frame and the failed decode re-arms capture.
    assert!(rx.decode().is_none());
    assert_eq!(rx.state(), CaptureState::Idle);
}

#[test]
fn test_full_chain_decodes_nec_and_hashes_unknown() {
    let mut rx = IrReceiver::with_decoders(
        MockGpio::new_input(),
        MockIdleTimer::new(),
        IrConfig::default(),
        ALL_DECODERS,
    );
    rx.enable().unwrap();

    // NEC frame: header, 32 bits, final mark. Too short for BYTES, so the
    // chain falls through.
    let mut durations = vec![NEC_HDR_MARK, NEC_HDR_SPACE];
    let value: u32 = 0x20DF_10EF;
    for i in (0..32).rev() {
        durations.push(NEC_BIT_MARK);
        durations.push(if value >> i & 1 != 0 {
            NEC_ONE_SPACE
        } else {
            NEC_ZERO_SPACE
        });
    }
    durations.push(NEC_BIT_MARK);

    replay(&mut rx, &durations, 0);
    let frame = rx.decode().expect("decode");
    assert_eq!(frame.scheme, Scheme::Nec);
    assert_eq!(frame.value, value);

    // A capture no scheme recognizes still decodes, as a hash fingerprint.
    rx.resume();
    let noise = [3100, 900, 3100, 900, 650, 420, 30];
    replay(&mut rx, &noise, 5_000_000);
    let frame = rx.decode().expect("decode");
    assert_eq!(frame.scheme, Scheme::Unknown);
    assert_eq!(frame.bits, 32);
}
