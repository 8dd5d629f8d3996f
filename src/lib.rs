#![cfg_attr(not(test), no_std)]

//! irlearn - IR signal capture, decode, and encode engine
//!
//! This library targets learner-style (non-demodulated) IR receivers such as
//! the Vishay TSMP58000: the interrupt handler strips the carrier from the
//! incoming signal by coalescing rapid edge transitions into single mark and
//! space durations. It also works with ordinary demodulated receivers.
//!
//! The receive path is a capture state machine driven from interrupt context,
//! a double-buffered handoff so a new capture can begin while the previous
//! frame is being decoded, and a multi-protocol decoder: NEC and the other
//! classic consumer-IR schemes, plus a custom length-prefixed, CRC-checked
//! BYTES protocol for short binary messages. The transmit path is the
//! matching bit-banging encoder over a PWM carrier.

// Platform abstraction layer (GPIO, PWM, timers)
pub mod platform;

// Core systems (logging)
pub mod core;

// IR engine: capture, decode, encode
pub mod ir;
