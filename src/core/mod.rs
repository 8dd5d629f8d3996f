//! Core systems
//!
//! Cross-cutting support used by the rest of the crate.

pub mod logging;
