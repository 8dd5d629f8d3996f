//! Duration tolerance matching
//!
//! Every decoder classifies measured durations against protocol constants
//! through these predicates, never exact equality. Marks tend to read a
//! little long and spaces a little short because of receiver lag, so the
//! mark/space variants bias the expected value by `MARK_EXCESS_US` before
//! building the window.

/// Percent tolerance applied around an expected duration
pub const TOLERANCE_PCT: u32 = 25;

/// Receiver lag correction in microseconds (historically calibrated per part)
pub const MARK_EXCESS_US: u32 = 1;

/// Microseconds per capture tick (durations are captured 1:1)
pub const USEC_PER_TICK: u32 = 1;

/// Acceptable duration bounds around an expected duration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToleranceWindow {
    pub low: u32,
    pub high: u32,
}

impl ToleranceWindow {
    /// Build the window around `expected_us`
    ///
    /// The +1 on the upper bound keeps it inclusive after integer truncation.
    pub fn around(expected_us: u32) -> Self {
        Self {
            low: expected_us * (100 - TOLERANCE_PCT) / 100 / USEC_PER_TICK,
            high: expected_us * (100 + TOLERANCE_PCT) / 100 / USEC_PER_TICK + 1,
        }
    }

    /// Return true if `measured` falls inside the window (bounds inclusive)
    pub fn contains(&self, measured: u32) -> bool {
        measured >= self.low && measured <= self.high
    }
}

/// Return true if `measured` is within tolerance of `expected_us`
pub fn matches(measured: u32, expected_us: u32) -> bool {
    ToleranceWindow::around(expected_us).contains(measured)
}

/// Tolerance match for a mark duration, biased for receiver lag
pub fn match_mark(measured: u32, expected_us: u32) -> bool {
    matches(measured, expected_us + MARK_EXCESS_US)
}

/// Tolerance match for a space duration, biased for receiver lag
pub fn match_space(measured: u32, expected_us: u32) -> bool {
    matches(measured, expected_us.saturating_sub(MARK_EXCESS_US))
}
