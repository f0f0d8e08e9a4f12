//! Frame-driven animation scheduler
//!
//! Every effect follows the same pattern:
//! - The caller owns one `AnimationRun` slot per effect
//! - The first tick arms the slot with the frame timestamp
//! - Later ticks measure elapsed time against a fixed duration
//! - Once elapsed reaches the duration, the slot is cleared and the
//!   completion callback fires exactly once

pub mod coin_slide;
pub mod dice_roll;
pub mod easing;

pub use coin_slide::{CoinSlide, SlideFrame};
pub use dice_roll::{DiceFrame, DiceRoll, FaceSource};
pub use easing::{EasingError, ease_in, ease_in_out, ease_out, normalized};

/// One paint callback from the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// Monotonically increasing frame counter
    pub index: u64,
    /// Monotonic timestamp in milliseconds
    pub now_ms: f64,
}

impl Frame {
    pub fn new(index: u64, now_ms: f64) -> Self {
        Self { index, now_ms }
    }
}

/// Timing slot for the animation currently in flight
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AnimationRun {
    start_ms: Option<f64>,
    /// Last value the effect produced (dice face)
    last_value: Option<u8>,
}

impl AnimationRun {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a run is in progress
    pub fn is_armed(&self) -> bool {
        self.start_ms.is_some()
    }

    /// Elapsed milliseconds, arming the slot on the first call
    pub fn elapsed(&mut self, now_ms: f64) -> f64 {
        let start = *self.start_ms.get_or_insert(now_ms);
        (now_ms - start).max(0.0)
    }

    pub fn last_value(&self) -> Option<u8> {
        self.last_value
    }

    pub fn set_last_value(&mut self, value: u8) {
        self.last_value = Some(value);
    }

    /// Empty the slot so the next tick starts a new run
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
