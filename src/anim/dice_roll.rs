//! Dice face tumbling and settling
//!
//! While the roll runs, each frame draws a ticket and compares it with
//! `ease_out(progress)`. Below it, the previous face is kept; otherwise a new
//! random face is drawn. Late in the roll the ticket almost always loses, so
//! the flicker slows down before the face snaps to the rolled value.

use rand::Rng;

use super::easing::{EasingError, ease_out, normalized};
use super::{AnimationRun, Frame};

/// Source of random dice faces and skip tickets
pub trait FaceSource {
    /// Uniform face in 1..=6
    fn face(&mut self) -> u8;
    /// Uniform ticket in [0, 1)
    fn ticket(&mut self) -> f32;
}

impl<R: Rng> FaceSource for R {
    fn face(&mut self) -> u8 {
        self.random_range(1..=6)
    }

    fn ticket(&mut self) -> f32 {
        self.random::<f32>()
    }
}

/// A roll animating toward `target`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiceRoll {
    pub target: u8,
    pub duration_ms: f64,
}

/// Output of one roll tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiceFrame {
    /// Face to show this frame
    pub face: u8,
    /// True on the tick that settled the roll
    pub settled: bool,
}

impl DiceRoll {
    pub fn new(target: u8, duration_ms: f64) -> Self {
        Self {
            target,
            duration_ms,
        }
    }

    /// Advance the roll by one frame.
    ///
    /// Once elapsed time reaches the duration, `run` is cleared, the face snaps
    /// to `target` and `on_settled` fires with it.
    pub fn tick<S: FaceSource + ?Sized>(
        &self,
        run: &mut AnimationRun,
        frame: Frame,
        source: &mut S,
        on_settled: impl FnOnce(u8),
    ) -> Result<DiceFrame, EasingError> {
        let elapsed = run.elapsed(frame.now_ms);

        if elapsed >= self.duration_ms {
            run.clear();
            log::debug!("Dice settled on {} at frame {}", self.target, frame.index);
            on_settled(self.target);
            return Ok(DiceFrame {
                face: self.target,
                settled: true,
            });
        }

        let skip = ease_out(normalized(elapsed, self.duration_ms))?;
        let ticket = source.ticket();
        let face = match run.last_value() {
            Some(previous) if ticket < skip => previous,
            _ => source.face(),
        };
        run.set_last_value(face);

        Ok(DiceFrame {
            face,
            settled: false,
        })
    }
}
