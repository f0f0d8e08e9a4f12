//! Coin sliding between two points

use glam::Vec2;

use super::easing::{EasingError, ease_in_out, normalized};
use super::{AnimationRun, Frame};

/// A coin moving in a straight line from `from` to `to`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoinSlide {
    pub from: Vec2,
    pub to: Vec2,
    pub duration_ms: f64,
}

/// Output of one slide tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideFrame {
    pub position: Vec2,
    /// True on the tick that finished the run
    pub complete: bool,
}

impl CoinSlide {
    pub fn new(from: Vec2, to: Vec2, duration_ms: f64) -> Self {
        Self {
            from,
            to,
            duration_ms,
        }
    }

    /// Slide between the first and last point of `path`.
    /// Returns None when there is nothing to animate.
    pub fn from_path(path: &[Vec2], duration_ms: f64) -> Option<Self> {
        match path {
            [from, .., to] => Some(Self::new(*from, *to, duration_ms)),
            _ => None,
        }
    }

    /// Eased position after `elapsed_ms`
    pub fn position_at(&self, elapsed_ms: f64) -> Result<Vec2, EasingError> {
        let eased = ease_in_out(normalized(elapsed_ms, self.duration_ms))?;
        Ok(self.from + (self.to - self.from) * eased)
    }

    /// Advance the slide by one frame.
    ///
    /// Once elapsed time reaches the duration, `run` is cleared, the exact end
    /// point is returned and `on_complete` fires.
    pub fn tick(
        &self,
        run: &mut AnimationRun,
        frame: Frame,
        on_complete: impl FnOnce(),
    ) -> Result<SlideFrame, EasingError> {
        let elapsed = run.elapsed(frame.now_ms);

        if elapsed >= self.duration_ms {
            run.clear();
            log::debug!("Coin slide complete at frame {}", frame.index);
            on_complete();
            return Ok(SlideFrame {
                position: self.to,
                complete: true,
            });
        }

        Ok(SlideFrame {
            position: self.position_at(elapsed)?,
            complete: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::COIN_SLIDE_MS;

    fn slide() -> CoinSlide {
        CoinSlide::new(Vec2::new(10.0, 20.0), Vec2::new(110.0, 220.0), COIN_SLIDE_MS)
    }

    #[test]
    fn test_short_paths_are_noops() {
        assert!(CoinSlide::from_path(&[], COIN_SLIDE_MS).is_none());
        assert!(CoinSlide::from_path(&[Vec2::ONE], COIN_SLIDE_MS).is_none());
    }

    #[test]
    fn test_from_path_uses_endpoints() {
        let path = [Vec2::ZERO, Vec2::new(5.0, 5.0), Vec2::new(9.0, 1.0)];
        let s = CoinSlide::from_path(&path, COIN_SLIDE_MS).unwrap();
        assert_eq!(s.from, Vec2::ZERO);
        assert_eq!(s.to, Vec2::new(9.0, 1.0));
    }

    #[test]
    fn test_first_tick_is_start() {
        let mut run = AnimationRun::new();
        let out = slide().tick(&mut run, Frame::new(0, 5000.0), || {}).unwrap();
        assert_eq!(out.position, slide().from);
        assert!(!out.complete);
        assert!(run.is_armed());
    }

    #[test]
    fn test_midpoint_is_halfway() {
        let s = slide();
        let mid = s.position_at(COIN_SLIDE_MS / 2.0).unwrap();
        assert!((mid - Vec2::new(60.0, 120.0)).length() < 1e-3);
    }

    #[test]
    fn test_complete_at_duration_fires_once() {
        let s = slide();
        let mut run = AnimationRun::new();
        let mut fired = 0;

        s.tick(&mut run, Frame::new(0, 0.0), || fired += 1).unwrap();
        let mid = s.tick(&mut run, Frame::new(1, 250.0), || fired += 1).unwrap();
        assert!(!mid.complete);
        assert_eq!(fired, 0);

        let end = s
            .tick(&mut run, Frame::new(2, COIN_SLIDE_MS), || fired += 1)
            .unwrap();
        assert!(end.complete);
        assert_eq!(end.position, s.to);
        assert_eq!(fired, 1);
        assert!(!run.is_armed());
    }

    #[test]
    fn test_late_frame_snaps_to_end() {
        let s = slide();
        let mut run = AnimationRun::new();
        s.tick(&mut run, Frame::new(0, 100.0), || {}).unwrap();
        let end = s.tick(&mut run, Frame::new(1, 100.0 + 5000.0), || {}).unwrap();
        assert_eq!(end.position, s.to);
        assert!(end.complete);
    }

    #[test]
    fn test_cleared_run_rearms() {
        let s = slide();
        let mut run = AnimationRun::new();
        s.tick(&mut run, Frame::new(0, 0.0), || {}).unwrap();
        s.tick(&mut run, Frame::new(1, 600.0), || {}).unwrap();

        // A new run starts from the beginning at the next timestamp
        let again = s.tick(&mut run, Frame::new(2, 700.0), || {}).unwrap();
        assert_eq!(again.position, s.from);
        assert!(!again.complete);
    }
}
