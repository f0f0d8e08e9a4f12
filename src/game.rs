//! Frame driver
//!
//! Owns the current snapshot plus one animation slot per effect and runs a
//! single frame per host paint callback:
//! 1. Board and coins are drawn from the current snapshot
//! 2. The dice overlay advances and draws
//! 3. The coin slide overlay advances and draws
//!
//! Completions feed back into the turn machine inside the same frame, so the
//! next paint already sees the settled snapshot.

use std::rc::Rc;

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::anim::{AnimationRun, CoinSlide, DiceRoll, FaceSource, Frame};
use crate::renderer::{self, BoardLayout, Surface};
use crate::settings::Settings;
use crate::sim::board::{Board, build_board};
use crate::sim::state::GameState;
use crate::sim::turn::{self, Event};

/// A running game and its animations
pub struct Game<S: FaceSource = Pcg32> {
    state: GameState,
    settings: Settings,
    source: S,
    dice: Option<DiceRoll>,
    dice_run: AnimationRun,
    slide: Option<CoinSlide>,
    slide_run: AnimationRun,
    /// Face shown while the dice tumbles
    shown_face: u8,
    frame_index: u64,
}

impl Game<Pcg32> {
    /// New game with a seeded RNG
    pub fn new(seed: u64, settings: Settings) -> Self {
        log::info!("Game initialized with seed: {}", seed);
        Self::with_source(Pcg32::seed_from_u64(seed), settings)
    }
}

impl<S: FaceSource> Game<S> {
    /// New game drawing dice faces from `source`
    pub fn with_source(source: S, settings: Settings) -> Self {
        let state = GameState::new(Rc::new(build_board()));
        let shown_face = state.dice.value;
        Self {
            state,
            settings,
            source,
            dice: None,
            dice_run: AnimationRun::new(),
            slide: None,
            slide_run: AnimationRun::new(),
            shown_face,
            frame_index: 0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn board(&self) -> &Board {
        &self.state.board
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Dice animation in flight
    pub fn is_rolling(&self) -> bool {
        self.dice.is_some()
    }

    /// Coin animation in flight
    pub fn is_sliding(&self) -> bool {
        self.slide.is_some()
    }

    /// No roll or slide pending or in flight
    pub fn is_idle(&self) -> bool {
        !self.is_rolling() && !self.is_sliding()
    }

    /// Face the dice currently shows
    pub fn shown_face(&self) -> u8 {
        self.shown_face
    }

    pub fn start(&mut self) {
        self.state = self.state.started();
        log::info!("Game started, {} to play", self.state.current_player);
    }

    /// Halt the game and empty both animation slots.
    /// A roll in flight settles on its rolled value.
    pub fn stop(&mut self) {
        if let Some(roll) = self.dice.take() {
            self.state = turn::apply(Event::RollSettled, &self.state);
            self.shown_face = roll.target;
        }
        self.slide = None;
        self.dice_run.clear();
        self.slide_run.clear();
        self.state = self.state.stopped();
        log::info!("Game stopped");
    }

    /// Roll for the current player. Returns the rolled value, or None when the
    /// game is stopped or a roll is still animating.
    pub fn roll_dice(&mut self) -> Option<u8> {
        if !self.state.started {
            log::debug!("Roll ignored: game not started");
            return None;
        }
        if self.dice.is_some() {
            log::debug!("Roll ignored: dice still rolling");
            return None;
        }

        let value = self.source.face();
        self.state = turn::apply(Event::DiceRolled(value), &self.state);
        self.dice = Some(DiceRoll::new(value, self.settings.dice_roll_ms));
        log::info!("{} rolled {}", self.state.current_player, value);
        Some(value)
    }

    /// Start sliding a coin along `path`. Paths with fewer than two points and
    /// requests made while a slide is running are ignored.
    pub fn slide_coin(&mut self, path: &[Vec2]) -> bool {
        if self.slide.is_some() {
            log::warn!("Slide ignored: previous slide still running");
            return false;
        }
        match CoinSlide::from_path(path, self.settings.coin_slide_ms) {
            Some(slide) => {
                self.slide = Some(slide);
                true
            }
            None => false,
        }
    }

    /// Pointer press at `point`
    pub fn click(&mut self, point: Vec2, layout: &BoardLayout) {
        if layout.dice_hit(point) {
            self.roll_dice();
        } else if let Some(pos) = layout.cell_at(point) {
            if let Some(cell) = self.state.board.cell(pos) {
                log::debug!(
                    "Clicked ({}, {}): {:?}, {} coin(s)",
                    pos.row,
                    pos.col,
                    cell.kind,
                    cell.coins.len()
                );
            }
        }
    }

    /// Run one frame. Drawing is skipped when `surface` is None; animations
    /// still advance. Returns whether the host should request another frame.
    pub fn frame(
        &mut self,
        now_ms: f64,
        mut surface: Option<&mut dyn Surface>,
        layout: &BoardLayout,
    ) -> bool {
        if !self.state.started {
            return false;
        }

        let frame = Frame::new(self.frame_index, now_ms);
        self.frame_index += 1;

        if let Some(surface) = surface.as_deref_mut() {
            renderer::draw_board(surface, &self.state.board, layout);
            renderer::draw_coins(surface, &self.state, layout);
        }

        self.advance_dice(frame);
        if let Some(surface) = surface.as_deref_mut() {
            renderer::draw_dice(
                surface,
                layout,
                self.shown_face,
                self.state.current_player,
                self.state.dice.rolling,
            );
        }

        if let Some(slide) = self.slide {
            match slide.tick(&mut self.slide_run, frame, || self.slide = None) {
                Ok(out) => {
                    if let Some(surface) = surface.as_deref_mut() {
                        renderer::draw_slide(
                            surface,
                            layout,
                            &slide,
                            out.position,
                            self.state.current_player.display_color(),
                            self.settings.show_path_guide,
                        );
                    }
                }
                Err(e) => log::error!("Coin slide skipped: {}", e),
            }
        }

        self.state.started
    }

    fn advance_dice(&mut self, frame: Frame) {
        let Some(roll) = self.dice else {
            return;
        };

        let settle = |_: u8| self.state = turn::apply(Event::RollSettled, &self.state);
        match roll.tick(&mut self.dice_run, frame, &mut self.source, settle) {
            Ok(out) => {
                self.shown_face = out.face;
                if out.settled {
                    self.dice = None;
                }
            }
            Err(e) => log::error!("Dice frame skipped: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{CommandRecorder, DrawCommand};
    use crate::sim::player::{PlayerId, PlayerState};
    use crate::sim::state::DiceState;

    /// Rolls a fixed value; tickets always redraw
    struct Loaded(u8);

    impl FaceSource for Loaded {
        fn face(&mut self) -> u8 {
            self.0
        }

        fn ticket(&mut self) -> f32 {
            0.999
        }
    }

    fn game(value: u8) -> Game<Loaded> {
        let mut game = Game::with_source(Loaded(value), Settings::default());
        game.start();
        game
    }

    #[test]
    fn test_scenario_roll_and_settle() {
        let mut game = game(4);
        let layout = BoardLayout::default();

        assert_eq!(game.board().coins().count(), 16);
        assert_eq!(game.state().current_player, PlayerId::Red);
        assert_eq!(
            game.state().dice,
            DiceState {
                value: 3,
                rolling: false,
            }
        );

        assert_eq!(game.roll_dice(), Some(4));
        let red = game.state().current();
        assert_eq!(red.moves_left, 2);
        assert_eq!(red.state, PlayerState::Rolling);
        assert!(game.state().dice.rolling);

        let mut now = 1000.0;
        while game.is_rolling() {
            assert!(game.frame(now, None, &layout));
            now += 16.0;
            assert!(now < 1000.0 + 2100.0, "roll never settled");
        }

        let red = game.state().current();
        assert_eq!(red.state, PlayerState::Thinking);
        assert_eq!(
            game.state().dice,
            DiceState {
                value: 4,
                rolling: false,
            }
        );
        assert_eq!(game.shown_face(), 4);
        assert!(game.is_idle());
    }

    #[test]
    fn test_settles_exactly_at_duration() {
        let mut game = game(2);
        let layout = BoardLayout::default();
        game.roll_dice();

        game.frame(0.0, None, &layout);
        game.frame(1999.0, None, &layout);
        assert!(game.state().dice.rolling);
        game.frame(2000.0, None, &layout);
        assert!(!game.state().dice.rolling);
        assert_eq!(game.state().current().state, PlayerState::Thinking);
    }

    #[test]
    fn test_second_roll_ignored_while_rolling() {
        let mut game = game(5);
        assert_eq!(game.roll_dice(), Some(5));
        assert_eq!(game.roll_dice(), None);
        assert_eq!(game.state().current().moves_left, 2);
    }

    #[test]
    fn test_pending_roll_is_not_idle() {
        let mut game = game(2);
        assert!(game.is_idle());
        game.roll_dice();
        assert!(game.is_rolling());
        assert!(!game.is_idle());
    }

    #[test]
    fn test_pending_slide_is_not_idle() {
        let mut game = game(2);
        assert!(game.slide_coin(&[Vec2::ZERO, Vec2::new(40.0, 0.0)]));
        assert!(!game.is_idle());
    }

    #[test]
    fn test_roll_ignored_before_start() {
        let mut game = Game::with_source(Loaded(3), Settings::default());
        assert_eq!(game.roll_dice(), None);
        assert!(!game.frame(0.0, None, &BoardLayout::default()));
    }

    #[test]
    fn test_six_grants_extra_action() {
        let mut game = game(6);
        let layout = BoardLayout::default();
        game.roll_dice();
        assert_eq!(
            game.state().current().next_possible_states,
            vec![PlayerState::Thinking]
        );

        game.frame(0.0, None, &layout);
        game.frame(2500.0, None, &layout);
        let red = game.state().current();
        assert_eq!(red.moves_left, 1);
        assert_eq!(red.next_possible_states, vec![PlayerState::Moving]);
    }

    #[test]
    fn test_slide_completes_once() {
        let mut game = game(1);
        let layout = BoardLayout::default();
        let from = Vec2::new(60.0, 60.0);
        let to = Vec2::new(60.0, 260.0);

        assert!(!game.slide_coin(&[from]));
        assert!(game.slide_coin(&[from, to]));
        assert!(!game.slide_coin(&[from, to]));

        game.frame(0.0, None, &layout);
        assert!(game.is_sliding());
        game.frame(500.0, None, &layout);
        assert!(!game.is_sliding());
        assert!(game.is_idle());

        // Later frames do not restart the finished slide
        game.frame(600.0, None, &layout);
        assert!(game.is_idle());
    }

    #[test]
    fn test_frame_draw_order() {
        let mut game = game(4);
        let layout = BoardLayout::default();
        let mut recorder = CommandRecorder::new();
        game.slide_coin(&[Vec2::ZERO, Vec2::new(100.0, 0.0)]);

        game.frame(0.0, Some(&mut recorder), &layout);
        let commands = recorder.take();

        assert!(matches!(commands[0], DrawCommand::Clear(_)));
        let triangle = commands
            .iter()
            .position(|c| matches!(c, DrawCommand::FillTriangle { .. }))
            .unwrap();
        let guide = commands
            .iter()
            .position(|c| matches!(c, DrawCommand::Line { .. }))
            .unwrap();
        assert!(triangle < guide);
        assert!(matches!(
            commands.last(),
            Some(DrawCommand::StrokeCircle { .. })
        ));
    }

    #[test]
    fn test_stop_clears_slots() {
        let mut game = game(3);
        let layout = BoardLayout::default();
        game.roll_dice();
        game.slide_coin(&[Vec2::ZERO, Vec2::ONE]);
        game.frame(0.0, None, &layout);
        assert!(!game.is_idle());

        game.stop();
        assert!(game.is_idle());
        assert!(!game.is_rolling());
        assert!(!game.is_sliding());
        assert!(!game.state().started);
        assert!(!game.state().dice.rolling);
        assert_eq!(game.state().current().state, PlayerState::Thinking);

        // Restarting begins fresh runs
        game.start();
        assert_eq!(game.roll_dice(), Some(3));
        game.frame(10_000.0, None, &layout);
        assert!(game.state().dice.rolling);
    }

    #[test]
    fn test_click_on_dice_rolls() {
        let mut game = game(2);
        let layout = BoardLayout::default();
        let (origin, size) = layout.dice_rect();

        game.click(layout.cell_center(crate::sim::Position::new(7, 7)), &layout);
        assert!(!game.is_rolling());

        game.click(origin + size / 2.0, &layout);
        assert!(game.is_rolling());
        assert_eq!(game.state().dice.value, 2);
    }

    #[test]
    fn test_seeded_games_agree() {
        let mut a = Game::new(99, Settings::default());
        let mut b = Game::new(99, Settings::default());
        a.start();
        b.start();
        assert_eq!(a.roll_dice(), b.roll_dice());
    }
}
