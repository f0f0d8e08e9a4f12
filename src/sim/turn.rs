//! Turn state machine
//!
//! Pure `(Event, &GameState) -> GameState` transitions. Only the rolling half
//! of a turn is modelled; Moving, Finished, Won and Lost are reachable as
//! declared successors but have no transitions of their own yet.

use super::player::PlayerState;
use super::state::{DiceState, GameState};
use crate::consts::BONUS_FACE;

/// Inputs the machine reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Current player clicked the dice and rolled `value` (1..=6)
    DiceRolled(u8),
    /// Dice roll animation finished
    RollSettled,
}

/// Apply `event` to `state`, returning the next snapshot
pub fn apply(event: Event, state: &GameState) -> GameState {
    match event {
        Event::DiceRolled(value) => on_dice_roll(value, state),
        Event::RollSettled => on_roll_settled(state),
    }
}

/// Dice clicked. Callers only raise this for the current player, with a
/// value in 1..=6.
pub fn on_dice_roll(value: u8, state: &GameState) -> GameState {
    debug_assert!((1..=6).contains(&value), "dice value {} out of range", value);
    let mut next = state.clone();
    let player = &mut next.players[next.current_player];

    if value == BONUS_FACE {
        player.moves_left = 1;
        player.next_possible_states = vec![PlayerState::Thinking];
    } else {
        player.moves_left = player.moves_left.saturating_sub(1);
    }
    player.state = PlayerState::Rolling;

    log::debug!(
        "{} rolled {} ({} moves left)",
        player.id,
        value,
        player.moves_left
    );

    next.dice = DiceState {
        value,
        rolling: true,
    };
    next
}

/// Roll animation finished: the current player starts thinking
pub fn on_roll_settled(state: &GameState) -> GameState {
    let mut next = state.clone();
    let value = next.dice.value;
    let player = &mut next.players[next.current_player];

    if value == BONUS_FACE {
        player.moves_left = 1;
        player.next_possible_states = vec![PlayerState::Moving];
    }
    player.state = PlayerState::Thinking;

    log::debug!("{} settled on {}", player.id, value);

    next.dice.rolling = false;
    next
}
