//! Game state snapshot
//!
//! A `GameState` is a value: transitions build a new one and leave the old
//! snapshot untouched, so anything still holding it sees a consistent past.

use std::rc::Rc;

use serde::{Deserialize, Serialize};

use super::board::Board;
use super::player::{Player, PlayerId, Roster};
use crate::consts::INITIAL_DICE_VALUE;

/// Dice face and whether it is still tumbling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceState {
    pub value: u8,
    pub rolling: bool,
}

impl Default for DiceState {
    fn default() -> Self {
        Self {
            value: INITIAL_DICE_VALUE,
            rolling: false,
        }
    }
}

/// Complete game snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    /// Seat whose turn it is
    pub current_player: PlayerId,
    pub players: Roster,
    /// Shared, read-only board topology
    pub board: Rc<Board>,
    pub started: bool,
    pub dice: DiceState,
}

impl GameState {
    /// Fresh game on `board`: Red to play, every player holding their coins
    pub fn new(board: Rc<Board>) -> Self {
        let coins: Vec<_> = board.coins().copied().collect();
        Self {
            current_player: PlayerId::Red,
            players: Roster::new(&coins),
            board,
            started: false,
            dice: DiceState::default(),
        }
    }

    /// The player whose turn it is
    pub fn current(&self) -> &Player {
        &self.players[self.current_player]
    }

    /// Snapshot with the game running
    pub fn started(&self) -> Self {
        Self {
            started: true,
            ..self.clone()
        }
    }

    /// Snapshot with the game halted
    pub fn stopped(&self) -> Self {
        Self {
            started: false,
            ..self.clone()
        }
    }
}
