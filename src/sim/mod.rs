//! Game simulation module
//!
//! All game rules live here. This module must stay pure:
//! - Board topology is built from compile-time masks
//! - Every transition returns a new snapshot
//! - No rendering, timing or platform dependencies

pub mod board;
pub mod player;
pub mod state;
pub mod turn;

pub use board::{Board, Cell, CellType, Coin, Position, build_board};
pub use player::{Player, PlayerId, PlayerState, Roster};
pub use state::{DiceState, GameState};
pub use turn::{Event, apply, on_dice_roll, on_roll_settled};
