//! Ludo Board - A four-player Ludo game on an interactive canvas
//!
//! Core modules:
//! - `sim`: Board topology, players and the turn state machine
//! - `anim`: Frame-driven animation scheduler (coin slide, dice roll)
//! - `renderer`: Immediate-mode 2D drawing surface and board layout
//! - `game`: Frame driver tying state, animations and rendering together
//! - `settings`: Player-facing configuration

pub mod anim;
pub mod game;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::Game;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Board is a square grid of this many cells per side
    pub const BOARD_SIZE: usize = 15;
    /// Total number of cells on the board
    pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

    /// Number of seats at the table
    pub const PLAYER_COUNT: usize = 4;
    /// Coins owned by each player
    pub const COINS_PER_PLAYER: usize = 4;

    /// Coin slide animation duration (milliseconds)
    pub const COIN_SLIDE_MS: f64 = 500.0;
    /// Dice roll animation duration (milliseconds)
    pub const DICE_ROLL_MS: f64 = 2000.0;

    /// Dice face shown before the first roll
    pub const INITIAL_DICE_VALUE: u8 = 3;
    /// Move budget every player starts with
    pub const INITIAL_MOVES: u8 = 3;
    /// The face that grants an extra action
    pub const BONUS_FACE: u8 = 6;

    /// Default cell edge length in pixels
    pub const CELL_SIZE: f32 = 40.0;
}
