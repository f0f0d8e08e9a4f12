//! Players, seats and per-player turn state

use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use super::board::Coin;
use crate::consts::{INITIAL_MOVES, PLAYER_COUNT};

/// RGBA color with components in 0..=1
pub type Rgba = [f32; 4];

/// Seat at the table, in turn order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PlayerId {
    Red,
    Green,
    Yellow,
    Blue,
}

impl PlayerId {
    /// All seats in turn order
    pub const ALL: [PlayerId; PLAYER_COUNT] =
        [PlayerId::Red, PlayerId::Green, PlayerId::Yellow, PlayerId::Blue];

    /// Dense index (0..4) used for roster storage
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PlayerId::Red => 0,
            PlayerId::Green => 1,
            PlayerId::Yellow => 2,
            PlayerId::Blue => 3,
        }
    }

    /// Decode a layout mask value (1..=4). Anything else is unowned.
    pub const fn from_mask(value: u8) -> Option<Self> {
        match value {
            1 => Some(PlayerId::Red),
            2 => Some(PlayerId::Green),
            3 => Some(PlayerId::Yellow),
            4 => Some(PlayerId::Blue),
            _ => None,
        }
    }

    /// Color used for coins and HUD accents
    pub const fn display_color(self) -> Rgba {
        match self {
            PlayerId::Red => [0.90, 0.22, 0.21, 1.0],
            PlayerId::Green => [0.26, 0.63, 0.28, 1.0],
            PlayerId::Yellow => [0.98, 0.75, 0.18, 1.0],
            PlayerId::Blue => [0.12, 0.53, 0.90, 1.0],
        }
    }

    /// Color used for the player's zones on the board
    pub const fn board_color(self) -> Rgba {
        match self {
            PlayerId::Red => [0.96, 0.26, 0.21, 1.0],
            PlayerId::Green => [0.30, 0.69, 0.31, 1.0],
            PlayerId::Yellow => [1.0, 0.92, 0.23, 1.0],
            PlayerId::Blue => [0.13, 0.59, 0.95, 1.0],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerId::Red => "Red",
            PlayerId::Green => "Green",
            PlayerId::Yellow => "Yellow",
            PlayerId::Blue => "Blue",
        }
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a player is within their turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlayerState {
    #[default]
    NotStarted,
    /// Dice is tumbling
    Rolling,
    /// Dice has settled, player is choosing
    Thinking,
    Moving,
    Finished,
    Won,
    Lost,
}

/// A seat with its coins and move budget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub state: PlayerState,
    pub coins: Vec<Coin>,
    pub moves_left: u8,
    /// Legal successor states from this snapshot (ordered, no duplicates)
    pub next_possible_states: Vec<PlayerState>,
}

impl Player {
    pub fn new(id: PlayerId, coins: Vec<Coin>) -> Self {
        Self {
            id,
            state: PlayerState::NotStarted,
            coins,
            moves_left: INITIAL_MOVES,
            next_possible_states: vec![PlayerState::Rolling],
        }
    }

    /// Whether `state` is a permitted successor
    pub fn can_enter(&self, state: PlayerState) -> bool {
        self.next_possible_states.contains(&state)
    }
}

/// The four players keyed by seat
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    players: [Player; PLAYER_COUNT],
}

impl Roster {
    /// Build a roster, handing each seat the coins it owns
    pub fn new(coins: &[Coin]) -> Self {
        let players = PlayerId::ALL.map(|id| {
            let owned = coins.iter().filter(|c| c.owner == id).cloned().collect();
            Player::new(id, owned)
        });
        Self { players }
    }

    /// Players in seat order
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }
}

impl Index<PlayerId> for Roster {
    type Output = Player;

    fn index(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }
}

impl IndexMut<PlayerId> for Roster {
    fn index_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_mapping() {
        assert_eq!(PlayerId::from_mask(0), None);
        assert_eq!(PlayerId::from_mask(1), Some(PlayerId::Red));
        assert_eq!(PlayerId::from_mask(2), Some(PlayerId::Green));
        assert_eq!(PlayerId::from_mask(3), Some(PlayerId::Yellow));
        assert_eq!(PlayerId::from_mask(4), Some(PlayerId::Blue));
        assert_eq!(PlayerId::from_mask(5), None);
    }

    #[test]
    fn test_index_matches_seat_order() {
        for (i, id) in PlayerId::ALL.iter().enumerate() {
            assert_eq!(id.index(), i);
        }
    }

    #[test]
    fn test_colors_are_fixed_and_distinct() {
        for a in PlayerId::ALL {
            for b in PlayerId::ALL {
                if a != b {
                    assert_ne!(a.display_color(), b.display_color());
                    assert_ne!(a.board_color(), b.board_color());
                }
            }
        }
    }

    #[test]
    fn test_roster_lookup_is_total() {
        let roster = Roster::new(&[]);
        for id in PlayerId::ALL {
            assert_eq!(roster[id].id, id);
            assert_eq!(roster[id].moves_left, INITIAL_MOVES);
            assert!(roster[id].can_enter(PlayerState::Rolling));
        }
    }
}
