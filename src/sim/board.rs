//! Board topology built from fixed layout masks
//!
//! The board is a 15x15 grid described by three parallel masks:
//! - cell type: 0=Wall, 1=Normal, 2=Safe, 3=Start, 4=Finish, 5=Home
//! - owner: 1..=4 maps to Red, Green, Yellow, Blue (0 = unowned)
//! - color: same mapping, unmapped cells are white
//!
//! Quadrants: Red top-left, Green top-right, Yellow bottom-right, Blue bottom-left.

use serde::{Deserialize, Serialize};

use super::player::{PlayerId, Rgba};
use crate::consts::{BOARD_SIZE, CELL_COUNT};

/// Unowned cell color
pub const WHITE: Rgba = [1.0, 1.0, 1.0, 1.0];

type Mask = [[u8; BOARD_SIZE]; BOARD_SIZE];

#[rustfmt::skip]
const CELL_TYPE_MASK: Mask = [
    [0, 0, 0, 0, 0, 0, 1, 1, 1, 0, 0, 0, 0, 0, 0],
    [0, 3, 3, 0, 0, 0, 1, 5, 2, 0, 3, 3, 0, 0, 0],
    [0, 3, 3, 0, 0, 0, 2, 5, 1, 0, 3, 3, 0, 0, 0],
    [0, 0, 0, 3, 3, 0, 1, 5, 1, 0, 0, 0, 3, 3, 0],
    [0, 0, 0, 3, 3, 0, 1, 5, 1, 0, 0, 0, 3, 3, 0],
    [0, 0, 0, 0, 0, 0, 1, 5, 1, 0, 0, 0, 0, 0, 0],
    [1, 2, 1, 1, 1, 1, 4, 4, 4, 1, 1, 1, 2, 1, 1],
    [1, 5, 5, 5, 5, 5, 4, 4, 4, 5, 5, 5, 5, 5, 1],
    [1, 1, 2, 1, 1, 1, 4, 4, 4, 1, 1, 1, 1, 2, 1],
    [0, 0, 0, 0, 0, 0, 1, 5, 1, 0, 0, 0, 0, 0, 0],
    [0, 3, 3, 0, 0, 0, 1, 5, 1, 0, 3, 3, 0, 0, 0],
    [0, 3, 3, 0, 0, 0, 1, 5, 1, 0, 3, 3, 0, 0, 0],
    [0, 0, 0, 3, 3, 0, 1, 5, 2, 0, 0, 0, 3, 3, 0],
    [0, 0, 0, 3, 3, 0, 2, 5, 1, 0, 0, 0, 3, 3, 0],
    [0, 0, 0, 0, 0, 0, 1, 1, 1, 0, 0, 0, 0, 0, 0],
];

#[rustfmt::skip]
const OWNER_MASK: Mask = [
    [1, 1, 1, 1, 1, 1, 0, 0, 0, 2, 2, 2, 2, 2, 2],
    [1, 1, 1, 1, 1, 1, 0, 2, 2, 2, 2, 2, 2, 2, 2],
    [1, 1, 1, 1, 1, 1, 0, 2, 0, 2, 2, 2, 2, 2, 2],
    [1, 1, 1, 1, 1, 1, 0, 2, 0, 2, 2, 2, 2, 2, 2],
    [1, 1, 1, 1, 1, 1, 0, 2, 0, 2, 2, 2, 2, 2, 2],
    [1, 1, 1, 1, 1, 1, 0, 2, 0, 2, 2, 2, 2, 2, 2],
    [0, 1, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0],
    [0, 1, 1, 1, 1, 1, 1, 0, 3, 3, 3, 3, 3, 3, 0],
    [0, 0, 0, 0, 0, 0, 0, 4, 0, 0, 0, 0, 0, 3, 0],
    [4, 4, 4, 4, 4, 4, 0, 4, 0, 3, 3, 3, 3, 3, 3],
    [4, 4, 4, 4, 4, 4, 0, 4, 0, 3, 3, 3, 3, 3, 3],
    [4, 4, 4, 4, 4, 4, 0, 4, 0, 3, 3, 3, 3, 3, 3],
    [4, 4, 4, 4, 4, 4, 0, 4, 0, 3, 3, 3, 3, 3, 3],
    [4, 4, 4, 4, 4, 4, 4, 4, 0, 3, 3, 3, 3, 3, 3],
    [4, 4, 4, 4, 4, 4, 0, 0, 0, 3, 3, 3, 3, 3, 3],
];

#[rustfmt::skip]
const COLOR_MASK: Mask = [
    [1, 1, 1, 1, 1, 1, 0, 0, 0, 2, 2, 2, 2, 2, 2],
    [1, 0, 0, 0, 0, 1, 0, 2, 2, 2, 0, 0, 0, 0, 2],
    [1, 0, 0, 0, 0, 1, 0, 2, 0, 2, 0, 0, 0, 0, 2],
    [1, 0, 0, 0, 0, 1, 0, 2, 0, 2, 0, 0, 0, 0, 2],
    [1, 0, 0, 0, 0, 1, 0, 2, 0, 2, 0, 0, 0, 0, 2],
    [1, 1, 1, 1, 1, 1, 0, 2, 0, 2, 2, 2, 2, 2, 2],
    [0, 1, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0],
    [0, 1, 1, 1, 1, 1, 1, 0, 3, 3, 3, 3, 3, 3, 0],
    [0, 0, 0, 0, 0, 0, 0, 4, 0, 0, 0, 0, 0, 3, 0],
    [4, 4, 4, 4, 4, 4, 0, 4, 0, 3, 3, 3, 3, 3, 3],
    [4, 0, 0, 0, 0, 4, 0, 4, 0, 3, 0, 0, 0, 0, 3],
    [4, 0, 0, 0, 0, 4, 0, 4, 0, 3, 0, 0, 0, 0, 3],
    [4, 0, 0, 0, 0, 4, 0, 4, 0, 3, 0, 0, 0, 0, 3],
    [4, 0, 0, 0, 0, 4, 4, 4, 0, 3, 0, 0, 0, 0, 3],
    [4, 4, 4, 4, 4, 4, 0, 0, 0, 3, 3, 3, 3, 3, 3],
];

/// Top-left corners of each player's two 2x2 nest blocks
const NEST_BLOCKS: [(PlayerId, [(u8, u8); 2]); 4] = [
    (PlayerId::Red, [(1, 1), (3, 3)]),
    (PlayerId::Green, [(1, 10), (3, 12)]),
    (PlayerId::Yellow, [(10, 10), (12, 12)]),
    (PlayerId::Blue, [(10, 1), (12, 3)]),
];

/// Starting coin spots: two per nest block, on the block diagonal
const COIN_SPOTS: [(PlayerId, [(u8, u8); 4]); 4] = [
    (PlayerId::Red, [(1, 1), (2, 2), (3, 3), (4, 4)]),
    (PlayerId::Green, [(1, 10), (2, 11), (3, 12), (4, 13)]),
    (PlayerId::Yellow, [(10, 10), (11, 11), (12, 12), (13, 13)]),
    (PlayerId::Blue, [(10, 1), (11, 2), (12, 3), (13, 4)]),
];

/// A grid coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Row-major index, or None when off the board
    pub fn index(&self) -> Option<usize> {
        let (row, col) = (self.row as usize, self.col as usize);
        (row < BOARD_SIZE && col < BOARD_SIZE).then_some(row * BOARD_SIZE + col)
    }

    fn from_index(index: usize) -> Self {
        Self::new((index / BOARD_SIZE) as u8, (index % BOARD_SIZE) as u8)
    }
}

/// What a board square is used for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CellType {
    /// Quadrant filler, never walked on
    #[default]
    Wall,
    /// Shared track square
    Normal,
    /// Track square where coins cannot be captured
    Safe,
    /// Nest square a coin begins on
    Start,
    /// Centre triangle zone
    Finish,
    /// Player-owned lane leading to the centre
    Home,
}

impl CellType {
    /// Decode a cell-type mask value. Unknown values become walls.
    pub const fn from_mask(value: u8) -> Self {
        match value {
            1 => CellType::Normal,
            2 => CellType::Safe,
            3 => CellType::Start,
            4 => CellType::Finish,
            5 => CellType::Home,
            _ => CellType::Wall,
        }
    }
}

/// A movable token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coin {
    pub id: u32,
    pub owner: PlayerId,
    pub pos: Position,
}

/// One board square
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    /// Row-major index
    pub id: usize,
    pub pos: Position,
    pub kind: CellType,
    pub owner: Option<PlayerId>,
    pub color: Rgba,
    /// Coins currently on this square
    pub coins: Vec<Coin>,
}

/// The full 15x15 grid (immutable once built)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Vec<Cell>,
}

impl Board {
    /// Cell at `pos`, if on the board
    pub fn cell(&self, pos: Position) -> Option<&Cell> {
        pos.index().map(|i| &self.cells[i])
    }

    /// All cells in row-major order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Every coin on the board, row-major
    pub fn coins(&self) -> impl Iterator<Item = &Coin> {
        self.cells.iter().flat_map(|c| c.coins.iter())
    }

    /// Start cells owned by `player`
    pub fn start_cells(&self, player: PlayerId) -> impl Iterator<Item = &Cell> {
        self.cells
            .iter()
            .filter(move |c| c.kind == CellType::Start && c.owner == Some(player))
    }

    /// The two 2x2 nest blocks of `player`, each as its four positions
    pub fn nest_blocks(player: PlayerId) -> [[Position; 4]; 2] {
        let corners = NEST_BLOCKS[player.index()].1;
        corners.map(|(r, c)| {
            [
                Position::new(r, c),
                Position::new(r, c + 1),
                Position::new(r + 1, c),
                Position::new(r + 1, c + 1),
            ]
        })
    }
}

/// Build the board from the layout masks. Pure and deterministic.
pub fn build_board() -> Board {
    let mut cells: Vec<Cell> = (0..CELL_COUNT)
        .map(|id| {
            let pos = Position::from_index(id);
            let (r, c) = (pos.row as usize, pos.col as usize);
            Cell {
                id,
                pos,
                kind: CellType::from_mask(CELL_TYPE_MASK[r][c]),
                owner: PlayerId::from_mask(OWNER_MASK[r][c]),
                color: PlayerId::from_mask(COLOR_MASK[r][c])
                    .map(PlayerId::board_color)
                    .unwrap_or(WHITE),
                coins: Vec::new(),
            }
        })
        .collect();

    let mut next_id = 0;
    for (owner, spots) in COIN_SPOTS {
        for (row, col) in spots {
            let pos = Position::new(row, col);
            let index = row as usize * BOARD_SIZE + col as usize;
            cells[index].coins.push(Coin {
                id: next_id,
                owner,
                pos,
            });
            next_id += 1;
        }
    }

    log::debug!("Board built: {} cells, {} coins", cells.len(), next_id);
    Board { cells }
}
