//! Mapping between board cells and pixels

use glam::Vec2;

use crate::consts::{BOARD_SIZE, CELL_SIZE};
use crate::sim::board::Position;

/// Where the board sits on the surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardLayout {
    /// Top-left corner of cell (0, 0)
    pub origin: Vec2,
    /// Cell edge length in pixels
    pub cell_size: f32,
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self::new(Vec2::ZERO, CELL_SIZE)
    }
}

impl BoardLayout {
    pub fn new(origin: Vec2, cell_size: f32) -> Self {
        Self { origin, cell_size }
    }

    /// Largest layout fitting `width` x `height`, leaving a dice column
    /// three cells wide to the right of the board
    pub fn fit(width: f32, height: f32) -> Self {
        let columns = (BOARD_SIZE + 3) as f32;
        let cell_size = (width / columns).min(height / BOARD_SIZE as f32).max(1.0).floor();
        Self::new(Vec2::ZERO, cell_size)
    }

    /// Board edge length in pixels
    pub fn extent(&self) -> f32 {
        self.cell_size * BOARD_SIZE as f32
    }

    /// Top-left pixel of a cell
    pub fn cell_origin(&self, pos: Position) -> Vec2 {
        self.origin + Vec2::new(pos.col as f32, pos.row as f32) * self.cell_size
    }

    /// Centre pixel of a cell
    pub fn cell_center(&self, pos: Position) -> Vec2 {
        self.cell_origin(pos) + Vec2::splat(self.cell_size / 2.0)
    }

    /// Cell under a pixel, if any
    pub fn cell_at(&self, point: Vec2) -> Option<Position> {
        let local = (point - self.origin) / self.cell_size;
        if local.x < 0.0 || local.y < 0.0 {
            return None;
        }
        let (col, row) = (local.x.floor() as usize, local.y.floor() as usize);
        (row < BOARD_SIZE && col < BOARD_SIZE).then(|| Position::new(row as u8, col as u8))
    }

    /// Dice square: two cells wide, one cell right of the board
    pub fn dice_rect(&self) -> (Vec2, Vec2) {
        let origin = self.origin + Vec2::new(self.extent() + self.cell_size * 0.5, 0.0);
        (origin, Vec2::splat(self.cell_size * 2.0))
    }

    /// Whether a pixel lands on the dice
    pub fn dice_hit(&self, point: Vec2) -> bool {
        let (origin, size) = self.dice_rect();
        let end = origin + size;
        point.x >= origin.x && point.y >= origin.y && point.x < end.x && point.y < end.y
    }
}
