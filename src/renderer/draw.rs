//! Board, coin, dice and path drawing

use glam::Vec2;

use super::layout::BoardLayout;
use super::{Surface, colors};
use crate::anim::CoinSlide;
use crate::sim::board::{Board, CellType, Position};
use crate::sim::player::{PlayerId, Rgba};
use crate::sim::state::GameState;

/// Pip positions on a unit square, per face
const PIPS: [&[(f32, f32)]; 6] = [
    &[(0.5, 0.5)],
    &[(0.25, 0.25), (0.75, 0.75)],
    &[(0.25, 0.25), (0.5, 0.5), (0.75, 0.75)],
    &[(0.25, 0.25), (0.75, 0.25), (0.25, 0.75), (0.75, 0.75)],
    &[(0.25, 0.25), (0.75, 0.25), (0.5, 0.5), (0.25, 0.75), (0.75, 0.75)],
    &[
        (0.25, 0.25),
        (0.75, 0.25),
        (0.25, 0.5),
        (0.75, 0.5),
        (0.25, 0.75),
        (0.75, 0.75),
    ],
];

/// Paint every cell plus the centre finish triangles
pub fn draw_board(surface: &mut dyn Surface, board: &Board, layout: &BoardLayout) {
    surface.clear(colors::BACKGROUND);

    let size = Vec2::splat(layout.cell_size);
    for cell in board.cells() {
        let origin = layout.cell_origin(cell.pos);
        surface.fill_rect(origin, size, cell.color);

        match cell.kind {
            CellType::Wall | CellType::Finish => continue,
            CellType::Start => {
                let ring = cell.owner.map(PlayerId::board_color).unwrap_or(colors::NEST_RING);
                surface.stroke_circle(
                    layout.cell_center(cell.pos),
                    layout.cell_size * 0.4,
                    2.0,
                    ring,
                );
            }
            CellType::Safe if cell.owner.is_none() => {
                surface.stroke_circle(
                    layout.cell_center(cell.pos),
                    layout.cell_size * 0.25,
                    2.0,
                    colors::STAR,
                );
            }
            _ => {}
        }
        surface.stroke_rect(origin, size, 1.0, colors::GRID_LINE);
    }

    draw_finish(surface, layout);
}

/// Four triangles meeting in the centre, each pointing at its owner's lane
fn draw_finish(surface: &mut dyn Surface, layout: &BoardLayout) {
    let top_left = layout.cell_origin(Position::new(6, 6));
    let span = layout.cell_size * 3.0;
    let top_right = top_left + Vec2::new(span, 0.0);
    let bottom_left = top_left + Vec2::new(0.0, span);
    let bottom_right = top_left + Vec2::splat(span);
    let center = top_left + Vec2::splat(span / 2.0);

    let triangles: [(PlayerId, Vec2, Vec2); 4] = [
        (PlayerId::Red, top_left, bottom_left),
        (PlayerId::Green, top_left, top_right),
        (PlayerId::Yellow, top_right, bottom_right),
        (PlayerId::Blue, bottom_left, bottom_right),
    ];
    for (player, a, b) in triangles {
        surface.fill_triangle(a, b, center, player.board_color());
    }
}

/// One coin token
fn draw_coin(surface: &mut dyn Surface, center: Vec2, radius: f32, color: Rgba) {
    surface.fill_circle(center, radius, color);
    surface.stroke_circle(center, radius, 2.0, colors::COIN_OUTLINE);
}

/// Every player's coins at their current cells
pub fn draw_coins(surface: &mut dyn Surface, state: &GameState, layout: &BoardLayout) {
    let radius = layout.cell_size * 0.3;
    for player in state.players.iter() {
        let color = player.id.display_color();
        for coin in &player.coins {
            draw_coin(surface, layout.cell_center(coin.pos), radius, color);
        }
    }
}

/// Dice square with pips, outlined in the current player's color
pub fn draw_dice(
    surface: &mut dyn Surface,
    layout: &BoardLayout,
    face: u8,
    player: PlayerId,
    rolling: bool,
) {
    let (origin, size) = layout.dice_rect();
    surface.fill_rect(origin, size, colors::DICE_FACE);
    surface.stroke_rect(origin, size, if rolling { 2.0 } else { 4.0 }, player.display_color());

    let index = face.clamp(1, 6) as usize - 1;
    let radius = size.x * 0.08;
    for &(x, y) in PIPS[index] {
        surface.fill_circle(origin + Vec2::new(x, y) * size, radius, colors::DICE_PIP);
    }
}

/// Sliding coin at `position`, with an optional guide line beneath it
pub fn draw_slide(
    surface: &mut dyn Surface,
    layout: &BoardLayout,
    slide: &CoinSlide,
    position: Vec2,
    color: Rgba,
    guide: bool,
) {
    if guide {
        surface.line(slide.from, slide.to, 2.0, colors::GUIDE_LINE);
    }
    draw_coin(surface, position, layout.cell_size * 0.3, color);
}
