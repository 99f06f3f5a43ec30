//! This module contains all the constants used in the game.

use std::time::Duration;

use glam::{UVec2, Vec2};

pub const LOOP_TIME: Duration = Duration::from_nanos((1_000_000_000.0 / 60.0) as u64);

/// The size of each maze cell, in pixels.
pub const CELL_SIZE: UVec2 = UVec2::new(32, 32);
/// The size of the reference maze, in cells.
pub const BOARD_CELL_SIZE: UVec2 = UVec2::new(20, 8);
/// The size of the reference maze, in pixels.
pub const BOARD_PIXEL_SIZE: UVec2 = UVec2::new(BOARD_CELL_SIZE.x * CELL_SIZE.x, BOARD_CELL_SIZE.y * CELL_SIZE.y);
/// Where the maze is drawn, in world pixels.
pub const BOARD_ORIGIN: Vec2 = Vec2::ZERO;

/// The scale factor applied to the window.
pub const SCALE: f32 = 1.5;

/// Asset paths of the two sprite sheets the game needs.
pub const GRID_SHEET_PATH: &str = "./assets/img/grid.png";
pub const SPRITES_SHEET_PATH: &str = "./assets/img/sprites-alpha.png";

/// Slicing parameters for a sprite sheet: origin, tile size and padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliceLayout {
    pub origin: UVec2,
    pub tile_size: UVec2,
    pub padding: u32,
}

/// The maze theme sheet.
pub const GRID_SLICE: SliceLayout = SliceLayout {
    origin: UVec2::new(24, 24),
    tile_size: UVec2::new(32, 32),
    padding: 4,
};

/// The character sheet (player, ghosts).
pub const SPRITES_SLICE: SliceLayout = SliceLayout {
    origin: UVec2::new(1, 1),
    tile_size: UVec2::new(47, 47),
    padding: 1,
};

/// Registry keys used by the world.
pub const GRID_KEY: &str = "grid";
pub const PLAYER_KEY: &str = "player";
pub const GHOST_KEY: &str = "redghost";

/// Pixels moved per tick.
pub const PLAYER_SPEED: f32 = 3.0;
pub const GHOST_SPEED: f32 = 3.0;

pub const PLAYER_SPAWN: Vec2 = Vec2::new(50.0, 23.0);
/// The ghost spawns in the lower corridor, clear of any wall.
pub const GHOST_SPAWN: Vec2 = Vec2::new(300.0, 180.0);

/// Each sprite tile is drawn at this size; a character is a 2x2 composite of them.
pub const CHARACTER_TILE_SIZE: Vec2 = Vec2::new(25.0, 25.0);

/// Seconds each animation frame is shown.
pub const FRAME_DURATION: f32 = 0.125;

/// Chance per tick that the ghost picks a new random direction.
pub const GHOST_TURN_CHANCE: f64 = 1.0 / 6.0;

/// Number of frames averaged for the reported frame rate.
pub const FPS_WINDOW: usize = 60;

/// The reference maze, one numeric tile code per cell (see `map::tile::TileCode`).
pub const ARCADE_LAYOUT: [[u8; BOARD_CELL_SIZE.x as usize]; BOARD_CELL_SIZE.y as usize] = [
    [0, 1, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 3, 0],
    [0, 4, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 5, 0],
    [0, 4, 0, 6, 7, 0, 6, 8, 8, 8, 8, 8, 7, 0, 6, 8, 7, 0, 5, 0],
    [0, 4, 0, 10, 9, 0, 10, 0, 0, 0, 0, 0, 9, 0, 10, 0, 9, 0, 5, 0],
    [0, 4, 0, 10, 9, 0, 10, 0, 0, 0, 0, 0, 9, 0, 10, 0, 9, 0, 5, 0],
    [0, 4, 0, 11, 13, 0, 11, 12, 12, 12, 12, 12, 13, 0, 11, 12, 13, 0, 5, 0],
    [0, 4, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 5, 0],
    [0, 14, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 15, 0],
];
