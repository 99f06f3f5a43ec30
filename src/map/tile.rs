//! Maze tile codes and the collision geometry each one carries.

use glam::Vec2;
use strum_macros::{AsRefStr, EnumIter};

use crate::collision::BoundingBox;

/// The visual and geometric role of one maze cell.
///
/// Numbered codes 0 through 16 are the wall pieces of the maze theme. Any other
/// code is kept as [`TileCode::Other`] and treated as a solid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum TileCode {
    /// Walkable floor.
    Blank,
    OuterCornerUpperLeft,
    OuterWallTop,
    OuterCornerUpperRight,
    OuterWallLeft,
    OuterWallRight,
    /// Top-left corner of an inner block.
    InnerCornerLowerRight,
    /// Top-right corner of an inner block.
    InnerCornerLowerLeft,
    /// Top edge of an inner block.
    InnerWallMiddle,
    /// Right edge of an inner block.
    InnerWallRight,
    /// Left edge of an inner block.
    InnerWallLeft,
    /// Bottom-left corner of an inner block.
    InnerCornerUpperRight,
    /// Bottom edge of an inner block.
    InnerWallUpper,
    /// Bottom-right corner of an inner block.
    InnerCornerUpperLeft,
    OuterCornerLowerLeft,
    OuterCornerLowerRight,
    OuterWallBottom,
    Other(u8),
}

/// Where a tile's collision box sits inside its cell, as fractions of the cell size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellFraction {
    pub offset: Vec2,
    pub size: Vec2,
}

const fn fraction(ox: f32, oy: f32, w: f32, h: f32) -> Option<CellFraction> {
    Some(CellFraction {
        offset: Vec2::new(ox, oy),
        size: Vec2::new(w, h),
    })
}

/// Corner pieces cover this much of the cell on each axis.
const CORNER: f32 = 0.6875;
/// Offset of a corner piece hugging the far side of the cell.
const CORNER_INSET: f32 = 1.0 - CORNER;
const HALF: f32 = 0.5;

impl TileCode {
    pub fn from_code(code: u8) -> Self {
        match code {
            0 => TileCode::Blank,
            1 => TileCode::OuterCornerUpperLeft,
            2 => TileCode::OuterWallTop,
            3 => TileCode::OuterCornerUpperRight,
            4 => TileCode::OuterWallLeft,
            5 => TileCode::OuterWallRight,
            6 => TileCode::InnerCornerLowerRight,
            7 => TileCode::InnerCornerLowerLeft,
            8 => TileCode::InnerWallMiddle,
            9 => TileCode::InnerWallRight,
            10 => TileCode::InnerWallLeft,
            11 => TileCode::InnerCornerUpperRight,
            12 => TileCode::InnerWallUpper,
            13 => TileCode::InnerCornerUpperLeft,
            14 => TileCode::OuterCornerLowerLeft,
            15 => TileCode::OuterCornerLowerRight,
            16 => TileCode::OuterWallBottom,
            other => TileCode::Other(other),
        }
    }

    pub fn code(&self) -> u8 {
        match self {
            TileCode::Blank => 0,
            TileCode::OuterCornerUpperLeft => 1,
            TileCode::OuterWallTop => 2,
            TileCode::OuterCornerUpperRight => 3,
            TileCode::OuterWallLeft => 4,
            TileCode::OuterWallRight => 5,
            TileCode::InnerCornerLowerRight => 6,
            TileCode::InnerCornerLowerLeft => 7,
            TileCode::InnerWallMiddle => 8,
            TileCode::InnerWallRight => 9,
            TileCode::InnerWallLeft => 10,
            TileCode::InnerCornerUpperRight => 11,
            TileCode::InnerWallUpper => 12,
            TileCode::InnerCornerUpperLeft => 13,
            TileCode::OuterCornerLowerLeft => 14,
            TileCode::OuterCornerLowerRight => 15,
            TileCode::OuterWallBottom => 16,
            TileCode::Other(code) => *code,
        }
    }

    /// The collision footprint of this code, or `None` for walkable floor.
    /// Unknown codes block the whole cell.
    pub fn collision_fraction(&self) -> Option<CellFraction> {
        match self {
            TileCode::Blank => None,
            TileCode::OuterCornerUpperLeft => fraction(0.0, 0.0, CORNER, CORNER),
            TileCode::OuterWallTop => fraction(0.0, 0.0, 1.0, HALF),
            TileCode::OuterCornerUpperRight => fraction(CORNER_INSET, 0.0, CORNER, CORNER),
            TileCode::OuterWallLeft => fraction(0.0, 0.0, HALF, 1.0),
            TileCode::OuterWallRight => fraction(HALF, 0.0, HALF, 1.0),
            TileCode::InnerCornerLowerRight => fraction(HALF, HALF, HALF, HALF),
            TileCode::InnerCornerLowerLeft => fraction(0.0, HALF, HALF, HALF),
            TileCode::InnerWallMiddle => fraction(0.0, HALF, 1.0, HALF),
            TileCode::InnerWallRight => fraction(0.0, 0.0, HALF, 1.0),
            TileCode::InnerWallLeft => fraction(HALF, 0.0, HALF, 1.0),
            TileCode::InnerCornerUpperRight => fraction(HALF, 0.0, HALF, HALF),
            TileCode::InnerWallUpper => fraction(0.0, 0.0, 1.0, HALF),
            TileCode::InnerCornerUpperLeft => fraction(0.0, 0.0, HALF, HALF),
            TileCode::OuterCornerLowerLeft => fraction(0.0, CORNER_INSET, CORNER, CORNER),
            TileCode::OuterCornerLowerRight => fraction(CORNER_INSET, CORNER_INSET, CORNER, CORNER),
            TileCode::OuterWallBottom => fraction(0.0, HALF, 1.0, HALF),
            TileCode::Other(_) => fraction(0.0, 0.0, 1.0, 1.0),
        }
    }

    /// The collision box of this code for a cell at `cell_origin` of `cell_size`.
    pub fn bounding_box(&self, cell_origin: Vec2, cell_size: Vec2) -> Option<BoundingBox> {
        self.collision_fraction()
            .map(|fraction| BoundingBox::from_pos_size(cell_origin + fraction.offset * cell_size, fraction.size * cell_size))
    }
}

impl From<u8> for TileCode {
    fn from(code: u8) -> Self {
        TileCode::from_code(code)
    }
}
