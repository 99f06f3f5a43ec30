use glam::Vec2;
use tracing::{debug, trace};

use crate::collision::{BoundingBox, BoxList, Collidable};
use crate::constants::{ARCADE_LAYOUT, BOARD_ORIGIN, CELL_SIZE};
use crate::error::{MapError, TextureError};
use crate::map::parser::LayoutParser;
use crate::map::tile::TileCode;
use crate::texture::atlas::TileAtlas;
use crate::texture::surface::Surface;
use crate::world::GameObject;

/// A cell of the maze, as visited by [`MazeGrid::cells`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
    pub code: TileCode,
    /// World position of the cell's top-left corner.
    pub origin: Vec2,
}

/// The fixed maze layout, drawn tile by tile and solid where its walls are.
#[derive(Debug, Clone)]
pub struct MazeGrid {
    rows: Vec<Vec<TileCode>>,
    atlas: TileAtlas,
    origin: Vec2,
    cell_size: Vec2,
}

impl MazeGrid {
    /// Creates a grid from already validated rows.
    ///
    /// # Errors
    ///
    /// Returns an error if `rows` is empty or ragged.
    pub fn new(rows: Vec<Vec<TileCode>>, atlas: TileAtlas, origin: Vec2) -> Result<Self, MapError> {
        let expected = rows.first().map(Vec::len).unwrap_or(0);
        if expected == 0 {
            return Err(MapError::Empty);
        }
        if let Some((row, found)) = rows.iter().map(Vec::len).enumerate().find(|&(_, len)| len != expected) {
            return Err(MapError::RaggedRow { row, expected, found });
        }

        debug!(rows = rows.len(), columns = expected, ?origin, "Created maze grid");
        Ok(Self {
            rows,
            atlas,
            origin,
            cell_size: CELL_SIZE.as_vec2(),
        })
    }

    /// Parses a textual layout (see [`LayoutParser`]).
    pub fn parse(text: &str, atlas: TileAtlas, origin: Vec2) -> Result<Self, MapError> {
        Self::new(LayoutParser::parse(text)?, atlas, origin)
    }

    /// The reference maze.
    pub fn arcade(atlas: TileAtlas) -> Result<Self, MapError> {
        Self::new(LayoutParser::from_codes(ARCADE_LAYOUT.as_slice())?, atlas, BOARD_ORIGIN)
    }

    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    pub fn set_origin(&mut self, origin: Vec2) {
        self.origin = origin;
    }

    pub fn cell_size(&self) -> Vec2 {
        self.cell_size
    }

    /// (columns, rows)
    pub fn size_in_cells(&self) -> (usize, usize) {
        (self.rows.first().map(Vec::len).unwrap_or(0), self.rows.len())
    }

    pub fn pixel_size(&self) -> Vec2 {
        let (columns, rows) = self.size_in_cells();
        Vec2::new(columns as f32, rows as f32) * self.cell_size
    }

    pub fn code_at(&self, row: usize, col: usize) -> Option<TileCode> {
        self.rows.get(row).and_then(|cells| cells.get(col)).copied()
    }

    /// Every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.rows.iter().enumerate().flat_map(move |(row, codes)| {
            codes.iter().enumerate().map(move |(col, &code)| Cell {
                row,
                col,
                code,
                origin: self.origin + Vec2::new(col as f32, row as f32) * self.cell_size,
            })
        })
    }

    /// Collision boxes of every wall cell, in row-major order.
    ///
    /// Derived from the layout on every call.
    pub fn bounding_boxes(&self) -> BoxList {
        self.cells()
            .filter_map(|cell| cell.code.bounding_box(cell.origin, self.cell_size))
            .collect()
    }

    pub fn render(&self, surface: &mut dyn Surface) -> Result<(), TextureError> {
        for cell in self.cells() {
            match self.atlas.lookup(cell.code) {
                Some(tile) => surface.draw(&tile, BoundingBox::from_pos_size(cell.origin, self.cell_size))?,
                None => trace!(row = cell.row, col = cell.col, code = cell.code.code(), "No tile for maze cell"),
            }
        }
        Ok(())
    }
}

impl Collidable for MazeGrid {
    fn bounding_boxes(&self) -> BoxList {
        MazeGrid::bounding_boxes(self)
    }
}

impl GameObject for MazeGrid {
    fn render(&self, surface: &mut dyn Surface) -> Result<(), TextureError> {
        MazeGrid::render(self, surface)
    }
}
