use std::collections::HashMap;

use tracing::debug;

use crate::map::tile::TileCode;
use crate::texture::sheet::Tile;

/// Maps maze tile codes onto tiles sliced from a theme's sprite sheet.
///
/// The indices are tied to the physical layout of one specific sheet. Swapping
/// the image without updating them mis-renders; nothing checks this.
#[derive(Debug, Clone, Default)]
pub struct TileAtlas {
    tiles: Vec<Tile>,
    indices: HashMap<TileCode, usize>,
}

impl TileAtlas {
    pub fn new(tiles: Vec<Tile>, indices: impl IntoIterator<Item = (TileCode, usize)>) -> Self {
        let atlas = Self {
            tiles,
            indices: indices.into_iter().collect(),
        };

        debug!(
            tile_count = atlas.tiles.len(),
            mapped = atlas.mapped_count(),
            codes = atlas.indices.len(),
            "Created tile atlas"
        );
        atlas
    }

    /// The atlas for the reference maze theme (`grid.png`).
    pub fn arcade(tiles: Vec<Tile>) -> Self {
        Self::new(
            tiles,
            [
                (TileCode::Blank, 5),
                (TileCode::OuterCornerUpperLeft, 6),
                (TileCode::OuterWallTop, 7),
                (TileCode::OuterCornerUpperRight, 21),
                (TileCode::OuterWallLeft, 36),
                (TileCode::OuterWallRight, 51),
                (TileCode::InnerCornerLowerRight, 68),
                (TileCode::InnerCornerLowerLeft, 69),
                (TileCode::InnerWallMiddle, 73),
                (TileCode::InnerWallRight, 98),
                (TileCode::InnerWallLeft, 99),
                (TileCode::InnerCornerUpperRight, 101),
                (TileCode::InnerWallUpper, 102),
                (TileCode::InnerCornerUpperLeft, 106),
                (TileCode::OuterCornerLowerLeft, 930),
                (TileCode::OuterCornerLowerRight, 957),
                (TileCode::OuterWallBottom, 931),
            ],
        )
    }

    /// The tile drawn for `code`, if the code is mapped and its index exists.
    pub fn lookup(&self, code: TileCode) -> Option<Tile> {
        self.indices.get(&code).and_then(|&index| self.tiles.get(index)).copied()
    }

    /// How many mapped codes actually resolve to a tile.
    pub fn mapped_count(&self) -> usize {
        self.indices.values().filter(|&&index| index < self.tiles.len()).count()
    }

    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }
}
