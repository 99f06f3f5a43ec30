use glam::UVec2;
use pretty_assertions::assert_eq;
use speculoos::prelude::*;
use strum::IntoEnumIterator;
use tilemaze::constants::GRID_SLICE;
use tilemaze::map::tile::TileCode;
use tilemaze::texture::atlas::TileAtlas;
use tilemaze::texture::sheet::{SheetId, Tile};

mod common;

use common::{loaded_sheet, GRID_SHEET_SIZE};

fn numbered_tiles(count: u32) -> Vec<Tile> {
    (0..count)
        .map(|i| Tile {
            sheet: SheetId(0),
            pos: UVec2::new(i, 0),
            size: UVec2::ONE,
        })
        .collect()
}

#[test]
fn test_arcade_indices() {
    let atlas = TileAtlas::arcade(numbered_tiles(1000));
    let expected = [
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
    ];

    for (code, index) in expected {
        assert_eq!(atlas.lookup(code).map(|tile| tile.pos.x), Some(index), "{}", code.as_ref());
    }
}

#[test]
fn test_every_named_code_is_mapped() {
    let atlas = TileAtlas::arcade(numbered_tiles(1000));
    for code in TileCode::iter().filter(|code| !matches!(code, TileCode::Other(_))) {
        assert!(atlas.lookup(code).is_some(), "{} is unmapped", code.as_ref());
    }
    assert_eq!(atlas.mapped_count(), 17);
}

#[test]
fn test_unknown_code_has_no_tile() {
    let atlas = TileAtlas::arcade(numbered_tiles(1000));
    assert_that(&atlas.lookup(TileCode::Other(17))).is_none();
}

#[test]
fn test_short_sheet_leaves_codes_unmapped() {
    // Only the first 100 tiles exist, so indices 101 and up resolve to nothing.
    let atlas = TileAtlas::arcade(numbered_tiles(100));

    assert_eq!(atlas.tile_count(), 100);
    assert_eq!(atlas.mapped_count(), 11);
    assert!(atlas.lookup(TileCode::InnerWallLeft).is_some());
    assert!(atlas.lookup(TileCode::InnerCornerUpperRight).is_none());
    assert!(atlas.lookup(TileCode::OuterWallBottom).is_none());
}

#[test]
fn test_arcade_atlas_from_sliced_sheet() {
    let sheet = loaded_sheet(0, GRID_SHEET_SIZE.0, GRID_SHEET_SIZE.1);
    let tiles = sheet.slice_tiles(GRID_SLICE.origin, GRID_SLICE.tile_size, GRID_SLICE.padding);
    assert_eq!(tiles.len(), 30 * 33);

    let atlas = TileAtlas::arcade(tiles);
    assert_eq!(atlas.mapped_count(), 17);

    // 30 tiles per row: index 36 is column 6 of the second row.
    let wall = atlas.lookup(TileCode::OuterWallLeft).unwrap();
    assert_eq!(wall.pos, UVec2::new(24 + 6 * 36, 24 + 36));
    assert_eq!(wall.size, UVec2::new(32, 32));
}
