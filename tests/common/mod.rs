#![allow(dead_code)]

use std::collections::HashMap;

use rand::RngCore;
use tilemaze::asset::asset_key;
use tilemaze::collision::BoundingBox;
use tilemaze::error::{AssetError, TextureError};
use tilemaze::texture::repository::ImageLoader;
use tilemaze::texture::sheet::{LoadHandle, SheetId, SpriteSheet, Tile};
use tilemaze::texture::surface::Surface;

/// Grid sheet size that slices into 30x33 theme tiles.
pub const GRID_SHEET_SIZE: (u32, u32) = (1104, 1212);
/// Character sheet size that slices into 32x14 tiles.
pub const SPRITES_SHEET_SIZE: (u32, u32) = (1537, 673);

/// Records every draw call instead of putting pixels anywhere.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub draws: Vec<(Tile, BoundingBox)>,
    pub outlines: Vec<BoundingBox>,
    /// Fail every draw after this many have succeeded.
    pub fail_after: Option<usize>,
}

impl Surface for RecordingSurface {
    fn draw(&mut self, tile: &Tile, dest: BoundingBox) -> Result<(), TextureError> {
        if self.fail_after.is_some_and(|limit| self.draws.len() >= limit) {
            return Err(TextureError::RenderFailed("surface lost".to_string()));
        }
        self.draws.push((*tile, dest));
        Ok(())
    }

    fn outline(&mut self, bounds: BoundingBox) -> Result<(), TextureError> {
        self.outlines.push(bounds);
        Ok(())
    }
}

/// Completes loads immediately, using a fixed image size per asset key.
/// Keys without a size fail.
#[derive(Debug, Default)]
pub struct SizedLoader {
    pub sizes: HashMap<String, (u32, u32)>,
    pub requested: Vec<SheetId>,
}

impl SizedLoader {
    pub fn with(mut self, key: &str, size: (u32, u32)) -> Self {
        self.sizes.insert(key.to_string(), size);
        self
    }

    /// Sizes for the two default sheets.
    pub fn arcade() -> Self {
        Self::default().with("grid", GRID_SHEET_SIZE).with("sprites-alpha", SPRITES_SHEET_SIZE)
    }
}

impl ImageLoader for SizedLoader {
    fn load(&mut self, id: SheetId, handle: LoadHandle) {
        self.requested.push(id);
        match self.sizes.get(asset_key(handle.source())) {
            Some(&(width, height)) => handle.finish(width, height),
            None => handle.fail(AssetError::NotFound(handle.source().to_string())),
        }
    }
}

/// Keeps every handle so the test decides when loads complete.
#[derive(Debug, Default)]
pub struct DeferredLoader {
    pub pending: Vec<LoadHandle>,
}

impl ImageLoader for DeferredLoader {
    fn load(&mut self, _id: SheetId, handle: LoadHandle) {
        self.pending.push(handle);
    }
}

pub fn loaded_sheet(id: u16, width: u32, height: u32) -> SpriteSheet {
    let sheet = SpriteSheet::new(SheetId(id), "./img/test.png");
    sheet.handle().finish(width, height);
    sheet
}

/// Character tiles as sliced from a full-size character sheet.
pub fn character_tiles() -> Vec<Tile> {
    loaded_sheet(1, SPRITES_SHEET_SIZE.0, SPRITES_SHEET_SIZE.1).slice_tiles(
        tilemaze::constants::SPRITES_SLICE.origin,
        tilemaze::constants::SPRITES_SLICE.tile_size,
        tilemaze::constants::SPRITES_SLICE.padding,
    )
}

/// Every draw of random bits is zero: random events always fire.
pub struct ZeroRng;

/// Every draw of random bits is all ones: random events never fire.
pub struct MaxRng;

impl RngCore for ZeroRng {
    fn next_u32(&mut self) -> u32 {
        0
    }

    fn next_u64(&mut self) -> u64 {
        0
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        dst.fill(0);
    }
}

impl RngCore for MaxRng {
    fn next_u32(&mut self) -> u32 {
        u32::MAX
    }

    fn next_u64(&mut self) -> u64 {
        u64::MAX
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        dst.fill(u8::MAX);
    }
}
