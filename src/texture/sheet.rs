use std::sync::Arc;

use glam::UVec2;
use parking_lot::RwLock;
use tracing::{debug, trace, warn};

use crate::error::AssetError;

/// Identifies a sprite sheet. Tiles carry this instead of owning the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct SheetId(pub u16);

/// A rectangular region of a sprite sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Tile {
    pub sheet: SheetId,
    pub pos: UVec2,
    pub size: UVec2,
}

/// Where a sheet is in its one-shot load.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Pending,
    Loaded { size: UVec2 },
    Failed { reason: String },
}

/// Shared completion handle given to whatever loads the image.
///
/// The first completion wins; anything after that is ignored.
#[derive(Debug, Clone)]
pub struct LoadHandle {
    source: Arc<str>,
    state: Arc<RwLock<LoadState>>,
}

impl LoadHandle {
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Marks the image as decoded with the given pixel size.
    pub fn finish(&self, width: u32, height: u32) {
        let mut state = self.state.write();
        if *state != LoadState::Pending {
            debug!(source = %self.source, "Ignoring repeated load completion");
            return;
        }

        debug!(source = %self.source, width, height, "Successfully loaded sprite sheet");
        *state = LoadState::Loaded {
            size: UVec2::new(width, height),
        };
    }

    /// Marks the load as failed. The sheet still reports itself as loaded.
    pub fn fail(&self, error: AssetError) {
        let mut state = self.state.write();
        if *state != LoadState::Pending {
            debug!(source = %self.source, "Ignoring repeated load completion");
            return;
        }

        warn!(source = %self.source, %error, "Failed to load sprite sheet");
        *state = LoadState::Failed {
            reason: error.to_string(),
        };
    }
}

/// One image holding many equally sized tiles.
#[derive(Debug)]
pub struct SpriteSheet {
    id: SheetId,
    handle: LoadHandle,
}

impl SpriteSheet {
    pub fn new(id: SheetId, source: &str) -> Self {
        Self {
            id,
            handle: LoadHandle {
                source: Arc::from(source),
                state: Arc::new(RwLock::new(LoadState::Pending)),
            },
        }
    }

    pub fn id(&self) -> SheetId {
        self.id
    }

    pub fn source(&self) -> &str {
        self.handle.source()
    }

    /// A handle the loading service completes, possibly from another thread.
    pub fn handle(&self) -> LoadHandle {
        self.handle.clone()
    }

    pub fn state(&self) -> LoadState {
        self.handle.state.read().clone()
    }

    /// True once the load attempt is over, whether it worked or not.
    pub fn loaded(&self) -> bool {
        !matches!(*self.handle.state.read(), LoadState::Pending)
    }

    pub fn failed(&self) -> bool {
        matches!(*self.handle.state.read(), LoadState::Failed { .. })
    }

    /// Pixel size of the decoded image; zero until loaded, and after a failure.
    pub fn size(&self) -> UVec2 {
        match *self.handle.state.read() {
            LoadState::Loaded { size } => size,
            _ => UVec2::ZERO,
        }
    }

    /// Cuts the sheet into tiles, row-major from `origin`.
    ///
    /// Each step advances by the tile size plus `padding`. Only tiles lying
    /// entirely inside the image are produced, so a sheet that has not loaded
    /// yet (or failed to) yields nothing. Slice again once it has loaded.
    pub fn slice_tiles(&self, origin: UVec2, tile_size: UVec2, padding: u32) -> Vec<Tile> {
        let size = self.size();
        let stride = tile_size + UVec2::splat(padding);

        if tile_size.x == 0 || tile_size.y == 0 {
            warn!(source = self.source(), ?tile_size, "Refusing to slice zero-sized tiles");
            return Vec::new();
        }

        let mut tiles = Vec::new();
        let mut y = origin.y;
        while y + tile_size.y <= size.y {
            let mut x = origin.x;
            while x + tile_size.x <= size.x {
                tiles.push(Tile {
                    sheet: self.id,
                    pos: UVec2::new(x, y),
                    size: tile_size,
                });
                x += stride.x;
            }
            y += stride.y;
        }

        trace!(source = self.source(), count = tiles.len(), "Sliced sprite sheet");
        tiles
    }
}
