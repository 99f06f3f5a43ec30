//! The game: sprite sheets, the world built from them, input and frame timing.

use rand::RngCore;
use tracing::{debug, info, warn};

use crate::asset::Asset;
use crate::config::Settings;
use crate::constants::{GHOST_KEY, GHOST_SPAWN, GRID_KEY, GRID_SLICE, PLAYER_KEY, PLAYER_SPAWN, SPRITES_SLICE, SliceLayout};
use crate::entity::ghost::Ghost;
use crate::entity::player::Player;
use crate::error::GameResult;
use crate::input::KeyState;
use crate::map::grid::MazeGrid;
use crate::texture::atlas::TileAtlas;
use crate::texture::repository::{ImageLoader, SpriteRepository};
use crate::texture::sheet::{SheetId, Tile};
use crate::texture::surface::Surface;
use crate::timing::FrameStats;
use crate::world::World;

pub struct Game {
    sprites: SpriteRepository,
    grid_sheet: SheetId,
    character_sheet: SheetId,
    world: Option<World>,
    keys: KeyState,
    stats: FrameStats,
    rng: Box<dyn RngCore>,
    debug_collision: bool,
}

impl Game {
    /// A game loading its sheets from the default asset paths.
    pub fn new() -> Self {
        Self::with_paths(Asset::Grid.path(), Asset::SpritesAlpha.path())
    }

    /// A game configured from runtime settings.
    pub fn from_settings(settings: &Settings) -> Self {
        let mut game = Self::with_paths(&settings.grid_path, &settings.sprites_path);
        game.set_debug_collision(settings.debug_collision);
        game
    }

    /// A game using the given maze theme and character sheets.
    pub fn with_paths(grid_path: &str, character_path: &str) -> Self {
        let mut sprites = SpriteRepository::default();
        let grid_sheet = sprites.register(grid_path);
        let character_sheet = sprites.register(character_path);

        Self {
            sprites,
            grid_sheet,
            character_sheet,
            world: None,
            keys: KeyState::empty(),
            stats: FrameStats::new(),
            rng: Box::new(rand::rng()),
            debug_collision: false,
        }
    }

    /// Replaces the random source used by wandering entities.
    pub fn with_rng(mut self, rng: impl RngCore + 'static) -> Self {
        self.rng = Box::new(rng);
        self
    }

    pub fn sprites(&self) -> &SpriteRepository {
        &self.sprites
    }

    /// Starts loading every pending sheet through `loader`.
    pub fn load_sprites(&self, loader: &mut dyn ImageLoader) {
        self.sprites.load_with(loader);
    }

    /// The world, once every sheet has finished loading and it has been built.
    pub fn world(&self) -> Option<&World> {
        self.world.as_ref()
    }

    pub fn keys(&self) -> KeyState {
        self.keys
    }

    pub fn key_down(&mut self, keycode: u32) -> bool {
        self.keys.key_down(keycode)
    }

    pub fn key_up(&mut self, keycode: u32) -> bool {
        self.keys.key_up(keycode)
    }

    pub fn set_debug_collision(&mut self, enabled: bool) {
        self.debug_collision = enabled;
        if let Some(world) = &mut self.world {
            world.set_debug_collision(enabled);
        }
    }

    pub fn stats(&self) -> &FrameStats {
        &self.stats
    }

    pub fn fps(&self) -> u32 {
        self.stats.current_fps()
    }

    /// Advances the game by `dt` seconds.
    ///
    /// Nothing moves until every sheet has finished loading; the world is built
    /// on the first tick after that.
    pub fn tick(&mut self, dt: f32) -> GameResult<()> {
        self.stats.record(dt);
        if self.stats.window_complete() {
            debug!(average_fps = self.stats.average_fps(), frames = self.stats.frames(), "Frame rate");
        }

        if self.world.is_none() {
            if !self.sprites.is_loaded() {
                return Ok(());
            }
            self.world = Some(self.build_world()?);
        }

        if let Some(world) = &mut self.world {
            world.update(self.keys, dt, self.rng.as_mut());
        }
        Ok(())
    }

    /// Draws the world. Draws nothing while any sheet is still loading.
    pub fn draw(&self, surface: &mut dyn Surface) {
        if !self.sprites.is_loaded() {
            return;
        }

        if let Some(world) = &self.world {
            world.render(surface);
        }
    }

    fn slice(&self, id: SheetId, layout: SliceLayout) -> Vec<Tile> {
        match self.sprites.get(id) {
            Some(sheet) => {
                if sheet.failed() {
                    warn!(source = sheet.source(), "Sprite sheet failed to load, its tiles will be missing");
                }
                sheet.slice_tiles(layout.origin, layout.tile_size, layout.padding)
            }
            None => {
                warn!(?id, "Sprite sheet not registered");
                Vec::new()
            }
        }
    }

    fn build_world(&self) -> GameResult<World> {
        let grid_tiles = self.slice(self.grid_sheet, GRID_SLICE);
        let character_tiles = self.slice(self.character_sheet, SPRITES_SLICE);

        let mut world = World::new();
        world.set_debug_collision(self.debug_collision);
        world.register(GRID_KEY, MazeGrid::arcade(TileAtlas::arcade(grid_tiles))?);
        world.register(PLAYER_KEY, Player::new(&character_tiles, PLAYER_SPAWN)?);
        world.register(GHOST_KEY, Ghost::new(&character_tiles, GHOST_SPAWN)?);

        info!(objects = world.len(), "World built");
        Ok(world)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
