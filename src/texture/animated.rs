use glam::Vec2;
use smallvec::SmallVec;

use crate::collision::BoundingBox;
use crate::entity::direction::Direction;
use crate::error::TextureError;
use crate::texture::sheet::Tile;
use crate::texture::surface::Surface;

/// One animation frame: several sheet tiles laid out in a grid and drawn together.
///
/// A slot may be empty when the sheet did not provide the tile; it is skipped.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    tiles: SmallVec<[Option<Tile>; 4]>,
    columns: usize,
    tile_size: Vec2,
}

impl Frame {
    pub fn new(tiles: impl IntoIterator<Item = Option<Tile>>, columns: usize, tile_size: Vec2) -> Self {
        Self {
            tiles: tiles.into_iter().collect(),
            columns: columns.max(1),
            tile_size,
        }
    }

    /// A 2x2 composite frame, the layout used by every character sprite.
    pub fn quad(tiles: [Option<Tile>; 4], tile_size: Vec2) -> Self {
        Self::new(tiles, 2, tile_size)
    }

    /// Builds a 2x2 frame from indices into a sliced sheet.
    pub fn quad_from(sheet_tiles: &[Tile], indices: [usize; 4], tile_size: Vec2) -> Self {
        Self::quad(indices.map(|index| sheet_tiles.get(index).copied()), tile_size)
    }

    pub fn tiles(&self) -> &[Option<Tile>] {
        &self.tiles
    }

    /// The size the whole frame covers on screen.
    pub fn size(&self) -> Vec2 {
        let rows = self.tiles.len().div_ceil(self.columns);
        let columns = self.columns.min(self.tiles.len());
        Vec2::new(columns as f32 * self.tile_size.x, rows as f32 * self.tile_size.y)
    }

    pub fn render(&self, surface: &mut dyn Surface, position: Vec2) -> Result<(), TextureError> {
        for (index, tile) in self.tiles.iter().enumerate() {
            let Some(tile) = tile else { continue };
            let cell = Vec2::new((index % self.columns) as f32, (index / self.columns) as f32);
            let dest = BoundingBox::from_pos_size(position + cell * self.tile_size, self.tile_size);
            surface.draw(tile, dest)?;
        }
        Ok(())
    }
}

/// A sequence of frames advanced by elapsed time.
///
/// Looping animations wrap around; one-shot animations finish after their last
/// frame and draw nothing from then on. Time only accumulates while playing.
#[derive(Debug, Clone)]
pub struct Animation {
    frames: Vec<Frame>,
    frame_duration: f32,
    looping: bool,
    current_frame: usize,
    time_bank: f32,
    playing: bool,
    finished: bool,
}

impl Animation {
    pub fn new(frames: Vec<Frame>, frame_duration: f32, looping: bool) -> Result<Self, TextureError> {
        if frame_duration <= 0.0 || !frame_duration.is_finite() {
            return Err(TextureError::InvalidFrameDuration(frame_duration));
        }
        if frames.is_empty() {
            return Err(TextureError::EmptyAnimation);
        }

        Ok(Self {
            frames,
            frame_duration,
            looping,
            current_frame: 0,
            time_bank: 0.0,
            playing: false,
            finished: false,
        })
    }

    /// Starts (or resumes) advancing frames.
    pub fn play(&mut self) {
        self.playing = true;
    }

    /// Stops advancing. The current frame stays visible.
    pub fn stop(&mut self) {
        self.playing = false;
        self.time_bank = 0.0;
    }

    /// Rewinds to the first frame.
    pub fn reset(&mut self) {
        self.current_frame = 0;
        self.time_bank = 0.0;
        self.finished = false;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }

    pub fn current_frame_index(&self) -> usize {
        self.current_frame
    }

    pub fn time_bank(&self) -> f32 {
        self.time_bank
    }

    /// The frame to draw, or `None` once a one-shot animation has finished.
    pub fn current_frame(&self) -> Option<&Frame> {
        if self.finished {
            None
        } else {
            self.frames.get(self.current_frame)
        }
    }

    /// Advances by `dt` seconds. Non-finite or non-positive durations are ignored.
    pub fn tick(&mut self, dt: f32) {
        if !self.playing || self.finished || !dt.is_finite() || dt <= 0.0 {
            return;
        }

        self.time_bank += dt;
        while self.time_bank >= self.frame_duration {
            self.time_bank -= self.frame_duration;

            if self.looping {
                self.current_frame = (self.current_frame + 1) % self.frames.len();
            } else if self.current_frame + 1 >= self.frames.len() {
                self.finished = true;
                self.playing = false;
                self.time_bank = 0.0;
                return;
            } else {
                self.current_frame += 1;
            }
        }
    }

    pub fn render(&self, surface: &mut dyn Surface, position: Vec2) -> Result<(), TextureError> {
        match self.current_frame() {
            Some(frame) => frame.render(surface, position),
            None => Ok(()),
        }
    }
}

/// One looping animation per direction, with exactly one active at a time.
#[derive(Debug, Clone)]
pub struct DirectionalAnimation {
    animations: [Animation; 4],
    active: Direction,
}

impl DirectionalAnimation {
    /// `animations` are ordered as [`Direction::DIRECTIONS`]. Nothing plays
    /// until the first [`DirectionalAnimation::switch`].
    pub fn new(animations: [Animation; 4], initial: Direction) -> Self {
        Self {
            animations,
            active: initial,
        }
    }

    pub fn active(&self) -> Direction {
        self.active
    }

    pub fn current(&self) -> &Animation {
        &self.animations[self.active.as_usize()]
    }

    pub fn get(&self, direction: Direction) -> &Animation {
        &self.animations[direction.as_usize()]
    }

    /// Stops the active animation and starts the one for `direction`.
    pub fn switch(&mut self, direction: Direction) {
        self.animations[self.active.as_usize()].stop();
        self.active = direction;

        let next = &mut self.animations[direction.as_usize()];
        next.reset();
        next.play();
    }

    pub fn tick(&mut self, dt: f32) {
        self.animations[self.active.as_usize()].tick(dt);
    }

    pub fn render(&self, surface: &mut dyn Surface, position: Vec2) -> Result<(), TextureError> {
        self.current().render(surface, position)
    }
}
