use glam::Vec2;
use rand::seq::IndexedRandom;
use rand::{Rng, RngCore};
use tracing::trace;

use crate::collision::{BoxList, Collidable};
use crate::constants::{CHARACTER_TILE_SIZE, FRAME_DURATION, GHOST_SPEED, GHOST_TURN_CHANCE, GRID_KEY};
use crate::entity::direction::{Direction, DirectionState};
use crate::entity::motion::Motion;
use crate::error::TextureError;
use crate::texture::animated::{Animation, Frame};
use crate::texture::sheet::Tile;
use crate::texture::surface::Surface;
use crate::world::{GameObject, TickContext};

const GHOST_FRAMES: [[usize; 4]; 2] = [[384, 385, 416, 417], [386, 387, 418, 419]];

/// A wandering enemy: keeps heading one way and now and then picks a new one.
#[derive(Debug, Clone)]
pub struct Ghost {
    motion: Motion,
    animation: Animation,
    size: Vec2,
}

impl Ghost {
    /// Builds the ghost from the sliced character sheet. It starts moving right.
    pub fn new(sheet_tiles: &[Tile], position: Vec2) -> Result<Self, TextureError> {
        let frames = GHOST_FRAMES
            .iter()
            .map(|&indices| Frame::quad_from(sheet_tiles, indices, CHARACTER_TILE_SIZE))
            .collect();

        let mut animation = Animation::new(frames, FRAME_DURATION, true)?;
        animation.play();

        let mut motion = Motion::new(position, GHOST_SPEED);
        motion.set_direction(Direction::Right);

        Ok(Self {
            motion,
            animation,
            size: CHARACTER_TILE_SIZE * 2.0,
        })
    }

    pub fn position(&self) -> Vec2 {
        self.motion.position
    }

    pub fn velocity(&self) -> Vec2 {
        self.motion.velocity
    }

    pub fn state(&self) -> DirectionState {
        self.motion.state
    }

    pub fn animation(&self) -> &Animation {
        &self.animation
    }

    pub fn steer(&mut self, direction: Direction) {
        if self.motion.set_direction(direction) {
            trace!(?direction, "Ghost turned");
        }
    }

    /// Occasionally turns towards a uniformly random direction.
    pub fn wander(&mut self, rng: &mut dyn RngCore) {
        if !rng.random_bool(GHOST_TURN_CHANCE) {
            return;
        }

        if let Some(&direction) = Direction::DIRECTIONS.choose(rng) {
            self.steer(direction);
        }
    }
}

impl Collidable for Ghost {
    fn bounding_boxes(&self) -> BoxList {
        BoxList::from_elem(self.motion.bounds(self.size), 1)
    }
}

impl GameObject for Ghost {
    fn update(&mut self, ctx: &mut TickContext<'_>) {
        let blocked = ctx.collisions.check(ctx.key, GRID_KEY, self.motion.velocity);
        self.motion.advance(blocked);

        self.wander(&mut *ctx.rng);
        self.animation.tick(ctx.dt);
    }

    fn render(&self, surface: &mut dyn Surface) -> Result<(), TextureError> {
        self.animation.render(surface, self.motion.position)
    }
}
