use glam::Vec2;

use crate::collision::{BoxList, Collidable};
use crate::constants::{CHARACTER_TILE_SIZE, FRAME_DURATION, GRID_KEY, PLAYER_SPEED};
use crate::entity::direction::{Direction, DirectionState};
use crate::entity::motion::Motion;
use crate::error::TextureError;
use crate::input::KeyState;
use crate::texture::animated::{Animation, DirectionalAnimation, Frame};
use crate::texture::sheet::Tile;
use crate::texture::surface::Surface;
use crate::world::{GameObject, TickContext};

/// Sheet indices of the two mouth frames per direction, as 2x2 quads.
/// Ordered like [`Direction::DIRECTIONS`].
const PLAYER_FRAMES: [[[usize; 4]; 2]; 4] = [
    [[194, 195, 226, 227], [198, 199, 230, 231]],
    [[202, 203, 234, 235], [206, 207, 238, 239]],
    [[192, 193, 224, 225], [196, 197, 228, 229]],
    [[200, 201, 232, 233], [204, 205, 236, 237]],
];

/// The keyboard-controlled character.
#[derive(Debug, Clone)]
pub struct Player {
    motion: Motion,
    animations: DirectionalAnimation,
    size: Vec2,
}

impl Player {
    /// Builds the player from the sliced character sheet.
    ///
    /// Starts standing still, facing right, with no animation playing.
    pub fn new(sheet_tiles: &[Tile], position: Vec2) -> Result<Self, TextureError> {
        let build = |frames: &[[usize; 4]; 2]| {
            let frames = frames
                .iter()
                .map(|&indices| Frame::quad_from(sheet_tiles, indices, CHARACTER_TILE_SIZE))
                .collect();
            Animation::new(frames, FRAME_DURATION, true)
        };

        let animations = [
            build(&PLAYER_FRAMES[0])?,
            build(&PLAYER_FRAMES[1])?,
            build(&PLAYER_FRAMES[2])?,
            build(&PLAYER_FRAMES[3])?,
        ];

        Ok(Self {
            motion: Motion::new(position, PLAYER_SPEED),
            animations: DirectionalAnimation::new(animations, Direction::Right),
            size: CHARACTER_TILE_SIZE * 2.0,
        })
    }

    pub fn motion(&self) -> &Motion {
        &self.motion
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

    pub fn animations(&self) -> &DirectionalAnimation {
        &self.animations
    }

    /// Turns towards `direction`. Repeating the current direction does nothing.
    pub fn steer(&mut self, direction: Direction) {
        if self.motion.set_direction(direction) {
            self.animations.switch(direction);
        }
    }

    pub fn handle_input(&mut self, keys: KeyState) {
        if let Some(direction) = keys.direction() {
            self.steer(direction);
        }
    }
}

impl Collidable for Player {
    fn bounding_boxes(&self) -> BoxList {
        BoxList::from_elem(self.motion.bounds(self.size), 1)
    }
}

impl GameObject for Player {
    fn update(&mut self, ctx: &mut TickContext<'_>) {
        self.handle_input(ctx.input);

        let blocked = ctx.collisions.check(ctx.key, GRID_KEY, self.motion.velocity);
        self.motion.advance(blocked);

        self.animations.tick(ctx.dt);
    }

    fn render(&self, surface: &mut dyn Surface) -> Result<(), TextureError> {
        self.animations.render(surface, self.motion.position)
    }
}
