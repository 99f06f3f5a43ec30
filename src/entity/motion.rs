use glam::Vec2;
use tracing::trace;

use crate::collision::BoundingBox;
use crate::entity::direction::{Direction, DirectionState};

/// Position, velocity and heading shared by every moving entity.
///
/// Velocity is in pixels per tick and only changes on a direction command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub position: Vec2,
    pub velocity: Vec2,
    pub speed: f32,
    pub state: DirectionState,
}

impl Motion {
    pub fn new(position: Vec2, speed: f32) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            speed,
            state: DirectionState::Still,
        }
    }

    /// Heads in `direction` at full speed along its axis.
    ///
    /// Returns `false` without touching anything if already heading that way.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        let state = DirectionState::from(direction);
        if self.state == state {
            return false;
        }

        self.state = state;
        self.velocity = direction.as_vec2() * self.speed;
        true
    }

    /// Applies one tick of velocity unless the move was found to collide.
    ///
    /// A blocked entity keeps both position and velocity, so it resumes as soon
    /// as the way is clear or its direction changes.
    pub fn advance(&mut self, blocked: bool) -> bool {
        if blocked {
            trace!(position = ?self.position, velocity = ?self.velocity, "Move blocked");
            return false;
        }

        self.position += self.velocity;
        true
    }

    /// A box of `size` at the current position.
    pub fn bounds(&self, size: Vec2) -> BoundingBox {
        BoundingBox::from_pos_size(self.position, size)
    }
}
