use glam::Vec2;
use strum_macros::AsRefStr;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, AsRefStr)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const DIRECTIONS: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// Unit vector in screen space (y grows downwards).
    pub fn as_vec2(&self) -> Vec2 {
        (*self).into()
    }

    /// Position in [`Direction::DIRECTIONS`].
    pub fn as_usize(&self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Down => 1,
            Direction::Left => 2,
            Direction::Right => 3,
        }
    }
}

impl From<Direction> for Vec2 {
    fn from(dir: Direction) -> Self {
        match dir {
            Direction::Up => -Vec2::Y,
            Direction::Down => Vec2::Y,
            Direction::Left => -Vec2::X,
            Direction::Right => Vec2::X,
        }
    }
}

/// What an entity is currently doing: standing still or heading one way.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum DirectionState {
    #[default]
    Still,
    Up,
    Down,
    Left,
    Right,
}

impl DirectionState {
    pub fn direction(&self) -> Option<Direction> {
        match self {
            DirectionState::Still => None,
            DirectionState::Up => Some(Direction::Up),
            DirectionState::Down => Some(Direction::Down),
            DirectionState::Left => Some(Direction::Left),
            DirectionState::Right => Some(Direction::Right),
        }
    }
}

impl From<Direction> for DirectionState {
    fn from(dir: Direction) -> Self {
        match dir {
            Direction::Up => DirectionState::Up,
            Direction::Down => DirectionState::Down,
            Direction::Left => DirectionState::Left,
            Direction::Right => DirectionState::Right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_as_vec2() {
        assert_eq!(Direction::Up.as_vec2(), Vec2::new(0.0, -1.0));
        assert_eq!(Direction::Down.as_vec2(), Vec2::new(0.0, 1.0));
        assert_eq!(Direction::Left.as_vec2(), Vec2::new(-1.0, 0.0));
        assert_eq!(Direction::Right.as_vec2(), Vec2::new(1.0, 0.0));
    }

    #[test]
    fn test_as_usize_matches_directions() {
        for (index, direction) in Direction::DIRECTIONS.iter().enumerate() {
            assert_eq!(direction.as_usize(), index);
        }
    }

    #[test]
    fn test_state_round_trip() {
        for direction in Direction::DIRECTIONS {
            assert_eq!(DirectionState::from(direction).direction(), Some(direction));
        }
        assert_eq!(DirectionState::Still.direction(), None);
    }
}
