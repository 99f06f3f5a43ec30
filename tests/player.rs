use glam::{UVec2, Vec2};
use pretty_assertions::assert_eq;
use speculoos::prelude::*;
use tilemaze::collision::{BoundingBox, Collidable};
use tilemaze::constants::{GRID_KEY, PLAYER_KEY, PLAYER_SPAWN};
use tilemaze::entity::direction::{Direction, DirectionState};
use tilemaze::entity::player::Player;
use tilemaze::input::KeyState;
use tilemaze::map::grid::MazeGrid;
use tilemaze::texture::atlas::TileAtlas;
use tilemaze::world::{GameObject, World};

mod common;

use common::{character_tiles, MaxRng, RecordingSurface};

const DT: f32 = 1.0 / 60.0;

fn spawn() -> Player {
    Player::new(&character_tiles(), PLAYER_SPAWN).unwrap()
}

fn arcade_world() -> World {
    let mut world = World::new();
    world.register(GRID_KEY, MazeGrid::arcade(TileAtlas::default()).unwrap());
    world.register(PLAYER_KEY, spawn());
    world
}

fn player_pos(world: &World) -> Vec2 {
    world.bounding_boxes(PLAYER_KEY).unwrap()[0].pos()
}

#[test]
fn test_spawns_still() {
    let player = spawn();

    assert_eq!(player.state(), DirectionState::Still);
    assert_eq!(player.velocity(), Vec2::ZERO);
    assert_eq!(player.position(), Vec2::new(50.0, 23.0));
    assert_eq!(player.animations().active(), Direction::Right);
    assert!(!player.animations().current().is_playing());
}

#[test]
fn test_single_bounding_box() {
    let player = spawn();
    assert_eq!(player.bounding_boxes().to_vec(), vec![BoundingBox::new(50.0, 23.0, 50.0, 50.0)]);
}

#[test]
fn test_steer_sets_velocity_and_animation() {
    let mut player = spawn();
    player.steer(Direction::Left);

    assert_eq!(player.state(), DirectionState::Left);
    assert_eq!(player.velocity(), Vec2::new(-3.0, 0.0));
    assert_eq!(player.animations().active(), Direction::Left);
    assert!(player.animations().current().is_playing());
    assert!(!player.animations().get(Direction::Right).is_playing());
}

#[test]
fn test_steer_is_idempotent() {
    let mut player = spawn();
    player.steer(Direction::Down);
    let before = player.clone();

    player.steer(Direction::Down);
    assert_eq!(player.motion(), before.motion());
    assert_eq!(
        player.animations().current().current_frame_index(),
        before.animations().current().current_frame_index()
    );
}

#[test]
fn test_handle_input_uses_priority() {
    let mut player = spawn();

    player.handle_input(KeyState::LEFT | KeyState::UP);
    assert_eq!(player.state(), DirectionState::Up);

    player.handle_input(KeyState::empty());
    assert_eq!(player.state(), DirectionState::Up);
}

#[test]
fn test_render_draws_right_facing_quad() {
    let player = spawn();
    let mut surface = RecordingSurface::default();

    player.render(&mut surface).unwrap();

    assert_eq!(surface.draws.len(), 4);
    // Sheet tile 200: row 6, column 8 of a 32-wide sheet.
    assert_eq!(surface.draws[0].0.pos, UVec2::new(1 + 8 * 48, 1 + 6 * 48));
    assert_eq!(surface.draws[0].1, BoundingBox::new(50.0, 23.0, 25.0, 25.0));
    assert_eq!(surface.draws[3].1, BoundingBox::new(75.0, 48.0, 25.0, 25.0));
}

#[test]
fn test_blocked_by_left_wall() {
    let mut world = arcade_world();
    assert!(world.collisions().check(PLAYER_KEY, GRID_KEY, Vec2::new(-3.0, 0.0)));

    world.update(KeyState::LEFT, DT, &mut MaxRng);
    assert_eq!(player_pos(&world), Vec2::new(50.0, 23.0));
}

#[test]
fn test_free_move_adds_velocity() {
    let mut world = arcade_world();
    assert!(!world.collisions().check(PLAYER_KEY, GRID_KEY, Vec2::new(3.0, 0.0)));

    world.update(KeyState::RIGHT, DT, &mut MaxRng);
    assert_eq!(player_pos(&world), Vec2::new(53.0, 23.0));

    // Releasing the key keeps the current heading.
    world.update(KeyState::empty(), DT, &mut MaxRng);
    assert_eq!(player_pos(&world), Vec2::new(56.0, 23.0));
}

#[test]
fn test_upper_left_corner_blocks_going_up() {
    let mut world = arcade_world();
    world.update(KeyState::UP, DT, &mut MaxRng);
    assert_eq!(player_pos(&world), Vec2::new(50.0, 23.0));
}

#[test]
fn test_stops_at_top_wall() {
    let mut world = arcade_world();
    // Clear of the corner piece, which ends at x = 54.
    world.update(KeyState::RIGHT, DT, &mut MaxRng);
    world.update(KeyState::RIGHT, DT, &mut MaxRng);

    let positions: Vec<f32> = (0..4)
        .map(|_| {
            world.update(KeyState::UP, DT, &mut MaxRng);
            player_pos(&world).y
        })
        .collect();

    // The top wall's boxes end at y = 16.
    assert_eq!(positions, vec![20.0, 17.0, 17.0, 17.0]);
    assert_eq!(player_pos(&world).x, 56.0);
}

#[test]
fn test_unblocks_after_turning() {
    let mut world = arcade_world();
    world.update(KeyState::LEFT, DT, &mut MaxRng);
    world.update(KeyState::DOWN, DT, &mut MaxRng);
    assert_that(&player_pos(&world)).is_equal_to(Vec2::new(50.0, 26.0));
}

#[test]
fn test_moves_freely_without_a_grid() {
    let mut world = World::new();
    world.register(PLAYER_KEY, spawn());

    world.update(KeyState::LEFT, DT, &mut MaxRng);
    assert_eq!(player_pos(&world), Vec2::new(47.0, 23.0));
}
