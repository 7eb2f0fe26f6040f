// Shared level builders and input helpers for world integration tests.
#![allow(dead_code)]

use side_scroller::World;
use side_scroller::domain::{EnemySpawn, LevelLayout, PlayerInput, Vec2};

// One frame at 60 Hz.
pub const DT: f32 = 1.0 / 60.0;

// Default level with the platforms and enemies removed.
pub fn empty_level() -> LevelLayout {
    LevelLayout {
        platforms: Vec::new(),
        enemies: Vec::new(),
        ..LevelLayout::default()
    }
}

// Empty level with a single ground enemy patrolling around `x`.
pub fn level_with_enemy(x: f32, patrol_distance: f32) -> LevelLayout {
    LevelLayout {
        enemies: vec![EnemySpawn::new(x, 384.0, patrol_distance)],
        ..empty_level()
    }
}

pub fn level_with_start(start: Vec2) -> LevelLayout {
    LevelLayout {
        player_start: start,
        ..empty_level()
    }
}

pub fn idle() -> PlayerInput {
    PlayerInput::default()
}

pub fn right() -> PlayerInput {
    PlayerInput {
        right: true,
        ..PlayerInput::default()
    }
}

pub fn left() -> PlayerInput {
    PlayerInput {
        left: true,
        ..PlayerInput::default()
    }
}

pub fn jump() -> PlayerInput {
    PlayerInput {
        jump: true,
        ..PlayerInput::default()
    }
}

// Steps `n` ticks with the same input.
pub fn step_n(world: &mut World, n: usize, input: PlayerInput) {
    for _ in 0..n {
        world.step(DT, input);
    }
}
