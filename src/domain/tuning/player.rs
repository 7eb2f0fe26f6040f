use serde::Deserialize;

/// Gameplay tuning for the player character.
///
/// Velocities are in pixels per second, accelerations in pixels per second squared.
/// Negative Y points up.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlayerTuning {
    pub width: f32,
    pub height: f32,

    /// Horizontal speed while a direction is held.
    pub move_speed: f32,

    pub gravity: f32,

    /// Launch velocity of a jump (negative = upward).
    pub jump_force: f32,

    /// Terminal downward velocity.
    pub max_fall_speed: f32,

    /// Applied to upward velocity when jump is released early.
    pub jump_cut_multiplier: f32,

    /// Gravity scale while rising with jump held.
    pub hold_jump_gravity_multiplier: f32,

    /// Fraction of `jump_force` used when bouncing off a stomped enemy.
    pub bounce_multiplier: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            width: 32.0,
            height: 48.0,
            move_speed: 200.0,
            gravity: 800.0,
            jump_force: -350.0,
            max_fall_speed: 500.0,
            jump_cut_multiplier: 0.5,
            hold_jump_gravity_multiplier: 0.5,
            bounce_multiplier: 0.7,
        }
    }
}
