use serde::Deserialize;

/// Gameplay tuning for patrolling enemies.

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct EnemyTuning {
    pub width: f32,
    pub height: f32,

    /// Patrol speed in pixels per second.
    pub move_speed: f32,

    pub gravity: f32,

    /// Patrol half-width used when a spawn does not specify one.
    pub default_patrol_distance: f32,

    /// Time slice used to estimate where the player's feet were last frame.
    /// Fixed, independent of the real tick delta.
    pub stomp_time_slice: f32,

    /// How far below the enemy's top the estimated previous bottom may be and
    /// still count as landing on it.
    pub stomp_tolerance: f32,
}

impl Default for EnemyTuning {
    fn default() -> Self {
        Self {
            width: 32.0,
            height: 32.0,
            move_speed: 80.0,
            gravity: 800.0,
            default_patrol_distance: 100.0,
            stomp_time_slice: 0.016,
            stomp_tolerance: 10.0,
        }
    }
}
