// Static level description supplied once at setup: screen size, ground line,
// player start, platforms and enemy spawns.
//
// Any section omitted from a level file falls back to the built-in level.

use super::errors::LevelError;
use super::geometry::Vec2;
use super::tuning::{EnemyTuning, PlayerTuning, WorldTuning};
use serde::Deserialize;
use std::path::Path;

const SCREEN_WIDTH: f32 = 800.0;
const SCREEN_HEIGHT: f32 = 480.0;
const GROUND_THICKNESS: f32 = 64.0;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct PlatformSpec {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct EnemySpawn {
    pub x: f32,
    pub y: f32,
    /// Falls back to `EnemyTuning::default_patrol_distance` when absent.
    #[serde(default)]
    pub patrol_distance: Option<f32>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LevelLayout {
    pub screen_width: f32,
    pub screen_height: f32,

    /// When false there is no ground and actors fall until the fall-off reset.
    pub ground: bool,
    pub ground_y: f32,

    pub player_start: Vec2,

    /// Declaration order is both draw order and platform collision priority.
    pub platforms: Vec<PlatformSpec>,
    pub enemies: Vec<EnemySpawn>,

    pub player: PlayerTuning,
    pub enemy: EnemyTuning,
    pub world: WorldTuning,
}

impl Default for LevelLayout {
    fn default() -> Self {
        let ground_y = SCREEN_HEIGHT - GROUND_THICKNESS;
        let player = PlayerTuning::default();
        let enemy = EnemyTuning::default();

        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            ground: true,
            ground_y,
            player_start: Vec2::new(100.0, ground_y - player.height),
            platforms: vec![
                PlatformSpec::new(200.0, 320.0, 120.0, 20.0),
                PlatformSpec::new(400.0, 250.0, 120.0, 20.0),
                PlatformSpec::new(550.0, 180.0, 120.0, 20.0),
                PlatformSpec::new(150.0, 180.0, 100.0, 20.0),
            ],
            enemies: vec![
                EnemySpawn::new(400.0, ground_y - enemy.height, 80.0),
                // Sits on the middle platform at spawn, but enemies only know the ground.
                EnemySpawn::new(420.0, 250.0 - enemy.height, 50.0),
            ],
            player,
            enemy,
            world: WorldTuning::default(),
        }
    }
}

impl PlatformSpec {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

impl EnemySpawn {
    pub const fn new(x: f32, y: f32, patrol_distance: f32) -> Self {
        Self {
            x,
            y,
            patrol_distance: Some(patrol_distance),
        }
    }

    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

impl LevelLayout {
    /// Y of the ground surface, if the level has one.
    pub fn ground_line(&self) -> Option<f32> {
        self.ground.then_some(self.ground_y)
    }

    pub fn patrol_distance(&self, spawn: &EnemySpawn) -> f32 {
        spawn
            .patrol_distance
            .unwrap_or(self.enemy.default_patrol_distance)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, LevelError> {
        let layout: LevelLayout = toml::from_str(raw)?;
        layout.validate()?;
        Ok(layout)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, LevelError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    pub fn validate(&self) -> Result<(), LevelError> {
        if !is_positive(self.screen_width) || !is_positive(self.screen_height) {
            return Err(LevelError::InvalidScreen);
        }
        if self.ground && !self.ground_y.is_finite() {
            return Err(LevelError::InvalidScreen);
        }
        if !self.player_start.is_finite() {
            return Err(LevelError::InvalidPlayerStart);
        }
        self.validate_tuning()?;

        for (index, p) in self.platforms.iter().enumerate() {
            let finite = p.x.is_finite() && p.y.is_finite();
            if !finite || !is_positive(p.width) || !is_positive(p.height) {
                return Err(LevelError::InvalidPlatform { index });
            }
        }

        for (index, e) in self.enemies.iter().enumerate() {
            if !e.position().is_finite() || !is_positive(self.patrol_distance(e)) {
                return Err(LevelError::InvalidEnemy { index });
            }
        }

        Ok(())
    }

    fn validate_tuning(&self) -> Result<(), LevelError> {
        let p = &self.player;
        if !is_positive(p.width) || !is_positive(p.height) {
            return Err(LevelError::InvalidTuning("player size"));
        }
        if !p.move_speed.is_finite() || !p.gravity.is_finite() || !p.jump_force.is_finite() {
            return Err(LevelError::InvalidTuning("player motion"));
        }
        if !is_positive(p.max_fall_speed) {
            return Err(LevelError::InvalidTuning("player.max_fall_speed"));
        }

        let e = &self.enemy;
        if !is_positive(e.width) || !is_positive(e.height) {
            return Err(LevelError::InvalidTuning("enemy size"));
        }
        if !e.move_speed.is_finite() || e.move_speed < 0.0 || !e.gravity.is_finite() {
            return Err(LevelError::InvalidTuning("enemy motion"));
        }
        if !e.stomp_time_slice.is_finite() || e.stomp_time_slice < 0.0 {
            return Err(LevelError::InvalidTuning("enemy.stomp_time_slice"));
        }

        if !self.world.platform_snap_tolerance.is_finite()
            || self.world.platform_snap_tolerance < 0.0
        {
            return Err(LevelError::InvalidTuning("world.platform_snap_tolerance"));
        }
        Ok(())
    }
}

fn is_positive(v: f32) -> bool {
    v.is_finite() && v > 0.0
}
