// Patrolling enemy: oscillates between two X limits and classifies contact with the player.

use super::body::KinematicBody;
use super::geometry::{Rect, Vec2};
use super::player::Player;
use super::tuning::EnemyTuning;

/// Result of testing an enemy against the player for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    None,
    Stomped,
    HurtPlayer,
}

#[derive(Debug, Clone)]
pub struct Enemy {
    body: KinematicBody,
    alive: bool,
    left_bound: f32,
    right_bound: f32,
    tuning: EnemyTuning,
}

impl Enemy {
    /// Spawns an enemy walking left, patrolling `patrol_distance` either side of `spawn.x`.
    pub fn new(spawn: Vec2, patrol_distance: f32, tuning: EnemyTuning) -> Self {
        Self {
            body: KinematicBody::new(
                spawn,
                Vec2::new(-tuning.move_speed, 0.0),
                tuning.width,
                tuning.height,
            ),
            alive: true,
            left_bound: spawn.x - patrol_distance,
            right_bound: spawn.x + patrol_distance,
            tuning,
        }
    }

    pub fn body(&self) -> &KinematicBody {
        &self.body
    }

    pub fn position(&self) -> Vec2 {
        self.body.position()
    }

    pub fn velocity(&self) -> Vec2 {
        self.body.velocity()
    }

    pub fn bounds(&self) -> Rect {
        self.body.bounds()
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Left and right X limits of the patrol.
    pub fn patrol_bounds(&self) -> (f32, f32) {
        (self.left_bound, self.right_bound)
    }

    /// Integrates, clamps to the ground line and turns around at patrol limits.
    /// Dead enemies are frozen.
    pub fn update(&mut self, ground_y: Option<f32>, dt: f32) {
        if !self.alive {
            return;
        }

        self.body.apply_gravity(self.tuning.gravity, dt);
        self.body.advance(dt);

        if let Some(ground_y) = ground_y.filter(|&g| self.body.bottom() >= g) {
            self.body.set_bottom(ground_y);
            self.body.set_velocity_y(0.0);
        }

        // Clamp onto the limit when turning so overshoot never accumulates.
        let x = self.body.position().x;
        if x <= self.left_bound {
            self.body.set_x(self.left_bound);
            self.body.set_velocity_x(self.tuning.move_speed);
        } else if x + self.body.width() >= self.right_bound {
            self.body.set_x(self.right_bound - self.body.width());
            self.body.set_velocity_x(-self.tuning.move_speed);
        }
    }

    /// Classifies overlap with the player.
    ///
    /// A stomp needs the player to be falling and their feet, pushed back by one fixed
    /// time slice, to be no lower than the enemy's top plus the tolerance. This
    /// approximates "was above last frame" without tracking the real previous position.
    pub fn check_player_collision(&self, player: &Player) -> CollisionType {
        if !self.alive {
            return CollisionType::None;
        }
        if !self.bounds().intersects(&player.bounds()) {
            return CollisionType::None;
        }

        let velocity_y = player.velocity().y;
        let player_bottom = player.body().bottom();
        let enemy_top = self.body.position().y;
        let previous_bottom = player_bottom - velocity_y * self.tuning.stomp_time_slice;

        if velocity_y > 0.0 && previous_bottom <= enemy_top + self.tuning.stomp_tolerance {
            CollisionType::Stomped
        } else {
            CollisionType::HurtPlayer
        }
    }

    pub fn stomp(&mut self) {
        self.alive = false;
    }
}
