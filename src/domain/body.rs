use super::geometry::{Rect, Vec2};

/// Position, velocity and fixed size shared by every moving actor.
///
/// Bounds are never stored; they are always derived from the current position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KinematicBody {
    position: Vec2,
    velocity: Vec2,
    width: f32,
    height: f32,
}

impl KinematicBody {
    pub fn new(position: Vec2, velocity: Vec2, width: f32, height: f32) -> Self {
        Self {
            position,
            velocity,
            width,
            height,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_position(self.position, self.width, self.height)
    }

    pub fn bottom(&self) -> f32 {
        self.position.y + self.height
    }

    pub(crate) fn set_x(&mut self, x: f32) {
        self.position.x = x;
    }

    pub(crate) fn set_velocity_x(&mut self, vx: f32) {
        self.velocity.x = vx;
    }

    pub(crate) fn set_velocity_y(&mut self, vy: f32) {
        self.velocity.y = vy;
    }

    /// Moves the body so its bottom edge sits at `y`.
    pub(crate) fn set_bottom(&mut self, y: f32) {
        self.position.y = y - self.height;
    }

    /// Teleports to `position` and drops all velocity.
    pub(crate) fn reset_to(&mut self, position: Vec2) {
        self.position = position;
        self.velocity = Vec2::ZERO;
    }

    pub(crate) fn apply_gravity(&mut self, acceleration: f32, dt: f32) {
        self.velocity.y += acceleration * dt;
    }

    pub(crate) fn cap_fall_speed(&mut self, max_fall_speed: f32) {
        if self.velocity.y > max_fall_speed {
            self.velocity.y = max_fall_speed;
        }
    }

    /// Semi-implicit Euler: callers update velocity first, then advance.
    pub(crate) fn advance(&mut self, dt: f32) {
        self.position += self.velocity * dt;
    }
}
