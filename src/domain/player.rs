// Player controller: horizontal movement, jump start, jump cut, floaty hold and bounce.

use super::body::KinematicBody;
use super::geometry::{Rect, Vec2};
use super::state::PlayerInput;
use super::tuning::PlayerTuning;

#[derive(Debug, Clone)]
pub struct Player {
    body: KinematicBody,
    on_ground: bool,
    // True from jump start until release or apex.
    is_jumping: bool,
    // Needed for rising-edge jump detection.
    previous_input: PlayerInput,
    tuning: PlayerTuning,
}

impl Player {
    pub fn new(start: Vec2, tuning: PlayerTuning) -> Self {
        Self {
            body: KinematicBody::new(start, Vec2::ZERO, tuning.width, tuning.height),
            on_ground: false,
            is_jumping: false,
            previous_input: PlayerInput::default(),
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

    pub fn is_on_ground(&self) -> bool {
        self.on_ground
    }

    pub fn is_jumping(&self) -> bool {
        self.is_jumping
    }

    pub fn tuning(&self) -> &PlayerTuning {
        &self.tuning
    }

    /// Advances the player by one tick from the current input snapshot.
    ///
    /// The snapshot is remembered so the next call can detect a fresh jump press.
    pub fn update(&mut self, input: PlayerInput, dt: f32) {
        let t = self.tuning;
        let jump_held = input.jump;
        let jump_was_held = self.previous_input.jump;

        // Recomputed every tick; right wins when both are held.
        let mut vx = 0.0;
        if input.left {
            vx = -t.move_speed;
        }
        if input.right {
            vx = t.move_speed;
        }
        self.body.set_velocity_x(vx);

        if jump_held && !jump_was_held && self.on_ground {
            self.body.set_velocity_y(t.jump_force);
            self.on_ground = false;
            self.is_jumping = true;
        }

        let vy = self.body.velocity().y;
        if !jump_held && self.is_jumping && vy < 0.0 {
            self.body.set_velocity_y(vy * t.jump_cut_multiplier);
            self.is_jumping = false;
        }

        if self.body.velocity().y >= 0.0 {
            self.is_jumping = false;
        }

        if !self.on_ground {
            let rising = self.body.velocity().y < 0.0;
            let multiplier = if self.is_jumping && jump_held && rising {
                t.hold_jump_gravity_multiplier
            } else {
                1.0
            };
            self.body.apply_gravity(t.gravity * multiplier, dt);
            self.body.cap_fall_speed(t.max_fall_speed);
        }

        self.body.advance(dt);
        self.previous_input = input;
    }

    /// Launches the player upward after a stomp, regardless of ground state.
    pub fn bounce(&mut self) {
        self.body
            .set_velocity_y(self.tuning.jump_force * self.tuning.bounce_multiplier);
        self.is_jumping = false;
    }

    pub(crate) fn body_mut(&mut self) -> &mut KinematicBody {
        &mut self.body
    }

    pub(crate) fn clear_ground(&mut self) {
        self.on_ground = false;
    }

    /// Snaps the player's feet to `surface_y` and stops vertical motion.
    pub(crate) fn land_on(&mut self, surface_y: f32) {
        self.body.set_bottom(surface_y);
        self.body.set_velocity_y(0.0);
        self.on_ground = true;
    }

    pub(crate) fn respawn(&mut self, spawn: Vec2) {
        self.body.reset_to(spawn);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn grounded_player() -> Player {
        let mut player = Player::new(Vec2::new(100.0, 368.0), PlayerTuning::default());
        player.land_on(416.0);
        player
    }

    fn held(jump: bool) -> PlayerInput {
        PlayerInput {
            jump,
            ..PlayerInput::default()
        }
    }

    #[test]
    fn when_both_directions_are_held_then_right_wins() {
        let mut player = grounded_player();
        player.update(
            PlayerInput {
                left: true,
                right: true,
                ..PlayerInput::default()
            },
            DT,
        );
        assert_eq!(player.velocity().x, 200.0);
    }

    #[test]
    fn when_no_direction_is_held_then_horizontal_velocity_resets() {
        let mut player = grounded_player();
        player.update(
            PlayerInput {
                left: true,
                ..PlayerInput::default()
            },
            DT,
        );
        assert_eq!(player.velocity().x, -200.0);

        player.update(PlayerInput::default(), DT);
        assert_eq!(player.velocity().x, 0.0);
    }

    #[test]
    fn when_grounded_and_idle_then_player_does_not_move_vertically() {
        let mut player = grounded_player();
        let before = player.position();
        player.update(PlayerInput::default(), DT);

        assert_eq!(player.velocity().y, 0.0);
        assert_eq!(player.position(), before);
    }

    #[test]
    fn when_jump_is_pressed_on_ground_then_jump_starts() {
        let mut player = grounded_player();
        player.update(held(true), 0.0);

        assert_eq!(player.velocity().y, -350.0);
        assert!(player.is_jumping());
        assert!(!player.is_on_ground());
    }

    #[test]
    fn when_jump_is_held_over_from_previous_tick_then_no_new_jump_starts() {
        let mut player = grounded_player();
        player.update(held(true), 0.0);
        // Land while still holding the button.
        player.land_on(416.0);
        player.update(held(true), 0.0);

        assert_eq!(player.velocity().y, 0.0);
        assert!(player.is_on_ground());
    }

    #[test]
    fn when_jump_is_pressed_in_the_air_then_nothing_happens() {
        let mut player = Player::new(Vec2::new(100.0, 100.0), PlayerTuning::default());
        player.update(held(true), 0.0);

        assert_eq!(player.velocity().y, 0.0);
        assert!(!player.is_jumping());
    }

    #[test]
    fn when_jump_is_released_while_rising_then_velocity_is_cut_in_half() {
        let mut player = grounded_player();
        player.update(held(true), 0.0);
        player.update(held(false), 0.0);

        assert_eq!(player.velocity().y, -175.0);
        assert!(!player.is_jumping());
    }

    #[test]
    fn when_jump_is_held_while_rising_then_gravity_is_halved() {
        let mut player = grounded_player();
        player.update(held(true), DT);

        // Jump tick already runs with the reduced gravity.
        let expected = -350.0_f32 + 800.0 * 0.5 * DT;
        assert_eq!(player.velocity().y, expected);

        player.update(held(true), DT);
        assert_eq!(player.velocity().y, expected + 800.0 * 0.5 * DT);
    }

    #[test]
    fn when_apex_is_reached_then_jumping_flag_clears() {
        let mut player = grounded_player();
        player.update(held(true), DT);
        let mut ticks = 0;
        while player.velocity().y < 0.0 {
            player.update(held(true), DT);
            ticks += 1;
            assert!(ticks < 600, "player never reached apex");
        }
        player.update(held(true), DT);
        assert!(!player.is_jumping());
    }

    #[test]
    fn when_released_after_cut_then_full_gravity_applies() {
        let mut player = grounded_player();
        player.update(held(true), 0.0);
        player.update(held(false), DT);

        assert_eq!(player.velocity().y, -175.0 + 800.0 * DT);
    }

    #[test]
    fn when_bounced_then_velocity_is_seventy_percent_of_jump_force() {
        let mut player = grounded_player();
        player.update(held(true), 0.0);
        player.bounce();

        assert_eq!(player.velocity().y, -350.0 * 0.7);
        assert!(!player.is_jumping());
    }

    #[test]
    fn when_dropped_from_rest_then_trajectory_matches_semi_implicit_euler() {
        for seconds in [0.1_f32, 1.0, 2.0] {
            let ticks = (seconds * 60.0).round() as usize;
            let mut player = Player::new(Vec2::new(100.0, 0.0), PlayerTuning::default());

            let (mut vy, mut y) = (0.0_f32, 0.0_f32);
            for _ in 0..ticks {
                player.update(PlayerInput::default(), DT);
                vy += 800.0 * DT;
                if vy > 500.0 {
                    vy = 500.0;
                }
                y += vy * DT;
            }

            assert_eq!(player.velocity().y, vy);
            assert_eq!(player.position().y, y);
            let closed_form = (800.0 * seconds).min(500.0);
            assert!(
                (player.velocity().y - closed_form).abs() < 1e-2,
                "t={seconds}: {} vs {closed_form}",
                player.velocity().y
            );
        }
    }
}
