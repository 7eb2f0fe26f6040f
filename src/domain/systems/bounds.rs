use crate::domain::geometry::Vec2;
use crate::domain::player::Player;
use tracing::{info, trace};

/// Keeps the player horizontally inside `[0, screen_width - width]`.
pub fn clamp_to_screen(player: &mut Player, screen_width: f32) {
    let x = player.position().x;
    let width = player.body().width();

    if x < 0.0 {
        player.body_mut().set_x(0.0);
    }
    if player.position().x + width > screen_width {
        player.body_mut().set_x(screen_width - width);
    }
    if player.position().x != x {
        trace!(from = x, to = player.position().x, "player clamped to screen");
    }
}

/// Respawns the player once their top edge drops below the screen.
pub fn resolve_fall_off(player: &mut Player, screen_height: f32, spawn: Vec2) -> bool {
    if player.position().y > screen_height {
        player.respawn(spawn);
        info!("player fell off screen; respawning");
        return true;
    }
    false
}
