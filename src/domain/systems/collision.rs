use crate::domain::enemy::{CollisionType, Enemy};
use crate::domain::geometry::Vec2;
use crate::domain::platform::Platform;
use crate::domain::player::Player;
use tracing::{debug, info};

/// Outcome of one enemy contact during enemy resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnemyContact {
    /// Position of the enemy in the level's enemy list.
    pub enemy: usize,
    pub kind: CollisionType,
}

#[derive(Debug, Clone, Copy)]
pub struct EnemyRules {
    pub spawn: Vec2,
    pub stomp_score: u32,
}

/// Lands the player on the ground line when their feet reach it.
pub fn resolve_ground(player: &mut Player, ground_y: Option<f32>) -> bool {
    let Some(ground_y) = ground_y else {
        return false;
    };
    if player.body().bottom() >= ground_y {
        player.land_on(ground_y);
        return true;
    }
    false
}

/// Lands a falling player on the first platform (declaration order) whose top band
/// contains their feet. Returns the index of that platform.
///
/// Skipped entirely while the player moves upward, so jumps pass through from below.
pub fn resolve_platforms(
    player: &mut Player,
    platforms: &[Platform],
    snap_tolerance: f32,
) -> Option<usize> {
    if player.velocity().y < 0.0 {
        return None;
    }

    let hit = platforms
        .iter()
        .position(|platform| touches_platform(player, platform, snap_tolerance))?;

    let top = platforms[hit].bounds().top();
    player.land_on(top);
    debug!(platform = hit, top, "player landed on platform");
    Some(hit)
}

fn touches_platform(player: &Player, platform: &Platform, snap_tolerance: f32) -> bool {
    let platform_bounds = platform.bounds();
    let horizontal_overlap = player.bounds().overlaps_horizontally(&platform_bounds);

    let bottom = player.body().bottom();
    let top = platform_bounds.top();
    let vertical_contact = bottom >= top && bottom <= top + snap_tolerance;

    horizontal_overlap && vertical_contact
}

/// Checks every enemy in list order against the player.
///
/// Each contact is applied immediately, so a hurt from a later enemy overwrites the
/// bounce from an earlier stomp in the same tick.
pub fn resolve_enemies(
    player: &mut Player,
    enemies: &mut [Enemy],
    score: &mut u32,
    rules: EnemyRules,
) -> Vec<EnemyContact> {
    let mut contacts = Vec::new();

    for (index, enemy) in enemies.iter_mut().enumerate() {
        let kind = enemy.check_player_collision(player);
        match kind {
            CollisionType::None => continue,
            CollisionType::Stomped => {
                enemy.stomp();
                player.bounce();
                *score = score.saturating_add(rules.stomp_score);
                info!(enemy = index, score = *score, "enemy stomped");
            }
            CollisionType::HurtPlayer => {
                player.respawn(rules.spawn);
                info!(enemy = index, "player hurt; respawning");
            }
        }
        contacts.push(EnemyContact { enemy: index, kind });
    }

    contacts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tuning::{EnemyTuning, PlayerTuning};

    const SPAWN: Vec2 = Vec2::new(100.0, 368.0);

    fn rules() -> EnemyRules {
        EnemyRules {
            spawn: SPAWN,
            stomp_score: 100,
        }
    }

    fn player_at(x: f32, y: f32, velocity_y: f32) -> Player {
        let mut player = Player::new(Vec2::new(x, y), PlayerTuning::default());
        player.body_mut().set_velocity_y(velocity_y);
        player
    }

    #[test]
    fn when_feet_pass_the_ground_line_then_player_is_snapped_onto_it() {
        let mut player = player_at(100.0, 370.0, 300.0);
        assert!(resolve_ground(&mut player, Some(416.0)));
        assert_eq!(player.position().y, 368.0);
        assert_eq!(player.velocity().y, 0.0);
        assert!(player.is_on_ground());
    }

    #[test]
    fn when_there_is_no_ground_then_nothing_is_resolved() {
        let mut player = player_at(100.0, 1000.0, 300.0);
        assert!(!resolve_ground(&mut player, None));
        assert!(!player.is_on_ground());
    }

    #[test]
    fn when_falling_feet_are_inside_platform_band_then_player_lands() {
        let platforms = [Platform::new(200.0, 320.0, 120.0, 20.0)];
        let mut player = player_at(210.0, 320.0 - 48.0 + 12.0, 50.0);

        assert_eq!(resolve_platforms(&mut player, &platforms, 20.0), Some(0));
        assert_eq!(player.body().bottom(), 320.0);
        assert_eq!(player.velocity().y, 0.0);
        assert!(player.is_on_ground());
    }

    #[test]
    fn when_feet_are_below_the_band_then_platform_is_ignored() {
        let platforms = [Platform::new(200.0, 320.0, 120.0, 20.0)];
        let mut player = player_at(210.0, 320.0 - 48.0 + 21.0, 50.0);
        assert_eq!(resolve_platforms(&mut player, &platforms, 20.0), None);
    }

    #[test]
    fn when_moving_upward_through_platform_then_player_is_not_snapped() {
        let platforms = [Platform::new(200.0, 320.0, 120.0, 20.0)];
        let mut player = player_at(210.0, 320.0 - 48.0 + 5.0, -100.0);

        assert_eq!(resolve_platforms(&mut player, &platforms, 20.0), None);
        assert_eq!(player.velocity().y, -100.0);
        assert!(!player.is_on_ground());
    }

    #[test]
    fn when_player_only_touches_platform_edge_then_there_is_no_overlap() {
        let platforms = [Platform::new(200.0, 320.0, 120.0, 20.0)];
        let mut player = player_at(168.0, 320.0 - 48.0 + 5.0, 10.0);
        assert_eq!(resolve_platforms(&mut player, &platforms, 20.0), None);
    }

    #[test]
    fn when_platform_bands_overlap_then_first_declared_wins() {
        // The second platform is higher and would be the "closest" surface.
        let platforms = [
            Platform::new(200.0, 320.0, 120.0, 20.0),
            Platform::new(200.0, 310.0, 120.0, 20.0),
        ];
        let mut player = player_at(210.0, 320.0 - 48.0 + 15.0, 50.0);

        assert_eq!(resolve_platforms(&mut player, &platforms, 20.0), Some(0));
        assert_eq!(player.body().bottom(), 320.0);
    }

    #[test]
    fn when_player_stomps_enemy_then_enemy_dies_player_bounces_and_score_increases() {
        let mut enemies = [Enemy::new(Vec2::new(400.0, 384.0), 80.0, EnemyTuning::default())];
        let mut player = player_at(400.0, 384.0 - 48.0 + 4.0, 200.0);
        let mut score = 0;

        let contacts = resolve_enemies(&mut player, &mut enemies, &mut score, rules());

        assert_eq!(
            contacts,
            vec![EnemyContact {
                enemy: 0,
                kind: CollisionType::Stomped
            }]
        );
        assert!(!enemies[0].is_alive());
        assert_eq!(score, 100);
        assert_eq!(player.velocity().y, -245.0);
    }

    #[test]
    fn when_player_hits_enemy_side_then_player_respawns_with_zero_velocity() {
        let mut enemies = [Enemy::new(Vec2::new(400.0, 384.0), 80.0, EnemyTuning::default())];
        let mut player = player_at(380.0, 368.0, 0.0);
        player.body_mut().set_velocity_x(200.0);
        let mut score = 0;

        resolve_enemies(&mut player, &mut enemies, &mut score, rules());

        assert_eq!(player.position(), SPAWN);
        assert_eq!(player.velocity(), Vec2::ZERO);
        assert!(enemies[0].is_alive());
        assert_eq!(score, 0);
    }

    #[test]
    fn when_stomp_and_hurt_happen_in_one_tick_then_later_hurt_overwrites_position() {
        let tuning = EnemyTuning::default();
        let mut enemies = [
            Enemy::new(Vec2::new(400.0, 384.0), 80.0, tuning),
            // Second enemy overlaps the player's body well below the feet.
            Enemy::new(Vec2::new(410.0, 350.0), 80.0, tuning),
        ];
        let mut player = player_at(400.0, 384.0 - 48.0 + 4.0, 200.0);
        let mut score = 0;

        let contacts = resolve_enemies(&mut player, &mut enemies, &mut score, rules());

        assert_eq!(contacts.len(), 2);
        assert_eq!(contacts[0].kind, CollisionType::Stomped);
        assert_eq!(contacts[1].kind, CollisionType::HurtPlayer);
        assert!(!enemies[0].is_alive());
        assert_eq!(score, 100);
        assert_eq!(player.position(), SPAWN);
        assert_eq!(player.velocity(), Vec2::ZERO);
    }
}
