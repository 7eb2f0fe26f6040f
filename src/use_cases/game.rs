// The world step: one simulation tick over the player, enemies and static geometry.

use super::types::{ResolutionStage, StepEvent, StepOutcome, WorldUpdate};
use crate::domain::systems::bounds::{clamp_to_screen, resolve_fall_off};
use crate::domain::systems::collision::{
    EnemyRules, resolve_enemies, resolve_ground, resolve_platforms,
};
use crate::domain::{
    CollisionType, Enemy, EntitySnapshot, LevelError, LevelLayout, Platform, Player,
    PlayerInput, Rect, Vec2, VisualKind,
};
use tracing::{debug, warn};

/// Collision resolution order after player and enemy movement.
///
/// Later stages override earlier ones: enemy contacts must see the ground state from
/// this tick, and the bounds clamp and fall-off reset always get the last word.
pub const RESOLUTION_ORDER: [ResolutionStage; 5] = [
    ResolutionStage::Ground,
    ResolutionStage::Platforms,
    ResolutionStage::Enemies,
    ResolutionStage::WorldBounds,
    ResolutionStage::FallOff,
];

/// One play session: owns the player, the level geometry, enemies and the score.
///
/// `step` is the only way simulation state changes.
#[derive(Debug, Clone)]
pub struct World {
    layout: LevelLayout,
    player: Player,
    platforms: Vec<Platform>,
    enemies: Vec<Enemy>,
    score: u32,
    tick: u64,
}

impl World {
    /// Builds a session from a layout without validating it.
    pub fn new(layout: LevelLayout) -> Self {
        let player = Player::new(layout.player_start, layout.player);
        let platforms = layout
            .platforms
            .iter()
            .map(|p| Platform::new(p.x, p.y, p.width, p.height))
            .collect();
        let enemies = layout
            .enemies
            .iter()
            .map(|spawn| Enemy::new(spawn.position(), layout.patrol_distance(spawn), layout.enemy))
            .collect();

        Self {
            layout,
            player,
            platforms,
            enemies,
            score: 0,
            tick: 0,
        }
    }

    pub fn try_new(layout: LevelLayout) -> Result<Self, LevelError> {
        layout.validate()?;
        Ok(Self::new(layout))
    }

    /// Reloads the level: fresh player, revived enemies, zero score.
    pub fn reset(&mut self) {
        *self = World::new(self.layout.clone());
    }

    pub fn layout(&self) -> &LevelLayout {
        &self.layout
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn spawn_point(&self) -> Vec2 {
        self.layout.player_start
    }

    /// Advances the simulation by `dt` seconds.
    ///
    /// A quit request returns immediately without touching the world. Negative or
    /// non-finite deltas are treated as zero.
    pub fn step(&mut self, dt: f32, input: PlayerInput) -> StepOutcome {
        if input.quit {
            return StepOutcome {
                tick: self.tick,
                events: Vec::new(),
                quit_requested: true,
            };
        }

        let dt = if dt.is_finite() && dt >= 0.0 {
            dt
        } else {
            warn!(dt, "invalid frame delta; stepping with zero");
            0.0
        };

        self.tick += 1;

        self.player.update(input, dt);
        let ground = self.layout.ground_line();
        for enemy in &mut self.enemies {
            enemy.update(ground, dt);
        }

        // Ground state is rebuilt from scratch by the resolution stages.
        self.player.clear_ground();

        let mut events = Vec::new();
        for stage in RESOLUTION_ORDER {
            self.resolve(stage, &mut events);
        }

        debug!(
            tick = self.tick,
            x = self.player.position().x,
            y = self.player.position().y,
            on_ground = self.player.is_on_ground(),
            "tick"
        );

        StepOutcome {
            tick: self.tick,
            events,
            quit_requested: false,
        }
    }

    fn resolve(&mut self, stage: ResolutionStage, events: &mut Vec<StepEvent>) {
        match stage {
            ResolutionStage::Ground => {
                resolve_ground(&mut self.player, self.layout.ground_line());
            }
            ResolutionStage::Platforms => {
                resolve_platforms(
                    &mut self.player,
                    &self.platforms,
                    self.layout.world.platform_snap_tolerance,
                );
            }
            ResolutionStage::Enemies => {
                let rules = EnemyRules {
                    spawn: self.layout.player_start,
                    stomp_score: self.layout.world.stomp_score,
                };
                // Each stomp event carries the score as it stood right after that stomp.
                let mut running_score = self.score;
                let contacts =
                    resolve_enemies(&mut self.player, &mut self.enemies, &mut self.score, rules);
                for contact in contacts {
                    match contact.kind {
                        CollisionType::Stomped => {
                            running_score = running_score.saturating_add(rules.stomp_score);
                            events.push(StepEvent::EnemyStomped {
                                enemy: contact.enemy,
                                score: running_score,
                            });
                        }
                        CollisionType::HurtPlayer => {
                            events.push(StepEvent::PlayerHurt {
                                enemy: contact.enemy,
                            });
                        }
                        CollisionType::None => {}
                    }
                }
            }
            ResolutionStage::WorldBounds => {
                clamp_to_screen(&mut self.player, self.layout.screen_width);
            }
            ResolutionStage::FallOff => {
                if resolve_fall_off(
                    &mut self.player,
                    self.layout.screen_height,
                    self.layout.player_start,
                ) {
                    events.push(StepEvent::PlayerFellOffScreen);
                }
            }
        }
    }

    /// Geometry and categories for rendering, in draw order.
    pub fn snapshot(&self) -> WorldUpdate {
        let mut entities = Vec::with_capacity(self.platforms.len() + self.enemies.len() + 2);

        if let Some(ground_y) = self.layout.ground_line() {
            let height = (self.layout.screen_height - ground_y).max(0.0);
            entities.push(EntitySnapshot::new(
                VisualKind::Ground,
                Rect::new(0.0, ground_y, self.layout.screen_width, height),
            ));
        }
        entities.extend(
            self.platforms
                .iter()
                .map(|p| EntitySnapshot::new(VisualKind::Platform, p.bounds())),
        );
        entities.extend(self.enemies.iter().map(|e| {
            let kind = if e.is_alive() {
                VisualKind::Enemy
            } else {
                VisualKind::DefeatedEnemy
            };
            EntitySnapshot::new(kind, e.bounds())
        }));
        entities.push(EntitySnapshot::new(VisualKind::Player, self.player.bounds()));

        WorldUpdate {
            tick: self.tick,
            score: self.score,
            entities,
        }
    }
}
