// Use-case level inputs/outputs for the world step.

use crate::domain::EntitySnapshot;

/// One collision-resolution stage of the world step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionStage {
    Ground,
    Platforms,
    Enemies,
    WorldBounds,
    FallOff,
}

/// Something noteworthy that happened during a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepEvent {
    EnemyStomped { enemy: usize, score: u32 },
    PlayerHurt { enemy: usize },
    PlayerFellOffScreen,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StepOutcome {
    /// Tick counter after this step.
    pub tick: u64,
    pub events: Vec<StepEvent>,
    /// Set when the input asked to quit; the world was not advanced.
    pub quit_requested: bool,
}

/// Read model handed to a renderer after each tick.
#[derive(Debug, Clone, PartialEq)]
pub struct WorldUpdate {
    pub tick: u64,
    pub score: u32,
    /// Draw order: ground, platforms, enemies, player.
    pub entities: Vec<EntitySnapshot>,
}
