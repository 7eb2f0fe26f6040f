// Wire DTOs and conversions for anything that renders the world outside this process.

use crate::domain::state::BACKGROUND_COLOR;
use crate::domain::{EntitySnapshot, PlayerInput, Rect, VisualKind};
use crate::use_cases::{SessionEnd, SessionSummary, WorldUpdate};
use serde::{Deserialize, Serialize};

/// Snapshot of the world for one tick.
#[derive(Debug, Clone, Serialize)]
pub struct WorldUpdateDto {
    pub tick: u64,
    pub score: u32,
    pub background: [u8; 3],
    pub entities: Vec<EntityStateDto>,
}

impl From<&WorldUpdate> for WorldUpdateDto {
    fn from(update: &WorldUpdate) -> Self {
        Self {
            tick: update.tick,
            score: update.score,
            background: BACKGROUND_COLOR,
            entities: update.entities.iter().map(EntityStateDto::from).collect(),
        }
    }
}

/// Flattened draw entry: bounds, category and fill color.
#[derive(Debug, Clone, Serialize)]
pub struct EntityStateDto {
    pub kind: VisualKindDto,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub visible: bool,
    pub color: [u8; 3],
}

impl From<&EntitySnapshot> for EntityStateDto {
    fn from(entity: &EntitySnapshot) -> Self {
        let Rect {
            x,
            y,
            width,
            height,
        } = entity.bounds;
        Self {
            kind: entity.kind.into(),
            x,
            y,
            width,
            height,
            visible: entity.is_visible(),
            color: entity.kind.fill_color(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VisualKindDto {
    Ground,
    Platform,
    Enemy,
    DefeatedEnemy,
    Player,
}

impl From<VisualKind> for VisualKindDto {
    fn from(kind: VisualKind) -> Self {
        match kind {
            VisualKind::Ground => VisualKindDto::Ground,
            VisualKind::Platform => VisualKindDto::Platform,
            VisualKind::Enemy => VisualKindDto::Enemy,
            VisualKind::DefeatedEnemy => VisualKindDto::DefeatedEnemy,
            VisualKind::Player => VisualKindDto::Player,
        }
    }
}

/// Per-frame input as sent by an external frontend.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PlayerInputDto {
    #[serde(default)]
    pub left: bool,
    #[serde(default)]
    pub right: bool,
    #[serde(default)]
    pub jump: bool,
    #[serde(default)]
    pub quit: bool,
}

impl From<PlayerInputDto> for PlayerInput {
    fn from(input: PlayerInputDto) -> Self {
        Self {
            left: input.left,
            right: input.right,
            jump: input.jump,
            quit: input.quit,
        }
    }
}

/// End-of-run report printed by the headless runner.
#[derive(Debug, Clone, Serialize)]
pub struct SessionReportDto {
    pub ticks: u64,
    pub score: u32,
    pub stomps: u32,
    pub hurts: u32,
    pub falls: u32,
    pub end: &'static str,
    pub final_state: WorldUpdateDto,
}

impl SessionReportDto {
    pub fn new(summary: &SessionSummary, final_state: &WorldUpdate) -> Self {
        let end = match summary.end {
            SessionEnd::QuitRequested => "quit",
            SessionEnd::InputExhausted => "input_exhausted",
            SessionEnd::TickLimit => "tick_limit",
            SessionEnd::Shutdown => "shutdown",
        };
        Self {
            ticks: summary.ticks,
            score: summary.score,
            stomps: summary.stomps,
            hurts: summary.hurts,
            falls: summary.falls,
            end,
            final_state: WorldUpdateDto::from(final_state),
        }
    }
}
