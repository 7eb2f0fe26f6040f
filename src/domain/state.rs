// Domain-level input and snapshot types exchanged with the frame driver.

use super::geometry::Rect;

/// Digital input sampled once per frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub quit: bool,
}

/// Coarse visual category, enough for a renderer to pick a fill color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualKind {
    Ground,
    Platform,
    Enemy,
    // Stomped enemies stay in the list but are not drawn.
    DefeatedEnemy,
    Player,
}

/// Background clear color (cornflower blue).
pub const BACKGROUND_COLOR: [u8; 3] = [100, 149, 237];

impl VisualKind {
    pub fn is_visible(self) -> bool {
        !matches!(self, VisualKind::DefeatedEnemy)
    }

    /// RGB fill used by the reference palette.
    pub fn fill_color(self) -> [u8; 3] {
        match self {
            VisualKind::Ground => [139, 69, 19],
            VisualKind::Platform => [34, 139, 34],
            VisualKind::Enemy | VisualKind::DefeatedEnemy => [255, 165, 0],
            VisualKind::Player => [255, 0, 0],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntitySnapshot {
    pub kind: VisualKind,
    pub bounds: Rect,
}

impl EntitySnapshot {
    pub fn new(kind: VisualKind, bounds: Rect) -> Self {
        Self { kind, bounds }
    }

    pub fn is_visible(&self) -> bool {
        self.kind.is_visible()
    }
}
