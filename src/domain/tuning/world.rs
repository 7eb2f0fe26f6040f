use serde::Deserialize;

/// Gameplay tuning for world-level collision and scoring rules.

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct WorldTuning {
    /// Depth below a platform's top within which a falling player is caught.
    pub platform_snap_tolerance: f32,

    /// Points awarded per stomped enemy.
    pub stomp_score: u32,
}

impl Default for WorldTuning {
    fn default() -> Self {
        Self {
            platform_snap_tolerance: 20.0,
            stomp_score: 100,
        }
    }
}
