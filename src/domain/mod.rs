// Domain layer: core simulation types and rules.

pub mod body;
pub mod enemy;
pub mod errors;
pub mod geometry;
pub mod level;
pub mod platform;
pub mod player;
pub mod ports;
pub mod state;
pub mod systems;
pub mod tuning;

pub use body::KinematicBody;
pub use enemy::{CollisionType, Enemy};
pub use errors::LevelError;
pub use geometry::{Rect, Vec2};
pub use level::{EnemySpawn, LevelLayout, PlatformSpec};
pub use platform::Platform;
pub use player::Player;
pub use ports::InputSource;
pub use state::{EntitySnapshot, PlayerInput, VisualKind};
