// Gameplay tuning, kept separate from runtime configuration (tick rate, paths, etc.).

pub mod enemy;
pub mod player;
pub mod world;

pub use enemy::EnemyTuning;
pub use player::PlayerTuning;
pub use world::WorldTuning;
