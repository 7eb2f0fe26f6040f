// Use cases layer: the world step and the loop that drives it.

pub mod game;
pub mod session;
pub mod types;

pub use game::{RESOLUTION_ORDER, World};
pub use session::{SessionEnd, SessionSettings, SessionSummary, run_session};
pub use types::{ResolutionStage, StepEvent, StepOutcome, WorldUpdate};
