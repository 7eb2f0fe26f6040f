use super::state::PlayerInput;

// Port for whatever samples input each frame (keyboard, script, replay).
pub trait InputSource {
    /// Returns the next frame's input, or `None` when the source is exhausted.
    fn next_input(&mut self) -> Option<PlayerInput>;
}
