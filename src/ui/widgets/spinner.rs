use crate::state::State;

/// Frames cycled through on every tick.
///
pub const FRAMES: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

/// Return the frame for the current tick.
///
pub fn frame(state: &State) -> &'static str {
    FRAMES[state.spinner_index() % FRAMES.len()]
}
