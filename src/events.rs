/// Everything the interaction loop reacts to. Produced by the input collaborator, see
/// [`crate::io::convert_event`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Move the cursor one cell, scrolling when it hits the edge of the window
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,

    /// Scroll the window one cell, leaving the cursor where it is on screen
    ScrollUp,
    ScrollDown,
    ScrollLeft,
    ScrollRight,

    /// Flip the cell under the cursor
    ToggleCell,

    /// Advance the world state by one generation
    StepGeneration,

    /// Start or stop auto-play
    TogglePlay,

    /// The terminal changed size
    Resize { cols: u16, rows: u16 },

    /// Exit the application
    Quit,
}
