use std::time::Duration;
use std::time::Instant;

use tracing::debug;
use tracing::info;

use crate::coord::Size;
use crate::events::Event;
use crate::grid::Grid;
use crate::grid::GridError;
use crate::render;
use crate::viewport::Viewport;

/// How often auto-play advances the grid, unless configured otherwise
pub const DEFAULT_CADENCE: Duration = Duration::from_millis(100);

/// What the loop should do after handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Something changed, draw again
    Redraw,

    Quit,
}

/// Grid, viewport, and the auto-play flag. The only mutator of either.
pub struct Game {
    grid: Grid,
    viewport: Viewport,

    playing: bool,

    /// Minimum time between two auto-play advances
    cadence: Duration,

    /// When auto-play last advanced the grid, or was turned on
    last_advance: Instant,
}

impl Game {
    pub fn new(grid: Grid, display: Size, cadence: Duration) -> Self {
        let viewport = Viewport::new(grid.size(), display);

        Self {
            grid,
            viewport,
            playing: false,
            cadence,
            last_advance: Instant::now(),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn cadence(&self) -> Duration {
        self.cadence
    }

    /// Start or stop auto-play. Starting waits a full cadence before the first advance.
    pub fn set_playing(&mut self, playing: bool, now: Instant) {
        if playing && !self.playing {
            self.last_advance = now;
        }

        self.playing = playing;
        info!(playing, "auto-play");
    }

    /// Apply a single input event
    pub fn handle(&mut self, event: Event, now: Instant) -> Result<Control, GridError> {
        match event {
            Event::MoveUp => self.viewport.move_cursor(0, -1),
            Event::MoveDown => self.viewport.move_cursor(0, 1),
            Event::MoveLeft => self.viewport.move_cursor(-1, 0),
            Event::MoveRight => self.viewport.move_cursor(1, 0),

            Event::ScrollUp => self.viewport.move_anchor(0, -1),
            Event::ScrollDown => self.viewport.move_anchor(0, 1),
            Event::ScrollLeft => self.viewport.move_anchor(-1, 0),
            Event::ScrollRight => self.viewport.move_anchor(1, 0),

            Event::ToggleCell => {
                self.viewport.toggle_cell_at_cursor(&mut self.grid)?;
            }
            Event::StepGeneration => {
                self.grid.advance();
                debug!(generation = self.grid.generation(), "stepped");
            }
            Event::TogglePlay => self.set_playing(!self.playing, now),

            Event::Resize { cols, rows } => {
                let size = render::display_size(cols, rows);
                debug!(?size, "resized");
                self.viewport.resize(size);
            }

            Event::Quit => return Ok(Control::Quit),
        }

        Ok(Control::Redraw)
    }

    /// Advance the grid if auto-play is on and a full cadence has passed since the last advance.
    /// Returns whether the grid changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.playing || now.saturating_duration_since(self.last_advance) < self.cadence {
            return false;
        }

        self.grid.advance();
        self.last_advance = now;

        true
    }

    /// How long the loop may wait for input before the next auto-play advance is due. `None`
    /// when paused.
    pub fn time_to_next_tick(&self, now: Instant) -> Option<Duration> {
        if !self.playing {
            return None;
        }

        let elapsed = now.saturating_duration_since(self.last_advance);
        Some(self.cadence.saturating_sub(elapsed))
    }
}
