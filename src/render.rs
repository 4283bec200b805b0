use crate::coord::Size;
use crate::grid::Grid;
use crate::viewport::Viewport;

/// Columns taken by the left and right border
const BORDER_COLS: u16 = 2;

/// Rows taken by the top and bottom border, plus the status line
const BORDER_ROWS: u16 = 3;

/// Characters used to draw cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub alive: char,
    pub dead: char,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            alive: 'O',
            dead: 'X',
        }
    }
}

/// Number of cells a terminal of `cols` by `rows` can show once the frame is drawn around them.
pub fn display_size(cols: u16, rows: u16) -> Size {
    Size::new(
        cols.saturating_sub(BORDER_COLS).max(1) as usize,
        rows.saturating_sub(BORDER_ROWS).max(1) as usize,
    )
}

/// The frame buffer: the visible window with a border around it, and a status line below.
///
/// ```notrust
/// ┌───┐
/// │OXX│
/// │XXX│
/// └───┘
/// paused | gen 0 | pop 1 | cell (0, 0)
/// ```
#[derive(Debug, Default)]
pub struct Frame {
    fb: String,

    /// Screen position of the cursor, border included
    cursor: (u16, u16),
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Redraw the frame buffer from the current state
    pub fn render(
        &mut self,
        grid: &Grid,
        viewport: &Viewport,
        playing: bool,
        glyphs: &Glyphs,
    ) -> &str {
        let visible = viewport.visible_subgrid(grid);
        let bar: String = "─".repeat(visible.width());

        self.fb.clear();

        self.fb.push('┌');
        self.fb.push_str(&bar);
        self.fb.push_str("┐\n");

        for row in visible.rows() {
            self.fb.push('│');
            for cell in row {
                self.fb.push(if cell.is_alive() { glyphs.alive } else { glyphs.dead });
            }
            self.fb.push_str("│\n");
        }

        self.fb.push('└');
        self.fb.push_str(&bar);
        self.fb.push_str("┘\n");

        let selected = viewport.selected();
        self.fb.push_str(&format!(
            "{} | gen {} | pop {} | cell ({}, {})",
            if playing { "playing" } else { "paused" },
            grid.generation(),
            grid.population(),
            selected.x,
            selected.y,
        ));

        let cursor = viewport.cursor();
        self.cursor = (
            (cursor.x + 1).min(u16::MAX as usize) as u16,
            (cursor.y + 1).min(u16::MAX as usize) as u16,
        );

        &self.fb
    }

    pub fn text(&self) -> &str {
        &self.fb
    }

    pub fn lines(&self) -> std::str::Lines<'_> {
        self.fb.lines()
    }

    /// Where to put the terminal cursor, as `(column, row)`
    pub fn cursor_position(&self) -> (u16, u16) {
        self.cursor
    }
}
