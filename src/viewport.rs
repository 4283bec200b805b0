use tracing::debug;
use tracing::trace;

use crate::cell::CellState;
use crate::coord::offset_clamped;
use crate::coord::Coord;
use crate::coord::Size;
use crate::grid::Grid;
use crate::grid::GridError;

/// A window into a [`Grid`], along with a cursor inside that window.
///
/// The anchor is the grid coordinate of the top-left visible cell. The cursor is relative to the
/// anchor. Both are kept in range at all times, so `anchor + cursor` is always a cell of the grid:
///
/// ```notrust
/// anchor.x in [0, grid.width - window.width]
/// cursor.x in [0, window.width - 1]
/// ```
///
/// and likewise for `y`. The window is the display size, shrunk to the grid size on any axis
/// where the grid is smaller than the display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewport {
    /// Size of the grid we are looking at. Grids never resize.
    grid: Size,

    /// Number of cells the display can show
    display: Size,

    anchor: Coord,
    cursor: Coord,
}

impl Viewport {
    /// Create a viewport on a grid of size `grid`, showing at most `display` cells. Anchor and
    /// cursor start at the origin.
    pub fn new(grid: Size, display: Size) -> Self {
        Self {
            grid,
            display: Self::sanitize(display),
            anchor: Coord::ORIGIN,
            cursor: Coord::ORIGIN,
        }
    }

    pub fn anchor(&self) -> Coord {
        self.anchor
    }

    pub fn cursor(&self) -> Coord {
        self.cursor
    }

    pub fn display(&self) -> Size {
        self.display
    }

    pub fn grid_size(&self) -> Size {
        self.grid
    }

    /// The visible part of the grid, in cells
    pub fn window(&self) -> Size {
        self.display.min(&self.grid)
    }

    /// The grid cell under the cursor
    pub fn selected(&self) -> Coord {
        self.anchor + self.cursor
    }

    /// Move the cursor by `(dx, dy)`.
    ///
    /// Moving past an edge of the window leaves the cursor on that edge, and scrolls the anchor by
    /// however far past the edge the cursor would have gone.
    pub fn move_cursor(&mut self, dx: isize, dy: isize) {
        let max = self.cursor_max();

        let (x, overflow_x) = offset_clamped(self.cursor.x, dx, max.x);
        let (y, overflow_y) = offset_clamped(self.cursor.y, dy, max.y);

        self.cursor = Coord { x, y };

        if overflow_x != 0 || overflow_y != 0 {
            self.move_anchor(overflow_x, overflow_y);
        }
    }

    /// Scroll the anchor by `(dx, dy)`. Scrolling past the edge of the grid stops at the edge.
    pub fn move_anchor(&mut self, dx: isize, dy: isize) {
        let max = self.anchor_max();

        let (x, overflow_x) = offset_clamped(self.anchor.x, dx, max.x);
        let (y, overflow_y) = offset_clamped(self.anchor.y, dy, max.y);

        if overflow_x != 0 || overflow_y != 0 {
            trace!(overflow_x, overflow_y, "anchor hit the grid edge");
        }

        self.anchor = Coord { x, y };
    }

    /// Flip the cell under the cursor, returning its new state.
    ///
    /// `grid` must be the grid this viewport was made for. Any other grid fails with
    /// [`GridError::OutOfBounds`] when the selected cell is not one of its cells.
    pub fn toggle_cell_at_cursor(&self, grid: &mut Grid) -> Result<CellState, GridError> {
        let Coord { x, y } = self.selected();
        let (x, y) = (x as isize, y as isize);

        let state = grid.get(x, y).toggled();
        grid.set(x, y, state)?;

        debug!(x, y, ?state, "toggled cell");

        Ok(state)
    }

    /// Read-only view of the visible part of `grid`
    pub fn visible_subgrid<'a>(&self, grid: &'a Grid) -> VisibleCells<'a> {
        VisibleCells {
            grid,
            anchor: self.anchor,
            size: self.window(),
        }
    }

    /// Change the display size, e.g. after the terminal was resized. Anchor and cursor are pulled
    /// back into range.
    pub fn resize(&mut self, display: Size) {
        self.display = Self::sanitize(display);
        self.anchor = self.anchor.clamp_to(&self.anchor_max());
        self.cursor = self.cursor.clamp_to(&self.cursor_max());
    }

    fn cursor_max(&self) -> Coord {
        let window = self.window();
        Coord::new(window.width - 1, window.height - 1)
    }

    fn anchor_max(&self) -> Coord {
        let window = self.window();
        Coord::new(
            self.grid.width.saturating_sub(window.width),
            self.grid.height.saturating_sub(window.height),
        )
    }

    fn sanitize(display: Size) -> Size {
        Size::new(display.width.max(1), display.height.max(1))
    }
}

/// The cells currently inside a [`Viewport`]
pub struct VisibleCells<'a> {
    grid: &'a Grid,
    anchor: Coord,
    size: Size,
}

impl<'a> VisibleCells<'a> {
    pub fn width(&self) -> usize {
        self.size.width
    }

    pub fn height(&self) -> usize {
        self.size.height
    }

    /// Cell at window-relative `(col, row)`
    pub fn get(&self, col: usize, row: usize) -> CellState {
        if col >= self.size.width || row >= self.size.height {
            return CellState::Dead;
        }

        let (x, y) = (self.anchor.x + col, self.anchor.y + row);
        self.grid.get(x as isize, y as isize)
    }

    /// Visible rows, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = impl Iterator<Item = CellState> + '_> + '_ {
        (0..self.size.height)
            .map(move |row| (0..self.size.width).map(move |col| self.get(col, row)))
    }
}

#[cfg(test)]
mod test {
    use proptest::prelude::*;

    use super::Viewport;
    use crate::cell::CellState;
    use crate::coord::Coord;
    use crate::coord::Size;
    use crate::grid::Grid;
    use crate::grid::GridError;

    fn viewport(grid: (usize, usize), display: (usize, usize)) -> Viewport {
        Viewport::new(Size::new(grid.0, grid.1), Size::new(display.0, display.1))
    }

    #[test]
    fn cursor_moves_inside_window() {
        let mut vp = viewport((20, 20), (5, 5));

        vp.move_cursor(2, 3);

        assert_eq!(vp.cursor(), Coord::new(2, 3));
        assert_eq!(vp.anchor(), Coord::ORIGIN);
    }

    #[test]
    fn cursor_past_edge_scrolls() {
        let mut vp = viewport((20, 20), (5, 5));

        vp.move_cursor(4, 0);
        assert_eq!(vp.cursor(), Coord::new(4, 0));
        assert_eq!(vp.anchor(), Coord::ORIGIN);

        vp.move_cursor(1, 0);
        assert_eq!(vp.cursor(), Coord::new(4, 0));
        assert_eq!(vp.anchor(), Coord::new(1, 0));

        vp.move_cursor(3, 0);
        assert_eq!(vp.anchor(), Coord::new(4, 0));
        assert_eq!(vp.selected(), Coord::new(8, 0));
    }

    #[test]
    fn cursor_past_origin_scrolls_back() {
        let mut vp = viewport((20, 20), (5, 5));
        vp.move_anchor(6, 6);
        vp.move_cursor(0, 2);

        vp.move_cursor(0, -4);

        assert_eq!(vp.cursor(), Coord::new(0, 0));
        assert_eq!(vp.anchor(), Coord::new(6, 4));
    }

    #[test]
    fn anchor_stops_at_grid_edge() {
        let mut vp = viewport((20, 10), (5, 5));

        vp.move_anchor(100, 100);
        assert_eq!(vp.anchor(), Coord::new(15, 5));

        vp.move_anchor(-1, 0);
        assert_eq!(vp.anchor(), Coord::new(14, 5));

        vp.move_anchor(-100, -100);
        assert_eq!(vp.anchor(), Coord::ORIGIN);
    }

    #[test]
    fn cursor_at_far_corner_selects_last_cell() {
        let mut vp = viewport((20, 10), (5, 5));

        vp.move_cursor(1_000, 1_000);

        assert_eq!(vp.cursor(), Coord::new(4, 4));
        assert_eq!(vp.anchor(), Coord::new(15, 5));
        assert_eq!(vp.selected(), Coord::new(19, 9));
    }

    #[test]
    fn display_larger_than_grid() {
        let mut vp = viewport((3, 2), (10, 10));

        assert_eq!(vp.window(), Size::new(3, 2));

        vp.move_cursor(5, 5);
        assert_eq!(vp.cursor(), Coord::new(2, 1));
        assert_eq!(vp.anchor(), Coord::ORIGIN);
    }

    #[test]
    fn toggle_at_cursor() {
        let mut grid = Grid::new(10, 10).unwrap();
        let mut vp = viewport((10, 10), (4, 4));
        vp.move_anchor(2, 3);
        vp.move_cursor(1, 1);

        assert_eq!(vp.toggle_cell_at_cursor(&mut grid), Ok(CellState::Alive));
        assert_eq!(grid.get(3, 4), CellState::Alive);
        assert_eq!(grid.population(), 1);

        assert_eq!(vp.toggle_cell_at_cursor(&mut grid), Ok(CellState::Dead));
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn toggle_on_smaller_grid_fails() {
        let mut grid = Grid::new(5, 5).unwrap();
        let mut vp = viewport((20, 20), (5, 5));
        vp.move_cursor(1_000, 1_000);

        assert_eq!(
            vp.toggle_cell_at_cursor(&mut grid),
            Err(GridError::OutOfBounds {
                x: 19,
                y: 19,
                width: 5,
                height: 5
            })
        );
        assert_eq!(grid, Grid::new(5, 5).unwrap());
    }

    #[test]
    fn visible_subgrid_follows_anchor() {
        let mut grid = Grid::new(6, 6).unwrap();
        grid.set(3, 2, CellState::Alive).unwrap();

        let mut vp = viewport((6, 6), (3, 2));
        vp.move_anchor(2, 1);

        let visible = vp.visible_subgrid(&grid);
        let rows: Vec<Vec<u8>> = visible
            .rows()
            .map(|row| row.map(CellState::as_count).collect())
            .collect();

        assert_eq!(visible.width(), 3);
        assert_eq!(visible.height(), 2);
        assert_eq!(rows, vec![vec![0, 0, 0], vec![0, 1, 0]]);
    }

    #[test]
    fn resize_reclamps() {
        let mut vp = viewport((20, 20), (10, 10));
        vp.move_anchor(10, 10);
        vp.move_cursor(9, 9);
        assert_eq!(vp.selected(), Coord::new(19, 19));

        vp.resize(Size::new(4, 15));

        assert_eq!(vp.anchor(), Coord::new(10, 5));
        assert_eq!(vp.cursor(), Coord::new(3, 9));
    }

    #[test]
    fn zero_display_is_one_cell() {
        let mut vp = viewport((5, 5), (0, 0));

        assert_eq!(vp.window(), Size::new(1, 1));

        vp.move_cursor(2, 1);
        assert_eq!(vp.cursor(), Coord::ORIGIN);
        assert_eq!(vp.anchor(), Coord::new(2, 1));
    }

    fn delta() -> impl Strategy<Value = (isize, isize)> {
        prop_oneof![
            (-2isize..=2, -2isize..=2),
            (-500isize..500, -500isize..500),
            Just((isize::MAX, isize::MIN)),
        ]
    }

    proptest! {
        #[test]
        fn always_in_range(
            grid in (1usize..40, 1usize..40),
            display in (0usize..50, 0usize..50),
            moves in prop::collection::vec((any::<bool>(), delta()), 0..40),
        ) {
            let mut vp = viewport(grid, display);

            for (scroll, (dx, dy)) in moves {
                if scroll {
                    vp.move_anchor(dx, dy);
                } else {
                    vp.move_cursor(dx, dy);
                }

                let window = vp.window();
                let (anchor, cursor, selected) = (vp.anchor(), vp.cursor(), vp.selected());

                prop_assert!(cursor.x < window.width && cursor.y < window.height);
                prop_assert!(anchor.x <= grid.0 - window.width);
                prop_assert!(anchor.y <= grid.1 - window.height);
                prop_assert!(selected.x < grid.0 && selected.y < grid.1);
            }
        }

        #[test]
        fn toggle_twice_restores(
            grid in (1usize..20, 1usize..20),
            display in (1usize..10, 1usize..10),
            (dx, dy) in delta(),
            seed in any::<u64>(),
        ) {
            let mut g = Grid::new(grid.0, grid.1).unwrap();
            for y in 0..grid.1 {
                for x in 0..grid.0 {
                    let alive = (seed >> ((x + y * grid.0) % 64)) & 1 == 1;
                    g.set(x as isize, y as isize, alive.into()).unwrap();
                }
            }
            let before = g.clone();

            let mut vp = viewport(grid, display);
            vp.move_cursor(dx, dy);

            prop_assert!(vp.toggle_cell_at_cursor(&mut g).is_ok());
            prop_assert_ne!(&g, &before);

            prop_assert!(vp.toggle_cell_at_cursor(&mut g).is_ok());
            prop_assert_eq!(&g, &before);
        }
    }
}
