use core::fmt::Debug;
use std::ops::Add;

/// A position on the grid, or relative to the viewport.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

/// A number of cells along each axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Size {
    pub width: usize,
    pub height: usize,
}

impl Coord {
    pub const ORIGIN: Coord = Coord { x: 0, y: 0 };

    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Clamp each component to `[0, max]` of the matching component in `max`.
    pub fn clamp_to(&self, max: &Self) -> Self {
        Coord {
            x: self.x.min(max.x),
            y: self.y.min(max.y),
        }
    }
}

impl Add for Coord {
    type Output = Coord;

    fn add(self, other: Coord) -> Coord {
        Coord {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Debug for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Size {
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Component-wise minimum of two sizes
    pub fn min(&self, other: &Self) -> Self {
        Size {
            width: self.width.min(other.width),
            height: self.height.min(other.height),
        }
    }

    pub fn contains(&self, x: isize, y: isize) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }
}

/// Offsets `pos` by `delta` and clamps the result to `[0, max]`.
///
/// Returns the clamped position, along with the overflow: how far past the nearest bound the
/// unclamped target landed. The overflow is negative below `0` and positive above `max`.
pub fn offset_clamped(pos: usize, delta: isize, max: usize) -> (usize, isize) {
    let target = pos as i128 + delta as i128;

    if target < 0 {
        (0, clamp_isize(target))
    } else if target > max as i128 {
        (max, clamp_isize(target - max as i128))
    } else {
        (target as usize, 0)
    }
}

fn clamp_isize(n: i128) -> isize {
    n.clamp(isize::MIN as i128, isize::MAX as i128) as isize
}
