use std::ops::{Index, IndexMut};

use bevy::prelude::*;

/// Horizontal distance between adjacent cell centres in a row (`√3`).
pub const WIDTH_MULT: f32 = 1.732_050_8;
/// Cell height; rows are `HEIGHT_MULT * 0.75` apart.
pub const HEIGHT_MULT: f32 = 2.0;
/// Vertical distance between adjacent rows.
pub const ROW_PITCH: f32 = HEIGHT_MULT * 0.75;

/// One of the six hex neighbours.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Reflect)]
pub enum HexDirection {
    /// `(+1, 0)`
    #[default]
    East,
    /// `(+1, +1)`
    NorthEast,
    /// `(0, +1)`
    NorthWest,
    /// `(-1, 0)`
    West,
    /// `(0, -1)`
    SouthWest,
    /// `(+1, -1)`
    SouthEast,
}

impl HexDirection {
    /// All directions, in offset-table order.
    pub const ALL: [HexDirection; 6] = [
        HexDirection::East,
        HexDirection::NorthEast,
        HexDirection::NorthWest,
        HexDirection::West,
        HexDirection::SouthWest,
        HexDirection::SouthEast,
    ];

    /// Fixed `(dx, dy)` step in cell space.
    pub const fn offset(self) -> IVec2 {
        match self {
            HexDirection::East => IVec2::new(1, 0),
            HexDirection::NorthEast => IVec2::new(1, 1),
            HexDirection::NorthWest => IVec2::new(0, 1),
            HexDirection::West => IVec2::new(-1, 0),
            HexDirection::SouthWest => IVec2::new(0, -1),
            HexDirection::SouthEast => IVec2::new(1, -1),
        }
    }

    /// Whether the step moves towards lower column indices.
    pub const fn is_westward(self) -> bool {
        self.offset().x < 0
    }

    /// Whether the step moves towards lower row indices.
    pub const fn is_southward(self) -> bool {
        self.offset().y < 0
    }
}

/// Rectangular hex container that wraps horizontally.
///
/// Columns are taken modulo the width, so `x = -1` is the last column.
/// Rows are bounded: indexing a row outside `0..height` panics.
#[derive(Clone, Debug, PartialEq)]
pub struct HexGrid<T> {
    width: i32,
    height: i32,
    cells: Vec<T>,
}

impl<T: Clone + Default> HexGrid<T> {
    /// A `width × height` grid with every cell set to `T::default()`.
    pub fn new(width: u32, height: u32) -> Self {
        let len = width as usize * height as usize;
        Self {
            width: width as i32,
            height: height as i32,
            cells: vec![T::default(); len],
        }
    }
}

impl<T> HexGrid<T> {
    /// Number of columns.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Whether `y` names an existing row.
    pub fn contains_row(&self, y: i32) -> bool {
        (0..self.height).contains(&y)
    }

    /// Wraps a column index into `0..width`.
    pub fn wrap_x(&self, x: i32) -> i32 {
        x.rem_euclid(self.width)
    }

    fn slot(&self, x: i32, y: i32) -> usize {
        assert!(
            self.contains_row(y),
            "row {y} out of range 0..{}",
            self.height
        );
        (y * self.width + self.wrap_x(x)) as usize
    }

    /// Cell at `(x, y)`; `x` wraps, `y` must be in range.
    pub fn get(&self, x: i32, y: i32) -> &T {
        &self.cells[self.slot(x, y)]
    }

    /// Cell at `(x, y)`, or `None` when the row is out of range.
    pub fn try_get(&self, x: i32, y: i32) -> Option<&T> {
        self.contains_row(y).then(|| self.get(x, y))
    }

    /// Overwrites the cell at `(x, y)`; `x` wraps, `y` must be in range.
    pub fn set(&mut self, x: i32, y: i32, value: T) {
        let slot = self.slot(x, y);
        self.cells[slot] = value;
    }

    /// Raw neighbour coordinates; `x` is not wrapped.
    pub fn neighbor(&self, x: i32, y: i32, direction: HexDirection) -> IVec2 {
        IVec2::new(x, y) + direction.offset()
    }

    /// Cell centre before recentring, odd rows shifted by half a cell.
    pub fn center(&self, x: i32, y: i32) -> Vec2 {
        cell_center(x, y)
    }

    /// Offset that recentres the whole layout on the origin.
    pub fn grid_center(&self) -> Vec2 {
        Vec2::new(
            self.width as f32 * WIDTH_MULT / -2.0,
            self.height as f32 * ROW_PITCH / -2.0,
        )
    }

    /// Iterates `(x, y, cell)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (i32, i32, &T)> {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (i as i32 % width, i as i32 / width, cell))
    }
}

impl<T> Index<(i32, i32)> for HexGrid<T> {
    type Output = T;

    fn index(&self, (x, y): (i32, i32)) -> &T {
        self.get(x, y)
    }
}

impl<T> IndexMut<(i32, i32)> for HexGrid<T> {
    fn index_mut(&mut self, (x, y): (i32, i32)) -> &mut T {
        let slot = self.slot(x, y);
        &mut self.cells[slot]
    }
}

/// Centre of cell `(x, y)` in the unrecentred layout.
pub fn cell_center(x: i32, y: i32) -> Vec2 {
    let shift = if y % 2 == 0 { 0.0 } else { WIDTH_MULT * 0.5 };
    Vec2::new(x as f32 * WIDTH_MULT + shift, y as f32 * ROW_PITCH)
}
