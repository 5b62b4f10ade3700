//! Normalized polyomino representation.
//!
//! A [`Shape`] stores its cells translated so the minimum x and minimum y
//! are both zero, sorted by (x, y) and free of duplicates. The sorted cell
//! list is the shape's key: two shapes are equal exactly when their cell
//! lists are equal, and shapes order lexicographically by that list.

use serde::{Deserialize, Serialize};

/// A grid cell. Orders by x first, then y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The four edge-adjacent cells.
    #[inline]
    pub fn neighbors(self) -> [Cell; 4] {
        [
            Cell::new(self.x, self.y + 1),
            Cell::new(self.x, self.y - 1),
            Cell::new(self.x + 1, self.y),
            Cell::new(self.x - 1, self.y),
        ]
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// An immutable, normalized set of cells.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "Vec<Cell>", into = "Vec<Cell>")]
pub struct Shape {
    cells: Vec<Cell>,
}

impl Shape {
    /// Build a shape from arbitrary cells. Translates to the origin, sorts
    /// and drops duplicates.
    pub fn new(cells: impl IntoIterator<Item = Cell>) -> Self {
        let mut cells: Vec<Cell> = cells.into_iter().collect();
        normalize(&mut cells);
        Self { cells }
    }

    /// The single cell at the origin.
    pub fn monomino() -> Self {
        Self {
            cells: vec![Cell::new(0, 0)],
        }
    }

    /// Normalized cells in (x, y) order.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of cells.
    #[inline]
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Membership test on the normalized coordinates.
    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.binary_search(&cell).is_ok()
    }

    /// Bounding box width (number of columns).
    pub fn width(&self) -> usize {
        self.cells.iter().map(|c| c.x + 1).max().unwrap_or(0) as usize
    }

    /// Bounding box height (number of rows).
    pub fn height(&self) -> usize {
        self.cells.iter().map(|c| c.y + 1).max().unwrap_or(0) as usize
    }

    /// 90° clockwise rotation: (x, y) -> (y, -x).
    pub fn rotate90(&self) -> Self {
        self.map_cells(|c| Cell::new(c.y, -c.x))
    }

    /// Horizontal mirror: (x, y) -> (-x, y).
    pub fn reflect_horizontal(&self) -> Self {
        self.map_cells(|c| Cell::new(-c.x, c.y))
    }

    /// This shape plus one extra cell, re-normalized.
    pub fn with_cell(&self, cell: Cell) -> Self {
        let mut cells = Vec::with_capacity(self.cells.len() + 1);
        cells.extend_from_slice(&self.cells);
        cells.push(cell);
        normalize(&mut cells);
        Self { cells }
    }

    pub(crate) fn map_cells(&self, f: impl Fn(Cell) -> Cell) -> Self {
        let mut cells: Vec<Cell> = self.cells.iter().map(|&c| f(c)).collect();
        normalize(&mut cells);
        Self { cells }
    }

    /// True if every cell can reach every other through edge-adjacent
    /// cells of the shape. Empty and single-cell shapes are connected.
    pub fn is_connected(&self) -> bool {
        let Some(&start) = self.cells.first() else {
            return true;
        };

        let mut seen = vec![false; self.cells.len()];
        let mut stack = vec![start];
        seen[0] = true;
        let mut reached = 1;

        while let Some(cell) = stack.pop() {
            for n in cell.neighbors() {
                if let Ok(idx) = self.cells.binary_search(&n)
                    && !seen[idx]
                {
                    seen[idx] = true;
                    reached += 1;
                    stack.push(n);
                }
            }
        }

        reached == self.cells.len()
    }
}

impl From<Vec<Cell>> for Shape {
    fn from(cells: Vec<Cell>) -> Self {
        Self::new(cells)
    }
}

impl From<Shape> for Vec<Cell> {
    fn from(shape: Shape) -> Self {
        shape.cells
    }
}

/// Translate so min x and min y are zero, then sort and dedup.
fn normalize(cells: &mut Vec<Cell>) {
    let Some(min_x) = cells.iter().map(|c| c.x).min() else {
        return;
    };
    let min_y = cells.iter().map(|c| c.y).min().unwrap_or(0);

    for cell in cells.iter_mut() {
        cell.x -= min_x;
        cell.y -= min_y;
    }

    cells.sort_unstable();
    cells.dedup();
}
