//! Grid indexing, bounds checks, and the read-only cell view.

use std::ops::Index;

/// A single cell state, always below the automaton's modulus.
pub type Cell = u8;

/// Calculate the linear index for a 2D coordinate (row-major).
#[inline]
pub fn index_of(width: usize, x: usize, y: usize) -> usize {
    y * width + x
}

/// Check if coordinates are within grid bounds.
#[inline]
pub fn in_bounds(width: usize, height: usize, x: usize, y: usize) -> bool {
    x < width && y < height
}

/// Offset a coordinate by one step in each axis, or `None` if that leaves the grid.
///
/// Edges are clipped, never wrapped.
#[inline]
pub fn neighbor_at(
    width: usize,
    height: usize,
    x: usize,
    y: usize,
    dx: isize,
    dy: isize,
) -> Option<(usize, usize)> {
    let nx = x.checked_add_signed(dx)?;
    let ny = y.checked_add_signed(dy)?;
    in_bounds(width, height, nx, ny).then_some((nx, ny))
}

/// Read-only view over the active buffer of an automaton.
///
/// Borrowed straight from internal storage; nothing is copied per frame.
#[derive(Clone, Copy)]
pub struct Cells<'a> {
    cells: &'a [Cell],
    width: usize,
    height: usize,
    modulus: u8,
}

impl<'a> Cells<'a> {
    pub(crate) fn new(cells: &'a [Cell], width: usize, height: usize, modulus: u8) -> Self {
        debug_assert_eq!(cells.len(), width * height);
        Self {
            cells,
            width,
            height,
            modulus,
        }
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cell states; every cell is below this value.
    pub fn modulus(&self) -> u8 {
        self.modulus
    }

    /// Cell at column `x`, row `y`, or `None` outside the grid.
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        if in_bounds(self.width, self.height, x, y) {
            Some(self.cells[index_of(self.width, x, y)])
        } else {
            None
        }
    }

    /// One row of the grid.
    ///
    /// # Panics
    /// If `y >= height`.
    pub fn row(&self, y: usize) -> &'a [Cell] {
        assert!(
            y < self.height,
            "row {y} is outside a grid of height {}",
            self.height
        );
        let start = index_of(self.width, 0, y);
        &self.cells[start..start + self.width]
    }

    /// Iterate rows from top (`y = 0`) to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &'a [Cell]> + 'a {
        self.cells.chunks_exact(self.width)
    }

    /// The whole buffer in row-major order.
    pub fn as_slice(&self) -> &'a [Cell] {
        self.cells
    }
}

impl Index<(usize, usize)> for Cells<'_> {
    type Output = Cell;

    /// Index by `(x, y)`. Panics on out-of-range coordinates.
    fn index(&self, (x, y): (usize, usize)) -> &Cell {
        assert!(
            in_bounds(self.width, self.height, x, y),
            "cell ({x}, {y}) is outside the {}x{} grid",
            self.width,
            self.height
        );
        &self.cells[index_of(self.width, x, y)]
    }
}

impl std::fmt::Debug for Cells<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.rows()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_of() {
        // First cell
        assert_eq!(index_of(4, 0, 0), 0);
        // Last cell of a 4x3 grid
        assert_eq!(index_of(4, 3, 2), 11);
        assert_eq!(index_of(4, 1, 0), 1);
        assert_eq!(index_of(4, 0, 1), 4);
    }

    #[test]
    fn test_in_bounds() {
        assert!(in_bounds(4, 3, 0, 0));
        assert!(in_bounds(4, 3, 3, 2));

        assert!(!in_bounds(4, 3, 4, 0));
        assert!(!in_bounds(4, 3, 0, 3));
    }

    #[test]
    fn test_neighbor_at_clips_edges() {
        assert_eq!(neighbor_at(3, 3, 0, 0, -1, 0), None);
        assert_eq!(neighbor_at(3, 3, 0, 0, 0, -1), None);
        assert_eq!(neighbor_at(3, 3, 2, 2, 1, 1), None);
        assert_eq!(neighbor_at(3, 3, 0, 0, 1, 1), Some((1, 1)));
        assert_eq!(neighbor_at(3, 3, 1, 1, -1, -1), Some((0, 0)));
    }

    #[test]
    fn test_cells_view() {
        let data = [0, 1, 2, 3, 4, 5];
        let cells = Cells::new(&data, 3, 2, 8);

        assert_eq!(cells.width(), 3);
        assert_eq!(cells.height(), 2);
        assert_eq!(cells.modulus(), 8);
        assert_eq!(cells.get(2, 1), Some(5));
        assert_eq!(cells.get(3, 0), None);
        assert_eq!(cells[(1, 1)], 4);
        assert_eq!(cells.row(1), &[3, 4, 5]);

        let rows: Vec<&[Cell]> = cells.rows().collect();
        assert_eq!(rows, vec![&[0, 1, 2][..], &[3, 4, 5][..]]);
        assert_eq!(format!("{cells:?}"), "[[0, 1, 2], [3, 4, 5]]");
    }

    #[test]
    #[should_panic(expected = "outside the 3x2 grid")]
    fn test_index_out_of_bounds_panics() {
        let data = [0; 6];
        let cells = Cells::new(&data, 3, 2, 8);
        let _ = cells[(3, 0)];
    }
}
