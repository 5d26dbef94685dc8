//! Cyclic cellular automaton stepping.
//!
//! A cell advances to `(v + 1) % modulus` when any of its Moore neighbours
//! (8 cells, clipped at the edges) already holds that value. All reads come
//! from the current generation and all writes go to the next one.

use super::grid::{in_bounds, index_of, neighbor_at, Cell};

/// Next state in the cycle after `value`.
#[inline]
pub fn next_state(value: Cell, modulus: u8) -> Cell {
    ((u16::from(value) + 1) % u16::from(modulus)) as Cell
}

/// Check whether any in-bounds neighbour of `(x, y)` holds `next`.
///
/// # Panics
/// If `cells` is not exactly `width * height` long, or `(x, y)` is outside the grid.
pub fn has_infectious_neighbor(
    cells: &[Cell],
    width: usize,
    height: usize,
    x: usize,
    y: usize,
    next: Cell,
) -> bool {
    assert_eq!(cells.len(), width * height, "grid buffer does not match {width}x{height}");
    assert!(
        in_bounds(width, height, x, y),
        "cell ({x}, {y}) is outside the {width}x{height} grid"
    );

    for dy in -1..=1 {
        for dx in -1..=1 {
            // Skip the center cell
            if dx == 0 && dy == 0 {
                continue;
            }

            if let Some((nx, ny)) = neighbor_at(width, height, x, y, dx, dy) {
                if cells[index_of(width, nx, ny)] == next {
                    return true;
                }
            }
        }
    }

    false
}

/// Compute the next generation of `current` into `next`.
///
/// Returns the number of cells that advanced.
///
/// # Panics
/// If either buffer is not exactly `width * height` long.
pub fn step_into(
    current: &[Cell],
    next: &mut [Cell],
    width: usize,
    height: usize,
    modulus: u8,
) -> usize {
    assert_eq!(
        current.len(),
        width * height,
        "current buffer does not match {width}x{height}"
    );
    assert_eq!(
        next.len(),
        current.len(),
        "next buffer does not match current buffer"
    );

    let mut advanced = 0;

    for y in 0..height {
        for x in 0..width {
            let idx = index_of(width, x, y);
            let value = current[idx];
            let candidate = next_state(value, modulus);

            next[idx] = if has_infectious_neighbor(current, width, height, x, y, candidate) {
                candidate
            } else {
                value
            };

            if next[idx] != value {
                advanced += 1;
            }
        }
    }

    advanced
}
