//! Error types for automaton construction and cell access.

use thiserror::Error;

/// Errors raised by the automaton engine.
///
/// Every fallible operation validates its inputs before touching a buffer,
/// so an `Err` never leaves the grid partially modified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CcaError {
    /// A grid needs at least one row and one column.
    #[error("grid dimensions must be positive (got {width}x{height})")]
    InvalidDimensions { width: usize, height: usize },

    /// `width * height` does not fit in `usize`.
    #[error("grid of {width}x{height} cells is too large to allocate")]
    GridTooLarge { width: usize, height: usize },

    /// A modulus of zero leaves no valid cell states.
    #[error("modulus must be at least 1 (got {modulus})")]
    InvalidModulus { modulus: u8 },

    #[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
    CellOutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    #[error("cell value {value} is not below the modulus {modulus}")]
    ValueOutOfRange { value: u8, modulus: u8 },
}
