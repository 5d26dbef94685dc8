//! Core automaton logic and grid operations.
//!
//! This module contains the index math, the infection rule, and the
//! generation step. [`crate::state::Automaton`] owns the buffers and calls
//! into these functions; the FFI layer in `ffi/` wraps the automaton.

pub mod grid;
pub mod stepping;

pub use grid::{in_bounds, index_of, neighbor_at, Cell, Cells};
pub use stepping::{has_infectious_neighbor, next_state, step_into};
