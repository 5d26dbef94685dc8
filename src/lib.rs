//! Cyclic Cellular Automata
//!
//! A 2D grid of cells cycling through `modulus` states. Each generation a
//! cell advances to the next state when one of its eight neighbours already
//! holds it. The grid is double-buffered, so a step always reads one
//! consistent snapshot.
//!
//! ```
//! use cyclic_automata::Automaton;
//!
//! let mut automaton = Automaton::new(64, 48)?;
//! automaton.randomize_seeded(7);
//! automaton.step();
//! assert_eq!(automaton.cells().height(), 48);
//! # Ok::<(), cyclic_automata::CcaError>(())
//! ```
//!
//! A C ABI for external renderers lives in [`ffi`].

pub mod automaton;
pub mod config;
pub mod error;
pub mod ffi;
pub mod state;

pub use automaton::{Cell, Cells};
pub use config::{CcaConfig, DEFAULT_MODULUS};
pub use error::CcaError;
pub use state::Automaton;

#[cfg(test)]
mod tests;
