//! C FFI layer for external renderers.
//!
//! All functions are marked with `#[no_mangle]` and use `extern "C"`.
//!
//! The actual logic lives in [`crate::state::Automaton`]. These functions are
//! thin wrappers that handle null checks and C-to-Rust conversions.

pub mod grid;
pub mod lifecycle;

pub use grid::{
    cca_cells, cca_clear, cca_get_cell, cca_randomize, cca_set_cell, cca_step, CCA_ERR_NULL,
    CCA_ERR_OUT_OF_BOUNDS, CCA_ERR_VALUE, CCA_OK,
};
pub use lifecycle::{cca_create, cca_destroy, cca_get_generation, cca_height, cca_width};
