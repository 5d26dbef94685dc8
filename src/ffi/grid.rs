//! Cell access, seeding, and stepping.

use crate::error::CcaError;
use crate::state::Automaton;

/// `cca_set_cell` succeeded.
pub const CCA_OK: i32 = 0;
/// A null automaton pointer was passed.
pub const CCA_ERR_NULL: i32 = 1;
/// The coordinate lies outside the grid.
pub const CCA_ERR_OUT_OF_BOUNDS: i32 = 2;
/// The value is not below the modulus.
pub const CCA_ERR_VALUE: i32 = 3;

/// Sets a cell in the current generation.
///
/// # Safety
/// - `ptr` must be a valid pointer to an Automaton, or null
///
/// # Returns
/// `CCA_OK`, or one of the `CCA_ERR_*` codes. The grid is unchanged on error.
#[no_mangle]
pub unsafe extern "C" fn cca_set_cell(ptr: *mut Automaton, x: u32, y: u32, value: u8) -> i32 {
    if ptr.is_null() {
        return CCA_ERR_NULL;
    }

    let automaton = &mut *ptr;
    match automaton.set(x as usize, y as usize, value) {
        Ok(()) => CCA_OK,
        Err(CcaError::ValueOutOfRange { .. }) => CCA_ERR_VALUE,
        Err(_) => CCA_ERR_OUT_OF_BOUNDS,
    }
}

/// Gets a cell from the current generation.
///
/// # Safety
/// - `ptr` must be a valid pointer to an Automaton, or null
///
/// # Returns
/// The cell value, or 0 if out of bounds or ptr is null.
#[no_mangle]
pub unsafe extern "C" fn cca_get_cell(ptr: *const Automaton, x: u32, y: u32) -> u8 {
    if ptr.is_null() {
        return 0;
    }

    (*ptr).get(x as usize, y as usize).unwrap_or(0)
}

/// Read-only pointer to the current generation, row-major.
///
/// Writes the cell count to `out_len` when it is non-null. The pointer stays
/// valid until the next call that mutates the automaton and must not be
/// written through.
///
/// # Safety
/// - `ptr` must be a valid pointer to an Automaton, or null
/// - `out_len` must be null or point to writable memory for a `usize`
#[no_mangle]
pub unsafe extern "C" fn cca_cells(ptr: *const Automaton, out_len: *mut usize) -> *const u8 {
    if ptr.is_null() {
        return std::ptr::null();
    }

    let cells = (*ptr).cells().as_slice();
    if !out_len.is_null() {
        *out_len = cells.len();
    }
    cells.as_ptr()
}

/// Resets every cell of the current generation to 0.
///
/// # Safety
/// - `ptr` must be a valid pointer to an Automaton, or null
#[no_mangle]
pub unsafe extern "C" fn cca_clear(ptr: *mut Automaton) {
    if ptr.is_null() {
        return;
    }

    (*ptr).clear();
}

/// Fills the current generation with seeded random states.
///
/// # Safety
/// - `ptr` must be a valid pointer to an Automaton, or null
#[no_mangle]
pub unsafe extern "C" fn cca_randomize(ptr: *mut Automaton, seed: u64) {
    if ptr.is_null() {
        return;
    }

    (*ptr).randomize_seeded(seed);
}

/// Advances the automaton by one generation.
///
/// # Safety
/// - `ptr` must be a valid pointer to an Automaton, or null
///
/// # Returns
/// The number of cells that changed, or 0 if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn cca_step(ptr: *mut Automaton) -> u64 {
    if ptr.is_null() {
        return 0;
    }

    (*ptr).step() as u64
}
