//! Automaton creation, destruction, and metadata queries.

use crate::config::CcaConfig;
use crate::state::Automaton;

/// Creates a new automaton and returns an opaque pointer.
///
/// # Returns
/// A pointer to a new Automaton with all cells at 0, or null if the
/// dimensions or modulus are invalid. A non-null pointer must eventually be
/// freed with `cca_destroy()`.
#[no_mangle]
pub extern "C" fn cca_create(width: u32, height: u32, modulus: u8) -> *mut Automaton {
    let config = CcaConfig::new(width as usize, height as usize).modulus(modulus);
    match Automaton::with_config(config) {
        Ok(automaton) => Box::into_raw(Box::new(automaton)),
        Err(err) => {
            tracing::debug!(%err, "cca_create rejected config");
            std::ptr::null_mut()
        }
    }
}

/// Destroys an automaton and frees its memory.
///
/// # Safety
/// - `ptr` must be a valid pointer returned by `cca_create()`, or null
/// - `ptr` must not be used after this call
#[no_mangle]
pub unsafe extern "C" fn cca_destroy(ptr: *mut Automaton) {
    if !ptr.is_null() {
        drop(Box::from_raw(ptr));
    }
}

/// Gets the generation counter.
///
/// # Safety
/// - `ptr` must be a valid pointer to an Automaton, or null
///
/// # Returns
/// The generation counter, or 0 if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn cca_get_generation(ptr: *const Automaton) -> u64 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).generation()
}

/// Grid width in cells, or 0 if ptr is null. Saturates at `u32::MAX`.
///
/// # Safety
/// - `ptr` must be a valid pointer to an Automaton, or null
#[no_mangle]
pub unsafe extern "C" fn cca_width(ptr: *const Automaton) -> u32 {
    if ptr.is_null() {
        return 0;
    }
    saturating_u32((*ptr).width())
}

/// Grid height in cells, or 0 if ptr is null. Saturates at `u32::MAX`.
///
/// # Safety
/// - `ptr` must be a valid pointer to an Automaton, or null
#[no_mangle]
pub unsafe extern "C" fn cca_height(ptr: *const Automaton) -> u32 {
    if ptr.is_null() {
        return 0;
    }
    saturating_u32((*ptr).height())
}

fn saturating_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
