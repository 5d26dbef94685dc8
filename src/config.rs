//! Construction parameters for an automaton.

use crate::error::CcaError;

/// Number of cell states used when no modulus is given.
pub const DEFAULT_MODULUS: u8 = 8;

/// Grid dimensions and state count, fixed for the lifetime of an automaton.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CcaConfig {
    /// Number of columns.
    pub width: usize,
    /// Number of rows.
    pub height: usize,
    /// Number of distinct cell states; cells hold values in `0..modulus`.
    pub modulus: u8,
}

impl CcaConfig {
    /// Config for a `width` x `height` grid with [`DEFAULT_MODULUS`] states.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            modulus: DEFAULT_MODULUS,
        }
    }

    /// Set the number of cell states.
    pub fn modulus(mut self, modulus: u8) -> Self {
        self.modulus = modulus;
        self
    }

    /// Check the config and return the total cell count.
    pub fn validate(&self) -> Result<usize, CcaError> {
        if self.width == 0 || self.height == 0 {
            return Err(CcaError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.modulus == 0 {
            return Err(CcaError::InvalidModulus {
                modulus: self.modulus,
            });
        }
        self.width
            .checked_mul(self.height)
            .ok_or(CcaError::GridTooLarge {
                width: self.width,
                height: self.height,
            })
    }
}
