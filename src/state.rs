//! The automaton engine: double-buffered grid plus generation bookkeeping.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::automaton::grid::{in_bounds, index_of, Cell, Cells};
use crate::automaton::stepping::step_into;
use crate::config::CcaConfig;
use crate::error::CcaError;

/// A cyclic cellular automaton over a fixed-size 2D grid.
///
/// Two buffers alternate roles: the active one is readable through
/// [`Automaton::cells`], the other is overwritten by the next
/// [`Automaton::step`] and then becomes active. No data is copied on swap.
#[derive(Debug, Clone)]
pub struct Automaton {
    width: usize,
    height: usize,
    modulus: u8,
    buffers: [Vec<Cell>; 2],
    active: usize,
    generation: u64,
}

impl Automaton {
    /// Create a `width` x `height` automaton with the default modulus.
    /// All cells start at 0.
    pub fn new(width: usize, height: usize) -> Result<Self, CcaError> {
        Self::with_config(CcaConfig::new(width, height))
    }

    /// Create an automaton from a validated config. All cells start at 0.
    pub fn with_config(config: CcaConfig) -> Result<Self, CcaError> {
        let size = config.validate()?;

        tracing::debug!(
            width = config.width,
            height = config.height,
            modulus = config.modulus,
            "created cyclic automaton"
        );

        Ok(Self {
            width: config.width,
            height: config.height,
            modulus: config.modulus,
            buffers: [vec![0; size], vec![0; size]],
            active: 0,
            generation: 0,
        })
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

    /// Steps taken since construction or the last clear/randomize.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Which of the two buffers is currently readable (0 or 1).
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Read-only view of the current generation.
    pub fn cells(&self) -> Cells<'_> {
        Cells::new(
            &self.buffers[self.active],
            self.width,
            self.height,
            self.modulus,
        )
    }

    /// Read a single cell.
    pub fn get(&self, x: usize, y: usize) -> Result<Cell, CcaError> {
        self.check_bounds(x, y)?;
        Ok(self.buffers[self.active][index_of(self.width, x, y)])
    }

    /// Write a single cell of the current generation.
    ///
    /// Both the coordinate and the value are checked before anything is written.
    pub fn set(&mut self, x: usize, y: usize, value: Cell) -> Result<(), CcaError> {
        self.check_bounds(x, y)?;
        if value >= self.modulus {
            return Err(CcaError::ValueOutOfRange {
                value,
                modulus: self.modulus,
            });
        }

        let idx = index_of(self.width, x, y);
        self.buffers[self.active][idx] = value;
        Ok(())
    }

    /// Reset every cell of the active buffer to 0.
    pub fn clear(&mut self) {
        self.buffers[self.active].fill(0);
        self.generation = 0;
        tracing::debug!("cleared automaton");
    }

    /// Fill the active buffer from the thread-local RNG.
    pub fn randomize(&mut self) {
        self.randomize_with(&mut rand::rng());
    }

    /// Fill the active buffer from a seeded ChaCha8 RNG.
    ///
    /// The same seed always produces the same grid.
    pub fn randomize_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.randomize_with(&mut rng);
    }

    /// Fill the active buffer with values drawn uniformly from `0..modulus`.
    pub fn randomize_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let modulus = self.modulus;
        for cell in self.buffers[self.active].iter_mut() {
            *cell = rng.random_range(0..modulus);
        }
        self.generation = 0;
        tracing::debug!(modulus, "randomized automaton");
    }

    /// Advance one generation.
    ///
    /// Returns the number of cells that changed.
    pub fn step(&mut self) -> usize {
        let back = 1 - self.active;
        let [a, b] = &mut self.buffers;
        let (current, next) = if self.active == 0 { (a, b) } else { (b, a) };

        let advanced = step_into(current, next, self.width, self.height, self.modulus);

        self.active = back;
        self.generation += 1;
        tracing::trace!(generation = self.generation, advanced, "stepped automaton");
        advanced
    }

    /// Advance `n` generations, returning the total number of cell changes.
    pub fn step_n(&mut self, n: usize) -> usize {
        (0..n).map(|_| self.step()).sum()
    }

    fn check_bounds(&self, x: usize, y: usize) -> Result<(), CcaError> {
        if in_bounds(self.width, self.height, x, y) {
            Ok(())
        } else {
            Err(CcaError::CellOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }
}
