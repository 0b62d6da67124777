//! Partition store: which cells are bridges and which are still empty.

use indexmap::IndexSet;
use orth_core::{Coord, GridError};
use orth_space::Orthotope;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use smallvec::SmallVec;
use std::fmt;

/// Occupancy flag of a single cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CellState {
    /// Not yet built on.
    Vacant = 0,
    /// Holds a bridge piece.
    Bridge = 1,
}

/// An orthotope whose cells are each either a bridge or empty.
///
/// # Storage
///
/// Cell flags live in a flat array indexed by canonical rank. Empty cells
/// are additionally indexed in an `IndexSet` of ranks, which gives O(1)
/// uniform random selection (pick by position) and O(1) removal.
///
/// The partition invariant is that a cell is flagged [`CellState::Vacant`]
/// iff its rank is in the empty index. A bridge whose rank is still indexed
/// is "in both sets"; a vacant cell missing from the index is "in neither".
/// Every lookup checks this and reports a violation as
/// [`GridError::CorruptState`] instead of guessing.
///
/// # Randomness
///
/// The grid owns a ChaCha8 RNG for [`occupy_random`](Self::occupy_random).
/// [`with_seed`](Self::with_seed) makes the whole placement sequence
/// reproducible; [`new`](Self::new) seeds from the thread RNG.
pub struct Grid {
    shape: Orthotope,
    cells: Vec<CellState>,
    vacant: IndexSet<usize>,
    rng: ChaCha8Rng,
}

impl Grid {
    /// Create a grid with every cell empty, seeding the RNG from entropy.
    ///
    /// An empty `lengths` slice gives the 0-dimensional grid: no cells, both
    /// partition sets empty, every coordinate out of bounds.
    ///
    /// Returns `Err(GridError::InvalidDimensions)` if any length is not
    /// positive.
    pub fn new(lengths: &[i32]) -> Result<Self, GridError> {
        Self::with_rng(lengths, ChaCha8Rng::from_rng(&mut rand::rng()))
    }

    /// Create a grid with every cell empty and a deterministic RNG.
    pub fn with_seed(lengths: &[i32], seed: u64) -> Result<Self, GridError> {
        Self::with_rng(lengths, ChaCha8Rng::seed_from_u64(seed))
    }

    fn with_rng(lengths: &[i32], rng: ChaCha8Rng) -> Result<Self, GridError> {
        let shape = Orthotope::new(lengths)?;
        let n = shape.cell_count();
        Ok(Self {
            shape,
            cells: vec![CellState::Vacant; n],
            vacant: (0..n).collect(),
            rng,
        })
    }

    /// The cell space of this grid.
    pub fn shape(&self) -> &Orthotope {
        &self.shape
    }

    /// Per-axis lengths, axis 0 first.
    pub fn lengths(&self) -> &[i32] {
        self.shape.lengths()
    }

    /// Number of axes.
    pub fn ndim(&self) -> usize {
        self.shape.ndim()
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.shape.cell_count()
    }

    /// Number of empty cells.
    pub fn empty_count(&self) -> usize {
        self.vacant.len()
    }

    /// Number of bridge cells.
    pub fn occupied_count(&self) -> usize {
        self.cell_count() - self.empty_count()
    }

    /// Fraction of cells holding a bridge, in `[0, 1]` (0 for a grid with no cells).
    pub fn occupied_fraction(&self) -> f64 {
        match self.cell_count() {
            0 => 0.0,
            n => self.occupied_count() as f64 / n as f64,
        }
    }

    /// Place a bridge at `coord`.
    ///
    /// Placing on a cell that already holds a bridge is a no-op.
    ///
    /// Returns `Err(GridError::OutOfBounds)`, leaving the grid untouched, if
    /// `coord` has the wrong arity or lies outside the grid.
    pub fn occupy(&mut self, coord: &[i32]) -> Result<(), GridError> {
        let rank = self.shape.check_bounds(coord)?;
        self.cells[rank] = CellState::Bridge;
        self.vacant.swap_remove(&rank);
        Ok(())
    }

    /// Place a bridge on an empty cell chosen uniformly at random, using the
    /// grid's own RNG, and return its coordinate.
    ///
    /// Returns `Err(GridError::Exhausted)`, leaving the grid untouched, if
    /// every cell already holds a bridge.
    pub fn occupy_random(&mut self) -> Result<Coord, GridError> {
        self.ensure_vacancy()?;
        let pick = self.rng.random_range(0..self.vacant.len());
        self.occupy_vacant_at(pick)
    }

    /// Like [`occupy_random`](Self::occupy_random), drawing from `rng`.
    pub fn occupy_random_with<R: Rng>(&mut self, rng: &mut R) -> Result<Coord, GridError> {
        self.ensure_vacancy()?;
        let pick = rng.random_range(0..self.vacant.len());
        self.occupy_vacant_at(pick)
    }

    fn ensure_vacancy(&self) -> Result<(), GridError> {
        if self.vacant.is_empty() {
            return Err(GridError::Exhausted {
                cell_count: self.cell_count(),
            });
        }
        Ok(())
    }

    /// Move the `pick`-th entry of the empty index into the bridge set.
    fn occupy_vacant_at(&mut self, pick: usize) -> Result<Coord, GridError> {
        let rank = match self.vacant.get_index(pick) {
            Some(&rank) => rank,
            None => {
                return Err(GridError::Exhausted {
                    cell_count: self.cell_count(),
                })
            }
        };
        let coord = self.shape.coord_of(rank).ok_or_else(|| GridError::CorruptState {
            coord: Coord::new(),
            reason: format!("empty set holds rank {rank} outside the grid"),
        })?;
        if self.cells[rank] == CellState::Bridge {
            return Err(GridError::CorruptState {
                coord,
                reason: "cell is in both the occupied and empty sets".to_string(),
            });
        }
        self.vacant.swap_remove_index(pick);
        self.cells[rank] = CellState::Bridge;
        Ok(coord)
    }

    /// Whether the cell at `coord` holds a bridge.
    ///
    /// Returns `Err(GridError::OutOfBounds)` for an invalid coordinate and
    /// `Err(GridError::CorruptState)` if the cell is in both partition sets
    /// or in neither.
    pub fn is_occupied(&self, coord: &[i32]) -> Result<bool, GridError> {
        let rank = self.shape.check_bounds(coord)?;
        self.membership(rank)
    }

    /// In-bounds axis-aligned neighbours of `coord`, each checked to sit in
    /// exactly one partition set.
    ///
    /// Returns `Err(GridError::OutOfBounds)` for an invalid coordinate and
    /// `Err(GridError::CorruptState)` if any neighbour breaks the partition
    /// invariant.
    pub fn neighbours(&self, coord: &[i32]) -> Result<SmallVec<[Coord; 8]>, GridError> {
        let neighbours = self.shape.neighbours(coord)?;
        for nb in &neighbours {
            let rank = self.shape.check_bounds(nb)?;
            self.membership(rank)?;
        }
        Ok(neighbours)
    }

    /// Coordinates of every bridge, in canonical order.
    pub fn occupied_coords(&self) -> Vec<Coord> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, state)| **state == CellState::Bridge)
            .filter_map(|(rank, _)| self.shape.coord_of(rank))
            .collect()
    }

    /// Sweep every cell and the empty index for partition violations.
    ///
    /// Checks that each cell is in exactly one set, that the empty index
    /// names only cells of this grid, and that the two set sizes add up to
    /// the cell count.
    pub fn check_invariants(&self) -> Result<(), GridError> {
        let n = self.cell_count();
        if self.cells.len() != n {
            return Err(GridError::CorruptState {
                coord: Coord::new(),
                reason: format!("flag array holds {} cells, grid has {n}", self.cells.len()),
            });
        }
        if let Some(&rank) = self.vacant.iter().find(|&&rank| rank >= n) {
            return Err(GridError::CorruptState {
                coord: Coord::new(),
                reason: format!("empty set holds rank {rank} outside the grid"),
            });
        }
        let mut occupied = 0usize;
        for rank in 0..n {
            if self.membership(rank)? {
                occupied += 1;
            }
        }
        if occupied + self.vacant.len() != n {
            return Err(GridError::CorruptState {
                coord: Coord::new(),
                reason: format!(
                    "{occupied} occupied + {} empty != {n} cells",
                    self.vacant.len()
                ),
            });
        }
        Ok(())
    }

    /// Partition membership of the cell at `rank`: `Ok(true)` for a bridge,
    /// `Ok(false)` for an empty cell.
    pub(crate) fn membership(&self, rank: usize) -> Result<bool, GridError> {
        let listed = self.vacant.contains(&rank);
        match (self.cells[rank], listed) {
            (CellState::Bridge, false) => Ok(true),
            (CellState::Vacant, true) => Ok(false),
            (CellState::Bridge, true) => Err(self.corrupt(
                rank,
                "cell is in both the occupied and empty sets",
            )),
            (CellState::Vacant, false) => Err(self.corrupt(
                rank,
                "cell is in neither the occupied nor the empty set",
            )),
        }
    }

    /// Raw flag of the cell at `rank`, without the partition check.
    pub(crate) fn flag(&self, rank: usize) -> CellState {
        self.cells[rank]
    }

    fn corrupt(&self, rank: usize, reason: &str) -> GridError {
        GridError::CorruptState {
            coord: self.shape.coord_of(rank).unwrap_or_default(),
            reason: reason.to_string(),
        }
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grid")
            .field("lengths", &self.shape.lengths())
            .field("occupied", &self.occupied_count())
            .field("empty", &self.empty_count())
            .finish()
    }
}

#[cfg(test)]
impl Grid {
    /// Flag a cell as a bridge without removing it from the empty index.
    pub(crate) fn corrupt_into_both(&mut self, coord: &[i32]) {
        let rank = self.shape.rank(coord).unwrap();
        self.cells[rank] = CellState::Bridge;
    }

    /// Drop a cell from the empty index while leaving it flagged vacant.
    pub(crate) fn corrupt_into_neither(&mut self, coord: &[i32]) {
        let rank = self.shape.rank(coord).unwrap();
        self.vacant.swap_remove(&rank);
    }
}
