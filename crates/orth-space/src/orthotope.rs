//! N-dimensional orthotope with a 2·D axis-aligned neighbourhood.

use orth_core::{Coord, GridError};
use smallvec::SmallVec;

/// A bounded, axis-aligned box of integer cells in any number of dimensions.
///
/// Cell coordinates are `[c_0, c_1, ..., c_{D-1}]` with
/// `0 <= c_i < lengths[i]`. Cells are also identified by their *rank*: the
/// position in canonical row-major order, axis 0 slowest. Two cells are
/// adjacent iff they differ by one along exactly one axis; there is no
/// wrap-around at the faces.
///
/// An orthotope with no axes is the 0-dimensional space. It has zero cells
/// and every coordinate, the empty one included, is out of bounds.
///
/// # Examples
///
/// ```
/// use orth_space::Orthotope;
///
/// let shape = Orthotope::new(&[3, 4]).unwrap();
/// assert_eq!(shape.cell_count(), 12);
/// assert_eq!(shape.rank(&[1, 2]), Some(6));
///
/// // Interior cell: four neighbours. Corner: two.
/// assert_eq!(shape.neighbours(&[1, 2]).unwrap().len(), 4);
/// assert_eq!(shape.neighbours(&[0, 0]).unwrap().len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Orthotope {
    lengths: Vec<i32>,
    /// `strides[i]` = product of `lengths[j]` for `j > i`.
    strides: Vec<usize>,
    cell_count: usize,
}

impl Orthotope {
    /// Create an orthotope with the given per-axis lengths.
    ///
    /// Returns `Err(GridError::InvalidDimensions)` if any length is zero or
    /// negative, or if the total cell count overflows `usize`. An empty
    /// `lengths` slice yields the 0-dimensional space.
    pub fn new(lengths: &[i32]) -> Result<Self, GridError> {
        if let Some((axis, &len)) = lengths.iter().enumerate().find(|(_, len)| **len <= 0) {
            return Err(GridError::InvalidDimensions {
                lengths: lengths.to_vec(),
                reason: format!("axis {axis} has length {len}, must be positive"),
            });
        }
        if lengths.is_empty() {
            return Ok(Self {
                lengths: Vec::new(),
                strides: Vec::new(),
                cell_count: 0,
            });
        }

        let n = lengths.len();
        let mut strides = vec![1usize; n];
        let mut cell_count: usize = 1;
        for i in (0..n).rev() {
            strides[i] = cell_count;
            cell_count = cell_count.checked_mul(lengths[i] as usize).ok_or_else(|| {
                GridError::InvalidDimensions {
                    lengths: lengths.to_vec(),
                    reason: "total cell count overflows usize".to_string(),
                }
            })?;
        }

        Ok(Self {
            lengths: lengths.to_vec(),
            strides,
            cell_count,
        })
    }

    /// Per-axis lengths, axis 0 first.
    pub fn lengths(&self) -> &[i32] {
        &self.lengths
    }

    /// Number of axes.
    pub fn ndim(&self) -> usize {
        self.lengths.len()
    }

    /// Total number of cells (0 for the 0-dimensional space).
    pub fn cell_count(&self) -> usize {
        self.cell_count
    }

    /// Returns `true` if the orthotope has no cells.
    pub fn is_empty(&self) -> bool {
        self.cell_count == 0
    }

    /// Human-readable description of the valid coordinate range.
    pub fn bounds(&self) -> String {
        if self.lengths.is_empty() {
            return "0-dimensional space has no cells".to_string();
        }
        self.lengths
            .iter()
            .map(|len| format!("[0, {len})"))
            .collect::<Vec<_>>()
            .join(" x ")
    }

    /// Returns `true` if `coord` names a cell of this orthotope.
    pub fn contains(&self, coord: &[i32]) -> bool {
        self.rank(coord).is_some()
    }

    /// Position of `coord` in canonical order, or `None` if it has the
    /// wrong arity or lies outside the orthotope.
    pub fn rank(&self, coord: &[i32]) -> Option<usize> {
        if self.lengths.is_empty() || coord.len() != self.lengths.len() {
            return None;
        }
        let mut rank = 0usize;
        for ((&c, &len), &stride) in coord.iter().zip(&self.lengths).zip(&self.strides) {
            if c < 0 || c >= len {
                return None;
            }
            rank += c as usize * stride;
        }
        Some(rank)
    }

    /// Validate `coord` and return its rank.
    ///
    /// Returns `Err(GridError::OutOfBounds)` for a coordinate of the wrong
    /// arity or with any component outside its axis.
    pub fn check_bounds(&self, coord: &[i32]) -> Result<usize, GridError> {
        if let Some(rank) = self.rank(coord) {
            return Ok(rank);
        }
        let bounds = if !self.lengths.is_empty() && coord.len() != self.lengths.len() {
            format!(
                "expected {}D coordinate, got {}D",
                self.lengths.len(),
                coord.len()
            )
        } else {
            self.bounds()
        };
        Err(GridError::OutOfBounds {
            coord: Coord::from_slice(coord),
            bounds,
        })
    }

    /// Coordinate of the cell at `rank`, or `None` if `rank >= cell_count`.
    pub fn coord_of(&self, rank: usize) -> Option<Coord> {
        if rank >= self.cell_count {
            return None;
        }
        Some(
            (0..self.ndim())
                .map(|axis| self.axis_value(rank, axis))
                .collect(),
        )
    }

    /// Component of the cell at `rank` along `axis`.
    ///
    /// `rank` must be below `cell_count` and `axis` below `ndim`.
    pub fn axis_value(&self, rank: usize, axis: usize) -> i32 {
        debug_assert!(rank < self.cell_count && axis < self.ndim());
        ((rank / self.strides[axis]) % self.lengths[axis] as usize) as i32
    }

    /// In-bounds axis-aligned neighbours of `coord`.
    ///
    /// For each axis in order, the decremented neighbour comes before the
    /// incremented one; neighbours outside the orthotope are dropped, so a
    /// cell has between 0 and `2 * ndim` neighbours.
    ///
    /// Returns `Err(GridError::OutOfBounds)` if `coord` itself is invalid.
    pub fn neighbours(&self, coord: &[i32]) -> Result<SmallVec<[Coord; 8]>, GridError> {
        self.check_bounds(coord)?;
        let mut out = SmallVec::new();
        for (axis, &len) in self.lengths.iter().enumerate() {
            for delta in [-1, 1] {
                let v = coord[axis] + delta;
                if v >= 0 && v < len {
                    let mut nb = Coord::from_slice(coord);
                    nb[axis] = v;
                    out.push(nb);
                }
            }
        }
        Ok(out)
    }

    /// Ranks of the in-bounds neighbours of the cell at `rank`, in the same
    /// order as [`neighbours`](Self::neighbours).
    ///
    /// Yields nothing for a rank outside the orthotope.
    pub fn neighbour_ranks(&self, rank: usize) -> NeighbourRanks<'_> {
        NeighbourRanks {
            shape: self,
            rank,
            axis: if rank < self.cell_count { 0 } else { self.ndim() },
            upper: false,
        }
    }

    /// All cells in canonical order: `[0, .., 0], [0, .., 1], ...`.
    pub fn canonical_ordering(&self) -> Vec<Coord> {
        (0..self.cell_count)
            .filter_map(|rank| self.coord_of(rank))
            .collect()
    }
}

/// Iterator over neighbour ranks, returned by [`Orthotope::neighbour_ranks`].
///
/// Works purely on stride arithmetic; no coordinate is materialised.
#[derive(Clone, Debug)]
pub struct NeighbourRanks<'a> {
    shape: &'a Orthotope,
    rank: usize,
    axis: usize,
    upper: bool,
}

impl Iterator for NeighbourRanks<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        while self.axis < self.shape.ndim() {
            let stride = self.shape.strides[self.axis];
            let pos = self.shape.axis_value(self.rank, self.axis);
            let len = self.shape.lengths[self.axis];
            let upper = self.upper;
            if upper {
                self.axis += 1;
                self.upper = false;
                if pos + 1 < len {
                    return Some(self.rank + stride);
                }
            } else {
                self.upper = true;
                if pos > 0 {
                    return Some(self.rank - stride);
                }
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = 2 * (self.shape.ndim() - self.axis) - usize::from(self.upper);
        (0, Some(remaining))
    }
}
