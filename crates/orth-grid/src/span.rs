//! Spanning-path detection.
//!
//! A grid spans when one connected cluster of bridges (axis-aligned
//! adjacency) touches both the `x_0 = 0` and `x_0 = lengths[0] - 1` faces.
//! The check is a connected-components sweep: each bridge is visited at
//! most once across all BFS seeds, so the cost is linear in the number of
//! bridges plus the `2 * ndim` edges examined per bridge.

use crate::grid::{CellState, Grid};
use orth_core::{Coord, GridError};
use std::collections::VecDeque;

/// How far a search should go once a spanning cluster is found.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Stop {
    /// Return as soon as both faces are touched.
    FirstTouch,
    /// Finish exploring the spanning cluster and return its ranks.
    WholeCluster,
}

impl Grid {
    /// Whether a connected cluster of bridges touches both faces of axis 0.
    ///
    /// A grid without bridges never spans. When `lengths[0] == 1` both faces
    /// coincide, so any single bridge spans.
    ///
    /// Returns `Err(GridError::CorruptState)` if the search meets a cell that
    /// breaks the partition invariant.
    pub fn is_spanning(&self) -> Result<bool, GridError> {
        Ok(self.search(Stop::FirstTouch)?.is_some())
    }

    /// Cells of the first spanning cluster found, in canonical order, or
    /// `None` if the grid does not span.
    pub fn spanning_cluster(&self) -> Result<Option<Vec<Coord>>, GridError> {
        let Some(ranks) = self.search(Stop::WholeCluster)? else {
            return Ok(None);
        };
        Ok(Some(
            ranks
                .into_iter()
                .filter_map(|rank| self.shape().coord_of(rank))
                .collect(),
        ))
    }

    fn search(&self, stop: Stop) -> Result<Option<Vec<usize>>, GridError> {
        let n = self.cell_count();
        if n == 0 {
            return Ok(None);
        }
        let shape = self.shape();
        let far_face = shape.lengths()[0] - 1;

        let mut visited = vec![false; n];
        let mut queue = VecDeque::new();
        let mut cluster = Vec::new();

        for seed in 0..n {
            if visited[seed] || self.flag(seed) != CellState::Bridge {
                continue;
            }
            if !self.membership(seed)? {
                continue;
            }

            let (mut near, mut far) = (false, false);
            cluster.clear();
            queue.clear();
            queue.push_back(seed);

            while let Some(rank) = queue.pop_front() {
                if visited[rank] {
                    continue;
                }
                visited[rank] = true;
                cluster.push(rank);

                let x0 = shape.axis_value(rank, 0);
                near |= x0 == 0;
                far |= x0 == far_face;
                if near && far && stop == Stop::FirstTouch {
                    return Ok(Some(Vec::new()));
                }

                for nb in shape.neighbour_ranks(rank) {
                    if !visited[nb] && self.membership(nb)? {
                        queue.push_back(nb);
                    }
                }
            }

            if near && far {
                cluster.sort_unstable();
                return Ok(Some(cluster));
            }
        }
        Ok(None)
    }
}
