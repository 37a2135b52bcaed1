//! Joins neighbouring cells whose members come within the cell size.

use geo::{Coord, Distance, Euclidean, Point};
use itertools::iproduct;
use log::trace;
use petgraph::unionfind::UnionFind;
use rstar::RTree;

use crate::cluster::grid::{Cell, GridIndex, forward_neighbours};

/// Cell pairs with more candidate pairs than this are searched through an
/// R-tree instead of pairwise.
pub const PAIRWISE_LIMIT: usize = 256;

// Widens the boundary filter so rounding in `floor(x / cell)` never drops a
// member that is within reach.
const BOUNDARY_SLACK: f64 = 1e-9;

/// Unions occupied cells of a [`GridIndex`] into connected components.
///
/// Two cells are joined when they are eight-neighbours and at least one pair
/// of their members lies within `cell_size` (Euclidean, inclusive). Features
/// sharing a cell are always in the same component.
///
/// Only members within reach of the neighbouring cell are compared. When both
/// sides are still dense, the larger is bulk-loaded into an R-tree and each
/// member of the smaller asks for its nearest neighbour, keeping a cell pair at
/// `O((a + b) log(a + b))` rather than `O(a * b)`.
pub struct CellMerger<'a> {
    grid: &'a GridIndex,
    coords: &'a [Coord],
    union: UnionFind<usize>,
    merges: usize,
    distance_checks: usize,
}

impl<'a> CellMerger<'a> {
    pub fn new(grid: &'a GridIndex, coords: &'a [Coord]) -> Self {
        CellMerger {
            grid,
            coords,
            union: UnionFind::new(grid.len()),
            merges: 0,
            distance_checks: 0,
        }
    }

    /// Members of a cell close enough to the square of `towards` to have a
    /// partner there.
    fn reaching(&self, members: &[usize], (col, row): Cell) -> Vec<[f64; 2]> {
        let size = self.grid.cell_size();
        let reach = size * (1.0 + BOUNDARY_SLACK);
        let (min_x, min_y) = (col as f64 * size, row as f64 * size);
        let (max_x, max_y) = (min_x + size, min_y + size);

        members
            .iter()
            .map(|&index| self.coords[index])
            .filter(|coord| {
                let dx = (min_x - coord.x).max(coord.x - max_x).max(0.0);
                let dy = (min_y - coord.y).max(coord.y - max_y).max(0.0);
                dx.hypot(dy) <= reach
            })
            .map(|coord| [coord.x, coord.y])
            .collect()
    }

    fn within(
        &mut self,
        (cell, members): (Cell, &[usize]),
        (other, others): (Cell, &[usize]),
    ) -> bool {
        let lhs = self.reaching(members, other);
        let rhs = self.reaching(others, cell);

        if lhs.is_empty() || rhs.is_empty() {
            return false;
        }

        let threshold = self.grid.cell_size();
        let close = |a: &[f64; 2], b: &[f64; 2]| {
            Euclidean.distance(Point::new(a[0], a[1]), Point::new(b[0], b[1])) <= threshold
        };

        let mut checks = 0;
        let found = if lhs.len() * rhs.len() <= PAIRWISE_LIMIT {
            iproduct!(&lhs, &rhs).any(|(a, b)| {
                checks += 1;
                close(a, b)
            })
        } else {
            let (queries, indexed) = if lhs.len() <= rhs.len() {
                (lhs, rhs)
            } else {
                (rhs, lhs)
            };

            let tree = RTree::bulk_load(indexed);
            queries.iter().any(|query| {
                checks += 1;
                tree.nearest_neighbor(query)
                    .is_some_and(|nearest| close(query, nearest))
            })
        };

        self.distance_checks += checks;
        found
    }

    /// Visits every occupied cell once, joining it with each close forward
    /// neighbour.
    pub fn join(&mut self) {
        let grid = self.grid;

        for (slot, cell, members) in grid.iter() {
            for neighbour in forward_neighbours(*cell) {
                let Some(other) = grid.position(&neighbour) else {
                    continue;
                };

                if self.union.equiv(slot, other) {
                    continue;
                }

                if self.within((*cell, members), (neighbour, grid.members(other))) {
                    trace!("Merging cell {cell:?} with {neighbour:?}");
                    self.union.union(slot, other);
                    self.merges += 1;
                }
            }
        }

        trace!(
            "Merged {} cell pairs over {} cells in {} distance checks",
            self.merges,
            self.grid.len(),
            self.distance_checks
        );
    }

    /// Distances computed so far, one per pairwise test or nearest-neighbour
    /// query.
    pub fn distance_checks(&self) -> usize {
        self.distance_checks
    }

    /// Component label per cell slot. Slots with equal labels belong to the
    /// same cluster.
    pub fn into_labels(self) -> Vec<usize> {
        self.union.into_labeling()
    }

    /// Joins every cell, returning the labels of [`CellMerger::into_labels`].
    pub fn merge(mut self) -> Vec<usize> {
        self.join();
        self.into_labels()
    }
}
