//! Buckets projected coordinates into square cells.

use geo::Coord;
use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use smallvec::SmallVec;

use crate::cluster::error::ClusterError;

/// Integer `(column, row)` of a grid cell.
pub type Cell = (i64, i64);

/// Feature indices held by one cell, in insertion order.
pub type Members = SmallVec<[usize; 4]>;

/// Offsets to the neighbours "after" a cell. Visiting these from every cell
/// covers each of the eight-neighbour pairs exactly once.
pub const FORWARD_NEIGHBOURS: [Cell; 4] = [(1, -1), (1, 0), (1, 1), (0, 1)];

/// Largest cell index magnitude. Up to 2^53 every index is an exact `f64`
/// integer, so neighbouring cells never collapse into one.
pub const MAX_CELL_INDEX: f64 = 9_007_199_254_740_992.0;

#[inline]
fn cell_index(ordinate: f64, cell_size: f64) -> Option<i64> {
    let index = (ordinate / cell_size).floor();
    (index.abs() <= MAX_CELL_INDEX).then_some(index as i64)
}

/// A square grid over the projected plane.
///
/// Cells are stored in the order they were first occupied, and each cell keeps
/// its feature indices in the order they were pushed. Both orders are what
/// makes clustering output reproducible.
#[derive(Debug, Clone)]
pub struct GridIndex {
    cell_size: f64,
    cells: IndexMap<Cell, Members, FxBuildHasher>,

    // feature index -> cell slot
    slots: Vec<usize>,
}

impl GridIndex {
    pub fn new(cell_size: f64) -> Self {
        GridIndex {
            cell_size,
            cells: IndexMap::default(),
            slots: Vec::new(),
        }
    }

    /// Buckets every coordinate; feature `i` is `coords[i]`.
    ///
    /// Fails when a coordinate is too far from the origin, relative to
    /// `cell_size`, for its cell to be told apart from the next one.
    pub fn build(coords: &[Coord], cell_size: f64) -> Result<Self, ClusterError> {
        let mut grid = GridIndex {
            cell_size,
            cells: IndexMap::with_capacity_and_hasher(coords.len(), FxBuildHasher),
            slots: Vec::with_capacity(coords.len()),
        };

        for coord in coords {
            grid.push(*coord)?;
        }

        Ok(grid)
    }

    /// The cell a coordinate falls in: `floor(ordinate / cell_size)` on each
    /// axis, or `None` once either index leaves [`MAX_CELL_INDEX`].
    #[inline]
    pub fn cell_of(&self, coord: Coord) -> Option<Cell> {
        Some((
            cell_index(coord.x, self.cell_size)?,
            cell_index(coord.y, self.cell_size)?,
        ))
    }

    /// Adds the next feature, returning the slot of the cell it landed in.
    pub fn push(&mut self, coord: Coord) -> Result<usize, ClusterError> {
        let cell = self.cell_of(coord).ok_or_else(|| {
            ClusterError::InvalidParameter(format!(
                "({}, {}) is too far from the origin for cells of {} units",
                coord.x, coord.y, self.cell_size
            ))
        })?;

        let index = self.slots.len();
        let entry = self.cells.entry(cell);
        let slot = entry.index();

        entry.or_default().push(index);
        self.slots.push(slot);
        Ok(slot)
    }

    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Number of occupied cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of features pushed.
    pub fn feature_count(&self) -> usize {
        self.slots.len()
    }

    /// Slot of the cell holding feature `index`.
    #[inline]
    pub fn slot_of(&self, index: usize) -> usize {
        self.slots[index]
    }

    #[inline]
    pub fn position(&self, cell: &Cell) -> Option<usize> {
        self.cells.get_index_of(cell)
    }

    pub fn cell(&self, slot: usize) -> Option<Cell> {
        self.cells.get_index(slot).map(|(cell, _)| *cell)
    }

    pub fn members(&self, slot: usize) -> &[usize] {
        self.cells
            .get_index(slot)
            .map(|(_, members)| members.as_slice())
            .unwrap_or(&[])
    }

    /// `(slot, cell, members)` in first-occupied order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Cell, &[usize])> {
        self.cells
            .iter()
            .enumerate()
            .map(|(slot, (cell, members))| (slot, cell, members.as_slice()))
    }
}

/// The forward neighbours of `cell`. Offsets that would overflow are skipped.
pub fn forward_neighbours((col, row): Cell) -> impl Iterator<Item = Cell> {
    FORWARD_NEIGHBOURS
        .into_iter()
        .filter_map(move |(dc, dr)| Some((col.checked_add(dc)?, row.checked_add(dr)?)))
}

/// True when the two cells touch, diagonals included, or are the same cell.
pub fn adjacent(lhs: Cell, rhs: Cell) -> bool {
    (lhs.0 - rhs.0).abs() <= 1 && (lhs.1 - rhs.1).abs() <= 1
}
